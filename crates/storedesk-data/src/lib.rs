//! # storedesk-data: Record Provider for Storedesk
//!
//! Supplies the order and product lists with their records.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storedesk Data Flow                              │
//! │                                                                         │
//! │  ListSession::mount / refresh                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  storedesk-data (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────────┐          ┌────────────────────┐        │   │
//! │  │   │  RecordProvider<R> │◄─────────│  MockProvider<R>   │        │   │
//! │  │   │  (provider.rs)     │  impl    │  records + latency │        │   │
//! │  │   └────────────────────┘          └─────────┬──────────┘        │   │
//! │  │                                             │                   │   │
//! │  │                                   ┌─────────▼──────────┐        │   │
//! │  │                                   │  seed.rs           │        │   │
//! │  │                                   │  8 orders, 12 prod │        │   │
//! │  │                                   └────────────────────┘        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::time::Duration;
//! use storedesk_data::{MockProvider, RecordProvider};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let provider = MockProvider::orders(Duration::ZERO);
//! let orders = provider.load_all().await;
//! assert_eq!(orders.len(), 8);
//! # });
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod provider;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use provider::{MockProvider, RecordProvider};
pub use seed::{generate_orders, seed_orders, seed_products};
