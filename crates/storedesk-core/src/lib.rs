//! # storedesk-core: List Engine for Storedesk
//!
//! Everything the order and product list views compute, as pure functions
//! over owned data. No I/O, no clocks except the date-parse fallback, no
//! logging.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storedesk Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/storedesk (ListSession)                    │   │
//! │  │   set_filter_state, set_page, toggle_selection, bulk_apply ...  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storedesk-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   date ──► filter ──► pipeline ──► pagination                   │   │
//! │  │                                                                 │   │
//! │  │   selection ──► bulk            export         validation       │   │
//! │  │                                                                 │   │
//! │  │   types: Order, Product      record: Record, Collection         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │                 storedesk-data (RecordProvider)                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Order, Product and their status enums
//! - [`record`] - The `Record` trait and versioned `Collection`
//! - [`date`] - Order date-text parsing
//! - [`filter`] - Search, tab and date-range predicates
//! - [`pipeline`] - Memoized filter composition
//! - [`pagination`] - Page slicing and the page-number strip
//! - [`selection`] - Selected-id set
//! - [`bulk`] - Bulk transforms and deletion
//! - [`export`] - CSV rendering
//! - [`validation`] - Single-record edit rules
//!
//! ## Example Usage
//!
//! ```rust
//! use storedesk_core::filter::FilterState;
//! use storedesk_core::pagination::paginate;
//! use storedesk_core::pipeline::FilterPipeline;
//! use storedesk_core::record::Collection;
//! use storedesk_core::types::Order;
//!
//! let orders: Collection<Order> = Collection::new(Vec::new());
//! let mut pipeline = FilterPipeline::new();
//!
//! let filtered = pipeline.run(&orders, &FilterState::default().with_tab("closed"));
//! let page = paginate(&filtered[..], 1, 6);
//! assert!(page.items.is_empty());
//! assert_eq!(page.total_pages, 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bulk;
pub mod date;
pub mod error;
pub mod export;
pub mod filter;
pub mod money;
pub mod pagination;
pub mod pipeline;
pub mod record;
pub mod selection;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::{DateRange, FilterState, TabId};
pub use money::Money;
pub use record::{Collection, Record, RecordKind};
pub use selection::SelectionSet;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Rows per page in the order list.
pub const ORDERS_PER_PAGE: usize = 6;

/// Rows per page in the product list.
pub const PRODUCTS_PER_PAGE: usize = 7;

/// Currency assumed for products that do not name one.
pub const DEFAULT_CURRENCY: &str = "NPR";
