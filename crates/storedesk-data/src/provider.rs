//! # Record Provider
//!
//! The seam between list sessions and wherever records come from.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  session.mount(&provider)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  provider.load_all().await                                              │
//! │       │   sleep(latency)   ← stands in for a network round trip         │
//! │       ▼                                                                 │
//! │  Vec<R>  (never fails)                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::future::Future;
use std::time::Duration;

use storedesk_core::{Order, Product, Record};
use tracing::{debug, info};

use crate::seed::{seed_orders, seed_products};

/// Source of a full record set for one list view.
pub trait RecordProvider<R> {
    /// Loads every record. Simulated sources never fail.
    fn load_all(&self) -> impl Future<Output = Vec<R>> + Send;
}

/// In-memory provider that answers after a fixed delay.
#[derive(Debug, Clone)]
pub struct MockProvider<R> {
    records: Vec<R>,
    latency: Duration,
}

impl<R> MockProvider<R> {
    pub fn new(records: Vec<R>, latency: Duration) -> Self {
        MockProvider { records, latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl MockProvider<Order> {
    /// The eight seed orders.
    pub fn orders(latency: Duration) -> Self {
        Self::new(seed_orders(), latency)
    }
}

impl MockProvider<Product> {
    /// The seed product catalogue.
    pub fn products(latency: Duration) -> Self {
        Self::new(seed_products(), latency)
    }
}

impl<R> RecordProvider<R> for MockProvider<R>
where
    R: Record + Send + Sync,
{
    async fn load_all(&self) -> Vec<R> {
        debug!(
            kind = %R::KIND,
            latency_ms = self.latency.as_millis() as u64,
            "Loading records"
        );
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        info!(kind = %R::KIND, count = self.records.len(), "Records loaded");
        self.records.clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_load_waits_for_latency() {
        let provider = MockProvider::orders(Duration::from_millis(300));
        let started = Instant::now();
        let orders = provider.load_all().await;
        assert_eq!(started.elapsed(), Duration::from_millis(300));
        assert_eq!(orders.len(), 8);
        assert_eq!(orders[0].id, "#1002");
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_latency_is_immediate() {
        let provider = MockProvider::products(Duration::ZERO);
        let started = Instant::now();
        let products = provider.load_all().await;
        assert_eq!(started.elapsed(), Duration::ZERO);
        assert!(!products.is_empty());
    }

    #[tokio::test]
    async fn test_custom_records() {
        let provider = MockProvider::new(Vec::<Order>::new(), Duration::ZERO);
        assert!(provider.load_all().await.is_empty());
        assert_eq!(provider.latency(), Duration::ZERO);
    }
}
