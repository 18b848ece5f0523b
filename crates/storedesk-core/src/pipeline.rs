//! # Filter Pipeline
//!
//! Combines the predicates in a fixed order and memoizes the result.
//!
//! ```text
//!   Collection ──► search ──► tab ──► date range ──► Arc<[R]>
//!                                                      │
//!   memo key: (collection.version, FilterState) ───────┘
//! ```
//!
//! A hit on the memo returns a clone of the same `Arc`, so callers can detect
//! "nothing changed" with `Arc::ptr_eq`.

use std::sync::Arc;

use crate::filter::{matches_date_range, matches_search, matches_tab, FilterState};
use crate::record::{Collection, Record};

/// Runs search, then tab, then date range over `records`, preserving order.
pub fn apply_filters<R: Record>(records: &[R], filter: &FilterState) -> Vec<R> {
    records
        .iter()
        .filter(|r| matches_search(*r, &filter.search_term))
        .filter(|r| matches_tab(*r, &filter.tab))
        .filter(|r| matches_date_range(*r, filter.date_range.as_ref()))
        .cloned()
        .collect()
}

/// Memoizing wrapper around [`apply_filters`].
#[derive(Debug)]
pub struct FilterPipeline<R> {
    memo: Option<Memo<R>>,
}

#[derive(Debug)]
struct Memo<R> {
    version: u64,
    filter: FilterState,
    result: Arc<[R]>,
}

impl<R> Default for FilterPipeline<R> {
    fn default() -> Self {
        Self { memo: None }
    }
}

impl<R: Record> FilterPipeline<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the filtered view, recomputing only when the collection
    /// version or the filter state differs from the last call.
    pub fn run(&mut self, collection: &Collection<R>, filter: &FilterState) -> Arc<[R]> {
        if let Some(memo) = &self.memo {
            if memo.version == collection.version() && memo.filter == *filter {
                return Arc::clone(&memo.result);
            }
        }

        let result: Arc<[R]> = apply_filters(collection.records(), filter).into();
        self.memo = Some(Memo {
            version: collection.version(),
            filter: filter.clone(),
            result: Arc::clone(&result),
        });
        result
    }

    /// Drops the memo so the next run recomputes.
    pub fn invalidate(&mut self) {
        self.memo = None;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{DateRange, TabId};
    use crate::money::Money;
    use crate::types::{DeliveryStatus, Order, PaymentStatus};
    use chrono::NaiveDate;

    fn order(id: &str, customer: &str, payment: PaymentStatus, delivery: DeliveryStatus, date: &str) -> Order {
        Order {
            id: id.to_string(),
            date: date.to_string(),
            customer: customer.to_string(),
            email: format!("{}@example.com", customer.to_lowercase()),
            payment,
            total: Money::from_cents(1000),
            delivery,
            items: 1,
            payment_method: "COD".to_string(),
            shipping_address: "Kathmandu".to_string(),
        }
    }

    fn sample() -> Collection<Order> {
        Collection::new(vec![
            order("#1002", "Wade", PaymentStatus::Pending, DeliveryStatus::NotApplicable, "23 Jan, 2025 10:30 AM"),
            order("#1005", "John", PaymentStatus::Success, DeliveryStatus::Delivered, "7 Sep, 2025 09:45 AM"),
            order("#1008", "Emily", PaymentStatus::Success, DeliveryStatus::Delivered, "3 Apr, 2025 03:45 PM"),
            order("#1009", "Michael", PaymentStatus::Pending, DeliveryStatus::Processing, "19 Dec, 2025 01:30 PM"),
        ])
    }

    fn ids(records: &[Order]) -> Vec<&str> {
        records.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_default_filter_keeps_everything_in_order() {
        let c = sample();
        let out = apply_filters(c.records(), &FilterState::default());
        assert_eq!(ids(&out), vec!["#1002", "#1005", "#1008", "#1009"]);
    }

    #[test]
    fn test_predicates_compose() {
        let c = sample();
        let filter = FilterState::default()
            .with_tab(TabId::Closed)
            .with_date_range(DateRange::new(
                NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
            ));
        let out = apply_filters(c.records(), &filter);
        assert_eq!(ids(&out), vec!["#1008"]);

        let filter = FilterState::default().with_search("mich").with_tab("unpaid");
        let out = apply_filters(c.records(), &filter);
        assert_eq!(ids(&out), vec!["#1009"]);
    }

    #[test]
    fn test_memo_returns_same_arc() {
        let c = sample();
        let mut pipeline = FilterPipeline::new();
        let filter = FilterState::default().with_tab("closed");

        let first = pipeline.run(&c, &filter);
        let second = pipeline.run(&c, &filter.clone());
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_memo_recomputes_on_change() {
        let mut c = sample();
        let mut pipeline = FilterPipeline::new();
        let filter = FilterState::default();

        let first = pipeline.run(&c, &filter);
        let narrowed = pipeline.run(&c, &filter.clone().with_search("wade"));
        assert!(!Arc::ptr_eq(&first, &narrowed));
        assert_eq!(narrowed.len(), 1);

        c.remove("#1002");
        let after = pipeline.run(&c, &filter.clone().with_search("wade"));
        assert!(!Arc::ptr_eq(&narrowed, &after));
        assert!(after.is_empty());
    }

    #[test]
    fn test_invalidate_forces_recompute() {
        let c = sample();
        let mut pipeline = FilterPipeline::new();
        let filter = FilterState::default();
        let first = pipeline.run(&c, &filter);
        pipeline.invalidate();
        let second = pipeline.run(&c, &filter);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), second.len());
    }
}
