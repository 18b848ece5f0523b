//! # Records and Collections
//!
//! The list engine is generic over the [`Record`] trait so that the same
//! filter, page, select, bulk and export code drives both the order list and
//! the product list.
//!
//! ## Versioning
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Collection<R>                                                          │
//! │                                                                         │
//! │    records: Vec<R>        (insertion order preserved)                   │
//! │    version: u64           (fresh value after every mutation)            │
//! │                                                                         │
//! │  replace_all / remove / replace / retain / map_matching                 │
//! │        │                                                                │
//! │        └──► version = NEXT_VERSION.fetch_add(1)                         │
//! │                                                                         │
//! │  The filter pipeline memoizes on (version, FilterState), so a changed   │
//! │  version is the only signal it needs to recompute.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Versions come from a process-wide counter, so two distinct collections
//! never share a version either.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::filter::TabId;

static NEXT_VERSION: AtomicU64 = AtomicU64::new(1);

fn next_version() -> u64 {
    NEXT_VERSION.fetch_add(1, Ordering::Relaxed)
}

// =============================================================================
// Record Kind
// =============================================================================

/// Which list a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Orders,
    Products,
}

impl RecordKind {
    /// Plural lowercase name, used in export filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Orders => "orders",
            RecordKind::Products => "products",
        }
    }

    /// Singular title-case name, used in notices and errors.
    pub fn singular(&self) -> &'static str {
        match self {
            RecordKind::Orders => "Order",
            RecordKind::Products => "Product",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Record Trait
// =============================================================================

/// A row in one of the list views.
pub trait Record: Clone {
    const KIND: RecordKind;

    /// Export key of the identifier field. Always exported.
    const ID_FIELD: &'static str;

    /// Every exportable field key, in column order.
    const FIELDS: &'static [&'static str];

    /// Unique key within the collection.
    fn id(&self) -> &str;

    /// Text fields the search term is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Status-tab predicate. Records without tab semantics pass every tab.
    fn matches_tab(&self, _tab: &TabId) -> bool {
        true
    }

    /// Placement time used by the date-range filter. `None` passes every range.
    fn timestamp(&self) -> Option<NaiveDateTime> {
        None
    }

    /// Stringified value of an export field, `None` for unknown keys.
    fn field_value(&self, field: &str) -> Option<String>;

    /// Derived display values a row renders beside its raw fields, such as
    /// a badge label or an icon key.
    fn display_hints(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

// =============================================================================
// Collection
// =============================================================================

/// The authoritative record list held by a session.
#[derive(Debug, Clone)]
pub struct Collection<R> {
    records: Vec<R>,
    version: u64,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            version: next_version(),
        }
    }
}

impl<R: Record> Collection<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records,
            version: next_version(),
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Ids in collection order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(Record::id)
    }

    /// Swaps in a freshly loaded record set.
    pub fn replace_all(&mut self, records: Vec<R>) {
        self.records = records;
        self.bump();
    }

    /// Removes the record with `id`, returning it if present.
    pub fn remove(&mut self, id: &str) -> Option<R> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        let removed = self.records.remove(index);
        self.bump();
        Some(removed)
    }

    /// Replaces the record sharing `record`'s id in place.
    ///
    /// Returns `false` (and leaves the version untouched) when no record has
    /// that id.
    pub fn replace(&mut self, record: R) -> bool {
        match self.records.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                self.bump();
                true
            }
            None => false,
        }
    }

    /// Keeps only records for which `keep` returns true. Returns the number
    /// removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&R) -> bool,
    {
        let before = self.records.len();
        self.records.retain(|r| keep(r));
        let removed = before - self.records.len();
        if removed > 0 {
            self.bump();
        }
        removed
    }

    /// Rewrites every record whose id satisfies `select`. Returns the number
    /// rewritten; the version only moves when that is non-zero.
    pub fn map_matching<S, F>(&mut self, mut select: S, mut rewrite: F) -> usize
    where
        S: FnMut(&str) -> bool,
        F: FnMut(&R) -> R,
    {
        let mut count = 0;
        for slot in self.records.iter_mut() {
            if select(slot.id()) {
                *slot = rewrite(slot);
                count += 1;
            }
        }
        if count > 0 {
            self.bump();
        }
        count
    }

    fn bump(&mut self) {
        self.version = next_version();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{DeliveryStatus, Order, PaymentStatus};

    fn order(id: &str) -> Order {
        Order {
            id: id.to_string(),
            date: "23 Jan, 2025 10:30 AM".to_string(),
            customer: "Wade Warren".to_string(),
            email: "wade@example.com".to_string(),
            payment: PaymentStatus::Pending,
            total: Money::from_cents(2000),
            delivery: DeliveryStatus::NotApplicable,
            items: 2,
            payment_method: "Visa".to_string(),
            shipping_address: "123 Main St".to_string(),
        }
    }

    #[test]
    fn test_versions_are_unique_across_collections() {
        let a = Collection::new(vec![order("#1")]);
        let b = Collection::new(vec![order("#1")]);
        assert_ne!(a.version(), b.version());
    }

    #[test]
    fn test_mutations_bump_version() {
        let mut c = Collection::new(vec![order("#1"), order("#2")]);
        let v0 = c.version();

        assert!(c.remove("#1").is_some());
        let v1 = c.version();
        assert_ne!(v0, v1);

        let mut edited = order("#2");
        edited.customer = "Someone Else".to_string();
        assert!(c.replace(edited));
        assert_ne!(v1, c.version());
        assert_eq!(c.get("#2").map(|o| o.customer.as_str()), Some("Someone Else"));
    }

    #[test]
    fn test_noop_mutations_keep_version() {
        let mut c = Collection::new(vec![order("#1")]);
        let v0 = c.version();

        assert!(c.remove("#missing").is_none());
        assert!(!c.replace(order("#missing")));
        assert_eq!(c.retain(|_| true), 0);
        assert_eq!(c.map_matching(|_| false, Clone::clone), 0);
        assert_eq!(c.version(), v0);
    }

    #[test]
    fn test_map_matching_preserves_order() {
        let mut c = Collection::new(vec![order("#1"), order("#2"), order("#3")]);
        let count = c.map_matching(
            |id| id != "#2",
            |o| Order {
                delivery: DeliveryStatus::Shipped,
                ..o.clone()
            },
        );
        assert_eq!(count, 2);
        let ids: Vec<&str> = c.ids().collect();
        assert_eq!(ids, vec!["#1", "#2", "#3"]);
        assert_eq!(c.records()[1].delivery, DeliveryStatus::NotApplicable);
        assert_eq!(c.records()[2].delivery, DeliveryStatus::Shipped);
    }

    #[test]
    fn test_record_kind_names() {
        assert_eq!(RecordKind::Orders.as_str(), "orders");
        assert_eq!(RecordKind::Products.singular(), "Product");
    }
}
