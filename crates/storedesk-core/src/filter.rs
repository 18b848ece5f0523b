//! # Predicate Filters
//!
//! Three independent predicates narrow a list view:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FilterState                                                            │
//! │                                                                         │
//! │   search_term ──► matches_search     substring, case-insensitive        │
//! │   tab         ──► Record::matches_tab  status preset (orders only)      │
//! │   date_range  ──► matches_date_range inclusive day bounds               │
//! │                                                                         │
//! │  Every predicate fails OPEN: empty term, unknown tab, half-open range   │
//! │  and undated records all pass.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::record::Record;
use crate::types::{DeliveryStatus, Order, PaymentStatus};

// =============================================================================
// Tab Id
// =============================================================================

/// Status preset selected in the list header.
///
/// Unknown ids are kept verbatim in [`TabId::Other`] and admit every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TabId {
    #[default]
    All,
    Unfulfilled,
    Unpaid,
    Open,
    Closed,
    Other(String),
}

impl TabId {
    pub fn as_str(&self) -> &str {
        match self {
            TabId::All => "all",
            TabId::Unfulfilled => "unfulfilled",
            TabId::Unpaid => "unpaid",
            TabId::Open => "open",
            TabId::Closed => "closed",
            TabId::Other(raw) => raw,
        }
    }

    /// Tab predicate for orders.
    pub fn admits(&self, order: &Order) -> bool {
        match self {
            TabId::All | TabId::Other(_) => true,
            TabId::Unfulfilled => matches!(
                order.delivery,
                DeliveryStatus::NotApplicable | DeliveryStatus::Processing
            ),
            TabId::Unpaid => order.payment == PaymentStatus::Pending,
            TabId::Open => {
                order.payment == PaymentStatus::Pending
                    || order.delivery != DeliveryStatus::Delivered
            }
            TabId::Closed => {
                order.payment == PaymentStatus::Success
                    && order.delivery == DeliveryStatus::Delivered
            }
        }
    }
}

impl From<&str> for TabId {
    fn from(raw: &str) -> Self {
        match raw {
            "all" => TabId::All,
            "unfulfilled" => TabId::Unfulfilled,
            "unpaid" => TabId::Unpaid,
            "open" => TabId::Open,
            "closed" => TabId::Closed,
            other => TabId::Other(other.to_string()),
        }
    }
}

impl From<String> for TabId {
    fn from(raw: String) -> Self {
        TabId::from(raw.as_str())
    }
}

impl From<TabId> for String {
    fn from(tab: TabId) -> Self {
        tab.as_str().to_string()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Date Range
// =============================================================================

/// Calendar-day range picked in the date filter.
///
/// Only active when both ends are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DateRange {
    #[ts(as = "Option<String>")]
    pub from: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// The "last N days" preset ending today.
    pub fn last_days(days: u32, today: NaiveDate) -> Self {
        Self::new(today - Duration::days(i64::from(days)), today)
    }

    /// Inclusive instant bounds: start of `from` and 23:59:59.999 on `to`.
    pub fn bounds(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let start = self.from?.and_hms_opt(0, 0, 0)?;
        let end = self.to?.and_hms_milli_opt(23, 59, 59, 999)?;
        Some((start, end))
    }

    pub fn is_active(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        match self.bounds() {
            Some((start, end)) => start <= instant && instant <= end,
            None => true,
        }
    }
}

// =============================================================================
// Filter State
// =============================================================================

/// Everything the pipeline needs to narrow a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    #[ts(as = "String")]
    pub tab: TabId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub date_range: Option<DateRange>,
}

impl FilterState {
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_tab(mut self, tab: impl Into<TabId>) -> Self {
        self.tab = tab.into();
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }
}

// =============================================================================
// Predicates
// =============================================================================

/// Case-insensitive substring match over the record's search fields.
///
/// The term is not trimmed; a single space only matches fields containing one.
pub fn matches_search<R: Record>(record: &R, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn matches_tab<R: Record>(record: &R, tab: &TabId) -> bool {
    record.matches_tab(tab)
}

pub fn matches_date_range<R: Record>(record: &R, range: Option<&DateRange>) -> bool {
    let Some(range) = range.filter(|r| r.is_active()) else {
        return true;
    };
    match record.timestamp() {
        Some(instant) => range.contains(instant),
        None => true,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{Price, Product, ProductStatus, Stock};

    fn order(id: &str, payment: PaymentStatus, delivery: DeliveryStatus, date: &str) -> Order {
        Order {
            id: id.to_string(),
            date: date.to_string(),
            customer: "Wade Warren".to_string(),
            email: "wade@example.com".to_string(),
            payment,
            total: Money::from_cents(2000),
            delivery,
            items: 2,
            payment_method: "Visa".to_string(),
            shipping_address: "123 Main St, San Francisco".to_string(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn all_statuses() -> Vec<Order> {
        let payments = [
            PaymentStatus::Pending,
            PaymentStatus::Success,
            PaymentStatus::Failed,
            PaymentStatus::Refunded,
        ];
        let deliveries = [
            DeliveryStatus::NotApplicable,
            DeliveryStatus::Processing,
            DeliveryStatus::Shipped,
            DeliveryStatus::Delivered,
        ];
        payments
            .iter()
            .flat_map(|p| {
                deliveries
                    .iter()
                    .map(move |d| order("#1", *p, *d, "23 Jan, 2025 10:30 AM"))
            })
            .collect()
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let o = order("#1002", PaymentStatus::Pending, DeliveryStatus::NotApplicable, "x");
        assert!(matches_search(&o, ""));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let o = order("#1002", PaymentStatus::Pending, DeliveryStatus::NotApplicable, "x");
        assert!(matches_search(&o, "WADE"));
        assert!(matches_search(&o, "san fran"));
        assert!(matches_search(&o, "#100"));
        assert!(!matches_search(&o, "pending"));
    }

    #[test]
    fn test_search_products_by_category_and_brand() {
        let p = Product {
            product_id: "PRD-7".to_string(),
            sku: "SKU-7".to_string(),
            name: "Trail Shoe".to_string(),
            description: "Grippy sole".to_string(),
            brand: Some(crate::types::Brand {
                id: "b1".to_string(),
                name: "Goldstar".to_string(),
            }),
            categories: vec!["Footwear".to_string()],
            sub_categories: vec!["Running".to_string()],
            price: Price {
                regular: Money::from_cents(350000),
                discounted: None,
                currency: "NPR".to_string(),
            },
            stock: Stock {
                quantity: 4,
                is_in_stock: true,
                low_stock_threshold: None,
            },
            status: ProductStatus::Active,
            created_at: "2025-02-01".to_string(),
        };
        assert!(matches_search(&p, "goldstar"));
        assert!(matches_search(&p, "running"));
        assert!(matches_search(&p, "grippy"));
        assert!(!matches_search(&p, "sandal"));
        assert!(matches_tab(&p, &TabId::Closed));
        let range = DateRange::new(day(2020, 1, 1), day(2020, 1, 2));
        assert!(matches_date_range(&p, Some(&range)));
    }

    #[test]
    fn test_closed_example() {
        let a = order("#1002", PaymentStatus::Pending, DeliveryStatus::NotApplicable, "x");
        let b = order("#1005", PaymentStatus::Success, DeliveryStatus::Delivered, "x");
        let orders = [a, b];
        let closed: Vec<&str> = orders
            .iter()
            .filter(|o| matches_tab(*o, &TabId::Closed))
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(closed, vec!["#1005"]);
    }

    #[test]
    fn test_open_and_closed_are_disjoint() {
        for o in all_statuses() {
            assert!(
                !(TabId::Open.admits(&o) && TabId::Closed.admits(&o)),
                "{:?}/{:?} is both open and closed",
                o.payment,
                o.delivery
            );
        }
    }

    #[test]
    fn test_tab_predicates() {
        let o = order("#1", PaymentStatus::Success, DeliveryStatus::Processing, "x");
        assert!(TabId::Unfulfilled.admits(&o));
        assert!(!TabId::Unpaid.admits(&o));
        assert!(TabId::Open.admits(&o));
        assert!(TabId::from("weird").admits(&o));
    }

    #[test]
    fn test_tab_round_trips_through_strings() {
        assert_eq!(TabId::from("closed"), TabId::Closed);
        assert_eq!(TabId::from("archived"), TabId::Other("archived".to_string()));
        let json = serde_json::to_string(&TabId::Unpaid).unwrap();
        assert_eq!(json, "\"unpaid\"");
        let parsed: TabId = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(parsed.as_str(), "archived");
    }

    #[test]
    fn test_date_range_is_inclusive_of_whole_days() {
        let range = DateRange::new(day(2025, 1, 23), day(2025, 1, 23));
        let early = order("#1", PaymentStatus::Pending, DeliveryStatus::Shipped, "23 Jan, 2025 12:00 AM");
        let late = order("#2", PaymentStatus::Pending, DeliveryStatus::Shipped, "23 Jan, 2025 11:59 PM");
        let next = order("#3", PaymentStatus::Pending, DeliveryStatus::Shipped, "24 Jan, 2025 12:00 AM");
        assert!(matches_date_range(&early, Some(&range)));
        assert!(matches_date_range(&late, Some(&range)));
        assert!(!matches_date_range(&next, Some(&range)));
    }

    #[test]
    fn test_half_open_range_is_inactive() {
        let range = DateRange {
            from: Some(day(2030, 1, 1)),
            to: None,
        };
        let o = order("#1", PaymentStatus::Pending, DeliveryStatus::Shipped, "23 Jan, 2025 10:30 AM");
        assert!(matches_date_range(&o, Some(&range)));
        assert!(matches_date_range(&o, None));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let range = DateRange::new(day(2025, 12, 31), day(2025, 1, 1));
        for o in all_statuses() {
            assert!(!matches_date_range(&o, Some(&range)));
        }
    }

    #[test]
    fn test_last_days() {
        let range = DateRange::last_days(30, day(2025, 3, 31));
        assert_eq!(range.from, Some(day(2025, 3, 1)));
        assert_eq!(range.to, Some(day(2025, 3, 31)));
    }
}
