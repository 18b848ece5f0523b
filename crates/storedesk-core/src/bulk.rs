//! # Bulk Mutator
//!
//! Applies one transform to every selected record, or deletes them.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  selection {#1005, #1009}                                               │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  collection.map_matching(selected, transform.apply)                     │
//! │        │              order preserved, version bumped                   │
//! │        ▼                                                                │
//! │  selection.clear()  ──►  Some(BulkOutcome { updated_count: 2 })         │
//! │                                                                         │
//! │  empty selection  ──►  None, nothing touched                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::record::{Collection, Record};
use crate::selection::SelectionSet;
use crate::types::{DeliveryStatus, Order, PaymentStatus, Product, ProductStatus};

/// Result of a bulk action that touched at least one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BulkOutcome {
    pub updated_count: usize,
}

/// A record-to-record rewrite applied by [`bulk_apply`].
pub trait Transform<R> {
    fn apply(&self, record: &R) -> R;

    /// Past-tense phrase for notices, e.g. "marked as shipped".
    fn describe(&self) -> String;
}

/// Rewrites every selected record with `transform` and clears the selection.
///
/// Returns `None` when the selection is empty or none of its ids are in the
/// collection; in both cases the collection is left as it was.
pub fn bulk_apply<R, T>(
    collection: &mut Collection<R>,
    selection: &mut SelectionSet,
    transform: &T,
) -> Option<BulkOutcome>
where
    R: Record,
    T: Transform<R> + ?Sized,
{
    if selection.is_empty() {
        return None;
    }

    let updated_count =
        collection.map_matching(|id| selection.is_selected(id), |r| transform.apply(r));
    selection.clear();

    (updated_count > 0).then_some(BulkOutcome { updated_count })
}

/// Removes every selected record and clears the selection.
pub fn bulk_delete<R: Record>(
    collection: &mut Collection<R>,
    selection: &mut SelectionSet,
) -> Option<BulkOutcome> {
    if selection.is_empty() {
        return None;
    }

    let removed = collection.retain(|r| !selection.is_selected(r.id()));
    selection.clear();

    (removed > 0).then_some(BulkOutcome {
        updated_count: removed,
    })
}

// =============================================================================
// Order Transforms
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "action", content = "value", rename_all = "camelCase")]
pub enum OrderTransform {
    /// Delivery becomes Shipped; everything else untouched.
    MarkShipped,
    SetPayment(PaymentStatus),
    SetDelivery(DeliveryStatus),
}

impl Transform<Order> for OrderTransform {
    fn apply(&self, order: &Order) -> Order {
        let mut next = order.clone();
        match self {
            OrderTransform::MarkShipped => next.delivery = DeliveryStatus::Shipped,
            OrderTransform::SetPayment(status) => next.payment = *status,
            OrderTransform::SetDelivery(status) => next.delivery = *status,
        }
        next
    }

    fn describe(&self) -> String {
        match self {
            OrderTransform::MarkShipped => "marked as shipped".to_string(),
            OrderTransform::SetPayment(status) => format!("marked as {}", status),
            OrderTransform::SetDelivery(status) => format!("set to {}", status),
        }
    }
}

// =============================================================================
// Product Transforms
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "action", content = "value", rename_all = "camelCase")]
pub enum ProductTransform {
    SetStatus(ProductStatus),
}

impl Transform<Product> for ProductTransform {
    fn apply(&self, product: &Product) -> Product {
        let mut next = product.clone();
        match self {
            ProductTransform::SetStatus(status) => next.status = *status,
        }
        next
    }

    fn describe(&self) -> String {
        match self {
            ProductTransform::SetStatus(status) => format!("set to {}", status),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
