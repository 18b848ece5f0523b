//! # Domain Types
//!
//! The two record kinds managed by the list views.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐            ┌──────────────────────┐          │
//! │  │       Order          │            │       Product        │          │
//! │  │  ──────────────────  │            │  ──────────────────  │          │
//! │  │  id ("#1002")        │            │  product_id          │          │
//! │  │  date (text)         │            │  name, brand         │          │
//! │  │  payment ────────────┼──┐         │  categories          │          │
//! │  │  delivery ───────────┼┐ │         │  price ──► Price     │          │
//! │  │  total (Money)       ││ │         │  stock ──► Stock     │          │
//! │  └──────────────────────┘│ │         │  status ─┐           │          │
//! │                          │ │         └──────────┼───────────┘          │
//! │   DeliveryStatus ◄───────┘ │                    ▼                      │
//! │   PaymentStatus  ◄─────────┘            ProductStatus                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records are immutable-by-replacement: edits and bulk transforms build a new
//! value and swap it into the collection under the same id.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::date::parse_order_date;
use crate::filter::TabId;
use crate::money::Money;
use crate::record::{Record, RecordKind};

// =============================================================================
// Payment Status
// =============================================================================

/// Payment state of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentStatus {
    #[default]
    Pending,
    Success,
    Failed,
    Refunded,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "Pending"),
            PaymentStatus::Success => write!(f, "Success"),
            PaymentStatus::Failed => write!(f, "Failed"),
            PaymentStatus::Refunded => write!(f, "Refunded"),
        }
    }
}

// =============================================================================
// Delivery Status
// =============================================================================

/// Fulfilment state of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DeliveryStatus {
    /// Nothing has happened yet ("N/A" on the wire).
    #[default]
    #[serde(rename = "N/A")]
    NotApplicable,
    Processing,
    Shipped,
    Delivered,
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryStatus::NotApplicable => write!(f, "N/A"),
            DeliveryStatus::Processing => write!(f, "Processing"),
            DeliveryStatus::Shipped => write!(f, "Shipped"),
            DeliveryStatus::Delivered => write!(f, "Delivered"),
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer order as shown in the order list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Display identifier, e.g. `#1002`.
    pub id: String,

    /// Locale-formatted placement time: `"23 Jan, 2025 10:30 AM"`.
    pub date: String,

    pub customer: String,
    pub email: String,
    pub payment: PaymentStatus,

    /// Order total in minor units.
    pub total: Money,

    pub delivery: DeliveryStatus,

    /// Number of line items.
    pub items: u32,

    pub payment_method: String,
    pub shipping_address: String,
}

impl Order {
    /// Card brand of the payment method, for icon selection.
    pub fn payment_brand(&self) -> PaymentBrand {
        PaymentBrand::classify(&self.payment_method)
    }
}

impl Record for Order {
    const KIND: RecordKind = RecordKind::Orders;
    const ID_FIELD: &'static str = "id";
    const FIELDS: &'static [&'static str] = &[
        "id",
        "date",
        "customer",
        "email",
        "payment",
        "total",
        "delivery",
        "items",
        "paymentMethod",
        "shippingAddress",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.id,
            &self.customer,
            &self.email,
            &self.payment_method,
            &self.shipping_address,
        ]
    }

    fn matches_tab(&self, tab: &TabId) -> bool {
        tab.admits(self)
    }

    fn timestamp(&self) -> Option<NaiveDateTime> {
        Some(parse_order_date(&self.date))
    }

    fn field_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "id" => self.id.clone(),
            "date" => self.date.clone(),
            "customer" => self.customer.clone(),
            "email" => self.email.clone(),
            "payment" => self.payment.to_string(),
            "total" => self.total.to_string(),
            "delivery" => self.delivery.to_string(),
            "items" => self.items.to_string(),
            "paymentMethod" => self.payment_method.clone(),
            "shippingAddress" => self.shipping_address.clone(),
            _ => return None,
        };
        Some(value)
    }

    fn display_hints(&self) -> Vec<(&'static str, String)> {
        vec![("paymentBrand", self.payment_brand().as_str().to_string())]
    }
}

// =============================================================================
// Product Status
// =============================================================================

/// Catalogue state of a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Active,
    Inactive,
    Discontinued,
    #[default]
    Draft,
    OutOfStock,
    Preorder,
}

impl ProductStatus {
    /// Wire value (`out_of_stock`, `preorder`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
            ProductStatus::Discontinued => "discontinued",
            ProductStatus::Draft => "draft",
            ProductStatus::OutOfStock => "out_of_stock",
            ProductStatus::Preorder => "preorder",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Product
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Brand {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Price {
    pub regular: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub discounted: Option<Money>,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub quantity: i64,
    pub is_in_stock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub low_stock_threshold: Option<i64>,
}

impl Stock {
    /// True when a threshold is configured and the quantity is at or below it.
    pub fn is_low(&self) -> bool {
        self.low_stock_threshold
            .is_some_and(|threshold| self.quantity <= threshold)
    }
}

/// A catalogue product as shown in the product list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable key used for selection, deletion and export.
    pub product_id: String,
    pub sku: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub brand: Option<Brand>,
    pub categories: Vec<String>,
    #[serde(default)]
    pub sub_categories: Vec<String>,
    pub price: Price,
    pub stock: Stock,
    pub status: ProductStatus,
    pub created_at: String,
}

impl Product {
    /// The price a customer pays: discounted when present, else regular.
    pub fn effective_price(&self) -> Money {
        self.price.discounted.unwrap_or(self.price.regular)
    }

    /// Badge text for the status column.
    ///
    /// An `active` product with no stock reads "Out of Stock"; other states
    /// use their title-cased name.
    pub fn display_status(&self) -> &'static str {
        match self.status {
            ProductStatus::Active if self.stock.quantity > 0 => "Active",
            ProductStatus::Active => "Out of Stock",
            ProductStatus::Inactive => "Inactive",
            ProductStatus::Discontinued => "Discontinued",
            ProductStatus::Draft => "Draft",
            ProductStatus::OutOfStock => "Out of Stock",
            ProductStatus::Preorder => "Preorder",
        }
    }
}

impl Record for Product {
    const KIND: RecordKind = RecordKind::Products;
    const ID_FIELD: &'static str = "productId";
    const FIELDS: &'static [&'static str] = &[
        "productId",
        "sku",
        "name",
        "brand",
        "categories",
        "subCategories",
        "price",
        "discounted",
        "currency",
        "stock",
        "status",
    ];

    fn id(&self) -> &str {
        &self.product_id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = vec![&self.name];
        if let Some(brand) = &self.brand {
            fields.push(&brand.name);
        }
        fields.extend(self.categories.iter().map(String::as_str));
        fields.extend(self.sub_categories.iter().map(String::as_str));
        fields.push(&self.product_id);
        fields.push(&self.description);
        fields
    }

    fn field_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "productId" => self.product_id.clone(),
            "sku" => self.sku.clone(),
            "name" => self.name.clone(),
            "brand" => self
                .brand
                .as_ref()
                .map(|b| b.name.clone())
                .unwrap_or_default(),
            "categories" => self.categories.join(","),
            "subCategories" => self.sub_categories.join(","),
            "price" => self.price.regular.to_string(),
            "discounted" => self
                .price
                .discounted
                .map(|m| m.to_string())
                .unwrap_or_default(),
            "currency" => self.price.currency.clone(),
            "stock" => self.stock.quantity.to_string(),
            "status" => self.status.to_string(),
            _ => return None,
        };
        Some(value)
    }

    fn display_hints(&self) -> Vec<(&'static str, String)> {
        vec![
            ("statusBadge", self.display_status().to_string()),
            (
                "priceLabel",
                self.effective_price().with_currency(&self.price.currency),
            ),
        ]
    }
}

// =============================================================================
// Payment Brand
// =============================================================================

/// Card network behind a free-text payment method.
///
/// Lookup is case-insensitive; anything unrecognised (COD, UPI, "Credit
/// Card") maps to [`PaymentBrand::Generic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentBrand {
    Visa,
    Mastercard,
    Amex,
    Paypal,
    Discover,
    Diners,
    Jcb,
    Unionpay,
    Maestro,
    Generic,
}

impl PaymentBrand {
    pub fn classify(method: &str) -> Self {
        match method.trim().to_lowercase().as_str() {
            "visa" => PaymentBrand::Visa,
            "mastercard" | "master card" => PaymentBrand::Mastercard,
            "amex" | "american express" => PaymentBrand::Amex,
            "paypal" => PaymentBrand::Paypal,
            "discover" => PaymentBrand::Discover,
            "diners" | "diners club" => PaymentBrand::Diners,
            "jcb" => PaymentBrand::Jcb,
            "unionpay" | "union pay" => PaymentBrand::Unionpay,
            "maestro" => PaymentBrand::Maestro,
            _ => PaymentBrand::Generic,
        }
    }

    /// Lowercase icon key.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentBrand::Visa => "visa",
            PaymentBrand::Mastercard => "mastercard",
            PaymentBrand::Amex => "amex",
            PaymentBrand::Paypal => "paypal",
            PaymentBrand::Discover => "discover",
            PaymentBrand::Diners => "diners",
            PaymentBrand::Jcb => "jcb",
            PaymentBrand::Unionpay => "unionpay",
            PaymentBrand::Maestro => "maestro",
            PaymentBrand::Generic => "generic",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(status: ProductStatus, quantity: i64) -> Product {
        Product {
            product_id: "PRD-1".to_string(),
            sku: "SKU-1".to_string(),
            name: "Himalayan Green Tea".to_string(),
            description: "Loose leaf".to_string(),
            brand: None,
            categories: vec!["Beverages".to_string(), "Tea".to_string()],
            sub_categories: vec![],
            price: Price {
                regular: Money::from_cents(45000),
                discounted: Some(Money::from_cents(39900)),
                currency: "NPR".to_string(),
            },
            stock: Stock {
                quantity,
                is_in_stock: quantity > 0,
                low_stock_threshold: Some(5),
            },
            status,
            created_at: "2025-01-10".to_string(),
        }
    }

    #[test]
    fn test_delivery_status_wire_format() {
        let json = serde_json::to_string(&DeliveryStatus::NotApplicable).unwrap();
        assert_eq!(json, "\"N/A\"");
        let parsed: DeliveryStatus = serde_json::from_str("\"Delivered\"").unwrap();
        assert_eq!(parsed, DeliveryStatus::Delivered);
    }

    #[test]
    fn test_product_status_wire_format() {
        let json = serde_json::to_string(&ProductStatus::OutOfStock).unwrap();
        assert_eq!(json, "\"out_of_stock\"");
        assert_eq!(ProductStatus::Preorder.to_string(), "preorder");
    }

    #[test]
    fn test_display_status() {
        assert_eq!(product(ProductStatus::Active, 3).display_status(), "Active");
        assert_eq!(
            product(ProductStatus::Active, 0).display_status(),
            "Out of Stock"
        );
        assert_eq!(
            product(ProductStatus::Discontinued, 3).display_status(),
            "Discontinued"
        );
    }

    #[test]
    fn test_effective_price_prefers_discount() {
        let mut p = product(ProductStatus::Active, 3);
        assert_eq!(p.effective_price().cents(), 39900);
        p.price.discounted = None;
        assert_eq!(p.effective_price().cents(), 45000);
    }

    #[test]
    fn test_low_stock() {
        assert!(product(ProductStatus::Active, 5).stock.is_low());
        assert!(!product(ProductStatus::Active, 6).stock.is_low());
    }

    #[test]
    fn test_product_field_values() {
        let p = product(ProductStatus::Active, 3);
        assert_eq!(p.field_value("categories").as_deref(), Some("Beverages,Tea"));
        assert_eq!(p.field_value("brand").as_deref(), Some(""));
        assert_eq!(p.field_value("price").as_deref(), Some("450"));
        assert_eq!(p.field_value("discounted").as_deref(), Some("399"));
        assert_eq!(p.field_value("nope"), None);
    }

    #[test]
    fn test_payment_brand_classification() {
        assert_eq!(PaymentBrand::classify("Visa"), PaymentBrand::Visa);
        assert_eq!(PaymentBrand::classify("American Express"), PaymentBrand::Amex);
        assert_eq!(PaymentBrand::classify("master card"), PaymentBrand::Mastercard);
        assert_eq!(PaymentBrand::classify("COD"), PaymentBrand::Generic);
        assert_eq!(PaymentBrand::classify("Credit Card"), PaymentBrand::Generic);
    }

    #[test]
    fn test_product_display_hints() {
        let hints = product(ProductStatus::Active, 0).display_hints();
        assert_eq!(
            hints,
            vec![
                ("statusBadge", "Out of Stock".to_string()),
                ("priceLabel", "NPR 399".to_string()),
            ]
        );
    }
}
