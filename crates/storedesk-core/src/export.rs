//! # Export Serializer
//!
//! Renders records as comma-delimited text for download.
//!
//! ## Output Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  id,date,customer,payment,total,delivery,items       ◄── header, bare   │
//! │  "#1002","23 Jan, 2025 10:30 AM","Wade Warren",...   ◄── one per record │
//! │  "#1004","14 May, 2025 02:15 PM","Esther Howard",... │                  │
//! │                                                                         │
//! │  lines joined by '\n', no trailing newline                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dialects
//! - [`CsvDialect::Verbatim`] (default) wraps every value in quotes and does
//!   NOT escape quotes inside values. Existing spreadsheets depend on this.
//! - [`CsvDialect::Rfc4180`] doubles embedded quotes via the `csv` writer.
//!
//! A field is exported when its column is visible or it is the record's id
//! field. The order list's `order` column governs `id`, which is exported
//! regardless.

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::record::{Record, RecordKind};

// =============================================================================
// Column Visibility
// =============================================================================

/// Ordered column key → visible flag mapping for one list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnVisibility(Vec<(String, bool)>);

impl ColumnVisibility {
    pub fn new<I, K>(columns: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: Into<String>,
    {
        Self(columns.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Order list defaults: payment method and address hidden.
    pub fn order_defaults() -> Self {
        Self::new([
            ("order", true),
            ("date", true),
            ("customer", true),
            ("payment", true),
            ("total", true),
            ("delivery", true),
            ("items", true),
            ("paymentMethod", false),
            ("shippingAddress", false),
        ])
    }

    /// Product list defaults: sku and currency hidden.
    pub fn product_defaults() -> Self {
        Self::new([
            ("name", true),
            ("sku", false),
            ("brand", true),
            ("categories", true),
            ("subCategories", true),
            ("price", true),
            ("discounted", true),
            ("currency", false),
            ("stock", true),
            ("status", true),
        ])
    }

    /// Same keys, every one visible.
    pub fn all_visible(&self) -> Self {
        Self(self.0.iter().map(|(k, _)| (k.clone(), true)).collect())
    }

    /// Sets a column's flag, appending the key if it is new.
    pub fn set(&mut self, key: &str, visible: bool) {
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some((_, flag)) => *flag = visible,
            None => self.0.push((key.to_string(), visible)),
        }
    }

    /// Unknown keys are hidden.
    pub fn is_visible(&self, key: &str) -> bool {
        self.0.iter().any(|(k, v)| k == key && *v)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

// =============================================================================
// Dialect
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CsvDialect {
    #[default]
    Verbatim,
    Rfc4180,
}

// =============================================================================
// Serialization
// =============================================================================

/// Field keys exported for `R` under `visibility`, in column order.
pub fn export_fields<R: Record>(visibility: &ColumnVisibility) -> Vec<&'static str> {
    R::FIELDS
        .iter()
        .copied()
        .filter(|field| *field == R::ID_FIELD || visibility.is_visible(field))
        .collect()
}

/// Renders `records` in the verbatim dialect.
pub fn serialize<R: Record>(records: &[R], visibility: &ColumnVisibility) -> String {
    let fields = export_fields::<R>(visibility);
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(fields.join(","));

    for record in records {
        let row: Vec<String> = fields
            .iter()
            .map(|field| format!("\"{}\"", record.field_value(field).unwrap_or_default()))
            .collect();
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// Renders `records` in the requested dialect.
pub fn serialize_with<R: Record>(
    records: &[R],
    visibility: &ColumnVisibility,
    dialect: CsvDialect,
) -> CoreResult<String> {
    match dialect {
        CsvDialect::Verbatim => Ok(serialize(records, visibility)),
        CsvDialect::Rfc4180 => serialize_escaped(records, visibility),
    }
}

fn serialize_escaped<R: Record>(
    records: &[R],
    visibility: &ColumnVisibility,
) -> CoreResult<String> {
    let fields = export_fields::<R>(visibility);

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for record in records {
        let row = fields
            .iter()
            .map(|field| record.field_value(field).unwrap_or_default());
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CoreError::Export(e.to_string()))?;
    let body = String::from_utf8(bytes).map_err(|e| CoreError::Export(e.to_string()))?;

    let mut out = fields.join(",");
    let body = body.trim_end_matches('\n');
    if !body.is_empty() {
        out.push('\n');
        out.push_str(body);
    }
    Ok(out)
}

/// `orders_20250123.csv`, `products_20250123.csv`.
pub fn export_filename(kind: RecordKind, date: NaiveDate) -> String {
    format!("{}_{}.csv", kind.as_str(), date.format("%Y%m%d"))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{DeliveryStatus, Order, PaymentStatus};

    fn order(id: &str, customer: &str, cents: i64) -> Order {
        Order {
            id: id.to_string(),
            date: "23 Jan, 2025 10:30 AM".to_string(),
            customer: customer.to_string(),
            email: "someone@example.com".to_string(),
            payment: PaymentStatus::Success,
            total: Money::from_cents(cents),
            delivery: DeliveryStatus::Delivered,
            items: 1,
            payment_method: "Visa".to_string(),
            shipping_address: "1 Road".to_string(),
        }
    }

    #[test]
    fn test_forced_id_and_visible_total() {
        let records = vec![order("#1002", "Wade", 2000), order("#1004", "Esther", 2200)];
        let visibility = ColumnVisibility::new([("order", true), ("total", true)]);
        let out = serialize(&records, &visibility);
        assert_eq!(out, "id,total\n\"#1002\",\"20\"\n\"#1004\",\"22\"");
    }

    #[test]
    fn test_id_exported_even_when_hidden() {
        let records = vec![order("#1002", "Wade", 2000)];
        let visibility = ColumnVisibility::new([("order", false), ("customer", true)]);
        assert_eq!(serialize(&records, &visibility), "id,customer\n\"#1002\",\"Wade\"");
    }

    #[test]
    fn test_order_defaults_skip_hidden_and_email() {
        let fields = export_fields::<Order>(&ColumnVisibility::order_defaults());
        assert_eq!(
            fields,
            vec!["id", "date", "customer", "payment", "total", "delivery", "items"]
        );
        let all = export_fields::<Order>(&ColumnVisibility::order_defaults().all_visible());
        assert!(all.contains(&"shippingAddress"));
        assert!(!all.contains(&"email"));
    }

    #[test]
    fn test_empty_collection_is_header_only() {
        let out = serialize::<Order>(&[], &ColumnVisibility::order_defaults());
        assert_eq!(out, "id,date,customer,payment,total,delivery,items");
    }

    #[test]
    fn test_verbatim_does_not_escape_quotes() {
        let records = vec![order("#1", "Dwayne \"The Rock\"", 100)];
        let visibility = ColumnVisibility::new([("customer", true)]);
        let out = serialize(&records, &visibility);
        assert_eq!(out, "id,customer\n\"#1\",\"Dwayne \"The Rock\"\"");
    }

    #[test]
    fn test_rfc4180_doubles_quotes() {
        let records = vec![order("#1", "Dwayne \"The Rock\"", 100), order("#2", "Ann", 100)];
        let visibility = ColumnVisibility::new([("customer", true)]);
        let out = serialize_with(&records, &visibility, CsvDialect::Rfc4180).unwrap();
        assert_eq!(
            out,
            "id,customer\n\"#1\",\"Dwayne \"\"The Rock\"\"\"\n\"#2\",\"Ann\""
        );
    }

    #[test]
    fn test_set_column() {
        let mut v = ColumnVisibility::order_defaults();
        v.set("paymentMethod", true);
        v.set("items", false);
        assert!(v.is_visible("paymentMethod"));
        assert!(!v.is_visible("items"));
        assert!(!v.is_visible("unknown"));
    }

    #[test]
    fn test_export_filename() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 23).unwrap();
        assert_eq!(export_filename(RecordKind::Orders, date), "orders_20250123.csv");
        assert_eq!(export_filename(RecordKind::Products, date), "products_20250123.csv");
    }
}
