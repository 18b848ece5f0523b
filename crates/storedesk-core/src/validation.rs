//! # Validation Module
//!
//! Field rules for single-record edits made from the detail forms.
//!
//! ## Where It Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Edit form submit                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ListSession::update_one(record)                                        │
//! │       │                                                                 │
//! │       ├── record.validate()  ← THIS MODULE                              │
//! │       │        │                                                        │
//! │       │        └── Err(ValidationError) → form shows message, no write  │
//! │       │                                                                 │
//! │       └── Ok → collection.replace(record)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bulk transforms only flip status enums and never pass through here.
//!
//! ```rust
//! use storedesk_core::validation::{validate_email, validate_required};
//!
//! assert!(validate_required("customer", "Wade Warren").is_ok());
//! assert!(validate_email("wade@example.com").is_ok());
//! assert!(validate_email("wade.example.com").is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{Order, Product};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum product name length (characters).
pub const MAX_PRODUCT_NAME: usize = 100;

/// Maximum product description length (characters).
pub const MAX_PRODUCT_DESCRIPTION: usize = 1000;

/// A record that can check its own fields before being written back.
pub trait Validate {
    fn validate(&self) -> ValidationResult<()>;
}

// =============================================================================
// Field Validators
// =============================================================================

/// Rejects empty or whitespace-only values.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Required and at most `max` characters.
pub fn validate_length(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    validate_required(field, value)?;
    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }
    Ok(())
}

pub fn validate_min(field: &str, value: i64, min: i64) -> ValidationResult<()> {
    if value < min {
        return Err(ValidationError::TooSmall {
            field: field.to_string(),
            min,
        });
    }
    Ok(())
}

/// Loose address check: one `@`, non-empty local part, dotted domain, no
/// whitespace.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    validate_required("email", email)?;

    let invalid = || ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: "must be a valid email address".to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

// =============================================================================
// Record Validators
// =============================================================================

impl Validate for Order {
    fn validate(&self) -> ValidationResult<()> {
        validate_required("customer", &self.customer)?;
        validate_email(&self.email)?;
        validate_min("items", i64::from(self.items), 1)?;
        validate_min("total", self.total.cents(), 0)?;
        validate_required("paymentMethod", &self.payment_method)?;
        validate_required("shippingAddress", &self.shipping_address)?;
        Ok(())
    }
}

impl Validate for Product {
    fn validate(&self) -> ValidationResult<()> {
        validate_length("name", &self.name, MAX_PRODUCT_NAME)?;
        validate_length("description", &self.description, MAX_PRODUCT_DESCRIPTION)?;
        if !self.categories.iter().any(|c| !c.trim().is_empty()) {
            return Err(ValidationError::Required {
                field: "categories".to_string(),
            });
        }
        validate_min("price", self.price.regular.cents(), 0)?;
        validate_min("stock", self.stock.quantity, 0)?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{DeliveryStatus, PaymentStatus, Price, ProductStatus, Stock};

    fn order() -> Order {
        Order {
            id: "#1002".to_string(),
            date: "23 Jan, 2025 10:30 AM".to_string(),
            customer: "Wade Warren".to_string(),
            email: "wade@example.com".to_string(),
            payment: PaymentStatus::Pending,
            total: Money::from_cents(2000),
            delivery: DeliveryStatus::NotApplicable,
            items: 2,
            payment_method: "Visa".to_string(),
            shipping_address: "123 Main St, San Francisco, CA 94111".to_string(),
        }
    }

    fn product() -> Product {
        Product {
            product_id: "PRD-1".to_string(),
            sku: "SKU-1".to_string(),
            name: "Dhaka Topi".to_string(),
            description: "Traditional cap".to_string(),
            brand: None,
            categories: vec!["Apparel".to_string()],
            sub_categories: vec![],
            price: Price {
                regular: Money::from_cents(80000),
                discounted: None,
                currency: "NPR".to_string(),
            },
            stock: Stock {
                quantity: 12,
                is_in_stock: true,
                low_stock_threshold: None,
            },
            status: ProductStatus::Active,
            created_at: "2025-03-01".to_string(),
        }
    }

    #[test]
    fn test_valid_records_pass() {
        assert!(order().validate().is_ok());
        assert!(product().validate().is_ok());
    }

    #[test]
    fn test_order_rules() {
        let mut o = order();
        o.customer = "  ".to_string();
        assert_eq!(
            o.validate(),
            Err(ValidationError::Required {
                field: "customer".to_string()
            })
        );

        let mut o = order();
        o.items = 0;
        assert!(matches!(o.validate(), Err(ValidationError::TooSmall { min: 1, .. })));

        let mut o = order();
        o.shipping_address.clear();
        assert!(o.validate().is_err());
    }

    #[test]
    fn test_product_rules() {
        let mut p = product();
        p.name = "x".repeat(101);
        assert!(matches!(
            p.validate(),
            Err(ValidationError::TooLong { max: 100, .. })
        ));

        let mut p = product();
        p.categories = vec![" ".to_string()];
        assert!(p.validate().is_err());

        let mut p = product();
        p.stock.quantity = -1;
        assert!(matches!(p.validate(), Err(ValidationError::TooSmall { min: 0, .. })));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("esther@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("a@b@c.com").is_err());
        assert!(validate_email("a@localhost").is_err());
        assert!(validate_email("a b@example.com").is_err());
    }
}
