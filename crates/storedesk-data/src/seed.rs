//! # Seed Data
//!
//! Fixed records served by [`MockProvider`](crate::MockProvider), plus a
//! deterministic generator for exercising pagination with larger lists.
//!
//! ## Seed Orders
//! Eight orders covering every delivery state and both common payment
//! states. Dates span 2025 so the date-range filter has something to cut.
//!
//! ## Seed Products
//! A small NPR catalogue across five categories with a mix of statuses,
//! discounts and stock levels.

use storedesk_core::{
    Brand, DeliveryStatus, Money, Order, PaymentStatus, Price, Product, ProductStatus, Stock,
    DEFAULT_CURRENCY,
};

// =============================================================================
// Orders
// =============================================================================

struct OrderSeed {
    id: &'static str,
    date: &'static str,
    customer: &'static str,
    email: &'static str,
    payment: PaymentStatus,
    total_cents: i64,
    delivery: DeliveryStatus,
    items: u32,
    payment_method: &'static str,
    shipping_address: &'static str,
}

const ORDERS: &[OrderSeed] = &[
    OrderSeed {
        id: "#1002",
        date: "23 Jan, 2025 10:30 AM",
        customer: "Wade Warren",
        email: "wade@example.com",
        payment: PaymentStatus::Pending,
        total_cents: 2000,
        delivery: DeliveryStatus::NotApplicable,
        items: 2,
        payment_method: "Visa",
        shipping_address: "123 Main St, San Francisco, CA 94111",
    },
    OrderSeed {
        id: "#1004",
        date: "14 May, 2025 02:15 PM",
        customer: "Esther Howard",
        email: "esther@example.com",
        payment: PaymentStatus::Success,
        total_cents: 2200,
        delivery: DeliveryStatus::NotApplicable,
        items: 3,
        payment_method: "PayPal",
        shipping_address: "456 Oak Ave, New York, NY 10001",
    },
    OrderSeed {
        id: "#1005",
        date: "7 Sep, 2025 09:45 AM",
        customer: "John Doe",
        email: "john@example.com",
        payment: PaymentStatus::Success,
        total_cents: 3500,
        delivery: DeliveryStatus::Delivered,
        items: 4,
        payment_method: "Mastercard",
        shipping_address: "789 Pine Rd, Chicago, IL 60601",
    },
    OrderSeed {
        id: "#1006",
        date: "28 Nov, 2025 04:20 PM",
        customer: "Jane Smith",
        email: "jane@example.com",
        payment: PaymentStatus::Pending,
        total_cents: 1850,
        delivery: DeliveryStatus::Processing,
        items: 1,
        payment_method: "COD",
        shipping_address: "321 Elm Blvd, Austin, TX 78701",
    },
    OrderSeed {
        id: "#1007",
        date: "15 Aug, 2025 11:10 AM",
        customer: "Robert Johnson",
        email: "robert@example.com",
        payment: PaymentStatus::Success,
        total_cents: 4275,
        delivery: DeliveryStatus::Shipped,
        items: 3,
        payment_method: "American Express",
        shipping_address: "654 Maple Ln, Seattle, WA 98101",
    },
    OrderSeed {
        id: "#1008",
        date: "3 Apr, 2025 03:45 PM",
        customer: "Emily Davis",
        email: "emily@example.com",
        payment: PaymentStatus::Success,
        total_cents: 2999,
        delivery: DeliveryStatus::Delivered,
        items: 2,
        payment_method: "Discover",
        shipping_address: "987 Cedar St, Boston, MA 02108",
    },
    OrderSeed {
        id: "#1009",
        date: "19 Dec, 2025 01:30 PM",
        customer: "Michael Wilson",
        email: "michael@example.com",
        payment: PaymentStatus::Pending,
        total_cents: 1525,
        delivery: DeliveryStatus::Processing,
        items: 1,
        payment_method: "COD",
        shipping_address: "147 Walnut Dr, Denver, CO 80202",
    },
    OrderSeed {
        id: "#1010",
        date: "8 Jul, 2025 10:00 AM",
        customer: "Sarah Brown",
        email: "sarah@example.com",
        payment: PaymentStatus::Success,
        total_cents: 5500,
        delivery: DeliveryStatus::Shipped,
        items: 5,
        payment_method: "PayPal",
        shipping_address: "258 Birch Ave, Miami, FL 33101",
    },
];

impl OrderSeed {
    fn build(&self) -> Order {
        Order {
            id: self.id.to_string(),
            date: self.date.to_string(),
            customer: self.customer.to_string(),
            email: self.email.to_string(),
            payment: self.payment,
            total: Money::from_cents(self.total_cents),
            delivery: self.delivery,
            items: self.items,
            payment_method: self.payment_method.to_string(),
            shipping_address: self.shipping_address.to_string(),
        }
    }
}

/// The eight seed orders in display order.
pub fn seed_orders() -> Vec<Order> {
    ORDERS.iter().map(OrderSeed::build).collect()
}

// =============================================================================
// Generated Orders
// =============================================================================

const FIRST_NAMES: &[&str] = &[
    "Aarav", "Sita", "Liam", "Maya", "Noah", "Priya", "Ethan", "Anika", "Lucas", "Zara",
];

const LAST_NAMES: &[&str] = &[
    "Shrestha", "Thapa", "Miller", "Gurung", "Taylor", "Rai", "Clark", "Karki",
];

const METHODS: &[&str] = &["Visa", "Mastercard", "PayPal", "COD", "American Express", "UPI"];

const CITIES: &[&str] = &[
    "Kathmandu", "Pokhara", "Lalitpur", "Biratnagar", "Chitwan", "Butwal",
];

const PAYMENTS: [PaymentStatus; 4] = [
    PaymentStatus::Pending,
    PaymentStatus::Success,
    PaymentStatus::Success,
    PaymentStatus::Refunded,
];

const DELIVERIES: [DeliveryStatus; 4] = [
    DeliveryStatus::NotApplicable,
    DeliveryStatus::Processing,
    DeliveryStatus::Shipped,
    DeliveryStatus::Delivered,
];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Builds `count` synthetic orders with ids starting at `#2001`.
///
/// Same `count` always yields the same records.
pub fn generate_orders(count: usize) -> Vec<Order> {
    (0..count)
        .map(|i| {
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last = LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()];
            let hour = i % 12 + 1;
            let meridiem = if (i / 12) % 2 == 0 { "AM" } else { "PM" };

            Order {
                id: format!("#{}", 2001 + i),
                date: format!(
                    "{} {}, 2025 {:02}:{:02} {}",
                    i % 28 + 1,
                    MONTHS[i % MONTHS.len()],
                    hour,
                    (i * 7) % 60,
                    meridiem
                ),
                customer: format!("{} {}", first, last),
                email: format!("{}.{}@example.com", first, last).to_lowercase(),
                payment: PAYMENTS[i % PAYMENTS.len()],
                total: Money::from_cents(500 + ((i as i64 * 1375) % 9500)),
                delivery: DELIVERIES[(i / 2) % DELIVERIES.len()],
                items: (i % 5) as u32 + 1,
                payment_method: METHODS[i % METHODS.len()].to_string(),
                shipping_address: format!("{} Ring Rd, {}", 10 + i, CITIES[i % CITIES.len()]),
            }
        })
        .collect()
}

// =============================================================================
// Products
// =============================================================================

struct ProductSeed {
    id: &'static str,
    sku: &'static str,
    name: &'static str,
    description: &'static str,
    brand: Option<(&'static str, &'static str)>,
    categories: &'static [&'static str],
    sub_categories: &'static [&'static str],
    regular: i64,
    discounted: Option<i64>,
    quantity: i64,
    status: ProductStatus,
    created_at: &'static str,
}

const PRODUCTS: &[ProductSeed] = &[
    ProductSeed {
        id: "PRD-1001",
        sku: "TEA-HGT-250",
        name: "Himalayan Green Tea 250g",
        description: "First flush loose leaf green tea from Ilam.",
        brand: Some(("BR-01", "Ilam Estates")),
        categories: &["Grocery", "Beverages"],
        sub_categories: &["Tea"],
        regular: 65000,
        discounted: Some(59900),
        quantity: 48,
        status: ProductStatus::Active,
        created_at: "2025-01-08",
    },
    ProductSeed {
        id: "PRD-1002",
        sku: "COF-ORG-500",
        name: "Organic Arabica Coffee 500g",
        description: "Medium roast beans grown in Gulmi.",
        brand: Some(("BR-02", "Gulmi Roasters")),
        categories: &["Grocery", "Beverages"],
        sub_categories: &["Coffee"],
        regular: 120000,
        discounted: None,
        quantity: 0,
        status: ProductStatus::Active,
        created_at: "2025-01-15",
    },
    ProductSeed {
        id: "PRD-1003",
        sku: "APP-TOPI-M",
        name: "Dhaka Topi",
        description: "Hand-woven traditional cap in palpali dhaka fabric.",
        brand: None,
        categories: &["Apparel"],
        sub_categories: &["Headwear"],
        regular: 80000,
        discounted: None,
        quantity: 25,
        status: ProductStatus::Active,
        created_at: "2025-02-02",
    },
    ProductSeed {
        id: "PRD-1004",
        sku: "APP-PASH-01",
        name: "Pashmina Shawl",
        description: "Pure cashmere shawl, natural undyed.",
        brand: Some(("BR-03", "Valley Looms")),
        categories: &["Apparel"],
        sub_categories: &["Scarves", "Winter"],
        regular: 950000,
        discounted: Some(799900),
        quantity: 6,
        status: ProductStatus::Active,
        created_at: "2025-02-20",
    },
    ProductSeed {
        id: "PRD-1005",
        sku: "HOM-SB-07",
        name: "Singing Bowl 7 inch",
        description: "Hammered bronze bowl with wooden striker and cushion.",
        brand: Some(("BR-04", "Patan Metalworks")),
        categories: &["Home", "Handicraft"],
        sub_categories: &["Decor"],
        regular: 450000,
        discounted: None,
        quantity: 3,
        status: ProductStatus::Active,
        created_at: "2025-03-05",
    },
    ProductSeed {
        id: "PRD-1006",
        sku: "HOM-LKT-SET",
        name: "Lokta Paper Notebook Set",
        description: "Three handmade lokta paper notebooks.",
        brand: None,
        categories: &["Stationery", "Handicraft"],
        sub_categories: &[],
        regular: 90000,
        discounted: None,
        quantity: 120,
        status: ProductStatus::Inactive,
        created_at: "2025-03-18",
    },
    ProductSeed {
        id: "PRD-1007",
        sku: "ELE-SOL-LMP",
        name: "Solar Camping Lamp",
        description: "Rechargeable LED lamp with USB output.",
        brand: Some(("BR-05", "Sunrise Tech")),
        categories: &["Electronics", "Outdoor"],
        sub_categories: &["Lighting"],
        regular: 350000,
        discounted: Some(299900),
        quantity: 0,
        status: ProductStatus::OutOfStock,
        created_at: "2025-04-01",
    },
    ProductSeed {
        id: "PRD-1008",
        sku: "OUT-TRK-POL",
        name: "Trekking Pole Pair",
        description: "Collapsible aluminium poles with cork grips.",
        brand: Some(("BR-06", "Annapurna Gear")),
        categories: &["Outdoor"],
        sub_categories: &["Trekking"],
        regular: 420000,
        discounted: None,
        quantity: 14,
        status: ProductStatus::Active,
        created_at: "2025-04-22",
    },
    ProductSeed {
        id: "PRD-1009",
        sku: "OUT-DWN-JKT",
        name: "Down Jacket",
        description: "800-fill down jacket rated to minus fifteen.",
        brand: Some(("BR-06", "Annapurna Gear")),
        categories: &["Outdoor", "Apparel"],
        sub_categories: &["Winter"],
        regular: 1450000,
        discounted: None,
        quantity: 0,
        status: ProductStatus::Preorder,
        created_at: "2025-05-10",
    },
    ProductSeed {
        id: "PRD-1010",
        sku: "GRO-HNY-500",
        name: "Wild Cliff Honey 500g",
        description: "Raw honey harvested in Lamjung.",
        brand: None,
        categories: &["Grocery"],
        sub_categories: &["Sweeteners"],
        regular: 180000,
        discounted: None,
        quantity: 2,
        status: ProductStatus::Discontinued,
        created_at: "2025-06-03",
    },
    ProductSeed {
        id: "PRD-1011",
        sku: "ELE-EBK-RDR",
        name: "E-Book Reader",
        description: "Six inch glare-free display, two weeks of battery.",
        brand: Some(("BR-05", "Sunrise Tech")),
        categories: &["Electronics"],
        sub_categories: &["Readers"],
        regular: 1800000,
        discounted: Some(1650000),
        quantity: 9,
        status: ProductStatus::Draft,
        created_at: "2025-07-19",
    },
    ProductSeed {
        id: "PRD-1012",
        sku: "HOM-THK-PNT",
        name: "Thangka Painting",
        description: "Mineral pigment on cotton canvas, framed.",
        brand: Some(("BR-07", "Bhaktapur Atelier")),
        categories: &["Home", "Handicraft"],
        sub_categories: &["Art"],
        regular: 2500000,
        discounted: None,
        quantity: 1,
        status: ProductStatus::Active,
        created_at: "2025-08-30",
    },
];

impl ProductSeed {
    fn build(&self) -> Product {
        Product {
            product_id: self.id.to_string(),
            sku: self.sku.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            brand: self.brand.map(|(id, name)| Brand {
                id: id.to_string(),
                name: name.to_string(),
            }),
            categories: self.categories.iter().map(|c| c.to_string()).collect(),
            sub_categories: self.sub_categories.iter().map(|c| c.to_string()).collect(),
            price: Price {
                regular: Money::from_cents(self.regular),
                discounted: self.discounted.map(Money::from_cents),
                currency: DEFAULT_CURRENCY.to_string(),
            },
            stock: Stock {
                quantity: self.quantity,
                is_in_stock: self.quantity > 0,
                low_stock_threshold: Some(5),
            },
            status: self.status,
            created_at: self.created_at.to_string(),
        }
    }
}

/// The seed product catalogue in display order.
pub fn seed_products() -> Vec<Product> {
    PRODUCTS.iter().map(ProductSeed::build).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use storedesk_core::date::try_parse_order_date;
    use storedesk_core::validation::Validate;

    #[test]
    fn test_seed_orders_match_display_order() {
        let orders = seed_orders();
        let ids: Vec<&str> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["#1002", "#1004", "#1005", "#1006", "#1007", "#1008", "#1009", "#1010"]
        );
        assert_eq!(orders[3].total.to_string(), "18.5");
    }

    #[test]
    fn test_seed_records_are_valid() {
        for order in seed_orders() {
            assert!(order.validate().is_ok(), "{} failed validation", order.id);
            assert!(try_parse_order_date(&order.date).is_some(), "{}", order.date);
        }
        for product in seed_products() {
            assert!(
                product.validate().is_ok(),
                "{} failed validation",
                product.product_id
            );
            assert_eq!(product.price.currency, "NPR");
        }
    }

    #[test]
    fn test_product_ids_are_unique() {
        let products = seed_products();
        let ids: HashSet<&str> = products.iter().map(|p| p.product_id.as_str()).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_generated_orders_are_deterministic_and_parseable() {
        let a = generate_orders(40);
        let b = generate_orders(40);
        assert_eq!(a, b);
        assert_eq!(a[0].id, "#2001");
        assert_eq!(a[39].id, "#2040");
        for order in &a {
            assert!(try_parse_order_date(&order.date).is_some(), "{}", order.date);
            assert!(order.validate().is_ok(), "{} failed validation", order.id);
        }
    }
}
