//! # Seed Fixture
//!
//! The state every fresh store starts from:
//!
//! | Kind | Id | Details |
//! |---|---|---|
//! | vendor | `v_a` | Vendor Alpha |
//! | vendor | `v_b` | Vendor Beta |
//! | product | `p1` | Electrical Cable 10m, $19.99, `v_a`, approved |
//! | product | `p2` | Industrial Drill, $129.50, `v_b`, pending |
//! | product | `p3` | Safety Helmet, $24.00, `v_a`, approved |
//! | order | `o1` | `p1` for Aisha, accepted, placed an hour ago |

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use bazaar_core::{Order, OrderStatus, Product, Vendor};

use crate::config::StoreConfig;
use crate::store::Store;

pub fn seed_vendors() -> Vec<Vendor> {
    vec![
        Vendor::new("v_a", "Vendor Alpha"),
        Vendor::new("v_b", "Vendor Beta"),
    ]
}

pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "p1".to_string(),
            name: "Electrical Cable 10m".to_string(),
            price_cents: 1999,
            vendor_id: "v_a".to_string(),
            approved: true,
            image: "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?q=80&w=800&auto=format&fit=crop".to_string(),
        },
        Product {
            id: "p2".to_string(),
            name: "Industrial Drill".to_string(),
            price_cents: 12950,
            vendor_id: "v_b".to_string(),
            approved: false,
            image: "https://images.unsplash.com/photo-1606229365485-93a3b8d0a2a5?q=80&w=800&auto=format&fit=crop".to_string(),
        },
        Product {
            id: "p3".to_string(),
            name: "Safety Helmet".to_string(),
            price_cents: 2400,
            vendor_id: "v_a".to_string(),
            approved: true,
            image: "https://images.unsplash.com/photo-1601655781326-c6f5b4f58c30?q=80&w=800&auto=format&fit=crop".to_string(),
        },
    ]
}

/// Seed orders relative to `now`.
pub fn seed_orders(now: DateTime<Utc>) -> Vec<Order> {
    vec![Order {
        id: "o1".to_string(),
        product_id: "p1".to_string(),
        customer_name: "Aisha".to_string(),
        status: OrderStatus::Accepted,
        vendor_id: "v_a".to_string(),
        created_at: now - Duration::hours(1),
    }]
}

impl Store {
    /// Creates a store holding the seed fixture.
    pub fn with_seed(config: StoreConfig) -> Self {
        let store = Store::from_parts(
            config,
            seed_vendors(),
            seed_products(),
            seed_orders(Utc::now()),
        );
        debug!(
            vendors = store.vendors().len(),
            products = store.products().len(),
            orders = store.orders().len(),
            "Store seeded"
        );
        store
    }
}
