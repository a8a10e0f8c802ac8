//! # bazaar-core: Pure Domain Logic for Bazaar
//!
//! This crate holds the domain model shared by every role view of the
//! marketplace: vendors, products, orders and the rules that govern them.
//! It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bazaar Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │         Role Views (customer / vendor / admin)                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ direct calls                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    bazaar-store (Store)                         │   │
//! │  │    place_order, add_product, approve_product, ...               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bazaar-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   error   │  │ validation│  │   │
//! │  │   │  Vendor   │  │   Money   │  │ CoreError │  │  coercion │  │   │
//! │  │   │  Product  │  │  parsing  │  │ Validation│  │  defaults │  │   │
//! │  │   │  Order    │  │           │  │   Error   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Vendor, Product, Order, OrderStatus, Role)
//! - [`money`] - Money type in integer cents, parsed from form input
//! - [`error`] - Domain error types
//! - [`validation`] - Input coercion and validation
//!
//! ## Example Usage
//!
//! ```rust
//! use bazaar_core::money::Money;
//! use bazaar_core::types::OrderStatus;
//!
//! let price = Money::parse("19.99").unwrap();
//! assert_eq!(price.cents(), 1999);
//!
//! assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Accepted));
//! assert!(!OrderStatus::Shipped.can_transition_to(OrderStatus::Pending));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Customer name recorded on an order when the customer leaves it blank.
pub const DEFAULT_CUSTOMER_NAME: &str = "Guest";

/// Image shown for products submitted without one.
pub const PLACEHOLDER_IMAGE_URI: &str =
    "https://images.unsplash.com/photo-1526948128573-703ee1aeb6fa?q=80&w=800&auto=format&fit=crop";

/// Prefix of generated order ids (`ord_<suffix>`).
pub const ORDER_ID_PREFIX: &str = "ord";

/// Prefix of generated product ids (`prod_<suffix>`).
pub const PRODUCT_ID_PREFIX: &str = "prod";

/// Longest product name a vendor may submit.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Longest customer name recorded on an order.
pub const MAX_CUSTOMER_NAME_LEN: usize = 100;
