//! # Domain Types
//!
//! Core domain types shared by every role view.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Vendor      │◄──│     Product     │◄──│      Order      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name           │   │  vendor_id (FK) │   │  product_id (FK)│       │
//! │  └─────────────────┘   │  price_cents    │   │  vendor_id (FK) │       │
//! │          ▲             │  approved       │   │  status         │       │
//! │          │             └─────────────────┘   │  created_at     │       │
//! │          └───────────────────────────────────└─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   OrderStatus   │   │      Role       │                             │
//! │  │  Pending        │   │  Customer       │                             │
//! │  │  Accepted       │   │  Vendor         │                             │
//! │  │  Shipped        │   │  Admin          │                             │
//! │  │  Rejected       │   └─────────────────┘                             │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! `Order.vendor_id` is copied from the product when the order is placed,
//! so the order keeps its vendor even if the product's vendor were to change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Vendor
// =============================================================================

/// A seller allowed to list products and receive orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub name: String,
}

impl Vendor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Vendor {
            id: id.into(),
            name: name.into(),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A sellable item owned by one vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (`prod_<suffix>` for products created at runtime).
    pub id: String,

    /// Display name shown in every view.
    pub name: String,

    /// Price in cents, never negative.
    pub price_cents: i64,

    /// Owning vendor.
    pub vendor_id: String,

    /// Admin approval gate; only approved products are visible to customers.
    pub approved: bool,

    /// Image URI.
    pub image: String,
}

impl Product {
    /// Checks if a customer may order this product.
    #[inline]
    pub fn can_order(&self) -> bool {
        self.approved
    }

    #[inline]
    pub fn is_owned_by(&self, vendor_id: &str) -> bool {
        self.vendor_id == vendor_id
    }
}

/// A vendor's product submission, as entered in the form.
///
/// `price` is the raw text of the price field; the store coerces it.
/// There is no `approved` field: every submission starts pending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub price: String,
    pub vendor_id: String,
    #[serde(default)]
    pub image: String,
}

impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        vendor_id: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        NewProduct {
            name: name.into(),
            price: price.into(),
            vendor_id: vendor_id.into(),
            image: image.into(),
        }
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Where an order is in its lifecycle.
///
/// ## Vendor Workflow
/// ```text
///            ┌──► Accepted ──► Shipped
/// Pending ───┤
///            └──► Rejected
/// ```
/// Admins may override the workflow and set any status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed by a customer, awaiting the vendor.
    #[default]
    Pending,
    /// Vendor agreed to fulfil the order.
    Accepted,
    /// Vendor dispatched the order.
    Shipped,
    /// Vendor declined the order.
    Rejected,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Accepted,
        OrderStatus::Shipped,
        OrderStatus::Rejected,
    ];

    /// Wire name of the status (`"pending"`, `"accepted"`, ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Accepted => "accepted",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Rejected => "rejected",
        }
    }

    /// Statuses a vendor may move an order to from this one.
    ///
    /// ```rust
    /// use bazaar_core::OrderStatus;
    ///
    /// assert_eq!(
    ///     OrderStatus::Pending.allowed_transitions(),
    ///     &[OrderStatus::Accepted, OrderStatus::Rejected]
    /// );
    /// assert!(OrderStatus::Shipped.allowed_transitions().is_empty());
    /// ```
    pub const fn allowed_transitions(&self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::Pending => &[OrderStatus::Accepted, OrderStatus::Rejected],
            OrderStatus::Accepted => &[OrderStatus::Shipped],
            OrderStatus::Shipped | OrderStatus::Rejected => &[],
        }
    }

    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer's request to purchase one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier (`ord_<suffix>` for orders placed at runtime).
    pub id: String,

    /// Ordered product.
    pub product_id: String,

    /// Name the customer ordered under.
    pub customer_name: String,

    pub status: OrderStatus,

    /// Vendor of the product at the time of ordering (frozen).
    pub vendor_id: String,

    /// When the order was placed.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Case-insensitive match on the customer name.
    pub fn placed_by(&self, customer_name: &str) -> bool {
        self.customer_name.to_lowercase() == customer_name.to_lowercase()
    }
}

// =============================================================================
// Role
// =============================================================================

/// Which view a caller acts through. Carries no authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Browses approved products and places orders.
    Customer,
    /// Lists products and handles incoming orders.
    Vendor,
    /// Approves products and oversees every order.
    Admin,
}

impl Role {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Vendor => "vendor",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
