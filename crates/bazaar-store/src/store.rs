//! # Store
//!
//! The state container and its mutating operations.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Role       Operation              Effect                               │
//! │  ────────   ────────────────────   ──────────────────────────────────  │
//! │  customer   place_order            prepend pending order               │
//! │  vendor     add_product            prepend unapproved product          │
//! │  vendor     transition_order       status change along workflow        │
//! │  admin      approve_product        set approved flag                   │
//! │  admin      update_order_status    set any status                      │
//! │                                                                         │
//! │  Collections are newest-first. An Err leaves the store untouched.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use tracing::{debug, info};

use bazaar_core::validation::{coerce_price, customer_name_or, image_or};
use bazaar_core::{
    CoreError, NewProduct, Order, OrderStatus, Product, Vendor, ORDER_ID_PREFIX,
    PRODUCT_ID_PREFIX,
};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::ids::unique_id;

/// The shared in-memory store.
///
/// ## Ownership
/// One `Store` value is the single source of truth. Views borrow it:
/// `&Store` to read, `&mut Store` to change it.
#[derive(Debug, Clone)]
pub struct Store {
    config: StoreConfig,
    vendors: Vec<Vendor>,
    products: Vec<Product>,
    orders: Vec<Order>,
}

impl Store {
    /// Creates a store from existing collections, kept in the given order.
    pub fn from_parts(
        config: StoreConfig,
        vendors: Vec<Vendor>,
        products: Vec<Product>,
        orders: Vec<Order>,
    ) -> Self {
        Store {
            config,
            vendors,
            products,
            orders,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // =========================================================================
    // Read Access
    // =========================================================================

    /// All vendors, unfiltered.
    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    /// All products, newest first, unfiltered.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All orders, newest first, unfiltered.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    // =========================================================================
    // Customer Operations
    // =========================================================================

    /// Places an order for an approved product.
    ///
    /// ## Flow
    /// ```text
    /// place_order("p1", "Dana")
    ///      │
    ///      ├── product missing?    → Err(NotFound)
    ///      ├── product unapproved? → Err(ProductNotApproved)
    ///      │
    ///      ▼
    /// Order { id: ord_…, status: pending, vendor_id: product.vendor_id }
    ///      │
    ///      ▼
    /// orders.insert(0, order)
    /// ```
    ///
    /// An empty `customer_name` is recorded as the configured default.
    pub fn place_order(&mut self, product_id: &str, customer_name: &str) -> StoreResult<Order> {
        debug!(product_id = %product_id, "place_order");

        let product = self
            .products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or_else(|| StoreError::not_found("Product", product_id))?;

        if !product.can_order() {
            return Err(CoreError::ProductNotApproved(product_id.to_string()).into());
        }

        let vendor_id = product.vendor_id.clone();
        let id = unique_id(ORDER_ID_PREFIX, |id| self.orders.iter().any(|o| o.id == id))?;

        let order = Order {
            id,
            product_id: product_id.to_string(),
            customer_name: customer_name_or(customer_name, &self.config.default_customer_name),
            status: OrderStatus::Pending,
            vendor_id,
            created_at: Utc::now(),
        };

        self.orders.insert(0, order.clone());

        info!(
            order_id = %order.id,
            product_id = %order.product_id,
            vendor_id = %order.vendor_id,
            "Order placed"
        );
        Ok(order)
    }

    // =========================================================================
    // Vendor Operations
    // =========================================================================

    /// Submits a product for approval.
    ///
    /// ## Rules
    /// - `vendor_id` must name an existing vendor
    /// - Price text is coerced: unparseable or negative becomes $0.00
    /// - Empty image becomes the configured placeholder
    /// - The product always starts unapproved
    pub fn add_product(&mut self, new: NewProduct) -> StoreResult<Product> {
        debug!(vendor_id = %new.vendor_id, name = %new.name, "add_product");

        if !self.vendors.iter().any(|v| v.id == new.vendor_id) {
            return Err(StoreError::not_found("Vendor", new.vendor_id));
        }

        let id = unique_id(PRODUCT_ID_PREFIX, |id| {
            self.products.iter().any(|p| p.id == id)
        })?;

        let product = Product {
            id,
            name: new.name,
            price_cents: coerce_price(&new.price).cents(),
            vendor_id: new.vendor_id,
            approved: false,
            image: image_or(&new.image, &self.config.placeholder_image),
        };

        self.products.insert(0, product.clone());

        info!(
            product_id = %product.id,
            vendor_id = %product.vendor_id,
            price_cents = product.price_cents,
            "Product submitted for approval"
        );
        Ok(product)
    }

    /// Moves an order along the vendor workflow.
    ///
    /// Only the edges in [`OrderStatus::allowed_transitions`] are accepted;
    /// anything else is refused with `InvalidTransition`.
    pub fn transition_order(&mut self, order_id: &str, next: OrderStatus) -> StoreResult<Order> {
        debug!(order_id = %order_id, next = %next, "transition_order");

        let order = self.order_mut(order_id)?;

        if !order.status.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                order_id: order_id.to_string(),
                from: order.status,
                to: next,
            }
            .into());
        }

        let from = order.status;
        order.status = next;

        info!(order_id = %order_id, from = %from, to = %next, "Order status advanced");
        Ok(order.clone())
    }

    // =========================================================================
    // Admin Operations
    // =========================================================================

    /// Sets an order's status to any value, bypassing the vendor workflow.
    ///
    /// Only `status` changes; every other field is left as it was.
    pub fn update_order_status(&mut self, order_id: &str, status: OrderStatus) -> StoreResult<Order> {
        debug!(order_id = %order_id, status = %status, "update_order_status");

        let order = self.order_mut(order_id)?;
        let from = order.status;
        order.status = status;

        info!(order_id = %order_id, from = %from, to = %status, "Order status set");
        Ok(order.clone())
    }

    /// Approves a product or puts it back to pending. Idempotent.
    pub fn approve_product(&mut self, product_id: &str, approved: bool) -> StoreResult<Product> {
        debug!(product_id = %product_id, approved, "approve_product");

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or_else(|| StoreError::not_found("Product", product_id))?;

        product.approved = approved;

        info!(product_id = %product_id, approved, "Product approval set");
        Ok(product.clone())
    }

    fn order_mut(&mut self, order_id: &str) -> StoreResult<&mut Order> {
        self.orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| StoreError::not_found("Order", order_id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
