//! # Role Queries
//!
//! Named read operations carrying each view's visibility rule, so the
//! rule lives in one place instead of being re-filtered at every call site.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  View        Query                        Rule                          │
//! │  ─────────   ──────────────────────────   ───────────────────────────  │
//! │  customer    list_approved_products       approved                      │
//! │  customer    list_orders_for_customer     same name, any case           │
//! │  vendor      list_products_for_vendor     vendor_id == v                │
//! │  vendor      list_orders_for_vendor       vendor_id == v                │
//! │  admin       list_pending_products        !approved                     │
//! │  all         order_details                order + product + vendor      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every list keeps store order (newest first).

use serde::Serialize;

use bazaar_core::validation::customer_name_or;
use bazaar_core::{Order, Product, Vendor};

use crate::error::{StoreError, StoreResult};
use crate::store::Store;

/// An order joined with what the views display next to it.
///
/// The product and vendor are looked up at read time and may be missing;
/// views fall back to a generic label in that case.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    #[serde(flatten)]
    pub order: Order,
    pub product_name: Option<String>,
    pub price_cents: Option<i64>,
    pub vendor_name: Option<String>,
}

impl Store {
    // =========================================================================
    // Lookups
    // =========================================================================

    pub fn find_vendor(&self, vendor_id: &str) -> Option<&Vendor> {
        self.vendors().iter().find(|v| v.id == vendor_id)
    }

    pub fn find_product(&self, product_id: &str) -> Option<&Product> {
        self.products().iter().find(|p| p.id == product_id)
    }

    pub fn find_order(&self, order_id: &str) -> Option<&Order> {
        self.orders().iter().find(|o| o.id == order_id)
    }

    // =========================================================================
    // Customer View
    // =========================================================================

    /// Products customers may see and order.
    pub fn list_approved_products(&self) -> Vec<&Product> {
        self.products().iter().filter(|p| p.approved).collect()
    }

    /// Orders placed under `customer_name`, compared case-insensitively.
    ///
    /// An empty name means the default customer, matching how
    /// [`Store::place_order`] records anonymous orders.
    pub fn list_orders_for_customer(&self, customer_name: &str) -> Vec<&Order> {
        let name = customer_name_or(customer_name, &self.config().default_customer_name);
        self.orders().iter().filter(|o| o.placed_by(&name)).collect()
    }

    // =========================================================================
    // Vendor View
    // =========================================================================

    /// Every product of one vendor, approved or not.
    pub fn list_products_for_vendor(&self, vendor_id: &str) -> Vec<&Product> {
        self.products()
            .iter()
            .filter(|p| p.is_owned_by(vendor_id))
            .collect()
    }

    /// Orders routed to one vendor.
    pub fn list_orders_for_vendor(&self, vendor_id: &str) -> Vec<&Order> {
        self.orders()
            .iter()
            .filter(|o| o.vendor_id == vendor_id)
            .collect()
    }

    // =========================================================================
    // Admin View
    // =========================================================================

    /// Products awaiting approval.
    pub fn list_pending_products(&self) -> Vec<&Product> {
        self.products().iter().filter(|p| !p.approved).collect()
    }

    // =========================================================================
    // Order Details
    // =========================================================================

    pub fn order_details(&self, order_id: &str) -> StoreResult<OrderDetails> {
        self.find_order(order_id)
            .map(|o| self.details_for(o))
            .ok_or_else(|| StoreError::not_found("Order", order_id))
    }

    /// Joins each order with its product and vendor.
    pub fn list_order_details<'a>(
        &self,
        orders: impl IntoIterator<Item = &'a Order>,
    ) -> Vec<OrderDetails> {
        orders.into_iter().map(|o| self.details_for(o)).collect()
    }

    fn details_for(&self, order: &Order) -> OrderDetails {
        let product = self.find_product(&order.product_id);
        OrderDetails {
            order: order.clone(),
            product_name: product.map(|p| p.name.clone()),
            price_cents: product.map(|p| p.price_cents),
            vendor_name: self.find_vendor(&order.vendor_id).map(|v| v.name.clone()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::{Store, StoreConfig};
    use bazaar_core::{NewProduct, Order, Product};

    fn product_ids<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    fn order_ids<'a>(orders: &[&'a Order]) -> Vec<&'a str> {
        orders.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_list_approved_products() {
        let store = Store::with_seed(StoreConfig::default());
        let approved = store.list_approved_products();
        assert_eq!(product_ids(&approved), vec!["p1", "p3"]);
    }

    #[test]
    fn test_list_pending_products() {
        let mut store = Store::with_seed(StoreConfig::default());
        let added = store
            .add_product(NewProduct::new("Ladder", "49.99", "v_a", ""))
            .unwrap();

        let pending = store.list_pending_products();
        assert_eq!(product_ids(&pending), vec![added.id.as_str(), "p2"]);
    }

    #[test]
    fn test_list_products_for_vendor() {
        let store = Store::with_seed(StoreConfig::default());
        let alpha = store.list_products_for_vendor("v_a");
        assert_eq!(product_ids(&alpha), vec!["p1", "p3"]);

        let beta = store.list_products_for_vendor("v_b");
        assert_eq!(product_ids(&beta), vec!["p2"]);

        assert!(store.list_products_for_vendor("v_missing").is_empty());
    }

    #[test]
    fn test_list_orders_for_vendor() {
        let mut store = Store::with_seed(StoreConfig::default());
        store.approve_product("p2", true).unwrap();
        let beta_order = store.place_order("p2", "Dana").unwrap();
        let alpha_order = store.place_order("p3", "Dana").unwrap();

        let alpha = store.list_orders_for_vendor("v_a");
        assert_eq!(order_ids(&alpha), vec![alpha_order.id.as_str(), "o1"]);

        let beta = store.list_orders_for_vendor("v_b");
        assert_eq!(order_ids(&beta), vec![beta_order.id.as_str()]);
    }

    #[test]
    fn test_list_orders_for_customer() {
        let mut store = Store::with_seed(StoreConfig::default());
        let guest = store.place_order("p1", "").unwrap();

        let aisha = store.list_orders_for_customer("aisha");
        assert_eq!(order_ids(&aisha), vec!["o1"]);

        let guests = store.list_orders_for_customer("");
        assert_eq!(order_ids(&guests), vec![guest.id.as_str()]);

        let guests = store.list_orders_for_customer("GUEST");
        assert_eq!(guests.len(), 1);

        assert!(store.list_orders_for_customer("Nobody").is_empty());
    }

    #[test]
    fn test_order_details_joins_product_and_vendor() {
        let store = Store::with_seed(StoreConfig::default());
        let details = store.order_details("o1").unwrap();

        assert_eq!(details.order.id, "o1");
        assert_eq!(details.product_name.as_deref(), Some("Electrical Cable 10m"));
        assert_eq!(details.price_cents, Some(1999));
        assert_eq!(details.vendor_name.as_deref(), Some("Vendor Alpha"));

        assert!(store.order_details("missing").unwrap_err().is_not_found());
    }

    #[test]
    fn test_order_details_serializes_flat() {
        let store = Store::with_seed(StoreConfig::default());
        let json = serde_json::to_value(store.order_details("o1").unwrap()).unwrap();

        assert_eq!(json["id"], "o1");
        assert_eq!(json["status"], "accepted");
        assert_eq!(json["productName"], "Electrical Cable 10m");
        assert_eq!(json["vendorName"], "Vendor Alpha");
    }

    #[test]
    fn test_list_order_details_for_all_orders() {
        let store = Store::with_seed(StoreConfig::default());
        let all = store.list_order_details(store.orders());
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].order.customer_name, "Aisha");
    }
}
