//! # Vendor Commands
//!
//! A vendor manages its own listings and works through the orders routed
//! to it. Every command names the acting vendor; unknown vendors are
//! refused with `NOT_FOUND` instead of showing an empty view.
//!
//! ## Order Workflow
//! ```text
//! incoming v_a
//!      │
//!      ▼
//! ┌──────────────────────────────┐
//! │ ord_x  pending   [accept]    │  next_actions from the card
//! │                  [reject]    │
//! └──────────────────────────────┘
//!      │
//!      ▼
//! advance v_a ord_x accepted ──► Store::transition_order
//! ```

use tracing::info;

use bazaar_core::validation::validate_product_name;
use bazaar_core::{NewProduct, OrderStatus, Vendor};
use bazaar_store::Store;

use super::dto::{OrderCard, ProductDto, VendorDto};
use super::{json, Reply};
use crate::error::ApiError;
use crate::state::AppState;

pub fn list_vendors(state: &AppState) -> Result<Reply, ApiError> {
    let vendors: Vec<VendorDto> = state.store.vendors().iter().map(VendorDto::from).collect();
    json(&vendors)
}

/// Every listing of one vendor, approved or pending.
pub fn products(state: &AppState, vendor_id: &str) -> Result<Reply, ApiError> {
    require_vendor(&state.store, vendor_id)?;
    let products = ProductDto::list(state.store.list_products_for_vendor(vendor_id), &state.config);
    json(&products)
}

/// Orders routed to one vendor, with the actions still open on each.
pub fn incoming(state: &AppState, vendor_id: &str) -> Result<Reply, ApiError> {
    require_vendor(&state.store, vendor_id)?;
    let orders = state.store.list_orders_for_vendor(vendor_id);
    let details = state.store.list_order_details(orders);
    json(&OrderCard::list(details, &state.config))
}

/// Submits a product for admin approval.
pub fn add_product(state: &mut AppState, new: NewProduct) -> Result<Reply, ApiError> {
    validate_product_name(&new.name)?;

    let product = state.store.add_product(NewProduct {
        name: new.name.trim().to_string(),
        ..new
    })?;
    info!(product_id = %product.id, vendor_id = %product.vendor_id, "Vendor submitted product");

    json(&ProductDto::new(&product, &state.config))
}

/// Moves one of the vendor's orders along the workflow.
///
/// An order routed to a different vendor is reported as not found.
pub fn advance(
    state: &mut AppState,
    vendor_id: &str,
    order_id: &str,
    status: OrderStatus,
) -> Result<Reply, ApiError> {
    require_vendor(&state.store, vendor_id)?;

    let owned = state
        .store
        .find_order(order_id)
        .is_some_and(|o| o.vendor_id == vendor_id);
    if !owned {
        return Err(ApiError::not_found("Order", order_id));
    }

    let order = state.store.transition_order(order_id, status)?;
    let details = state.store.order_details(&order.id)?;
    json(&OrderCard::new(details, &state.config))
}

fn require_vendor<'a>(store: &'a Store, vendor_id: &str) -> Result<&'a Vendor, ApiError> {
    store
        .find_vendor(vendor_id)
        .ok_or_else(|| ApiError::not_found("Vendor", vendor_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::ConfigState;
    use bazaar_core::PLACEHOLDER_IMAGE_URI;

    fn state() -> AppState {
        AppState::seeded(ConfigState::default())
    }

    fn body(reply: Reply) -> serde_json::Value {
        match reply {
            Reply::Json(value) => value,
            other => panic!("expected json, got {:?}", other),
        }
    }

    #[test]
    fn test_list_vendors() {
        let json = body(list_vendors(&state()).unwrap());
        assert_eq!(json[0]["id"], "v_a");
        assert_eq!(json[1]["name"], "Vendor Beta");
    }

    #[test]
    fn test_products_include_pending() {
        let json = body(products(&state(), "v_b").unwrap());
        assert_eq!(json[0]["id"], "p2");
        assert_eq!(json[0]["statusLabel"], "Pending Approval");
    }

    #[test]
    fn test_unknown_vendor_is_not_found() {
        let state = state();
        assert_eq!(products(&state, "v_z").unwrap_err().code, ErrorCode::NotFound);
        assert_eq!(incoming(&state, "v_z").unwrap_err().code, ErrorCode::NotFound);
    }

    #[test]
    fn test_add_product_starts_pending() {
        let mut state = state();
        let new = NewProduct::new(" Ladder ", "49.99", "v_a", "");
        let json = body(add_product(&mut state, new).unwrap());

        assert_eq!(json["name"], "Ladder");
        assert_eq!(json["priceCents"], 4999);
        assert_eq!(json["approved"], false);
        assert_eq!(json["image"], PLACEHOLDER_IMAGE_URI);
        assert_eq!(state.store.products().len(), 4);
    }

    #[test]
    fn test_add_product_rejects_blank_name() {
        let mut state = state();
        let err = add_product(&mut state, NewProduct::new("  ", "5", "v_a", "")).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(state.store.products().len(), 3);
    }

    #[test]
    fn test_advance_follows_workflow() {
        let mut state = state();
        let json = body(advance(&mut state, "v_a", "o1", OrderStatus::Shipped).unwrap());
        assert_eq!(json["status"], "shipped");
        assert_eq!(json["nextActions"], serde_json::json!([]));

        let err = advance(&mut state, "v_a", "o1", OrderStatus::Pending).unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
    }

    #[test]
    fn test_advance_refuses_other_vendors_orders() {
        let mut state = state();
        let err = advance(&mut state, "v_b", "o1", OrderStatus::Shipped).unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(
            state.store.find_order("o1").unwrap().status,
            OrderStatus::Accepted
        );
    }
}
