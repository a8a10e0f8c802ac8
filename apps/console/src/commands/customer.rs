//! # Customer Commands
//!
//! Browse the approved catalogue, order, and follow your own orders.

use tracing::info;

use bazaar_core::validation::validate_customer_name;

use super::dto::{OrderCard, ProductDto};
use super::{json, Reply};
use crate::error::ApiError;
use crate::state::AppState;

/// Approved products, newest first.
pub fn catalog(state: &AppState) -> Result<Reply, ApiError> {
    let products = ProductDto::list(state.store.list_approved_products(), &state.config);
    json(&products)
}

/// Places an order for one approved product.
///
/// A blank name orders as the configured default customer.
pub fn place_order(
    state: &mut AppState,
    product_id: &str,
    customer_name: &str,
) -> Result<Reply, ApiError> {
    validate_customer_name(customer_name)?;

    let order = state.store.place_order(product_id, customer_name)?;
    info!(order_id = %order.id, customer = %order.customer_name, "Customer placed order");

    let details = state.store.order_details(&order.id)?;
    json(&OrderCard::new(details, &state.config))
}

/// Orders placed under `customer_name`, matched case-insensitively.
pub fn my_orders(state: &AppState, customer_name: &str) -> Result<Reply, ApiError> {
    let orders = state.store.list_orders_for_customer(customer_name);
    let details = state.store.list_order_details(orders);
    json(&OrderCard::list(details, &state.config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::ConfigState;

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
    fn test_catalog_hides_pending_products() {
        let state = state();
        let json = body(catalog(&state).unwrap());
        let ids: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["p1", "p3"]);
    }

    #[test]
    fn test_place_order_returns_card() {
        let mut state = state();
        let json = body(place_order(&mut state, "p3", "Dana").unwrap());

        assert_eq!(json["status"], "pending");
        assert_eq!(json["productName"], "Safety Helmet");
        assert_eq!(json["price"], "$24.00");
        assert_eq!(json["vendorName"], "Vendor Alpha");
        assert_eq!(state.store.orders().len(), 2);
    }

    #[test]
    fn test_place_order_for_pending_product_is_refused() {
        let mut state = state();
        let err = place_order(&mut state, "p2", "Dana").unwrap_err();

        assert_eq!(err.code, ErrorCode::BusinessLogic);
        assert_eq!(state.store.orders().len(), 1);
    }

    #[test]
    fn test_place_order_unknown_product() {
        let mut state = state();
        let err = place_order(&mut state, "p9", "Dana").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_overlong_name_is_rejected_before_ordering() {
        let mut state = state();
        let name = "x".repeat(101);
        let err = place_order(&mut state, "p1", &name).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(state.store.orders().len(), 1);
    }

    #[test]
    fn test_my_orders_matches_any_case() {
        let state = state();
        let json = body(my_orders(&state, "AISHA").unwrap());
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["id"], "o1");
    }
}
