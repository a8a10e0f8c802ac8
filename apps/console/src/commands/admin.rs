//! # Admin Commands
//!
//! Product approval and the unrestricted order overview. Admin status
//! changes bypass the vendor workflow.

use tracing::info;

use bazaar_core::OrderStatus;

use super::dto::{OrderCard, ProductDto};
use super::{json, Reply};
use crate::error::ApiError;
use crate::state::AppState;

/// Products awaiting approval.
pub fn pending(state: &AppState) -> Result<Reply, ApiError> {
    let products = ProductDto::list(state.store.list_pending_products(), &state.config);
    json(&products)
}

/// Approves a product, or puts it back to pending.
pub fn set_approval(
    state: &mut AppState,
    product_id: &str,
    approved: bool,
) -> Result<Reply, ApiError> {
    let product = state.store.approve_product(product_id, approved)?;
    info!(product_id = %product.id, approved, "Admin set product approval");
    json(&ProductDto::new(&product, &state.config))
}

/// Sets any status on any order.
pub fn set_status(
    state: &mut AppState,
    order_id: &str,
    status: OrderStatus,
) -> Result<Reply, ApiError> {
    let order = state.store.update_order_status(order_id, status)?;
    let details = state.store.order_details(&order.id)?;
    json(&OrderCard::new(details, &state.config))
}

/// Every order in the marketplace, newest first.
pub fn all_orders(state: &AppState) -> Result<Reply, ApiError> {
    let details = state.store.list_order_details(state.store.orders());
    json(&OrderCard::list(details, &state.config))
}
