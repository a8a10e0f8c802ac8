//! # View DTOs
//!
//! What the console prints for products and orders. Decouples the domain
//! model from the view contract and carries display-ready labels.

use serde::Serialize;

use bazaar_core::{OrderStatus, Product, Vendor};
use bazaar_store::OrderDetails;

use crate::state::ConfigState;

/// Label for an order whose product no longer resolves.
pub const UNKNOWN_PRODUCT_LABEL: &str = "Product";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorDto {
    pub id: String,
    pub name: String,
}

impl From<&Vendor> for VendorDto {
    fn from(v: &Vendor) -> Self {
        VendorDto {
            id: v.id.clone(),
            name: v.name.clone(),
        }
    }
}

/// A product card as rendered in every view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub price_cents: i64,
    /// e.g. `"$19.99"`
    pub price: String,
    pub vendor_id: String,
    pub approved: bool,
    /// `"Approved"` or `"Pending Approval"`
    pub status_label: &'static str,
    pub image: String,
}

impl ProductDto {
    pub fn new(product: &Product, config: &ConfigState) -> Self {
        ProductDto {
            id: product.id.clone(),
            name: product.name.clone(),
            price_cents: product.price_cents,
            price: config.format_currency(product.price_cents),
            vendor_id: product.vendor_id.clone(),
            approved: product.approved,
            status_label: if product.approved {
                "Approved"
            } else {
                "Pending Approval"
            },
            image: product.image.clone(),
        }
    }

    pub fn list<'a>(
        products: impl IntoIterator<Item = &'a Product>,
        config: &ConfigState,
    ) -> Vec<ProductDto> {
        products
            .into_iter()
            .map(|p| ProductDto::new(p, config))
            .collect()
    }
}

/// An order row with its product and vendor resolved.
///
/// `next_actions` lists the statuses a vendor may move the order to, so a
/// view only offers buttons the store will accept.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCard {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub price: Option<String>,
    pub customer_name: String,
    pub vendor_id: String,
    pub vendor_name: Option<String>,
    pub status: OrderStatus,
    pub created_at: String,
    pub next_actions: Vec<OrderStatus>,
}

impl OrderCard {
    pub fn new(details: OrderDetails, config: &ConfigState) -> Self {
        let order = details.order;
        OrderCard {
            next_actions: order.status.allowed_transitions().to_vec(),
            id: order.id,
            product_id: order.product_id,
            product_name: details
                .product_name
                .unwrap_or_else(|| UNKNOWN_PRODUCT_LABEL.to_string()),
            price: details.price_cents.map(|c| config.format_currency(c)),
            customer_name: order.customer_name,
            vendor_id: order.vendor_id,
            vendor_name: details.vendor_name,
            status: order.status,
            created_at: order.created_at.to_rfc3339(),
        }
    }

    pub fn list(details: Vec<OrderDetails>, config: &ConfigState) -> Vec<OrderCard> {
        details
            .into_iter()
            .map(|d| OrderCard::new(d, config))
            .collect()
    }
}
