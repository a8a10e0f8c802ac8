//! End-to-end scenarios against the seed fixture.

use bazaar_core::{CoreError, NewProduct, OrderStatus, PLACEHOLDER_IMAGE_URI};
use bazaar_store::{Store, StoreConfig, StoreError};

fn seeded() -> Store {
    Store::with_seed(StoreConfig::default())
}

#[test]
fn test_customer_orders_approved_product() {
    let mut store = seeded();

    let order = store.place_order("p1", "Dana").unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.vendor_id, "v_a");
    assert_eq!(order.product_id, "p1");
    assert_eq!(store.orders().len(), 2);
    assert_eq!(store.orders()[0].id, order.id);
    assert_eq!(store.orders()[1].id, "o1");
}

#[test]
fn test_customer_cannot_order_pending_product() {
    let mut store = seeded();
    let before = store.orders().to_vec();

    let result = store.place_order("p2", "Dana");

    assert_eq!(
        result,
        Err(StoreError::Rule(CoreError::ProductNotApproved("p2".to_string())))
    );
    assert_eq!(store.orders().len(), 1);
    assert_eq!(store.orders(), before.as_slice());
}

#[test]
fn test_no_unapproved_product_is_orderable() {
    let mut store = seeded();
    store
        .add_product(NewProduct::new("Ladder", "49.99", "v_b", ""))
        .unwrap();
    let before = store.orders().to_vec();

    let pending: Vec<String> = store
        .list_pending_products()
        .iter()
        .map(|p| p.id.clone())
        .collect();
    assert_eq!(pending.len(), 2);

    for id in pending {
        assert!(store.place_order(&id, "Dana").is_err());
    }
    assert_eq!(store.orders(), before.as_slice());
}

#[test]
fn test_vendor_adds_ladder() {
    let mut store = seeded();

    let product = store
        .add_product(NewProduct::new("Ladder", "49.99", "v_a", ""))
        .unwrap();

    assert_eq!(product.price_cents, 4999);
    assert!(!product.approved);
    assert_eq!(product.image, PLACEHOLDER_IMAGE_URI);
    assert_eq!(store.products().len(), 4);
    assert_eq!(store.products()[0].id, product.id);

    // Not visible to customers until approved.
    assert!(store
        .list_approved_products()
        .iter()
        .all(|p| p.id != product.id));
}

#[test]
fn test_unknown_vendor_cannot_add_products() {
    let mut store = seeded();
    let before = store.products().to_vec();

    for vendor in ["v_c", "", "V_A"] {
        let result = store.add_product(NewProduct::new("Ladder", "49.99", vendor, ""));
        assert_eq!(result, Err(StoreError::not_found("Vendor", vendor)));
    }
    assert_eq!(store.products(), before.as_slice());
}

#[test]
fn test_admin_ships_seed_order() {
    let mut store = seeded();
    let before = store.find_order("o1").cloned().unwrap();

    store.update_order_status("o1", OrderStatus::Shipped).unwrap();

    let after = store.find_order("o1").unwrap();
    assert_eq!(after.status, OrderStatus::Shipped);
    assert_eq!(after.product_id, before.product_id);
    assert_eq!(after.customer_name, before.customer_name);
    assert_eq!(after.vendor_id, before.vendor_id);
    assert_eq!(after.created_at, before.created_at);
}

#[test]
fn test_update_missing_order_changes_nothing() {
    let mut store = seeded();
    let before = store.orders().to_vec();

    let result = store.update_order_status("missing_id", OrderStatus::Shipped);

    assert!(result.unwrap_err().is_not_found());
    assert_eq!(store.orders(), before.as_slice());
}

#[test]
fn test_approve_twice_equals_once() {
    let mut once = seeded();
    once.approve_product("p2", true).unwrap();

    let mut twice = seeded();
    twice.approve_product("p2", true).unwrap();
    twice.approve_product("p2", true).unwrap();

    assert_eq!(once.products(), twice.products());
}

#[test]
fn test_full_marketplace_flow() {
    let mut store = seeded();

    // Vendor Beta lists a ladder; admin approves it.
    let ladder = store
        .add_product(NewProduct::new("Steel Ladder", "89", "v_b", ""))
        .unwrap();
    assert_eq!(store.list_pending_products().len(), 2);
    store.approve_product(&ladder.id, true).unwrap();
    assert_eq!(store.list_pending_products().len(), 1);

    // Customer orders it.
    let order = store.place_order(&ladder.id, "dana").unwrap();
    assert_eq!(order.vendor_id, "v_b");
    assert_eq!(store.list_orders_for_customer("Dana").len(), 1);

    // Vendor Beta sees it in the inbox and works it through.
    let inbox = store.list_orders_for_vendor("v_b");
    assert_eq!(inbox.len(), 1);
    store.transition_order(&order.id, OrderStatus::Accepted).unwrap();
    store.transition_order(&order.id, OrderStatus::Shipped).unwrap();
    assert!(store
        .transition_order(&order.id, OrderStatus::Rejected)
        .is_err());

    // Admin overrides back to pending.
    store.update_order_status(&order.id, OrderStatus::Pending).unwrap();

    let details = store.order_details(&order.id).unwrap();
    assert_eq!(details.order.status, OrderStatus::Pending);
    assert_eq!(details.product_name.as_deref(), Some("Steel Ladder"));
    assert_eq!(details.price_cents, Some(8900));
    assert_eq!(details.vendor_name.as_deref(), Some("Vendor Beta"));

    // Vendor Alpha's view is untouched.
    assert_eq!(store.list_orders_for_vendor("v_a").len(), 1);
}

#[test]
fn test_independent_stores_do_not_share_state() {
    let mut a = seeded();
    let b = seeded();

    a.place_order("p1", "Dana").unwrap();

    assert_eq!(a.orders().len(), 2);
    assert_eq!(b.orders().len(), 1);
}
