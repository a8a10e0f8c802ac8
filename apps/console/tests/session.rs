//! Drives whole console sessions through `run_session`.

use bazaar_console::run_session;
use bazaar_console::state::{AppState, ConfigState};
use bazaar_core::OrderStatus;

fn run(state: &mut AppState, script: &str) -> String {
    let mut out = Vec::new();
    run_session(state, script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_marketplace_session() {
    let mut state = AppState::seeded(ConfigState::default());

    let script = "\
# vendor beta lists a ladder
add v_b 89 Steel Ladder
pending
";
    let output = run(&mut state, script);
    assert!(output.contains("\"name\": \"Steel Ladder\""));
    assert!(output.contains("\"statusLabel\": \"Pending Approval\""));

    let ladder_id = state.store.list_pending_products()[0].id.clone();
    assert!(ladder_id.starts_with("prod_"));

    let output = run(&mut state, &format!("approve {ladder_id}\norder {ladder_id} Dana\n"));
    assert!(output.contains("\"statusLabel\": \"Approved\""));
    assert!(output.contains("\"customerName\": \"Dana\""));

    let order_id = state.store.list_orders_for_customer("dana")[0].id.clone();
    let output = run(
        &mut state,
        &format!("advance v_b {order_id} accepted\nadvance v_b {order_id} shipped\n"),
    );
    assert!(output.contains("\"status\": \"shipped\""));
    assert_eq!(
        state.store.find_order(&order_id).unwrap().status,
        OrderStatus::Shipped
    );
}

#[test]
fn test_errors_do_not_end_the_session() {
    let mut state = AppState::seeded(ConfigState::default());

    let output = run(
        &mut state,
        "order p2 Dana\nrefund o1\nset-status missing_id shipped\norder p1 Dana\n",
    );

    assert!(output.contains("\"code\": \"BUSINESS_LOGIC\""));
    assert!(output.contains("\"code\": \"UNKNOWN_COMMAND\""));
    assert!(output.contains("\"code\": \"NOT_FOUND\""));
    assert_eq!(state.store.orders().len(), 2);
}

#[test]
fn test_quit_stops_reading() {
    let mut state = AppState::seeded(ConfigState::default());

    run(&mut state, "quit\norder p1 Dana\n");

    assert_eq!(state.store.orders().len(), 1);
}

#[test]
fn test_role_restricts_commands() {
    let mut state = AppState::seeded(ConfigState::default());

    let output = run(&mut state, "role customer\nset-status o1 shipped\ncatalog\n");

    assert!(output.contains("Viewing as customer"));
    assert!(output.contains("\"code\": \"FORBIDDEN\""));
    assert!(output.contains("\"id\": \"p1\""));
    assert_eq!(
        state.store.find_order("o1").unwrap().status,
        OrderStatus::Accepted
    );
}

#[test]
fn test_config_reaches_the_store() {
    let config = ConfigState::from_lookup(|key| match key {
        "BAZAAR_DEFAULT_CUSTOMER" => Some("Walk-in".to_string()),
        "BAZAAR_STORE_NAME" => Some("Hardware Row".to_string()),
        _ => None,
    });
    let mut state = AppState::seeded(config);

    let output = run(&mut state, "order p1\nhelp\n");

    assert!(output.contains("\"customerName\": \"Walk-in\""));
    assert!(output.contains("Hardware Row"));
    assert_eq!(state.store.list_orders_for_customer("").len(), 1);
}
