//! # Commands Module
//!
//! Parses console lines into commands and dispatches them to the view
//! that owns them.
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  customer.rs              vendor.rs                 admin.rs            │
//! │  ───────────              ─────────                 ────────            │
//! │  catalog                  products <vendor>         pending             │
//! │  order <product> [name]   incoming <vendor>         approve <product>   │
//! │  my-orders [name]         add <vendor> <price> ...  keep-pending <p>    │
//! │                           advance <v> <order> <s>   set-status <o> <s>  │
//! │                                                     orders              │
//! │                                                                         │
//! │  any view: vendors, role <view|all>, help, quit                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod admin;
pub mod customer;
pub mod dto;
pub mod vendor;

use serde_json::Value;
use tracing::debug;

use bazaar_core::validation::{parse_order_status, parse_role, validate_id};
use bazaar_core::{NewProduct, OrderStatus, Role};

use crate::error::ApiError;
use crate::state::AppState;

/// One parsed console line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Catalog,
    PlaceOrder {
        product_id: String,
        customer_name: String,
    },
    MyOrders {
        customer_name: String,
    },
    Vendors,
    VendorProducts {
        vendor_id: String,
    },
    Incoming {
        vendor_id: String,
    },
    AddProduct(NewProduct),
    Advance {
        vendor_id: String,
        order_id: String,
        status: OrderStatus,
    },
    Pending,
    SetApproval {
        product_id: String,
        approved: bool,
    },
    SetStatus {
        order_id: String,
        status: OrderStatus,
    },
    Orders,
    SwitchRole(Option<Role>),
    Help,
    Quit,
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Json(Value),
    Text(String),
    Quit,
}

impl Command {
    /// Parses one input line.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments.
    pub fn parse(line: &str) -> Result<Option<Command>, ApiError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match word.to_lowercase().as_str() {
            "catalog" => {
                no_args(word, &args)?;
                Command::Catalog
            }
            "order" => {
                let (product_id, rest) = args
                    .split_first()
                    .ok_or_else(|| usage("order <product_id> [customer name]"))?;
                Command::PlaceOrder {
                    product_id: id_arg("product id", product_id)?,
                    customer_name: rest.join(" "),
                }
            }
            "my-orders" => Command::MyOrders {
                customer_name: args.join(" "),
            },
            "vendors" => {
                no_args(word, &args)?;
                Command::Vendors
            }
            "products" => Command::VendorProducts {
                vendor_id: single_id("products <vendor_id>", "vendor id", &args)?,
            },
            "incoming" => Command::Incoming {
                vendor_id: single_id("incoming <vendor_id>", "vendor id", &args)?,
            },
            "add" => Command::AddProduct(parse_add(&args)?),
            "advance" => match args.as_slice() {
                [vendor_id, order_id, status] => Command::Advance {
                    vendor_id: id_arg("vendor id", vendor_id)?,
                    order_id: id_arg("order id", order_id)?,
                    status: parse_order_status(status)?,
                },
                _ => return Err(usage("advance <vendor_id> <order_id> <status>")),
            },
            "pending" => {
                no_args(word, &args)?;
                Command::Pending
            }
            "approve" => Command::SetApproval {
                product_id: single_id("approve <product_id>", "product id", &args)?,
                approved: true,
            },
            "keep-pending" => Command::SetApproval {
                product_id: single_id("keep-pending <product_id>", "product id", &args)?,
                approved: false,
            },
            "set-status" => match args.as_slice() {
                [order_id, status] => Command::SetStatus {
                    order_id: id_arg("order id", order_id)?,
                    status: parse_order_status(status)?,
                },
                _ => return Err(usage("set-status <order_id> <status>")),
            },
            "orders" => {
                no_args(word, &args)?;
                Command::Orders
            }
            "role" => match args.as_slice() {
                ["all"] => Command::SwitchRole(None),
                [role] => Command::SwitchRole(Some(parse_role(role)?)),
                _ => return Err(usage("role <customer|vendor|admin|all>")),
            },
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(ApiError::unknown_command(format!(
                    "Unknown command '{}'; type 'help' for a list",
                    other
                )))
            }
        };

        Ok(Some(command))
    }

    /// The view a command belongs to, or `None` for commands every view has.
    pub fn role(&self) -> Option<Role> {
        match self {
            Command::Catalog | Command::PlaceOrder { .. } | Command::MyOrders { .. } => {
                Some(Role::Customer)
            }
            Command::VendorProducts { .. }
            | Command::Incoming { .. }
            | Command::AddProduct(_)
            | Command::Advance { .. } => Some(Role::Vendor),
            Command::Pending
            | Command::SetApproval { .. }
            | Command::SetStatus { .. }
            | Command::Orders => Some(Role::Admin),
            Command::Vendors | Command::SwitchRole(_) | Command::Help | Command::Quit => None,
        }
    }
}

/// Runs a command against the session state.
///
/// When a view is active, commands owned by another view are refused.
pub fn execute(state: &mut AppState, command: Command) -> Result<Reply, ApiError> {
    if let (Some(active), Some(required)) = (state.role, command.role()) {
        if active != required {
            return Err(ApiError::forbidden(format!(
                "The {} view cannot run {} commands",
                active, required
            )));
        }
    }

    debug!(command = ?command, "execute");

    match command {
        Command::Catalog => customer::catalog(state),
        Command::PlaceOrder {
            product_id,
            customer_name,
        } => customer::place_order(state, &product_id, &customer_name),
        Command::MyOrders { customer_name } => customer::my_orders(state, &customer_name),
        Command::Vendors => vendor::list_vendors(state),
        Command::VendorProducts { vendor_id } => vendor::products(state, &vendor_id),
        Command::Incoming { vendor_id } => vendor::incoming(state, &vendor_id),
        Command::AddProduct(new) => vendor::add_product(state, new),
        Command::Advance {
            vendor_id,
            order_id,
            status,
        } => vendor::advance(state, &vendor_id, &order_id, status),
        Command::Pending => admin::pending(state),
        Command::SetApproval {
            product_id,
            approved,
        } => admin::set_approval(state, &product_id, approved),
        Command::SetStatus { order_id, status } => admin::set_status(state, &order_id, status),
        Command::Orders => admin::all_orders(state),
        Command::SwitchRole(role) => {
            state.role = role;
            Ok(Reply::Text(match role {
                Some(role) => format!("Viewing as {}", role),
                None => "Viewing as all roles".to_string(),
            }))
        }
        Command::Help => Ok(Reply::Text(help_text(state))),
        Command::Quit => Ok(Reply::Quit),
    }
}

/// Serializes a reply body.
pub(crate) fn json<T: serde::Serialize>(value: &T) -> Result<Reply, ApiError> {
    Ok(Reply::Json(serde_json::to_value(value)?))
}

fn help_text(state: &AppState) -> String {
    let view = state.role.map_or("all roles", |r| r.as_str());
    format!(
        "{} (viewing as {})

customer:
  catalog                                   approved products
  order <product_id> [name...]              place an order
  my-orders [name...]                       orders placed under a name
vendor:
  products <vendor_id>                      a vendor's listings
  incoming <vendor_id>                      orders routed to a vendor
  add <vendor_id> <price> <name...> [--image URI]
                                            submit a product for approval
  advance <vendor_id> <order_id> <status>   accept, reject or ship an order
admin:
  pending                                   products awaiting approval
  approve <product_id>                      approve a product
  keep-pending <product_id>                 put a product back to pending
  set-status <order_id> <status>            set any order status
  orders                                    every order
any:
  vendors, role <customer|vendor|admin|all>, help, quit",
        state.config.store_name, view
    )
}

// =============================================================================
// Argument Helpers
// =============================================================================

fn usage(form: &str) -> ApiError {
    ApiError::unknown_command(format!("Usage: {}", form))
}

fn no_args(word: &str, args: &[&str]) -> Result<(), ApiError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(usage(word))
    }
}

fn id_arg(field: &str, value: &str) -> Result<String, ApiError> {
    validate_id(field, value)?;
    Ok(value.to_string())
}

fn single_id(form: &str, field: &str, args: &[&str]) -> Result<String, ApiError> {
    match args {
        [id] => id_arg(field, id),
        _ => Err(usage(form)),
    }
}

/// `add <vendor_id> <price> <name...> [--image URI]`
fn parse_add(args: &[&str]) -> Result<NewProduct, ApiError> {
    const FORM: &str = "add <vendor_id> <price> <name...> [--image URI]";

    let mut image = String::new();
    let mut rest: Vec<&str> = Vec::with_capacity(args.len());
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if *arg == "--image" {
            image = iter.next().ok_or_else(|| usage(FORM))?.to_string();
        } else {
            rest.push(*arg);
        }
    }

    match rest.as_slice() {
        [vendor_id, price, name @ ..] if !name.is_empty() => Ok(NewProduct::new(
            name.join(" "),
            *price,
            id_arg("vendor id", vendor_id)?,
            image,
        )),
        _ => Err(usage(FORM)),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
