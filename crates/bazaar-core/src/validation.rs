//! # Validation Module
//!
//! Input coercion and validation for values entered in the role views.
//!
//! ## Two Kinds of Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Input Handling                                     │
//! │                                                                         │
//! │  Coercion (never fails, used by the store)                             │
//! │  ├── coerce_price           "abc" → $0.00, "-5" → $0.00                │
//! │  ├── customer_name_or       "" → "Guest", anything else as given      │
//! │  └── image_or               "" → placeholder URI                       │
//! │                                                                         │
//! │  Validation (fails, used at the view boundary)                         │
//! │  ├── validate_product_name  required, max length                       │
//! │  ├── validate_customer_name max length                                 │
//! │  ├── validate_id            required                                   │
//! │  ├── parse_order_status     one of the four statuses                   │
//! │  └── parse_role             customer, vendor or admin                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{OrderStatus, Role};
use crate::{MAX_CUSTOMER_NAME_LEN, MAX_PRODUCT_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Coercion
// =============================================================================

/// Turns a price typed into the vendor form into a non-negative amount.
///
/// Unparseable and negative input both become zero rather than an error.
///
/// ```rust
/// use bazaar_core::validation::coerce_price;
///
/// assert_eq!(coerce_price("49.99").cents(), 4999);
/// assert_eq!(coerce_price("not a price").cents(), 0);
/// assert_eq!(coerce_price("-5").cents(), 0);
/// ```
pub fn coerce_price(input: &str) -> Money {
    match Money::parse(input) {
        Some(price) if !price.is_negative() => price,
        _ => Money::zero(),
    }
}

/// Returns the customer name as given, or `default` when it is empty.
///
/// Only the empty string falls back; whitespace is kept as typed.
pub fn customer_name_or(name: &str, default: &str) -> String {
    if name.is_empty() {
        default.to_string()
    } else {
        name.to_string()
    }
}

/// Returns the image URI as given, or `placeholder` when it is empty.
pub fn image_or(image: &str, placeholder: &str) -> String {
    if image.is_empty() {
        placeholder.to_string()
    } else {
        image.to_string()
    }
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name submitted by a vendor.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a customer name. Empty is allowed (the store falls back to
/// the default customer).
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    if name.trim().chars().count() > MAX_CUSTOMER_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "customer name".to_string(),
            max: MAX_CUSTOMER_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates that an entity id was supplied.
pub fn validate_id(field: &str, id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if id.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must not contain whitespace".to_string(),
        });
    }

    Ok(())
}

/// Parses a status name (`"pending"`, `"accepted"`, `"shipped"`,
/// `"rejected"`), ignoring case and surrounding whitespace.
///
/// ```rust
/// use bazaar_core::validation::parse_order_status;
/// use bazaar_core::OrderStatus;
///
/// assert_eq!(parse_order_status("Shipped").unwrap(), OrderStatus::Shipped);
/// assert!(parse_order_status("lost").is_err());
/// ```
pub fn parse_order_status(input: &str) -> ValidationResult<OrderStatus> {
    let wanted = input.trim().to_lowercase();

    OrderStatus::ALL
        .into_iter()
        .find(|status| status.as_str() == wanted)
        .ok_or_else(|| ValidationError::NotAllowed {
            field: "status".to_string(),
            allowed: OrderStatus::ALL
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
        })
}

/// Parses a view name (`"customer"`, `"vendor"`, `"admin"`), ignoring case.
pub fn parse_role(input: &str) -> ValidationResult<Role> {
    match input.trim().to_lowercase().as_str() {
        "customer" => Ok(Role::Customer),
        "vendor" => Ok(Role::Vendor),
        "admin" => Ok(Role::Admin),
        _ => Err(ValidationError::NotAllowed {
            field: "role".to_string(),
            allowed: vec![
                "customer".to_string(),
                "vendor".to_string(),
                "admin".to_string(),
            ],
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
