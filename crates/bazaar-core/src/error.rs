//! # Error Types
//!
//! Domain-specific error types for bazaar-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bazaar-core errors (this file)                                        │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  bazaar-store errors (separate crate)                                  │
//! │  └── StoreError       - Lookups that matched nothing                   │
//! │                                                                         │
//! │  Console errors (in app)                                               │
//! │  └── ApiError         - What the views see (serialized)                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → View      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::OrderStatus;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations.
///
/// Every variant means the requested change was refused and nothing was
/// mutated.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// Product exists but has not been approved by an admin.
    ///
    /// ## When This Occurs
    /// - A customer orders a product that is still pending approval
    /// - An admin set the product back to pending after it was listed
    #[error("Product {0} is pending approval and cannot be ordered")]
    ProductNotApproved(String),

    /// Order status change outside the vendor workflow.
    ///
    /// ## User Workflow
    /// ```text
    /// Vendor clicks "Mark Shipped" on a pending order
    ///      │
    ///      ▼
    /// InvalidTransition { from: Pending, to: Shipped }
    ///      │
    ///      ▼
    /// UI shows: "Order ord_x cannot move from pending to shipped"
    /// ```
    #[error("Order {order_id} cannot move from {from} to {to}")]
    InvalidTransition {
        order_id: String,
        from: OrderStatus,
        to: OrderStatus,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised at the view boundary.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
