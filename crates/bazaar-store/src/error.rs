//! # Store Error Types
//!
//! Error types for store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Lookup by id matched nothing ──► StoreError::NotFound                 │
//! │  Business rule refused change ──► CoreError ──► StoreError::Rule       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in console) ← Serialized for the view                       │
//! │                                                                         │
//! │  Whenever an Err is returned the store is left exactly as it was.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bazaar_core::CoreError;
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    /// Entity not found.
    ///
    /// ## When This Occurs
    /// - Ordering a product id that does not exist
    /// - Adding a product for an unknown vendor
    /// - Updating an order or product that does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A domain rule refused the change.
    #[error(transparent)]
    Rule(#[from] CoreError),

    /// Every generated id collided with an existing one.
    #[error("Could not generate a unique {prefix} id")]
    IdExhausted { prefix: String },
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
