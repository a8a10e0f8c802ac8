//! # API Error Type
//!
//! Unified error type for console commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  input line                                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Command::parse ─── bad arity / unknown word ──► UNKNOWN_COMMAND        │
//! │       │             bad status / price arg   ──► VALIDATION_ERROR       │
//! │       ▼                                                                 │
//! │  commands::execute                                                      │
//! │       │                                                                 │
//! │       ├── StoreError::NotFound        ──────────► NOT_FOUND             │
//! │       ├── CoreError::ProductNotApproved ────────► BUSINESS_LOGIC        │
//! │       ├── CoreError::InvalidTransition ─────────► BUSINESS_LOGIC        │
//! │       ├── CoreError::Validation       ──────────► VALIDATION_ERROR      │
//! │       └── StoreError::IdExhausted     ──────────► INTERNAL              │
//! │                                                                         │
//! │  Written to output as {"error": {"code": "...", "message": "..."}}      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use bazaar_core::{CoreError, ValidationError};
use bazaar_store::StoreError;

/// API error returned from console commands.
///
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: p9"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Referenced record does not exist
    NotFound,

    /// Input validation failed
    ValidationError,

    /// A marketplace rule refused the operation
    BusinessLogic,

    /// The command word or its arguments were not understood
    UnknownCommand,

    /// The acting role may not run this command
    Forbidden,

    /// Internal failure
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn unknown_command(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::UnknownCommand, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Forbidden, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            StoreError::Rule(e) => e.into(),
            StoreError::IdExhausted { prefix } => {
                tracing::error!(prefix = %prefix, "Id generation exhausted");
                ApiError::internal("Could not allocate a new id")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotApproved(_) | CoreError::InvalidTransition { .. } => {
                ApiError::new(ErrorCode::BusinessLogic, err.to_string())
            }
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Serialization failed: {}", err);
        ApiError::internal("Failed to serialize reply")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
