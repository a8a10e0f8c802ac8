//! # Store Configuration
//!
//! Defaults the store applies when callers leave optional fields blank.

use bazaar_core::{DEFAULT_CUSTOMER_NAME, PLACEHOLDER_IMAGE_URI};

/// Store-level defaults.
///
/// ## Fields
/// - `default_customer_name`: recorded on orders placed without a name
/// - `placeholder_image`: used for products submitted without an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub default_customer_name: String,
    pub placeholder_image: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            default_customer_name: DEFAULT_CUSTOMER_NAME.to_string(),
            placeholder_image: PLACEHOLDER_IMAGE_URI.to_string(),
        }
    }
}
