//! # Configuration State
//!
//! Console configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BAZAAR_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization.

use serde::Serialize;

use bazaar_core::{DEFAULT_CUSTOMER_NAME, PLACEHOLDER_IMAGE_URI};
use bazaar_store::StoreConfig;

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the `help` banner
    pub store_name: String,

    /// Recorded on orders placed without a name
    pub default_customer_name: String,

    /// Used for products submitted without an image
    pub placeholder_image: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Bazaar Marketplace".to_string(),
            default_customer_name: DEFAULT_CUSTOMER_NAME.to_string(),
            placeholder_image: PLACEHOLDER_IMAGE_URI.to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BAZAAR_STORE_NAME`: Override store name
    /// - `BAZAAR_DEFAULT_CUSTOMER`: Override the anonymous customer name
    /// - `BAZAAR_PLACEHOLDER_IMAGE`: Override the placeholder image URI
    /// - `BAZAAR_CURRENCY_SYMBOL`: Override the currency symbol
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an injectable lookup.
    ///
    /// Blank values are ignored so an empty variable cannot erase a default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(store_name) = value("BAZAAR_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(name) = value("BAZAAR_DEFAULT_CUSTOMER") {
            config.default_customer_name = name.trim().to_string();
        }

        if let Some(image) = value("BAZAAR_PLACEHOLDER_IMAGE") {
            config.placeholder_image = image.trim().to_string();
        }

        if let Some(symbol) = value("BAZAAR_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        config
    }

    /// The part of the configuration the store itself applies.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            default_customer_name: self.default_customer_name.clone(),
            placeholder_image: self.placeholder_image.clone(),
        }
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1999), "$19.99");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(1999), "$19.99");
        assert_eq!(config.format_currency(2400), "$24.00");
        assert_eq!(config.format_currency(0), "$0.00");
        assert_eq!(config.format_currency(-1234), "-$12.34");
    }

    #[test]
    fn test_from_lookup_without_variables_is_default() {
        let config = ConfigState::from_lookup(|_| None);
        assert_eq!(config, ConfigState::default());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("BAZAAR_STORE_NAME", "Hardware Row"),
            ("BAZAAR_DEFAULT_CUSTOMER", " Walk-in "),
            ("BAZAAR_CURRENCY_SYMBOL", "€"),
        ]));

        assert_eq!(config.store_name, "Hardware Row");
        assert_eq!(config.default_customer_name, "Walk-in");
        assert_eq!(config.format_currency(500), "€5.00");
        assert_eq!(config.placeholder_image, PLACEHOLDER_IMAGE_URI);
    }

    #[test]
    fn test_blank_variables_are_ignored() {
        let config = ConfigState::from_lookup(lookup_from(&[("BAZAAR_DEFAULT_CUSTOMER", "  ")]));
        assert_eq!(config.default_customer_name, "Guest");
    }

    #[test]
    fn test_store_config_carries_defaults() {
        let config = ConfigState::from_lookup(lookup_from(&[(
            "BAZAAR_PLACEHOLDER_IMAGE",
            "https://img.example/none.png",
        )]));
        let store = config.store_config();
        assert_eq!(store.default_customer_name, "Guest");
        assert_eq!(store.placeholder_image, "https://img.example/none.png");
    }
}
