//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SCENT_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use scent_core::auth::{StaticPassword, DEFAULT_ADMIN_PASSWORD};
use scent_core::catalog::{DEFAULT_IMAGE_BASE_URL, DEFAULT_SEED_COUNT};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Largest catalog `SCENT_SEED_COUNT` may ask for; bigger values are clamped.
pub const MAX_SEED_COUNT: u64 = 10_000;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (navbar and footer)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// How many "Perfume n" products to seed
    pub seed_count: u64,

    /// Placeholder image base; the product index is appended
    pub image_base_url: String,

    /// Admin password for the placeholder authenticator.
    /// Never serialized, redacted in `Debug`.
    #[serde(skip, default = "default_admin_password")]
    pub admin_password: SecretString,
}

fn default_admin_password() -> SecretString {
    SecretString::from(DEFAULT_ADMIN_PASSWORD)
}

impl Default for ConfigState {
    /// Returns default configuration suitable for the demo.
    ///
    /// ## Default Values
    /// - Store: "Perfume Store"
    /// - Currency: $ with 2 decimals
    /// - Catalog: 20 seeded perfumes with picsum placeholder images
    /// - Admin password: "admin123"
    fn default() -> Self {
        ConfigState {
            store_name: "Perfume Store".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            seed_count: DEFAULT_SEED_COUNT,
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            admin_password: default_admin_password(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SCENT_STORE_NAME`: Override store name
    /// - `SCENT_ADMIN_PASSWORD`: Override the admin password
    /// - `SCENT_SEED_COUNT`: Number of seeded products (e.g., "50"), at most
    ///   [`MAX_SEED_COUNT`]
    /// - `SCENT_IMAGE_BASE_URL`: Override placeholder image base
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds config from an arbitrary key lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("SCENT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(password) = lookup("SCENT_ADMIN_PASSWORD") {
            config.admin_password = SecretString::from(password);
        }

        if let Some(count) = lookup("SCENT_SEED_COUNT") {
            match count.trim().parse::<u64>() {
                Ok(n) if n > MAX_SEED_COUNT => {
                    warn!(value = n, max = MAX_SEED_COUNT, "Clamping SCENT_SEED_COUNT");
                    config.seed_count = MAX_SEED_COUNT;
                }
                Ok(n) => config.seed_count = n,
                Err(e) => warn!(value = %count, error = %e, "Ignoring invalid SCENT_SEED_COUNT"),
            }
        }

        if let Some(base) = lookup("SCENT_IMAGE_BASE_URL") {
            config.image_base_url = base;
        }

        config
    }

    /// The placeholder authenticator for this configuration.
    pub fn authenticator(&self) -> StaticPassword {
        StaticPassword::from_secret(self.admin_password.clone())
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use scent_storefront::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
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
