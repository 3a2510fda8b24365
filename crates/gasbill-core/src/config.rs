//! Application configuration
//!
//! Centralized configuration management using the `config` crate.
//! Configuration can be loaded from environment variables and config files.
//! There is no module-level mutable state: the configuration is built once
//! in `main` and passed by value or reference from there.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::models::GasTariff;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Active gas tariff constants
    #[serde(default)]
    pub tariff: GasTariff,

    /// Presentation settings for rendered amounts
    #[serde(default)]
    pub display: DisplayConfig,
}

/// HTTP server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of worker threads
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Allowed CORS origins
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_workers() -> usize {
    num_cpus::get()
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://127.0.0.1:3000".to_string(),
    ]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
            cors_origins: default_cors_origins(),
        }
    }
}

/// Placement of the currency symbol relative to the amount
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyPosition {
    /// Symbol before the amount, e.g. `€12.34`
    Before,
    /// Symbol after the amount, e.g. `12.34€`
    After,
}

/// Presentation configuration
///
/// Explicit values passed to the rendering code, never globals; the
/// core calculation itself never reads these.
#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    /// Currency symbol for monetary amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Whether the symbol goes before or after the amount
    #[serde(default = "default_currency_position")]
    pub currency_position: CurrencyPosition,
}

fn default_currency_symbol() -> String {
    "€".to_string()
}

fn default_currency_position() -> CurrencyPosition {
    CurrencyPosition::Before
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            currency_position: default_currency_position(),
        }
    }
}

impl DisplayConfig {
    /// Format a monetary amount with the configured symbol, two decimals
    pub fn format_amount(&self, amount: rust_decimal::Decimal) -> String {
        let rounded = amount.round_dp(2);
        match self.currency_position {
            CurrencyPosition::Before => format!("{}{:.2}", self.currency_symbol, rounded),
            CurrencyPosition::After => format!("{:.2}{}", rounded, self.currency_symbol),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and optional config files
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.workers", num_cpus::get() as i64)?
            // Load config files if they exist
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables with GASBILL_ prefix
            // (e.g. GASBILL__TARIFF__RETAIL_ENERGY_PRICE=0.85)
            .add_source(
                Environment::with_prefix("GASBILL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(path))
            .add_source(Environment::with_prefix("GASBILL").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Get the server bind address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
