//! Application configuration management.

use serde::Deserialize;

use crate::types::{Currency, ExchangeRate, Money};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Exchange rates to seed the bank with.
    #[serde(default)]
    pub bank: BankConfig,
    /// Holdings and reporting currency.
    #[serde(default)]
    pub portfolio: PortfolioConfig,
}

/// Bank configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BankConfig {
    /// Directional exchange rates. Later entries overwrite earlier ones.
    #[serde(default)]
    pub rates: Vec<ExchangeRate>,
}

/// Portfolio configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioConfig {
    /// Currency the portfolio is evaluated in.
    #[serde(default = "default_target_currency")]
    pub target_currency: Currency,
    /// Money values held, in insertion order.
    #[serde(default)]
    pub holdings: Vec<Money>,
}

fn default_target_currency() -> Currency {
    Currency::new("USD")
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            target_currency: default_target_currency(),
            holdings: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Reads `config/default` and `config/{RUN_MODE}` (both optional), then
    /// `STOCKS__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("STOCKS").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or has the wrong shape.
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
