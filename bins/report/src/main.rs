//! Stocks portfolio report.
//!
//! Loads exchange rates and holdings from configuration, evaluates the
//! portfolio in the configured target currency and logs the total.

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stocks_core::{Bank, Portfolio};
use stocks_shared::AppConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stocks_report=debug,stocks_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let bank: Bank = config.bank.rates.into_iter().collect();
    let portfolio: Portfolio = config.portfolio.holdings.into_iter().collect();
    let target = config.portfolio.target_currency;
    info!(rates = bank.len(), holdings = portfolio.len(), %target, "configuration loaded");

    match portfolio.evaluate(&bank, &target) {
        Ok(total) => {
            info!(%total, "portfolio evaluated");
            println!("{total}");
            Ok(())
        }
        Err(err) => {
            error!(code = err.error_code(), "{err}");
            Err(err.into())
        }
    }
}
