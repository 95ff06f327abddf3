//! Exchange rate record.

use serde::{Deserialize, Serialize};

use super::money::Currency;

/// Directional exchange rate between two currencies.
///
/// `1 from_currency = rate to_currency`. The reverse direction is a separate rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Source currency code.
    #[serde(alias = "from")]
    pub from_currency: Currency,
    /// Target currency code.
    #[serde(alias = "to")]
    pub to_currency: Currency,
    /// Multiplier from source to target.
    pub rate: f64,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    #[must_use]
    pub fn new(from_currency: impl Into<Currency>, to_currency: impl Into<Currency>, rate: f64) -> Self {
        Self {
            from_currency: from_currency.into(),
            to_currency: to_currency.into(),
            rate,
        }
    }
}
