//! Directional currency pair used as the bank's lookup key.

use stocks_shared::Currency;

/// Ordered `(from, to)` pair of currencies.
///
/// Renders as `FROM->TO`, which is the key reported when a rate is missing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    /// Source currency.
    pub from: Currency,
    /// Target currency.
    pub to: Currency,
}

impl CurrencyPair {
    /// Creates a new pair.
    #[must_use]
    pub fn new(from: impl Into<Currency>, to: impl Into<Currency>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Returns the pair in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

impl std::fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}
