//! Portfolio evaluation errors.

use thiserror::Error;

use crate::currency::CurrencyPair;

/// Errors that can occur while evaluating a portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortfolioError {
    /// One or more holdings could not be converted. Pairs are
    /// `holding currency -> target`, in holding order.
    #[error("Brakuje kursu (kursów) wymiany: [ {}]", join_pairs(.0))]
    MissingRates(Vec<CurrencyPair>),
}

impl PortfolioError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingRates(_) => "MISSING_EXCHANGE_RATES",
        }
    }

    /// Pairs that had no rate, in the order they were encountered.
    #[must_use]
    pub fn missing_pairs(&self) -> &[CurrencyPair] {
        match self {
            Self::MissingRates(pairs) => pairs,
        }
    }
}

// Every pair is followed by ", ", including the last one.
fn join_pairs(pairs: &[CurrencyPair]) -> String {
    pairs.iter().map(|pair| format!("{pair}, ")).collect()
}
