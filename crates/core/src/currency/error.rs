//! Currency conversion errors.

use thiserror::Error;

use super::pair::CurrencyPair;

/// Errors that can occur while converting money.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    /// No directional rate registered for the pair. Displays as the lookup key.
    #[error("{0}")]
    MissingRate(CurrencyPair),
}

impl BankError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingRate(_) => "MISSING_EXCHANGE_RATE",
        }
    }
}
