//! Money type: an amount tagged with a currency code.
//!
//! Amounts are `f64`. Division by zero follows IEEE semantics and yields
//! infinity or NaN; guarding against it is the caller's job.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by money arithmetic and currency parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Tried to add two amounts held in different currencies.
    #[error("Nie można dodać {addend} do {augend}")]
    IncompatibleCurrencies {
        /// Currency of the receiver.
        augend: Currency,
        /// Currency of the amount being added.
        addend: Currency,
    },

    /// Currency code was empty or whitespace.
    #[error("Currency code cannot be empty")]
    EmptyCurrency,
}

impl MoneyError {
    /// Returns a stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::IncompatibleCurrencies { .. } => "INCOMPATIBLE_CURRENCIES",
            Self::EmptyCurrency => "EMPTY_CURRENCY",
        }
    }
}

/// Opaque currency identifier.
///
/// Any code is accepted: `"USD"` and `"Kalganid"` are equally valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Creates a currency from any string-like code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the currency code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.is_empty() {
            return Err(MoneyError::EmptyCurrency);
        }
        Ok(Self::new(code))
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Represents a monetary amount with currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    /// The amount.
    pub amount: f64,
    /// Currency the amount is held in.
    pub currency: Currency,
}

impl Money {
    /// Creates a new Money instance. No validation is performed.
    #[must_use]
    pub fn new(amount: f64, currency: impl Into<Currency>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: impl Into<Currency>) -> Self {
        Self::new(0.0, currency)
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount == 0.0
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount < 0.0
    }

    /// Multiplies the amount by `factor`, keeping the currency.
    #[must_use]
    pub fn times(&self, factor: f64) -> Self {
        Self {
            amount: self.amount * factor,
            currency: self.currency.clone(),
        }
    }

    /// Divides the amount by `divisor`, keeping the currency.
    #[must_use]
    pub fn divide(&self, divisor: f64) -> Self {
        Self {
            amount: self.amount / divisor,
            currency: self.currency.clone(),
        }
    }

    /// Adds two amounts held in the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::IncompatibleCurrencies`] when the currencies differ.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Result<Self, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::IncompatibleCurrencies {
                augend: self.currency.clone(),
                addend: other.currency.clone(),
            });
        }
        Ok(Self {
            amount: self.amount + other.amount,
            currency: self.currency.clone(),
        })
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
