//! Portfolio value and evaluation into a single currency.

use stocks_shared::{Currency, Money};
use tracing::{debug, warn};

use super::error::PortfolioError;
use crate::currency::{Converter, CurrencyPair};

/// Ordered collection of money values, possibly in different currencies.
///
/// `Portfolio::default()` is a valid empty portfolio. Adding returns a new
/// value instead of mutating in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Portfolio {
    moneys: Vec<Money>,
}

impl Portfolio {
    /// Creates an empty portfolio.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a portfolio with `money` appended.
    #[must_use]
    pub fn add(mut self, money: Money) -> Self {
        self.moneys.push(money);
        self
    }

    /// Returns a portfolio with every value of `moneys` appended, in order.
    #[must_use]
    pub fn add_all(mut self, moneys: impl IntoIterator<Item = Money>) -> Self {
        self.moneys.extend(moneys);
        self
    }

    /// Number of held values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moneys.len()
    }

    /// Returns true if nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moneys.is_empty()
    }

    /// Iterates held values in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Money> {
        self.moneys.iter()
    }

    /// Sums every held value in `target`, converting through `bank`.
    ///
    /// All holdings are tried before failing, so one error reports every
    /// missing rate. No partial total is returned.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::MissingRates`] listing `holding -> target`
    /// for each holding that could not be converted.
    pub fn evaluate<C: Converter + ?Sized>(
        &self,
        bank: &C,
        target: &Currency,
    ) -> Result<Money, PortfolioError> {
        let mut total = 0.0;
        let mut missing = Vec::new();

        for money in &self.moneys {
            match bank.convert(money, target) {
                Ok(converted) => total += converted.amount,
                Err(_) => missing.push(CurrencyPair::new(money.currency.clone(), target.clone())),
            }
        }

        if !missing.is_empty() {
            warn!(%target, missing = missing.len(), "portfolio evaluation failed");
            return Err(PortfolioError::MissingRates(missing));
        }

        let total = Money::new(total, target.clone());
        debug!(holdings = self.moneys.len(), %total, "portfolio evaluated");
        Ok(total)
    }
}

impl FromIterator<Money> for Portfolio {
    fn from_iter<I: IntoIterator<Item = Money>>(moneys: I) -> Self {
        Self::new().add_all(moneys)
    }
}

impl<'a> IntoIterator for &'a Portfolio {
    type Item = &'a Money;
    type IntoIter = std::slice::Iter<'a, Money>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
