//! Exchange-rate table and money conversion.
//!
//! Rates are directional: registering `EUR->USD` says nothing about
//! `USD->EUR`. Updates take `&mut self` and apply to every later conversion.

use std::collections::HashMap;

use stocks_shared::{Currency, ExchangeRate, Money};
use tracing::{debug, warn};

use super::error::BankError;
use super::pair::CurrencyPair;

/// Anything that can convert money into a target currency.
pub trait Converter {
    /// Converts `money` into `target`.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::MissingRate`] when no rate is known for the pair.
    fn convert(&self, money: &Money, target: &Currency) -> Result<Money, BankError>;
}

/// In-memory table of directional exchange rates.
#[derive(Debug, Clone, Default)]
pub struct Bank {
    exchange_rates: HashMap<CurrencyPair, f64>,
}

impl Bank {
    /// Creates a bank with no rates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the rate for `from -> to`, overwriting any previous value.
    ///
    /// No reciprocal rate is created.
    pub fn add_exchange_rate(
        &mut self,
        from: impl Into<Currency>,
        to: impl Into<Currency>,
        rate: f64,
    ) {
        let pair = CurrencyPair::new(from, to);
        debug!(%pair, rate, "exchange rate registered");
        self.exchange_rates.insert(pair, rate);
    }

    /// Returns the rate for `from -> to`, if registered.
    #[must_use]
    pub fn rate(&self, from: &Currency, to: &Currency) -> Option<f64> {
        self.exchange_rates
            .get(&CurrencyPair::new(from.clone(), to.clone()))
            .copied()
    }

    /// Number of registered rates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exchange_rates.len()
    }

    /// Returns true if no rates are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exchange_rates.is_empty()
    }

    /// Converts `money` into `target`.
    ///
    /// Same-currency conversions return a copy without a lookup.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::MissingRate`] carrying the `FROM->TO` key when the
    /// currencies differ and no rate is registered.
    pub fn convert(&self, money: &Money, target: &Currency) -> Result<Money, BankError> {
        if money.currency == *target {
            return Ok(money.clone());
        }

        let pair = CurrencyPair::new(money.currency.clone(), target.clone());
        match self.exchange_rates.get(&pair) {
            Some(rate) => {
                let converted = Money::new(money.amount * rate, target.clone());
                debug!(%pair, rate, from = %money, to = %converted, "converted");
                Ok(converted)
            }
            None => {
                warn!(%pair, "missing exchange rate");
                Err(BankError::MissingRate(pair))
            }
        }
    }
}

impl Converter for Bank {
    fn convert(&self, money: &Money, target: &Currency) -> Result<Money, BankError> {
        Bank::convert(self, money, target)
    }
}

impl Extend<ExchangeRate> for Bank {
    fn extend<I: IntoIterator<Item = ExchangeRate>>(&mut self, rates: I) {
        for rate in rates {
            self.add_exchange_rate(rate.from_currency, rate.to_currency, rate.rate);
        }
    }
}

impl FromIterator<ExchangeRate> for Bank {
    fn from_iter<I: IntoIterator<Item = ExchangeRate>>(rates: I) -> Self {
        let mut bank = Self::new();
        bank.extend(rates);
        bank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> Bank {
        let mut bank = Bank::new();
        bank.add_exchange_rate("EUR", "USD", 1.2);
        bank.add_exchange_rate("USD", "KRW", 1100.0);
        bank
    }

    #[test]
    fn test_new_bank_is_empty() {
        let bank = Bank::new();
        assert!(bank.is_empty());
        assert_eq!(bank.len(), 0);
    }

    #[test]
    fn test_conversion_with_different_rates_between_two_currencies() {
        let mut bank = bank();
        let ten_euros = Money::new(10.0, "EUR");
        let usd = Currency::new("USD");

        assert_eq!(bank.convert(&ten_euros, &usd).unwrap(), Money::new(12.0, "USD"));

        bank.add_exchange_rate("EUR", "USD", 1.3);
        assert_eq!(bank.convert(&ten_euros, &usd).unwrap(), Money::new(13.0, "USD"));
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn test_conversion_with_missing_exchange_rate() {
        let bank = bank();
        let ten_euros = Money::new(10.0, "EUR");

        let err = bank.convert(&ten_euros, &Currency::new("Kalganid")).unwrap_err();
        assert_eq!(err.to_string(), "EUR->Kalganid");
        assert_eq!(err, BankError::MissingRate(CurrencyPair::new("EUR", "Kalganid")));
    }

    #[test]
    fn test_same_currency_needs_no_rate() {
        let bank = Bank::new();
        let money = Money::new(7.5, "Kalganid");
        assert_eq!(bank.convert(&money, &Currency::new("Kalganid")).unwrap(), money);
    }

    #[test]
    fn test_rates_are_not_inverted() {
        let bank = bank();
        let err = bank
            .convert(&Money::new(12.0, "USD"), &Currency::new("EUR"))
            .unwrap_err();
        assert_eq!(err.to_string(), "USD->EUR");
        assert_eq!(bank.rate(&Currency::new("USD"), &Currency::new("EUR")), None);
        assert_eq!(bank.rate(&Currency::new("EUR"), &Currency::new("USD")), Some(1.2));
    }

    #[test]
    fn test_rates_are_not_chained() {
        // EUR->USD and USD->KRW exist, but EUR->KRW was never registered.
        let err = bank()
            .convert(&Money::new(1.0, "EUR"), &Currency::new("KRW"))
            .unwrap_err();
        assert_eq!(err.to_string(), "EUR->KRW");
    }

    #[test]
    fn test_collect_from_exchange_rates() {
        let bank: Bank = vec![
            ExchangeRate::new("EUR", "USD", 1.2),
            ExchangeRate::new("EUR", "USD", 1.3),
            ExchangeRate::new("USD", "KRW", 1100.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(bank.len(), 2);
        assert_eq!(bank.rate(&Currency::new("EUR"), &Currency::new("USD")), Some(1.3));
    }
}
