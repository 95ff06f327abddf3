//! Property-based tests for money arithmetic and conversion.

use proptest::prelude::*;
use stocks_shared::{Currency, Money};

use super::bank::Bank;

/// Strategy to generate amounts in cents (0.01 to 1,000,000.00).
fn amount() -> impl Strategy<Value = f64> {
    (1i32..100_000_000i32).prop_map(|cents| f64::from(cents) / 100.0)
}

/// Strategy to generate non-zero factors.
fn factor() -> impl Strategy<Value = f64> {
    prop_oneof![(-1000.0f64..-0.001), (0.001f64..1000.0)]
}

/// Strategy to generate currency codes, including non-ISO ones.
fn currency() -> impl Strategy<Value = Currency> {
    "[A-Z]{3}|Kalganid".prop_map(Currency::new)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_times_scales_amount_and_keeps_currency(
        amount in amount(),
        factor in factor(),
        currency in currency(),
    ) {
        let money = Money::new(amount, currency.clone());
        let result = money.times(factor);
        prop_assert_eq!(result.amount, amount * factor);
        prop_assert_eq!(result.currency, currency);
    }

    #[test]
    fn prop_divide_scales_amount_and_keeps_currency(
        amount in amount(),
        divisor in factor(),
        currency in currency(),
    ) {
        let money = Money::new(amount, currency.clone());
        let result = money.divide(divisor);
        prop_assert_eq!(result.amount, amount / divisor);
        prop_assert_eq!(result.currency, currency);
    }

    #[test]
    fn prop_same_currency_add_is_commutative(
        left in amount(),
        right in amount(),
        currency in currency(),
    ) {
        let a = Money::new(left, currency.clone());
        let b = Money::new(right, currency);
        prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }

    #[test]
    fn prop_different_currency_add_fails(
        left in amount(),
        right in amount(),
        from in currency(),
        to in currency(),
    ) {
        prop_assume!(from != to);
        let a = Money::new(left, from);
        let b = Money::new(right, to);
        prop_assert!(a.add(&b).is_err());
    }

    #[test]
    fn prop_convert_multiplies_by_latest_rate(
        amount in amount(),
        first in 0.001f64..1000.0,
        second in 0.001f64..1000.0,
    ) {
        let mut bank = Bank::new();
        let usd = Currency::new("USD");
        let money = Money::new(amount, "EUR");

        bank.add_exchange_rate("EUR", "USD", first);
        prop_assert_eq!(bank.convert(&money, &usd).unwrap().amount, amount * first);

        bank.add_exchange_rate("EUR", "USD", second);
        prop_assert_eq!(bank.convert(&money, &usd).unwrap().amount, amount * second);
    }

    #[test]
    fn prop_same_currency_convert_is_identity(
        amount in amount(),
        currency in currency(),
    ) {
        let money = Money::new(amount, currency.clone());
        prop_assert_eq!(Bank::new().convert(&money, &currency).unwrap(), money);
    }
}
