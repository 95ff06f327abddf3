//! Exchange rates and currency conversion.

pub mod bank;
pub mod error;
pub mod pair;

#[cfg(test)]
mod props;

pub use bank::{Bank, Converter};
pub use error::BankError;
pub use pair::CurrencyPair;
