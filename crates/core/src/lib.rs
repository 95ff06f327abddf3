//! Core logic for stocks.
//!
//! Pure in-memory computation with no I/O.
//!
//! # Modules
//!
//! - `currency` - Exchange-rate table and money conversion
//! - `portfolio` - Mixed-currency holdings evaluated into one currency

pub mod currency;
pub mod portfolio;

pub use currency::{Bank, BankError, Converter, CurrencyPair};
pub use portfolio::{Portfolio, PortfolioError};
