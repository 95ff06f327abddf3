//! Common value types used across the workspace.

pub mod exchange;
pub mod money;

pub use exchange::ExchangeRate;
pub use money::{Currency, Money, MoneyError};
