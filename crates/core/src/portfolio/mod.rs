//! Portfolio of mixed-currency holdings.
//!
//! - `holdings` - the portfolio value and its evaluation
//! - `error` - aggregated evaluation errors

pub mod error;
pub mod holdings;


pub use error::PortfolioError;
pub use holdings::Portfolio;
