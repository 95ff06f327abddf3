//! Shared types and configuration for stocks.
//!
//! This crate provides the value types every other crate builds on:
//! - Money, Currency and ExchangeRate
//! - Money arithmetic errors
//! - Configuration management

pub mod config;
pub mod types;

pub use config::AppConfig;
pub use types::{Currency, ExchangeRate, Money, MoneyError};
