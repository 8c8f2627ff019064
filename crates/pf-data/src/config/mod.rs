//! Runtime configuration module

pub mod portfolio_config;

pub use portfolio_config::*;
