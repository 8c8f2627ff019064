//! Data handling for the portfolio viewer
//!
//! Configuration, the HTTP client for the portfolio API, the lenient
//! response models and the mapping from responses to view models.

pub mod config;
pub mod models;
pub mod sources;
pub mod view;

use thiserror::Error;

// Re-exports
pub use config::PortfolioConfig;
pub use models::Portfolio;
pub use sources::{ContactForm, ContactOutcome, PortfolioClient, ResumeFile};
pub use view::PortfolioView;

/// Errors that can occur talking to the portfolio API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success response. `message` is what the user gets to see.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;
