//! API sources for the portfolio viewer

pub mod client;
pub mod contact;
pub mod resume;

pub use client::{PortfolioClient, PORTFOLIO_PATH};
pub use contact::{ContactForm, ContactOutcome, CONTACT_FIELDS, CONTACT_SENDING};
pub use resume::{
    ResumeFile, DEFAULT_RESUME_NAME, RESUME_DOWNLOAD_FAILED, RESUME_UNAVAILABLE,
    RESUME_UNAVAILABLE_LONG,
};
