//! HTTP client for the portfolio API

use std::sync::Arc;
use std::time::Duration;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use crate::config::PortfolioConfig;
use crate::models::Portfolio;
use crate::{ApiError, ApiResult};

/// Path of the portfolio payload
pub const PORTFOLIO_PATH: &str = "/api/portfolio";

/// Client for the portfolio API
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct PortfolioClient {
    pub(crate) http: reqwest::Client,
    config: Arc<PortfolioConfig>,
}

impl PortfolioClient {
    /// Create a client for the configured API
    pub fn new(config: PortfolioConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("pf-viewer/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &PortfolioConfig {
        &self.config
    }

    /// Resolve an API path into an absolute URL
    pub fn url(&self, path: &str) -> ApiResult<Url> {
        let resolved = self.config.api_url(path);
        Url::parse(&resolved).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", resolved, e)))
    }

    /// Fetch the portfolio payload
    ///
    /// The body is decoded before the status is looked at, so a non-JSON
    /// error page fails as a decode error.
    pub async fn fetch_portfolio(&self) -> ApiResult<Portfolio> {
        let url = self.url(PORTFOLIO_PATH)?;
        debug!("Fetching: {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        let value: Value = serde_json::from_slice(&body)?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: format!("Portfolio request failed ({})", status.as_u16()),
            });
        }

        let portfolio = Portfolio::from_value(value);
        info!(
            "Loaded portfolio: {} skills, {} projects, {} posts",
            portfolio.skills.len(),
            portfolio.projects.len(),
            portfolio.blogs.len()
        );
        Ok(portfolio)
    }
}
