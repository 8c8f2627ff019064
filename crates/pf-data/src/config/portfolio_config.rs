//! Configuration injected into the viewer at startup

use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};
use pf_core::NavigationSettings;

use crate::ApiResult;

/// Portfolio viewer configuration
///
/// The two URL keys keep the names of the injected page configuration
/// object so the same JSON file can feed both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Base URL of the portfolio API
    #[serde(rename = "API_BASE_URL")]
    pub api_base_url: String,

    /// Base URL of the admin portal, empty to hide the admin link
    #[serde(rename = "ADMIN_PORTAL_URL")]
    pub admin_portal_url: String,

    /// Navigation tuning
    pub navigation: NavigationSettings,

    /// Where downloaded files are written
    pub download_dir: Option<PathBuf>,
}

impl PortfolioConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> ApiResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file
    pub fn from_file(path: &Path) -> ApiResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// API base with one trailing slash removed
    pub fn api_base(&self) -> &str {
        self.api_base_url
            .strip_suffix('/')
            .unwrap_or(&self.api_base_url)
    }

    /// Resolve an API path against the base
    ///
    /// Absolute `http://` and `https://` URLs are returned unchanged, as is
    /// every path when no base is configured.
    pub fn api_url(&self, path: &str) -> String {
        let base = self.api_base();
        if base.is_empty() {
            return path.to_string();
        }
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}{}", base, path)
    }

    /// Login page of the admin portal, if one is configured
    pub fn admin_login_url(&self) -> Option<String> {
        if self.admin_portal_url.is_empty() {
            return None;
        }
        let base = self.admin_portal_url.trim_end_matches('/');
        Some(format!("{}/login.html", base))
    }

    /// Directory downloads are written to
    pub fn download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_base(base: &str) -> PortfolioConfig {
        PortfolioConfig {
            api_base_url: base.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_api_url_prefixes_base() {
        let config = with_base("https://api.example.com/");
        assert_eq!(config.api_url("/api/portfolio"), "https://api.example.com/api/portfolio");
    }

    #[test]
    fn test_api_url_strips_only_one_slash() {
        let config = with_base("https://api.example.com//");
        assert_eq!(config.api_base(), "https://api.example.com/");
    }

    #[test]
    fn test_api_url_passes_absolute_urls_through() {
        let config = with_base("https://api.example.com");
        assert_eq!(
            config.api_url("http://cdn.example.com/me.png"),
            "http://cdn.example.com/me.png"
        );
        assert_eq!(
            config.api_url("https://cdn.example.com/me.png"),
            "https://cdn.example.com/me.png"
        );
    }

    #[test]
    fn test_api_url_without_base() {
        let config = PortfolioConfig::default();
        assert_eq!(config.api_url("/api/contact"), "/api/contact");
    }

    #[test]
    fn test_admin_login_url() {
        let mut config = PortfolioConfig::default();
        assert_eq!(config.admin_login_url(), None);

        config.admin_portal_url = "https://admin.example.com///".to_string();
        assert_eq!(
            config.admin_login_url().as_deref(),
            Some("https://admin.example.com/login.html")
        );
    }

    #[test]
    fn test_parse_injected_keys() {
        let config = PortfolioConfig::from_json(
            r#"{
                "API_BASE_URL": "http://localhost:3000",
                "ADMIN_PORTAL_URL": "http://localhost:4000",
                "navigation": { "wheel_threshold": 80.0 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.admin_portal_url, "http://localhost:4000");
        assert_eq!(config.navigation.wheel_threshold, 80.0);
        assert_eq!(config.navigation.wheel_cooldown_ms, 650);
        assert_eq!(config.download_dir, None);
    }

    #[test]
    fn test_configured_download_dir_wins() {
        let config = PortfolioConfig {
            download_dir: Some(PathBuf::from("/tmp/resumes")),
            ..Default::default()
        };
        assert_eq!(config.download_dir(), PathBuf::from("/tmp/resumes"));
    }
}
