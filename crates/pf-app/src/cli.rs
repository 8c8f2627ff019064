use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use pf_data::PortfolioConfig;

/// Portfolio slide viewer
#[derive(Parser, Debug, Default)]
#[command(name = "portfolio", version, about)]
pub struct Cli {
    /// JSON configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// API base URL, overrides API_BASE_URL from the file
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Admin portal URL, overrides ADMIN_PORTAL_URL from the file
    #[arg(long, value_name = "URL")]
    pub admin_url: Option<String>,
}

impl Cli {
    /// Build the configuration from the file and the overrides
    pub fn load_config(&self) -> Result<PortfolioConfig> {
        let mut config = match &self.config {
            Some(path) => PortfolioConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => PortfolioConfig::default(),
        };

        if let Some(base) = &self.api_base {
            config.api_base_url = base.clone();
        }
        if let Some(admin) = &self.admin_url {
            config.admin_portal_url = admin.clone();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "portfolio",
            "--config",
            "site.json",
            "--api-base",
            "https://api.example.com",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("site.json")));
        assert_eq!(cli.api_base.as_deref(), Some("https://api.example.com"));
        assert_eq!(cli.admin_url, None);
    }

    #[test]
    fn test_defaults_without_file() {
        let config = Cli::default().load_config().unwrap();
        assert_eq!(config, PortfolioConfig::default());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"API_BASE_URL": "http://file.example", "ADMIN_PORTAL_URL": "http://admin.example/"}}"#
        )
        .unwrap();

        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            api_base: Some("http://flag.example".to_string()),
            admin_url: None,
        };
        let config = cli.load_config().unwrap();
        assert_eq!(config.api_base_url, "http://flag.example");
        assert_eq!(config.admin_portal_url, "http://admin.example/");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let cli = Cli {
            config: Some(PathBuf::from("/definitely/not/here.json")),
            ..Default::default()
        };
        assert!(cli.load_config().is_err());
    }
}
