//! Main application entry point

use anyhow::Result;
use clap::Parser;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pf_data::PortfolioClient;

mod app;
mod cli;
mod input;

use app::PortfolioApp;
use cli::Cli;

fn main() -> Result<()> {
    // Initialize tracing, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    if config.api_base_url.is_empty() {
        tracing::warn!("No API base URL configured; the portfolio will not load");
    }

    info!("Starting portfolio viewer against {:?}", config.api_base_url);

    let client = PortfolioClient::new(config)?;
    let runtime = tokio::runtime::Runtime::new()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 540.0]),
        default_theme: eframe::Theme::Light,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Portfolio",
        options,
        Box::new(move |cc| Box::new(PortfolioApp::new(cc, client, runtime))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
