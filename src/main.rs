//! Customer Churn Dashboard
//!
//! Opens the dashboard in a native window, or renders it to a file.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use eframe::egui;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use churn_dashboard::app::DashboardApp;
use churn_dashboard::config::Config;
use churn_dashboard::plotting::{export_to_file, Theme};
use churn_dashboard::{ChartConfigRegistry, DashboardView};

#[derive(Parser, Debug)]
#[command(name = "churn-dashboard", version, about = "Customer churn analytics dashboard")]
struct Cli {
    /// Configuration file (defaults to <config dir>/churn-dashboard/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Anchor to mount the dashboard on
    #[arg(short, long)]
    mount: Option<String>,

    /// Render to this file instead of opening a window (.svg, .png, ...)
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Canvas width for --export
    #[arg(short, long)]
    width: Option<u32>,

    /// Print the resolved chart definitions as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.logging.level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Customer churn dashboard v{}", env!("CARGO_PKG_VERSION"));

    let theme = Theme::default();
    let registry = ChartConfigRegistry::new(&theme);

    if cli.dump_config {
        println!("{}", serde_json::to_string_pretty(registry.definitions())?);
        return Ok(());
    }

    let view = DashboardView::new(&registry, &theme);
    let mount = cli.mount.unwrap_or_else(|| config.mount.clone());

    if let Some(path) = cli.export {
        let width = cli.width.unwrap_or(config.export.width);
        let mounted = view.mount(&config.export_host(width), &mount).map_err(|e| {
            tracing::error!("{}", e);
            e
        })?;
        export_to_file(&mounted.tree, mounted.anchor.viewport.width, &path)?;
        return Ok(());
    }

    let mounted = view.mount(&config.window_host(), &mount).map_err(|e| {
        tracing::error!("{}", e);
        e
    })?;

    let window = &config.window;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window.width as f32, window.height as f32])
            .with_min_inner_size([window.min_width as f32, window.min_height as f32])
            .with_title(&window.title),
        ..Default::default()
    };

    eframe::run_native(
        &window.title,
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(mounted)) as Box<dyn eframe::App>)),
    )
    .map_err(|e| anyhow!("error running application: {}", e))
}
