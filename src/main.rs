#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use reunion_core::{SessionConfig, SessionState};
use tracing_subscriber::EnvFilter;

use crate::context::AppConfig;

/// Global app configuration, set from command line
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the app configuration (set from command line or defaults)
pub fn get_app_config() -> &'static AppConfig {
    APP_CONFIG.get_or_init(|| AppConfig::from_data_dir(default_data_dir()))
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("reunion")
}

/// Reunion Planner - group trip questionnaire
#[derive(Parser, Debug)]
#[command(name = "reunion-desktop")]
#[command(about = "Reunion Planner - collect every traveler's trip preferences")]
struct Args {
    /// Data directory (defaults for cities, results and answers live here)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// One-column CSV of city names for the destination dropdowns
    #[arg(long)]
    cities: Option<PathBuf>,

    /// Ranked results JSON; repeat to give fallbacks tried in order
    #[arg(long)]
    results: Vec<PathBuf>,

    /// Directory receiving one answers_<millis>.json per finalize
    #[arg(long)]
    answers_dir: Option<PathBuf>,

    /// POST answers to this URL instead of writing files
    #[arg(long)]
    save_endpoint: Option<String>,

    /// Number of traveler forms generated on startup
    #[arg(short, long, default_value_t = 1)]
    travelers: u32,

    /// Only offer finalize once the trip dates are locked
    #[arg(long)]
    require_dates: bool,

    /// Euros per slider unit
    #[arg(long, default_value_t = 1)]
    currency_scale: u32,
}

fn build_config(args: Args) -> anyhow::Result<AppConfig> {
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let mut config = AppConfig::from_data_dir(data_dir);

    if let Some(cities) = args.cities {
        config.cities_path = cities;
    }
    if !args.results.is_empty() {
        config.results_paths = args.results;
    }
    if let Some(dir) = args.answers_dir {
        config.answers_dir = dir;
    }
    config.save_endpoint = args.save_endpoint;

    let session = SessionConfig {
        currency_scale: args.currency_scale,
        require_date_lock: args.require_dates,
        ..Default::default()
    };
    // Build once up front so a bad flag fails here instead of in the UI
    config.initial_session = SessionState::new(args.travelers, session)
        .with_context(|| format!("cannot start with {} travelers", args.travelers))?;

    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = build_config(args)?;

    tracing::info!(
        data_dir = ?config.data_dir,
        cities = ?config.cities_path,
        sink = %config.sink_label(),
        "Starting Reunion Planner"
    );

    // Store configuration globally
    let _ = APP_CONFIG.set(config);

    let window_width = 900.0;
    let window_height = 960.0;

    // Configure desktop window
    let desktop = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Reunion Planner")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .launch(app::App);

    Ok(())
}
