#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod effects;
mod gtag;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Project data file, set from command line
static PROJECTS_PATH: OnceLock<PathBuf> = OnceLock::new();

/// External donation page, set from command line
static DONATE_URL: OnceLock<String> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("locfolio")
    })
}

/// Get the project data file (set from command line or default)
pub fn get_projects_path() -> PathBuf {
    PROJECTS_PATH
        .get()
        .cloned()
        .unwrap_or_else(|| PathBuf::from(locfolio_core::config::PROJECTS_FILE))
}

/// Get the donation page URL (if set via --donate-url)
pub fn get_donate_url() -> Option<String> {
    DONATE_URL.get().cloned()
}

/// Localization Portfolio - desktop viewer
#[derive(Parser, Debug)]
#[command(name = "locfolio-desktop")]
#[command(about = "Localization portfolio - game localization projects")]
struct Args {
    /// Data directory for saved preferences
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Project data file
    #[arg(short, long)]
    projects: Option<PathBuf>,

    /// External donation page (default: mail the studio)
    #[arg(long)]
    donate_url: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    locfolio_core::logging::setup_logging(args.verbose);

    if let Some(dir) = args.data_dir {
        let _ = DATA_DIR.set(dir);
    }
    if let Some(path) = args.projects {
        let _ = PROJECTS_PATH.set(path);
    }
    if let Some(url) = args.donate_url {
        let _ = DONATE_URL.set(url);
    }

    tracing::info!(
        "Starting with data dir {:?} and projects {:?}",
        get_data_dir(),
        get_projects_path()
    );

    let window_width = 1200.0;
    let window_height = 900.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Локалізації ігор")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
