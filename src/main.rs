//! golterm - A terminal client for a remote Game of Life server
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use golterm_api::HttpGameApi;
use golterm_app::config::{self, Settings};
use golterm_app::Engine;
use golterm_core::prelude::*;

/// golterm - Play a 5x5 Game of Life served over HTTP
#[derive(Parser, Debug)]
#[command(name = "golterm")]
#[command(about = "A terminal client for a remote Game of Life server", long_about = None)]
struct Args {
    /// Game server base URL (overrides api.base_url)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Initial auto-play period in milliseconds (overrides auto_play.speed_ms)
    #[arg(long, value_name = "MS")]
    speed: Option<u64>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().or_else(config::default_config_path);

    if args.init_config {
        let Some(path) = config_path else {
            eprintln!("❌ No config directory on this platform, pass --config <PATH>");
            std::process::exit(1);
        };
        if config::init_config_file(&path)? {
            eprintln!("✅ Wrote default config to {}", path.display());
        } else {
            eprintln!("Config already exists at {}", path.display());
        }
        return Ok(());
    }

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    golterm_core::logging::init()?;

    let settings = match &config_path {
        Some(path) => config::load_settings(path),
        None => Settings::default(),
    }
    .with_overrides(args.server, args.speed);

    if let Err(e) = settings.validate() {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
    info!("Game server: {}", settings.api.base_url);

    let api = HttpGameApi::new(&settings.api.base_url, settings.api.timeout())
        .context("Creating the game API client")?;
    let engine = Engine::new(settings, api);

    let result = golterm_tui::run(engine).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    result
}
