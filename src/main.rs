mod browser;

use anyhow::Result;
use clap::Parser;
use log::info;

/// Minimal navigation-shell browser: an address bar, a content frame, and
/// back/forward controls backed by a linear history.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Page to open on startup
    url: Option<String>,
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    info!("Starting Skiff Browser...");

    // Run browser (must run on main thread on macOS)
    browser::Browser::new(args.url).run()
}
