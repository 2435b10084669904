#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use finexus_core::{ApiConfig, HttpApi};

/// Finexus - Personal finance dashboard
#[derive(Parser, Debug)]
#[command(name = "finexus-desktop")]
#[command(about = "Finexus - assets, investments, crypto, wills and tax in one dashboard")]
struct Args {
    /// Base URL of the finance API
    #[arg(long, env = "FINEXUS_API_URL", default_value = "http://localhost:8000")]
    api_url: String,

    /// Seconds to wait for each API request
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    finexus_core::logging::init(args.verbose);

    let api = match ApiConfig::new(&args.api_url)
        .map(|config| config.with_timeout(Duration::from_secs(args.timeout_secs)))
        .and_then(HttpApi::new)
    {
        Ok(api) => api,
        Err(e) => {
            eprintln!("finexus-desktop: {}", e);
            std::process::exit(2);
        }
    };

    tracing::info!("Starting Finexus against {}", api.config().base_url());

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Finexus")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(api)
        .launch(app::App);
}
