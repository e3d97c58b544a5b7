use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::info;

mod config;
mod core;
mod error;
mod fixture;
mod net;
mod render;
mod services;

use crate::config::{Endpoints, GeneratorConfig, DEFAULT_FIXTURES_URL, DEFAULT_LEAGUE_LOGO_BASE};
use crate::core::generator::Generator;
use crate::net::http::ReqwestSource;

#[derive(Parser, Debug)]
#[command(name = "fixture-card", about = "Match card generator")]
struct Args {
    /// Directory containing img/field.png and fonts/FiraGO-SemiBold.ttf
    #[arg(long, default_value = "assets")]
    assets_dir: String,

    /// Directory generated cards are written to
    #[arg(short, long, default_value = "generated")]
    output_dir: String,

    /// Fixtures API endpoint
    #[arg(long, default_value = DEFAULT_FIXTURES_URL)]
    api_url: String,

    /// League logo CDN base
    #[arg(long, default_value = DEFAULT_LEAGUE_LOGO_BASE)]
    league_logo_base: String,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .with_writer(io::stderr)
        .init();

    info!("fixture-card v{} starting", env!("CARGO_PKG_VERSION"));

    let config = GeneratorConfig {
        assets_dir: args.assets_dir.into(),
        output_dir: args.output_dir.into(),
        endpoints: Endpoints {
            fixtures_url: args.api_url,
            league_logo_base: args.league_logo_base,
        },
    };

    let mut stdout = io::stdout();
    write!(stdout, "Match ID: ")?;
    stdout.flush()?;

    let mut match_id = String::new();
    io::stdin()
        .lock()
        .read_line(&mut match_id)
        .context("Failed to read match id from stdin")?;

    let generator = Generator::new(config, ReqwestSource::new());
    let outcome = generator.generate(&match_id).await;
    if let Some(message) = outcome.message() {
        println!("{message}");
    }

    Ok(())
}
