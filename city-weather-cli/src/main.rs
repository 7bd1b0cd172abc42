//! Binary crate for the `city-weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration and city prompts
//! - Terminal output and serving the weather page over HTTP

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cli;
mod server;
mod terminal;

/// Logs go to stderr so stdout only carries the rendered weather.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,city_weather=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_logging();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
