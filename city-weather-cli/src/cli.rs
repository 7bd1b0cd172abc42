use std::{path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::{Context, bail};
use city_weather_core::{
    CityName, Config, Page, WeatherApp, WeatherView, provider_from_config,
};
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use tracing::debug;

use crate::{server, terminal::TerminalView};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "city-weather", version, about = "Current weather for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name; prompted for when absent.
        city: Option<String>,

        /// Also write the rendered weather page to this file.
        #[arg(long)]
        html: Option<PathBuf>,
    },

    /// Serve the weather page over HTTP.
    Serve {
        /// Listen address as host:port; defaults to `listen_addr` from config,
        /// then 127.0.0.1:3000.
        #[arg(long)]
        addr: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, html } => show(city, html).await,
            Command::Serve { addr } => serve(addr).await,
        }
    }
}

fn configure() -> anyhow::Result<ExitCode> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let api_key = api_key.trim();
    if api_key.is_empty() {
        bail!("API key must not be empty");
    }

    config.set_api_key(api_key.to_string());
    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(ExitCode::SUCCESS)
}

async fn show(city: Option<String>, html: Option<PathBuf>) -> anyhow::Result<ExitCode> {
    let city = match city {
        Some(city) => city,
        None => Text::new("City:").prompt().context("Failed to read city name")?,
    };

    let mut terminal = TerminalView::stdio();
    let mut page = Page::new();
    page.set_city_input(city.trim());

    let found = lookup(&city, &mut (&mut terminal, &mut page), Config::load).await?;

    if let Some(path) = html {
        tokio::fs::write(&path, page.to_html())
            .await
            .with_context(|| format!("Failed to write page: {}", path.display()))?;
        debug!(path = %path.display(), "wrote weather page");
    }

    Ok(if found { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Render the lookup for `input` into `view`; `Ok(false)` means the error view
/// was shown. Blank input is rejected before config is loaded, so it needs no
/// API key.
async fn lookup<V, F>(input: &str, view: &mut V, load_config: F) -> anyhow::Result<bool>
where
    V: WeatherView + ?Sized,
    F: FnOnce() -> anyhow::Result<Config>,
{
    let city = match CityName::parse(input) {
        Ok(city) => city,
        Err(err) => {
            view.display_error(&err.to_string());
            return Ok(false);
        }
    };

    let config = load_config()?;
    let app = WeatherApp::new(provider_from_config(&config)?);

    Ok(app.fetch_weather_data(&city, view).await.is_ok())
}

async fn serve(addr: Option<String>) -> anyhow::Result<ExitCode> {
    let config = Config::load()?;
    let addr = addr.unwrap_or_else(|| config.listen_addr().to_string());

    let app = Arc::new(WeatherApp::new(provider_from_config(&config)?));
    server::serve(app, &addr).await?;

    Ok(ExitCode::SUCCESS)
}
