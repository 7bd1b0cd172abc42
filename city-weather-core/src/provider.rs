use crate::{
    Config, WeatherError,
    model::{CityName, WeatherReport},
    provider::openweather::OpenWeatherProvider,
};
use anyhow::Context;
use async_trait::async_trait;
use std::{fmt::Debug, time::Duration};

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &CityName) -> Result<WeatherReport, WeatherError>;
}

/// Construct the OpenWeather provider from config.
///
/// Fails when no API key is available or the HTTP client cannot be built.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.resolved_api_key()?;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs()))
        .build()
        .context("Failed to build HTTP client")?;

    let boxed: Box<dyn WeatherProvider> =
        Box::new(OpenWeatherProvider::with_client(api_key, config.base_url().to_string(), http));

    Ok(boxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = cfg.resolve_api_key_with(None).unwrap_err();
        assert!(err.to_string().contains("No API key configured"));
    }

    #[test]
    fn provider_from_config_works_when_configured() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        let provider = provider_from_config(&cfg);
        assert!(provider.is_ok());
    }
}
