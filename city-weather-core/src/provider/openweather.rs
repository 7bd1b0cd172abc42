use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    error::WeatherError,
    model::{CityName, WeatherReport},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    /// `base_url` is normally [`DEFAULT_BASE_URL`]; config may point it at a proxy.
    pub fn with_client(api_key: String, base_url: String, http: Client) -> Self {
        Self { api_key, base_url, http }
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

impl From<OwCurrentResponse> for WeatherReport {
    fn from(parsed: OwCurrentResponse) -> Self {
        let condition = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .unwrap_or_else(|| "Unknown".to_string());

        WeatherReport {
            location_name: parsed.name,
            temperature_c: parsed.main.temp,
            humidity_pct: parsed.main.humidity,
            condition,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &CityName) -> Result<WeatherReport, WeatherError> {
        debug!(city = %city, url = %self.base_url, "requesting current weather");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", city.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|err| {
                let err = WeatherError::from(err);
                warn!(city = %city, error = %err, "OpenWeather request failed");
                err
            })?;

        let status = res.status();
        if !status.is_success() {
            debug!(city = %city, %status, "OpenWeather returned non-success status");
            return Err(WeatherError::CityNotFound);
        }

        let body = res.text().await.map_err(|err| {
            let err = WeatherError::from(err);
            warn!(city = %city, error = %err, "failed to read OpenWeather response body");
            err
        })?;
        let parsed: OwCurrentResponse = serde_json::from_str(&body).map_err(|err| {
            warn!(city = %city, error = %err, "failed to parse OpenWeather current JSON");
            WeatherError::from(err)
        })?;

        Ok(parsed.into())
    }
}
