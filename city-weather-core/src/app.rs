use tracing::{debug, info};

use crate::{
    error::WeatherError,
    model::{CityName, WeatherReport},
    provider::WeatherProvider,
    view::WeatherView,
};

/// Ties a weather provider to whatever view the caller renders into.
#[derive(Debug)]
pub struct WeatherApp {
    provider: Box<dyn WeatherProvider>,
}

impl WeatherApp {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Handle a raw city input: blank input goes straight to the error view.
    pub async fn submit<V>(&self, input: &str, view: &mut V) -> Result<WeatherReport, WeatherError>
    where
        V: WeatherView + ?Sized,
    {
        match CityName::parse(input) {
            Ok(city) => self.fetch_weather_data(&city, view).await,
            Err(err) => {
                debug!("rejected empty city input");
                view.display_error(&err.to_string());
                Err(err)
            }
        }
    }

    /// Fetch and render current weather. The loading indicator is shown for the
    /// duration of the request and hidden on every exit path.
    pub async fn fetch_weather_data<V>(
        &self,
        city: &CityName,
        view: &mut V,
    ) -> Result<WeatherReport, WeatherError>
    where
        V: WeatherView + ?Sized,
    {
        view.show_loading(true);
        let result = self.provider.current_weather(city).await;

        match &result {
            Ok(report) => {
                info!(city = %city, location = %report.location_name, "weather fetched");
                view.display_weather(report);
            }
            Err(err) => {
                info!(city = %city, error = %err, "weather lookup failed");
                view.display_error(&err.to_string());
            }
        }

        view.show_loading(false);
        result
    }
}
