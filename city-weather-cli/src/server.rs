//! Serves the weather page to a browser.
//!
//! `GET /` renders the empty form, `GET /?city=<name>` renders the result or
//! error view for that city.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use city_weather_core::{Page, WeatherApp};
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    city: Option<String>,
}

pub fn router(app: Arc<WeatherApp>) -> Router {
    Router::new().route("/", get(weather_page)).with_state(app)
}

async fn weather_page(
    State(app): State<Arc<WeatherApp>>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let mut page = Page::new();

    if let Some(city) = query.city {
        page.set_city_input(city.trim());
        // Failures are rendered into the page's error region.
        let _ = app.submit(&city, &mut page).await;
    }

    Html(page.to_html())
}

/// Bind `addr` (`host:port`, the host may be a name that needs resolving).
pub async fn bind(addr: &str) -> anyhow::Result<TcpListener> {
    TcpListener::bind(addr).await.with_context(|| format!("Failed to bind {addr}"))
}

pub async fn serve(app: Arc<WeatherApp>, addr: &str) -> anyhow::Result<()> {
    let listener = bind(addr).await?;

    let local = listener.local_addr().context("Failed to read bound address")?;
    info!("weather page available at http://{local}/");

    axum::serve(listener, router(app)).await.context("Server terminated unexpectedly")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{body::Body, http::Request};
    use city_weather_core::{CityName, WeatherError, WeatherProvider, WeatherReport};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    #[derive(Debug)]
    struct FakeProvider {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl WeatherProvider for FakeProvider {
        async fn current_weather(&self, city: &CityName) -> Result<WeatherReport, WeatherError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if city.as_str() == "Atlantis" {
                return Err(WeatherError::CityNotFound);
            }
            Ok(WeatherReport {
                location_name: city.to_string(),
                temperature_c: 18.5,
                humidity_pct: 64,
                condition: "light rain".to_string(),
            })
        }
    }

    fn test_router() -> (Router, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = FakeProvider { calls: Arc::clone(&calls) };
        (router(Arc::new(WeatherApp::new(Box::new(provider)))), calls)
    }

    async fn get_page(router: Router, uri: &str) -> String {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert!(response.status().is_success());

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        String::from_utf8(bytes.to_vec()).expect("utf8")
    }

    #[tokio::test]
    async fn binds_hostname_addresses() {
        let listener = bind("localhost:0").await.expect("bind localhost");
        assert!(listener.local_addr().expect("addr").ip().is_loopback());

        assert!(bind("not an addr").await.is_err());
    }

    #[tokio::test]
    async fn empty_form_without_city() {
        let (router, calls) = test_router();
        let html = get_page(router, "/").await;

        assert!(html.contains(r#"<div id="error-message" class="hidden"></div>"#));
        assert!(html.contains(r#"<div id="weather-display"></div>"#));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn renders_weather_for_city() {
        let (router, _) = test_router();
        let html = get_page(router, "/?city=San%20Francisco").await;

        assert!(html.contains("Weather in San Francisco"));
        assert!(html.contains("18.5 °C"));
        assert!(html.contains("64%"));
        assert!(html.contains("light rain"));
        assert!(html.contains(r#"value="San Francisco""#));
    }

    #[tokio::test]
    async fn renders_error_for_unknown_city() {
        let (router, _) = test_router();
        let html = get_page(router, "/?city=Atlantis").await;

        assert!(html.contains(r#"<div id="error-message">City not found</div>"#));
        assert!(html.contains(r#"<div id="weather-display"></div>"#));
    }

    #[tokio::test]
    async fn blank_city_shows_prompt_without_lookup() {
        let (router, calls) = test_router();
        let html = get_page(router, "/?city=%20%20").await;

        assert!(html.contains("Please enter a city name."));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
