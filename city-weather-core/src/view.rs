//! Rendering surfaces for a weather lookup.
//!
//! A view has three regions: the result, the error message and the loading
//! indicator. Showing a result clears the error and showing an error clears the
//! result, so at most one of them is ever populated.

use std::fmt::Write as _;

use crate::model::WeatherReport;

pub trait WeatherView {
    fn display_weather(&mut self, report: &WeatherReport);
    fn display_error(&mut self, message: &str);
    fn show_loading(&mut self, loading: bool);
}

impl<T: WeatherView + ?Sized> WeatherView for &mut T {
    fn display_weather(&mut self, report: &WeatherReport) {
        (**self).display_weather(report);
    }

    fn display_error(&mut self, message: &str) {
        (**self).display_error(message);
    }

    fn show_loading(&mut self, loading: bool) {
        (**self).show_loading(loading);
    }
}

/// Renders into both views, e.g. the terminal and a page written to disk.
impl<A: WeatherView, B: WeatherView> WeatherView for (A, B) {
    fn display_weather(&mut self, report: &WeatherReport) {
        self.0.display_weather(report);
        self.1.display_weather(report);
    }

    fn display_error(&mut self, message: &str) {
        self.0.display_error(message);
        self.1.display_error(message);
    }

    fn show_loading(&mut self, loading: bool) {
        self.0.show_loading(loading);
        self.1.show_loading(loading);
    }
}

pub fn report_heading(report: &WeatherReport) -> String {
    format!("Weather in {}", report.location_name)
}

/// Labelled values shown under the heading, in display order.
pub fn report_fields(report: &WeatherReport) -> [(&'static str, String); 3] {
    [
        ("Temperature", format!("{} °C", report.temperature_c)),
        ("Humidity", format!("{}%", report.humidity_pct)),
        ("Conditions", report.condition.clone()),
    ]
}

/// In-memory model of the weather webpage.
#[derive(Debug, Clone)]
pub struct Page {
    city_input: String,
    weather_display: String,
    error_message: String,
    error_hidden: bool,
    loading: bool,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            city_input: String::new(),
            weather_display: String::new(),
            error_message: String::new(),
            error_hidden: true,
            loading: false,
        }
    }
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the city input, e.g. with the last submitted value.
    pub fn set_city_input(&mut self, value: &str) {
        self.city_input = value.to_string();
    }

    pub fn city_input(&self) -> &str {
        &self.city_input
    }

    /// Inner HTML of the result region.
    pub fn weather_display(&self) -> &str {
        &self.weather_display
    }

    /// Text content of the error region.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn is_error_hidden(&self) -> bool {
        self.error_hidden
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Render the complete HTML document.
    pub fn to_html(&self) -> String {
        let error_class = if self.error_hidden { " class=\"hidden\"" } else { "" };
        let loading_display = if self.loading { "block" } else { "none" };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Weather</title>
  <style>.hidden {{ display: none; }}</style>
</head>
<body>
  <h1>Weather</h1>
  <form method="get" action="/">
    <input id="city-input" name="city" type="text" placeholder="Enter city name" value="{city}">
    <button id="fetch-btn" type="submit">Get Weather</button>
  </form>
  <div id="loading-message" style="display: {loading_display};">Loading...</div>
  <div id="error-message"{error_class}>{error}</div>
  <div id="weather-display">{display}</div>
</body>
</html>
"#,
            city = escape_html(&self.city_input),
            error = escape_html(&self.error_message),
            display = self.weather_display,
        )
    }
}

impl WeatherView for Page {
    fn display_weather(&mut self, report: &WeatherReport) {
        self.error_message.clear();
        self.error_hidden = true;

        let mut html = format!("<h2>{}</h2>", escape_html(&report_heading(report)));
        for (label, value) in report_fields(report) {
            // Writing into a String cannot fail.
            let _ = write!(html, "<p><strong>{label}:</strong> {}</p>", escape_html(&value));
        }
        self.weather_display = html;
    }

    fn display_error(&mut self, message: &str) {
        self.weather_display.clear();
        self.error_message = message.to_string();
        self.error_hidden = false;
    }

    fn show_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_york() -> WeatherReport {
        WeatherReport {
            location_name: "New York".to_string(),
            temperature_c: 25.0,
            humidity_pct: 50,
            condition: "clear sky".to_string(),
        }
    }

    #[test]
    fn displays_weather_data() {
        let mut page = Page::new();
        page.display_weather(&new_york());

        let html = page.weather_display();
        assert!(html.contains("Weather in New York"));
        assert!(html.contains("25 °C"));
        assert!(html.contains("50%"));
        assert!(html.contains("clear sky"));
    }

    #[test]
    fn fractional_temperatures_are_kept() {
        let mut page = Page::new();
        let report = WeatherReport { temperature_c: 12.34, ..new_york() };
        page.display_weather(&report);

        assert!(page.weather_display().contains("12.34 °C"));
    }

    #[test]
    fn displays_error_message() {
        let mut page = Page::new();
        assert!(page.is_error_hidden());

        page.display_error("City not found");

        assert_eq!(page.error_message(), "City not found");
        assert!(!page.is_error_hidden());
    }

    #[test]
    fn replaces_existing_error_message() {
        let mut page = Page::new();
        page.display_error("Previous error");
        page.display_error("New error occurred");

        assert_eq!(page.error_message(), "New error occurred");
    }

    #[test]
    fn error_clears_weather_and_weather_clears_error() {
        let mut page = Page::new();

        page.display_weather(&new_york());
        page.display_error("City not found");
        assert!(page.weather_display().is_empty());

        page.display_weather(&new_york());
        assert!(page.error_message().is_empty());
        assert!(page.is_error_hidden());
        assert!(page.weather_display().contains("New York"));
    }

    #[test]
    fn loading_indicator_toggles_in_html() {
        let mut page = Page::new();
        assert!(page.to_html().contains(r#"id="loading-message" style="display: none;""#));

        page.show_loading(true);
        assert!(page.is_loading());
        assert!(page.to_html().contains(r#"id="loading-message" style="display: block;""#));
    }

    #[test]
    fn html_has_all_regions() {
        let mut page = Page::new();
        page.set_city_input("Paris");
        let html = page.to_html();

        for id in ["city-input", "fetch-btn", "weather-display", "error-message", "loading-message"] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing region {id}");
        }
        assert_eq!(page.city_input(), "Paris");
        assert!(html.contains(r#"value="Paris""#));
        assert!(html.contains(r#"<div id="error-message" class="hidden">"#));
    }

    #[test]
    fn pair_of_views_receives_every_update() {
        let mut first = Page::new();
        let mut second = Page::new();

        {
            let mut both = (&mut first, &mut second);
            both.show_loading(true);
            both.display_weather(&new_york());
        }

        assert!(first.is_loading() && second.is_loading());
        assert_eq!(first.weather_display(), second.weather_display());
    }

    #[test]
    fn markup_in_values_is_escaped() {
        let mut page = Page::new();
        let report = WeatherReport {
            location_name: "<script>alert(1)</script>".to_string(),
            condition: "rain & \"fog\"".to_string(),
            ..new_york()
        };
        page.display_weather(&report);

        let html = page.weather_display();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("rain &amp; &quot;fog&quot;"));

        page.display_error("<b>bad</b>");
        assert!(page.to_html().contains("&lt;b&gt;bad&lt;/b&gt;"));
    }
}
