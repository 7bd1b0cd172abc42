//! Core library for the `city-weather` tool.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather provider behind a `WeatherProvider` trait
//! - Views (the HTML page) and the controller that renders into them
//!
//! It is used by `city-weather`, but can also be reused by other binaries or services.

pub mod app;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod view;

pub use app::WeatherApp;
pub use config::Config;
pub use error::WeatherError;
pub use model::{CityName, WeatherReport};
pub use provider::{WeatherProvider, provider_from_config};
pub use view::{Page, WeatherView};
