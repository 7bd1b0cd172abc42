use thiserror::Error;

/// Everything that can end a weather lookup in the error view.
///
/// The `Display` output is the exact text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// Input was empty or whitespace only. Never reaches the network.
    #[error("Please enter a city name.")]
    EmptyCity,

    /// The API answered with a non-success status.
    #[error("City not found")]
    CityNotFound,

    /// The request could not be completed (connect, timeout, body read).
    #[error("{0}")]
    Transport(String),

    /// The API answered successfully but the body was not a weather report.
    #[error("{0}")]
    Decode(String),
}

impl From<reqwest::Error> for WeatherError {
    /// Keeps the full cause chain but drops the URL, which carries the API key.
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        WeatherError::Transport(message)
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        WeatherError::Decode(err.to_string())
    }
}
