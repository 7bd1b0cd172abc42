use std::fmt;

use crate::error::WeatherError;

/// A city name as typed by the user, trimmed and known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityName(String);

impl CityName {
    pub fn parse(input: &str) -> Result<Self, WeatherError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(WeatherError::EmptyCity);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Current conditions for one place, as returned by the weather API.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub location_name: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub condition: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_name_is_trimmed() {
        let city = CityName::parse("  New York \n").expect("non-empty city");
        assert_eq!(city.as_str(), "New York");
    }

    #[test]
    fn blank_city_names_are_rejected() {
        for input in ["", "   ", "\t\n"] {
            assert_eq!(CityName::parse(input), Err(WeatherError::EmptyCity));
        }
    }
}
