use std::fmt;

use serde::Deserialize;

use crate::error::{Result, WeatherError};

/// Status code and body exactly as the transport received them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status_code: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self { status_code, body: body.into() }
    }

    pub fn is_ok(&self) -> bool {
        self.status_code == 200
    }

    /// Reads `list[0].main.temp` from the body. The value is passed through
    /// without unit conversion or rounding.
    pub fn temperature(&self) -> Result<f64> {
        let parsed: ForecastBody = serde_json::from_str(&self.body)
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        parsed
            .list
            .first()
            .map(|entry| entry.main.temp)
            .ok_or_else(|| WeatherError::Parse("response contained an empty `list`".to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct ForecastMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastEntry {
    main: ForecastMain,
}

#[derive(Debug, Deserialize)]
struct ForecastBody {
    list: Vec<ForecastEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Warmer,
    Colder,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Warmer => "warmer",
            Direction::Colder => "colder",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Readings for two locations, taken in order `first` then `second`.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub first: String,
    pub second: String,
    pub first_temp: f64,
    pub second_temp: f64,
}

impl Comparison {
    /// Signed difference `first_temp - second_temp`, unrounded.
    pub fn difference(&self) -> f64 {
        self.first_temp - self.second_temp
    }

    /// A tie reads as warmer.
    pub fn direction(&self) -> Direction {
        if self.difference() >= 0.0 { Direction::Warmer } else { Direction::Colder }
    }

    /// Magnitude of the difference in whole degrees, truncated toward zero.
    pub fn whole_degrees(&self) -> i64 {
        self.difference().abs().trunc() as i64
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weather in {} is {} than in {} by {} degrees",
            self.first,
            self.direction(),
            self.second,
            self.whole_degrees()
        )
    }
}
