use thiserror::Error;

/// Errors surfaced by the weather client and its transports.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The provider answered with a non-200 status. A bad API key, an unknown
    /// location and a provider outage all land here.
    #[error("Weather request for '{location}' failed with status {status}")]
    InvalidRequest { location: String, status: u16 },

    /// The response body was not shaped like `{"list":[{"main":{"temp":..}}]}`.
    #[error("Failed to parse weather response: {0}")]
    Parse(String),

    /// The request never produced a response. The wrapped error has its URL
    /// removed, since the URL carries the API key.
    #[error("HTTP error: {0}")]
    Transport(reqwest::Error),

    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),
}

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;
