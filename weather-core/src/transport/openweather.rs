use std::time::Duration;

use reqwest::{Url, blocking::Client};
use tracing::debug;

use crate::{
    error::{Result, WeatherError},
    model::RawResponse,
};

use super::Transport;

/// OpenWeather 5-day / 3-hour forecast endpoint; its body carries `list[].main.temp`.
pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/forecast";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking HTTP transport against the OpenWeather API.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: Url,
    http: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT)
    }

    pub fn with_endpoint(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| WeatherError::InvalidEndpoint(format!("{endpoint}: {e}")))?;
        let http = Client::builder().timeout(timeout).build().map_err(WeatherError::Transport)?;

        Ok(Self { endpoint, http })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn request_url(&self, location: &str, api_key: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", location)
            .append_pair("appid", api_key)
            .append_pair("units", "metric");
        url
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, location: &str, api_key: &str) -> Result<RawResponse> {
        // The full URL carries the key, so only the host is logged and
        // errors are stripped of their URL before they leave this function.
        debug!(host = ?self.endpoint.host_str(), location, "sending weather request");

        let res = self
            .http
            .get(self.request_url(location, api_key))
            .send()
            .map_err(|e| WeatherError::Transport(e.without_url()))?;
        let status_code = res.status().as_u16();
        let body = res.text().map_err(|e| WeatherError::Transport(e.without_url()))?;

        debug!(location, status_code, bytes = body.len(), "received weather response");

        Ok(RawResponse { status_code, body })
    }
}
