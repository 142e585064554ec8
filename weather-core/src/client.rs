use tracing::{debug, instrument};

use crate::{
    config::ClientConfig,
    error::{Result, WeatherError},
    model::{Comparison, RawResponse},
    transport::{Transport, openweather::HttpTransport},
};

/// Fetches temperatures through a [`Transport`] and compares locations.
///
/// Every call goes to the transport; nothing is cached between calls.
#[derive(Debug)]
pub struct WeatherClient<T = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl<T: Transport> WeatherClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Replaces the API key used by subsequent requests. The key is not
    /// checked until the provider sees it.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.config.api_key = api_key.into();
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issues one request and returns the response untouched if its status is 200.
    #[instrument(skip(self))]
    pub fn get_response_for_city(&self, location: &str) -> Result<RawResponse> {
        let response = self.transport.fetch(location, &self.config.api_key)?;

        if !response.is_ok() {
            debug!(status = response.status_code, "provider rejected request");
            return Err(WeatherError::InvalidRequest {
                location: location.to_string(),
                status: response.status_code,
            });
        }

        Ok(response)
    }

    #[instrument(skip(self))]
    pub fn get_temperature(&self, location: &str) -> Result<f64> {
        let temp = self.get_response_for_city(location)?.temperature()?;
        debug!(temp, "parsed temperature");
        Ok(temp)
    }

    /// Fetches `first`, then `second`. A failure on `first` stops before the
    /// second request is made.
    #[instrument(skip(self))]
    pub fn compare(&self, first: &str, second: &str) -> Result<Comparison> {
        let first_temp = self.get_temperature(first)?;
        let second_temp = self.get_temperature(second)?;

        Ok(Comparison {
            first: first.to_string(),
            second: second.to_string(),
            first_temp,
            second_temp,
        })
    }

    /// `"Weather in {first} is warmer|colder than in {second} by {n} degrees"`.
    pub fn get_difference_string(&self, first: &str, second: &str) -> Result<String> {
        Ok(self.compare(first, second)?.to_string())
    }

    /// Signed `temperature(first) - temperature(second)`.
    pub fn find_diff_between_two_cities(&self, first: &str, second: &str) -> Result<f64> {
        Ok(self.compare(first, second)?.difference())
    }
}
