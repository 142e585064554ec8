use crate::{Config, RawResponse, error::Result, transport::openweather::HttpTransport};

pub mod openweather;

/// The network boundary of the client: one request per call, no retries.
///
/// The client only ever talks to this trait, so tests can hand it a scripted
/// double instead of [`HttpTransport`].
pub trait Transport {
    fn fetch(&self, location: &str, api_key: &str) -> Result<RawResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn fetch(&self, location: &str, api_key: &str) -> Result<RawResponse> {
        (**self).fetch(location, api_key)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn fetch(&self, location: &str, api_key: &str) -> Result<RawResponse> {
        (**self).fetch(location, api_key)
    }
}

/// Construct the HTTP transport, honouring an endpoint override from config.
pub fn transport_from_config(config: &Config) -> Result<HttpTransport> {
    match config.endpoint.as_deref() {
        Some(endpoint) => HttpTransport::with_endpoint(endpoint, openweather::DEFAULT_TIMEOUT),
        None => HttpTransport::new(),
    }
}
