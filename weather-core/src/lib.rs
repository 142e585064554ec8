//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - A client that fetches current temperatures and compares two locations
//! - The transport seam the client talks through, with an HTTP implementation
//! - Configuration & credentials handling
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod transport;

pub use client::WeatherClient;
pub use config::{ClientConfig, Config};
pub use error::WeatherError;
pub use model::{Comparison, Direction, RawResponse};
pub use transport::{Transport, openweather::HttpTransport, transport_from_config};
