use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use inquire::Password;
use tracing::{info, warn};
use weather_core::{Config, WeatherClient, config::API_KEY_ENV, transport_from_config};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Compare current temperatures between locations")]
pub struct Cli {
    /// API key to use instead of the stored one or the environment.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Increase log verbosity (-v for info, -vv for debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the config file.
    Configure,

    /// Show the current temperature for a location.
    Temp {
        /// Location name, e.g. "London".
        location: String,
    },

    /// Compare the current temperature of two locations.
    Compare {
        first: String,
        second: String,

        /// Print the signed difference instead of a sentence.
        #[arg(long)]
        numeric: bool,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => {
                let mut config = config_for_configure(Config::load());
                let api_key = Password::new("OpenWeather API key:")
                    .without_confirmation()
                    .prompt()
                    .context("Failed to read API key")?;

                config.set_api_key(api_key.trim().to_string());
                config.save()?;

                println!("Saved API key to {}", Config::config_file_path()?.display());
            }
            Command::Temp { location } => {
                let config = Config::load()?;
                let client = build_client(&config, self.api_key.as_deref())?;
                let temp = client.get_temperature(&location)?;
                println!("{location}: {temp}");
            }
            Command::Compare { first, second, numeric } => {
                let config = Config::load()?;
                let client = build_client(&config, self.api_key.as_deref())?;
                if numeric {
                    println!("{}", client.find_diff_between_two_cities(&first, &second)?);
                } else {
                    println!("{}", client.get_difference_string(&first, &second)?);
                }
            }
        }

        Ok(())
    }
}

/// `configure` rewrites the file, so an unreadable one must not block it.
fn config_for_configure(loaded: Result<Config>) -> Config {
    loaded.unwrap_or_else(|err| {
        warn!("Ignoring unreadable config, it will be replaced: {err:#}");
        Config::default()
    })
}

fn build_client(config: &Config, explicit_key: Option<&str>) -> Result<WeatherClient> {
    let env_key = std::env::var(API_KEY_ENV).ok();
    let client_config = config.client_config(explicit_key, env_key.as_deref())?;
    let transport = transport_from_config(config)?;

    info!(endpoint = %transport.endpoint(), "using weather endpoint");

    Ok(WeatherClient::new(client_config, transport))
}
