use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use nowcast_core::{
    Config, Coordinates, FixedPosition, LoadingSignal, OpenWeatherClient, WeatherReportBuilder,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "nowcast", version, about = "Current weather in your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key.
    Configure,

    /// Show current weather for a city name.
    City {
        /// City name, as you would type it into a search box.
        name: String,
    },

    /// Show current weather for a position you already know.
    Coords {
        /// Latitude in decimal degrees.
        latitude: f64,

        /// Longitude in decimal degrees.
        longitude: f64,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::City { name } => {
                let builder = make_builder()?;
                let report = builder.build_from_city_name(&name).await.map_err(|err| {
                    let message = err.user_message();
                    anyhow::Error::new(err).context(message)
                })?;
                render::print_report(&report);
                Ok(())
            }
            Command::Coords { latitude, longitude } => {
                let builder = make_builder()?;
                let resolver = FixedPosition(Coordinates { latitude, longitude });
                let report =
                    builder.build_from_current_location(&resolver).await.map_err(|err| {
                        let message = err.user_message();
                        anyhow::Error::new(err).context(message)
                    })?;
                render::print_report(&report);
                Ok(())
            }
        }
    }
}

/// Prints a short note to stderr while a request is in flight.
struct LoadingMessage;

impl LoadingSignal for LoadingMessage {
    fn loading_started(&self) {
        eprintln!("fetching current weather...");
    }
}

fn make_builder() -> anyhow::Result<WeatherReportBuilder> {
    let config = Config::load()?;
    let api_key = config.resolved_api_key()?;

    let client = OpenWeatherClient::new(api_key).with_timeout(config.request_timeout());

    Ok(WeatherReportBuilder::new(Arc::new(client)).with_loading_signal(Arc::new(LoadingMessage)))
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()
        .context("API key entry aborted")?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}
