//! Core library for the `nowcast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeatherMap client and the trait seam in front of it
//! - Shared domain models (location queries, weather reports) and their
//!   on-demand display derivations (Celsius, Fahrenheit, category, theme)
//! - Report building with loading notifications, plus last-response-wins
//!   sequencing for overlapping requests
//!
//! It is used by `nowcast-cli`, but can also be reused by other binaries or
//! services.

pub mod builder;
pub mod client;
pub mod condition;
pub mod config;
pub mod error;
pub mod location;
pub mod model;
pub mod session;
pub mod units;

pub use builder::{LoadingSignal, WeatherReportBuilder};
pub use client::{OpenWeatherClient, WeatherClient};
pub use condition::{Category, Theme};
pub use config::Config;
pub use error::{BuildError, FetchError, LocationError};
pub use location::{FixedPosition, LocationResolver};
pub use model::{ConditionEntry, Coordinates, LocationQuery, WeatherReport};
pub use session::{ReportSession, RequestTicket};
