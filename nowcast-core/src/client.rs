use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::model::WeatherReport;

pub mod openweather;

pub use openweather::OpenWeatherClient;

/// Current-weather lookups against a remote provider.
///
/// Both operations return the same normalized report shape. Neither retries;
/// retry policy, if any, belongs to the caller.
#[async_trait]
pub trait WeatherClient: Send + Sync + Debug {
    async fn fetch_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherReport, FetchError>;

    async fn fetch_by_city_name(&self, name: &str) -> Result<WeatherReport, FetchError>;
}
