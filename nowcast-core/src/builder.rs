//! Orchestration from a location query to a display-ready report.

use std::sync::Arc;

use tracing::debug;

use crate::client::WeatherClient;
use crate::error::BuildError;
use crate::location::LocationResolver;
use crate::model::{Coordinates, LocationQuery, WeatherReport};

/// Observer for the loading indicator.
///
/// `loading_started` fires just before the network call goes out;
/// `loading_finished` fires once the request has succeeded or failed. An
/// input rejected before any network traffic never reaches either hook.
pub trait LoadingSignal: Send + Sync {
    fn loading_started(&self) {}
    fn loading_finished(&self) {}
}

/// Builds display-ready reports from location queries.
///
/// The client is injected, every build is a single attempt with no internal
/// retry, and every failure maps to a [`BuildError`] the presentation layer
/// can turn into a message.
pub struct WeatherReportBuilder {
    client: Arc<dyn WeatherClient>,
    signal: Option<Arc<dyn LoadingSignal>>,
}

impl WeatherReportBuilder {
    pub fn new(client: Arc<dyn WeatherClient>) -> Self {
        Self { client, signal: None }
    }

    /// Subscribe a loading observer.
    pub fn with_loading_signal(mut self, signal: Arc<dyn LoadingSignal>) -> Self {
        self.signal = Some(signal);
        self
    }

    /// Dispatch a query to the matching fetch operation.
    pub async fn build(&self, query: &LocationQuery) -> Result<WeatherReport, BuildError> {
        match query {
            LocationQuery::ByCoordinates(position) => self.fetch_for_position(*position).await,
            LocationQuery::ByName(name) => self.build_from_city_name(name).await,
        }
    }

    /// Resolve the current position, then fetch weather for it. A resolver
    /// failure is terminal and surfaces before any network call.
    pub async fn build_from_current_location(
        &self,
        resolver: &dyn LocationResolver,
    ) -> Result<WeatherReport, BuildError> {
        let position = resolver.resolve_current_position().await?;
        self.fetch_for_position(position).await
    }

    /// Fetch weather for a user-entered city name.
    ///
    /// Empty or whitespace-only input is rejected as
    /// [`BuildError::InvalidInput`] without touching the network.
    pub async fn build_from_city_name(&self, name: &str) -> Result<WeatherReport, BuildError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BuildError::InvalidInput);
        }

        debug!(city = name, "building report from city name");

        self.signal_started();
        let result = self.client.fetch_by_city_name(name).await;
        self.signal_finished();

        Ok(result?)
    }

    async fn fetch_for_position(
        &self,
        position: Coordinates,
    ) -> Result<WeatherReport, BuildError> {
        debug!(
            latitude = position.latitude,
            longitude = position.longitude,
            "building report from coordinates"
        );

        self.signal_started();
        let result = self
            .client
            .fetch_by_coordinates(position.latitude, position.longitude)
            .await;
        self.signal_finished();

        Ok(result?)
    }

    fn signal_started(&self) {
        if let Some(signal) = &self.signal {
            signal.loading_started();
        }
    }

    fn signal_finished(&self) {
        if let Some(signal) = &self.signal {
            signal.loading_finished();
        }
    }
}
