//! Boundary contract for obtaining the device's current position.
//!
//! The core never talks to a positioning stack itself; whoever embeds it
//! supplies a resolver. Resolver failures are terminal for the request and
//! stay distinct so the embedder can prompt remediation.

use async_trait::async_trait;
use tracing::debug;

use crate::error::LocationError;
use crate::model::Coordinates;

#[async_trait]
pub trait LocationResolver: Send + Sync {
    async fn resolve_current_position(&self) -> Result<Coordinates, LocationError>;
}

/// Resolver for callers that already hold a position, such as tests or a
/// CLI invocation with explicit coordinates.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub Coordinates);

#[async_trait]
impl LocationResolver for FixedPosition {
    async fn resolve_current_position(&self) -> Result<Coordinates, LocationError> {
        debug!(
            latitude = self.0.latitude,
            longitude = self.0.longitude,
            "using fixed position"
        );
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_position_returns_its_coordinates() {
        let resolver = FixedPosition(Coordinates { latitude: 12.9, longitude: 77.6 });
        let position = resolver.resolve_current_position().await.unwrap();
        assert_eq!(position.latitude, 12.9);
        assert_eq!(position.longitude, 77.6);
    }
}
