//! Location
//!
//! Best-effort device geolocation for delivery orders. A failed lookup is
//! informational only; checkout proceeds without coordinates.

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Device coordinates attached to a delivery order.
///
/// Stored as strings, matching the order record wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in decimal degrees.
    pub lat: String,
    /// Longitude in decimal degrees.
    pub lng: String,
}

/// Errors reported by a location provider.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    /// The device has no location capability.
    #[error("location lookup is not supported on this device")]
    Unsupported,

    /// The user denied the location permission.
    #[error("location permission was denied")]
    PermissionDenied,

    /// The lookup failed for any other reason.
    #[error("location unavailable: {0}")]
    Unavailable(String),
}

/// Source of device coordinates.
#[automock]
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Attempt to determine the device's current coordinates.
    async fn locate(&self) -> Result<Location, LocationError>;
}

/// Provider for sessions without any location capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

#[async_trait]
impl LocationProvider for NoLocation {
    async fn locate(&self) -> Result<Location, LocationError> {
        Err(LocationError::Unsupported)
    }
}

/// Provider returning a fixed set of coordinates.
#[derive(Debug, Clone)]
pub struct FixedLocation(pub Location);

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn locate(&self) -> Result<Location, LocationError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_location_reports_unsupported() {
        let result = NoLocation.locate().await;

        assert_eq!(result, Err(LocationError::Unsupported));
    }

    #[tokio::test]
    async fn fixed_location_returns_its_coordinates() {
        let provider = FixedLocation(Location {
            lat: "13.0827".to_string(),
            lng: "80.2707".to_string(),
        });

        let located = provider.locate().await;

        assert_eq!(located.map(|location| location.lat), Ok("13.0827".to_string()));
    }
}
