use thiserror::Error;

/// Failure to obtain a position from the location resolver.
///
/// Each variant is terminal for the current request. They stay distinct so
/// the caller can prompt the matching remediation (grant the permission,
/// open the location settings) instead of showing a generic failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("location services are disabled")]
    ServiceDisabled,

    #[error("no position fix available")]
    Unavailable,
}

/// Failure while talking to the weather service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport-level failure: DNS, connect, timeout, reset, body read.
    #[error("network failure reaching the weather service: {0}")]
    Network(String),

    /// Non-2xx status or a body that does not parse as the expected payload.
    /// An unknown city name surfaces here; the provider answers it with an
    /// HTTP error.
    #[error("weather service returned an unusable response: {0}")]
    InvalidResponse(String),
}

impl FetchError {
    /// Wrap a reqwest transport error. The URL is stripped first; it carries
    /// the API key as a query parameter.
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        FetchError::Network(err.without_url().to_string())
    }
}

/// Failure to produce a display-ready report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("city name must not be empty")]
    InvalidInput,

    #[error("could not resolve current position: {0}")]
    Location(#[from] LocationError),

    #[error("weather lookup failed: {0}")]
    Fetch(#[from] FetchError),
}

impl BuildError {
    /// One short message per error kind, suitable for direct display.
    pub fn user_message(&self) -> &'static str {
        match self {
            BuildError::InvalidInput => "Enter a city name first",
            BuildError::Location(LocationError::PermissionDenied) => "Location permission denied",
            BuildError::Location(LocationError::ServiceDisabled) => "Turn on location",
            BuildError::Location(LocationError::Unavailable) => "Current position unavailable",
            BuildError::Fetch(FetchError::InvalidResponse(_)) => "Not a valid city name",
            BuildError::Fetch(FetchError::Network(_)) => "Network error, try again",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_errors_convert_into_build_errors() {
        let err: BuildError = LocationError::ServiceDisabled.into();
        assert_eq!(err, BuildError::Location(LocationError::ServiceDisabled));
    }

    #[test]
    fn fetch_errors_convert_into_build_errors() {
        let err: BuildError = FetchError::Network("connection reset".into()).into();
        assert!(matches!(err, BuildError::Fetch(FetchError::Network(_))));
    }

    #[test]
    fn every_error_kind_has_a_user_message() {
        let errors = [
            BuildError::InvalidInput,
            BuildError::Location(LocationError::PermissionDenied),
            BuildError::Location(LocationError::ServiceDisabled),
            BuildError::Location(LocationError::Unavailable),
            BuildError::Fetch(FetchError::Network("timed out".into())),
            BuildError::Fetch(FetchError::InvalidResponse("status 404".into())),
        ];

        for err in errors {
            assert!(!err.user_message().is_empty());
        }
    }

    #[test]
    fn invalid_response_reads_as_invalid_city() {
        let err = BuildError::Fetch(FetchError::InvalidResponse("status 404: city not found".into()));
        assert_eq!(err.user_message(), "Not a valid city name");
    }
}
