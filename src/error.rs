use thiserror::Error;

/// Failures the dashboard can show to the user.
///
/// Missing air-quality or UV data is not an error; those readings are
/// optional and simply left out of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    #[error("City not found")]
    NotFound,
    #[error("Invalid API key. Set OPENWEATHER_API_KEY or pass --api-key")]
    Unauthorized,
    #[error("Failed to fetch {resource}")]
    Fetch { resource: &'static str },
    #[error("Geolocation is not supported in this environment")]
    UnsupportedEnvironment,
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location information unavailable")]
    PositionUnavailable,
    #[error("Location request timed out")]
    Timeout,
}

impl WeatherError {
    /// Whether asking again without changing input or configuration can help.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            WeatherError::Fetch { .. } | WeatherError::PositionUnavailable | WeatherError::Timeout
        )
    }
}
