use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{domain::weather::Coordinates, error::WeatherError};

const GEOIP_URL: &str = "https://ipapi.co/json/";

pub const POSITION_TIMEOUT: Duration = Duration::from_secs(10);
/// How long a previously resolved position is reused.
pub const POSITION_MAX_AGE: Duration = Duration::from_secs(300);

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// Approximate position of this machine from its public IP address.
#[derive(Debug)]
pub struct Geolocator {
    client: Option<Client>,
    url: String,
    timeout: Duration,
    cached: Option<(Coordinates, Instant)>,
}

impl Default for Geolocator {
    fn default() -> Self {
        Self::new()
    }
}

impl Geolocator {
    #[must_use]
    pub fn new() -> Self {
        Self::with_url(GEOIP_URL)
    }

    #[must_use]
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: Client::builder().build().ok(),
            url: url.into(),
            timeout: POSITION_TIMEOUT,
            cached: None,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn locate(&mut self) -> Result<Coordinates, WeatherError> {
        if let Some((coords, at)) = self.cached
            && at.elapsed() < POSITION_MAX_AGE
        {
            return Ok(coords);
        }

        let coords = self.lookup().await?;
        self.cached = Some((coords, Instant::now()));
        Ok(coords)
    }

    async fn lookup(&self) -> Result<Coordinates, WeatherError> {
        let client = self
            .client
            .as_ref()
            .ok_or(WeatherError::UnsupportedEnvironment)?;

        let request = async {
            let response = client.get(&self.url).send().await.map_err(|err| {
                tracing::warn!(%err, "position lookup failed");
                WeatherError::PositionUnavailable
            })?;

            match response.status() {
                StatusCode::FORBIDDEN | StatusCode::UNAUTHORIZED => {
                    return Err(WeatherError::PermissionDenied);
                }
                status if !status.is_success() => {
                    tracing::warn!(%status, "position lookup returned non-success status");
                    return Err(WeatherError::PositionUnavailable);
                }
                _ => {}
            }

            response
                .json::<IpApiResponse>()
                .await
                .map_err(|_| WeatherError::PositionUnavailable)
        };

        let payload = tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| WeatherError::Timeout)??;

        match (payload.latitude, payload.longitude) {
            (Some(lat), Some(lon)) => Ok(Coordinates { lat, lon }),
            _ => Err(WeatherError::PositionUnavailable),
        }
    }
}
