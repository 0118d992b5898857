use std::time::Duration;

use anyhow::Context;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    domain::weather::{
        AirComponents, AirQualityReading, CityMatch, Coordinates, CurrentWeather, LocationQuery,
        RawSample, Units,
    },
    error::WeatherError,
};

pub const API_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const GEO_URL: &str = "https://api.openweathermap.org/geo/1.0";

/// Shortest partial name the city search will send.
pub const MIN_SEARCH_LEN: usize = 2;
pub const SEARCH_LIMIT: usize = 5;

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    api_url: String,
    geo_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: impl Into<String>) -> anyhow::Result<Self> {
        Self::with_base_urls(api_key, API_URL, GEO_URL)
    }

    pub fn with_base_urls(
        api_key: impl Into<String>,
        api_url: impl Into<String>,
        geo_url: impl Into<String>,
    ) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("building HTTP client failed")?;
        Ok(Self {
            client,
            api_url: trim_slash(api_url.into()),
            geo_url: trim_slash(geo_url.into()),
            api_key: api_key.into(),
        })
    }

    pub async fn current(
        &self,
        query: &LocationQuery,
        units: Units,
    ) -> Result<CurrentWeather, WeatherError> {
        let url = format!("{}/weather", self.api_url);
        self.get_json(&url, &location_params(query, units), "weather data")
            .await
    }

    pub async fn forecast(
        &self,
        query: &LocationQuery,
        units: Units,
    ) -> Result<Vec<RawSample>, WeatherError> {
        let url = format!("{}/forecast", self.api_url);
        let payload: ForecastResponse = self
            .get_json(&url, &location_params(query, units), "forecast data")
            .await?;
        Ok(payload.list)
    }

    /// Latest air-quality reading, `None` when the provider has nothing usable.
    pub async fn air_quality(&self, coords: Coordinates) -> Option<AirQualityReading> {
        let url = format!("{}/air_pollution", self.api_url);
        let payload: AirQualityResponse = self
            .get_json(&url, &coord_params(coords), "air quality data")
            .await
            .inspect_err(|err| tracing::debug!(%err, "air quality unavailable"))
            .ok()?;
        let entry = payload.list.into_iter().next()?;
        Some(AirQualityReading {
            aqi: entry.main.aqi,
            components: entry.components,
        })
    }

    /// Measured UV index. Not every API plan serves this endpoint.
    pub async fn uv_index(&self, coords: Coordinates) -> Option<f64> {
        let url = format!("{}/uvi", self.api_url);
        let payload: UvResponse = self
            .get_json(&url, &coord_params(coords), "UV index")
            .await
            .inspect_err(|err| tracing::debug!(%err, "measured UV unavailable"))
            .ok()?;
        Some(payload.value)
    }

    /// City matches for a partial name. Queries shorter than two characters
    /// return nothing without touching the network.
    pub async fn search(&self, query: &str) -> Result<Vec<CityMatch>, WeatherError> {
        let query = query.trim();
        if query.chars().count() < MIN_SEARCH_LEN {
            return Ok(Vec::new());
        }
        let url = format!("{}/direct", self.geo_url);
        let params = vec![
            ("q", query.to_string()),
            ("limit", SEARCH_LIMIT.to_string()),
        ];
        // Any search failure is reported as such, never as a missing city.
        let mut matches: Vec<CityMatch> = self
            .get_json(&url, &params, "city matches")
            .await
            .map_err(|_| WeatherError::Fetch {
                resource: "city matches",
            })?;
        matches.truncate(SEARCH_LIMIT);
        Ok(matches)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
        resource: &'static str,
    ) -> Result<T, WeatherError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(resource, %err, "provider request failed");
                WeatherError::Fetch { resource }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(resource, %status, "provider returned non-success status");
            return Err(status_error(status, resource));
        }

        response.json::<T>().await.map_err(|err| {
            tracing::warn!(resource, %err, "failed to decode provider payload");
            WeatherError::Fetch { resource }
        })
    }
}

fn status_error(status: StatusCode, resource: &'static str) -> WeatherError {
    match status {
        StatusCode::NOT_FOUND => WeatherError::NotFound,
        StatusCode::UNAUTHORIZED => WeatherError::Unauthorized,
        _ => WeatherError::Fetch { resource },
    }
}

fn location_params(query: &LocationQuery, units: Units) -> Vec<(&'static str, String)> {
    let mut params = match query {
        LocationQuery::City(name) => vec![("q", name.clone())],
        LocationQuery::Coords(coords) => coord_params(*coords),
    };
    params.push(("units", units.api_value().to_string()));
    params
}

fn coord_params(coords: Coordinates) -> Vec<(&'static str, String)> {
    vec![
        ("lat", coords.lat.to_string()),
        ("lon", coords.lon.to_string()),
    ]
}

fn trim_slash(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    list: Vec<RawSample>,
}

#[derive(Debug, Deserialize)]
struct AirQualityResponse {
    #[serde(default)]
    list: Vec<AirQualityEntry>,
}

#[derive(Debug, Deserialize)]
struct AirQualityEntry {
    main: AirQualityIndex,
    #[serde(default)]
    components: AirComponents,
}

#[derive(Debug, Deserialize)]
struct AirQualityIndex {
    aqi: u8,
}

#[derive(Debug, Deserialize)]
struct UvResponse {
    value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_follows_error_taxonomy() {
        assert_eq!(
            status_error(StatusCode::NOT_FOUND, "weather data"),
            WeatherError::NotFound
        );
        assert_eq!(
            status_error(StatusCode::UNAUTHORIZED, "weather data"),
            WeatherError::Unauthorized
        );
        assert_eq!(
            status_error(StatusCode::BAD_GATEWAY, "forecast data"),
            WeatherError::Fetch {
                resource: "forecast data"
            }
        );
    }

    #[test]
    fn location_params_switch_between_city_and_coords() {
        let by_city = location_params(&LocationQuery::City("Oslo".to_string()), Units::Imperial);
        assert_eq!(
            by_city,
            vec![("q", "Oslo".to_string()), ("units", "imperial".to_string())]
        );

        let by_coords = location_params(
            &LocationQuery::Coords(Coordinates {
                lat: 59.91,
                lon: 10.75,
            }),
            Units::Metric,
        );
        assert_eq!(by_coords[0], ("lat", "59.91".to_string()));
        assert_eq!(by_coords[1], ("lon", "10.75".to_string()));
        assert_eq!(by_coords[2], ("units", "metric".to_string()));
    }

    #[test]
    fn forecast_payload_decodes_precipitation_keys() {
        let payload = serde_json::json!({
            "cod": "200",
            "list": [{
                "dt": 1_781_000_000,
                "main": {"temp": 11.2, "feels_like": 10.1, "humidity": 81, "pressure": 1004},
                "wind": {"speed": 6.2, "deg": 250, "gust": 11.0},
                "weather": [{"main": "Rain", "description": "light rain", "icon": "10n"}],
                "clouds": {"all": 100},
                "rain": {"3h": 1.27}
            }]
        });
        let decoded: ForecastResponse = serde_json::from_value(payload).expect("decode forecast");
        let sample = &decoded.list[0];
        assert_eq!(sample.primary().icon, "10n");
        assert_eq!(sample.rain.and_then(|r| r.three_hours), Some(1.27));
        assert_eq!(sample.wind.gust, Some(11.0));
        assert!((sample.main.humidity - 81.0).abs() < f64::EPSILON);
    }
}
