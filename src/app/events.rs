use tokio::sync::mpsc;

use crate::{
    data::openweather::OpenWeatherClient,
    domain::weather::{AirQualityReading, CurrentWeather, LocationQuery, RawSample, Units},
    error::WeatherError,
};

/// Completed fetches, tagged with the request generation that started them.
#[derive(Debug)]
pub enum AppEvent {
    WeatherLoaded {
        generation: u64,
        result: Result<(CurrentWeather, Vec<RawSample>), WeatherError>,
    },
    ExtrasLoaded {
        generation: u64,
        air_quality: Option<AirQualityReading>,
        measured_uv: Option<f64>,
    },
}

impl AppEvent {
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            AppEvent::WeatherLoaded { generation, .. }
            | AppEvent::ExtrasLoaded { generation, .. } => *generation,
        }
    }
}

/// Fetches current conditions and the forecast together, then the optional
/// extras once the location's coordinates are known.
pub fn spawn_fetch(
    tx: mpsc::Sender<AppEvent>,
    client: OpenWeatherClient,
    query: LocationQuery,
    units: Units,
    generation: u64,
) {
    tokio::spawn(async move {
        let (current, forecast) =
            futures::join!(client.current(&query, units), client.forecast(&query, units));
        let result = current.and_then(|current| forecast.map(|samples| (current, samples)));
        let coords = result.as_ref().ok().map(|(current, _)| current.coord);

        if tx
            .send(AppEvent::WeatherLoaded { generation, result })
            .await
            .is_err()
        {
            return;
        }

        let Some(coords) = coords else {
            return;
        };
        let (air_quality, measured_uv) =
            futures::join!(client.air_quality(coords), client.uv_index(coords));
        let _ = tx
            .send(AppEvent::ExtrasLoaded {
                generation,
                air_quality,
                measured_uv,
            })
            .await;
    });
}
