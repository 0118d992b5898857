use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

use crate::{
    app::events::{AppEvent, spawn_fetch},
    data::openweather::OpenWeatherClient,
    domain::{
        dashboard::{Dashboard, WeatherBundle},
        weather::{LocationQuery, Units},
    },
    error::WeatherError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Idle,
    Loading,
    Ready,
    Error,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub units: Units,
    pub location: Option<LocationQuery>,
    pub weather: Option<WeatherBundle>,
    pub last_error: Option<WeatherError>,
    generation: u64,
    extras_pending: bool,
}

impl AppState {
    #[must_use]
    pub fn new(units: Units) -> Self {
        Self {
            mode: AppMode::Idle,
            units,
            location: None,
            weather: None,
            last_error: None,
            generation: 0,
            extras_pending: false,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts a new request generation for `query`. Responses tagged with an
    /// older generation are ignored from here on.
    pub fn request(&mut self, query: LocationQuery) -> u64 {
        self.generation += 1;
        tracing::debug!(generation = self.generation, location = %query.label(), "requesting weather");
        self.location = Some(query);
        self.mode = AppMode::Loading;
        self.last_error = None;
        self.extras_pending = false;
        self.generation
    }

    pub fn start_fetch(
        &mut self,
        tx: &mpsc::Sender<AppEvent>,
        client: &OpenWeatherClient,
        query: LocationQuery,
    ) {
        let generation = self.request(query.clone());
        spawn_fetch(tx.clone(), client.clone(), query, self.units, generation);
    }

    /// Fetches the current location again, if there is one.
    pub fn retry(&mut self, tx: &mpsc::Sender<AppEvent>, client: &OpenWeatherClient) -> bool {
        let Some(query) = self.location.clone() else {
            return false;
        };
        self.start_fetch(tx, client, query);
        true
    }

    /// Switches units and refetches, since provider values come pre-converted.
    pub fn set_units(
        &mut self,
        units: Units,
        tx: &mpsc::Sender<AppEvent>,
        client: &OpenWeatherClient,
    ) {
        if self.units == units {
            return;
        }
        self.units = units;
        self.retry(tx, client);
    }

    /// Records a failure that happened before any fetch could start, such as
    /// a location lookup.
    pub fn fail(&mut self, err: WeatherError) {
        self.generation += 1;
        self.mode = AppMode::Error;
        self.weather = None;
        self.extras_pending = false;
        self.last_error = Some(err);
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        if event.generation() != self.generation {
            tracing::debug!(
                stale = event.generation(),
                current = self.generation,
                "discarding superseded response"
            );
            return;
        }

        match event {
            AppEvent::WeatherLoaded { result, .. } => match result {
                Ok((current, forecast)) => {
                    tracing::info!(location = %current.display_name(), slots = forecast.len(), "weather loaded");
                    self.weather = Some(WeatherBundle {
                        current,
                        forecast,
                        air_quality: None,
                        measured_uv: None,
                    });
                    self.mode = AppMode::Ready;
                    self.last_error = None;
                    self.extras_pending = true;
                }
                Err(err) => {
                    tracing::warn!(%err, "weather fetch failed");
                    self.weather = None;
                    self.mode = AppMode::Error;
                    self.last_error = Some(err);
                    self.extras_pending = false;
                }
            },
            AppEvent::ExtrasLoaded {
                air_quality,
                measured_uv,
                ..
            } => {
                self.extras_pending = false;
                if let Some(bundle) = self.weather.as_mut() {
                    bundle.air_quality = air_quality;
                    bundle.measured_uv = measured_uv;
                }
            }
        }
    }

    /// No more events are expected for the current generation.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        match self.mode {
            AppMode::Idle | AppMode::Error => true,
            AppMode::Ready => !self.extras_pending,
            AppMode::Loading => false,
        }
    }

    #[must_use]
    pub fn dashboard(&self, now: DateTime<Utc>) -> Option<Dashboard> {
        if self.mode != AppMode::Ready {
            return None;
        }
        self.weather
            .as_ref()
            .map(|bundle| Dashboard::build(bundle, self.units, now))
    }
}

#[cfg(test)]
mod tests;
