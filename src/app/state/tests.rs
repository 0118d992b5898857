use chrono::Utc;
use tokio::sync::mpsc;

use super::{AppMode, AppState};
use crate::{
    app::events::AppEvent,
    data::openweather::OpenWeatherClient,
    domain::weather::{AirQualityReading, LocationQuery, Units},
    error::WeatherError,
    test_support::{sample_current, three_hourly_days},
};

fn loaded(generation: u64) -> AppEvent {
    AppEvent::WeatherLoaded {
        generation,
        result: Ok((sample_current(), three_hourly_days(2026, 6, 1, 2))),
    }
}

fn city(name: &str) -> LocationQuery {
    LocationQuery::City(name.to_string())
}

#[test]
fn request_bumps_generation_and_enters_loading() {
    let mut state = AppState::new(Units::Metric);
    assert_eq!(state.mode, AppMode::Idle);
    assert!(state.is_settled());

    let generation = state.request(city("London"));
    assert_eq!(generation, 1);
    assert_eq!(state.mode, AppMode::Loading);
    assert!(!state.is_settled());
    assert!(state.dashboard(Utc::now()).is_none());
}

#[test]
fn weather_then_extras_settles_ready() {
    let mut state = AppState::new(Units::Metric);
    let generation = state.request(city("London"));

    state.handle_event(loaded(generation));
    assert_eq!(state.mode, AppMode::Ready);
    assert!(!state.is_settled());
    assert!(state.dashboard(Utc::now()).is_some());

    state.handle_event(AppEvent::ExtrasLoaded {
        generation,
        air_quality: Some(AirQualityReading {
            aqi: 2,
            components: Default::default(),
        }),
        measured_uv: None,
    });
    assert!(state.is_settled());
    let bundle = state.weather.as_ref().expect("bundle");
    assert_eq!(bundle.air_quality.map(|a| a.aqi), Some(2));
}

#[test]
fn missing_extras_do_not_block_the_dashboard() {
    let mut state = AppState::new(Units::Metric);
    let generation = state.request(city("London"));
    state.handle_event(loaded(generation));
    state.handle_event(AppEvent::ExtrasLoaded {
        generation,
        air_quality: None,
        measured_uv: None,
    });

    assert_eq!(state.mode, AppMode::Ready);
    let dashboard = state.dashboard(Utc::now()).expect("dashboard");
    assert!(dashboard.air_quality.is_none());
    assert!(dashboard.uv.is_estimate());
}

#[test]
fn stale_generation_is_ignored() {
    let mut state = AppState::new(Units::Metric);
    let first = state.request(city("Paris"));
    let second = state.request(city("Tokyo"));

    state.handle_event(AppEvent::WeatherLoaded {
        generation: first,
        result: Err(WeatherError::NotFound),
    });
    assert_eq!(state.mode, AppMode::Loading);
    assert!(state.last_error.is_none());

    state.handle_event(loaded(second));
    assert_eq!(state.mode, AppMode::Ready);
    assert_eq!(state.location, Some(city("Tokyo")));
}

#[test]
fn late_response_cannot_overwrite_newer_data() {
    let mut state = AppState::new(Units::Metric);
    let first = state.request(city("Paris"));
    let second = state.request(city("Tokyo"));
    state.handle_event(loaded(second));

    state.handle_event(AppEvent::ExtrasLoaded {
        generation: first,
        air_quality: Some(AirQualityReading {
            aqi: 5,
            components: Default::default(),
        }),
        measured_uv: Some(10.0),
    });

    let bundle = state.weather.as_ref().expect("bundle");
    assert!(bundle.air_quality.is_none());
    assert!(bundle.measured_uv.is_none());
}

#[test]
fn fetch_failure_enters_error_mode_with_message() {
    let mut state = AppState::new(Units::Metric);
    let generation = state.request(city("Atlantis"));
    state.handle_event(AppEvent::WeatherLoaded {
        generation,
        result: Err(WeatherError::NotFound),
    });

    assert_eq!(state.mode, AppMode::Error);
    assert!(state.is_settled());
    assert!(state.dashboard(Utc::now()).is_none());
    assert_eq!(
        state.last_error.as_ref().map(ToString::to_string),
        Some("City not found".to_string())
    );
}

#[test]
fn fail_supersedes_in_flight_requests() {
    let mut state = AppState::new(Units::Metric);
    let generation = state.request(city("Paris"));
    state.fail(WeatherError::PermissionDenied);
    state.handle_event(loaded(generation));

    assert_eq!(state.mode, AppMode::Error);
    assert_eq!(state.last_error, Some(WeatherError::PermissionDenied));
}

#[test]
fn new_request_clears_previous_error() {
    let mut state = AppState::new(Units::Imperial);
    state.fail(WeatherError::Timeout);
    state.request(city("Denver"));
    assert_eq!(state.mode, AppMode::Loading);
    assert!(state.last_error.is_none());
    assert_eq!(state.units, Units::Imperial);
}

#[test]
fn retry_without_a_location_does_nothing() {
    let client = OpenWeatherClient::new("key").expect("client");
    let (tx, _rx) = mpsc::channel(1);
    let mut state = AppState::new(Units::Metric);

    assert!(!state.retry(&tx, &client));
    assert_eq!(state.generation(), 0);
    assert_eq!(state.mode, AppMode::Idle);
}

#[test]
fn setting_the_same_units_keeps_the_current_generation() {
    let client = OpenWeatherClient::new("key").expect("client");
    let (tx, _rx) = mpsc::channel(1);
    let mut state = AppState::new(Units::Imperial);
    let generation = state.request(city("Boston"));
    state.handle_event(loaded(generation));

    state.set_units(Units::Imperial, &tx, &client);
    assert_eq!(state.generation(), generation);
    assert_eq!(state.mode, AppMode::Ready);
    assert!(state.weather.is_some());
}
