use chrono::{DateTime, Local, TimeZone, Utc};

use crate::domain::{
    comfort::{ComfortAssessment, Suggestion, assess_current, suggest},
    forecast::{ForecastView, aggregate_in},
    levels::{AqiLevel, PrecipitationLevel, aqi_level, precipitation_level},
    narrative::summarize,
    uv::{UvReading, resolve_uv},
    weather::{
        AirQualityReading, Condition, CurrentWeather, PrecipitationKind, RawSample, Units,
        WeatherTheme, day_length, format_local_time, round_temp, round_to_tenth, visibility_km,
        wind_direction,
    },
};

/// Everything fetched for one location in one request generation.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherBundle {
    pub current: CurrentWeather,
    pub forecast: Vec<RawSample>,
    pub air_quality: Option<AirQualityReading>,
    pub measured_uv: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecipitationSummary {
    /// Millimetres per hour.
    pub rate: f64,
    pub level: PrecipitationLevel,
    pub kind: PrecipitationKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirQualitySummary {
    pub reading: AirQualityReading,
    pub level: AqiLevel,
}

/// Fully derived view of a [`WeatherBundle`], ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub location: String,
    pub units: Units,
    pub condition: Condition,
    pub theme: WeatherTheme,
    pub accent: &'static str,
    pub description: String,
    pub icon: String,
    pub temperature: i32,
    pub feels_like: i32,
    pub humidity: f64,
    pub pressure: f64,
    pub wind_speed: f64,
    pub wind_direction: &'static str,
    pub wind_gust: Option<i32>,
    pub visibility_km: Option<f64>,
    pub sunrise: String,
    pub sunset: String,
    pub day_length: String,
    pub precipitation: PrecipitationSummary,
    pub uv: UvReading,
    pub air_quality: Option<AirQualitySummary>,
    pub comfort: ComfortAssessment,
    pub suggestions: Vec<Suggestion>,
    pub summary: String,
    pub forecast: ForecastView,
}

impl Dashboard {
    #[must_use]
    pub fn build(bundle: &WeatherBundle, units: Units, now: DateTime<Utc>) -> Self {
        Self::build_in(bundle, units, now, &Local)
    }

    /// Derives the dashboard with forecast days bucketed in `tz`.
    #[must_use]
    pub fn build_in<Tz: TimeZone>(
        bundle: &WeatherBundle,
        units: Units,
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> Self {
        let current = &bundle.current;
        let forecast = aggregate_in(&bundle.forecast, units, tz);
        let condition = current.condition();
        let offset = current.timezone;

        Self {
            location: current.display_name(),
            units,
            condition,
            theme: condition.theme(),
            accent: condition.accent(),
            description: current.description().to_string(),
            icon: current.icon().to_string(),
            temperature: round_temp(current.main.temp),
            feels_like: round_temp(current.main.feels_like),
            humidity: current.main.humidity,
            pressure: current.main.pressure,
            wind_speed: round_to_tenth(current.wind.speed),
            wind_direction: wind_direction(current.wind.deg),
            wind_gust: current
                .wind
                .gust
                .filter(|gust| *gust != 0.0)
                .map(round_temp),
            visibility_km: current.visibility.map(visibility_km),
            sunrise: format_local_time(current.sys.sunrise, offset),
            sunset: format_local_time(current.sys.sunset, offset),
            day_length: day_length(current.sys.sunrise, current.sys.sunset),
            precipitation: PrecipitationSummary {
                rate: current.precipitation_rate(),
                level: precipitation_level(current.precipitation_rate()),
                kind: current.precipitation_kind(),
            },
            uv: resolve_uv(bundle.measured_uv, condition, offset, now),
            air_quality: bundle.air_quality.map(|reading| AirQualitySummary {
                reading,
                level: aqi_level(reading.aqi),
            }),
            comfort: assess_current(current, units),
            suggestions: suggest(current, units),
            summary: summarize(current, &forecast, units),
            forecast,
        }
    }
}
