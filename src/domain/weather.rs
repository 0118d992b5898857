use serde::{Deserialize, Serialize};

mod conditions;
mod conversions;

pub use conditions::{Condition, WeatherTheme};
pub use conversions::{
    day_length, format_local_time, round_temp, round_to_tenth, visibility_km, wind_direction,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    /// Value of the provider's `units` query parameter.
    #[must_use]
    pub fn api_value(self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    #[must_use]
    pub fn temperature_suffix(self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }

    #[must_use]
    pub fn speed_suffix(self) -> &'static str {
        match self {
            Units::Metric => "m/s",
            Units::Imperial => "mph",
        }
    }

    /// Picks the metric or imperial variant of a threshold.
    #[must_use]
    pub fn pick<T>(self, metric: T, imperial: T) -> T {
        match self {
            Units::Metric => metric,
            Units::Imperial => imperial,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub pressure: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
    #[serde(default)]
    pub deg: f64,
    #[serde(default)]
    pub gust: Option<f64>,
}

/// One entry of the provider's `weather` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionInfo {
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Clouds {
    #[serde(default)]
    pub all: f64,
}

/// Rain or snow volume in millimetres over the last one and three hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Precipitation {
    #[serde(rename = "1h", default)]
    pub one_hour: Option<f64>,
    #[serde(rename = "3h", default)]
    pub three_hours: Option<f64>,
}

/// A single 3-hour forecast slot as delivered by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    pub dt: i64,
    pub main: MainReadings,
    pub wind: Wind,
    #[serde(default)]
    pub weather: Vec<ConditionInfo>,
    #[serde(default)]
    pub clouds: Clouds,
    #[serde(default)]
    pub rain: Option<Precipitation>,
    #[serde(default)]
    pub snow: Option<Precipitation>,
}

impl RawSample {
    #[must_use]
    pub fn primary(&self) -> ConditionInfo {
        self.weather.first().cloned().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunCycle {
    pub sunrise: i64,
    pub sunset: i64,
    #[serde(default)]
    pub country: Option<String>,
}

/// Current conditions for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    #[serde(default)]
    pub name: String,
    pub coord: Coordinates,
    pub main: MainReadings,
    pub wind: Wind,
    #[serde(default)]
    pub weather: Vec<ConditionInfo>,
    #[serde(default)]
    pub clouds: Clouds,
    #[serde(default)]
    pub visibility: Option<f64>,
    pub sys: SunCycle,
    /// Offset from UTC in seconds.
    #[serde(default)]
    pub timezone: i64,
    #[serde(default)]
    pub rain: Option<Precipitation>,
    #[serde(default)]
    pub snow: Option<Precipitation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecipitationKind {
    Rain,
    Snow,
}

impl CurrentWeather {
    /// Condition group of the first `weather` entry, `Clear` when absent.
    #[must_use]
    pub fn condition(&self) -> Condition {
        self.weather
            .first()
            .map_or(Condition::Clear, |info| Condition::from_main(&info.main))
    }

    #[must_use]
    pub fn description(&self) -> &str {
        self.weather
            .first()
            .map_or("", |info| info.description.as_str())
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        self.weather.first().map_or("", |info| info.icon.as_str())
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.sys.country {
            Some(country) if !country.is_empty() => format!("{}, {}", self.name, country),
            _ => self.name.clone(),
        }
    }

    /// Hourly precipitation rate in mm, preferring 1h readings and spreading
    /// 3h totals evenly.
    #[must_use]
    pub fn precipitation_rate(&self) -> f64 {
        let rain = self.rain.unwrap_or_default();
        let snow = self.snow.unwrap_or_default();
        [
            rain.one_hour,
            rain.three_hours.map(|v| v / 3.0),
            snow.one_hour,
            snow.three_hours.map(|v| v / 3.0),
        ]
        .into_iter()
        .flatten()
        .find(|v| *v != 0.0)
        .unwrap_or(0.0)
    }

    #[must_use]
    pub fn precipitation_kind(&self) -> PrecipitationKind {
        let snow = self.snow.unwrap_or_default();
        let snowing = [snow.one_hour, snow.three_hours]
            .into_iter()
            .flatten()
            .any(|v| v != 0.0);
        if snowing {
            PrecipitationKind::Snow
        } else {
            PrecipitationKind::Rain
        }
    }
}

/// Pollutant concentrations in μg/m³.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AirComponents {
    #[serde(default)]
    pub co: Option<f64>,
    #[serde(default)]
    pub no2: Option<f64>,
    #[serde(default)]
    pub o3: Option<f64>,
    #[serde(default)]
    pub so2: Option<f64>,
    #[serde(default)]
    pub pm2_5: Option<f64>,
    #[serde(default)]
    pub pm10: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirQualityReading {
    /// Provider index, 1 (good) to 5 (very poor).
    pub aqi: u8,
    pub components: AirComponents,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityMatch {
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub state: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

impl CityMatch {
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.state {
            Some(state) => format!("{}, {}, {}", self.name, state, self.country),
            None => format!("{}, {}", self.name, self.country),
        }
    }

    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.lat,
            lon: self.lon,
        }
    }
}

/// What the user asked to see weather for.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    City(String),
    Coords(Coordinates),
}

impl LocationQuery {
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            LocationQuery::City(name) => name.clone(),
            LocationQuery::Coords(c) => format!("{:.4}, {:.4}", c.lat, c.lon),
        }
    }
}
