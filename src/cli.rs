#![allow(clippy::missing_errors_doc)]

use clap::{Parser, ValueEnum};

use crate::domain::weather::{Coordinates, LocationQuery, Units};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Metric,
    Imperial,
}

impl From<UnitsArg> for Units {
    fn from(value: UnitsArg) -> Self {
        match value {
            UnitsArg::Metric => Units::Metric,
            UnitsArg::Imperial => Units::Imperial,
        }
    }
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "weather-outlook",
    version,
    about = "Current conditions, forecast and a plain-language outlook for any city"
)]
pub struct Cli {
    /// City name (defaults to the first favourite)
    pub city: Option<String>,

    /// Measurement system for every value
    #[arg(long, value_enum, default_value_t = UnitsArg::Metric)]
    pub units: UnitsArg,

    /// Direct latitude (requires --lon)
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Direct longitude (requires --lat)
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Locate this machine from its network address
    #[arg(long, conflicts_with_all = ["city", "lat", "lon"])]
    pub here: bool,

    /// List cities matching a partial name and exit
    #[arg(long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Save a city to favourites
    #[arg(long, value_name = "CITY")]
    pub add_favorite: Option<String>,

    /// Remove a city from favourites
    #[arg(long, value_name = "CITY")]
    pub remove_favorite: Option<String>,

    /// Print saved favourites and exit
    #[arg(long)]
    pub favorites: bool,

    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Override the weather API base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Override the geocoding API base URL
    #[arg(long)]
    pub geo_url: Option<String>,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            _ => Ok(()),
        }
    }

    #[must_use]
    pub fn units(&self) -> Units {
        self.units.into()
    }

    /// Location named explicitly on the command line, if any.
    #[must_use]
    pub fn location(&self) -> Option<LocationQuery> {
        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            return Some(LocationQuery::Coords(Coordinates { lat, lon }));
        }
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
            .map(|city| LocationQuery::City(city.to_string()))
    }

    /// Whether this invocation only manages favourites or searches.
    #[must_use]
    pub fn is_management_only(&self) -> bool {
        let managing = self.favorites
            || self.search.is_some()
            || self.add_favorite.is_some()
            || self.remove_favorite.is_some();
        managing && !self.here && self.location().is_none()
    }
}
