/// Provider condition group (`weather[0].main`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Fog,
    Haze,
    Other,
}

/// Background theme class the view layer keys its gradients on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherTheme {
    Sunny,
    Cloudy,
    Rain,
    Storm,
    Snow,
    Clear,
}

impl WeatherTheme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            WeatherTheme::Sunny => "sunny",
            WeatherTheme::Cloudy => "cloudy",
            WeatherTheme::Rain => "rain",
            WeatherTheme::Storm => "storm",
            WeatherTheme::Snow => "snow",
            WeatherTheme::Clear => "clear",
        }
    }
}

const CONDITION_NAMES: &[(&str, Condition)] = &[
    ("Clear", Condition::Clear),
    ("Clouds", Condition::Clouds),
    ("Rain", Condition::Rain),
    ("Drizzle", Condition::Drizzle),
    ("Thunderstorm", Condition::Thunderstorm),
    ("Snow", Condition::Snow),
    ("Mist", Condition::Mist),
    ("Fog", Condition::Fog),
    ("Haze", Condition::Haze),
];

impl Condition {
    /// Matches the provider's group name exactly; anything else is `Other`.
    #[must_use]
    pub fn from_main(main: &str) -> Self {
        CONDITION_NAMES
            .iter()
            .find_map(|(name, condition)| (*name == main).then_some(*condition))
            .unwrap_or(Condition::Other)
    }

    #[must_use]
    pub fn is_wet(self) -> bool {
        matches!(self, Condition::Rain | Condition::Drizzle)
    }

    #[must_use]
    pub fn theme(self) -> WeatherTheme {
        match self {
            Condition::Clear => WeatherTheme::Sunny,
            Condition::Clouds | Condition::Mist | Condition::Fog | Condition::Haze => {
                WeatherTheme::Cloudy
            }
            Condition::Rain | Condition::Drizzle => WeatherTheme::Rain,
            Condition::Thunderstorm => WeatherTheme::Storm,
            Condition::Snow => WeatherTheme::Snow,
            Condition::Other => WeatherTheme::Clear,
        }
    }

    #[must_use]
    pub fn accent(self) -> &'static str {
        match self {
            Condition::Clear => "#fbbf24",
            Condition::Clouds | Condition::Fog => "#94a3b8",
            Condition::Rain => "#4ecdc4",
            Condition::Drizzle => "#67e8f9",
            Condition::Thunderstorm => "#a855f7",
            Condition::Snow => "#e2e8f0",
            Condition::Mist => "#cbd5e1",
            Condition::Haze => "#fcd34d",
            Condition::Other => "#4ecdc4",
        }
    }

    /// Share of clear-sky UV that gets through this condition.
    #[must_use]
    pub fn uv_attenuation(self) -> f64 {
        match self {
            Condition::Clear => 1.0,
            Condition::Clouds | Condition::Other => 0.5,
            Condition::Rain => 0.2,
            Condition::Drizzle | Condition::Snow | Condition::Fog => 0.3,
            Condition::Thunderstorm => 0.1,
            Condition::Mist => 0.4,
            Condition::Haze => 0.6,
        }
    }
}
