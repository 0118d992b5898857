use chrono::{DateTime, Timelike, Utc};

use crate::domain::{levels::UvLevel, weather::Condition};

/// Highest value on the UV scale the dashboard displays.
pub const UV_CEILING: u8 = 11;

/// Mid-day clear-sky UV the estimate scales from.
const BASE_UV: f64 = 6.0;

/// UV shown to the user. An estimate is never presented as a measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UvReading {
    Estimated(u8),
    Measured(f64),
}

impl UvReading {
    #[must_use]
    pub fn index(self) -> f64 {
        match self {
            UvReading::Estimated(value) => f64::from(value),
            UvReading::Measured(value) => value,
        }
    }

    #[must_use]
    pub fn is_estimate(self) -> bool {
        matches!(self, UvReading::Estimated(_))
    }

    #[must_use]
    pub fn level(self) -> UvLevel {
        UvLevel::from_index(self.index())
    }
}

/// Wall-clock hour at the location, fractional for half-hour zones.
#[must_use]
pub fn local_hour(now: DateTime<Utc>, tz_offset_seconds: i64) -> f64 {
    (f64::from(now.hour()) + tz_offset_seconds as f64 / 3600.0 + 24.0) % 24.0
}

/// Heuristic UV from time of day and sky condition.
#[must_use]
pub fn estimate_uv(condition: Condition, tz_offset_seconds: i64, now: DateTime<Utc>) -> u8 {
    estimate_uv_at_hour(condition, local_hour(now, tz_offset_seconds))
}

#[must_use]
pub fn estimate_uv_at_hour(condition: Condition, local_hour: f64) -> u8 {
    if !(6.0..=20.0).contains(&local_hour) {
        return 0;
    }

    let time_multiplier = if (10.0..=14.0).contains(&local_hour) {
        1.5
    } else if (8.0..=16.0).contains(&local_hour) {
        1.2
    } else {
        1.0
    };

    let raw = (BASE_UV * time_multiplier * condition.uv_attenuation() + 0.5).floor();
    (raw as u8).min(UV_CEILING)
}

/// Prefers the provider's measurement and falls back to the estimate.
#[must_use]
pub fn resolve_uv(
    measured: Option<f64>,
    condition: Condition,
    tz_offset_seconds: i64,
    now: DateTime<Utc>,
) -> UvReading {
    match measured {
        Some(value) if value.is_finite() && value >= 0.0 => UvReading::Measured(value),
        _ => UvReading::Estimated(estimate_uv(condition, tz_offset_seconds, now)),
    }
}
