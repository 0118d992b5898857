use chrono::DateTime;

const COMPASS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Rounds half-way values up (towards positive infinity), so `-2.5` becomes `-2`.
#[must_use]
pub fn round_temp(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// 16-point compass label for a meteorological wind bearing.
#[must_use]
pub fn wind_direction(degrees: f64) -> &'static str {
    let index = (degrees / 22.5).round() as i64;
    COMPASS[index.rem_euclid(16) as usize]
}

/// Daylight between sunrise and sunset as `"{H}h {M}m"`.
#[must_use]
pub fn day_length(sunrise: i64, sunset: i64) -> String {
    let diff = sunset - sunrise;
    let hours = diff.div_euclid(3600);
    let minutes = diff.rem_euclid(3600) / 60;
    format!("{hours}h {minutes}m")
}

/// 12-hour clock time at the location, e.g. `6:42 AM`.
#[must_use]
pub fn format_local_time(epoch_seconds: i64, tz_offset_seconds: i64) -> String {
    DateTime::from_timestamp(epoch_seconds + tz_offset_seconds, 0).map_or_else(
        || "--:--".to_string(),
        |shifted| shifted.format("%-I:%M %p").to_string(),
    )
}

#[must_use]
pub fn visibility_km(metres: f64) -> f64 {
    round_to_tenth(metres / 1000.0)
}
