use chrono::{TimeZone, Utc};

use crate::domain::weather::{
    Clouds, ConditionInfo, Coordinates, CurrentWeather, MainReadings, RawSample, SunCycle, Wind,
};

/// Epoch seconds for a UTC wall-clock time.
pub(crate) fn utc_epoch(year: i32, month: u32, day: u32, hour: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid fixture time")
        .timestamp()
}

pub(crate) fn condition(main: &str, description: &str, icon: &str) -> ConditionInfo {
    ConditionInfo {
        main: main.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    }
}

pub(crate) fn sample_at(dt: i64, temp: f64) -> RawSample {
    RawSample {
        dt,
        main: MainReadings {
            temp,
            feels_like: temp,
            humidity: 60.0,
            pressure: 1012.0,
        },
        wind: Wind {
            speed: 3.0,
            deg: 200.0,
            gust: None,
        },
        weather: vec![condition("Clouds", "scattered clouds", "03d")],
        clouds: Clouds { all: 40.0 },
        rain: None,
        snow: None,
    }
}

/// Eight 3-hour slots per day starting at midnight UTC.
pub(crate) fn three_hourly_days(year: i32, month: u32, day: u32, days: u32) -> Vec<RawSample> {
    let start = utc_epoch(year, month, day, 0);
    (0..days * 8)
        .map(|idx| sample_at(start + i64::from(idx) * 3 * 3600, 10.0 + f64::from(idx % 8)))
        .collect()
}

pub(crate) fn sample_current() -> CurrentWeather {
    CurrentWeather {
        name: "London".to_string(),
        coord: Coordinates {
            lat: 51.5085,
            lon: -0.1257,
        },
        main: MainReadings {
            temp: 18.0,
            feels_like: 17.4,
            humidity: 55.0,
            pressure: 1014.0,
        },
        wind: Wind {
            speed: 3.6,
            deg: 240.0,
            gust: None,
        },
        weather: vec![condition("Clouds", "broken clouds", "04d")],
        clouds: Clouds { all: 60.0 },
        visibility: Some(10_000.0),
        sys: SunCycle {
            sunrise: utc_epoch(2026, 6, 1, 4),
            sunset: utc_epoch(2026, 6, 1, 20),
            country: Some("GB".to_string()),
        },
        timezone: 3600,
        rain: None,
        snow: None,
    }
}
