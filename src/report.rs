use crate::domain::{
    dashboard::Dashboard,
    levels::PrecipitationLevel,
    uv::UvReading,
    weather::{CityMatch, PrecipitationKind},
};

/// Renders the dashboard as plain text, one section per block.
#[must_use]
pub fn render(dashboard: &Dashboard) -> String {
    let temp = dashboard.units.temperature_suffix();
    let speed = dashboard.units.speed_suffix();
    let mut lines = Vec::new();

    lines.push(dashboard.location.clone());
    lines.push(format!(
        "{}, {}{temp} (feels like {}{temp})",
        dashboard.description, dashboard.temperature, dashboard.feels_like
    ));
    lines.push(format!(
        "Comfort: {} ({}/5)",
        dashboard.comfort.label.as_str(),
        dashboard.comfort.level
    ));
    lines.push(String::new());

    let gust = dashboard
        .wind_gust
        .map(|gust| format!(", gusts {gust} {speed}"))
        .unwrap_or_default();
    lines.push(format!(
        "Wind:          {} {speed} {}{gust}",
        dashboard.wind_speed, dashboard.wind_direction
    ));
    lines.push(format!("Humidity:      {}%", dashboard.humidity));
    lines.push(format!("Pressure:      {} hPa", dashboard.pressure));
    lines.push(match dashboard.visibility_km {
        Some(km) => format!("Visibility:    {km:.1} km"),
        None => "Visibility:    --".to_string(),
    });
    lines.push(format!("Precipitation: {}", precipitation_line(dashboard)));
    lines.push(format!("UV index:      {}", uv_line(dashboard.uv)));
    lines.push(match &dashboard.air_quality {
        Some(air) => format!(
            "Air quality:   {} ({}/5): {}",
            air.level.label(),
            air.reading.aqi,
            air.level.description()
        ),
        None => "Air quality:   unavailable".to_string(),
    });
    lines.push(format!(
        "Sun:           {} - {} ({})",
        dashboard.sunrise, dashboard.sunset, dashboard.day_length
    ));
    lines.push(String::new());
    lines.push(dashboard.summary.clone());

    if !dashboard.suggestions.is_empty() {
        lines.push(String::new());
        lines.push("Suggestions:".to_string());
        lines.extend(
            dashboard
                .suggestions
                .iter()
                .map(|tip| format!("  - {}", tip.text)),
        );
    }

    if !dashboard.forecast.hourly.is_empty() {
        lines.push(String::new());
        lines.push("Next hours:".to_string());
        lines.extend(dashboard.forecast.hourly.iter().map(|hour| {
            format!(
                "  {:>5}  {}{temp}  {}",
                hour.time_label, hour.temperature, hour.description
            )
        }));
    }

    if !dashboard.forecast.daily.is_empty() {
        lines.push(String::new());
        lines.push("Outlook:".to_string());
        lines.extend(dashboard.forecast.daily.iter().map(|day| {
            let extreme = |value: Option<i32>| {
                value.map_or_else(|| "--".to_string(), |v| format!("{v}{temp}"))
            };
            format!(
                "  {:<11} {} / {}  {}",
                day.date_label,
                extreme(day.temp_min),
                extreme(day.temp_max),
                day.description
            )
        }));
    }

    lines.join("\n")
}

fn precipitation_line(dashboard: &Dashboard) -> String {
    let precipitation = dashboard.precipitation;
    if precipitation.level == PrecipitationLevel::None {
        return precipitation.level.label().to_string();
    }
    let kind = match precipitation.kind {
        PrecipitationKind::Rain => "rain",
        PrecipitationKind::Snow => "snow",
    };
    format!(
        "{}, {:.1} mm/h {kind}",
        precipitation.level.label(),
        precipitation.rate
    )
}

fn uv_line(uv: UvReading) -> String {
    match uv {
        UvReading::Estimated(index) => format!("{index} {} (estimated)", uv.level().label()),
        UvReading::Measured(index) => format!("{index:.1} {}", uv.level().label()),
    }
}

/// One line per search match.
#[must_use]
pub fn render_matches(matches: &[CityMatch]) -> String {
    if matches.is_empty() {
        return "No matching cities".to_string();
    }
    matches
        .iter()
        .map(|city| format!("{} ({:.4}, {:.4})", city.display_name(), city.lat, city.lon))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::{
        domain::{
            dashboard::WeatherBundle,
            weather::{AirQualityReading, Precipitation, Units},
        },
        test_support::{condition, sample_current, three_hourly_days},
    };

    fn dashboard_for(bundle: &WeatherBundle) -> Dashboard {
        let now = Utc
            .with_ymd_and_hms(2026, 6, 1, 12, 0, 0)
            .single()
            .expect("valid time");
        Dashboard::build_in(bundle, Units::Metric, now, &Utc)
    }

    #[test]
    fn renders_full_report() {
        let bundle = WeatherBundle {
            current: sample_current(),
            forecast: three_hourly_days(2026, 6, 1, 2),
            air_quality: None,
            measured_uv: None,
        };

        insta::assert_snapshot!(render(&dashboard_for(&bundle)), @r"
        London, GB
        broken clouds, 18°C (feels like 17°C)
        Comfort: Pleasant (5/5)

        Wind:          3.6 m/s WSW
        Humidity:      55%
        Pressure:      1014 hPa
        Visibility:    10.0 km
        Precipitation: None
        UV index:      5 Moderate (estimated)
        Air quality:   unavailable
        Sun:           5:00 AM - 9:00 PM (16h 0m)

        Currently broken clouds at 18°.

        Suggestions:
          - Light layers recommended

        Next hours:
          12 AM  10°C  scattered clouds
           3 AM  11°C  scattered clouds
           6 AM  12°C  scattered clouds
           9 AM  13°C  scattered clouds
          12 PM  14°C  scattered clouds
           3 PM  15°C  scattered clouds
           6 PM  16°C  scattered clouds
           9 PM  17°C  scattered clouds

        Outlook:
          Mon, Jun 1  10°C / 17°C  scattered clouds
          Tue, Jun 2  10°C / 17°C  scattered clouds
        ");
    }

    #[test]
    fn wet_windy_report_lists_measured_extras() {
        let mut current = sample_current();
        current.weather = vec![condition("Rain", "moderate rain", "10d")];
        current.rain = Some(Precipitation {
            one_hour: Some(3.2),
            three_hours: None,
        });
        current.wind.gust = Some(9.6);
        current.visibility = None;
        let bundle = WeatherBundle {
            current,
            forecast: Vec::new(),
            air_quality: Some(AirQualityReading {
                aqi: 2,
                components: Default::default(),
            }),
            measured_uv: Some(1.24),
        };

        let report = render(&dashboard_for(&bundle));
        assert!(report.contains("Wind:          3.6 m/s WSW, gusts 10 m/s"));
        assert!(report.contains("Visibility:    --"));
        assert!(report.contains("Precipitation: Moderate, 3.2 mm/h rain"));
        assert!(report.contains("UV index:      1.2 Low"));
        assert!(report.contains("Air quality:   Fair (2/5): Acceptable for most people"));
        assert!(report.contains("  - Bring an umbrella"));
        assert!(!report.contains("Next hours:"));
        assert!(!report.contains("Outlook:"));
    }

    #[test]
    fn matches_render_with_region_and_coordinates() {
        let matches = vec![CityMatch {
            name: "Springfield".to_string(),
            country: "US".to_string(),
            state: Some("Illinois".to_string()),
            lat: 39.799_017,
            lon: -89.643_957,
        }];
        assert_eq!(
            render_matches(&matches),
            "Springfield, Illinois, US (39.7990, -89.6440)"
        );
        assert_eq!(render_matches(&[]), "No matching cities");
    }
}
