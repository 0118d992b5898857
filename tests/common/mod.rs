#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use serde_json::{Value, json};
use weather_outlook::{
    data::openweather::OpenWeatherClient,
    domain::weather::{Clouds, ConditionInfo, MainReadings, RawSample, Wind},
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const API_KEY: &str = "test-key";

pub fn utc_epoch(year: i32, month: u32, day: u32, hour: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid fixture time")
        .timestamp()
}

pub fn client_for(server: &MockServer) -> OpenWeatherClient {
    OpenWeatherClient::with_base_urls(API_KEY, server.uri(), format!("{}/geo", server.uri()))
        .expect("client")
}

pub fn sample(dt: i64, temp: f64) -> RawSample {
    RawSample {
        dt,
        main: MainReadings {
            temp,
            feels_like: temp,
            humidity: 70.0,
            pressure: 1010.0,
        },
        wind: Wind {
            speed: 4.0,
            deg: 90.0,
            gust: None,
        },
        weather: vec![ConditionInfo {
            main: "Clear".to_string(),
            description: format!("slot {dt}"),
            icon: "01d".to_string(),
        }],
        clouds: Clouds { all: 0.0 },
        rain: None,
        snow: None,
    }
}

pub fn current_weather_json() -> Value {
    json!({
        "coord": {"lon": 2.3488, "lat": 48.8534},
        "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
        "main": {"temp": 14.6, "feels_like": 14.1, "humidity": 88, "pressure": 1008},
        "visibility": 9000,
        "wind": {"speed": 4.1, "deg": 200},
        "rain": {"1h": 0.8},
        "clouds": {"all": 75},
        "dt": 1_780_000_000,
        "sys": {"country": "FR", "sunrise": 1_779_940_000, "sunset": 1_779_997_600},
        "timezone": 7200,
        "name": "Paris",
        "cod": 200
    })
}

pub fn forecast_json(start: i64, slots: usize) -> Value {
    let list: Vec<Value> = (0..slots)
        .map(|idx| {
            json!({
                "dt": start + (idx as i64) * 3 * 3600,
                "main": {"temp": 12.0 + (idx % 8) as f64, "feels_like": 11.0, "humidity": 80, "pressure": 1009},
                "weather": [{"main": "Clouds", "description": "overcast clouds", "icon": "04d"}],
                "clouds": {"all": 90},
                "wind": {"speed": 3.2, "deg": 180, "gust": 5.0}
            })
        })
        .collect();
    json!({"cod": "200", "cnt": slots, "list": list})
}

pub fn air_quality_json(aqi: u8) -> Value {
    json!({
        "coord": {"lon": 2.3488, "lat": 48.8534},
        "list": [{
            "main": {"aqi": aqi},
            "components": {"co": 201.9, "no2": 0.8, "o3": 68.7, "so2": 0.6, "pm2_5": 0.5, "pm10": 0.6},
            "dt": 1_780_000_000
        }]
    })
}

pub async fn mount_json(server: &MockServer, route: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// Current weather, forecast, air quality and UV all answering successfully.
pub async fn mount_happy_path(server: &MockServer) {
    mount_json(server, "/weather", 200, current_weather_json()).await;
    mount_json(
        server,
        "/forecast",
        200,
        forecast_json(utc_epoch(2026, 6, 1, 0), 40),
    )
    .await;
    mount_json(server, "/air_pollution", 200, air_quality_json(2)).await;
    mount_json(server, "/uvi", 200, json!({"lat": 48.85, "lon": 2.35, "value": 6.8})).await;
}
