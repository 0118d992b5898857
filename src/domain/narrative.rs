use crate::domain::{
    forecast::ForecastView,
    weather::{Condition, CurrentWeather, Units, round_temp, visibility_km, wind_direction},
};

/// One-paragraph plain-language outlook. Inapplicable sentences are left out.
#[must_use]
pub fn summarize(weather: &CurrentWeather, forecast: &ForecastView, units: Units) -> String {
    let temp = round_temp(weather.main.temp);
    let condition = weather.condition();
    let hot = f64::from(temp) > units.pick(30.0, 86.0);

    let parts: Vec<String> = [
        Some(current_sentence(weather, temp)),
        wind_sentence(weather, units),
        humidity_sentence(weather.main.humidity, hot),
        cloud_sentence(weather.clouds.all, condition),
        advisory_sentence(condition, weather.visibility),
        tomorrow_sentence(forecast),
        pressure_sentence(weather.main.pressure),
    ]
    .into_iter()
    .flatten()
    .collect();

    format!("{}.", parts.join(". "))
}

fn current_sentence(weather: &CurrentWeather, temp: i32) -> String {
    let feels_like = round_temp(weather.main.feels_like);
    let mut sentence = format!("Currently {} at {temp}°", weather.description());
    if (feels_like - temp).abs() >= 3 {
        let direction = if feels_like > temp { "warmer" } else { "cooler" };
        sentence.push_str(&format!(", though it feels {direction} at {feels_like}°"));
    }
    sentence
}

fn wind_sentence(weather: &CurrentWeather, units: Units) -> Option<String> {
    let speed = weather.wind.speed;
    if speed <= units.pick(5.0, 11.0) {
        return None;
    }
    let unit = units.speed_suffix();
    let gust = match weather.wind.gust {
        Some(gust) if gust != 0.0 => {
            format!(" with gusts up to {} {unit}", round_temp(gust))
        }
        _ => String::new(),
    };
    Some(format!(
        "Winds from the {} at {speed} {unit}{gust}",
        wind_direction(weather.wind.deg)
    ))
}

fn humidity_sentence(humidity: f64, hot: bool) -> Option<String> {
    if humidity <= 75.0 {
        return None;
    }
    if hot {
        return Some(
            "High humidity is making it feel oppressive; stay hydrated and seek shade".to_string(),
        );
    }
    Some(format!("Humidity is elevated at {humidity}%, expect a muggy feel"))
}

fn cloud_sentence(cloud_cover: f64, condition: Condition) -> Option<String> {
    if cloud_cover > 80.0 && condition != Condition::Rain {
        Some("Heavy cloud cover is blocking most sunlight".to_string())
    } else if cloud_cover < 10.0 && condition == Condition::Clear {
        Some("Skies are clear with excellent visibility".to_string())
    } else {
        None
    }
}

fn advisory_sentence(condition: Condition, visibility: Option<f64>) -> Option<String> {
    let sentence = match condition {
        Condition::Rain | Condition::Drizzle => {
            "Carry an umbrella and watch for wet roads".to_string()
        }
        Condition::Thunderstorm => {
            "Thunderstorms in the area; stay indoors if possible".to_string()
        }
        Condition::Snow => "Watch for slippery surfaces and reduced visibility".to_string(),
        Condition::Mist | Condition::Fog => match visibility {
            Some(metres) => format!(
                "Visibility reduced to {:.1} km; drive with caution",
                visibility_km(metres)
            ),
            None => "Visibility is reduced; drive with caution".to_string(),
        },
        _ => return None,
    };
    Some(sentence)
}

fn tomorrow_sentence(forecast: &ForecastView) -> Option<String> {
    let today = forecast.today()?;
    let tomorrow = forecast.tomorrow()?;
    let diff = round_temp(tomorrow.average_temp()? - today.average_temp()?);
    if diff.abs() < 3 {
        return None;
    }
    let change = if diff > 0 { "warmer" } else { "cooler" };
    Some(format!("Tomorrow expected {}° {change}", diff.abs()))
}

fn pressure_sentence(pressure: f64) -> Option<String> {
    if pressure < 1000.0 {
        Some("Low pressure may bring unsettled weather".to_string())
    } else if pressure > 1025.0 {
        Some("High pressure keeping conditions stable".to_string())
    } else {
        None
    }
}
