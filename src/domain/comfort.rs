use crate::domain::weather::{Condition, CurrentWeather, Units, round_temp};

pub const MAX_SUGGESTIONS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComfortLabel {
    Pleasant,
    Hot,
    Uncomfortable,
    Cold,
    Harsh,
    Muggy,
    Brisk,
    Damp,
}

impl ComfortLabel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ComfortLabel::Pleasant => "Pleasant",
            ComfortLabel::Hot => "Hot",
            ComfortLabel::Uncomfortable => "Uncomfortable",
            ComfortLabel::Cold => "Cold",
            ComfortLabel::Harsh => "Harsh",
            ComfortLabel::Muggy => "Muggy",
            ComfortLabel::Brisk => "Brisk",
            ComfortLabel::Damp => "Damp",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Warm,
    Cool,
    Glow,
    Electric,
}

impl ColorToken {
    #[must_use]
    pub fn css_var(self) -> &'static str {
        match self {
            ColorToken::Warm => "var(--accent-warm)",
            ColorToken::Cool => "var(--accent-cool)",
            ColorToken::Glow => "var(--accent-glow)",
            ColorToken::Electric => "var(--accent-electric)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComfortAssessment {
    pub label: ComfortLabel,
    /// 1 (worst) to 5 (best).
    pub level: u8,
    pub color: ColorToken,
}

impl ComfortAssessment {
    const fn new(label: ComfortLabel, level: u8, color: ColorToken) -> Self {
        Self {
            label,
            level,
            color,
        }
    }
}

/// Rates how the current conditions feel. The first matching rule wins.
#[must_use]
pub fn assess_comfort(
    temp: f64,
    humidity: f64,
    wind_speed: f64,
    condition: Condition,
    units: Units,
) -> ComfortAssessment {
    let temp = f64::from(round_temp(temp));
    let cold = temp < units.pick(5.0, 41.0);
    let cool = temp < units.pick(15.0, 59.0);
    let warm = temp > units.pick(25.0, 77.0);
    let hot = temp > units.pick(35.0, 95.0);
    let humid = humidity > 70.0;
    let windy = wind_speed > units.pick(6.0, 13.0);

    if hot && humid {
        ComfortAssessment::new(ComfortLabel::Uncomfortable, 1, ColorToken::Warm)
    } else if hot {
        ComfortAssessment::new(ComfortLabel::Hot, 2, ColorToken::Warm)
    } else if cold && windy {
        ComfortAssessment::new(ComfortLabel::Harsh, 1, ColorToken::Cool)
    } else if cold {
        ComfortAssessment::new(ComfortLabel::Cold, 2, ColorToken::Cool)
    } else if warm && humid {
        ComfortAssessment::new(ComfortLabel::Muggy, 3, ColorToken::Glow)
    } else if cool && windy {
        ComfortAssessment::new(ComfortLabel::Brisk, 3, ColorToken::Cool)
    } else if condition.is_wet() {
        ComfortAssessment::new(ComfortLabel::Damp, 3, ColorToken::Electric)
    } else {
        ComfortAssessment::new(ComfortLabel::Pleasant, 5, ColorToken::Cool)
    }
}

#[must_use]
pub fn assess_current(weather: &CurrentWeather, units: Units) -> ComfortAssessment {
    assess_comfort(
        weather.main.temp,
        weather.main.humidity,
        weather.wind.speed,
        weather.condition(),
        units,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub icon: &'static str,
    pub text: &'static str,
}

const fn tip(icon: &'static str, text: &'static str) -> Suggestion {
    Suggestion { icon, text }
}

/// Clothing and activity tips, temperature first, capped at four.
#[must_use]
pub fn suggest(weather: &CurrentWeather, units: Units) -> Vec<Suggestion> {
    let temp = weather.main.temp;
    let condition = weather
        .weather
        .first()
        .map_or(Condition::Other, |info| Condition::from_main(&info.main));
    let cold = temp < units.pick(10.0, 50.0);
    let hot = temp > units.pick(25.0, 77.0);
    let windy = weather.wind.speed > units.pick(5.0, 11.0);

    let mut tips = Vec::with_capacity(6);

    if cold {
        tips.push(tip("🧥", "Wear a warm jacket"));
        if temp < units.pick(0.0, 32.0) {
            tips.push(tip("🧤", "Gloves recommended"));
        }
    } else if hot {
        tips.push(tip("👕", "Light, breathable clothing"));
        tips.push(tip("💧", "Stay hydrated"));
    } else {
        tips.push(tip("🧥", "Light layers recommended"));
    }

    match condition {
        Condition::Rain | Condition::Drizzle => {
            tips.push(tip("☔", "Bring an umbrella"));
            tips.push(tip("👢", "Waterproof shoes"));
        }
        Condition::Snow => {
            tips.push(tip("🥾", "Warm, waterproof boots"));
            tips.push(tip("🧣", "Scarf and hat"));
        }
        Condition::Clear if hot => {
            tips.push(tip("🕶️", "Sunglasses needed"));
            tips.push(tip("🧴", "Apply sunscreen"));
        }
        _ => {}
    }

    if windy {
        tips.push(tip("🌬️", "Windbreaker recommended"));
    }

    if weather.main.humidity > 80.0 && hot {
        tips.push(tip("😓", "High humidity - avoid heavy activity"));
    }

    tips.truncate(MAX_SUGGESTIONS);
    tips
}
