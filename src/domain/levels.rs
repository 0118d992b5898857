#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PrecipitationLevel {
    None,
    Light,
    Moderate,
    Heavy,
    Intense,
}

/// Classifies an hourly rate in millimetres.
#[must_use]
pub fn precipitation_level(mm_per_hour: f64) -> PrecipitationLevel {
    if mm_per_hour == 0.0 {
        PrecipitationLevel::None
    } else if mm_per_hour < 2.5 {
        PrecipitationLevel::Light
    } else if mm_per_hour < 7.5 {
        PrecipitationLevel::Moderate
    } else if mm_per_hour < 15.0 {
        PrecipitationLevel::Heavy
    } else {
        PrecipitationLevel::Intense
    }
}

impl PrecipitationLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PrecipitationLevel::None => "None",
            PrecipitationLevel::Light => "Light",
            PrecipitationLevel::Moderate => "Moderate",
            PrecipitationLevel::Heavy => "Heavy",
            PrecipitationLevel::Intense => "Intense",
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            PrecipitationLevel::None => "#94a3b8",
            PrecipitationLevel::Light => "#67e8f9",
            PrecipitationLevel::Moderate => "#4ecdc4",
            PrecipitationLevel::Heavy => "#3b82f6",
            PrecipitationLevel::Intense => "#6366f1",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AqiLevel {
    Good,
    Fair,
    Moderate,
    Poor,
    VeryPoor,
}

/// Maps the provider's 1-5 index; anything outside that range reads as `Good`.
#[must_use]
pub fn aqi_level(index: u8) -> AqiLevel {
    match index {
        2 => AqiLevel::Fair,
        3 => AqiLevel::Moderate,
        4 => AqiLevel::Poor,
        5 => AqiLevel::VeryPoor,
        _ => AqiLevel::Good,
    }
}

impl AqiLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AqiLevel::Good => "Good",
            AqiLevel::Fair => "Fair",
            AqiLevel::Moderate => "Moderate",
            AqiLevel::Poor => "Poor",
            AqiLevel::VeryPoor => "Very Poor",
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            AqiLevel::Good => "#4ade80",
            AqiLevel::Fair => "#facc15",
            AqiLevel::Moderate => "#fb923c",
            AqiLevel::Poor => "#f87171",
            AqiLevel::VeryPoor => "#dc2626",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            AqiLevel::Good => "Air quality is satisfactory",
            AqiLevel::Fair => "Acceptable for most people",
            AqiLevel::Moderate => "Sensitive groups may be affected",
            AqiLevel::Poor => "Health effects possible for all",
            AqiLevel::VeryPoor => "Serious health effects",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum UvLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

#[must_use]
pub fn uv_level(index: f64) -> UvLevel {
    UvLevel::from_index(index)
}

impl UvLevel {
    #[must_use]
    pub fn from_index(index: f64) -> Self {
        if index <= 2.0 {
            UvLevel::Low
        } else if index <= 5.0 {
            UvLevel::Moderate
        } else if index <= 7.0 {
            UvLevel::High
        } else if index <= 10.0 {
            UvLevel::VeryHigh
        } else {
            UvLevel::Extreme
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            UvLevel::Low => "Low",
            UvLevel::Moderate => "Moderate",
            UvLevel::High => "High",
            UvLevel::VeryHigh => "Very High",
            UvLevel::Extreme => "Extreme",
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            UvLevel::Low => "#4ade80",
            UvLevel::Moderate => "#facc15",
            UvLevel::High => "#fb923c",
            UvLevel::VeryHigh => "#f87171",
            UvLevel::Extreme => "#dc2626",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            UvLevel::Low => "No protection needed",
            UvLevel::Moderate => "Wear sunscreen",
            UvLevel::High => "Protection essential",
            UvLevel::VeryHigh => "Extra protection needed",
            UvLevel::Extreme => "Avoid sun exposure",
        }
    }
}
