// AQI band classification
//
// Classification, tip selection and display styling all look bands up
// through `BANDS`.

/// Upper bound of the AQI scale used for gauge and exposure rendering.
pub const AQI_SCALE_MAX: i32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }
}

/// One row of the band table. `upper_bound` is inclusive; `None` marks the
/// unbounded top band.
#[derive(Debug, Clone, Copy)]
pub struct AqiBand {
    pub upper_bound: Option<i32>,
    pub category: AqiCategory,
    pub severity_tier: u8,
    pub description: &'static str,
    pub health_advice: &'static str,
    pub color_class: &'static str,
    pub bg_color_class: &'static str,
}

impl AqiBand {
    fn contains(&self, aqi: i32) -> bool {
        self.upper_bound.is_none_or(|bound| aqi <= bound)
    }
}

/// Ascending, contiguous bands. The last entry must stay unbounded so the
/// lookup is total.
pub static BANDS: [AqiBand; 6] = [
    AqiBand {
        upper_bound: Some(50),
        category: AqiCategory::Good,
        severity_tier: 0,
        description: "Air quality is excellent with minimal or no risk.",
        health_advice: "Perfect time to enjoy outdoor activities!",
        color_class: "aqi-good",
        bg_color_class: "aqi-good-bg",
    },
    AqiBand {
        upper_bound: Some(100),
        category: AqiCategory::Moderate,
        severity_tier: 1,
        description: "Acceptable air quality, though sensitive individuals may experience slight discomfort.",
        health_advice: "Sensitive groups should limit intense exertion outdoors.",
        color_class: "aqi-moderate",
        bg_color_class: "aqi-moderate-bg",
    },
    AqiBand {
        upper_bound: Some(150),
        category: AqiCategory::UnhealthyForSensitiveGroups,
        severity_tier: 2,
        description: "Sensitive individuals might experience health effects. General public is less likely affected.",
        health_advice: "Avoid long outdoor exposure if you're in a sensitive group.",
        color_class: "aqi-unhealthy-sensitive",
        bg_color_class: "aqi-unhealthy-sensitive-bg",
    },
    AqiBand {
        upper_bound: Some(200),
        category: AqiCategory::Unhealthy,
        severity_tier: 3,
        description: "Health effects may be noticeable for general population; serious effects for sensitive groups.",
        health_advice: "Try to stay indoors; reduce exertion if outside.",
        color_class: "aqi-unhealthy",
        bg_color_class: "aqi-unhealthy-bg",
    },
    AqiBand {
        upper_bound: Some(300),
        category: AqiCategory::VeryUnhealthy,
        severity_tier: 4,
        description: "Air quality is hazardous. Serious health risks for everyone.",
        health_advice: "Avoid going outside. Use air purifiers indoors.",
        color_class: "aqi-very-unhealthy",
        bg_color_class: "aqi-very-unhealthy-bg",
    },
    AqiBand {
        upper_bound: None,
        category: AqiCategory::Hazardous,
        severity_tier: 5,
        description: "Emergency conditions. Everyone is at a significant health risk.",
        health_advice: "Stay indoors. Follow emergency health warnings.",
        color_class: "aqi-hazardous",
        bg_color_class: "aqi-hazardous-bg",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AqiCategoryInfo {
    pub category: AqiCategory,
    pub severity_tier: u8,
    pub description: &'static str,
    pub health_advice: &'static str,
    pub color_class: &'static str,
    pub bg_color_class: &'static str,
}

impl From<&AqiBand> for AqiCategoryInfo {
    fn from(band: &AqiBand) -> Self {
        Self {
            category: band.category,
            severity_tier: band.severity_tier,
            description: band.description,
            health_advice: band.health_advice,
            color_class: band.color_class,
            bg_color_class: band.bg_color_class,
        }
    }
}

/// Band containing `aqi`. Negative readings fall into the first band and
/// anything above the last bound into the top band.
pub fn band_for(aqi: i32) -> &'static AqiBand {
    BANDS
        .iter()
        .find(|band| band.contains(aqi))
        .unwrap_or(&BANDS[BANDS.len() - 1])
}

/// Classify an AQI reading. Total over `i32`.
pub fn classify(aqi: i32) -> AqiCategoryInfo {
    AqiCategoryInfo::from(band_for(aqi))
}

pub fn category_label(aqi: i32) -> &'static str {
    classify(aqi).category.label()
}

pub fn health_advice(aqi: i32) -> &'static str {
    classify(aqi).health_advice
}

pub fn color_class(aqi: i32) -> &'static str {
    classify(aqi).color_class
}

/// Share of the 0-500 scale as a whole percentage. Not clamped.
pub fn exposure_percent(aqi: i32) -> i32 {
    (f64::from(aqi) / f64::from(AQI_SCALE_MAX) * 100.0).round() as i32
}

/// Needle angle in degrees for a 240° gauge centred on zero.
pub fn gauge_rotation(aqi: i32) -> f64 {
    let clamped = aqi.clamp(0, AQI_SCALE_MAX);
    f64::from(clamped) / f64::from(AQI_SCALE_MAX) * 240.0 - 120.0
}
