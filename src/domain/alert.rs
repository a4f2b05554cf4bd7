// Threshold alerts for AQI readings
use super::aqi::{classify, AqiCategory};
use super::observation::MockObservation;

pub const DEFAULT_AQI_THRESHOLD: i32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertSettings {
    pub enabled: bool,
    pub aqi_threshold: i32,
    /// When off, hazardous readings alert as ordinary warnings.
    pub emergency_alerts: bool,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            aqi_threshold: DEFAULT_AQI_THRESHOLD,
            emergency_alerts: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AlertLevel {
    Warning,
    Emergency,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Warning => "warning",
            AlertLevel::Emergency => "emergency",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub level: AlertLevel,
    pub title: String,
    pub message: String,
    pub location: String,
    pub aqi: i32,
}

/// Returns an alert when the observation is above the user's threshold.
///
/// The threshold is exclusive: a reading equal to it does not alert.
pub fn check_threshold(observation: &MockObservation, settings: &AlertSettings) -> Option<Alert> {
    if !settings.enabled || observation.aqi <= settings.aqi_threshold {
        return None;
    }

    let category = classify(observation.aqi).category;
    let (level, title) = if settings.emergency_alerts && category == AqiCategory::Hazardous {
        (AlertLevel::Emergency, "Emergency Alert")
    } else {
        (AlertLevel::Warning, "High AQI Alert")
    };

    Some(Alert {
        level,
        title: title.to_string(),
        message: format!(
            "Air quality in {} has reached {} levels (AQI: {})",
            observation.location,
            category.label().to_lowercase(),
            observation.aqi
        ),
        location: observation.location.clone(),
        aqi: observation.aqi,
    })
}
