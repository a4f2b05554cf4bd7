// JSON response shapes and their mapping from domain values
use crate::application::air_quality_service::Forecast;
use crate::application::alert_service::AlertEvaluation;
use crate::domain::alert::{Alert, AlertSettings};
use crate::domain::aqi::{
    category_label, classify, color_class, exposure_percent, gauge_rotation, health_advice,
    AqiCategoryInfo,
};
use crate::domain::health_tips::HealthTip;
use crate::domain::observation::{ForecastPoint, MockObservation, Pollutants};
use crate::domain::theme::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub aqi: i32,
    pub category: &'static str,
    pub severity_tier: u8,
    pub description: &'static str,
    pub health_advice: &'static str,
    pub color_class: &'static str,
    pub bg_color_class: &'static str,
    pub exposure_percent: i32,
    pub gauge_rotation: f64,
}

impl CategoryResponse {
    pub fn new(aqi: i32, info: &AqiCategoryInfo) -> Self {
        Self {
            aqi,
            category: info.category.label(),
            severity_tier: info.severity_tier,
            description: info.description,
            health_advice: info.health_advice,
            color_class: info.color_class,
            bg_color_class: info.bg_color_class,
            exposure_percent: exposure_percent(aqi),
            gauge_rotation: gauge_rotation(aqi),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TipResponse {
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub priority: &'static str,
}

impl From<&HealthTip> for TipResponse {
    fn from(tip: &HealthTip) -> Self {
        Self {
            category: tip.category.as_str(),
            title: tip.title,
            description: tip.description,
            priority: tip.priority.as_str(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PollutantsResponse {
    pub pm25: i32,
    pub pm10: i32,
    pub o3: i32,
    pub no2: i32,
    pub so2: i32,
    pub co: i32,
}

impl From<&Pollutants> for PollutantsResponse {
    fn from(p: &Pollutants) -> Self {
        Self {
            pm25: p.pm25,
            pm10: p.pm10,
            o3: p.o3,
            no2: p.no2,
            so2: p.so2,
            co: p.co,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationResponse {
    pub location: String,
    pub aqi: i32,
    pub last_updated: String,
    pub temperature: i32,
    pub humidity: i32,
    pub wind_speed: i32,
    pub visibility: i32,
    pub pollutants: PollutantsResponse,
    pub classification: CategoryResponse,
}

impl From<&MockObservation> for ObservationResponse {
    fn from(o: &MockObservation) -> Self {
        Self {
            location: o.location.clone(),
            aqi: o.aqi,
            last_updated: o.last_updated.clone(),
            temperature: o.temperature,
            humidity: o.humidity,
            wind_speed: o.wind_speed,
            visibility: o.visibility,
            pollutants: PollutantsResponse::from(&o.pollutants),
            classification: CategoryResponse::new(o.aqi, &classify(o.aqi)),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPointResponse {
    pub time: String,
    pub aqi: i32,
    pub category: &'static str,
    pub color_class: &'static str,
}

impl From<&ForecastPoint> for ForecastPointResponse {
    fn from(point: &ForecastPoint) -> Self {
        Self {
            time: point.time.clone(),
            aqi: point.aqi,
            category: category_label(point.aqi),
            color_class: color_class(point.aqi),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ForecastSummaryResponse {
    pub peak: ForecastPointResponse,
    pub best: ForecastPointResponse,
}

#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub points: Vec<ForecastPointResponse>,
    pub summary: Option<ForecastSummaryResponse>,
}

impl From<&Forecast> for ForecastResponse {
    fn from(forecast: &Forecast) -> Self {
        Self {
            points: forecast.points.iter().map(ForecastPointResponse::from).collect(),
            summary: forecast.summary.as_ref().map(|s| ForecastSummaryResponse {
                peak: ForecastPointResponse::from(&s.peak),
                best: ForecastPointResponse::from(&s.best),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSettingsResponse {
    pub enabled: bool,
    pub aqi_threshold: i32,
    pub emergency_alerts: bool,
}

impl From<&AlertSettings> for AlertSettingsResponse {
    fn from(settings: &AlertSettings) -> Self {
        Self {
            enabled: settings.enabled,
            aqi_threshold: settings.aqi_threshold,
            emergency_alerts: settings.emergency_alerts,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AlertResponse {
    pub level: &'static str,
    pub title: String,
    pub message: String,
    pub advice: &'static str,
    pub location: String,
    pub aqi: i32,
}

impl From<&Alert> for AlertResponse {
    fn from(alert: &Alert) -> Self {
        Self {
            level: alert.level.as_str(),
            title: alert.title.clone(),
            message: alert.message.clone(),
            advice: health_advice(alert.aqi),
            location: alert.location.clone(),
            aqi: alert.aqi,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AlertEvaluationResponse {
    pub observation: ObservationResponse,
    pub settings: AlertSettingsResponse,
    pub alert: Option<AlertResponse>,
}

impl From<&AlertEvaluation> for AlertEvaluationResponse {
    fn from(evaluation: &AlertEvaluation) -> Self {
        Self {
            observation: ObservationResponse::from(&evaluation.observation),
            settings: AlertSettingsResponse::from(&evaluation.settings),
            alert: evaluation.alert.as_ref().map(AlertResponse::from),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeBody {
    pub theme: String,
}

impl From<Theme> for ThemeBody {
    fn from(theme: Theme) -> Self {
        Self {
            theme: theme.as_str().to_string(),
        }
    }
}
