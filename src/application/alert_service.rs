// Alert service - Use case for threshold alerts on a location
use crate::application::air_quality_service::AirQualityService;
use crate::domain::alert::{check_threshold, Alert, AlertSettings};
use crate::domain::observation::MockObservation;

#[derive(Debug, Clone)]
pub struct AlertEvaluation {
    pub observation: MockObservation,
    pub settings: AlertSettings,
    pub alert: Option<Alert>,
}

#[derive(Clone)]
pub struct AlertService {
    air_quality: AirQualityService,
    settings: AlertSettings,
}

impl AlertService {
    pub fn new(air_quality: AirQualityService, settings: AlertSettings) -> Self {
        Self {
            air_quality,
            settings,
        }
    }

    pub fn evaluate(&self, location: &str) -> AlertEvaluation {
        let observation = self.air_quality.observation(location);
        let alert = check_threshold(&observation, &self.settings);

        if let Some(alert) = &alert {
            tracing::info!(
                "{} alert for {} (aqi {} > {})",
                alert.level.as_str(),
                alert.location,
                alert.aqi,
                self.settings.aqi_threshold
            );
        }

        AlertEvaluation {
            observation,
            settings: self.settings,
            alert,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::environment::fakes::{ConstantRandom, FixedClock};
    use crate::domain::alert::AlertLevel;
    use std::sync::Arc;

    fn alert_service(threshold: i32) -> AlertService {
        let air_quality = AirQualityService::new(
            Arc::new(FixedClock::at(18, 0)),
            Arc::new(ConstantRandom(0.2)),
        );
        AlertService::new(
            air_quality,
            AlertSettings {
                aqi_threshold: threshold,
                ..AlertSettings::default()
            },
        )
    }

    #[test]
    fn test_city_above_threshold_alerts() {
        let evaluation = alert_service(150).evaluate("Lucknow");
        let alert = evaluation.alert.unwrap();
        assert_eq!(alert.level, AlertLevel::Warning);
        assert_eq!(alert.aqi, 170);
        assert_eq!(evaluation.settings.aqi_threshold, 150);
    }

    #[test]
    fn test_city_below_threshold_is_quiet() {
        let evaluation = alert_service(150).evaluate("Bangalore");
        assert_eq!(evaluation.observation.aqi, 80);
        assert!(evaluation.alert.is_none());
    }
}
