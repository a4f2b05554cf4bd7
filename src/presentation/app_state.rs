// Application state for HTTP handlers
use crate::application::air_quality_service::AirQualityService;
use crate::application::alert_service::AlertService;
use crate::application::theme_service::ThemeService;

#[derive(Clone)]
pub struct AppState {
    pub air_quality_service: AirQualityService,
    pub alert_service: AlertService,
    pub theme_service: ThemeService,
}
