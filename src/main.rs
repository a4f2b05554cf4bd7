// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use axum::{routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::air_quality_service::AirQualityService;
use crate::application::alert_service::AlertService;
use crate::application::environment::RandomSource;
use crate::application::preference_store::PreferenceStore;
use crate::application::theme_service::ThemeService;
use crate::domain::alert::AlertSettings;
use crate::domain::theme::Theme;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::environment::{SeededRandom, SystemClock, ThreadRandom};
use crate::infrastructure::file_store::FilePreferenceStore;
use crate::infrastructure::memory_store::MemoryPreferenceStore;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    classify_aqi, forecast, get_theme, health_check, health_tips, location_alert, observation,
    put_theme, search_cities,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Preference storage (infrastructure layer)
    let store: Arc<dyn PreferenceStore> = match &config.preferences.path {
        Some(path) => {
            let store = FilePreferenceStore::new(path);
            tracing::info!("Storing preferences in {}", store.path().display());
            Arc::new(store)
        }
        None => {
            tracing::info!("No preference file configured, keeping preferences in memory");
            Arc::new(MemoryPreferenceStore::default())
        }
    };

    let random: Arc<dyn RandomSource> = match config.mock.seed {
        Some(seed) => {
            tracing::info!("Using seeded mock data (seed {})", seed);
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(ThreadRandom),
    };

    let default_theme: Theme = config.preferences.default_theme.parse()?;

    // Create services (application layer)
    let air_quality_service = AirQualityService::new(Arc::new(SystemClock), random);
    let alert_service = AlertService::new(
        air_quality_service.clone(),
        AlertSettings::from(&config.alerts),
    );
    let theme_service = ThemeService::new(
        store,
        config.preferences.storage_key.clone(),
        default_theme,
    );

    // Create application state
    let state = Arc::new(AppState {
        air_quality_service,
        alert_service,
        theme_service,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/aqi/:value", get(classify_aqi))
        .route("/tips", get(health_tips))
        .route("/observations/:location", get(observation))
        .route("/forecast", get(forecast))
        .route("/cities", get(search_cities))
        .route("/alerts/:location", get(location_alert))
        .route("/theme", get(get_theme).put(put_theme))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server.socket_addr()?;
    tracing::info!("Starting aqi-advisor service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
