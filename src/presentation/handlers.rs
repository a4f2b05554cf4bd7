// HTTP request handlers
use crate::domain::theme::{Theme, ThemeParseError};
use crate::infrastructure::http_response::ApiError;
use crate::presentation::app_state::AppState;
use crate::presentation::responses::{
    AlertEvaluationResponse, CategoryResponse, ForecastResponse, ObservationResponse, ThemeBody,
    TipResponse,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct TipsQuery {
    pub aqi: i32,
}

#[derive(Deserialize)]
pub struct CitySearchQuery {
    pub q: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Category, advice and display hints for a single reading
pub async fn classify_aqi(
    path: Result<Path<i32>, PathRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let Path(aqi) = path?;
    let info = state.air_quality_service.classify(aqi);
    Ok(Json(CategoryResponse::new(aqi, &info)))
}

pub async fn health_tips(
    query: Result<Query<TipsQuery>, QueryRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TipResponse>>, ApiError> {
    let Query(query) = query?;
    let tips = state.air_quality_service.tips(query.aqi);
    Ok(Json(tips.iter().map(TipResponse::from).collect()))
}

/// Mock reading for a city (or any free-form location name)
pub async fn observation(
    Path(location): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<ObservationResponse> {
    let observation = state.air_quality_service.observation(&location);
    Json(ObservationResponse::from(&observation))
}

pub async fn forecast(State(state): State<Arc<AppState>>) -> Json<ForecastResponse> {
    let forecast = state.air_quality_service.forecast();
    Json(ForecastResponse::from(&forecast))
}

pub async fn search_cities(
    Query(query): Query<CitySearchQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<Vec<&'static str>> {
    let q = query.q.unwrap_or_default();
    Json(state.air_quality_service.search_cities(&q))
}

/// Evaluate the configured AQI threshold against a fresh reading
pub async fn location_alert(
    Path(location): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<AlertEvaluationResponse> {
    let evaluation = state.alert_service.evaluate(&location);
    Json(AlertEvaluationResponse::from(&evaluation))
}

pub async fn get_theme(State(state): State<Arc<AppState>>) -> Result<Json<ThemeBody>, ApiError> {
    let theme = state.theme_service.current().await?;
    Ok(Json(ThemeBody::from(theme)))
}

pub async fn put_theme(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ThemeBody>, JsonRejection>,
) -> Result<Json<ThemeBody>, ApiError> {
    let Json(body) = body?;
    let theme: Theme = body
        .theme
        .parse()
        .map_err(|e: ThemeParseError| ApiError::BadRequest(e.to_string()))?;

    state.theme_service.set(theme).await?;
    Ok(Json(ThemeBody::from(theme)))
}
