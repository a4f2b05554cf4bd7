// Air quality service - Use cases for readings, forecasts and advice
use crate::application::environment::{Clock, RandomSource};
use crate::application::mock_data::{generate_forecast, generate_observation, search_cities};
use crate::domain::aqi::{classify, AqiCategoryInfo};
use crate::domain::health_tips::{generate_tips, HealthTip};
use crate::domain::observation::{summarize_forecast, ForecastPoint, ForecastSummary, MockObservation};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Forecast {
    pub points: Vec<ForecastPoint>,
    pub summary: Option<ForecastSummary>,
}

#[derive(Clone)]
pub struct AirQualityService {
    clock: Arc<dyn Clock>,
    random: Arc<dyn RandomSource>,
}

impl AirQualityService {
    pub fn new(clock: Arc<dyn Clock>, random: Arc<dyn RandomSource>) -> Self {
        Self { clock, random }
    }

    pub fn classify(&self, aqi: i32) -> AqiCategoryInfo {
        classify(aqi)
    }

    pub fn tips(&self, aqi: i32) -> Vec<HealthTip> {
        generate_tips(aqi)
    }

    pub fn observation(&self, location: &str) -> MockObservation {
        let observation = generate_observation(location, self.clock.as_ref(), self.random.as_ref());
        tracing::debug!(
            "Generated observation for {}: aqi={} pm25={}",
            observation.location,
            observation.aqi,
            observation.pollutants.pm25
        );
        observation
    }

    pub fn forecast(&self) -> Forecast {
        let points = generate_forecast(self.clock.as_ref(), self.random.as_ref());
        let summary = summarize_forecast(&points);
        tracing::debug!("Generated {} forecast points", points.len());
        Forecast { points, summary }
    }

    pub fn search_cities(&self, query: &str) -> Vec<&'static str> {
        search_cities(query)
    }
}
