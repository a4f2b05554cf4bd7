// Domain layer - Pure AQI rules and value types
pub mod alert;
pub mod aqi;
pub mod health_tips;
pub mod observation;
pub mod theme;
