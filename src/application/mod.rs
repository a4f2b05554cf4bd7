// Application layer - Use cases and the ports they depend on
pub mod air_quality_service;
pub mod alert_service;
pub mod environment;
pub mod mock_data;
pub mod preference_store;
pub mod theme_service;
