// Presentation layer - HTTP handlers and JSON responses
pub mod app_state;
pub mod handlers;
pub mod responses;
