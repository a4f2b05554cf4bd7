// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod environment;
pub mod file_store;
pub mod http_response;
pub mod memory_store;
