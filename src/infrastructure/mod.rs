// Infrastructure layer - Storage, configuration and wire encoding
pub mod config;
pub mod http_response;
pub mod json_mapper;
pub mod memory_store;
