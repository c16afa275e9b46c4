// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod fallback;
pub mod memory_store;
