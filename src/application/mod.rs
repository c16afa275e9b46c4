// Application layer - Use cases and capability boundaries
pub mod accessor;
pub mod aggregator;
pub mod capabilities;
pub mod chart_registry;
pub mod dashboard_service;
pub mod renderers;
