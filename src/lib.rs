// Crate root - layer wiring and the public dashboard surface
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for convenience
pub use crate::application::capabilities::{
    ChartConfig, ChartEngine, ChartHandle, ErrorReport, ErrorReporter, NoticeLevel, Notifier,
    Severity, StateStore,
};
pub use crate::application::chart_registry::{ChartRegistry, ChartSlot};
pub use crate::application::dashboard_service::{
    DashboardError, DashboardService, UpdateSummary, ValidationResult,
};
pub use crate::application::renderers::{RenderOutcome, SkipReason};
pub use crate::domain::series::{ChartKind, Series};
pub use crate::domain::stats::{ClientStats, LeadStats, StatsSummary, TaskStats};
pub use crate::infrastructure::config::{ChartStyleConfig, DashboardConfig, load_dashboard_config};
pub use crate::infrastructure::fallback::{TracingNotifier, TracingReporter, init_diagnostics};
pub use crate::infrastructure::memory_store::InMemoryStateStore;
