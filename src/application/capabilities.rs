// Capability traits for the external collaborators
use crate::domain::series::ChartKind;
use serde::Serialize;
use serde_json::Value;

/// Opaque live chart instance owned by the charting engine.
pub trait ChartHandle: Send {
    /// Release the underlying chart resources.
    fn destroy(&mut self) -> anyhow::Result<()>;

    /// Render the chart to a base64-encoded PNG. Engines may return the
    /// raw payload or a `data:` URL.
    fn to_base64_image(&self) -> anyhow::Result<String>;
}

/// Charting engine capability. Availability is runtime-checked before
/// every use; the dashboard keeps working (chartless) without it.
pub trait ChartEngine: Send + Sync {
    /// Whether the named mount point is currently addressable.
    fn has_mount(&self, mount_id: &str) -> bool;

    /// Construct a chart on the given mount point.
    fn construct(&self, mount_id: &str, config: &ChartConfig)
    -> anyhow::Result<Box<dyn ChartHandle>>;
}

/// Read-only provider of the externally-owned application state.
pub trait StateStore: Send + Sync {
    /// Current snapshot, or `None` when the store is not initialized.
    fn snapshot(&self) -> Option<Value>;
}

/// Configuration payload handed to the charting engine, serialized in
/// the camelCase shape a JS charting bridge consumes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub background_colors: Vec<String>,
    pub legend_position: String,
    pub responsive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

/// Structured report delivered alongside an error to the reporting sink.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub context: String,
    pub user_message: Option<String>,
    pub severity: Severity,
    /// Silent reports carry no user-facing interruption; the sink logs
    /// them and moves on.
    pub silent: bool,
    pub metadata: Option<Value>,
}

impl ErrorReport {
    pub fn new(context: impl Into<String>, severity: Severity, silent: bool) -> Self {
        Self {
            context: context.into(),
            user_message: None,
            severity,
            silent,
            metadata: None,
        }
    }

    pub fn with_user_message(mut self, message: impl Into<String>) -> Self {
        self.user_message = Some(message.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Global error-reporting sink. Implementations must never fail.
pub trait ErrorReporter: Send + Sync {
    fn handle(&self, error: &anyhow::Error, report: ErrorReport);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "success",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }
}

/// Toast/notification UI. Implementations must never fail.
pub trait Notifier: Send + Sync {
    fn show(&self, message: &str, level: NoticeLevel);
}
