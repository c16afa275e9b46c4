// Always-available diagnostic fallbacks for optional collaborators
use crate::application::capabilities::{
    ErrorReport, ErrorReporter, NoticeLevel, Notifier, Severity,
};
use tracing_subscriber::EnvFilter;

/// Initialize the process-wide diagnostic channel. Safe to call more
/// than once; later calls are no-ops.
pub fn init_diagnostics() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// Error sink of last resort: routes every report to the diagnostic
/// channel and never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn handle(&self, error: &anyhow::Error, report: ErrorReport) {
        match report.severity {
            Severity::Low => tracing::warn!(
                "[{}] {} (severity={}, metadata={:?})",
                report.context,
                error,
                report.severity.as_str(),
                report.metadata
            ),
            _ => tracing::error!(
                "[{}] {} (severity={}, metadata={:?})",
                report.context,
                error,
                report.severity.as_str(),
                report.metadata
            ),
        }
        if !report.silent {
            if let Some(message) = &report.user_message {
                tracing::info!("User notice: {}", message);
            }
        }
    }
}

/// Notification sink of last resort: logs instead of toasting.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn show(&self, message: &str, level: NoticeLevel) {
        match level {
            NoticeLevel::Warning | NoticeLevel::Error => {
                tracing::warn!("Notification ({}): {}", level.as_str(), message)
            }
            _ => tracing::info!("Notification ({}): {}", level.as_str(), message),
        }
    }
}
