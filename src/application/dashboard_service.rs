// Dashboard orchestration - chart updates, validation, export and stats
use crate::application::accessor::DataAccessor;
use crate::application::aggregator;
use crate::application::capabilities::{
    ChartConfig, ChartEngine, ErrorReport, ErrorReporter, NoticeLevel, Notifier, Severity,
    StateStore,
};
use crate::application::chart_registry::{ChartRegistry, ChartSlot};
use crate::application::renderers::{RenderOutcome, RenderPlan, SkipReason};
use crate::domain::record;
use crate::domain::stats::StatsSummary;
use crate::infrastructure::config::DashboardConfig;
use crate::infrastructure::fallback::{TracingNotifier, TracingReporter};
use base64::Engine as _;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Failures surfaced through the error reporter. None of these ever
/// reach a caller as a returned error.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("charting engine is not loaded")]
    EngineUnavailable,
    #[error("no {0} chart is currently installed")]
    NoChartInstalled(ChartSlot),
    #[error("chart image export failed: {0}")]
    Export(String),
    #[error("could not write export artifact: {0}")]
    ExportWrite(#[from] std::io::Error),
}

/// Per-slot outcomes of one `update_all` pass.
#[derive(Debug, Default)]
pub struct UpdateSummary {
    pub outcomes: Vec<(ChartSlot, RenderOutcome)>,
}

impl UpdateSummary {
    pub fn installed(&self) -> usize {
        self.count(|o| matches!(o, RenderOutcome::Installed))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, RenderOutcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, RenderOutcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&RenderOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| pred(o)).count()
    }
}

/// Pre-flight validation result for `initialize`.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

pub struct DashboardService {
    accessor: DataAccessor,
    engine: Option<Arc<dyn ChartEngine>>,
    reporter: Arc<dyn ErrorReporter>,
    notifier: Arc<dyn Notifier>,
    config: DashboardConfig,
    registry: ChartRegistry,
}

impl DashboardService {
    /// Build a service over the external state store. The reporter and
    /// notifier default to the tracing-backed fallbacks; the engine is
    /// absent until the host wires one in.
    pub fn new(store: Arc<dyn StateStore>, config: DashboardConfig) -> Self {
        Self {
            accessor: DataAccessor::new(store),
            engine: None,
            reporter: Arc::new(TracingReporter),
            notifier: Arc::new(TracingNotifier),
            config,
            registry: ChartRegistry::new(),
        }
    }

    pub fn with_engine(mut self, engine: Arc<dyn ChartEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Re-render every chart for the selected tenant.
    ///
    /// A missing engine is reported once per call; a missing tenant
    /// selection emits a single diagnostic. Otherwise the three
    /// renderers run in sequence, each independently guarded, so one
    /// failed chart never blocks the others.
    pub fn update_all(&mut self) -> UpdateSummary {
        if self.engine.is_none() {
            let error = anyhow::Error::new(DashboardError::EngineUnavailable);
            self.reporter.handle(
                &error,
                ErrorReport::new("update_all", Severity::Medium, false)
                    .with_user_message("Charts are unavailable: the charting engine is not loaded."),
            );
            return UpdateSummary::default();
        }
        if self.accessor.tenant_selection().is_none() {
            tracing::warn!("No company selected; dashboard charts not updated");
            return UpdateSummary::default();
        }

        let mut summary = UpdateSummary::default();
        for slot in ChartSlot::ALL {
            let outcome = self.render_chart(slot);
            summary.outcomes.push((slot, outcome));
        }
        tracing::debug!(
            "Dashboard update: {} installed, {} skipped, {} failed",
            summary.installed(),
            summary.skipped(),
            summary.failed()
        );
        summary
    }

    /// Validate preconditions, then render. Returns `false` without
    /// touching any slot when validation fails, after a single
    /// user-facing notification naming the first error.
    pub fn initialize(&mut self) -> bool {
        let validation = self.validate_config();
        if !validation.valid {
            tracing::warn!("Dashboard validation failed: {:?}", validation.errors);
            let first = validation.errors.first().map(String::as_str).unwrap_or("unknown error");
            self.notifier.show(
                &format!("Dashboard cannot start: {}", first),
                NoticeLevel::Error,
            );
            return false;
        }
        for warning in &validation.warnings {
            tracing::warn!("Dashboard validation warning: {}", warning);
        }
        self.update_all();
        true
    }

    /// Pre-flight checks. Engine, store and tenant-selection absence
    /// are errors; an individual missing mount point is only a warning
    /// because the other charts can still render.
    pub fn validate_config(&self) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        match &self.engine {
            None => errors.push("charting engine is not loaded".to_string()),
            Some(engine) => {
                for slot in ChartSlot::ALL {
                    if !engine.has_mount(slot.mount_id()) {
                        warnings.push(format!("mount point {} not found", slot.mount_id()));
                    }
                }
            }
        }
        if !self.accessor.has_snapshot() {
            errors.push("application state store is not available".to_string());
        }
        if self.accessor.tenant_selection().is_none() {
            errors.push("no company selected".to_string());
        }

        ValidationResult {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    pub fn render_clients_chart(&mut self) -> RenderOutcome {
        self.render_chart(ChartSlot::Clients)
    }

    pub fn render_leads_chart(&mut self) -> RenderOutcome {
        self.render_chart(ChartSlot::Leads)
    }

    pub fn render_tasks_chart(&mut self) -> RenderOutcome {
        self.render_chart(ChartSlot::Tasks)
    }

    fn render_chart(&mut self, slot: ChartSlot) -> RenderOutcome {
        let plan = RenderPlan::for_slot(slot);
        let Some(engine) = self.engine.clone() else {
            tracing::warn!("Skipping {} chart: charting engine unavailable", slot);
            return RenderOutcome::Skipped(SkipReason::EngineUnavailable);
        };
        if !engine.has_mount(plan.mount_id()) {
            tracing::warn!(
                "Skipping {} chart: mount point {} not found",
                slot,
                plan.mount_id()
            );
            return RenderOutcome::Skipped(SkipReason::MountMissing);
        }
        let Some(tenant) = self.accessor.tenant_selection() else {
            tracing::warn!("Skipping {} chart: no company selected", slot);
            return RenderOutcome::Skipped(SkipReason::NoTenantSelected);
        };

        let records = self.accessor.tenant_records(plan.collection, &tenant);
        let series = plan.aggregate(&records);
        if series.is_empty() {
            // An empty chart is worse than no chart
            tracing::debug!("No {} data for company {}; slot left untouched", slot, tenant);
            return RenderOutcome::Skipped(SkipReason::NoData);
        }

        let chart_config = ChartConfig {
            kind: plan.kind,
            title: plan.title.to_string(),
            labels: series.labels.clone(),
            values: series.values.clone(),
            background_colors: plan.colors(&self.config.style, &series),
            legend_position: self.config.style.legend_position.clone(),
            responsive: true,
        };

        match engine.construct(plan.mount_id(), &chart_config) {
            Ok(handle) => {
                self.registry.install(slot, handle);
                tracing::debug!(
                    "Installed {} chart with {} categories",
                    slot,
                    series.labels.len()
                );
                RenderOutcome::Installed
            }
            Err(error) => {
                self.reporter.handle(
                    &error,
                    ErrorReport::new(format!("render_{}_chart", slot), Severity::Low, true)
                        .with_metadata(json!({
                            "slot": slot.as_str(),
                            "engineAvailable": true,
                            "mountPresent": true,
                        })),
                );
                RenderOutcome::Failed(error.to_string())
            }
        }
    }

    /// Export the named chart as a PNG artifact. Every failure is
    /// reported non-silently: the export is user-initiated, so the user
    /// must be told it failed.
    pub fn export_chart(&mut self, slot: ChartSlot, filename: &str) -> bool {
        match self.try_export(slot, filename) {
            Ok(path) => {
                tracing::info!("Exported {} chart to {}", slot, path.display());
                self.notifier.show(
                    &format!("Chart exported to {}", path.display()),
                    NoticeLevel::Success,
                );
                true
            }
            Err(error) => {
                let engine_available = self.engine.is_some();
                let error = anyhow::Error::new(error);
                self.reporter.handle(
                    &error,
                    ErrorReport::new("export_chart", Severity::Medium, false)
                        .with_user_message(format!("Could not export the {} chart.", slot))
                        .with_metadata(json!({
                            "slot": slot.as_str(),
                            "engineAvailable": engine_available,
                        })),
                );
                false
            }
        }
    }

    fn try_export(&self, slot: ChartSlot, filename: &str) -> Result<PathBuf, DashboardError> {
        let handle = self
            .registry
            .get(slot)
            .ok_or(DashboardError::NoChartInstalled(slot))?;
        let image = handle
            .to_base64_image()
            .map_err(|e| DashboardError::Export(e.to_string()))?;

        // Engines may hand back either the raw payload or a data: URL;
        // in the latter case the payload follows the first comma.
        let payload = match image.split_once(',') {
            Some((_, data)) => data,
            None => image.as_str(),
        };
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload.trim())
            .map_err(|e| DashboardError::Export(format!("invalid base64 image payload: {}", e)))?;

        let mut name = sanitize_filename(filename);
        if name.is_empty() {
            name = format!("{}-chart-{}.png", slot, chrono::Local::now().format("%Y%m%d"));
        }

        fs::create_dir_all(&self.config.export_dir)?;
        let path = self.config.export_dir.join(name);
        fs::write(&path, bytes)?;
        Ok(path)
    }

    /// Summary statistics for the selected tenant; all-zero when no
    /// tenant is selected or the store is unavailable.
    pub fn get_stats(&self) -> StatsSummary {
        let Some(tenant) = self.accessor.tenant_selection() else {
            tracing::debug!("No company selected; returning zeroed stats");
            return StatsSummary::default();
        };
        StatsSummary {
            clients: aggregator::client_stats(
                &self.accessor.tenant_records(record::CLIENTS_COLLECTION, &tenant),
            ),
            leads: aggregator::lead_stats(
                &self.accessor.tenant_records(record::LEADS_COLLECTION, &tenant),
            ),
            tasks: aggregator::task_stats(
                &self.accessor.tenant_records(record::TASKS_COLLECTION, &tenant),
            ),
        }
    }

    /// Markup summary of the per-domain stats, for embedding next to
    /// the charts.
    pub fn render_stats_summary(&self) -> String {
        let stats = self.get_stats();
        let mut out = String::from("<div class=\"stats-summary\">");
        out.push_str(&format!(
            "<div class=\"stat-card\"><h4>Clients</h4><p>{} total</p><p>{} active ({:.1}%)</p><p>{} VIP</p></div>",
            stats.clients.total, stats.clients.active, stats.clients.active_rate, stats.clients.vip
        ));
        out.push_str(&format!(
            "<div class=\"stat-card\"><h4>Leads</h4><p>{} total</p><p>{} converted ({:.1}%)</p></div>",
            stats.leads.total, stats.leads.converted, stats.leads.conversion_rate
        ));
        out.push_str(&format!(
            "<div class=\"stat-card\"><h4>Tasks</h4><p>{} total</p><p>{} high priority ({:.1}%)</p></div>",
            stats.tasks.total, stats.tasks.high_priority, stats.tasks.high_rate
        ));
        out.push_str("</div>");
        out
    }

    pub fn destroy_all(&mut self) {
        self.registry.destroy_all();
    }

    pub fn is_active(&self, slot: ChartSlot) -> bool {
        self.registry.is_active(slot)
    }

    pub fn active_slots(&self) -> Vec<ChartSlot> {
        self.registry.active_slots()
    }
}

fn sanitize_filename(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect()
}
