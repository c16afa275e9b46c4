// Render plans for the three dashboard charts
use crate::application::aggregator;
use crate::application::chart_registry::ChartSlot;
use crate::domain::record;
use crate::domain::series::{ChartKind, Series};
use crate::infrastructure::config::ChartStyleConfig;
use serde_json::Value;

/// Why a render pass ended without installing a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    EngineUnavailable,
    MountMissing,
    NoTenantSelected,
    NoData,
}

/// Outcome of a single chart render pass. Failures never propagate past
/// the renderer boundary; they are reported and folded into this result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Installed,
    Skipped(SkipReason),
    Failed(String),
}

/// Static description of one chart: where it mounts, what it draws, and
/// how its records are categorized.
pub struct RenderPlan {
    pub slot: ChartSlot,
    pub kind: ChartKind,
    pub title: &'static str,
    pub collection: &'static str,
    aggregate: fn(&[Value]) -> Series,
}

impl RenderPlan {
    pub fn for_slot(slot: ChartSlot) -> RenderPlan {
        match slot {
            ChartSlot::Clients => RenderPlan {
                slot,
                kind: ChartKind::Doughnut,
                title: "Clients by Status",
                collection: record::CLIENTS_COLLECTION,
                aggregate: aggregate_status,
            },
            ChartSlot::Leads => RenderPlan {
                slot,
                kind: ChartKind::Pie,
                title: "Leads by Status",
                collection: record::LEADS_COLLECTION,
                aggregate: aggregate_status,
            },
            ChartSlot::Tasks => RenderPlan {
                slot,
                kind: ChartKind::Bar,
                title: "Tasks by Priority",
                collection: record::TASKS_COLLECTION,
                aggregate: aggregate_priority,
            },
        }
    }

    pub fn mount_id(&self) -> &'static str {
        self.slot.mount_id()
    }

    pub fn aggregate(&self, records: &[Value]) -> Series {
        (self.aggregate)(records)
    }

    /// One color per series entry. Status charts are keyed by the label
    /// itself; the priority bar is keyed by the fixed categories, which
    /// line up with its display labels by construction.
    pub fn colors(&self, style: &ChartStyleConfig, series: &Series) -> Vec<String> {
        match self.slot {
            ChartSlot::Tasks => record::PRIORITY_CATEGORIES
                .iter()
                .map(|c| style.priority_color(c))
                .collect(),
            _ => series
                .labels
                .iter()
                .map(|l| style.status_color(l))
                .collect(),
        }
    }
}

fn aggregate_status(records: &[Value]) -> Series {
    aggregator::count_by_key(records, aggregator::status_key)
}

fn aggregate_priority(records: &[Value]) -> Series {
    aggregator::count_fixed(
        records,
        aggregator::priority_key,
        &record::PRIORITY_CATEGORIES,
        |c| format!("{} Priority", c),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plan_shapes() {
        assert_eq!(RenderPlan::for_slot(ChartSlot::Clients).kind, ChartKind::Doughnut);
        assert_eq!(RenderPlan::for_slot(ChartSlot::Leads).kind, ChartKind::Pie);
        let tasks = RenderPlan::for_slot(ChartSlot::Tasks);
        assert_eq!(tasks.kind, ChartKind::Bar);
        assert_eq!(tasks.collection, "generalTodos");
    }

    #[test]
    fn test_colors_fall_back_for_unrecognized_categories() {
        let style = ChartStyleConfig::default();
        let plan = RenderPlan::for_slot(ChartSlot::Clients);
        let series = Series::new(
            vec!["Active".to_string(), "Weird Status".to_string()],
            vec![1, 1],
        );
        let colors = plan.colors(&style, &series);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[1], style.fallback_color);
        assert_ne!(colors[0], style.fallback_color);
    }

    #[test]
    fn test_priority_colors_align_with_fixed_labels() {
        let style = ChartStyleConfig::default();
        let plan = RenderPlan::for_slot(ChartSlot::Tasks);
        let series = plan.aggregate(&[json!({"priority": "Low"})]);
        let colors = plan.colors(&style, &series);
        assert_eq!(series.labels.len(), colors.len());
    }
}
