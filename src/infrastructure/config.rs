// Dashboard configuration - chart styling and export settings
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    #[serde(default)]
    pub style: ChartStyleConfig,
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            style: ChartStyleConfig::default(),
            export_dir: default_export_dir(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartStyleConfig {
    #[serde(default = "default_status_colors")]
    pub status_colors: HashMap<String, String>,
    #[serde(default = "default_priority_colors")]
    pub priority_colors: HashMap<String, String>,
    #[serde(default = "default_fallback_color")]
    pub fallback_color: String,
    #[serde(default = "default_legend_position")]
    pub legend_position: String,
}

impl Default for ChartStyleConfig {
    fn default() -> Self {
        Self {
            status_colors: default_status_colors(),
            priority_colors: default_priority_colors(),
            fallback_color: default_fallback_color(),
            legend_position: default_legend_position(),
        }
    }
}

impl ChartStyleConfig {
    /// Color for a status category, with the stable fallback for
    /// categories outside the configured palette.
    pub fn status_color(&self, category: &str) -> String {
        self.status_colors
            .get(category)
            .cloned()
            .unwrap_or_else(|| self.fallback_color.clone())
    }

    pub fn priority_color(&self, category: &str) -> String {
        self.priority_colors
            .get(category)
            .cloned()
            .unwrap_or_else(|| self.fallback_color.clone())
    }
}

fn default_status_colors() -> HashMap<String, String> {
    [
        ("Active", "#22c55e"),
        ("VIP", "#8b5cf6"),
        ("Inactive", "#94a3b8"),
        ("New", "#3b82f6"),
        ("Contacted", "#eab308"),
        ("Qualified", "#14b8a6"),
        ("Converted", "#22c55e"),
        ("Lost", "#ef4444"),
        ("Unknown", "#9ca3af"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn default_priority_colors() -> HashMap<String, String> {
    [("High", "#ef4444"), ("Medium", "#f59e0b"), ("Low", "#22c55e")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn default_fallback_color() -> String {
    "#cbd5e1".to_string()
}

fn default_legend_position() -> String {
    "bottom".to_string()
}

fn default_export_dir() -> PathBuf {
    PathBuf::from("exports")
}

/// Load the dashboard configuration, falling back to the compiled-in
/// defaults when no `config/dashboard` file is present.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}
