// Chart series domain model
use serde::Serialize;

/// Labeled count series feeding one chart, derived per render call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl Series {
    pub fn new(labels: Vec<String>, values: Vec<u64>) -> Self {
        Self { labels, values }
    }

    /// Bump the count for `label`, appending it in first-seen order.
    pub fn increment(&mut self, label: &str) {
        match self.labels.iter().position(|l| l == label) {
            Some(i) => self.values[i] += 1,
            None => {
                self.labels.push(label.to_string());
                self.values.push(1);
            }
        }
    }

    pub fn total(&self) -> u64 {
        self.values.iter().sum()
    }

    /// A series with no labels, or with only zero counts, draws nothing
    /// worth installing.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.values.iter().all(|v| *v == 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Doughnut,
    Pie,
    Bar,
}
