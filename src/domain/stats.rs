// Dashboard statistics domain model

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClientStats {
    pub total: u64,
    pub active: u64,
    pub vip: u64,
    /// Share of active clients, in percent with one decimal.
    pub active_rate: f64,
}

impl ClientStats {
    pub fn new(total: u64, active: u64, vip: u64, active_rate: f64) -> Self {
        Self {
            total,
            active,
            vip,
            active_rate,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LeadStats {
    pub total: u64,
    pub converted: u64,
    pub conversion_rate: f64,
}

impl LeadStats {
    pub fn new(total: u64, converted: u64, conversion_rate: f64) -> Self {
        Self {
            total,
            converted,
            conversion_rate,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TaskStats {
    pub total: u64,
    pub high_priority: u64,
    pub high_rate: f64,
}

impl TaskStats {
    pub fn new(total: u64, high_priority: u64, high_rate: f64) -> Self {
        Self {
            total,
            high_priority,
            high_rate,
        }
    }
}

/// Snapshot of per-domain counts for the selected tenant. Always fully
/// populated; partial failures zero the affected domain instead of
/// leaving holes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatsSummary {
    pub clients: ClientStats,
    pub leads: LeadStats,
    pub tasks: TaskStats,
}
