// Chart handle lifecycle registry - at most one live handle per slot
use crate::application::capabilities::ChartHandle;
use std::fmt;

/// The three fixed chart positions on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSlot {
    Clients,
    Leads,
    Tasks,
}

impl ChartSlot {
    pub const ALL: [ChartSlot; 3] = [ChartSlot::Clients, ChartSlot::Leads, ChartSlot::Tasks];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartSlot::Clients => "clients",
            ChartSlot::Leads => "leads",
            ChartSlot::Tasks => "tasks",
        }
    }

    /// The fixed mount point this slot renders into.
    pub fn mount_id(&self) -> &'static str {
        match self {
            ChartSlot::Clients => "clientsChart",
            ChartSlot::Leads => "leadsChart",
            ChartSlot::Tasks => "tasksChart",
        }
    }

    pub fn from_name(name: &str) -> Option<ChartSlot> {
        ChartSlot::ALL.into_iter().find(|s| s.as_str() == name)
    }

    fn index(&self) -> usize {
        match self {
            ChartSlot::Clients => 0,
            ChartSlot::Leads => 1,
            ChartSlot::Tasks => 2,
        }
    }
}

impl fmt::Display for ChartSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owns the live chart handles.
///
/// Install always releases the previous handle first, and a failed
/// release never leaves a slot occupied, so no slot ever holds two live
/// handles and no dangling handle can block the next creation.
#[derive(Default)]
pub struct ChartRegistry {
    slots: [Option<Box<dyn ChartHandle>>; 3],
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly constructed handle, releasing any previous one.
    pub fn install(&mut self, slot: ChartSlot, handle: Box<dyn ChartHandle>) {
        self.destroy(slot);
        self.slots[slot.index()] = Some(handle);
    }

    /// Release the slot's handle if present. The slot is cleared even
    /// when the release fails.
    pub fn destroy(&mut self, slot: ChartSlot) {
        if let Some(mut handle) = self.slots[slot.index()].take() {
            if let Err(e) = handle.destroy() {
                tracing::warn!("Failed to release {} chart handle: {}", slot, e);
            }
        }
    }

    pub fn destroy_all(&mut self) {
        for slot in ChartSlot::ALL {
            self.destroy(slot);
        }
    }

    pub fn is_active(&self, slot: ChartSlot) -> bool {
        self.slots[slot.index()].is_some()
    }

    pub fn active_slots(&self) -> Vec<ChartSlot> {
        ChartSlot::ALL
            .into_iter()
            .filter(|s| self.is_active(*s))
            .collect()
    }

    pub fn get(&self, slot: ChartSlot) -> Option<&dyn ChartHandle> {
        self.slots[slot.index()].as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct TestHandle {
        destroyed: Arc<AtomicBool>,
        fail_destroy: bool,
    }

    impl TestHandle {
        fn boxed(destroyed: &Arc<AtomicBool>, fail_destroy: bool) -> Box<dyn ChartHandle> {
            Box::new(TestHandle {
                destroyed: destroyed.clone(),
                fail_destroy,
            })
        }
    }

    impl ChartHandle for TestHandle {
        fn destroy(&mut self) -> anyhow::Result<()> {
            self.destroyed.store(true, Ordering::SeqCst);
            if self.fail_destroy {
                anyhow::bail!("release rejected");
            }
            Ok(())
        }

        fn to_base64_image(&self) -> anyhow::Result<String> {
            Ok(String::new())
        }
    }

    #[test]
    fn test_install_releases_previous_handle() {
        let mut registry = ChartRegistry::new();
        let first = Arc::new(AtomicBool::new(false));
        let second = Arc::new(AtomicBool::new(false));

        registry.install(ChartSlot::Clients, TestHandle::boxed(&first, false));
        registry.install(ChartSlot::Clients, TestHandle::boxed(&second, false));

        assert!(first.load(Ordering::SeqCst));
        assert!(!second.load(Ordering::SeqCst));
        assert!(registry.is_active(ChartSlot::Clients));
    }

    #[test]
    fn test_failed_release_still_clears_slot() {
        let mut registry = ChartRegistry::new();
        let flag = Arc::new(AtomicBool::new(false));

        registry.install(ChartSlot::Leads, TestHandle::boxed(&flag, true));
        registry.destroy(ChartSlot::Leads);

        assert!(flag.load(Ordering::SeqCst));
        assert!(!registry.is_active(ChartSlot::Leads));
    }

    #[test]
    fn test_destroy_all_empties_every_slot() {
        let mut registry = ChartRegistry::new();
        for slot in ChartSlot::ALL {
            let flag = Arc::new(AtomicBool::new(false));
            registry.install(slot, TestHandle::boxed(&flag, false));
        }
        assert_eq!(registry.active_slots().len(), 3);

        registry.destroy_all();
        assert!(registry.active_slots().is_empty());

        // Idempotent on an already-empty registry
        registry.destroy_all();
        assert!(registry.active_slots().is_empty());
    }

    #[test]
    fn test_slot_names() {
        assert_eq!(ChartSlot::from_name("leads"), Some(ChartSlot::Leads));
        assert_eq!(ChartSlot::from_name("unknown"), None);
        assert_eq!(ChartSlot::Tasks.mount_id(), "tasksChart");
    }
}
