// Defensive read access into the external application state snapshot
use crate::application::capabilities::StateStore;
use crate::domain::record;
use serde_json::Value;
use std::sync::Arc;

/// Read-only view over the externally-owned state store.
///
/// The store may be absent, uninitialized, or malformed at any call.
/// Every accessor degrades to an empty or absent result instead of
/// failing, so callers only ever check for emptiness.
#[derive(Clone)]
pub struct DataAccessor {
    store: Arc<dyn StateStore>,
}

impl DataAccessor {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Whether the store currently exposes any snapshot at all.
    pub fn has_snapshot(&self) -> bool {
        self.store.snapshot().is_some()
    }

    /// Records in the named collection, or empty when the store or the
    /// collection is missing or malformed.
    pub fn collection(&self, name: &str) -> Vec<Value> {
        let Some(snapshot) = self.store.snapshot() else {
            tracing::debug!("State store has no snapshot; returning empty {}", name);
            return Vec::new();
        };
        match snapshot.get("collections").and_then(|c| c.get(name)) {
            Some(Value::Array(records)) => records.clone(),
            Some(other) => {
                tracing::warn!(
                    "Collection {} is not an array (found {}); returning empty",
                    name,
                    json_type_name(other)
                );
                Vec::new()
            }
            None => {
                tracing::debug!("Collection {} missing from snapshot", name);
                Vec::new()
            }
        }
    }

    /// Currently selected tenant, or `None` on any store-access failure.
    pub fn tenant_selection(&self) -> Option<String> {
        self.store
            .snapshot()?
            .get("selectedTenant")
            .and_then(Value::as_str)
            .map(str::to_string)
            .filter(|id| !id.is_empty())
    }

    /// Records in the named collection belonging to the given tenant.
    pub fn tenant_records(&self, name: &str, tenant: &str) -> Vec<Value> {
        self.collection(name)
            .into_iter()
            .filter(|r| record::belongs_to_tenant(r, tenant))
            .collect()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FixedStore(Option<Value>);

    impl StateStore for FixedStore {
        fn snapshot(&self) -> Option<Value> {
            self.0.clone()
        }
    }

    fn reader(snapshot: Option<Value>) -> DataAccessor {
        DataAccessor::new(Arc::new(FixedStore(snapshot)))
    }

    fn reader_with_collections(collections: Value) -> DataAccessor {
        reader(Some(json!({"collections": collections})))
    }

    #[test]
    fn test_missing_store_reads_empty() {
        let accessor = reader(None);
        assert!(accessor.collection("clients").is_empty());
        assert_eq!(accessor.tenant_selection(), None);
        assert!(!accessor.has_snapshot());
    }

    #[test]
    fn test_malformed_snapshot_reads_empty() {
        let accessor = reader(Some(json!("not an object")));
        assert!(accessor.collection("clients").is_empty());
        assert_eq!(accessor.tenant_selection(), None);

        let accessor = reader_with_collections(json!({"clients": "nope"}));
        assert!(accessor.collection("clients").is_empty());
    }

    #[test]
    fn test_tenant_selection_ignores_blank_and_nonstring() {
        assert_eq!(reader(Some(json!({"selectedTenant": ""}))).tenant_selection(), None);
        assert_eq!(reader(Some(json!({"selectedTenant": 42}))).tenant_selection(), None);
        assert_eq!(
            reader(Some(json!({"selectedTenant": "acme"}))).tenant_selection(),
            Some("acme".to_string())
        );
    }

    #[test]
    fn test_tenant_records_filters_exactly() {
        let accessor = reader_with_collections(json!({
            "clients": [
                {"tenantId": "acme", "status": "Active"},
                {"tenantId": "globex", "status": "Active"},
                {"status": "Active"}
            ]
        }));
        let records = accessor.tenant_records("clients", "acme");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["tenantId"], "acme");
    }
}
