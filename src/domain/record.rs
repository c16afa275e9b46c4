// Record vocabulary for the CRM snapshot collections
use serde_json::Value;

/// Collection names as they appear in the application state snapshot.
pub const CLIENTS_COLLECTION: &str = "clients";
pub const LEADS_COLLECTION: &str = "leads";
/// Tasks live under the legacy `generalTodos` key in the snapshot.
pub const TASKS_COLLECTION: &str = "generalTodos";

/// Sentinel category for records missing a usable `status` field.
pub const UNKNOWN_STATUS: &str = "Unknown";
/// Sentinel category for records missing a usable `priority` field.
pub const DEFAULT_PRIORITY: &str = "Medium";

/// Fixed task priority categories, in display order.
pub const PRIORITY_CATEGORIES: [&str; 3] = ["High", "Medium", "Low"];

pub fn tenant_id(record: &Value) -> Option<&str> {
    record.get("tenantId").and_then(Value::as_str)
}

pub fn belongs_to_tenant(record: &Value, tenant: &str) -> bool {
    tenant_id(record) == Some(tenant)
}

pub fn status(record: &Value) -> Option<&str> {
    record.get("status").and_then(Value::as_str)
}

pub fn priority(record: &Value) -> Option<&str> {
    record.get("priority").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_belongs_to_tenant() {
        let record = json!({"tenantId": "acme", "status": "Active"});
        assert!(belongs_to_tenant(&record, "acme"));
        assert!(!belongs_to_tenant(&record, "globex"));

        // A record without a usable tenantId never matches
        assert!(!belongs_to_tenant(&json!({"status": "Active"}), "acme"));
        assert!(!belongs_to_tenant(&json!({"tenantId": 42}), "acme"));
        assert!(!belongs_to_tenant(&json!("not-an-object"), "acme"));
    }

    #[test]
    fn test_field_extraction_tolerates_bad_shapes() {
        assert_eq!(status(&json!({"status": "VIP"})), Some("VIP"));
        assert_eq!(status(&json!({"status": 7})), None);
        assert_eq!(priority(&json!({})), None);
    }
}
