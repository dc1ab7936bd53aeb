//! Record export — the JSON handed to the transport layer.

use crate::QueryError;
use chron_core::record::ExecutionRecord;

/// Serialize a listed sequence to a pretty-printed JSON array,
/// preserving order.
pub fn export_json(records: &[ExecutionRecord]) -> Result<String, QueryError> {
    serde_json::to_string_pretty(records).map_err(|e| QueryError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn exports_ordered_array() {
        let records = vec![
            ExecutionRecord::direct(
                json!({"name": "local"}),
                json!({"name": "run-local"}),
                json!({"status": "succeeded"}),
            ),
            ExecutionRecord::direct(
                json!({"name": "remote"}),
                json!({"name": "run-remote"}),
                json!({"status": "failed"}),
            ),
        ];

        let exported = export_json(&records).unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&exported).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0]["action"]["name"], "local");
        assert_eq!(parsed[1]["action"]["name"], "remote");
    }
}
