//! Filter compiler — query parameters to a record predicate.

use chron_core::record::ExecutionRecord;
use serde_json::Value;
use std::collections::HashMap;

pub use crate::page::RESERVED_PARAMS;

/// Exposed filter name → dotted field path into the record. Adding a
/// filter means adding a row here; pagination and store code never
/// change.
pub const SUPPORTED_FILTERS: &[(&str, &str)] = &[
    ("action", "action.name"),
    ("action_ref", "action.ref"),
    ("rule", "rule.name"),
    ("runner", "runner.name"),
    ("trigger", "trigger.name"),
    ("trigger_type", "trigger_type.name"),
    ("status", "execution.status"),
];

// ---------------------------------------------------------------------------
// RecordFilter — AND of path-equality clauses
// ---------------------------------------------------------------------------

/// Compiled filter. Clauses combine with logical AND; the empty clause
/// set matches every record. Parameter names outside
/// [`SUPPORTED_FILTERS`] are ignored for forward compatibility.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    clauses: Vec<Clause>,
}

#[derive(Debug, Clone)]
struct Clause {
    path: &'static str,
    expected: String,
}

impl RecordFilter {
    /// Compile the recognized entries of a query-parameter map.
    pub fn compile(params: &HashMap<String, String>) -> Self {
        let clauses = SUPPORTED_FILTERS
            .iter()
            .filter_map(|(name, path)| {
                params.get(*name).map(|value| Clause {
                    path,
                    expected: value.clone(),
                })
            })
            .collect();
        Self { clauses }
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Evaluate the filter against a record. A clause whose path does
    /// not resolve excludes the record; it never errors.
    pub fn matches(&self, record: &ExecutionRecord) -> bool {
        self.clauses.iter().all(|clause| clause.matches(record))
    }
}

impl Clause {
    fn matches(&self, record: &ExecutionRecord) -> bool {
        match record.field(self.path) {
            // Exact equality after stringification: JSON strings compare
            // by contents, everything else by its canonical JSON text.
            Some(Value::String(actual)) => *actual == self.expected,
            Some(other) => other.to_string() == self.expected,
            None => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chron_core::record::{ExecutionRecord, RuleContext};
    use serde_json::json;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn chain_record() -> ExecutionRecord {
        ExecutionRecord::rule_triggered(
            json!({"name": "chain", "ref": "core.chain"}),
            json!({"name": "action-chain"}),
            json!({"status": "succeeded", "result": {"count": 3}}),
            RuleContext {
                trigger: json!({"name": "st2.webhook"}),
                trigger_type: json!({"name": "webhook"}),
                trigger_instance: json!({"payload": {}}),
                rule: json!({"name": "on-webhook"}),
            },
        )
    }

    fn local_record() -> ExecutionRecord {
        ExecutionRecord::direct(
            json!({"name": "local", "ref": "core.local"}),
            json!({"name": "run-local"}),
            json!({"status": "failed"}),
        )
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = RecordFilter::compile(&params(&[]));
        assert!(filter.is_empty());
        assert!(filter.matches(&chain_record()));
        assert!(filter.matches(&local_record()));
    }

    #[test]
    fn single_filter_selects_subset() {
        let filter = RecordFilter::compile(&params(&[("action", "chain")]));
        assert!(filter.matches(&chain_record()));
        assert!(!filter.matches(&local_record()));
    }

    #[test]
    fn filters_combine_with_and() {
        let filter =
            RecordFilter::compile(&params(&[("action", "chain"), ("status", "succeeded")]));
        assert!(filter.matches(&chain_record()));

        let disagreeing =
            RecordFilter::compile(&params(&[("action", "chain"), ("status", "failed")]));
        assert!(!disagreeing.matches(&chain_record()));
    }

    #[test]
    fn missing_path_excludes_record() {
        // local_record has no rule document at all.
        let filter = RecordFilter::compile(&params(&[("rule", "on-webhook")]));
        assert!(filter.matches(&chain_record()));
        assert!(!filter.matches(&local_record()));
    }

    #[test]
    fn unrecognized_and_reserved_params_are_ignored() {
        let filter = RecordFilter::compile(&params(&[
            ("wibble", "wobble"),
            ("limit", "10"),
            ("offset", "5"),
        ]));
        assert!(filter.is_empty());
        assert!(filter.matches(&local_record()));
        for reserved in RESERVED_PARAMS {
            assert!(SUPPORTED_FILTERS.iter().all(|(name, _)| name != reserved));
        }
    }

    #[test]
    fn non_string_values_compare_by_json_text() {
        let filter = RecordFilter::compile(&params(&[("status", "succeeded")]));
        let mut record = chain_record();
        record.execution = json!({"status": 7});
        assert!(!filter.matches(&record));

        let numeric = RecordFilter::compile(&params(&[("status", "7")]));
        assert!(numeric.matches(&record));
    }
}
