//! Execution-history record types — one row per completed action run.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// ExecutionRecord — one historical execution event
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExecutionRecord {
    /// Unique record identifier. Assigned once at creation, never reused.
    pub id: Uuid,

    /// Trigger document, present only for rule-triggered executions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<Value>,

    /// Trigger-type document, present only for rule-triggered executions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_type: Option<Value>,

    /// Trigger-instance document, present only for rule-triggered executions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_instance: Option<Value>,

    /// Rule document, present only when the execution originated from a rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<Value>,

    /// The action definition that ran. Always present.
    pub action: Value,

    /// The runner type that executed the action. Always present.
    pub runner: Value,

    /// Execution result/status payload. Always present.
    pub execution: Value,

    /// Ordered identifiers of child execution records.
    #[serde(default)]
    pub children: Vec<Uuid>,
}

impl ExecutionRecord {
    /// Build a record for a directly invoked execution (no rule context).
    pub fn direct(action: Value, runner: Value, execution: Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            trigger: None,
            trigger_type: None,
            trigger_instance: None,
            rule: None,
            action,
            runner,
            execution,
            children: Vec::new(),
        }
    }

    /// Build a record for a rule-triggered execution.
    pub fn rule_triggered(
        action: Value,
        runner: Value,
        execution: Value,
        context: RuleContext,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            trigger: Some(context.trigger),
            trigger_type: Some(context.trigger_type),
            trigger_instance: Some(context.trigger_instance),
            rule: Some(context.rule),
            action,
            runner,
            execution,
            children: Vec::new(),
        }
    }

    /// Whether this record carries a rule-trigger context.
    pub fn is_rule_triggered(&self) -> bool {
        self.rule.is_some()
    }

    /// Check the structural invariant: the trigger/rule documents are
    /// present together or absent together. Records built through the
    /// constructors always pass; deserialized records may not.
    pub fn validate(&self) -> Result<(), RecordError> {
        let present = [
            self.trigger.is_some(),
            self.trigger_type.is_some(),
            self.trigger_instance.is_some(),
            self.rule.is_some(),
        ];
        if present.iter().all(|p| *p) || present.iter().all(|p| !*p) {
            Ok(())
        } else {
            Err(RecordError::PartialRuleContext(self.id))
        }
    }

    /// Resolve a dotted field path (e.g. `"action.name"`) against this
    /// record. The first segment names a sub-document; remaining segments
    /// walk nested JSON objects. Any absent segment yields `None`.
    pub fn field(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let root = match segments.next()? {
            "trigger" => self.trigger.as_ref()?,
            "trigger_type" => self.trigger_type.as_ref()?,
            "trigger_instance" => self.trigger_instance.as_ref()?,
            "rule" => self.rule.as_ref()?,
            "action" => &self.action,
            "runner" => &self.runner,
            "execution" => &self.execution,
            _ => return None,
        };
        segments.try_fold(root, |value, segment| value.get(segment))
    }
}

// ---------------------------------------------------------------------------
// Rule-trigger context
// ---------------------------------------------------------------------------

/// The four documents that accompany a rule-triggered execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleContext {
    pub trigger: Value,
    pub trigger_type: Value,
    pub trigger_instance: Value,
    pub rule: Value,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record {0}: trigger/rule context must be present or absent together")]
    PartialRuleContext(Uuid),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
