//! chron-core: Shared types for Chronicle
//!
//! This crate has zero internal crate dependencies and defines the
//! canonical execution-history record used across all other chron-*
//! crates.

pub mod record;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::record::{ExecutionRecord, RecordError, RuleContext};
}
