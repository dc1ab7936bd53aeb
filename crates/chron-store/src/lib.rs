//! chron-store: Execution-history record storage backed by SQLite.

pub mod store;

pub use store::SqliteRecordStore;

use chron_core::record::ExecutionRecord;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(String),
    #[error("corrupt record {id}: {message}")]
    Corrupt { id: String, message: String },
    #[error(transparent)]
    InvalidRecord(#[from] chron_core::record::RecordError),
}

/// Contract the query layer depends on. Implementations must expose a
/// single fixed total order over all records: `find` always returns
/// matches in that order, and `insert_or_update` never reorders an
/// existing record.
pub trait RecordStore {
    /// Idempotent upsert keyed by the record id. Updating an existing
    /// record keeps its position in the store's total order.
    fn insert_or_update(&self, record: &ExecutionRecord) -> Result<(), StoreError>;

    /// All records satisfying the predicate, in insertion order.
    fn find(
        &self,
        predicate: &dyn Fn(&ExecutionRecord) -> bool,
    ) -> Result<Vec<ExecutionRecord>, StoreError>;

    /// Look up a single record by id.
    fn find_by_id(&self, id: Uuid) -> Result<Option<ExecutionRecord>, StoreError>;
}
