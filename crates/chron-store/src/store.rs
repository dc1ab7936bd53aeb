//! SQLite-backed record storage.

use crate::{RecordStore, StoreError};
use chron_core::record::ExecutionRecord;
use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

/// Record store backed by a single SQLite database.
/// Uses Mutex<Connection> for thread safety (rusqlite::Connection is !Sync).
///
/// The `seq` column is the store's monotonic insertion counter: assigned
/// once at first insert (AUTOINCREMENT, so values are never reused) and
/// kept on upsert. `ORDER BY seq` is the single fixed total order that
/// makes offset/limit pagination well-defined.
pub struct SqliteRecordStore {
    conn: Mutex<Connection>,
}

impl SqliteRecordStore {
    /// Open (or create) the history database at the given path.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|e| StoreError::Database(e.to_string()))?;
        let store = Self { conn: Mutex::new(conn) };
        store.initialize_schema()?;
        debug!(path = %path.display(), "opened execution-history store");
        Ok(store)
    }

    /// Create an in-memory record store (useful for testing).
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn =
            Connection::open_in_memory().map_err(|e| StoreError::Database(e.to_string()))?;
        let store = Self { conn: Mutex::new(conn) };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<(), StoreError> {
        let conn = self.conn.lock().map_err(|e| StoreError::Database(e.to_string()))?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS executions (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                record_json TEXT NOT NULL
            );",
        )
        .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(())
    }
}

impl RecordStore for SqliteRecordStore {
    fn insert_or_update(&self, record: &ExecutionRecord) -> Result<(), StoreError> {
        record.validate()?;
        let encoded = serde_json::to_string(record).map_err(|e| StoreError::Corrupt {
            id: record.id.to_string(),
            message: e.to_string(),
        })?;
        let conn = self.conn.lock().map_err(|e| StoreError::Database(e.to_string()))?;
        // The conflicting row keeps its rowid, so seq is preserved on update.
        conn.execute(
            "INSERT INTO executions (id, record_json) VALUES (?1, ?2)
             ON CONFLICT(id) DO UPDATE SET record_json = excluded.record_json",
            rusqlite::params![record.id.to_string(), encoded],
        )
        .map_err(|e| StoreError::Database(e.to_string()))?;
        debug!(id = %record.id, "stored execution record");
        Ok(())
    }

    fn find(
        &self,
        predicate: &dyn Fn(&ExecutionRecord) -> bool,
    ) -> Result<Vec<ExecutionRecord>, StoreError> {
        let conn = self.conn.lock().map_err(|e| StoreError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare("SELECT id, record_json FROM executions ORDER BY seq ASC")
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let mut matches = Vec::new();
        for row in rows {
            let (id, encoded) = row.map_err(|e| StoreError::Database(e.to_string()))?;
            let record = decode_record(&id, &encoded)?;
            if predicate(&record) {
                matches.push(record);
            }
        }
        Ok(matches)
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<ExecutionRecord>, StoreError> {
        let conn = self.conn.lock().map_err(|e| StoreError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare("SELECT record_json FROM executions WHERE id = ?1")
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let mut rows = stmt
            .query_map(rusqlite::params![id.to_string()], |row| {
                row.get::<_, String>(0)
            })
            .map_err(|e| StoreError::Database(e.to_string()))?;

        match rows.next() {
            Some(row) => {
                let encoded = row.map_err(|e| StoreError::Database(e.to_string()))?;
                Ok(Some(decode_record(&id.to_string(), &encoded)?))
            }
            None => Ok(None),
        }
    }
}

fn decode_record(id: &str, encoded: &str) -> Result<ExecutionRecord, StoreError> {
    serde_json::from_str(encoded).map_err(|e| StoreError::Corrupt {
        id: id.to_string(),
        message: e.to_string(),
    })
}
