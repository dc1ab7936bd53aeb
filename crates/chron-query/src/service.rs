//! Query façade — the single read-path entry point.

use crate::filter::RecordFilter;
use crate::page::Page;
use crate::QueryError;
use chron_core::record::ExecutionRecord;
use chron_store::RecordStore;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Read-only façade over the record store. Stateless per call; safe to
/// clone and share across concurrent callers.
pub struct HistoryService<S> {
    store: Arc<S>,
}

impl<S> Clone for HistoryService<S> {
    fn clone(&self) -> Self {
        Self { store: Arc::clone(&self.store) }
    }
}

impl<S: RecordStore> HistoryService<S> {
    pub fn new(store: S) -> Self {
        Self { store: Arc::new(store) }
    }

    /// List records matching the recognized filter parameters, windowed
    /// by the reserved `offset`/`limit` parameters. An empty result is a
    /// success, never an error.
    pub fn list(
        &self,
        params: &HashMap<String, String>,
    ) -> Result<Vec<ExecutionRecord>, QueryError> {
        let page = Page::from_params(params)?;
        let filter = RecordFilter::compile(params);
        let matches = self.store.find(&|record| filter.matches(record))?;
        Ok(page.slice(matches))
    }

    /// Fetch a single record. Absence is always an explicit
    /// [`QueryError::NotFound`], never an empty success.
    pub fn get_by_id(&self, id: Uuid) -> Result<ExecutionRecord, QueryError> {
        self.store.find_by_id(id)?.ok_or(QueryError::NotFound(id))
    }
}
