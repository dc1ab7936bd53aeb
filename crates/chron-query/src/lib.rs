//! chron-query: Query engine over execution history.
//!
//! Translates externally supplied query parameters into a record
//! predicate (filter compiler), slices the ordered match set
//! (pagination), and exposes the combined read path as a façade
//! (`HistoryService`). The engine is read-only and stateless per call;
//! all state lives in the record store.

pub mod boundary;
pub mod export;
pub mod filter;
pub mod page;
pub mod service;

pub use service::HistoryService;

use chron_store::StoreError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum QueryError {
    /// No record with the requested id. 404-equivalent.
    #[error("execution record not found: {0}")]
    NotFound(Uuid),
    /// Malformed offset/limit parameter. 400-equivalent.
    #[error("invalid query parameter: {0}")]
    InvalidQuery(String),
    /// The record store could not serve the request. 5xx-equivalent;
    /// never retried here — retry policy belongs to the caller.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("export error: {0}")]
    Export(String),
}

impl From<StoreError> for QueryError {
    fn from(err: StoreError) -> Self {
        QueryError::StoreUnavailable(err.to_string())
    }
}
