//! Timeout-bounded async boundary around the blocking store calls.
//!
//! The store may block on I/O, so callers holding an async runtime go
//! through these wrappers: the query runs on the blocking pool and an
//! elapsed deadline surfaces as `StoreUnavailable`. No retries; one
//! request/response cycle per call.

use crate::{HistoryService, QueryError};
use chron_core::record::ExecutionRecord;
use chron_store::RecordStore;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::timeout;
use tracing::warn;
use uuid::Uuid;

/// `HistoryService::list` with a deadline.
pub async fn list_within<S>(
    service: &HistoryService<S>,
    params: &HashMap<String, String>,
    deadline: Duration,
) -> Result<Vec<ExecutionRecord>, QueryError>
where
    S: RecordStore + Send + Sync + 'static,
{
    let service = service.clone();
    let params = params.clone();
    bounded(deadline, move || service.list(&params)).await
}

/// `HistoryService::get_by_id` with a deadline.
pub async fn get_by_id_within<S>(
    service: &HistoryService<S>,
    id: Uuid,
    deadline: Duration,
) -> Result<ExecutionRecord, QueryError>
where
    S: RecordStore + Send + Sync + 'static,
{
    let service = service.clone();
    bounded(deadline, move || service.get_by_id(id)).await
}

async fn bounded<T, F>(deadline: Duration, call: F) -> Result<T, QueryError>
where
    F: FnOnce() -> Result<T, QueryError> + Send + 'static,
    T: Send + 'static,
{
    match timeout(deadline, tokio::task::spawn_blocking(call)).await {
        Ok(Ok(result)) => result,
        Ok(Err(join)) => Err(QueryError::StoreUnavailable(format!(
            "store worker failed: {join}"
        ))),
        Err(_) => {
            warn!(?deadline, "store call exceeded deadline");
            Err(QueryError::StoreUnavailable(format!(
                "store call exceeded deadline of {deadline:?}"
            )))
        }
    }
}
