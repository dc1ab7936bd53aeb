//! Pagination engine — offset/limit windows over the ordered match set.

use crate::QueryError;
use std::collections::HashMap;

const OFFSET_PARAM: &str = "offset";
const LIMIT_PARAM: &str = "limit";

/// Parameter names consumed here; the filter compiler must never treat
/// them as field filters.
pub const RESERVED_PARAMS: &[&str] = &[OFFSET_PARAM, LIMIT_PARAM];

/// Cap applied when the caller sends no `limit` (or `limit=0`). A large
/// finite default instead of "unlimited", so a missing limit never
/// silently becomes an empty page and never an unbounded scan.
pub const DEFAULT_LIMIT: usize = 10_000;

/// The `[offset, offset + limit)` window over the filtered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: usize,
    pub limit: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self { offset: 0, limit: DEFAULT_LIMIT }
    }
}

impl Page {
    /// Parse the reserved `offset`/`limit` parameters. Values must be
    /// well-formed non-negative integers; `limit=0` and a missing limit
    /// both mean [`DEFAULT_LIMIT`].
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, QueryError> {
        let offset = parse_param(params, OFFSET_PARAM)?.unwrap_or(0);
        let limit = match parse_param(params, LIMIT_PARAM)? {
            None | Some(0) => DEFAULT_LIMIT,
            Some(n) => n,
        };
        Ok(Self { offset, limit })
    }

    /// Slice the window out of an ordered sequence, clipped to its
    /// length. An out-of-range offset yields an empty page, not an
    /// error.
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        items.into_iter().skip(self.offset).take(self.limit).collect()
    }
}

fn parse_param(
    params: &HashMap<String, String>,
    name: &str,
) -> Result<Option<usize>, QueryError> {
    match params.get(name) {
        None => Ok(None),
        Some(raw) => raw.parse::<usize>().map(Some).map_err(|_| {
            QueryError::InvalidQuery(format!(
                "{name} must be a non-negative integer, got {raw:?}"
            ))
        }),
    }
}
