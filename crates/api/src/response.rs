//! Shared response envelope types for admin handlers.
//!
//! Admin responses use a `{ "data": ... }` envelope. The read API returns
//! bare projections so clients can consume it without unwrapping.

use serde::Serialize;
use serde_json::{Map, Value};

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Admin change list page.
#[derive(Debug, Serialize)]
pub struct Changelist {
    /// Column keys present in every row besides `id`, in display order.
    pub columns: Vec<&'static str>,
    /// Matching rows before pagination.
    pub total: i64,
    pub rows: Vec<Map<String, Value>>,
}
