//! Envelope adapter for the school REST API.
//!
//! The endpoints answer with a `{success, data, pagination}` envelope, but
//! older ones still return a flat `{news: [...]}` shape or nest the list
//! under `data.items`. Everything is funneled through [`normalize_list`]
//! so the rest of the client only sees [`ListPage`].

use super::list_query::ListQuery;
use super::pagination::{PaginationMeta, PaginationState};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnvelopeError {
    /// `success: false` in an otherwise readable body.
    #[error("server reported failure: {}", .0.as_deref().unwrap_or("no message"))]
    ServerReported(Option<String>),

    #[error("unexpected response shape: {0}")]
    Decode(String),
}

/// One page of records plus its canonical pagination state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub pagination: PaginationState,
}

impl<T> ListPage<T> {
    pub fn empty(query: &ListQuery) -> Self {
        Self {
            items: Vec::new(),
            pagination: PaginationState::new(query.page, query.limit, 0),
        }
    }
}

/// Message the server attached to a body, if any (`message`, then `error`).
pub fn server_message(body: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .filter_map(|key| body.get(*key))
        .find_map(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn check_success(body: &Value) -> Result<(), EnvelopeError> {
    match body.get("success").and_then(Value::as_bool) {
        Some(false) => Err(EnvelopeError::ServerReported(server_message(body))),
        _ => Ok(()),
    }
}

fn extract_items(body: &Value, list_field: &str) -> Vec<Value> {
    let data = body.get("data");
    let candidates = [
        data.filter(|d| d.is_array()),
        data.and_then(|d| d.get("items")),
        body.get("items"),
        data.and_then(|d| d.get(list_field)),
        body.get(list_field),
    ];
    candidates
        .into_iter()
        .flatten()
        .find_map(|v| v.as_array().cloned())
        .unwrap_or_default()
}

fn extract_pagination(body: &Value) -> Option<PaginationMeta> {
    body.get("pagination")
        .or_else(|| body.get("data").and_then(|d| d.get("pagination")))
        .and_then(|p| serde_json::from_value(p.clone()).ok())
}

/// Normalize any accepted list shape into a [`ListPage`].
///
/// `list_field` is the legacy top-level key (`news`, `applications`, ...).
/// Missing pagination falls back to the requested page/limit with
/// `total = items.len()`.
pub fn normalize_list(
    body: &Value,
    list_field: &str,
    requested: &ListQuery,
) -> Result<ListPage<Value>, EnvelopeError> {
    check_success(body)?;
    if !body.is_object() {
        return Err(EnvelopeError::Decode("list response is not a JSON object".to_string()));
    }

    let items = extract_items(body, list_field);
    let pagination = match extract_pagination(body) {
        Some(meta) => {
            PaginationState::from_meta(&meta, requested.page, requested.limit, items.len() as u64)
        }
        None => PaginationState::new(requested.page, requested.limit, items.len() as u64),
    };

    Ok(ListPage { items, pagination })
}

/// Check a write response. Returns the `data` payload when there is one.
///
/// Empty bodies (e.g. `204 No Content`) count as success.
pub fn normalize_mutation(body: &Value) -> Result<Option<Value>, EnvelopeError> {
    if body.is_null() {
        return Ok(None);
    }
    check_success(body)?;
    Ok(body.get("data").filter(|d| !d.is_null()).cloned())
}

/// Unwrap `{success, data}` around a single object, accepting a bare object too.
pub fn normalize_object<T: DeserializeOwned>(body: &Value) -> Result<T, EnvelopeError> {
    check_success(body)?;
    let payload = match body.get("data") {
        Some(data) if data.is_object() => data,
        _ => body,
    };
    serde_json::from_value(payload.clone()).map_err(|e| EnvelopeError::Decode(e.to_string()))
}
