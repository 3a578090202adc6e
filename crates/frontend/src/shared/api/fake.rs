//! In-memory stand-in for the school API, used by the client tests.

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use async_trait::async_trait;
use contracts::domain::common::{record_id, EntityKind};
use serde_json::{json, Map, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct FakeState {
    collections: HashMap<EntityKind, Vec<Value>>,
    settings: Value,
    next_id: u64,
    requests: Vec<ApiRequest>,
    queued: VecDeque<(Method, Result<ApiResponse, ApiError>)>,
}

#[derive(Default)]
pub struct FakeApi {
    state: Mutex<FakeState>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub fn seed(&self, kind: EntityKind, rows: Vec<Value>) -> &Self {
        self.state().collections.insert(kind, rows);
        self
    }

    pub fn seed_settings(&self, settings: Value) -> &Self {
        self.state().settings = settings;
        self
    }

    pub fn rows(&self, kind: EntityKind) -> Vec<Value> {
        self.state().collections.get(&kind).cloned().unwrap_or_default()
    }

    /// The next request with `method` gets `response` instead of being routed.
    pub fn respond_next(&self, method: Method, response: ApiResponse) {
        self.state().queued.push_back((method, Ok(response)));
    }

    pub fn fail_next(&self, method: Method, error: ApiError) {
        self.state().queued.push_back((method, Err(error)));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state().requests.clone()
    }

    pub fn request_count(&self, method: Method) -> usize {
        self.state().requests.iter().filter(|r| r.method == method).count()
    }

    pub fn last_path(&self) -> Option<String> {
        self.state().requests.last().map(|r| r.path.clone())
    }

    fn route(&self, request: &ApiRequest) -> ApiResponse {
        let (path, query) = split_path(&request.path);
        if path == "/api/settings" {
            return self.settings(request);
        }

        let Some(kind) = EntityKind::ALL
            .into_iter()
            .find(|k| path == k.endpoint() || path.starts_with(&format!("{}/", k.endpoint())))
        else {
            return not_found("Route not found");
        };
        let rest: Vec<String> = path[kind.endpoint().len()..]
            .split('/')
            .filter(|s| !s.is_empty())
            .map(decode)
            .collect();

        match (request.method, rest.as_slice()) {
            (Method::Get, []) => self.list(kind, &query),
            (Method::Post, []) => self.create(kind, request.body.clone()),
            (Method::Put, [id]) => self.update(kind, id, request.body.clone(), false),
            (Method::Put, [id, tail]) if tail == "status" => {
                self.update(kind, id, request.body.clone(), true)
            }
            (Method::Delete, [id]) => self.delete(kind, id),
            _ => not_found("Route not found"),
        }
    }

    fn list(&self, kind: EntityKind, query: &[(String, String)]) -> ApiResponse {
        let param = |key: &str| query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str());
        let page: u64 = param("page").and_then(|v| v.parse().ok()).unwrap_or(1);
        let limit: u64 = param("limit").and_then(|v| v.parse().ok()).unwrap_or(10);
        let search = param("search").map(str::to_lowercase);

        let rows: Vec<Value> = self
            .rows(kind)
            .into_iter()
            .filter(|row| {
                query
                    .iter()
                    .filter(|(k, _)| !matches!(k.as_str(), "page" | "limit" | "search"))
                    .all(|(k, v)| row.get(k).map(scalar_text).as_deref() == Some(v.as_str()))
            })
            .filter(|row| match &search {
                Some(needle) => row
                    .as_object()
                    .map(|o| o.values().any(|v| scalar_text(v).to_lowercase().contains(needle)))
                    .unwrap_or(false),
                None => true,
            })
            .collect();

        let total = rows.len() as u64;
        let items: Vec<Value> = rows
            .into_iter()
            .skip(((page.max(1) - 1) * limit) as usize)
            .take(limit as usize)
            .collect();
        ApiResponse::new(
            200,
            json!({
                "success": true,
                "data": items,
                "pagination": {"page": page, "limit": limit, "total": total},
            }),
        )
    }

    fn create(&self, kind: EntityKind, body: Option<Value>) -> ApiResponse {
        let mut state = self.state();
        state.next_id += 1;
        let id = format!("{}-{}", kind.cache_name(), state.next_id);
        let mut row = body.unwrap_or_else(|| json!({}));
        if let Some(obj) = row.as_object_mut() {
            obj.entry("id").or_insert(Value::String(id));
        }
        state.collections.entry(kind).or_default().push(row.clone());
        ApiResponse::new(201, json!({"success": true, "data": row}))
    }

    fn update(&self, kind: EntityKind, id: &str, body: Option<Value>, status_only: bool) -> ApiResponse {
        let mut state = self.state();
        let rows = state.collections.entry(kind).or_default();
        let Some(row) = rows.iter_mut().find(|r| record_id::from_value(r).as_deref() == Some(id)) else {
            return not_found("Record not found");
        };
        let patch = body.and_then(|b| b.as_object().cloned()).unwrap_or_default();
        if status_only && !patch.contains_key("status") {
            return ApiResponse::new(400, json!({"success": false, "message": "Status is required"}));
        }
        if let Some(obj) = row.as_object_mut() {
            for (k, v) in patch {
                obj.insert(k, v);
            }
        }
        ApiResponse::new(200, json!({"success": true, "data": row.clone()}))
    }

    fn delete(&self, kind: EntityKind, id: &str) -> ApiResponse {
        let mut state = self.state();
        let rows = state.collections.entry(kind).or_default();
        let before = rows.len();
        rows.retain(|r| record_id::from_value(r).as_deref() != Some(id));
        if rows.len() == before {
            return not_found("Record not found");
        }
        ApiResponse::new(200, json!({"success": true, "message": "Deleted"}))
    }

    fn settings(&self, request: &ApiRequest) -> ApiResponse {
        let mut state = self.state();
        if request.method == Method::Put {
            let mut merged = state.settings.as_object().cloned().unwrap_or_else(Map::new);
            if let Some(Value::Object(patch)) = &request.body {
                merged.extend(patch.clone());
            }
            state.settings = Value::Object(merged);
        }
        ApiResponse::new(200, json!({"success": true, "data": state.settings.clone()}))
    }
}

#[async_trait(?Send)]
impl Transport for FakeApi {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let queued = {
            let mut state = self.state();
            state.requests.push(request.clone());
            let position = state.queued.iter().position(|(m, _)| *m == request.method);
            position.and_then(|i| state.queued.remove(i))
        };
        match queued {
            Some((_, outcome)) => outcome,
            None => Ok(self.route(&request)),
        }
    }
}

fn not_found(message: &str) -> ApiResponse {
    ApiResponse::new(404, json!({"success": false, "message": message}))
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw).map(|s| s.into_owned()).unwrap_or_else(|_| raw.to_string())
}

fn split_path(full: &str) -> (String, Vec<(String, String)>) {
    let (path, query) = full.split_once('?').unwrap_or((full, ""));
    let pairs = query
        .split('&')
        .filter(|p| !p.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(k), decode(v))
        })
        .collect();
    (path.to_string(), pairs)
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
