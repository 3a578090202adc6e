use super::error::ApiError;
use async_trait::async_trait;
use contracts::shared::api::server_message;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A request relative to the API base, e.g. `GET /api/news?page=1&limit=10`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Post, path: path.into(), body: Some(body) }
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Put, path: path.into(), body: Some(body) }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::Delete, path: path.into(), body: None }
    }
}

/// Status plus parsed body. Empty bodies are `Value::Null`; non-JSON bodies
/// are kept as a JSON string.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body of a 2xx response; any other status is an error regardless of body.
    pub fn into_success(self) -> Result<Value, ApiError> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(ApiError::Http {
                status: self.status,
                message: server_message(&self.body),
            })
        }
    }
}

/// Sends one request to the API. Implemented over `gloo-net` in the browser
/// and by an in-memory fake in tests.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_2xx_is_failure_even_with_success_body() {
        let response = ApiResponse::new(500, json!({"success": true}));
        assert_eq!(
            response.into_success(),
            Err(ApiError::Http { status: 500, message: None })
        );
    }

    #[test]
    fn test_error_body_message_is_kept() {
        let response = ApiResponse::new(404, json!({"message": "News not found"}));
        assert_eq!(
            response.into_success(),
            Err(ApiError::Http { status: 404, message: Some("News not found".to_string()) })
        );
    }

    #[test]
    fn test_no_content_is_success() {
        assert_eq!(ApiResponse::new(204, Value::Null).into_success(), Ok(Value::Null));
    }
}
