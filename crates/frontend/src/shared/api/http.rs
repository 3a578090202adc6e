use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::system::session::storage;
use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use serde_json::Value;

/// Browser transport over `fetch` (gloo-net).
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base: String,
}

impl HttpTransport {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base.trim_end_matches('/'), path)
    }

    fn builder(&self, request: &ApiRequest) -> RequestBuilder {
        let url = self.url(&request.path);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        let builder = builder.header("Accept", "application/json");
        match storage::get_access_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        log::debug!("{} {}", request.method.as_str(), request.path);
        let builder = self.builder(&request);

        let response = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;

        Ok(ApiResponse::new(status, parse_body(&text)))
    }
}

/// Empty body is `Null`; a body that is not JSON is kept as a string.
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(""), Value::Null);
        assert_eq!(parse_body("  \n"), Value::Null);
        assert_eq!(parse_body(r#"{"success":true}"#), json!({"success": true}));
        assert_eq!(parse_body("Bad Gateway"), json!("Bad Gateway"));
    }

    #[test]
    fn test_url_joins_base() {
        let transport = HttpTransport::new("http://localhost:5000/");
        assert_eq!(transport.url("/api/news?page=1"), "http://localhost:5000/api/news?page=1");
    }
}
