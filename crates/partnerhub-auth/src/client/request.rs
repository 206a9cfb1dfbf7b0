//! Replayable description of an outgoing API request.

use reqwest::Method;
use serde::Serialize;

use partnerhub_core::AppError;

/// An outgoing request to the dashboard API.
///
/// Holds everything needed to build the HTTP request, so the pipeline can
/// rebuild and replay it after a credential renewal. The pipeline sends,
/// renews at most once, replays at most once — a request is never renewed
/// twice.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// A new request with the given method and API path (e.g. `/api/links`).
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// A GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// A POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Append a query string pair.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attach a JSON body.
    pub fn json(mut self, body: &impl Serialize) -> Result<Self, AppError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_accumulates() {
        let request = ApiRequest::get("/api/products")
            .query("page", "2")
            .query("category", "beauty");
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/api/products");
        assert_eq!(request.query.len(), 2);
        assert!(request.body.is_none());
    }

    #[test]
    fn test_json_body_serialized_once() {
        let request = ApiRequest::post("/api/links")
            .json(&serde_json::json!({"productId": 9}))
            .expect("serializable body");
        assert_eq!(
            request.body,
            Some(serde_json::json!({"productId": 9}))
        );
    }
}
