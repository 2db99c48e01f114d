//! forge::traits
//!
//! Request dispatcher trait and the request/response types it exchanges.
//!
//! # Design
//!
//! The dispatcher is thin: one call, one HTTP request, the raw
//! status and body handed back. Interpreting the body is the caller's job (see
//! [`super::responses`]), and so is any retry policy.
//!
//! # Example
//!
//! ```ignore
//! use pullr::forge::{ApiDispatcher, ApiRequest};
//!
//! async fn assignees(dispatcher: &dyn ApiDispatcher, url: String, creds: Credentials) {
//!     let response = dispatcher.dispatch(ApiRequest::get(url, creds)).await?;
//!     println!("HTTP {}", response.status);
//! }
//! ```

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::auth::Credentials;

/// Transport-level failures: the request never produced an HTTP response.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// Could not connect (DNS failure, connection refused, TLS failure).
    #[error("connection failed: {0}")]
    Connect(String),

    /// The request timed out.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The request could not be built or the body could not be read.
    #[error("request failed: {0}")]
    Request(String),
}

/// One request to the forge API.
#[derive(Clone)]
pub struct ApiRequest {
    /// HTTP verb
    pub method: Method,
    /// Absolute URL
    pub url: String,
    /// Basic-auth pair
    pub credentials: Credentials,
    /// JSON body, if any
    pub body: Option<serde_json::Value>,
}

// Custom Debug to keep the body visible but the credentials out
impl std::fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("identity", &self.credentials.identity)
            .field("body", &self.body)
            .finish()
    }
}

impl ApiRequest {
    /// Build a `GET` request.
    pub fn get(url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            credentials,
            body: None,
        }
    }

    /// Build a `POST` request with a JSON body.
    pub fn post(url: impl Into<String>, credentials: Credentials, body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            credentials,
            body: Some(body),
        }
    }

    /// Build a `PATCH` request with a JSON body.
    pub fn patch(
        url: impl Into<String>,
        credentials: Credentials,
        body: serde_json::Value,
    ) -> Self {
        Self {
            method: Method::PATCH,
            url: url.into(),
            credentials,
            body: Some(body),
        }
    }
}

/// Raw response from the forge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw body text
    pub body: String,
}

impl ApiResponse {
    /// Create a response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Check for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body against an endpoint schema.
    ///
    /// A body that is empty or is not the expected JSON decodes to the
    /// schema's default value, so callers see absent fields rather than
    /// an error.
    pub fn decode<T: DeserializeOwned + Default>(&self) -> T {
        if self.body.trim().is_empty() {
            return T::default();
        }

        match serde_json::from_str(&self.body) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(status = self.status, error = %e, "response body did not match schema");
                T::default()
            }
        }
    }
}

/// Dispatcher for authenticated forge API calls.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Errors
///
/// Only transport failures are errors. Any HTTP status, including 4xx and
/// 5xx, is a successful dispatch and comes back as an [`ApiResponse`].
#[async_trait]
pub trait ApiDispatcher: Send + Sync {
    /// Perform exactly one request.
    async fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Probe {
        state: Option<String>,
    }

    fn creds() -> Credentials {
        Credentials::new("alice@example.com", "hunter2")
    }

    #[test]
    fn decode_valid_body() {
        let response = ApiResponse::new(200, r#"{"state":"open","extra":1}"#);
        assert_eq!(
            response.decode::<Probe>(),
            Probe {
                state: Some("open".to_string())
            }
        );
    }

    #[test]
    fn decode_empty_body_defaults() {
        assert_eq!(ApiResponse::new(204, "").decode::<Probe>(), Probe::default());
    }

    #[test]
    fn decode_non_json_defaults() {
        let response = ApiResponse::new(502, "<html>Bad Gateway</html>");
        assert_eq!(response.decode::<Probe>(), Probe::default());
    }

    #[test]
    fn success_range() {
        assert!(ApiResponse::new(200, "").is_success());
        assert!(ApiResponse::new(201, "").is_success());
        assert!(!ApiResponse::new(404, "").is_success());
        assert!(!ApiResponse::new(500, "").is_success());
    }

    #[test]
    fn request_builders() {
        let get = ApiRequest::get("https://forge/a", creds());
        assert_eq!(get.method, Method::GET);
        assert!(get.body.is_none());

        let post = ApiRequest::post("https://forge/b", creds(), serde_json::json!({"a": 1}));
        assert_eq!(post.method, Method::POST);
        assert_eq!(post.body, Some(serde_json::json!({"a": 1})));

        let patch = ApiRequest::patch("https://forge/c", creds(), serde_json::json!({}));
        assert_eq!(patch.method, Method::PATCH);
    }

    #[test]
    fn request_debug_hides_secret() {
        let request = ApiRequest::get("https://forge/a", creds());
        let debug = format!("{:?}", request);
        assert!(debug.contains("alice@example.com"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn transport_error_display() {
        assert_eq!(
            TransportError::Connect("refused".into()).to_string(),
            "connection failed: refused"
        );
        assert_eq!(
            TransportError::Timeout("30s".into()).to_string(),
            "request timed out: 30s"
        );
        assert_eq!(
            TransportError::Request("bad url".into()).to_string(),
            "request failed: bad url"
        );
    }
}
