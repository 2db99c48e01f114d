//! forge::http
//!
//! `reqwest`-backed request dispatcher.
//!
//! Every request carries HTTP basic auth and the fixed [`USER_AGENT_VALUE`].
//! No retries: a failed connection is returned as a [`TransportError`] and
//! any HTTP status is returned as-is.

use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;

use super::traits::{ApiDispatcher, ApiRequest, ApiResponse, TransportError};

/// User-Agent header value for API requests.
pub const USER_AGENT_VALUE: &str = concat!("pullr/", env!("CARGO_PKG_VERSION"));

/// HTTP dispatcher for the forge REST API.
#[derive(Debug, Clone, Default)]
pub struct HttpDispatcher {
    client: Client,
}

impl HttpDispatcher {
    /// Create a dispatcher with a fresh HTTP client.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

fn transport_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(err.to_string())
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else {
        TransportError::Request(err.to_string())
    }
}

#[async_trait]
impl ApiDispatcher for HttpDispatcher {
    async fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let ApiRequest {
            method,
            url,
            credentials,
            body,
        } = request;

        tracing::debug!(%method, %url, "dispatching forge request");

        let mut builder = self
            .client
            .request(method, &url)
            .basic_auth(&credentials.identity, Some(&credentials.secret))
            .header(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE))
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        tracing::debug!(status, "forge responded");

        Ok(ApiResponse { status, body })
    }
}
