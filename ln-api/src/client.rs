//! HTTP client for the Lab Nocturne Images API.
//!
//! `ApiClient` owns the base URL and a `Session`. Every JSON endpoint goes
//! through [`ApiClient::request`], the single place where non-success
//! responses are turned into `LnError::Api`.

use std::ops::Deref;

use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use ln_core::config::{AppConfig, ClientConfig};
use ln_core::error::{LnError, LnResult};

use crate::response::ErrorEnvelope;
use crate::session::Session;

/// Client for the Lab Nocturne Images API.
///
/// Holds no state besides its configuration and transport, so a single
/// instance can be shared (e.g. behind an `Arc`) by concurrent tasks.
#[derive(Debug)]
pub struct ApiClient {
    pub(crate) session: Session,
    /// Service root without trailing slash (e.g. "https://images.labnocturne.com").
    base_url: String,
}

impl ApiClient {
    /// Create a client from configuration. No network call is made.
    pub fn new(config: &ClientConfig) -> LnResult<Self> {
        config.validate()?;
        let session = Session::new(config)?;
        Ok(Self::with_session(&config.base_url, session))
    }

    /// Create a client for `api_key` against the production endpoint.
    pub fn from_api_key(api_key: &str) -> LnResult<Self> {
        Self::new(&ClientConfig::new(api_key))
    }

    /// Create a client around an explicitly built transport.
    pub fn with_session(base_url: &str, session: Session) -> Self {
        Self {
            session,
            base_url: AppConfig::normalize_base_url(base_url),
        }
    }

    /// Get the base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for an endpoint path.
    pub(crate) fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Issue a JSON request and decode the success body into `T`.
    ///
    /// Non-success statuses become `LnError::Api` carrying the body's
    /// `error.message`, or "Unknown error" when there is none.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
    ) -> LnResult<T> {
        let http = self.session.http()?;
        debug!("{} {}", method, endpoint);

        let mut builder = http.request(method.clone(), self.url(endpoint));
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(b) = body {
            builder = builder.json(b);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = ErrorEnvelope::message_from_body(&bytes);
            warn!("{} {} failed with {}: {}", method, endpoint, status.as_u16(), message);
            return Err(LnError::Api {
                status: status.as_u16(),
                message,
            });
        }

        parse_body(&bytes)
    }

    /// Release the transport. Calling this more than once is a no-op; any
    /// request made afterwards fails with `LnError::Closed`.
    pub fn close(&self) {
        if self.session.close() {
            info!("closed client for {}", self.base_url);
        }
    }

    /// Whether the client has been closed.
    pub fn is_closed(&self) -> bool {
        self.session.is_closed()
    }

    /// Borrow the client through a guard that closes it when dropped.
    pub fn scoped(&self) -> ClientGuard<'_> {
        ClientGuard { client: self }
    }
}

/// Scoped handle: dereferences to the client and closes it on every exit
/// path (normal return, early return, `?`, unwinding).
#[derive(Debug)]
pub struct ClientGuard<'a> {
    client: &'a ApiClient,
}

impl Deref for ClientGuard<'_> {
    type Target = ApiClient;

    fn deref(&self) -> &ApiClient {
        self.client
    }
}

impl Drop for ClientGuard<'_> {
    fn drop(&mut self) {
        self.client.close();
    }
}

/// Map a non-success status to `LnError::Http`, for the endpoints that do
/// not inspect error bodies.
pub(crate) fn check_status(response: Response) -> LnResult<Response> {
    let status = response.status();
    if !status.is_success() {
        warn!("{} returned {}", response.url().path(), status.as_u16());
        return Err(LnError::http(status));
    }
    Ok(response)
}

/// Decode a success body.
pub(crate) fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> LnResult<T> {
    serde_json::from_slice(bytes)
        .map_err(|e| LnError::Serialization(format!("failed to parse response: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use reqwest::Method;
    use serde_json::json;

    fn client_for(server: &MockServer) -> ApiClient {
        let config = ClientConfig::new("ln_test_unit").with_base_url(&server.base_url());
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn test_new_requires_api_key() {
        let err = ApiClient::new(&ClientConfig::new("")).unwrap_err();
        assert!(matches!(err, LnError::MissingConfig(_)));
    }

    #[test]
    fn test_default_base_url() {
        let client = ApiClient::from_api_key("ln_test_abc").unwrap();
        assert_eq!(client.base_url(), "https://images.labnocturne.com");
        assert_eq!(client.url("/stats"), "https://images.labnocturne.com/stats");
    }

    #[test]
    fn test_with_session_normalizes_base_url() {
        let session = Session::new(&ClientConfig::new("ln_test_abc")).unwrap();
        let client = ApiClient::with_session("http://localhost:8080/", session);
        assert_eq!(client.url("/files"), "http://localhost:8080/files");
    }

    #[tokio::test]
    async fn test_request_sends_json_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/echo")
                    .header("authorization", "Bearer ln_test_unit")
                    .json_body(json!({"name": "photo.jpg"}));
                then.status(200).json_body(json!({"ok": true}));
            })
            .await;

        let client = client_for(&server);
        let body = json!({"name": "photo.jpg"});
        let resp: serde_json::Value = client
            .request(Method::POST, "/echo", &[], Some(&body))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(resp, json!({"ok": true}));
    }

    #[tokio::test]
    async fn test_request_error_without_message_field() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/stats");
                then.status(403).json_body(json!({"error": {"code": "forbidden"}}));
            })
            .await;

        let client = client_for(&server);
        let err = client
            .request::<serde_json::Value>(Method::GET, "/stats", &[], None)
            .await
            .unwrap_err();
        assert_eq!(err.api_message(), Some("Unknown error"));
        assert_eq!(err.status(), Some(403));
    }

    #[tokio::test]
    async fn test_request_success_with_invalid_json() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/stats");
                then.status(200).body("<html>maintenance</html>");
            })
            .await;

        let client = client_for(&server);
        let err = client
            .request::<serde_json::Value>(Method::GET, "/stats", &[], None)
            .await
            .unwrap_err();
        assert!(matches!(err, LnError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_closed_client_makes_no_request() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/stats");
                then.status(200).json_body(json!({}));
            })
            .await;

        let client = client_for(&server);
        client.close();
        let err = client
            .request::<serde_json::Value>(Method::GET, "/stats", &[], None)
            .await
            .unwrap_err();

        assert!(matches!(err, LnError::Closed));
        assert_eq!(mock.hits_async().await, 0);
    }
}
