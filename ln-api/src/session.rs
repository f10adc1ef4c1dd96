//! The HTTP transport owned by an `ApiClient`.
//!
//! A `Session` wraps a `reqwest::Client` built with the client's default
//! headers (bearer credential, user agent) and optional timeouts. Closing
//! the session drops its transport; later requests fail with
//! `LnError::Closed`.

use std::sync::RwLock;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;

use ln_core::config::ClientConfig;
use ln_core::error::{LnError, LnResult};

/// Owned HTTP transport with persistent default headers.
pub struct Session {
    inner: RwLock<Option<Client>>,
}

impl Session {
    /// Build a transport that sends `Authorization: Bearer <api_key>` on
    /// every request.
    pub fn new(config: &ClientConfig) -> LnResult<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key.trim()))
            .map_err(|_| LnError::Config("api key contains invalid header characters".into()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str());

        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        if let Some(ms) = config.connect_timeout_ms {
            builder = builder.connect_timeout(Duration::from_millis(ms));
        }

        let client = builder
            .build()
            .map_err(|e| LnError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self::from_client(client))
    }

    /// Wrap an already configured transport. The caller is responsible for
    /// its default headers.
    pub fn from_client(client: Client) -> Self {
        Self {
            inner: RwLock::new(Some(client)),
        }
    }

    /// Handle to the live transport.
    pub(crate) fn http(&self) -> LnResult<Client> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard.as_ref().cloned().ok_or(LnError::Closed)
    }

    /// Drop the transport. Returns false if it was already closed.
    pub fn close(&self) -> bool {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        guard.take().is_some()
    }

    /// Whether `close` has been called.
    pub fn is_closed(&self) -> bool {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).is_none()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("closed", &self.is_closed())
            .finish()
    }
}
