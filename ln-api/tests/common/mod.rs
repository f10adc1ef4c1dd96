//! Shared test utilities for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use httpmock::MockServer;
use ln_api::ApiClient;
use ln_core::config::ClientConfig;
use tempfile::TempDir;

/// API key used by every mocked client.
pub const TEST_API_KEY: &str = "ln_test_integration";

/// Expected `Authorization` header value for [`TEST_API_KEY`].
pub fn bearer() -> String {
    format!("Bearer {TEST_API_KEY}")
}

/// Build a client pointed at the mock server.
pub fn client_for(server: &MockServer) -> ApiClient {
    let config = ClientConfig::new(TEST_API_KEY).with_base_url(&server.base_url());
    ApiClient::new(&config).expect("failed to build test client")
}

/// Write `contents` to `name` inside a fresh temp dir.
/// Returns the path and the TempDir (must be held alive for the duration of the test).
pub fn temp_file(name: &str, contents: &[u8]) -> (PathBuf, TempDir) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("failed to write temp file");
    (path, dir)
}
