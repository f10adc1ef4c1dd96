//! Test key generation. Needs no client and sends no credentials.

use ln_core::config::AppConfig;
use ln_core::constants;
use ln_core::error::{LnError, LnResult};
use tracing::debug;

use crate::client::{check_status, parse_body};
use crate::response::TestKey;

/// Request a new test API key and return it.
///
/// Uses the production endpoint when `base_url` is `None`. A non-success
/// status fails with `LnError::Http`; a body without a string `api_key`
/// fails with `LnError::Serialization`.
pub async fn generate_test_key(base_url: Option<&str>) -> LnResult<String> {
    let details = generate_test_key_details(base_url).await?;
    details
        .api_key()
        .map(str::to_string)
        .ok_or_else(|| LnError::Serialization("response has no `api_key` field".into()))
}

/// Like [`generate_test_key`], returning the whole response (key type,
/// limits, docs link).
pub async fn generate_test_key_details(base_url: Option<&str>) -> LnResult<TestKey> {
    let base = AppConfig::normalize_base_url(base_url.unwrap_or(constants::DEFAULT_BASE_URL));
    let http = reqwest::Client::builder()
        .user_agent(constants::default_user_agent())
        .build()
        .map_err(|e| LnError::Config(format!("failed to build HTTP client: {e}")))?;

    debug!("GET /key");
    let response = http.get(format!("{base}/key")).send().await?;
    let response = check_status(response)?;
    let body = response.bytes().await?;
    parse_body(&body)
}
