//! Usage statistics endpoint.

use reqwest::Method;

use ln_core::error::LnResult;

use crate::client::ApiClient;
use crate::response::UsageStats;

impl ApiClient {
    /// Get storage, file count and quota usage for the account.
    pub async fn get_stats(&self) -> LnResult<UsageStats> {
        self.request(Method::GET, "/stats", &[], None).await
    }
}
