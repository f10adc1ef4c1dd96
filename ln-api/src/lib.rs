//! Lab Nocturne API - HTTP client for the Lab Nocturne Images service.
//!
//! Authenticates with a bearer API key and covers the service's endpoints:
//! upload, paginated file listing, usage statistics, soft delete and test
//! key generation. Response bodies are returned as received; failures are
//! reported through `ln_core::LnError`.
//!
//! ```no_run
//! # async fn run() -> ln_core::LnResult<()> {
//! use ln_api::{ApiClient, ListFilesParams};
//!
//! let client = ApiClient::from_api_key("ln_test_abc")?;
//! let client = client.scoped();
//! let uploaded = client.upload("photo.jpg").await?;
//! let listing = client.list_files(&ListFilesParams::default()).await?;
//! println!(
//!     "{} -> {} ({} files)",
//!     uploaded.id().unwrap_or("?"),
//!     uploaded.url().unwrap_or("?"),
//!     listing.files().len()
//! );
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod endpoints;
pub mod response;
pub mod session;

// Re-export key types
pub use client::{ApiClient, ClientGuard};
pub use endpoints::files::ListFilesParams;
pub use endpoints::keys::{generate_test_key, generate_test_key_details};
pub use response::{
    DeleteResult, ErrorEnvelope, FileListing, FileSummary, Pagination, TestKey, UploadResult,
    UsageStats,
};
pub use session::Session;
