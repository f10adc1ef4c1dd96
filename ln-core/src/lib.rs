//! Lab Nocturne Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the API client crate:
//! - Client configuration (API key, base URL, transport settings)
//! - A single error type covering API, HTTP, transport and filesystem failures
//! - Structured logging with tracing
//! - Platform directory lookup
//! - Common constants (default endpoint, documented sort orders)

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod platform;

// Re-export commonly used items at the crate root
pub use config::{AppConfig, ClientConfig};
pub use error::{LnError, LnResult};
pub use logging::init_logging;
pub use platform::Platform;
