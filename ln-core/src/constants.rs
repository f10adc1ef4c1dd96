//! Client-wide constants.

/// Application name, used for platform directories.
pub const APP_NAME: &str = "LabNocturne";

/// Client version.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://images.labnocturne.com";

/// Environment variable overriding the configured API key.
pub const ENV_API_KEY: &str = "LABNOCTURNE_API_KEY";

/// Environment variable overriding the configured base URL.
pub const ENV_BASE_URL: &str = "LABNOCTURNE_BASE_URL";

/// Default page for file listings.
pub const DEFAULT_PAGE: u32 = 1;

/// Default number of files per listing page.
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Default `User-Agent` sent by the session.
pub fn default_user_agent() -> String {
    format!("labnocturne-rust/{CLIENT_VERSION} ({})", crate::platform::Platform::current())
}

/// Sort orders accepted by `GET /files`.
///
/// These are forwarded verbatim; the server rejects anything else.
pub mod sort {
    pub const CREATED_DESC: &str = "created_desc";
    pub const CREATED_ASC: &str = "created_asc";
    pub const SIZE_DESC: &str = "size_desc";
    pub const SIZE_ASC: &str = "size_asc";
    pub const NAME_ASC: &str = "name_asc";
    pub const NAME_DESC: &str = "name_desc";

    /// All documented sort orders.
    pub const ALL: &[&str] = &[CREATED_DESC, CREATED_ASC, SIZE_DESC, SIZE_ASC, NAME_ASC, NAME_DESC];

    /// Default listing order.
    pub const DEFAULT: &str = CREATED_DESC;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_constants() {
        assert_eq!(sort::ALL.len(), 6);
        assert!(sort::ALL.contains(&sort::DEFAULT));
        assert!(sort::ALL.contains(&"name_desc"));
    }

    #[test]
    fn test_default_user_agent() {
        assert!(default_user_agent().starts_with("labnocturne-rust/"));
    }
}
