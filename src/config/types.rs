//! Client configuration types.

use crate::config::constants::{BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Client configuration.
///
/// Construct with struct-update syntax over [`Default`]:
///
/// ```
/// use tiu_client::ClientConfig;
///
/// let config = ClientConfig {
///     timeout_seconds: 30,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the portal. Defaults to the fixed production host; only
    /// meant to be overridden when pointing the client at a test server.
    pub base_url: String,

    /// Per-request timeout in seconds. There is no retry after a timeout.
    pub timeout_seconds: u64,

    /// Optional proxy URL (e.g. `http://localhost:8080`) applied to every
    /// request.
    pub proxy: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            proxy: None,
        }
    }
}
