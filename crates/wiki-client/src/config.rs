//! Client configuration
//!
//! The API base path is an explicit value injected at construction, fixed
//! for the lifetime of the client. There is no process-wide site URL.

use serde::{Deserialize, Serialize};

/// Configuration for [`crate::WikiDocsClient`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the host application, e.g. `https://chat.example.com`
    pub site_url: String,

    /// Identifier of the wiki plugin the document service is mounted under
    pub plugin_id: String,
}

impl ClientConfig {
    pub fn new(site_url: impl Into<String>, plugin_id: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
            plugin_id: plugin_id.into(),
        }
    }

    /// Full base path of the wiki document API:
    /// `{site_url}/plugins/{plugin_id}/api/v0`
    pub fn api_url(&self) -> String {
        format!(
            "{}/plugins/{}/api/v0",
            self.site_url.trim_end_matches('/'),
            self.plugin_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        let config = ClientConfig::new("https://chat.example.com", "com.example.wiki");
        assert_eq!(
            config.api_url(),
            "https://chat.example.com/plugins/com.example.wiki/api/v0"
        );
    }

    #[test]
    fn test_api_url_trims_trailing_slashes() {
        let config = ClientConfig::new("https://chat.example.com/", "wiki");
        assert_eq!(
            config.api_url(),
            "https://chat.example.com/plugins/wiki/api/v0"
        );

        let subpath = ClientConfig::new("https://example.com/chat//", "wiki");
        assert_eq!(
            subpath.api_url(),
            "https://example.com/chat/plugins/wiki/api/v0"
        );
    }
}
