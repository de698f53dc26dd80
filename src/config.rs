//! Service configuration
//!
//! Deployment-level settings the host application loads at startup and
//! hands to the helpers: where the service is reachable and which API
//! version path its resources live under.

use crate::error::Result;
use crate::uri::ServiceUrl;
use serde::{Deserialize, Serialize};

/// Deployment configuration for link construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Externally visible base URL of the service,
    /// e.g. `https://idp.example.com/t/carbon.super/api/server`
    pub base_url: String,

    /// API version path component prefixed to resource paths
    #[serde(default = "default_api_path")]
    pub api_path: String,
}

fn default_api_path() -> String {
    "v1/".to_string()
}

impl ServiceConfig {
    /// Create a config with the default API version path
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_path: default_api_path(),
        }
    }

    /// Override the API version path component
    #[must_use]
    pub fn with_api_path(mut self, api_path: impl Into<String>) -> Self {
        self.api_path = api_path.into();
        self
    }

    /// Build the URI resolver anchored at this deployment
    ///
    /// An unparsable base URL surfaces here, at startup, rather than on
    /// the first paged request.
    pub fn resolver(&self) -> Result<ServiceUrl> {
        ServiceUrl::new(&self.base_url, &self.api_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_with_default_api_path() {
        let config: ServiceConfig =
            serde_json::from_str(r#"{"base_url": "https://idp.example.com"}"#).unwrap();

        assert_eq!(config.base_url, "https://idp.example.com");
        assert_eq!(config.api_path, "v1/");
    }

    #[test]
    fn test_explicit_api_path() {
        let config: ServiceConfig = serde_json::from_str(
            r#"{"base_url": "https://idp.example.com", "api_path": "api/server/v2/"}"#,
        )
        .unwrap();

        assert_eq!(config.api_path, "api/server/v2/");
    }

    #[test]
    fn test_resolver_roundtrip() {
        let config = ServiceConfig::new("https://idp.example.com").with_api_path("v1/");
        let resolver = config.resolver().unwrap();
        assert_eq!(resolver.base().as_str(), "https://idp.example.com/v1/");
    }

    #[test]
    fn test_invalid_base_url_fails_at_startup() {
        let config = ServiceConfig::new("::not-a-url::");
        assert!(config.resolver().is_err());
    }
}
