use crate::errors::{ApiError, Result};
use po_core::ApiPath;
use url::Url;

/// Where the development server mounts the API
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api/";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "PO_MANAGER_API_URL";

/// Trait for providing configuration to the API client
/// This allows the main application to implement config without circular dependencies
pub trait ApiConfig {
    type Error;

    /// Get the base URL for the API (optional, defaults to the local server)
    fn get_base_url(&self) -> std::result::Result<Option<String>, Self::Error> {
        Ok(None)
    }
}

/// Immutable settings shared by every request of a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    default_headers: Vec<(String, String)>,
}

impl ClientConfig {
    /// Parse `base_url` and attach the JSON content-type default header
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ApiError::Config(format!("Invalid base URL '{}': {}", base_url, e)))?;

        if parsed.cannot_be_a_base() {
            return Err(ApiError::Config(format!(
                "Base URL '{}' cannot have path segments",
                base_url
            )));
        }

        Ok(Self {
            base_url: parsed,
            default_headers: vec![("Content-Type".to_string(), "application/json".to_string())],
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn default_headers(&self) -> &[(String, String)] {
        &self.default_headers
    }

    /// Resolve an API path against the base URL.
    ///
    /// Each segment is percent-encoded on its own and the trailing slash the
    /// server router requires is always kept.
    pub fn url_for(&self, path: &ApiPath) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ApiError::Config(format!("Base URL '{}' cannot be a base", self.base_url))
            })?;
            segments.pop_if_empty().extend(path.segments()).push("");
        }
        Ok(url)
    }
}
