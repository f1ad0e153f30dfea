//! Startup configuration for the remote document service.
//!
//! The only required setting is the API base URL. It is read once from the
//! host page before anything renders; a missing value is fatal and the app
//! shows an error screen instead of mounting.

/// Name of the `<meta>` tag carrying the API base URL.
pub const API_URL_META: &str = "docgen-api-url";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolve the configuration from the host page.
    ///
    /// Reads `<meta name="docgen-api-url" content="...">` from the document
    /// head. A trailing slash is stripped so paths can be appended directly.
    pub fn from_document() -> Result<Self, ConfigError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ConfigError::new("document is not available"))?;

        let selector = format!("meta[name=\"{}\"]", API_URL_META);
        let meta = document
            .query_selector(&selector)
            .ok()
            .flatten()
            .ok_or_else(|| ConfigError::missing())?;

        let content = meta.get_attribute("content").unwrap_or_default();
        let base_url = content.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ConfigError::missing());
        }

        Ok(Self::new(base_url))
    }
}

/// Fatal startup error: the app cannot talk to the document service.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub message: String,
}

impl ConfigError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn missing() -> Self {
        Self::new(format!(
            "Missing required configuration: <meta name=\"{}\"> with the API base URL",
            API_URL_META
        ))
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ConfigError {}
