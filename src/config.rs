use crate::dom::WaitOptions;
use crate::error::{PageError, Result};
use crate::outline::OutlineSelectors;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding [`PageConfig::base_url`]
pub const BASE_URL_ENV: &str = "LMS_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8003";

/// Settings shared by every page object of a test session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// LMS root, without a trailing slash
    pub base_url: String,
    pub wait: WaitOptions,
    pub selectors: OutlineSelectors,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            wait: WaitOptions::default(),
            selectors: OutlineSelectors::default(),
        }
    }
}

impl PageConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string(), ..Self::default() }
    }

    /// Defaults, with the base URL taken from `LMS_BASE_URL` when set
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// Load from a JSON file; missing keys take their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| PageError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json_str(&raw).map_err(|e| PageError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let mut config: PageConfig =
            serde_json::from_str(raw).map_err(|e| PageError::Config(format!("Invalid page config: {}", e)))?;
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        if config.base_url.is_empty() {
            return Err(PageError::Config("base_url must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Builder method: set wait bounds
    pub fn with_wait(mut self, wait: WaitOptions) -> Self {
        self.wait = wait;
        self
    }

    /// `{base_url}/courses/{course_id}/{path}`
    pub fn course_url(&self, course_id: &str, path: &str) -> String {
        format!("{}/courses/{}/{}", self.base_url, course_id, path)
    }
}
