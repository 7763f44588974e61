//! Runtime Configuration
//!
//! The Reports Service base URL is baked in at build time from
//! `REPORTS_API_URL` and handed to the app explicitly at startup.

use thiserror::Error;

/// Rows per table page
pub const PAGE_SIZE: usize = 10;

/// How long a notice stays on screen
pub const NOTICE_TTL_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("REPORTS_API_URL was not set when this app was built")]
    Missing,
    #[error("REPORTS_API_URL must be an http(s) URL, got {0:?}")]
    InvalidUrl(String),
}

/// Location of the Reports Service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Missing);
        }
        let has_host = ["http://", "https://"]
            .iter()
            .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.trim_matches('/').is_empty()));
        if !has_host {
            return Err(ConfigError::InvalidUrl(trimmed.to_string()));
        }
        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve from the value captured at compile time
    pub fn from_build_env() -> Result<Self, ConfigError> {
        match option_env!("REPORTS_API_URL") {
            Some(raw) => Self::new(raw),
            None => Err(ConfigError::Missing),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an absolute path (starting with `/`) onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
