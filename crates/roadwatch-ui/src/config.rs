//! Build-time UI configuration.
//!
//! Values are baked in by the bundler through environment variables:
//! - `ROADWATCH_HISTORY_MODE`: `web` (default) or `hash`.
//! - `ROADWATCH_API_BASE`: absolute or root-relative API base; the page origin when unset.
use thiserror::Error;

use crate::routing::{HistoryMode, RouterConfig};

/// Errors raised while parsing UI configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// History mode value was not recognised.
    #[error("unsupported history mode '{value}' (expected 'web' or 'hash')")]
    UnknownHistoryMode {
        /// Raw configured value.
        value: String,
    },
    /// API base was neither an http(s) URL nor a root-relative path.
    #[error("api base '{value}' must start with http://, https:// or /")]
    InvalidApiBase {
        /// Raw configured value.
        value: String,
    },
}

/// Settings resolved once at application boot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiConfig {
    /// History binding for the router.
    pub history: HistoryMode,
    /// Explicit API base without trailing slash; `None` means same origin.
    pub api_base: Option<String>,
}

impl UiConfig {
    /// Parse raw configuration values. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when either value is present but malformed.
    pub fn parse(history: Option<&str>, api_base: Option<&str>) -> Result<Self, ConfigError> {
        let history = match history.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => value.parse()?,
            None => HistoryMode::default(),
        };
        let api_base = api_base
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(normalize_api_base)
            .transpose()?;
        Ok(Self { history, api_base })
    }

    /// Configuration baked in at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a compiled-in value is malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::parse(
            option_env!("ROADWATCH_HISTORY_MODE"),
            option_env!("ROADWATCH_API_BASE"),
        )
    }

    /// Router configuration derived from these settings.
    #[must_use]
    pub const fn router(&self) -> RouterConfig {
        RouterConfig::new(self.history)
    }

    /// API base to use, falling back to the page `origin` when none is configured.
    #[must_use]
    pub fn api_base_url(&self, origin: &str) -> String {
        self.api_base
            .as_deref()
            .unwrap_or_else(|| origin.trim_end_matches('/'))
            .to_string()
    }
}

fn normalize_api_base(value: &str) -> Result<String, ConfigError> {
    let lower = value.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") || value.starts_with('/') {
        Ok(value.trim_end_matches('/').to_string())
    } else {
        Err(ConfigError::InvalidApiBase {
            value: value.to_string(),
        })
    }
}
