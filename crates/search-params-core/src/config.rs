//! Configuration for the search parameter updater.
//!
//! The defaults reproduce the plain browser behavior: push a new entry with a
//! `null` state and an empty title, and defer to the host's feature check.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::Error;

/// How an updated address is recorded in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryMode {
    /// Add a new entry (`history.pushState`)
    #[default]
    Push,
    /// Overwrite the current entry (`history.replaceState`)
    Replace,
}

/// Whether query-string manipulation is treated as available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchParamsSupport {
    /// Ask the navigation session
    #[default]
    Auto,
    /// Assume the capability is present
    Enabled,
    /// Never touch the address
    Disabled,
}

/// Configuration for a [`crate::SearchParamsUpdater`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
pub struct UpdaterConfig {
    /// Push or replace history entries
    #[serde(default)]
    pub history_mode: HistoryMode,

    /// Title recorded with each entry
    #[validate(length(max = 1024))]
    #[serde(default)]
    pub title: String,

    /// Capability override
    #[serde(default)]
    pub search_params: SearchParamsSupport,
}

impl UpdaterConfig {
    /// Create a configuration with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn new() -> Result<Self, Error> {
        let config = Self::default();
        config
            .validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or fails validation.
    pub fn from_json(input: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the history mode.
    #[must_use]
    pub const fn with_history_mode(mut self, mode: HistoryMode) -> Self {
        self.history_mode = mode;
        self
    }

    /// Set the entry title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Override the capability check.
    #[must_use]
    pub const fn with_search_params(mut self, support: SearchParamsSupport) -> Self {
        self.search_params = support;
        self
    }
}
