//! Toast presentation settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Defaults reproduce the page's Bootstrap setup (top-right corner overlay,
//! `toastContainer` id). Pages may override them with a JSON
//! `<meta name="toast-config" content="...">` tag read by [`ToastConfig::load`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_CONTAINER_ID: &str = "toastContainer";
const DEFAULT_CONTAINER_CLASS: &str = "toast-container position-fixed top-0 end-0 p-3";
const DEFAULT_ID_PREFIX: &str = "toast-";
const DEFAULT_AUTO_DISMISS_MS: u64 = 5_000;
const DEFAULT_HIDE_FADE_MS: u64 = 150;

#[cfg(feature = "hydrate")]
const CONFIG_META_SELECTOR: &str = "meta[name=\"toast-config\"]";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid toast config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("toast config field `{0}` must not be empty")]
    EmptyField(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToastConfig {
    /// Element id of the shared container.
    pub container_id: String,
    /// Classes applied to a newly created container (anchor position).
    pub container_class: String,
    /// Prefix for per-toast element ids.
    pub id_prefix: String,
    /// Delay used by `notify_auto`.
    pub auto_dismiss_ms: u64,
    /// Length of the hide transition before the hidden event fires.
    pub hide_fade_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_owned(),
            container_class: DEFAULT_CONTAINER_CLASS.to_owned(),
            id_prefix: DEFAULT_ID_PREFIX.to_owned(),
            auto_dismiss_ms: DEFAULT_AUTO_DISMISS_MS,
            hide_fade_ms: DEFAULT_HIDE_FADE_MS,
        }
    }
}

impl ToastConfig {
    /// Parse a JSON override; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::EmptyField`] when an id field is blank.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.container_id.trim().is_empty() {
            return Err(ConfigError::EmptyField("containerId"));
        }
        if config.id_prefix.trim().is_empty() {
            return Err(ConfigError::EmptyField("idPrefix"));
        }
        Ok(config)
    }

    /// Read the page override, falling back to defaults.
    pub fn load() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(CONFIG_META_SELECTOR).ok().flatten())
                .and_then(|meta| meta.get_attribute("content"));
            match raw.as_deref().map(Self::from_json) {
                Some(Ok(config)) => config,
                Some(Err(e)) => {
                    log::warn!("ignoring toast config: {e}");
                    Self::default()
                }
                None => Self::default(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    #[must_use]
    pub fn auto_dismiss(&self) -> Duration {
        Duration::from_millis(self.auto_dismiss_ms)
    }

    #[must_use]
    pub fn hide_fade(&self) -> Duration {
        Duration::from_millis(self.hide_fade_ms)
    }
}
