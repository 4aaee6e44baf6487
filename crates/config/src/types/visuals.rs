//! Configurable fallback texts for placeholder visuals.
//!
//! Responsibilities:
//! - Hold the optional registry texts for the loading, error, and empty placeholders.
//! - Hold the optional border title shared by themed placeholders.
//!
//! Does NOT handle:
//! - Turning texts into renderable visuals (see the TUI provider).
//! - Built-in texts (those live in `query-handler-core` and apply when a slot is unset).
//!
//! Invariants:
//! - `None` means "not configured": the slot stays empty in the registry.
//! - Texts are static; the error text does not interpolate the query error.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_TEXT_LEN;
use crate::loader::ConfigError;

/// Fallback texts registered by a provider built from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackVisuals {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<String>,
    /// Border title for themed placeholders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl FallbackVisuals {
    /// True when nothing is configured.
    pub fn is_empty(&self) -> bool {
        self.loading.is_none()
            && self.error.is_none()
            && self.empty.is_none()
            && self.title.is_none()
    }

    /// Overlay `other` onto `self`; fields set in `other` win.
    pub fn merge(self, other: FallbackVisuals) -> Self {
        Self {
            loading: other.loading.or(self.loading),
            error: other.error.or(self.error),
            empty: other.empty.or(self.empty),
            title: other.title.or(self.title),
        }
    }

    /// Reject blank or oversized texts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("visuals.loading", &self.loading),
            ("visuals.error", &self.error),
            ("visuals.empty", &self.empty),
            ("visuals.title", &self.title),
        ];

        for (name, value) in fields {
            let Some(text) = value else { continue };
            if text.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    var: name.to_string(),
                    message: "must not be blank".to_string(),
                });
            }
            let len = text.chars().count();
            if len > MAX_TEXT_LEN {
                return Err(ConfigError::InvalidValue {
                    var: name.to_string(),
                    message: format!("must be at most {} characters (got {})", MAX_TEXT_LEN, len),
                });
            }
        }

        Ok(())
    }
}
