//! Page configuration: element ids, class names, and display timings.
//!
//! Defaults match the portal templates. A page can override any subset by
//! handing a JSON object to [`UiConfig::from_json`]; absent fields keep their
//! defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

use crate::error::UiError;

pub const DEFAULT_ALERT_CONTAINER_ID: &str = "alert-container";
pub const DEFAULT_ALERT_DISPLAY_MS: u64 = 5000;
pub const DEFAULT_ALERT_FADE_MS: u64 = 300;
pub const DEFAULT_TOAST_DISPLAY_MS: u64 = 3000;
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const DEFAULT_REVEAL_CLASS: &str = "fade-in";
pub const DEFAULT_REVEAL_TARGETS: [&str; 2] = ["glass-card", "stat-card"];

/// Notification presenter settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    pub container_id: String,
    pub alert_display_ms: u64,
    pub alert_fade_ms: u64,
    pub toast_display_ms: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_ALERT_CONTAINER_ID.to_owned(),
            alert_display_ms: DEFAULT_ALERT_DISPLAY_MS,
            alert_fade_ms: DEFAULT_ALERT_FADE_MS,
            toast_display_ms: DEFAULT_TOAST_DISPLAY_MS,
        }
    }
}

impl NotifyConfig {
    #[must_use]
    pub fn alert_display(&self) -> Duration {
        Duration::from_millis(self.alert_display_ms)
    }

    #[must_use]
    pub fn alert_fade(&self) -> Duration {
        Duration::from_millis(self.alert_fade_ms)
    }

    #[must_use]
    pub fn toast_display(&self) -> Duration {
        Duration::from_millis(self.toast_display_ms)
    }
}

/// Scroll reveal settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Classes whose elements are observed.
    pub targets: Vec<String>,
    /// Class added once an element enters view.
    pub class: String,
    /// Fraction of the element that must be visible, in `[0, 1]`.
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            targets: DEFAULT_REVEAL_TARGETS.iter().map(|s| (*s).to_owned()).collect(),
            class: DEFAULT_REVEAL_CLASS.to_owned(),
            threshold: DEFAULT_REVEAL_THRESHOLD,
        }
    }
}

/// Element ids for the sidebar controls.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    pub panel_id: String,
    pub open_id: String,
    pub close_id: String,
    pub overlay_id: String,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            panel_id: "sidebar".to_owned(),
            open_id: "hamburger-btn".to_owned(),
            close_id: "close-sidebar".to_owned(),
            overlay_id: "sidebar-overlay".to_owned(),
        }
    }
}

/// Top-level configuration for a page.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub notify: NotifyConfig,
    pub reveal: RevealConfig,
    pub sidebar: SidebarConfig,
}

impl UiConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] for malformed JSON and
    /// [`UiError::InvalidConfig`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> Result<(), UiError> {
        let threshold = self.reveal.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(UiError::InvalidConfig {
                field: "reveal.threshold",
                reason: format!("{threshold} is outside [0, 1]"),
            });
        }
        if self.notify.container_id.trim().is_empty() {
            return Err(UiError::InvalidConfig {
                field: "notify.container_id",
                reason: "must not be empty".to_owned(),
            });
        }
        if self.reveal.class.trim().is_empty() {
            return Err(UiError::InvalidConfig { field: "reveal.class", reason: "must not be empty".to_owned() });
        }
        Ok(())
    }
}
