//! Router configuration: DOM hooks and the classes used for link state.
//!
//! The page may override any field with a JSON block:
//! `<script type="application/json" id="shell-config">{ ... }</script>`.
//! Missing fields keep their defaults.

use serde::Deserialize;

/// Id of the optional JSON override block in the host page
pub const CONFIG_ELEMENT_ID: &str = "shell-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid router config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub content_container_id: String,
    pub breadcrumb_id: String,
    /// Elements reclassified on every dispatch
    pub nav_link_selector: String,
    /// Elements whose clicks are intercepted
    pub link_selector: String,
    pub active_classes: Vec<String>,
    pub muted_classes: Vec<String>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            content_container_id: "content-area".to_string(),
            breadcrumb_id: "page-breadcrumb".to_string(),
            nav_link_selector: ".nav-link".to_string(),
            link_selector: "a[data-page]".to_string(),
            active_classes: vec!["text-text-main".to_string(), "bg-surface".to_string()],
            muted_classes: vec!["text-text-muted".to_string()],
        }
    }
}

impl RouterConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the override block from the current document, if any.
    pub fn load_from_document() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("{e}; using defaults");
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}
