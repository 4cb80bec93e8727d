//! Portfolio configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields the stock portfolio setup.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogResult;

/// Catalog resource fetched relative to the page.
pub const DEFAULT_CATALOG_URL: &str = "videodata.json";
/// Streamable embed URL; `{id}` is replaced by the entry's embed id.
pub const DEFAULT_EMBED_TEMPLATE: &str = "https://streamable.com/e/{id}";
/// Number of entries shown per kind on the home page.
pub const DEFAULT_FEATURED_LIMIT: usize = 3;
/// Characters of description shown on a card.
pub const DEFAULT_DESCRIPTION_BUDGET: usize = 150;
/// Length of the modal close transition.
pub const DEFAULT_MODAL_CLEAR_DELAY_MS: u32 = 300;
/// Distance below the viewport top at which a section counts as "in view".
pub const DEFAULT_SCROLL_OFFSET_PX: f64 = 100.0;
/// Local storage key holding the theme.
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub catalog_url: String,
    pub embed_template: String,
    pub featured_limit: usize,
    pub description_budget: usize,
    pub modal_clear_delay_ms: u32,
    pub scroll_offset_px: f64,
    pub theme_storage_key: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            embed_template: DEFAULT_EMBED_TEMPLATE.to_string(),
            featured_limit: DEFAULT_FEATURED_LIMIT,
            description_budget: DEFAULT_DESCRIPTION_BUDGET,
            modal_clear_delay_ms: DEFAULT_MODAL_CLEAR_DELAY_MS,
            scroll_offset_px: DEFAULT_SCROLL_OFFSET_PX,
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_string(),
        }
    }
}

impl PortfolioConfig {
    /// Parse a config from JSON, filling unspecified fields with defaults.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}
