//! Embed provider URL template.

use crate::config::DEFAULT_EMBED_TEMPLATE;

/// Placeholder replaced by the entry's embed id.
pub const EMBED_ID_PLACEHOLDER: &str = "{id}";

/// Turns an opaque embed id into a playable URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedTemplate {
    template: String,
}

impl EmbedTemplate {
    /// A template without a `{id}` placeholder gets the id appended.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn url_for(&self, embed_id: &str) -> String {
        if self.template.contains(EMBED_ID_PLACEHOLDER) {
            self.template.replace(EMBED_ID_PLACEHOLDER, embed_id)
        } else {
            format!("{}{}", self.template, embed_id)
        }
    }
}

impl Default for EmbedTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_EMBED_TEMPLATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_streamable() {
        assert_eq!(
            EmbedTemplate::default().url_for("abc123"),
            "https://streamable.com/e/abc123"
        );
    }

    #[test]
    fn test_custom_template() {
        let template = EmbedTemplate::new("https://player.example/embed/{id}?autoplay=0");
        assert_eq!(
            template.url_for("x9"),
            "https://player.example/embed/x9?autoplay=0"
        );
        assert_eq!(EmbedTemplate::new("https://v.example/").url_for("q"), "https://v.example/q");
    }
}
