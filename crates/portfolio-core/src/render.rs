//! Render targets.
//!
//! A [`RenderTarget`] is anything that can clear, append and replace nodes.
//! The renderers in this module turn view models into [`Node`] trees and
//! push them into a target. Text and attribute values are data, never
//! markup: [`Node::to_markup`] escapes them, so a title like `<script>`
//! shows up as visible text.

use crate::text::escape_html;
use crate::view::{CardModel, ErrorPanel, GridView, ModalContent, SectionView};

/// Play triangle drawn over the card embed.
const PLAY_PATH: &str = "M8 5v14l11-7z";

/// A minimal element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element {
        tag: &'static str,
        attrs: Vec<(&'static str, String)>,
        children: Vec<Node>,
    },
    Text(String),
}

impl Node {
    pub fn element(tag: &'static str) -> Self {
        Node::Element {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Add an attribute. No-op on text nodes.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        if let Node::Element { attrs, .. } = &mut self {
            attrs.push((name, value.into()));
        }
        self
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    /// Add a child. No-op on text nodes.
    pub fn child(mut self, node: Node) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    pub fn children(self, nodes: impl IntoIterator<Item = Node>) -> Self {
        nodes.into_iter().fold(self, Node::child)
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element { children, .. } => children.iter().map(Node::text_content).collect(),
        }
    }

    /// Serialize to HTML with all text and attribute values escaped.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Element { tag, attrs, children } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_html(value));
                    out.push('"');
                }
                out.push('>');
                for child in children {
                    child.write_markup(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

/// Something rendered output can be pushed into.
pub trait RenderTarget {
    fn clear(&mut self);
    fn append(&mut self, node: Node);

    /// Swap everything currently in the target for `node`.
    fn replace(&mut self, node: Node) {
        self.clear();
        self.append(node);
    }
}

/// Collects nodes and serializes them to an HTML fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupTarget {
    nodes: Vec<Node>,
}

impl MarkupTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn to_html(&self) -> String {
        self.nodes.iter().map(Node::to_markup).collect()
    }
}

impl RenderTarget for MarkupTarget {
    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn append(&mut self, node: Node) {
        self.nodes.push(node);
    }
}

/// One card: embed with play overlay, then the info region.
pub fn card_node(card: &CardModel) -> Node {
    let play_icon = Node::element("svg")
        .class("play-icon")
        .attr("viewBox", "0 0 24 24")
        .attr("width", "64")
        .attr("height", "64")
        .child(Node::element("path").attr("d", PLAY_PATH));

    Node::element("div")
        .class("video-card")
        .attr("data-entry-id", card.id.to_string())
        .child(
            Node::element("div")
                .class("video-embed")
                .child(
                    Node::element("iframe")
                        .class("video-iframe")
                        .attr("src", card.embed_url.as_str())
                        .attr("loading", "lazy")
                        .attr("allowfullscreen", "true"),
                )
                .child(
                    Node::element("div")
                        .class("video-overlay")
                        .child(Node::element("div").class("play-button-overlay").child(play_icon)),
                ),
        )
        .child(
            Node::element("div")
                .class("video-info")
                .child(Node::element("h3").class("video-title").child(Node::text(card.title.as_str())))
                .child(
                    Node::element("p")
                        .class("video-description")
                        .child(Node::text(card.summary.as_str())),
                ),
        )
}

/// Modal body for one entry, with the full description.
pub fn modal_node(content: &ModalContent) -> Node {
    Node::element("div")
        .class("modal-content")
        .child(
            Node::element("div").class("modal-video-container").child(
                Node::element("iframe")
                    .class("modal-video")
                    .attr("src", content.embed_url.as_str())
                    .attr("allowfullscreen", "true"),
            ),
        )
        .child(
            Node::element("div")
                .class("modal-info")
                .child(
                    Node::element("h2")
                        .class("modal-title-field")
                        .child(Node::text(content.title.as_str())),
                )
                .child(
                    Node::element("p")
                        .class("modal-description-field")
                        .child(Node::text(content.description.as_str())),
                ),
        )
}

pub fn error_node(panel: &ErrorPanel) -> Node {
    let body = Node::element("div")
        .class("error-body")
        .child(Node::element("p").child(Node::text(panel.message.as_str())));
    let body = if panel.remedies.is_empty() {
        body
    } else {
        body.child(Node::element("ol").class("error-remedies").children(
            panel
                .remedies
                .iter()
                .map(|r| Node::element("li").child(Node::text(r.as_str()))),
        ))
    };

    Node::element("div")
        .class("grid-message error-panel")
        .child(Node::element("h3").child(Node::text(panel.heading.as_str())))
        .child(body)
}

/// Nodes making up a grid: the cards and, for an overflowing featured
/// grid, the trailing "more" link.
pub fn grid_nodes(grid: &GridView) -> Vec<Node> {
    match grid {
        GridView::Empty(placeholder) => vec![Node::element("div")
            .class("grid-message")
            .child(Node::element("h3").child(Node::text(placeholder.heading.as_str())))
            .child(Node::element("p").child(Node::text(placeholder.hint.as_str())))],
        GridView::Cards { cards, more } => {
            let mut nodes: Vec<Node> = cards.iter().map(card_node).collect();
            if let Some(more) = more {
                nodes.push(
                    Node::element("a")
                        .class("more-link")
                        .attr("href", more.href())
                        .child(Node::text(more.label.as_str())),
                );
            }
            nodes
        }
    }
}

/// Render a section into a target, replacing whatever it held.
pub fn render_section(target: &mut impl RenderTarget, view: &SectionView) {
    target.clear();
    match view {
        SectionView::Loading => {
            target.append(Node::element("div").class("loading").child(Node::element("div").class("spinner")))
        }
        SectionView::Failed(panel) => target.append(error_node(panel)),
        SectionView::Grid(grid) => {
            for node in grid_nodes(grid) {
                target.append(node);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CatalogEntry, EntryKind};
    use crate::view::{CardStyle, Placeholder};

    #[test]
    fn test_markup_escapes_text_and_attributes() {
        let node = Node::element("p")
            .attr("title", "\"quoted\"")
            .child(Node::text("<b>bold</b>"));
        assert_eq!(
            node.to_markup(),
            "<p title=\"&quot;quoted&quot;\">&lt;b&gt;bold&lt;/b&gt;</p>"
        );
    }

    #[test]
    fn test_replace_clears_previous_nodes() {
        let mut target = MarkupTarget::new();
        target.append(Node::text("old"));
        target.replace(Node::text("new"));
        assert_eq!(target.nodes(), &[Node::text("new")]);
    }

    #[test]
    fn test_card_node_structure() {
        let entry = CatalogEntry::new(4u64, EntryKind::Video, "Trip", "Short trip", "abc");
        let card = CardModel::from_entry(&entry, &CardStyle::default());
        let html = card_node(&card).to_markup();

        assert!(html.contains("class=\"video-overlay\""));
        assert!(html.contains("class=\"video-info\""));
        assert!(html.contains("src=\"https://streamable.com/e/abc\""));
        assert!(html.contains("data-entry-id=\"4\""));
    }

    #[test]
    fn test_render_empty_grid_placeholder() {
        let mut target = MarkupTarget::new();
        let view = SectionView::Grid(GridView::Empty(Placeholder::for_kind(
            &EntryKind::Video,
            "videodata.json",
        )));
        render_section(&mut target, &view);

        assert_eq!(target.nodes().len(), 1);
        assert!(target.to_html().contains("No videos available"));
    }

    #[test]
    fn test_modal_node_keeps_full_description() {
        let long = "word ".repeat(60);
        let entry = CatalogEntry::new(7u64, EntryKind::Short, "Clip & Co", long.trim(), "zz");
        let content = crate::view::ModalContent::from_entry(&entry, &crate::embed::EmbedTemplate::default());

        let html = modal_node(&content).to_markup();
        assert!(html.contains("src=\"https://streamable.com/e/zz\""));
        assert!(html.contains("Clip &amp; Co"));
        assert!(html.contains(long.trim()));
        assert!(!html.contains("..."));
    }

    #[test]
    fn test_text_content() {
        let node = Node::element("div")
            .child(Node::text("a"))
            .child(Node::element("span").child(Node::text("b")));
        assert_eq!(node.text_content(), "ab");
    }
}
