//! View models: what a catalog section, a card or the modal shows.
//!
//! These are plain data. The web app renders them with Dioxus components and
//! the markup target in [`crate::render`] renders them to HTML, so the
//! query/filter/sort path is testable without a document.

use crate::catalog::{Catalog, LoadState};
use crate::config::PortfolioConfig;
use crate::embed::EmbedTemplate;
use crate::error::LoadFailure;
use crate::query::query_with_limit;
use crate::route::ViewMode;
use crate::text::truncate;
use crate::types::{CatalogEntry, EntryId, EntryKind};

/// Shared settings for building cards.
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    pub embed: EmbedTemplate,
    pub description_budget: usize,
    pub featured_limit: usize,
    pub catalog_url: String,
}

impl From<&PortfolioConfig> for CardStyle {
    fn from(config: &PortfolioConfig) -> Self {
        Self {
            embed: EmbedTemplate::new(config.embed_template.clone()),
            description_budget: config.description_budget,
            featured_limit: config.featured_limit,
            catalog_url: config.catalog_url.clone(),
        }
    }
}

impl Default for CardStyle {
    fn default() -> Self {
        Self::from(&PortfolioConfig::default())
    }
}

/// One card in a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    pub id: EntryId,
    pub title: String,
    /// Description cut to the card budget.
    pub summary: String,
    pub embed_url: String,
    /// What the modal shows when the card is activated.
    pub full: ModalContent,
}

impl CardModel {
    pub fn from_entry(entry: &CatalogEntry, style: &CardStyle) -> Self {
        let full = ModalContent::from_entry(entry, &style.embed);
        Self {
            id: entry.id.clone(),
            title: entry.title.clone(),
            summary: truncate(&entry.description, style.description_budget),
            embed_url: full.embed_url.clone(),
            full,
        }
    }
}

/// Content of the modal overlay for one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalContent {
    pub id: EntryId,
    /// Together with `id`, identifies the entry (ids may repeat across kinds).
    pub kind: EntryKind,
    pub title: String,
    /// Full, untruncated description.
    pub description: String,
    pub embed_url: String,
}

impl ModalContent {
    pub fn from_entry(entry: &CatalogEntry, embed: &EmbedTemplate) -> Self {
        Self {
            id: entry.id.clone(),
            kind: entry.kind.clone(),
            title: entry.title.clone(),
            description: entry.description.clone(),
            embed_url: embed.url_for(&entry.embed_id),
        }
    }
}

/// Trailing "see more" link under a featured grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoreLink {
    pub target: ViewMode,
    pub label: String,
}

impl MoreLink {
    pub fn href(&self) -> &'static str {
        self.target.href()
    }
}

/// Heading and hint shown instead of an empty grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub heading: String,
    pub hint: String,
}

impl Placeholder {
    pub fn for_kind(kind: &EntryKind, catalog_url: &str) -> Self {
        Self {
            heading: format!("No {} available", kind.plural()),
            hint: format!("Please add your video embed IDs to {}", catalog_url),
        }
    }
}

/// The grid for one entry kind.
#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    Cards {
        cards: Vec<CardModel>,
        more: Option<MoreLink>,
    },
    Empty(Placeholder),
}

impl GridView {
    pub fn cards(&self) -> &[CardModel] {
        match self {
            GridView::Cards { cards, .. } => cards,
            GridView::Empty(_) => &[],
        }
    }

    pub fn more(&self) -> Option<&MoreLink> {
        match self {
            GridView::Cards { more, .. } => more.as_ref(),
            GridView::Empty(_) => None,
        }
    }
}

/// Build the grid for `kind` as shown in `mode`.
///
/// Queries once; the cards come out in the query's order.
pub fn build_grid(catalog: &Catalog, kind: &EntryKind, mode: ViewMode, style: &CardStyle) -> GridView {
    let result = query_with_limit(catalog.entries(), kind, mode, style.featured_limit);
    if result.is_empty() {
        return GridView::Empty(Placeholder::for_kind(kind, &style.catalog_url));
    }

    let more = if mode.is_featured() && result.has_more() {
        ViewMode::listing_for(kind).map(|target| MoreLink {
            target,
            label: format!("More {}", kind.plural()),
        })
    } else {
        None
    };

    GridView::Cards {
        cards: result
            .entries
            .iter()
            .map(|entry| CardModel::from_entry(entry, style))
            .collect(),
        more,
    }
}

/// Error panel shown in place of a grid when the load failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPanel {
    pub heading: String,
    pub message: String,
    /// Remediation steps; only the unserved-context panel has any.
    pub remedies: Vec<String>,
}

impl ErrorPanel {
    pub fn for_failure(failure: &LoadFailure) -> Self {
        let remedies = if failure.is_unserved() {
            vec![
                "Use Python: python -m http.server 8000, then open http://localhost:8000".to_string(),
                "Use Node.js: npx http-server, then open the provided URL".to_string(),
                "Use VS Code: install the \"Live Server\" extension and click \"Go Live\"".to_string(),
            ]
        } else {
            Vec::new()
        };

        Self {
            heading: "Error Loading Videos".to_string(),
            message: failure.user_message(),
            remedies,
        }
    }
}

/// What a catalog section on a page shows right now.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionView {
    Loading,
    Failed(ErrorPanel),
    Grid(GridView),
}

/// Map the page load state to what the section for `kind` shows.
///
/// Nothing is queried until the load has resolved.
pub fn section_view(state: &LoadState, kind: &EntryKind, mode: ViewMode, style: &CardStyle) -> SectionView {
    match state {
        LoadState::Loading => SectionView::Loading,
        LoadState::Failed(failure) => SectionView::Failed(ErrorPanel::for_failure(failure)),
        LoadState::Ready(catalog) => SectionView::Grid(build_grid(catalog, kind, mode, style)),
    }
}
