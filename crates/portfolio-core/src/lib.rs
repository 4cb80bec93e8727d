//! Video Portfolio Core Library
//!
//! Everything the portfolio pages do that does not need a browser:
//! loading and classifying the catalog, choosing the view for a page,
//! filtering and ordering entries, building card and modal content,
//! and the small state machines behind the modal, theme and navigation.
//!
//! ## Pipeline
//!
//! ```text
//! load_catalog ──▶ LoadState ──▶ section_view(kind, mode) ──▶ GridView ──▶ cards
//!                                      │
//!                                      └── query: filter ▸ sort by id desc ▸ slice
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::{build_grid, Catalog, CardStyle, CatalogEntry, EntryKind, ViewMode};
//!
//! let catalog = Catalog::new(vec![
//!     CatalogEntry::new(1u64, EntryKind::Video, "First", "Oldest upload", "a1"),
//!     CatalogEntry::new(2u64, EntryKind::Video, "Second", "Newest upload", "b2"),
//! ]);
//!
//! let grid = build_grid(&catalog, &EntryKind::Video, ViewMode::Featured, &CardStyle::default());
//! assert_eq!(grid.cards()[0].title, "Second");
//! ```

pub mod catalog;
pub mod config;
pub mod embed;
pub mod error;
pub mod loader;
pub mod modal;
pub mod nav;
pub mod query;
pub mod render;
pub mod route;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

// Re-exports
pub use catalog::{Catalog, LoadState};
pub use config::PortfolioConfig;
pub use embed::EmbedTemplate;
pub use error::{CatalogError, CatalogResult, LoadFailure};
pub use loader::{load_catalog, parse_catalog, CatalogSource, FetchResponse};
pub use modal::{ClearTicket, ModalController, ModalPhase};
pub use nav::{LinkTarget, NavState, SectionBounds};
pub use query::{query, query_with_limit, QueryResult};
pub use render::{MarkupTarget, Node, RenderTarget};
pub use route::{PageContext, ViewMode};
pub use text::{escape_html, truncate, truncate_description};
pub use theme::{MemoryStore, PreferenceStore, Theme, ThemeController};
pub use types::*;
pub use view::{
    build_grid, section_view, CardModel, CardStyle, ErrorPanel, GridView, ModalContent, MoreLink,
    Placeholder, SectionView,
};
