//! Catalog Section Component
//!
//! The grid for one entry kind in one view: a spinner while loading, the
//! error panel after a failed load, a placeholder when the kind has no
//! entries, otherwise the cards plus an optional "more" link.

use dioxus::prelude::*;
use portfolio_core::{section_view, CardStyle, EntryKind, GridView, SectionView, ViewMode};
use portfolio_ui::{EmptyPanel, ErrorMessage, LoadingSpinner};

use crate::app::Route;
use crate::components::VideoCard;
use crate::context::{use_catalog, use_config};

#[component]
pub fn CatalogSection(kind: EntryKind, mode: ViewMode) -> Element {
    let catalog = use_catalog();
    let config = use_config();
    let style = CardStyle::from(&config);

    let view = section_view(&catalog.read(), &kind, mode, &style);
    let grid_id = format!("{}Grid", kind.plural());

    let body = match view {
        SectionView::Loading => rsx! { LoadingSpinner {} },
        SectionView::Failed(panel) => rsx! { ErrorMessage { panel } },
        SectionView::Grid(GridView::Empty(placeholder)) => rsx! { EmptyPanel { placeholder } },
        SectionView::Grid(GridView::Cards { cards, more }) => rsx! {
            // Ids are not guaranteed unique, so the position is part of the key.
            for (position, card) in cards.into_iter().enumerate() {
                VideoCard { key: "{position}-{card.id}", card: card.clone() }
            }
            if let Some(more) = more {
                Link {
                    class: "more-link",
                    to: Route::for_mode(more.target),
                    "{more.label}"
                }
            }
        },
    };

    rsx! {
        div { id: "{grid_id}", class: "video-grid", {body} }
    }
}
