//! Listing pages - every entry of one kind.

use dioxus::prelude::*;
use portfolio_core::ViewMode;

use crate::components::{CatalogSection, Footer, NavHeader};
use crate::pages::Home;

/// All videos.
#[component]
pub fn Videos() -> Element {
    rsx! { Listing { mode: ViewMode::AllVideos } }
}

/// All shorts.
#[component]
pub fn Shorts() -> Element {
    rsx! { Listing { mode: ViewMode::AllShorts } }
}

/// Any other path, e.g. `/index.html` or `/site/videos`: pick the view
/// from the path.
#[component]
pub fn Fallback(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    let mode = ViewMode::from_path(&path);
    tracing::debug!(%path, %mode, "Resolved page by path");

    if mode.is_featured() {
        rsx! { Home {} }
    } else {
        rsx! { Listing { mode } }
    }
}

#[component]
pub fn Listing(mode: ViewMode) -> Element {
    let heading = match mode {
        ViewMode::AllShorts => "All Shorts",
        _ => "All Videos",
    };

    rsx! {
        NavHeader { current: mode }

        main { class: "listing",
            section { class: "catalog-section",
                h1 { class: "section-header", "{heading}" }
                for kind in mode.kinds() {
                    CatalogSection { key: "{kind}", kind: kind.clone(), mode }
                }
            }
        }

        Footer {}
    }
}
