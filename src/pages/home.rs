//! Home page - hero, featured videos and shorts, about.
//!
//! Tracks which section is in view while scrolling and moves the nav
//! marker accordingly.

use dioxus::prelude::*;
use futures::StreamExt;
use portfolio_core::{EntryKind, ViewMode};

use crate::browser;
use crate::components::{CatalogSection, Footer, NavHeader, SectionLink, SessionEditor};
use crate::context::use_nav;

#[component]
pub fn Home() -> Element {
    let mut nav = use_nav();

    // Re-evaluate the active section on every scroll event
    use_hook(move || {
        let (listener, mut events) = browser::scroll_events();
        spawn(async move {
            let _listener = listener;
            while events.next().await.is_some() {
                let sections = browser::section_bounds();
                let mut next = nav.peek().clone();
                if next.on_scroll(browser::scroll_y(), &sections) {
                    nav.set(next);
                }
            }
        })
    });

    rsx! {
        NavHeader { current: ViewMode::Featured }

        main { class: "home",
            section { id: "home", class: "hero",
                h1 { class: "page-title", "Video Portfolio" }
                p { class: "tagline", "Stories, experiments and short clips." }
                SectionLink { href: "#videos", class: "btn-primary", "Watch videos" }
            }

            section { id: "videos", class: "catalog-section",
                h2 { class: "section-header", "Featured Videos" }
                CatalogSection { kind: EntryKind::Video, mode: ViewMode::Featured }
            }

            section { id: "shorts", class: "catalog-section",
                h2 { class: "section-header", "Featured Shorts" }
                CatalogSection { kind: EntryKind::Short, mode: ViewMode::Featured }
            }

            section { id: "about", class: "about-section",
                h2 { class: "section-header", "About" }
                p { class: "body-text",
                    "A collection of long-form videos and shorts. Pick any card to watch it in full."
                }
                SessionEditor {}
            }
        }

        Footer {}
    }
}
