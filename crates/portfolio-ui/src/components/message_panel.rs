//! Full-width panels that stand in for a grid: loading spinner,
//! empty-kind placeholder and load errors.

use dioxus::prelude::*;
use portfolio_core::{ErrorPanel, Placeholder};

/// Spinner shown while the catalog is loading
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "loading", role: "status", "aria-label": "Loading videos",
            div { class: "spinner" }
        }
    }
}

/// "No videos available" style placeholder
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     EmptyPanel { placeholder: Placeholder::for_kind(&EntryKind::Short, "videodata.json") }
/// }
/// ```
#[component]
pub fn EmptyPanel(placeholder: Placeholder) -> Element {
    rsx! {
        div { class: "grid-message",
            h3 { "{placeholder.heading}" }
            p { "{placeholder.hint}" }
        }
    }
}

/// Load failure panel. Unserved-page failures list their remedies.
#[component]
pub fn ErrorMessage(panel: ErrorPanel) -> Element {
    rsx! {
        div { class: "grid-message error-panel", role: "alert",
            h3 { "{panel.heading}" }
            div { class: "error-body",
                p { "{panel.message}" }
                if !panel.remedies.is_empty() {
                    strong { "Quick solutions:" }
                    ol { class: "error-remedies",
                        for remedy in panel.remedies.iter() {
                            li { key: "{remedy}", "{remedy}" }
                        }
                    }
                }
            }
        }
    }
}
