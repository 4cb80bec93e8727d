//! Video Card Component
//!
//! Embed with a play overlay on top, title and truncated description below.
//! Both the overlay and the info region open the modal for the entry.

use dioxus::prelude::*;
use portfolio_core::CardModel;
use portfolio_ui::PlayIcon;

use crate::context::{open_modal, use_modal};

#[component]
pub fn VideoCard(card: CardModel) -> Element {
    let modal = use_modal();

    let overlay_content = card.full.clone();
    let open_from_overlay = move |evt: MouseEvent| {
        evt.prevent_default();
        evt.stop_propagation();
        open_modal(modal, overlay_content.clone());
    };

    let info_content = card.full.clone();
    let open_from_info = move |evt: MouseEvent| {
        evt.prevent_default();
        evt.stop_propagation();
        open_modal(modal, info_content.clone());
    };

    rsx! {
        div { class: "video-card",
            div { class: "video-embed",
                iframe {
                    class: "video-iframe",
                    src: "{card.embed_url}",
                    allowfullscreen: true,
                    "loading": "lazy",
                    "frameborder": "0",
                }
                div {
                    class: "video-overlay",
                    role: "button",
                    "aria-label": "Play {card.title}",
                    onclick: open_from_overlay,
                    div { class: "play-button-overlay", PlayIcon {} }
                }
            }
            div { class: "video-info", onclick: open_from_info,
                h3 { class: "video-title", "{card.title}" }
                p { class: "video-description", "{card.summary}" }
            }
        }
    }
}
