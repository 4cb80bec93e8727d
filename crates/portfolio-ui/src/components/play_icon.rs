//! Play triangle shown over a card's embed.

use dioxus::prelude::*;

#[component]
pub fn PlayIcon(#[props(default = 64)] size: u32) -> Element {
    rsx! {
        svg {
            class: "play-icon",
            view_box: "0 0 24 24",
            fill: "white",
            width: "{size}",
            height: "{size}",
            path { d: "M8 5v14l11-7z" }
        }
    }
}
