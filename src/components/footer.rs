//! Page footer with the current year.

use chrono::Datelike;
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "site-footer",
            p { "\u{00A9} {year} Video Portfolio. All videos hosted on Streamable." }
        }
    }
}
