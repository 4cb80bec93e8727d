//! Session Editor Component
//!
//! Adds a video to the in-memory catalog. Edits last until the page is
//! reloaded; the featured grids pick them up immediately.

use dioxus::prelude::*;
use portfolio_ui::{Button, ButtonVariant};

use crate::context::use_catalog;

#[component]
pub fn SessionEditor() -> Element {
    let mut catalog = use_catalog();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut embed_id = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let ready = catalog.read().catalog().is_some();

    let add = move |_| {
        let result = match catalog.write().catalog_mut() {
            Some(catalog) => catalog.add_video(&title(), &description(), &embed_id()),
            None => return,
        };
        match result {
            Ok(_) => {
                title.set(String::new());
                description.set(String::new());
                embed_id.set(String::new());
                error.set(None);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        details { class: "session-editor",
            summary { "Session edits" }
            p { class: "session-hint",
                "Videos added here only live until the page is reloaded."
            }
            input {
                r#type: "text",
                placeholder: "Title",
                value: "{title}",
                oninput: move |e| title.set(e.value()),
            }
            textarea {
                placeholder: "Description",
                value: "{description}",
                oninput: move |e| description.set(e.value()),
            }
            input {
                class: if error().is_some() { "invalid" } else { "" },
                r#type: "text",
                placeholder: "Embed ID",
                value: "{embed_id}",
                oninput: move |e| embed_id.set(e.value()),
            }
            if let Some(err) = error() {
                p { class: "error-text", "{err}" }
            }
            div { class: "session-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: !ready,
                    onclick: add,
                    "Add video"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        title.set(String::new());
                        description.set(String::new());
                        embed_id.set(String::new());
                        error.set(None);
                    },
                    "Clear"
                }
            }
        }
    }
}
