//! Video Modal Component
//!
//! The page's single overlay. It is mounted once by the app and stays in
//! the tree after the first open; closing only hides it, and the content is
//! cleared after the close transition (see `portfolio_core::modal`).
//!
//! While open it suppresses background scrolling and listens for Escape.

use dioxus::prelude::*;
use futures::channel::mpsc;
use futures::StreamExt;
use gloo::events::EventListener;
use portfolio_ui::{Button, ButtonVariant, CloseButton};

use crate::browser;
use crate::context::{close_modal, use_catalog, use_config, use_modal};

#[component]
pub fn VideoModal() -> Element {
    let modal = use_modal();
    let mut catalog = use_catalog();
    let clear_delay = use_config().modal_clear_delay_ms;
    let mut escape_listener: Signal<Option<EventListener>> = use_signal(|| None);

    // Escape presses arrive on this channel while the listener is registered
    let escape_tx = use_hook(move || {
        let (tx, mut rx) = mpsc::unbounded::<()>();
        spawn(async move {
            while rx.next().await.is_some() {
                close_modal(modal, clear_delay);
            }
        });
        tx
    });

    // Scroll lock and Escape listener follow visibility
    use_effect(move || {
        let visible = modal.read().is_visible();
        browser::set_scroll_locked(visible);
        if visible {
            escape_listener.set(Some(browser::on_escape(escape_tx.clone())));
        } else {
            escape_listener.set(None);
        }
    });

    let state = modal.read();
    if !state.is_created() {
        return rsx! {};
    }
    let visible = state.is_visible();
    let content = state.content().cloned();
    drop(state);

    let class = if visible { "video-modal active" } else { "video-modal" };

    let body = content.map(move |content| {
        let entry_id = content.id.clone();
        let entry_kind = content.kind.clone();
        let remove = move |_| {
            if let Some(catalog) = catalog.write().catalog_mut() {
                if let Err(e) = catalog.remove_entry(&entry_id, &entry_kind) {
                    tracing::warn!(error = %e, "Session remove failed");
                }
            }
            close_modal(modal, clear_delay);
        };

        rsx! {
            div {
                class: "modal-overlay",
                onclick: move |_| close_modal(modal, clear_delay),
            }
            div {
                class: "modal-content",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{content.title}",
                CloseButton { onclick: move |_| close_modal(modal, clear_delay) }
                div { class: "modal-video-container",
                    iframe {
                        class: "modal-video",
                        src: "{content.embed_url}",
                        allowfullscreen: true,
                        "frameborder": "0",
                    }
                }
                div { class: "modal-info",
                    input {
                        class: "modal-title-field",
                        r#type: "text",
                        value: "{content.title}",
                        readonly: true,
                    }
                    textarea {
                        class: "modal-description-field",
                        readonly: true,
                        value: "{content.description}",
                    }
                }
                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: remove,
                        "Remove for this session"
                    }
                }
            }
        }
    });

    rsx! {
        div { id: "videoModal", class: "{class}", {body} }
    }
}
