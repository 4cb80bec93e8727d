//! Browser glue: page signals, storage, fetch, scrolling and DOM events.
//!
//! Everything here is a thin call into `gloo`/`web-sys`; the decisions are
//! made in `portfolio_core`.

use futures::channel::mpsc::{self, UnboundedReceiver};
use gloo::events::EventListener;
use gloo::net::http::Request;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::{body, document, document_element, window};
use portfolio_core::{CatalogSource, FetchResponse, PageContext, PreferenceStore, SectionBounds, Theme};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Protocol and path of the current page.
pub fn page_context() -> PageContext {
    let location = window().location();
    PageContext::new(
        location.protocol().unwrap_or_default(),
        location.pathname().unwrap_or_default(),
    )
}

/// Fetches the catalog over HTTP relative to the page.
pub struct HttpSource;

impl CatalogSource for HttpSource {
    async fn fetch(&self, resource: &str) -> Result<FetchResponse, String> {
        let response = Request::get(resource)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let body = if response.ok() {
            response.text().await.map_err(|e| e.to_string())?
        } else {
            String::new()
        };

        Ok(FetchResponse {
            status: response.status(),
            status_text: response.status_text(),
            body,
        })
    }
}

/// Raw (unencoded) values in `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPreferences;

impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = LocalStorage::raw().set_item(key, value) {
            tracing::warn!(key, error = ?e, "Failed to persist preference");
        }
    }
}

/// Set `data-theme` on the root element.
pub fn apply_theme(theme: Theme) {
    if let Err(e) = document_element().set_attribute("data-theme", theme.as_str()) {
        tracing::warn!(error = ?e, "Failed to apply theme");
    }
}

/// Suppress or restore scrolling of the page behind the modal.
pub fn set_scroll_locked(locked: bool) {
    let style = body().style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(e) = result {
        tracing::warn!(error = ?e, "Failed to toggle page scrolling");
    }
}

/// Smooth-scroll the element with this id to the top of the viewport.
pub fn scroll_to_section(id: &str) {
    let Some(target) = document().get_element_by_id(id) else {
        tracing::debug!(id, "No section to scroll to");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

/// Geometry of every `section[id]` on the page, in document order.
pub fn section_bounds() -> Vec<SectionBounds> {
    let Ok(nodes) = document().query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionBounds::new(el.id(), el.offset_top() as f64, el.offset_height() as f64))
        .collect()
}

/// Every window scroll event, as a stream. Events stop when the listener
/// is dropped.
pub fn scroll_events() -> (EventListener, UnboundedReceiver<()>) {
    let (tx, rx) = mpsc::unbounded();
    let listener = EventListener::new(&window(), "scroll", move |_| {
        let _ = tx.unbounded_send(());
    });
    (listener, rx)
}

/// Listen for the Escape key on the document, forwarding each press.
pub fn on_escape(tx: mpsc::UnboundedSender<()>) -> EventListener {
    EventListener::new(&document(), "keydown", move |event| {
        let is_escape = event
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|key| key.key() == "Escape");
        if is_escape {
            let _ = tx.unbounded_send(());
        }
    })
}
