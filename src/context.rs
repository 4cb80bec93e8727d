//! Page state shared through context.
//!
//! [`crate::app::App`] owns every piece of state and provides it once; pages
//! and components reach it through the hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! let catalog = use_catalog();
//! if let Some(catalog) = catalog.read().catalog() {
//!     tracing::info!(entries = catalog.len(), "Catalog ready");
//! }
//! ```

use dioxus::prelude::*;
use gloo::timers::future::TimeoutFuture;
use portfolio_core::{
    LoadState, ModalContent, ModalController, NavState, PortfolioConfig, ThemeController,
};

use crate::browser::LocalPreferences;

/// Theme controller backed by local storage.
pub type SharedTheme = ThemeController<LocalPreferences>;

/// Hook to access the catalog load state.
pub fn use_catalog() -> Signal<LoadState> {
    use_context::<Signal<LoadState>>()
}

/// Hook to access the page's single modal.
pub fn use_modal() -> Signal<ModalController> {
    use_context::<Signal<ModalController>>()
}

/// Hook to access the navigation active marker.
pub fn use_nav() -> Signal<NavState> {
    use_context::<Signal<NavState>>()
}

/// Hook to access the theme preference.
pub fn use_theme() -> Signal<SharedTheme> {
    use_context::<Signal<SharedTheme>>()
}

/// Hook to access the portfolio configuration.
pub fn use_config() -> PortfolioConfig {
    use_context::<PortfolioConfig>()
}

/// Show `content` in the modal.
pub fn open_modal(mut modal: Signal<ModalController>, content: ModalContent) {
    modal.write().open_for(content);
}

/// Hide the modal and clear its content once the close transition is over.
///
/// The clear is skipped if the modal was opened again in the meantime.
pub fn close_modal(mut modal: Signal<ModalController>, clear_delay_ms: u32) {
    let Some(ticket) = modal.write().close() else {
        return;
    };

    spawn(async move {
        TimeoutFuture::new(clear_delay_ms).await;
        if modal.write().finish_close(ticket) {
            tracing::debug!("Cleared modal content");
        }
    });
}
