use dioxus::prelude::*;
use portfolio_core::{
    load_catalog, LoadState, ModalController, NavState, PortfolioConfig, ThemeController, ViewMode,
};

use crate::browser::{self, HttpSource, LocalPreferences};
use crate::components::VideoModal;
use crate::context::SharedTheme;
use crate::pages::{Fallback, Home, Shorts, Videos};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Home page with featured videos and shorts
/// - `/videos.html` - Every video
/// - `/shorts.html` - Every short
/// - anything else - resolved by path (`/index.html`, `/videos`, ...)
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/videos.html")]
    Videos {},
    #[route("/shorts.html")]
    Shorts {},
    #[route("/:..segments")]
    Fallback { segments: Vec<String> },
}

impl Route {
    /// Canonical route for a view.
    pub fn for_mode(mode: ViewMode) -> Self {
        match mode {
            ViewMode::Featured => Route::Home {},
            ViewMode::AllVideos => Route::Videos {},
            ViewMode::AllShorts => Route::Shorts {},
        }
    }
}

/// Root application component.
///
/// Owns the page state (catalog load, modal, navigation marker, theme),
/// provides it to every page, and runs the one catalog load.
#[component]
pub fn App() -> Element {
    let config = use_context_provider(PortfolioConfig::default);

    let mut catalog: Signal<LoadState> = use_signal(LoadState::default);
    let modal: Signal<ModalController> = use_signal(ModalController::new);
    let nav: Signal<NavState> = use_signal(|| NavState::new(config.scroll_offset_px));
    let theme_key = config.theme_storage_key.clone();
    let theme: Signal<SharedTheme> =
        use_signal(move || ThemeController::load(LocalPreferences, theme_key));

    use_context_provider(|| catalog);
    use_context_provider(|| modal);
    use_context_provider(|| nav);
    use_context_provider(|| theme);

    // Apply the theme at startup and after every toggle
    use_effect(move || {
        browser::apply_theme(theme.read().current());
    });

    // Load the catalog once, before any section renders cards
    let catalog_url = config.catalog_url.clone();
    use_hook(move || {
        spawn(async move {
            let page = browser::page_context();
            let result = load_catalog(&page, &HttpSource, &catalog_url).await;
            catalog.set(LoadState::from_result(result));
        })
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
        VideoModal {}
    }
}
