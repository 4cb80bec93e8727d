//! Navigation Header Component
//!
//! Home page: links to the page's sections, intercepted for smooth
//! scrolling and tracked by the active marker.
//! Listing pages: router links to the other pages, with the current page
//! marked active.

use dioxus::prelude::*;
use portfolio_core::{LinkTarget, ViewMode};
use portfolio_ui::ThemeSwitch;

use crate::app::Route;
use crate::browser;
use crate::context::{use_nav, use_theme};

/// Section links on the home page.
const HOME_SECTIONS: [(&str, &str); 4] = [
    ("Home", "#home"),
    ("Videos", "#videos"),
    ("Shorts", "#shorts"),
    ("About", "#about"),
];

/// Page links on the listing pages.
const PAGES: [(&str, ViewMode); 3] = [
    ("Home", ViewMode::Featured),
    ("Videos", ViewMode::AllVideos),
    ("Shorts", ViewMode::AllShorts),
];

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// View of the page the header sits on
    pub current: ViewMode,
}

#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let mut theme = use_theme();
    let current_theme = theme.read().current();

    let links = if props.current.is_featured() {
        rsx! {
            for (label, href) in HOME_SECTIONS {
                SectionLink { key: "{href}", href, class: "nav-link", nav: true, "{label}" }
            }
        }
    } else {
        rsx! {
            for (label, mode) in PAGES {
                Link {
                    key: "{label}",
                    class: if mode == props.current { "nav-link active" } else { "nav-link" },
                    to: Route::for_mode(mode),
                    "{label}"
                }
            }
        }
    };

    rsx! {
        header { class: "nav-header",
            Link { class: "nav-brand", to: Route::Home {}, "Video Portfolio" }
            nav { class: "nav-links", {links} }
            ThemeSwitch {
                current: current_theme,
                on_toggle: move |_| {
                    theme.write().toggle();
                },
            }
        }
    }
}

/// Same-page anchor (`#id`): smooth-scrolls to the section instead of
/// jumping. With `nav` set the link also carries and moves the active
/// marker. Any other href behaves as a plain link.
#[component]
pub fn SectionLink(
    href: &'static str,
    class: &'static str,
    #[props(default)] nav: bool,
    children: Element,
) -> Element {
    let mut state = use_nav();
    let active = nav && state.read().is_active(href);

    let full_class = if active {
        format!("{} active", class)
    } else {
        class.to_string()
    };

    rsx! {
        a {
            class: "{full_class}",
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                let target = if nav {
                    state.write().activate(href)
                } else {
                    LinkTarget::classify(href).section()
                };
                if let Some(section) = target {
                    evt.prevent_default();
                    browser::scroll_to_section(section);
                }
            },
            {children}
        }
    }
}
