//! Theme Switch Component
//!
//! Sun/moon icon button. Shows the theme a click switches *to*.

use dioxus::prelude::*;
use portfolio_core::Theme;

use super::IconButton;

/// Icon and label for the button while `current` is applied.
pub fn switch_label(current: Theme) -> (&'static str, &'static str) {
    match current {
        Theme::Dark => ("\u{2600}", "Switch to light theme"),
        Theme::Light => ("\u{263E}", "Switch to dark theme"),
    }
}

#[component]
pub fn ThemeSwitch(current: Theme, on_toggle: EventHandler<()>) -> Element {
    let (icon, label) = switch_label(current);

    rsx! {
        IconButton {
            onclick: on_toggle,
            aria_label: label.to_string(),
            class: "theme-toggle".to_string(),
            "{icon}"
        }
    }
}
