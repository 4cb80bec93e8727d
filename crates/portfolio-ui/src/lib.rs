//! Video Portfolio UI Components
//!
//! Presentational Dioxus components shared by the portfolio pages. They take
//! plain props and report user actions through event handlers; none of them
//! touch page state or the browser directly.
//!
//! Styling lives in the app's global stylesheet; components only set class
//! names (`video-card`, `grid-message`, `icon-btn`, ...).

pub mod components;

pub use components::*;
