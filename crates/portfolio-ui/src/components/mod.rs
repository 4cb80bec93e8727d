//! Reusable UI components

mod button;
mod message_panel;
mod play_icon;
mod theme_switch;

pub use button::*;
pub use message_panel::*;
pub use play_icon::*;
pub use theme_switch::*;
