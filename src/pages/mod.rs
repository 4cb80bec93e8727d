//! Page components for the video portfolio.

mod home;
mod listing;

pub use home::Home;
pub use listing::{Fallback, Shorts, Videos};
