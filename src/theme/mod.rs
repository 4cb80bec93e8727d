//! Theme module for the video portfolio.
//!
//! Dark is the default palette; `[data-theme="light"]` on the root element
//! switches the custom properties to the light palette.

mod styles;

pub use styles::GLOBAL_STYLES;
