//! UI Components for the video portfolio.

mod catalog_section;
mod footer;
mod nav_header;
mod session_editor;
mod video_card;
mod video_modal;

pub use catalog_section::CatalogSection;
pub use footer::Footer;
pub use nav_header::{NavHeader, SectionLink};
pub use session_editor::SessionEditor;
pub use video_card::VideoCard;
pub use video_modal::VideoModal;
