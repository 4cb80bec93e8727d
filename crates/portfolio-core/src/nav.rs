//! Navigation active-marker tracking.

use crate::config::DEFAULT_SCROLL_OFFSET_PX;

/// Where a navigation link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// `#id` on the current page; handled with a smooth scroll.
    Section(&'a str),
    /// Anything else; left to the browser.
    Page,
}

impl<'a> LinkTarget<'a> {
    pub fn classify(href: &'a str) -> Self {
        match href.strip_prefix('#') {
            Some(id) => LinkTarget::Section(id),
            None => LinkTarget::Page,
        }
    }

    /// Section id for same-page links.
    pub fn section(self) -> Option<&'a str> {
        match self {
            LinkTarget::Section(id) => Some(id),
            LinkTarget::Page => None,
        }
    }
}

/// Whether a nav link stands for a page section.
///
/// The `index.html` link doubles as the link for the `home` section.
pub fn link_matches_section(href: &str, section_id: &str) -> bool {
    match LinkTarget::classify(href) {
        LinkTarget::Section(id) => id == section_id,
        LinkTarget::Page => href == "index.html" && section_id == "home",
    }
}

/// Vertical extent of a page section, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// The section under the line `offset` pixels below the viewport top.
///
/// When sections overlap the last one in document order wins.
pub fn section_in_view(scroll_y: f64, offset: f64, sections: &[SectionBounds]) -> Option<&str> {
    let line = scroll_y + offset;
    sections
        .iter()
        .rev()
        .find(|s| s.contains(line))
        .map(|s| s.id.as_str())
}

/// The single active navigation marker.
#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    active: Option<String>,
    offset: f64,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_OFFSET_PX)
    }
}

impl NavState {
    pub fn new(offset: f64) -> Self {
        Self { active: None, offset }
    }

    /// Section currently marked active.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether the nav link `href` carries the active marker.
    pub fn is_active(&self, href: &str) -> bool {
        self.active
            .as_deref()
            .is_some_and(|id| link_matches_section(href, id))
    }

    /// A nav link was clicked. Returns the section to scroll to, or `None`
    /// for links that leave the page.
    pub fn activate<'a>(&mut self, href: &'a str) -> Option<&'a str> {
        let id = LinkTarget::classify(href).section()?;
        self.active = Some(id.to_string());
        Some(id)
    }

    /// Re-evaluate the marker after a scroll. Returns whether it moved.
    ///
    /// If no section is under the tracking line the marker stays put.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionBounds]) -> bool {
        match section_in_view(scroll_y, self.offset, sections) {
            Some(id) if self.active.as_deref() != Some(id) => {
                self.active = Some(id.to_string());
                true
            }
            _ => false,
        }
    }
}
