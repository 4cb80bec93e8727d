//! Page context and view selection.

use crate::types::EntryKind;

/// Which catalog view a page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    /// Landing page: the newest few videos and shorts.
    #[default]
    Featured,
    /// Listing of every video.
    AllVideos,
    /// Listing of every short.
    AllShorts,
}

impl ViewMode {
    /// Pick the view for a page path.
    ///
    /// Only the final path segment is inspected: `videos.html` (or `videos`)
    /// selects [`ViewMode::AllVideos`], `shorts.html` (or `shorts`) selects
    /// [`ViewMode::AllShorts`]. Every other path is the featured view.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segment = path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default();
        let page = segment.strip_suffix(".html").unwrap_or(segment);

        match page {
            "videos" => ViewMode::AllVideos,
            "shorts" => ViewMode::AllShorts,
            _ => ViewMode::Featured,
        }
    }

    pub fn is_featured(&self) -> bool {
        matches!(self, ViewMode::Featured)
    }

    /// Entry kinds rendered by this view, in page order.
    pub fn kinds(&self) -> &'static [EntryKind] {
        match self {
            ViewMode::Featured => &[EntryKind::Video, EntryKind::Short],
            ViewMode::AllVideos => &[EntryKind::Video],
            ViewMode::AllShorts => &[EntryKind::Short],
        }
    }

    /// The full listing page for a kind.
    pub fn listing_for(kind: &EntryKind) -> Option<Self> {
        match kind {
            EntryKind::Video => Some(ViewMode::AllVideos),
            EntryKind::Short => Some(ViewMode::AllShorts),
            EntryKind::Other => None,
        }
    }

    /// Relative href of the page serving this view.
    pub fn href(&self) -> &'static str {
        match self {
            ViewMode::Featured => "index.html",
            ViewMode::AllVideos => "videos.html",
            ViewMode::AllShorts => "shorts.html",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ViewMode::Featured => "featured",
            ViewMode::AllVideos => "all-videos",
            ViewMode::AllShorts => "all-shorts",
        })
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(ViewMode::Featured),
            "all-videos" => Ok(ViewMode::AllVideos),
            "all-shorts" => Ok(ViewMode::AllShorts),
            other => Err(format!(
                "unknown view '{}', expected featured, all-videos or all-shorts",
                other
            )),
        }
    }
}

/// The page signals the pipeline consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    /// URL scheme including the trailing colon, e.g. `https:`.
    pub protocol: String,
    pub path: String,
}

impl PageContext {
    pub fn new(protocol: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            path: path.into(),
        }
    }

    /// Opened straight from disk, with no HTTP server behind it.
    pub fn is_unserved(&self) -> bool {
        self.protocol.eq_ignore_ascii_case("file:")
    }

    pub fn mode(&self) -> ViewMode {
        ViewMode::from_path(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_paths() {
        assert_eq!(ViewMode::from_path("/videos.html"), ViewMode::AllVideos);
        assert_eq!(ViewMode::from_path("/portfolio/shorts.html"), ViewMode::AllShorts);
        assert_eq!(ViewMode::from_path("/videos/"), ViewMode::AllVideos);
        assert_eq!(ViewMode::from_path("/shorts.html?ref=nav"), ViewMode::AllShorts);
    }

    #[test]
    fn test_everything_else_is_featured() {
        for path in ["/", "", "/index.html", "/about", "/myvideos.html", "/videos.html.bak"] {
            assert_eq!(ViewMode::from_path(path), ViewMode::Featured, "path {path:?}");
        }
    }

    #[test]
    fn test_mode_round_trips_through_display() {
        for mode in [ViewMode::Featured, ViewMode::AllVideos, ViewMode::AllShorts] {
            assert_eq!(mode.to_string().parse::<ViewMode>().unwrap(), mode);
        }
        assert!("home".parse::<ViewMode>().is_err());
    }

    #[test]
    fn test_kinds_per_mode() {
        assert_eq!(ViewMode::Featured.kinds().len(), 2);
        assert_eq!(ViewMode::AllShorts.kinds(), &[EntryKind::Short]);
        assert_eq!(ViewMode::listing_for(&EntryKind::Video), Some(ViewMode::AllVideos));
        assert_eq!(ViewMode::listing_for(&EntryKind::Other), None);
    }

    #[test]
    fn test_unserved_context() {
        assert!(PageContext::new("file:", "/C:/site/index.html").is_unserved());
        assert!(!PageContext::new("http:", "/").is_unserved());
        assert_eq!(PageContext::new("https:", "/shorts.html").mode(), ViewMode::AllShorts);
    }
}
