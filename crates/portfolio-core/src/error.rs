//! Error types for the Video Portfolio

use thiserror::Error;

/// Why the catalog could not be loaded.
///
/// Every variant is terminal for the page view: nothing retries, the user
/// has to fix the resource (or serve the page) and reload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    /// The page was opened from the local filesystem, so there is no HTTP
    /// server to fetch the catalog from.
    #[error("page is not served over HTTP (protocol {protocol})")]
    UnservedContext { protocol: String },

    /// The resource was unreachable or answered with a non-success status.
    #[error("failed to fetch {resource}: {reason}")]
    Fetch { resource: String, reason: String },

    /// The resource did not parse as a list of catalog entries.
    #[error("failed to parse {resource}: {reason}")]
    Parse { resource: String, reason: String },
}

impl LoadFailure {
    /// Whether this is the unserved-context failure, which gets its own
    /// instructional panel instead of the generic one.
    pub fn is_unserved(&self) -> bool {
        matches!(self, LoadFailure::UnservedContext { .. })
    }

    /// Short machine-friendly name, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadFailure::UnservedContext { .. } => "unserved_context",
            LoadFailure::Fetch { .. } => "fetch",
            LoadFailure::Parse { .. } => "parse",
        }
    }

    /// Text shown in the error panel.
    ///
    /// Fetch and parse failures deliberately share one message.
    pub fn user_message(&self) -> String {
        match self {
            LoadFailure::UnservedContext { .. } => {
                "This page must be served from a web server.".to_string()
            }
            LoadFailure::Fetch { resource, .. } | LoadFailure::Parse { resource, .. } => format!(
                "Failed to load video data. Please check that {} exists and is valid.",
                resource
            ),
        }
    }
}

/// Errors from in-memory catalog edits and configuration.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No entry with this id exists in the catalog
    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    /// A session edit was rejected
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::EntryNotFound("7".to_string());
        assert_eq!(format!("{}", err), "Entry not found: 7");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CatalogError = io_err.into();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_fetch_and_parse_share_user_message() {
        let fetch = LoadFailure::Fetch {
            resource: "videodata.json".to_string(),
            reason: "404 Not Found".to_string(),
        };
        let parse = LoadFailure::Parse {
            resource: "videodata.json".to_string(),
            reason: "expected value at line 1".to_string(),
        };
        assert_eq!(fetch.user_message(), parse.user_message());
        assert!(fetch.user_message().contains("videodata.json"));
        assert_ne!(fetch.to_string(), parse.to_string());
    }

    #[test]
    fn test_unserved_kind() {
        let err = LoadFailure::UnservedContext {
            protocol: "file:".to_string(),
        };
        assert!(err.is_unserved());
        assert_eq!(err.kind(), "unserved_context");
        assert_eq!(err.to_string(), "page is not served over HTTP (protocol file:)");
    }
}
