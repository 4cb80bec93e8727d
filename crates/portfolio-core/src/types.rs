//! Core types for the Video Portfolio

use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Identifier of a catalog entry.
///
/// The catalog producer may write ids either as JSON numbers or as strings.
/// Ordering only ever looks at the numeric interpretation (see [`EntryId::numeric`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Number(f64),
    Text(String),
}

impl EntryId {
    /// Numeric value of the id, if it has one.
    ///
    /// Strings are trimmed and parsed as decimal numbers; a blank string
    /// counts as zero. Anything else (`"video-17"`, `"abc"`) has no numeric
    /// value.
    pub fn numeric(&self) -> Option<f64> {
        match self {
            EntryId::Number(n) if n.is_finite() => Some(*n),
            EntryId::Number(_) => None,
            EntryId::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Some(0.0);
                }
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
            }
        }
    }

    /// Compare two ids for recency ordering (newest first).
    ///
    /// Numeric ids sort descending. Ids without a numeric value sort after
    /// every numeric id and compare equal to each other, so a stable sort
    /// keeps their relative order.
    pub fn recency_cmp(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => b.total_cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl Default for EntryId {
    fn default() -> Self {
        EntryId::Text(String::new())
    }
}

impl From<u64> for EntryId {
    fn from(n: u64) -> Self {
        EntryId::Number(n as f64)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        EntryId::Text(s.to_string())
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryId::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            EntryId::Number(n) => write!(f, "{}", n),
            EntryId::Text(s) => f.write_str(s),
        }
    }
}

impl std::str::FromStr for EntryId {
    type Err = std::convert::Infallible;

    /// Parses command-line style ids: anything numeric becomes a number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(EntryId::Number(n)),
            _ => Ok(EntryId::Text(s.to_string())),
        }
    }
}

/// The kind of a catalog entry.
///
/// Unknown kinds are kept (the catalog is stored verbatim) but never match a
/// view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Video,
    Short,
    #[serde(other)]
    Other,
}

impl EntryKind {
    /// Lowercase name as it appears in the catalog resource.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Video => "video",
            EntryKind::Short => "short",
            EntryKind::Other => "other",
        }
    }

    /// Plural label used in headings and placeholders.
    pub fn plural(&self) -> &'static str {
        match self {
            EntryKind::Video => "videos",
            EntryKind::Short => "shorts",
            EntryKind::Other => "entries",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One video or short in the catalog.
///
/// Entries are produced by the catalog resource and are never mutated once
/// loaded. Fields are read leniently: a missing, `null` or wrong-typed field
/// becomes its empty value, so a malformed entry shows up as a visibly
/// incomplete card rather than failing the whole load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: EntryId,
    #[serde(rename = "type", default = "default_kind", deserialize_with = "lenient_kind")]
    pub kind: EntryKind,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    /// Provider-specific id substituted into the embed template.
    #[serde(
        rename = "embedId",
        alias = "streamableId",
        default,
        deserialize_with = "lenient_text"
    )]
    pub embed_id: String,
}

fn default_kind() -> EntryKind {
    EntryKind::Other
}

/// Numbers and strings keep their shape; anything else is an id with no
/// numeric value (`null` is blank).
fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<EntryId, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_f64()
            .map(EntryId::Number)
            .unwrap_or_else(|| EntryId::Text(n.to_string())),
        Value::String(s) => EntryId::Text(s),
        Value::Null => EntryId::default(),
        other => EntryId::Text(other.to_string()),
    })
}

fn lenient_kind<'de, D: Deserializer<'de>>(deserializer: D) -> Result<EntryKind, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => match s.as_str() {
            "video" => EntryKind::Video,
            "short" => EntryKind::Short,
            _ => EntryKind::Other,
        },
        _ => EntryKind::Other,
    })
}

/// Strings verbatim, numbers and booleans as their literal text, everything
/// else empty.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

impl CatalogEntry {
    /// Create a new entry.
    pub fn new(
        id: impl Into<EntryId>,
        kind: EntryKind,
        title: impl Into<String>,
        description: impl Into<String>,
        embed_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            description: description.into(),
            embed_id: embed_id.into(),
        }
    }

    /// Read one element of the catalog array.
    ///
    /// Never fails: an element that is not an object at all (or repeats a
    /// field) becomes a blank entry of no known kind, which no view lists.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Unreadable catalog entry kept as blank");
            Self::new(EntryId::default(), EntryKind::Other, "", "", "")
        })
    }
}
