//! Filter, sort and slice the catalog for one view.

use crate::config::DEFAULT_FEATURED_LIMIT;
use crate::route::ViewMode;
use crate::types::{CatalogEntry, EntryKind};

/// Entries selected for one kind in one view.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    /// Entries to render, newest first.
    pub entries: Vec<CatalogEntry>,
    /// How many entries of the kind exist before slicing.
    pub total: usize,
}

impl QueryResult {
    /// No entry of the kind exists at all.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Some entries were cut by the featured slice, so the page should
    /// link to the full listing.
    pub fn has_more(&self) -> bool {
        self.entries.len() < self.total
    }
}

/// Select the entries of `kind` to show in `mode`.
pub fn query(entries: &[CatalogEntry], kind: &EntryKind, mode: ViewMode) -> QueryResult {
    query_with_limit(entries, kind, mode, DEFAULT_FEATURED_LIMIT)
}

/// [`query`] with a configurable featured limit.
///
/// The input slice is never reordered; filtering copies the matching
/// entries out and the copy is sorted.
pub fn query_with_limit(
    entries: &[CatalogEntry],
    kind: &EntryKind,
    mode: ViewMode,
    featured_limit: usize,
) -> QueryResult {
    if *kind == EntryKind::Other {
        return QueryResult {
            entries: Vec::new(),
            total: 0,
        };
    }

    let mut selected: Vec<CatalogEntry> =
        entries.iter().filter(|e| &e.kind == kind).cloned().collect();
    sort_by_recency(&mut selected);

    let total = selected.len();
    if mode.is_featured() {
        selected.truncate(featured_limit);
    }

    tracing::debug!(
        kind = %kind,
        mode = %mode,
        total,
        shown = selected.len(),
        "Queried catalog"
    );

    QueryResult {
        entries: selected,
        total,
    }
}

/// Stable sort, highest numeric id first.
///
/// Entries without a numeric id go after all numbered entries and keep
/// their relative order.
pub fn sort_by_recency(entries: &mut [CatalogEntry]) {
    entries.sort_by(|a, b| a.id.recency_cmp(&b.id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryId;

    fn entry(id: impl Into<EntryId>, kind: EntryKind) -> CatalogEntry {
        let id = id.into();
        let title = id.to_string();
        CatalogEntry::new(id, kind, title, "", "embed")
    }

    fn ids(result: &QueryResult) -> Vec<String> {
        result.entries.iter().map(|e| e.id.to_string()).collect()
    }

    #[test]
    fn test_filter_sort_slice() {
        let catalog: Vec<_> = (1..=5u64)
            .map(|i| entry(i, EntryKind::Video))
            .chain(std::iter::once(entry(9u64, EntryKind::Short)))
            .collect();

        let featured = query(&catalog, &EntryKind::Video, ViewMode::Featured);
        assert_eq!(ids(&featured), ["5", "4", "3"]);
        assert_eq!(featured.total, 5);
        assert!(featured.has_more());

        let all = query(&catalog, &EntryKind::Video, ViewMode::AllVideos);
        assert_eq!(ids(&all), ["5", "4", "3", "2", "1"]);
        assert!(!all.has_more());
    }

    #[test]
    fn test_source_is_untouched() {
        let catalog = vec![entry(1u64, EntryKind::Video), entry(2u64, EntryKind::Video)];
        let before = catalog.clone();
        let _ = query(&catalog, &EntryKind::Video, ViewMode::AllVideos);
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_mixed_id_shapes() {
        let catalog = vec![
            entry("b", EntryKind::Short),
            entry("10", EntryKind::Short),
            entry("a", EntryKind::Short),
            entry(2u64, EntryKind::Short),
        ];
        let result = query(&catalog, &EntryKind::Short, ViewMode::AllShorts);
        assert_eq!(ids(&result), ["10", "2", "b", "a"]);
    }

    #[test]
    fn test_equal_ids_keep_source_order() {
        let mut first = entry(3u64, EntryKind::Video);
        first.title = "first".to_string();
        let mut second = entry("3", EntryKind::Video);
        second.title = "second".to_string();

        let result = query(&[first, second], &EntryKind::Video, ViewMode::AllVideos);
        let titles: Vec<_> = result.entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["first", "second"]);
    }

    #[test]
    fn test_unknown_kind_never_matches() {
        let catalog = vec![entry(1u64, EntryKind::Other)];
        assert!(query(&catalog, &EntryKind::Other, ViewMode::AllVideos).is_empty());
    }

    #[test]
    fn test_empty_result() {
        let catalog = vec![entry(1u64, EntryKind::Video)];
        let result = query(&catalog, &EntryKind::Short, ViewMode::Featured);
        assert!(result.is_empty());
        assert!(!result.has_more());
    }

    #[test]
    fn test_featured_exactly_at_limit_has_no_more() {
        let catalog: Vec<_> = (1..=3u64).map(|i| entry(i, EntryKind::Video)).collect();
        let result = query(&catalog, &EntryKind::Video, ViewMode::Featured);
        assert_eq!(result.entries.len(), 3);
        assert!(!result.has_more());
    }
}
