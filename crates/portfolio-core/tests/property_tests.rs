//! Property-based tests for catalog queries and text helpers
//!
//! Uses proptest to check ordering and slicing invariants over arbitrary
//! catalogs, including ids that are not numbers.

use proptest::prelude::*;
use portfolio_core::{query, truncate, CatalogEntry, EntryId, EntryKind, ViewMode};

// ============================================================================
// Strategy Generators
// ============================================================================

fn id_strategy() -> impl Strategy<Value = EntryId> {
    prop_oneof![
        4 => (0u64..50).prop_map(EntryId::from),
        2 => (0u64..50).prop_map(|n| EntryId::Text(n.to_string())),
        1 => "[a-z]{1,6}".prop_map(EntryId::Text),
    ]
}

fn kind_strategy() -> impl Strategy<Value = EntryKind> {
    prop_oneof![
        3 => Just(EntryKind::Video),
        2 => Just(EntryKind::Short),
        1 => Just(EntryKind::Other),
    ]
}

/// Catalogs where each entry's title records its source position.
fn catalog_strategy() -> impl Strategy<Value = Vec<CatalogEntry>> {
    prop::collection::vec((id_strategy(), kind_strategy()), 0..30).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(pos, (id, kind))| CatalogEntry::new(id, kind, pos.to_string(), "", "e"))
            .collect()
    })
}

fn position(entry: &CatalogEntry) -> usize {
    entry.title.parse().unwrap()
}

fn listing(kind: &EntryKind) -> ViewMode {
    match kind {
        EntryKind::Short => ViewMode::AllShorts,
        _ => ViewMode::AllVideos,
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The featured view is a prefix of the full listing
    #[test]
    fn featured_is_prefix_of_listing(catalog in catalog_strategy(), kind in kind_strategy()) {
        let featured = query(&catalog, &kind, ViewMode::Featured);
        let all = query(&catalog, &kind, listing(&kind));

        prop_assert!(featured.entries.len() <= all.entries.len());
        prop_assert!(featured.entries.len() <= 3);
        prop_assert_eq!(&featured.entries[..], &all.entries[..featured.entries.len()]);
        prop_assert_eq!(featured.has_more(), all.entries.len() > 3);
    }

    /// Only entries of the requested kind come back, all of them
    #[test]
    fn filter_keeps_exactly_the_kind(catalog in catalog_strategy(), kind in kind_strategy()) {
        let all = query(&catalog, &kind, listing(&kind));
        let expected = if kind == EntryKind::Other {
            0
        } else {
            catalog.iter().filter(|e| e.kind == kind).count()
        };
        prop_assert_eq!(all.entries.len(), expected);
        prop_assert!(all.entries.iter().all(|e| e.kind == kind));
    }

    /// Numeric ids descend; ties and non-numeric ids keep source order
    #[test]
    fn sort_is_stable_and_descending(catalog in catalog_strategy()) {
        let all = query(&catalog, &EntryKind::Video, ViewMode::AllVideos);

        for pair in all.entries.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            match (a.id.numeric(), b.id.numeric()) {
                (Some(x), Some(y)) => {
                    prop_assert!(x >= y);
                    if x == y {
                        prop_assert!(position(a) < position(b));
                    }
                }
                (Some(_), None) => {}
                (None, Some(_)) => prop_assert!(false, "non-numeric id before numeric id"),
                (None, None) => prop_assert!(position(a) < position(b)),
            }
        }
    }

    /// Querying never reorders the catalog it reads
    #[test]
    fn query_leaves_source_untouched(catalog in catalog_strategy()) {
        let before = catalog.clone();
        let _ = query(&catalog, &EntryKind::Short, ViewMode::AllShorts);
        prop_assert_eq!(catalog, before);
    }

    /// Short text is returned unchanged
    #[test]
    fn truncate_keeps_short_text(text in ".{0,150}") {
        prop_assert_eq!(truncate(&text, 150), text);
    }

    /// Long text becomes a trimmed prefix of at most the budget plus the marker
    #[test]
    fn truncate_cuts_long_text(text in ".{151,400}") {
        let out = truncate(&text, 150);
        let body = out.strip_suffix("...").unwrap();
        prop_assert!(body.chars().count() <= 150);
        prop_assert!(text.starts_with(body));
        prop_assert_eq!(body, body.trim_end());
    }

    /// Truncating output that already fits the budget changes nothing
    #[test]
    fn truncate_is_idempotent_within_budget(text in ".{0,400}") {
        let once = truncate(&text, 150);
        if once.chars().count() <= 150 {
            prop_assert_eq!(truncate(&once, 150), once);
        }
    }
}
