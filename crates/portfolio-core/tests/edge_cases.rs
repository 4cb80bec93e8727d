//! Edge case and boundary condition tests
//!
//! Unusual catalog contents, id formats and boundary lengths.

use portfolio_core::nav::{link_matches_section, section_in_view};
use portfolio_core::{
    build_grid, parse_catalog, query, truncate, CardStyle, Catalog, CatalogEntry, EntryId,
    EntryKind, PortfolioConfig, SectionBounds, ViewMode,
};

fn ids(entries: &[CatalogEntry]) -> Vec<String> {
    entries.iter().map(|e| e.id.to_string()).collect()
}

// ============================================================================
// Catalog Parsing
// ============================================================================

#[test]
fn test_empty_catalog_is_not_an_error() {
    let entries = parse_catalog("videodata.json", "[]").unwrap();
    assert!(entries.is_empty());

    let grid = build_grid(
        &Catalog::new(entries),
        &EntryKind::Video,
        ViewMode::Featured,
        &CardStyle::default(),
    );
    assert!(grid.cards().is_empty());
}

#[test]
fn test_entries_with_missing_fields_still_load() {
    let entries = parse_catalog("videodata.json", r#"[{"type": "video"}, {}]"#).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].kind, EntryKind::Video);
    assert_eq!(entries[0].title, "");
    assert_eq!(entries[1].kind, EntryKind::Other);
}

#[test]
fn test_legacy_streamable_field() {
    let entries = parse_catalog(
        "videodata.json",
        r#"[{"id": 1, "type": "short", "title": "Old", "description": "", "streamableId": "old1"}]"#,
    )
    .unwrap();
    assert_eq!(entries[0].embed_id, "old1");
}

#[test]
fn test_unknown_type_never_listed() {
    let entries = parse_catalog(
        "videodata.json",
        r#"[{"id": 9, "type": "livestream", "title": "Live", "description": "", "embedId": "l"}]"#,
    )
    .unwrap();
    assert!(query(&entries, &EntryKind::Video, ViewMode::AllVideos).is_empty());
    assert!(query(&entries, &EntryKind::Short, ViewMode::AllShorts).is_empty());
}

#[test]
fn test_wrong_typed_entry_does_not_hide_good_entries() {
    let body = r#"[
      {"id": 1, "type": "video", "title": "Good", "description": "Fine", "embedId": "g1"},
      {"id": 2, "type": "video", "title": "Null description", "description": null, "embedId": "n2"},
      {"id": true, "type": "video", "title": "Bool id", "description": "", "embedId": "b3"},
      {"id": 4, "type": "video", "title": 2024, "description": "", "embedId": "t4"}
    ]"#;
    let entries = parse_catalog("videodata.json", body).unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[1].description, "");
    assert_eq!(entries[2].id.numeric(), None);
    assert_eq!(entries[3].title, "2024");

    let grid = build_grid(
        &Catalog::new(entries),
        &EntryKind::Video,
        ViewMode::AllVideos,
        &CardStyle::default(),
    );
    let titles: Vec<_> = grid.cards().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["2024", "Null description", "Good", "Bool id"]);
}

#[test]
fn test_object_root_is_parse_failure() {
    let err = parse_catalog("videodata.json", r#"{"videos": []}"#).unwrap_err();
    assert_eq!(err.kind(), "parse");
}

// ============================================================================
// Id Ordering
// ============================================================================

#[test]
fn test_string_ids_compare_numerically() {
    let entries = parse_catalog(
        "videodata.json",
        r#"[
          {"id": "9", "type": "video"},
          {"id": "10", "type": "video"},
          {"id": 2.5, "type": "video"}
        ]"#,
    )
    .unwrap();

    let result = query(&entries, &EntryKind::Video, ViewMode::AllVideos);
    assert_eq!(ids(&result.entries), vec!["10", "9", "2.5"]);
}

#[test]
fn test_non_numeric_ids_sort_last_in_source_order() {
    let entries = vec![
        CatalogEntry::new("zeta", EntryKind::Video, "Z", "", "z"),
        CatalogEntry::new(1u64, EntryKind::Video, "One", "", "a"),
        CatalogEntry::new("alpha", EntryKind::Video, "A", "", "b"),
        CatalogEntry::new(2u64, EntryKind::Video, "Two", "", "c"),
    ];

    let result = query(&entries, &EntryKind::Video, ViewMode::AllVideos);
    assert_eq!(ids(&result.entries), vec!["2", "1", "zeta", "alpha"]);
}

#[test]
fn test_duplicate_ids_keep_source_order() {
    let entries = vec![
        CatalogEntry::new(7u64, EntryKind::Short, "First", "", "a"),
        CatalogEntry::new(7u64, EntryKind::Short, "Second", "", "b"),
    ];

    let result = query(&entries, &EntryKind::Short, ViewMode::AllShorts);
    let titles: Vec<_> = result.entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

#[test]
fn test_blank_id_counts_as_zero() {
    assert_eq!(EntryId::from("  ").numeric(), Some(0.0));
}

// ============================================================================
// Featured Boundaries
// ============================================================================

#[test]
fn test_exactly_three_videos_has_no_more_link() {
    let catalog = Catalog::new(
        (1..=3u64)
            .map(|id| CatalogEntry::new(id, EntryKind::Video, "V", "", "e"))
            .collect(),
    );

    let grid = build_grid(&catalog, &EntryKind::Video, ViewMode::Featured, &CardStyle::default());
    assert_eq!(grid.cards().len(), 3);
    assert!(grid.more().is_none());
}

#[test]
fn test_listing_mode_never_has_more_link() {
    let catalog = Catalog::new(
        (1..=8u64)
            .map(|id| CatalogEntry::new(id, EntryKind::Video, "V", "", "e"))
            .collect(),
    );

    let grid = build_grid(&catalog, &EntryKind::Video, ViewMode::AllVideos, &CardStyle::default());
    assert_eq!(grid.cards().len(), 8);
    assert!(grid.more().is_none());
}

// ============================================================================
// Truncation Boundaries
// ============================================================================

#[test]
fn test_truncate_exact_budget_unchanged() {
    let text = "x".repeat(150);
    assert_eq!(truncate(&text, 150), text);
}

#[test]
fn test_truncate_counts_characters_not_bytes() {
    let text = "é".repeat(151);
    let cut = truncate(&text, 150);
    assert_eq!(cut.chars().count(), 153);
    assert!(cut.ends_with("..."));
}

#[test]
fn test_truncate_trims_space_before_ellipsis() {
    let text = format!("{} tail", "a".repeat(149));
    assert_eq!(truncate(&text, 150), format!("{}...", "a".repeat(149)));
}

// ============================================================================
// Navigation and Config
// ============================================================================

#[test]
fn test_index_link_stands_for_home() {
    assert!(link_matches_section("index.html", "home"));
    assert!(!link_matches_section("index.html", "videos"));
    assert!(link_matches_section("#videos", "videos"));
}

#[test]
fn test_no_section_in_view_above_first_section() {
    let sections = vec![SectionBounds::new("videos", 500.0, 400.0)];
    assert_eq!(section_in_view(0.0, 100.0, &sections), None);
    assert_eq!(section_in_view(400.0, 100.0, &sections), Some("videos"));
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config = PortfolioConfig::from_json(r#"{"featured_limit": 6}"#).unwrap();
    assert_eq!(config.featured_limit, 6);
    assert_eq!(config.catalog_url, "videodata.json");
    assert_eq!(config.description_budget, 150);
}
