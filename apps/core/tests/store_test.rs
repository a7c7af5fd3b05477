use std::time::{SystemTime, UNIX_EPOCH};

use ctrl_core::model::{ContentKind, SourceKind, SourceRecord};
use ctrl_core::store::{self, StoreError};

fn unique_db_path(label: &str) -> std::path::PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("ctrl-store-{label}-{unique}.db"))
}

#[test]
fn memory_database_has_schema_but_no_sample_rows() {
    let db = store::open_memory().unwrap();

    assert!(store::list_all_records(&db).is_empty());
    assert_eq!(store::count_clipboard_entries(&db).unwrap(), 0);
}

#[test]
fn file_database_seeds_sample_data_exactly_once() {
    let path = unique_db_path("seed");

    let seeded = {
        let db = store::open_file(&path).unwrap();
        let records = store::list_all_records(&db);
        assert!(!records.is_empty());
        store::add_snippet(&db, "Extra", "", "extra content").unwrap();
        records.len()
    };

    {
        let db = store::open_file(&path).unwrap();
        let records = store::list_all_records(&db);
        // reopening must not reseed on top of existing data
        assert_eq!(records.len(), seeded + 1);
    }

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn seeded_data_spans_all_four_tables() {
    let db = store::open_memory().unwrap();
    store::seed_sample_data(&db).unwrap();

    let records = store::list_all_records(&db);
    for kind in [
        SourceKind::Snippet,
        SourceKind::Document,
        SourceKind::Bookmark,
        SourceKind::Tool,
    ] {
        assert!(
            records.iter().any(|record| record.kind() == kind),
            "missing seeded rows for {kind:?}"
        );
    }
    assert!(records
        .iter()
        .any(|record| record.display_title() == "Hello World"));
}

#[test]
fn add_operations_validate_required_fields() {
    let db = store::open_memory().unwrap();

    match store::add_snippet(&db, "t", "d", "   ") {
        Err(StoreError::MissingField(field)) => assert_eq!(field, "content"),
        other => panic!("unexpected result: {other:?}"),
    }
    match store::add_document(&db, "Docs", "") {
        Err(StoreError::MissingField(field)) => assert_eq!(field, "link"),
        other => panic!("unexpected result: {other:?}"),
    }
    match store::add_bookmark(&db, "", "https://a", "") {
        Err(StoreError::MissingField(field)) => assert_eq!(field, "title"),
        other => panic!("unexpected result: {other:?}"),
    }
    match store::add_tool(&db, "Tool", "", "", "", "") {
        Err(StoreError::MissingField(field)) => assert_eq!(field, "url"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn empty_tool_category_defaults_to_utility() {
    let db = store::open_memory().unwrap();

    store::add_tool(&db, "Shortener", "https://short.en", "", "  ", "links").unwrap();

    let tools = store::list_tools(&db);
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].category, "utility");
}

#[test]
fn delete_record_reports_whether_a_row_went_away() {
    let db = store::open_memory().unwrap();
    let id = store::add_snippet(&db, "gone soon", "", "body").unwrap();

    assert!(store::delete_record(&db, SourceKind::Snippet, id).unwrap());
    assert!(!store::delete_record(&db, SourceKind::Snippet, id).unwrap());
    assert!(store::list_snippets(&db).is_empty());
}

#[test]
fn snippet_without_title_displays_content_preview() {
    let db = store::open_memory().unwrap();
    let long_content = "x".repeat(80);
    store::add_snippet(&db, "", "", &long_content).unwrap();

    let records = store::list_all_records(&db);
    let title = records
        .iter()
        .find_map(|record| match record {
            SourceRecord::Snippet(_) => Some(record.display_title()),
            _ => None,
        })
        .unwrap();

    assert_eq!(title.chars().count(), 53); // 50 chars plus "..."
    assert!(title.ends_with("..."));
}

#[test]
fn repeated_head_capture_refreshes_instead_of_inserting() {
    let db = store::open_memory().unwrap();

    let first = store::add_clipboard_entry(&db, ContentKind::Url, "https://a", "https://a", 9).unwrap();
    assert!(!first.deduplicated);

    let again = store::add_clipboard_entry(&db, ContentKind::Url, "https://a", "https://a", 9).unwrap();
    assert!(again.deduplicated);
    assert_eq!(again.entry.id, first.entry.id);
    assert_eq!(store::count_clipboard_entries(&db).unwrap(), 1);
}

#[test]
fn only_the_newest_row_deduplicates() {
    let db = store::open_memory().unwrap();

    store::add_clipboard_entry(&db, ContentKind::Text, "alpha", "alpha", 5).unwrap();
    store::add_clipboard_entry(&db, ContentKind::Text, "beta", "beta", 4).unwrap();
    // "alpha" is no longer the newest row, so this is a fresh insert
    let third = store::add_clipboard_entry(&db, ContentKind::Text, "alpha", "alpha", 5).unwrap();

    assert!(!third.deduplicated);
    assert_eq!(store::count_clipboard_entries(&db).unwrap(), 3);
}

#[test]
fn clipboard_entries_list_newest_first() {
    let db = store::open_memory().unwrap();

    store::add_clipboard_entry(&db, ContentKind::Text, "one", "one", 3).unwrap();
    store::add_clipboard_entry(&db, ContentKind::Text, "two", "two", 3).unwrap();
    store::add_clipboard_entry(&db, ContentKind::Text, "three", "three", 5).unwrap();

    let entries = store::list_clipboard_entries(&db, 2);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].content, "three");
    assert_eq!(entries[1].content, "two");
}

#[test]
fn clipboard_update_rewrites_and_clear_empties() {
    let db = store::open_memory().unwrap();
    let saved = store::add_clipboard_entry(&db, ContentKind::Text, "plain", "plain", 5).unwrap();

    let changed = store::update_clipboard_entry(
        &db,
        saved.entry.id,
        ContentKind::Url,
        "https://b",
        "https://b",
        9,
    )
    .unwrap();
    assert!(changed);

    let fresh = store::get_clipboard_entry(&db, saved.entry.id).unwrap().unwrap();
    assert_eq!(fresh.kind, ContentKind::Url);
    assert_eq!(fresh.content, "https://b");

    assert_eq!(store::clear_clipboard_history(&db).unwrap(), 1);
    assert_eq!(store::count_clipboard_entries(&db).unwrap(), 0);
}
