use ctrl_core::clipboard::{CaptureOutcome, ClipboardHistory, ScriptedClipboard};
use ctrl_core::model::ContentKind;
use ctrl_core::store;

#[test]
fn poll_reads_nothing_until_monitoring_starts() {
    let db = store::open_memory().unwrap();
    let mut history = ClipboardHistory::load(&db);
    let mut io = ScriptedClipboard::new();
    io.push_read(Some("copied text"));

    assert_eq!(history.poll(&db, &mut io), CaptureOutcome::Ignored);
    assert!(history.is_empty());

    history.start_monitoring();
    assert_eq!(history.poll(&db, &mut io), CaptureOutcome::Inserted);
    assert_eq!(history.len(), 1);
}

#[test]
fn viewing_history_suspends_captures() {
    let db = store::open_memory().unwrap();
    let mut history = ClipboardHistory::load(&db);
    history.start_monitoring();
    let mut io = ScriptedClipboard::new();
    io.push_read(Some("while browsing"));

    history.set_viewing_history(true);
    assert_eq!(history.poll(&db, &mut io), CaptureOutcome::Ignored);

    history.set_viewing_history(false);
    assert_eq!(history.poll(&db, &mut io), CaptureOutcome::Inserted);
}

#[test]
fn unchanged_clipboard_is_captured_once() {
    let db = store::open_memory().unwrap();
    let mut history = ClipboardHistory::load(&db);
    history.start_monitoring();
    let mut io = ScriptedClipboard::new();

    io.push_read(Some("alpha"));
    assert_eq!(history.poll(&db, &mut io), CaptureOutcome::Inserted);

    io.push_read(Some("alpha"));
    assert_eq!(history.poll(&db, &mut io), CaptureOutcome::Ignored);

    io.push_read(Some("beta"));
    assert_eq!(history.poll(&db, &mut io), CaptureOutcome::Inserted);
    assert_eq!(history.entries()[0].content, "beta");
    assert_eq!(history.len(), 2);
}

#[test]
fn empty_and_unreadable_clipboard_reads_are_ignored() {
    let db = store::open_memory().unwrap();
    let mut history = ClipboardHistory::load(&db);
    history.start_monitoring();
    let mut io = ScriptedClipboard::new();

    io.push_read(None);
    assert_eq!(history.poll(&db, &mut io), CaptureOutcome::Ignored);

    io.push_read(Some("   "));
    assert_eq!(history.poll(&db, &mut io), CaptureOutcome::Ignored);

    assert!(history.is_empty());
}

#[test]
fn reobserving_the_head_after_restart_refreshes_it() {
    let db = store::open_memory().unwrap();

    let mut before = ClipboardHistory::load(&db);
    before.capture(&db, "persisted text");
    drop(before);

    // a fresh engine has no memory of the last observed text
    let mut after = ClipboardHistory::load(&db);
    assert_eq!(after.len(), 1);
    after.start_monitoring();
    let mut io = ScriptedClipboard::new();
    io.push_read(Some("persisted text"));

    assert_eq!(after.poll(&db, &mut io), CaptureOutcome::Refreshed);
    assert_eq!(after.len(), 1);
    assert_eq!(store::count_clipboard_entries(&db).unwrap(), 1);
}

#[test]
fn captures_classify_and_preview_content() {
    let db = store::open_memory().unwrap();
    let mut history = ClipboardHistory::load(&db);

    history.capture(&db, "https://docs.rs/regex/latest");
    assert_eq!(history.entries()[0].kind, ContentKind::Url);

    let long_text = "word ".repeat(40);
    history.capture(&db, &long_text);
    let entry = &history.entries()[0];
    assert_eq!(entry.kind, ContentKind::Text);
    assert!(entry.preview.ends_with("..."));
    assert!(entry.preview.chars().count() <= 103);
}

#[test]
fn history_evicts_oldest_entries_past_the_cap() {
    let db = store::open_memory().unwrap();
    let mut history = ClipboardHistory::load(&db);

    for i in 0..1002 {
        history.capture(&db, &format!("item-{i}"));
    }

    assert_eq!(history.len(), 1000);
    assert_eq!(store::count_clipboard_entries(&db).unwrap(), 1000);
    assert_eq!(history.entries()[0].content, "item-1001");
    assert_eq!(history.entries()[999].content, "item-2");
}

#[test]
fn search_matches_content_preview_and_kind_label() {
    let db = store::open_memory().unwrap();
    let mut history = ClipboardHistory::load(&db);
    for i in 0..60 {
        history.capture(&db, &format!("https://site-{i}.example"));
    }
    history.capture(&db, "hello note");

    assert_eq!(history.search("").len(), 50);
    assert_eq!(history.search("url").len(), 50);

    let hello = history.search("HELLO");
    assert_eq!(hello.len(), 1);
    assert_eq!(hello[0].content, "hello note");

    let one = history.search("site-59");
    assert_eq!(one.len(), 1);
}

#[test]
fn update_entry_reclassifies_in_place() {
    let db = store::open_memory().unwrap();
    let mut history = ClipboardHistory::load(&db);
    history.capture(&db, "plain words");
    let id = history.entries()[0].id;

    assert!(history.update_entry(&db, id, "https://changed.example").unwrap());

    let entry = &history.entries()[0];
    assert_eq!(entry.id, id);
    assert_eq!(entry.kind, ContentKind::Url);
    assert_eq!(entry.content, "https://changed.example");
}

#[test]
fn delete_and_clear_keep_store_and_memory_in_sync() {
    let db = store::open_memory().unwrap();
    let mut history = ClipboardHistory::load(&db);
    history.capture(&db, "first");
    history.capture(&db, "second");
    let first_id = history.entries()[1].id;

    assert!(history.delete_entry(&db, first_id).unwrap());
    assert_eq!(history.len(), 1);
    assert_eq!(history.entries()[0].content, "second");

    assert_eq!(history.clear(&db).unwrap(), 1);
    assert!(history.is_empty());
    assert_eq!(store::count_clipboard_entries(&db).unwrap(), 0);
}
