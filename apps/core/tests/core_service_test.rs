use std::time::{SystemTime, UNIX_EPOCH};

use ctrl_core::clipboard::{CaptureOutcome, ScriptedClipboard};
use ctrl_core::config::Config;
use ctrl_core::core_service::{CoreService, QueryResults};
use ctrl_core::filesearch::EmptyLister;
use ctrl_core::model::{ResultAction, SourceKind};
use ctrl_core::modes::SearchMode;
use ctrl_core::search::{AI_CHAT_RESULT_ID, WEB_SEARCH_RESULT_ID};
use ctrl_core::shell::{RecordingShell, ShellCall};
use ctrl_core::store;

fn seeded_service() -> CoreService {
    let db = store::open_memory().unwrap();
    store::seed_sample_data(&db).unwrap();
    let mut service = CoreService::with_connection(Config::default(), db).unwrap();
    service.reload_data();
    service
}

fn service_with_doubles() -> (CoreService, ScriptedClipboard, RecordingShell) {
    let clipboard = ScriptedClipboard::new();
    let shell = RecordingShell::default();
    let service = seeded_service().with_collaborators(
        Box::new(clipboard.clone()),
        Box::new(EmptyLister),
        Box::new(shell.clone()),
    );
    (service, clipboard, shell)
}

fn palette_rows(results: &QueryResults) -> &[ctrl_core::model::SearchResult] {
    match results {
        QueryResults::Palette(rows) => rows,
        other => panic!("expected palette rows, got {other:?}"),
    }
}

#[test]
fn palette_query_finds_seeded_records() {
    let mut service = seeded_service();

    let reply = service.handle_query("hello");

    assert_eq!(reply.mode, SearchMode::Normal);
    assert_eq!(reply.placeholder, None);
    assert!(!reply.cleared_input);
    let rows = palette_rows(&reply.results);
    assert!(rows.iter().any(|row| row.title == "Hello World"));
    assert_eq!(rows[rows.len() - 2].id, WEB_SEARCH_RESULT_ID);
    assert_eq!(rows[rows.len() - 1].id, AI_CHAT_RESULT_ID);
}

#[test]
fn reply_sequence_increases_with_every_answer() {
    let mut service = seeded_service();

    assert_eq!(service.handle_query("a").sequence, 1);
    assert_eq!(service.handle_query("ab").sequence, 2);
    assert_eq!(service.handle_query("abc").sequence, 3);
    assert_eq!(service.on_escape().sequence, 4);
}

#[test]
fn prefix_enters_file_search_mode_and_escape_leaves_it() {
    let mut service = seeded_service();

    let entered = service.handle_query(">");
    assert_eq!(entered.mode, SearchMode::FileSearch);
    assert!(entered.cleared_input);
    assert_eq!(entered.placeholder, Some(SearchMode::FileSearch.placeholder()));
    assert!(matches!(entered.results, QueryResults::Files(ref hits) if hits.is_empty()));

    let in_mode = service.handle_query("report");
    assert_eq!(in_mode.mode, SearchMode::FileSearch);
    assert_eq!(in_mode.placeholder, None);
    assert!(!in_mode.cleared_input);

    let left = service.on_escape();
    assert_eq!(left.mode, SearchMode::Normal);
    assert!(left.cleared_input);
    assert_eq!(left.placeholder, Some(SearchMode::Normal.placeholder()));

    // a second escape has nothing to leave
    let idle = service.on_escape();
    assert!(!idle.cleared_input);
    assert_eq!(idle.placeholder, None);
}

#[test]
fn mode_prefixes_are_literal_inside_a_mode() {
    let mut service = seeded_service();
    service.handle_query(":");

    let reply = service.handle_query(">laugh");
    assert_eq!(reply.mode, SearchMode::Emoji);
    let rows = palette_rows(&reply.results);
    assert!(rows.is_empty(), "'>laugh' should match no emoji");
}

#[test]
fn emoji_mode_searches_the_corpus() {
    let mut service = seeded_service();

    let reply = service.handle_query(":fire");

    assert_eq!(reply.mode, SearchMode::Emoji);
    assert!(reply.cleared_input);
    let rows = palette_rows(&reply.results);
    assert!(!rows.is_empty());
    assert_eq!(
        rows[0].action,
        ResultAction::CopyText("\u{1F525}".to_string())
    );
    assert!(rows[0].subtitle.starts_with("fire"));
}

#[test]
fn clipboard_mode_lists_history_and_suspends_capture() {
    let (mut service, clipboard, _shell) = service_with_doubles();
    service.set_clipboard_monitoring(true);

    clipboard.push_read(Some("https://first.example"));
    assert_eq!(service.clipboard_tick(), CaptureOutcome::Inserted);

    let reply = service.handle_query(".");
    assert_eq!(reply.mode, SearchMode::Clipboard);
    match &reply.results {
        QueryResults::Clipboard(entries) => {
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].content, "https://first.example");
        }
        other => panic!("expected clipboard rows, got {other:?}"),
    }

    // browsing history suspends capture until escape
    clipboard.push_read(Some("while browsing"));
    assert_eq!(service.clipboard_tick(), CaptureOutcome::Ignored);

    service.on_escape();
    assert_eq!(service.clipboard_tick(), CaptureOutcome::Inserted);
}

#[test]
fn activation_copies_text_through_the_clipboard() {
    let (mut service, clipboard, _shell) = service_with_doubles();

    let outcome = service.activate(&ResultAction::CopyText("fn main() {}".to_string()));

    assert!(outcome.completed);
    assert_eq!(clipboard.writes(), vec!["fn main() {}".to_string()]);
}

#[test]
fn activation_opens_urls_through_the_shell() {
    let (mut service, _clipboard, shell) = service_with_doubles();

    let outcome = service.activate(&ResultAction::OpenExternal(
        "https://docs.example".to_string(),
    ));

    assert!(outcome.completed);
    assert_eq!(
        shell.calls(),
        vec![ShellCall::OpenExternal("https://docs.example".to_string())]
    );
}

#[test]
fn activating_a_missing_path_fails_without_touching_the_shell() {
    let (mut service, _clipboard, shell) = service_with_doubles();

    let outcome = service.activate(&ResultAction::OpenPath(
        "/ctrl-missing/never/here.txt".to_string(),
    ));

    assert!(!outcome.completed);
    assert!(outcome.message.unwrap().contains("no longer exists"));
    assert!(shell.calls().is_empty());
}

#[test]
fn activating_an_existing_path_opens_it() {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("ctrl-activate-{unique}.tmp"));
    std::fs::write(&path, b"ok").unwrap();

    let (mut service, _clipboard, shell) = service_with_doubles();
    let outcome = service.activate(&ResultAction::OpenPath(
        path.to_string_lossy().into_owned(),
    ));

    assert!(outcome.completed);
    assert_eq!(shell.calls(), vec![ShellCall::OpenPath(path.clone())]);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn reload_runs_in_core_while_host_commands_dispatch() {
    let mut service = seeded_service();

    let reload = service.activate(&ResultAction::Command("reload".to_string()));
    assert!(reload.completed);
    assert_eq!(reload.host_command, None);
    assert!(reload.message.unwrap().contains("reloaded"));

    let quit = service.activate(&ResultAction::Command("quit".to_string()));
    assert!(quit.completed);
    assert_eq!(quit.host_command.as_deref(), Some("quit"));
}

#[test]
fn emoji_command_switches_mode_in_core() {
    let mut service = seeded_service();

    let outcome = service.activate(&ResultAction::Command("emoji".to_string()));

    assert_eq!(outcome.host_command.as_deref(), Some("emoji"));
    assert_eq!(service.mode(), SearchMode::Emoji);

    let reply = service.handle_query("laugh");
    assert_eq!(reply.mode, SearchMode::Emoji);
    let rows = palette_rows(&reply.results);
    assert!(!rows.is_empty());
}

#[test]
fn added_items_are_searchable_and_deletable() {
    let mut service = seeded_service();

    let id = service
        .add_snippet("Zebra Stripes", "test pattern", "zigzag()")
        .unwrap();
    let reply = service.handle_query("zebra");
    assert!(palette_rows(&reply.results)
        .iter()
        .any(|row| row.title == "Zebra Stripes"));

    assert!(service.delete_item(SourceKind::Snippet, id).unwrap());
    let after = service.handle_query("zebra");
    assert!(!palette_rows(&after.results)
        .iter()
        .any(|row| row.title == "Zebra Stripes"));
}

#[test]
fn clipboard_mutations_flow_through_the_service() {
    let (mut service, clipboard, _shell) = service_with_doubles();
    service.set_clipboard_monitoring(true);
    clipboard.push_read(Some("plain words"));
    service.clipboard_tick();

    let reply = service.handle_query(".");
    let id = match &reply.results {
        QueryResults::Clipboard(entries) => entries[0].id,
        other => panic!("expected clipboard rows, got {other:?}"),
    };

    assert!(service.clipboard_update(id, "https://edited.example").unwrap());
    let updated = service.handle_query("https");
    match &updated.results {
        QueryResults::Clipboard(entries) => {
            assert_eq!(entries[0].content, "https://edited.example");
        }
        other => panic!("expected clipboard rows, got {other:?}"),
    }

    assert!(service.clipboard_delete(id).unwrap());
    assert_eq!(service.clipboard_clear().unwrap(), 0);
}
