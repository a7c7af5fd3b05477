use std::sync::OnceLock;

use regex::Regex;
use rusqlite::Connection;

use crate::logging;
use crate::model::{ClipboardEntry, ContentKind};
use crate::store::{self, StoreError};

/// Oldest entries are evicted beyond this many rows.
pub const HISTORY_CAP: usize = 1000;
/// Upper bound on rows returned by a history search.
pub const SEARCH_LIMIT: usize = 50;
/// Preview text is cut to this many characters.
pub const PREVIEW_MAX_CHARS: usize = 100;

/// Reads and writes the system clipboard. The system implementation talks to
/// the OS; tests script their own.
pub trait ClipboardIo {
    /// Current clipboard text, or `None` when the clipboard is empty,
    /// holds non-text content, or is transiently unreadable.
    fn read_text(&mut self) -> Option<String>;
    fn write_text(&mut self, text: &str) -> Result<(), String>;
}

/// System clipboard via arboard. The handle is opened per call; some
/// platforms invalidate long-lived handles when other apps touch the
/// clipboard.
pub struct SystemClipboard;

impl ClipboardIo for SystemClipboard {
    fn read_text(&mut self) -> Option<String> {
        let mut board = match arboard::Clipboard::new() {
            Ok(board) => board,
            Err(err) => {
                logging::debug(&format!("clipboard unavailable: {err}"));
                return None;
            }
        };
        match board.get_text() {
            Ok(text) => Some(text),
            Err(arboard::Error::ContentNotAvailable) => None,
            Err(err) => {
                logging::debug(&format!("clipboard read failed: {err}"));
                None
            }
        }
    }

    fn write_text(&mut self, text: &str) -> Result<(), String> {
        let mut board =
            arboard::Clipboard::new().map_err(|err| format!("clipboard unavailable: {err}"))?;
        board
            .set_text(text.to_string())
            .map_err(|err| format!("clipboard write failed: {err}"))
    }
}

/// Stand-in used before runtime providers are attached.
pub struct NoopClipboard;

impl ClipboardIo for NoopClipboard {
    fn read_text(&mut self) -> Option<String> {
        None
    }

    fn write_text(&mut self, _text: &str) -> Result<(), String> {
        Ok(())
    }
}

pub fn default_clipboard_io() -> Box<dyn ClipboardIo> {
    Box::new(SystemClipboard)
}

/// Test double with scripted reads and recorded writes. Clones share state,
/// so a handle kept outside the service still sees every write.
#[derive(Clone, Default)]
pub struct ScriptedClipboard {
    state: std::sync::Arc<std::sync::Mutex<ScriptedState>>,
}

#[derive(Default)]
struct ScriptedState {
    reads: std::collections::VecDeque<Option<String>>,
    writes: Vec<String>,
}

impl ScriptedClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the next value `read_text` will return. An exhausted queue
    /// reads as `None`, the same as an unchanged clipboard.
    pub fn push_read(&self, text: Option<&str>) {
        if let Ok(mut state) = self.state.lock() {
            state.reads.push_back(text.map(str::to_string));
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.state
            .lock()
            .map(|state| state.writes.clone())
            .unwrap_or_default()
    }
}

impl ClipboardIo for ScriptedClipboard {
    fn read_text(&mut self) -> Option<String> {
        let mut state = self.state.lock().ok()?;
        state.reads.pop_front().flatten()
    }

    fn write_text(&mut self, text: &str) -> Result<(), String> {
        if let Ok(mut state) = self.state.lock() {
            state.writes.push(text.to_string());
        }
        Ok(())
    }
}

/// What a poll or capture did with the observed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Nothing captured: monitoring off, history open, empty or repeated text,
    /// or the save failed.
    Ignored,
    /// A new history row was written.
    Inserted,
    /// The text matched the newest row, whose timestamps were refreshed.
    Refreshed,
}

/// In-memory mirror of the clipboard_history table, newest first, plus the
/// monitoring state driven by the host's poll ticks.
pub struct ClipboardHistory {
    entries: Vec<ClipboardEntry>,
    last_observed: Option<String>,
    monitoring: bool,
    viewing_history: bool,
}

impl ClipboardHistory {
    pub fn load(db: &Connection) -> Self {
        ClipboardHistory {
            entries: store::list_clipboard_entries(db, HISTORY_CAP),
            last_observed: None,
            monitoring: false,
            viewing_history: false,
        }
    }

    pub fn start_monitoring(&mut self) {
        self.monitoring = true;
    }

    pub fn stop_monitoring(&mut self) {
        self.monitoring = false;
    }

    pub fn is_monitoring(&self) -> bool {
        self.monitoring
    }

    /// While the user is browsing history, captures are suspended so that
    /// copying an entry back out does not reshuffle the list underneath them.
    pub fn set_viewing_history(&mut self, viewing: bool) {
        self.viewing_history = viewing;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ClipboardEntry] {
        &self.entries
    }

    /// One host-driven poll tick: read the clipboard and capture its text if
    /// it is new since the last tick.
    pub fn poll(&mut self, db: &Connection, io: &mut dyn ClipboardIo) -> CaptureOutcome {
        if !self.monitoring || self.viewing_history {
            return CaptureOutcome::Ignored;
        }
        let Some(text) = io.read_text() else {
            return CaptureOutcome::Ignored;
        };
        if text.trim().is_empty() {
            return CaptureOutcome::Ignored;
        }
        if self.last_observed.as_deref() == Some(text.as_str()) {
            return CaptureOutcome::Ignored;
        }
        self.last_observed = Some(text.clone());
        self.capture(db, &text)
    }

    /// Classifies and persists one captured text. A repeat of the newest row
    /// refreshes that row instead of inserting; anything else goes in at the
    /// front and may evict the oldest rows past [`HISTORY_CAP`].
    pub fn capture(&mut self, db: &Connection, content: &str) -> CaptureOutcome {
        let kind = classify_content(content);
        let preview = preview_text(content);
        let size = content.len() as i64;

        match store::add_clipboard_entry(db, kind, content, &preview, size) {
            Ok(saved) if saved.deduplicated => {
                let id = saved.entry.id;
                self.entries.retain(|entry| entry.id != id);
                self.entries.insert(0, saved.entry);
                CaptureOutcome::Refreshed
            }
            Ok(saved) => {
                self.entries.insert(0, saved.entry);
                self.enforce_cap(db);
                CaptureOutcome::Inserted
            }
            Err(err) => {
                logging::warn(&format!("clipboard save failed: {err}"));
                CaptureOutcome::Ignored
            }
        }
    }

    fn enforce_cap(&mut self, db: &Connection) {
        while self.entries.len() > HISTORY_CAP {
            if let Some(evicted) = self.entries.pop() {
                if let Err(err) = store::delete_clipboard_entry(db, evicted.id) {
                    logging::warn(&format!(
                        "evicting clipboard entry {} failed: {err}",
                        evicted.id
                    ));
                }
            }
        }
    }

    /// Case-insensitive substring search over content, preview and kind
    /// label. An empty query returns the most recent entries.
    pub fn search(&self, query: &str) -> Vec<ClipboardEntry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.entries.iter().take(SEARCH_LIMIT).cloned().collect();
        }
        self.entries
            .iter()
            .filter(|entry| {
                entry.content.to_lowercase().contains(&needle)
                    || entry.preview.to_lowercase().contains(&needle)
                    || entry.kind.as_str().contains(needle.as_str())
            })
            .take(SEARCH_LIMIT)
            .cloned()
            .collect()
    }

    /// Rewrites an entry's content, reclassifying it in the process.
    pub fn update_entry(
        &mut self,
        db: &Connection,
        id: i64,
        content: &str,
    ) -> Result<bool, StoreError> {
        let kind = classify_content(content);
        let preview = preview_text(content);
        let size = content.len() as i64;
        let changed = store::update_clipboard_entry(db, id, kind, content, &preview, size)?;
        if changed {
            if let Ok(Some(fresh)) = store::get_clipboard_entry(db, id) {
                if let Some(slot) = self.entries.iter_mut().find(|entry| entry.id == id) {
                    *slot = fresh;
                }
            }
        }
        Ok(changed)
    }

    pub fn delete_entry(&mut self, db: &Connection, id: i64) -> Result<bool, StoreError> {
        let removed = store::delete_clipboard_entry(db, id)?;
        if removed {
            self.entries.retain(|entry| entry.id != id);
        }
        Ok(removed)
    }

    pub fn clear(&mut self, db: &Connection) -> Result<usize, StoreError> {
        let removed = store::clear_clipboard_history(db)?;
        self.entries.clear();
        Ok(removed)
    }
}

/// Buckets a captured text by what it looks like. First match wins, in this
/// order: url, color, email, phone, file path, code, plain text.
pub fn classify_content(content: &str) -> ContentKind {
    let trimmed = content.trim();
    if url_pattern().is_match(trimmed) {
        return ContentKind::Url;
    }
    if color_patterns().iter().any(|p| p.is_match(trimmed)) {
        return ContentKind::Color;
    }
    if email_pattern().is_match(trimmed) {
        return ContentKind::Email;
    }
    if phone_pattern().is_match(trimmed) {
        return ContentKind::Phone;
    }
    if path_pattern().is_match(trimmed) {
        return ContentKind::File;
    }
    if code_patterns().iter().any(|p| p.is_match(trimmed)) {
        return ContentKind::Code;
    }
    ContentKind::Text
}

/// Single-line preview: whitespace runs collapse to one space, then the text
/// is cut at [`PREVIEW_MAX_CHARS`] characters.
pub fn preview_text(content: &str) -> String {
    let collapsed = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() > PREVIEW_MAX_CHARS {
        let head: String = collapsed.chars().take(PREVIEW_MAX_CHARS).collect();
        format!("{head}...")
    } else {
        collapsed
    }
}

fn url_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    // Any scheme followed by non-whitespace, mirroring how loosely URL
    // detection behaves in practice ("mailto:x@y" counts, "12:30" does not).
    CELL.get_or_init(|| {
        Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.\-]*:\S+$").expect("url pattern must compile")
    })
}

fn color_patterns() -> &'static [Regex] {
    static CELL: OnceLock<Vec<Regex>> = OnceLock::new();
    CELL.get_or_init(|| {
        [
            r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$",
            r"(?i)^rgba?\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*(,\s*[\d.]+)?\s*\)$",
            r"(?i)^hsla?\(\s*\d+\s*,\s*\d+%\s*,\s*\d+%\s*(,\s*[\d.]+)?\s*\)$",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("color pattern must compile"))
        .collect()
    })
}

fn email_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    CELL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
    })
}

fn phone_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    CELL.get_or_init(|| {
        Regex::new(r"^\+?[\d\s\-()]{10,}$").expect("phone pattern must compile")
    })
}

fn path_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    CELL.get_or_init(|| {
        Regex::new(r"^([a-zA-Z]:\\|/|\./|\.\./|~/)").expect("path pattern must compile")
    })
}

fn code_patterns() -> &'static [Regex] {
    static CELL: OnceLock<Vec<Regex>> = OnceLock::new();
    CELL.get_or_init(|| {
        [
            r"function\s+\w+\s*\(",
            r"class\s+\w+",
            r"import\s+.*from",
            r"export\s+(default\s+)?",
            r"const\s+\w+\s*=",
            r"let\s+\w+\s*=",
            r"var\s+\w+\s*=",
            r"<[^>]+>",
            r"\{\s*\w+:\s*\w+",
            r"\[\s*\w+",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("code pattern must compile"))
        .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_win_over_every_other_bucket() {
        assert_eq!(classify_content("https://github.com"), ContentKind::Url);
        assert_eq!(classify_content("mailto:x@example.com"), ContentKind::Url);
        // Leading digit keeps times and ratios out of the url bucket.
        assert_eq!(classify_content("12:30"), ContentKind::Text);
    }

    #[test]
    fn color_formats_are_recognized() {
        assert_eq!(classify_content("#1a2b3c"), ContentKind::Color);
        assert_eq!(classify_content("#fff"), ContentKind::Color);
        assert_eq!(classify_content("rgb(255, 0, 0)"), ContentKind::Color);
        assert_eq!(classify_content("rgba(12, 34, 56, 0.5)"), ContentKind::Color);
        assert_eq!(classify_content("hsl(120, 50%, 50%)"), ContentKind::Color);
        assert_eq!(classify_content("#12"), ContentKind::Text);
    }

    #[test]
    fn emails_phones_and_paths_are_recognized() {
        assert_eq!(classify_content("dev@example.com"), ContentKind::Email);
        assert_eq!(classify_content("+1 (555) 123-4567"), ContentKind::Phone);
        assert_eq!(classify_content("/usr/local/bin"), ContentKind::File);
        assert_eq!(classify_content("./relative/path"), ContentKind::File);
        assert_eq!(classify_content("~/projects"), ContentKind::File);
        // A drive letter reads as a one-letter scheme, so the url bucket
        // claims Windows paths before the file check runs.
        assert_eq!(classify_content(r"C:\Users\dev\notes.txt"), ContentKind::Url);
    }

    #[test]
    fn code_shapes_are_recognized() {
        assert_eq!(classify_content("const answer = 42;"), ContentKind::Code);
        assert_eq!(classify_content("function greet() {}"), ContentKind::Code);
        assert_eq!(classify_content("<div class=\"row\">"), ContentKind::Code);
        assert_eq!(classify_content("plain sentence here"), ContentKind::Text);
    }

    #[test]
    fn preview_collapses_whitespace_and_caps_length() {
        assert_eq!(preview_text("a\n\tb   c"), "a b c");

        let long = "word ".repeat(50);
        let preview = preview_text(&long);
        assert_eq!(preview.chars().count(), PREVIEW_MAX_CHARS + 3);
        assert!(preview.ends_with("..."));
    }
}
