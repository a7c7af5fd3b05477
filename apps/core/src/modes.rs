/// Search modes the input field can be in. Reserved prefix characters move
/// Normal into one of the others; Escape always comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Normal,
    Emoji,
    Clipboard,
    FileSearch,
}

pub const NORMAL_PLACEHOLDER: &str =
    "Fuzzy search snippets, documents, bookmarks, and tools...";
pub const EMOJI_PLACEHOLDER: &str = "Search emojis... (ESC to go back)";
pub const CLIPBOARD_PLACEHOLDER: &str = "Search clipboard history... (ESC to go back)";
pub const FILE_SEARCH_PLACEHOLDER: &str = "Search files... (ESC to go back)";

impl SearchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::Normal => "normal",
            SearchMode::Emoji => "emoji",
            SearchMode::Clipboard => "clipboard",
            SearchMode::FileSearch => "file-search",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            SearchMode::Normal => NORMAL_PLACEHOLDER,
            SearchMode::Emoji => EMOJI_PLACEHOLDER,
            SearchMode::Clipboard => CLIPBOARD_PLACEHOLDER,
            SearchMode::FileSearch => FILE_SEARCH_PLACEHOLDER,
        }
    }
}

/// Where one keystroke's worth of input should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryRoute {
    /// Normal mode with empty input: show the empty state.
    Idle,
    /// Normal mode: commands, fuzzy matches and web fallbacks.
    Palette(String),
    /// A reserved prefix just switched modes. The visible input gets
    /// cleared; `initial` is whatever followed the prefix character.
    Entered { mode: SearchMode, initial: String },
    /// Already inside a mode; prefix characters are literal here.
    InMode { mode: SearchMode, query: String },
}

/// Tracks which mode the palette is in and routes raw input accordingly.
#[derive(Debug, Default)]
pub struct ModeController {
    mode: SearchMode,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn placeholder(&self) -> &'static str {
        self.mode.placeholder()
    }

    /// Routes one query. In Normal mode a leading `>` enters file search,
    /// `.` clipboard history and `:` the emoji picker, in that precedence;
    /// the rest of the input carries into the new mode as its first query.
    pub fn route_query(&mut self, raw: &str) -> QueryRoute {
        let trimmed = raw.trim();

        if self.mode != SearchMode::Normal {
            return QueryRoute::InMode {
                mode: self.mode,
                query: trimmed.to_string(),
            };
        }

        if trimmed.is_empty() {
            return QueryRoute::Idle;
        }
        if let Some(rest) = trimmed.strip_prefix('>') {
            return self.enter(SearchMode::FileSearch, rest);
        }
        if let Some(rest) = trimmed.strip_prefix('.') {
            return self.enter(SearchMode::Clipboard, rest);
        }
        if let Some(rest) = trimmed.strip_prefix(':') {
            return self.enter(SearchMode::Emoji, rest);
        }
        QueryRoute::Palette(trimmed.to_string())
    }

    fn enter(&mut self, mode: SearchMode, initial: &str) -> QueryRoute {
        self.mode = mode;
        QueryRoute::Entered {
            mode,
            initial: initial.to_string(),
        }
    }

    /// Direct mode switch, used when a built-in command (rather than a
    /// typed prefix) opens a mode.
    pub fn enter_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
    }

    /// Leaves the current mode. Returns false when already in Normal mode,
    /// in which case nothing changed and the host should close instead.
    pub fn on_escape(&mut self) -> bool {
        if self.mode == SearchMode::Normal {
            return false;
        }
        self.mode = SearchMode::Normal;
        true
    }
}
