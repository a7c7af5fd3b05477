use std::path::Path;

use rusqlite::Connection;

use crate::clipboard::{self, CaptureOutcome, ClipboardHistory, ClipboardIo, NoopClipboard};
use crate::config::{validate, Config};
use crate::emoji;
use crate::filesearch::{self, DirectoryLister, EmptyLister, FileHit, FileSearchEngine, SearchRoot};
use crate::logging;
use crate::model::{ClipboardEntry, ResultAction, SearchResult, SourceKind};
use crate::modes::{ModeController, QueryRoute, SearchMode};
use crate::search::{self, FuzzyIndex};
use crate::shell::{self, NoopShell, ShellActions};
use crate::store::{self, StoreError};

#[derive(Debug)]
pub enum ServiceError {
    Config(String),
    Store(StoreError),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(error) => write!(f, "config error: {error}"),
            Self::Store(error) => write!(f, "store error: {error}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// One query's worth of answer. `sequence` increases with every reply so a
/// host can drop answers that arrive after a newer keystroke already went
/// out.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryReply {
    pub sequence: u64,
    pub mode: SearchMode,
    /// Present only when this reply switched modes.
    pub placeholder: Option<&'static str>,
    pub cleared_input: bool,
    pub results: QueryResults,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryResults {
    Palette(Vec<SearchResult>),
    Clipboard(Vec<ClipboardEntry>),
    Files(Vec<FileHit>),
}

/// What happened when a row was activated. `host_command` carries command
/// ids the host shell has to act on itself (opening windows, quitting).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivateOutcome {
    pub completed: bool,
    pub host_command: Option<String>,
    pub message: Option<String>,
}

impl ActivateOutcome {
    pub fn done() -> Self {
        Self {
            completed: true,
            host_command: None,
            message: None,
        }
    }

    pub fn failed(message: String) -> Self {
        Self {
            completed: false,
            host_command: None,
            message: Some(message),
        }
    }

    pub fn dispatch(command: &str) -> Self {
        Self {
            completed: true,
            host_command: Some(command.to_string()),
            message: None,
        }
    }
}

pub struct CoreService {
    config: Config,
    db: Connection,
    modes: ModeController,
    index: FuzzyIndex,
    clipboard: ClipboardHistory,
    files: FileSearchEngine,
    clipboard_io: Box<dyn ClipboardIo>,
    lister: Box<dyn DirectoryLister>,
    shell: Box<dyn ShellActions>,
    query_seq: u64,
}

impl CoreService {
    pub fn new(config: Config) -> Result<Self, ServiceError> {
        validate(&config).map_err(ServiceError::Config)?;
        let db = store::open_file(&config.database_path)?;
        Ok(Self::assemble(config, db))
    }

    pub fn with_connection(config: Config, db: Connection) -> Result<Self, ServiceError> {
        validate(&config).map_err(ServiceError::Config)?;
        Ok(Self::assemble(config, db))
    }

    fn assemble(config: Config, db: Connection) -> Self {
        let mut roots = filesearch::default_search_roots();
        for extra in &config.file_search.extra_roots {
            roots.push(SearchRoot::pinned(extra.clone()));
        }
        let clipboard = ClipboardHistory::load(&db);
        Self {
            config,
            db,
            modes: ModeController::new(),
            index: FuzzyIndex::build(&[]),
            clipboard,
            files: FileSearchEngine::new(roots),
            clipboard_io: Box::new(NoopClipboard),
            lister: Box::new(EmptyLister),
            shell: Box::new(NoopShell),
            query_seq: 0,
        }
    }

    /// Swaps the inert default collaborators for the real system-backed
    /// ones. Used by the runtime; tests keep the defaults or inject fakes.
    pub fn with_runtime_providers(mut self) -> Self {
        self.clipboard_io = clipboard::default_clipboard_io();
        self.lister = filesearch::default_lister();
        self.shell = shell::default_shell();
        self
    }

    pub fn with_collaborators(
        mut self,
        clipboard_io: Box<dyn ClipboardIo>,
        lister: Box<dyn DirectoryLister>,
        shell: Box<dyn ShellActions>,
    ) -> Self {
        self.clipboard_io = clipboard_io;
        self.lister = lister;
        self.shell = shell;
        self
    }

    pub fn mode(&self) -> SearchMode {
        self.modes.mode()
    }

    pub fn is_monitoring_clipboard(&self) -> bool {
        self.clipboard.is_monitoring()
    }

    /// Re-reads every snippet, document, bookmark and tool and rebuilds the
    /// fuzzy index over them. Returns how many records are searchable.
    pub fn reload_data(&mut self) -> usize {
        let records = store::list_all_records(&self.db);
        let count = records.len();
        self.index = FuzzyIndex::build(&records);
        logging::debug(&format!("indexed {count} records"));
        count
    }

    pub fn rebuild_file_index(&mut self) -> usize {
        if !self.config.file_search.enabled {
            return 0;
        }
        self.files.build_index(self.lister.as_ref())
    }

    /// Routes one raw input line to whichever surface should answer it.
    pub fn handle_query(&mut self, raw: &str) -> QueryReply {
        self.query_seq += 1;
        let sequence = self.query_seq;

        match self.modes.route_query(raw) {
            QueryRoute::Idle => QueryReply {
                sequence,
                mode: SearchMode::Normal,
                placeholder: None,
                cleared_input: false,
                results: QueryResults::Palette(Vec::new()),
            },
            QueryRoute::Palette(query) => QueryReply {
                sequence,
                mode: SearchMode::Normal,
                placeholder: None,
                cleared_input: false,
                results: QueryResults::Palette(search::search_palette(
                    &self.index,
                    &query,
                    self.config.max_results as usize,
                )),
            },
            QueryRoute::Entered { mode, initial } => {
                if mode == SearchMode::Clipboard {
                    self.clipboard.set_viewing_history(true);
                }
                QueryReply {
                    sequence,
                    mode,
                    placeholder: Some(mode.placeholder()),
                    cleared_input: true,
                    results: self.results_for_mode(mode, &initial),
                }
            }
            QueryRoute::InMode { mode, query } => QueryReply {
                sequence,
                mode,
                placeholder: None,
                cleared_input: false,
                results: self.results_for_mode(mode, &query),
            },
        }
    }

    /// Escape leaves the current mode. When already in normal mode nothing
    /// changes and the host is free to close the window instead.
    pub fn on_escape(&mut self) -> QueryReply {
        self.query_seq += 1;
        let left_mode = self.modes.on_escape();
        if left_mode {
            self.clipboard.set_viewing_history(false);
        }
        QueryReply {
            sequence: self.query_seq,
            mode: SearchMode::Normal,
            placeholder: left_mode.then(|| SearchMode::Normal.placeholder()),
            cleared_input: left_mode,
            results: QueryResults::Palette(Vec::new()),
        }
    }

    fn results_for_mode(&self, mode: SearchMode, query: &str) -> QueryResults {
        match mode {
            SearchMode::Normal => QueryResults::Palette(search::search_palette(
                &self.index,
                query,
                self.config.max_results as usize,
            )),
            SearchMode::Emoji => QueryResults::Palette(emoji::search(query)),
            SearchMode::Clipboard => QueryResults::Clipboard(self.clipboard.search(query)),
            SearchMode::FileSearch => {
                if !self.config.file_search.enabled {
                    return QueryResults::Files(Vec::new());
                }
                QueryResults::Files(self.files.search(self.lister.as_ref(), query, false))
            }
        }
    }

    pub fn activate(&mut self, action: &ResultAction) -> ActivateOutcome {
        match action {
            ResultAction::CopyText(text) => match self.clipboard_io.write_text(text) {
                Ok(()) => ActivateOutcome::done(),
                Err(error) => {
                    logging::warn(&format!("clipboard write failed: {error}"));
                    ActivateOutcome::failed(error)
                }
            },
            ResultAction::OpenExternal(url) => match self.shell.open_external(url) {
                Ok(()) => ActivateOutcome::done(),
                Err(error) => {
                    logging::warn(&format!("open external failed: {error}"));
                    ActivateOutcome::failed(error.to_string())
                }
            },
            ResultAction::OpenPath(path) => self.open_on_disk(path, false),
            ResultAction::RevealPath(path) => self.open_on_disk(path, true),
            ResultAction::Command(id) => self.run_command(id),
        }
    }

    /// Paths are validated at activation time, not at search time, since a
    /// file can vanish between being listed and being picked.
    fn open_on_disk(&self, raw: &str, reveal: bool) -> ActivateOutcome {
        let path = Path::new(raw);
        if !path.exists() {
            logging::warn(&format!("path no longer exists: {raw}"));
            return ActivateOutcome::failed(format!("path no longer exists: {raw}"));
        }
        let result = if reveal {
            self.shell.reveal_path(path)
        } else {
            self.shell.open_path(path)
        };
        match result {
            Ok(()) => ActivateOutcome::done(),
            Err(error) => {
                logging::warn(&format!("shell action failed: {error}"));
                ActivateOutcome::failed(error.to_string())
            }
        }
    }

    fn run_command(&mut self, id: &str) -> ActivateOutcome {
        match id {
            "reload" => {
                let count = self.reload_data();
                ActivateOutcome {
                    completed: true,
                    host_command: None,
                    message: Some(format!("reloaded {count} items")),
                }
            }
            // Emoji mode flips here so the next query lands in the picker;
            // the host still gets told so it can clear its input box.
            "emoji" => {
                self.modes.enter_mode(SearchMode::Emoji);
                ActivateOutcome::dispatch("emoji")
            }
            other => ActivateOutcome::dispatch(other),
        }
    }

    pub fn add_snippet(
        &mut self,
        title: &str,
        description: &str,
        content: &str,
    ) -> Result<i64, ServiceError> {
        let id = store::add_snippet(&self.db, title, description, content)?;
        self.reload_data();
        Ok(id)
    }

    pub fn add_document(&mut self, title: &str, link: &str) -> Result<i64, ServiceError> {
        let id = store::add_document(&self.db, title, link)?;
        self.reload_data();
        Ok(id)
    }

    pub fn add_bookmark(
        &mut self,
        title: &str,
        url: &str,
        description: &str,
    ) -> Result<i64, ServiceError> {
        let id = store::add_bookmark(&self.db, title, url, description)?;
        self.reload_data();
        Ok(id)
    }

    pub fn add_tool(
        &mut self,
        name: &str,
        url: &str,
        description: &str,
        category: &str,
        keywords: &str,
    ) -> Result<i64, ServiceError> {
        let id = store::add_tool(&self.db, name, url, description, category, keywords)?;
        self.reload_data();
        Ok(id)
    }

    pub fn delete_item(&mut self, kind: SourceKind, id: i64) -> Result<bool, ServiceError> {
        let removed = store::delete_record(&self.db, kind, id)?;
        if removed {
            self.reload_data();
        }
        Ok(removed)
    }

    /// Reads the system clipboard once and records anything new. The host
    /// calls this on its poll interval.
    pub fn clipboard_tick(&mut self) -> CaptureOutcome {
        if !self.config.clipboard.enabled {
            return CaptureOutcome::Ignored;
        }
        self.clipboard.poll(&self.db, self.clipboard_io.as_mut())
    }

    pub fn set_clipboard_monitoring(&mut self, enabled: bool) {
        if enabled {
            self.clipboard.start_monitoring();
        } else {
            self.clipboard.stop_monitoring();
        }
    }

    pub fn clipboard_update(&mut self, id: i64, content: &str) -> Result<bool, ServiceError> {
        Ok(self.clipboard.update_entry(&self.db, id, content)?)
    }

    pub fn clipboard_delete(&mut self, id: i64) -> Result<bool, ServiceError> {
        Ok(self.clipboard.delete_entry(&self.db, id)?)
    }

    pub fn clipboard_clear(&mut self) -> Result<usize, ServiceError> {
        Ok(self.clipboard.clear(&self.db)?)
    }
}
