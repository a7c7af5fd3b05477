use std::fmt;
use std::fs;
use std::path::Path;

use rusqlite::{params, Connection};

use crate::logging;
use crate::model::{
    BookmarkRecord, ClipboardEntry, ContentKind, DocumentRecord, SnippetRecord, SourceKind,
    SourceRecord, ToolRecord,
};

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS snippets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    content TEXT NOT NULL,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);
CREATE TABLE IF NOT EXISTS documents (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    link TEXT NOT NULL,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);
CREATE TABLE IF NOT EXISTS bookmarks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    url TEXT NOT NULL,
    description TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);
CREATE TABLE IF NOT EXISTS tools (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    url TEXT NOT NULL,
    description TEXT,
    category TEXT DEFAULT 'utility',
    keywords TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);
CREATE TABLE IF NOT EXISTS clipboard_history (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    type TEXT NOT NULL DEFAULT 'text',
    content TEXT NOT NULL,
    preview TEXT,
    size INTEGER,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
    updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
);
";

const SAMPLE_SNIPPETS: &[(&str, &str, &str)] = &[
    ("Hello World", "Basic console log", "console.log('Hello World');"),
    (
        "Express Setup",
        "Basic Express.js server setup",
        "const express = require('express');\nconst app = express();",
    ),
    ("SQL Query", "Get active users", "SELECT * FROM users WHERE active = 1;"),
    (
        "Git Commit",
        "Add and commit changes",
        "git add . && git commit -m 'Initial commit'",
    ),
    (
        "NPM Install",
        "Install common packages",
        "npm install express mongoose cors dotenv",
    ),
];

const SAMPLE_DOCUMENTS: &[(&str, &str)] = &[
    ("React Documentation", "https://reactjs.org/docs"),
    ("Node.js Guide", "https://nodejs.org/en/docs"),
    ("MDN Web Docs", "https://developer.mozilla.org"),
    ("VS Code Tips", "https://code.visualstudio.com/docs"),
];

const SAMPLE_BOOKMARKS: &[(&str, &str, &str)] = &[
    ("GitHub", "https://github.com", "Code repository hosting"),
    ("Stack Overflow", "https://stackoverflow.com", "Programming Q&A"),
    ("npm Registry", "https://npmjs.com", "Node.js package manager"),
    ("Google", "https://google.com", "Search engine"),
    ("YouTube", "https://youtube.com", "Video platform"),
];

const SAMPLE_TOOLS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Edit PDF",
        "https://evilpdf.appwrite.network/",
        "Edit, merge, split, and manipulate PDF files online",
        "productivity",
        "pdf edit manipulate merge split convert",
    ),
    (
        "Remove Background",
        "https://www.remove.bg/",
        "Remove background from images automatically using AI",
        "design",
        "background remove image photo ai automatic",
    ),
];

#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    Io(std::io::Error),
    MissingField(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Sqlite(err) => write!(f, "database error: {err}"),
            StoreError::Io(err) => write!(f, "database io error: {err}"),
            StoreError::MissingField(field) => write!(f, "{field} is required"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Sqlite(err) => Some(err),
            StoreError::Io(err) => Some(err),
            StoreError::MissingField(_) => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Sqlite(err)
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

/// Opens (creating if needed) the on-disk database, applies the schema and
/// seeds starter rows the first time all four item tables are empty.
pub fn open_file(path: &Path) -> Result<Connection, StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let db = Connection::open(path)?;
    db.pragma_update(None, "journal_mode", "WAL")?;
    init_schema(&db)?;

    if item_tables_empty(&db)? {
        // Seeding failures leave an empty but working database.
        if let Err(err) = seed_sample_data(&db) {
            logging::warn(&format!("sample data seeding failed: {err}"));
        } else {
            logging::info("seeded sample snippets, documents, bookmarks and tools");
        }
    }
    Ok(db)
}

/// In-memory database with the schema applied and no seed rows. Used by tests.
pub fn open_memory() -> Result<Connection, StoreError> {
    let db = Connection::open_in_memory()?;
    init_schema(&db)?;
    Ok(db)
}

pub fn init_schema(db: &Connection) -> Result<(), StoreError> {
    db.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

fn item_tables_empty(db: &Connection) -> Result<bool, StoreError> {
    let snippets: i64 = db.query_row("SELECT COUNT(*) FROM snippets", [], |r| r.get(0))?;
    let documents: i64 = db.query_row("SELECT COUNT(*) FROM documents", [], |r| r.get(0))?;
    let bookmarks: i64 = db.query_row("SELECT COUNT(*) FROM bookmarks", [], |r| r.get(0))?;
    let tools: i64 = db.query_row("SELECT COUNT(*) FROM tools", [], |r| r.get(0))?;
    Ok(snippets == 0 && documents == 0 && bookmarks == 0 && tools == 0)
}

pub fn seed_sample_data(db: &Connection) -> Result<(), StoreError> {
    for (title, description, content) in SAMPLE_SNIPPETS {
        add_snippet(db, title, description, content)?;
    }
    for (title, link) in SAMPLE_DOCUMENTS {
        add_document(db, title, link)?;
    }
    for (title, url, description) in SAMPLE_BOOKMARKS {
        add_bookmark(db, title, url, description)?;
    }
    for (name, url, description, category, keywords) in SAMPLE_TOOLS {
        add_tool(db, name, url, description, category, keywords)?;
    }
    Ok(())
}

pub fn list_snippets(db: &Connection) -> Vec<SnippetRecord> {
    try_list_snippets(db).unwrap_or_else(|err| {
        logging::warn(&format!("snippet list failed: {err}"));
        Vec::new()
    })
}

fn try_list_snippets(db: &Connection) -> Result<Vec<SnippetRecord>, rusqlite::Error> {
    let mut stmt = db.prepare(
        "SELECT id, title, description, content, created_at FROM snippets ORDER BY created_at DESC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(SnippetRecord {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            content: row.get(3)?,
            created_at: row.get(4)?,
        })
    })?;
    rows.collect()
}

pub fn list_documents(db: &Connection) -> Vec<DocumentRecord> {
    try_list_documents(db).unwrap_or_else(|err| {
        logging::warn(&format!("document list failed: {err}"));
        Vec::new()
    })
}

fn try_list_documents(db: &Connection) -> Result<Vec<DocumentRecord>, rusqlite::Error> {
    let mut stmt =
        db.prepare("SELECT id, title, link, created_at FROM documents ORDER BY created_at DESC")?;
    let rows = stmt.query_map([], |row| {
        Ok(DocumentRecord {
            id: row.get(0)?,
            title: row.get(1)?,
            link: row.get(2)?,
            created_at: row.get(3)?,
        })
    })?;
    rows.collect()
}

pub fn list_bookmarks(db: &Connection) -> Vec<BookmarkRecord> {
    try_list_bookmarks(db).unwrap_or_else(|err| {
        logging::warn(&format!("bookmark list failed: {err}"));
        Vec::new()
    })
}

fn try_list_bookmarks(db: &Connection) -> Result<Vec<BookmarkRecord>, rusqlite::Error> {
    let mut stmt = db.prepare(
        "SELECT id, title, url, description, created_at FROM bookmarks ORDER BY created_at DESC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(BookmarkRecord {
            id: row.get(0)?,
            title: row.get(1)?,
            url: row.get(2)?,
            description: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            created_at: row.get(4)?,
        })
    })?;
    rows.collect()
}

pub fn list_tools(db: &Connection) -> Vec<ToolRecord> {
    try_list_tools(db).unwrap_or_else(|err| {
        logging::warn(&format!("tool list failed: {err}"));
        Vec::new()
    })
}

fn try_list_tools(db: &Connection) -> Result<Vec<ToolRecord>, rusqlite::Error> {
    let mut stmt = db.prepare(
        "SELECT id, name, url, description, category, keywords, created_at FROM tools ORDER BY created_at DESC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(ToolRecord {
            id: row.get(0)?,
            name: row.get(1)?,
            url: row.get(2)?,
            description: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            category: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
            keywords: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
            created_at: row.get(6)?,
        })
    })?;
    rows.collect()
}

/// Everything the palette indexes, across all four item tables. A failing
/// table contributes nothing instead of failing the whole load.
pub fn list_all_records(db: &Connection) -> Vec<SourceRecord> {
    let mut records = Vec::new();
    records.extend(list_snippets(db).into_iter().map(SourceRecord::Snippet));
    records.extend(list_documents(db).into_iter().map(SourceRecord::Document));
    records.extend(list_bookmarks(db).into_iter().map(SourceRecord::Bookmark));
    records.extend(list_tools(db).into_iter().map(SourceRecord::Tool));
    records
}

pub fn add_snippet(
    db: &Connection,
    title: &str,
    description: &str,
    content: &str,
) -> Result<i64, StoreError> {
    if content.trim().is_empty() {
        return Err(StoreError::MissingField("content"));
    }
    db.execute(
        "INSERT INTO snippets (title, description, content) VALUES (?1, ?2, ?3)",
        params![title, description, content],
    )?;
    Ok(db.last_insert_rowid())
}

pub fn add_document(db: &Connection, title: &str, link: &str) -> Result<i64, StoreError> {
    if title.trim().is_empty() {
        return Err(StoreError::MissingField("title"));
    }
    if link.trim().is_empty() {
        return Err(StoreError::MissingField("link"));
    }
    db.execute(
        "INSERT INTO documents (title, link) VALUES (?1, ?2)",
        params![title, link],
    )?;
    Ok(db.last_insert_rowid())
}

pub fn add_bookmark(
    db: &Connection,
    title: &str,
    url: &str,
    description: &str,
) -> Result<i64, StoreError> {
    if title.trim().is_empty() {
        return Err(StoreError::MissingField("title"));
    }
    if url.trim().is_empty() {
        return Err(StoreError::MissingField("url"));
    }
    db.execute(
        "INSERT INTO bookmarks (title, url, description) VALUES (?1, ?2, ?3)",
        params![title, url, description],
    )?;
    Ok(db.last_insert_rowid())
}

pub fn add_tool(
    db: &Connection,
    name: &str,
    url: &str,
    description: &str,
    category: &str,
    keywords: &str,
) -> Result<i64, StoreError> {
    if name.trim().is_empty() {
        return Err(StoreError::MissingField("name"));
    }
    if url.trim().is_empty() {
        return Err(StoreError::MissingField("url"));
    }
    let category = if category.trim().is_empty() {
        "utility"
    } else {
        category
    };
    db.execute(
        "INSERT INTO tools (name, url, description, category, keywords) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![name, url, description, category, keywords],
    )?;
    Ok(db.last_insert_rowid())
}

/// Deletes one row from the table matching `kind`; returns whether a row
/// actually went away.
pub fn delete_record(db: &Connection, kind: SourceKind, id: i64) -> Result<bool, StoreError> {
    let sql = match kind {
        SourceKind::Snippet => "DELETE FROM snippets WHERE id = ?1",
        SourceKind::Document => "DELETE FROM documents WHERE id = ?1",
        SourceKind::Bookmark => "DELETE FROM bookmarks WHERE id = ?1",
        SourceKind::Tool => "DELETE FROM tools WHERE id = ?1",
    };
    Ok(db.execute(sql, params![id])? > 0)
}

/// Result of pushing a capture into the history table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedClipboardEntry {
    pub entry: ClipboardEntry,
    /// True when the capture matched the most recent row, which only had its
    /// timestamps refreshed.
    pub deduplicated: bool,
}

pub fn add_clipboard_entry(
    db: &Connection,
    kind: ContentKind,
    content: &str,
    preview: &str,
    size: i64,
) -> Result<SavedClipboardEntry, StoreError> {
    if let Some((head_id, head_content)) = newest_clipboard_row(db)? {
        if head_content == content {
            db.execute(
                "UPDATE clipboard_history SET created_at = CURRENT_TIMESTAMP, updated_at = CURRENT_TIMESTAMP WHERE id = ?1",
                params![head_id],
            )?;
            let entry = get_clipboard_entry(db, head_id)?
                .ok_or(rusqlite::Error::QueryReturnedNoRows)?;
            return Ok(SavedClipboardEntry {
                entry,
                deduplicated: true,
            });
        }
    }

    db.execute(
        "INSERT INTO clipboard_history (type, content, preview, size) VALUES (?1, ?2, ?3, ?4)",
        params![kind.as_str(), content, preview, size],
    )?;
    let id = db.last_insert_rowid();
    let entry = get_clipboard_entry(db, id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)?;
    Ok(SavedClipboardEntry {
        entry,
        deduplicated: false,
    })
}

fn newest_clipboard_row(db: &Connection) -> Result<Option<(i64, String)>, rusqlite::Error> {
    let mut stmt = db.prepare(
        "SELECT id, content FROM clipboard_history ORDER BY created_at DESC, id DESC LIMIT 1",
    )?;
    let mut rows = stmt.query([])?;
    match rows.next()? {
        Some(row) => Ok(Some((row.get(0)?, row.get(1)?))),
        None => Ok(None),
    }
}

pub fn get_clipboard_entry(
    db: &Connection,
    id: i64,
) -> Result<Option<ClipboardEntry>, rusqlite::Error> {
    let mut stmt = db.prepare(
        "SELECT id, type, content, preview, size, created_at, updated_at FROM clipboard_history WHERE id = ?1",
    )?;
    let mut rows = stmt.query(params![id])?;
    match rows.next()? {
        Some(row) => Ok(Some(clipboard_row(row)?)),
        None => Ok(None),
    }
}

pub fn list_clipboard_entries(db: &Connection, limit: usize) -> Vec<ClipboardEntry> {
    try_list_clipboard_entries(db, limit).unwrap_or_else(|err| {
        logging::warn(&format!("clipboard history list failed: {err}"));
        Vec::new()
    })
}

fn try_list_clipboard_entries(
    db: &Connection,
    limit: usize,
) -> Result<Vec<ClipboardEntry>, rusqlite::Error> {
    let mut stmt = db.prepare(
        "SELECT id, type, content, preview, size, created_at, updated_at FROM clipboard_history ORDER BY created_at DESC, id DESC LIMIT ?1",
    )?;
    let rows = stmt.query_map(params![limit as i64], clipboard_row)?;
    rows.collect()
}

fn clipboard_row(row: &rusqlite::Row<'_>) -> Result<ClipboardEntry, rusqlite::Error> {
    Ok(ClipboardEntry {
        id: row.get(0)?,
        kind: ContentKind::from_label(&row.get::<_, String>(1)?),
        content: row.get(2)?,
        preview: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        size: row.get::<_, Option<i64>>(4)?.unwrap_or_default(),
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

pub fn update_clipboard_entry(
    db: &Connection,
    id: i64,
    kind: ContentKind,
    content: &str,
    preview: &str,
    size: i64,
) -> Result<bool, StoreError> {
    if content.trim().is_empty() {
        return Err(StoreError::MissingField("content"));
    }
    let changed = db.execute(
        "UPDATE clipboard_history SET type = ?1, content = ?2, preview = ?3, size = ?4, updated_at = CURRENT_TIMESTAMP WHERE id = ?5",
        params![kind.as_str(), content, preview, size, id],
    )?;
    Ok(changed > 0)
}

pub fn delete_clipboard_entry(db: &Connection, id: i64) -> Result<bool, StoreError> {
    Ok(db.execute("DELETE FROM clipboard_history WHERE id = ?1", params![id])? > 0)
}

pub fn clear_clipboard_history(db: &Connection) -> Result<usize, StoreError> {
    Ok(db.execute("DELETE FROM clipboard_history", [])?)
}

pub fn count_clipboard_entries(db: &Connection) -> Result<i64, StoreError> {
    Ok(db.query_row("SELECT COUNT(*) FROM clipboard_history", [], |r| r.get(0))?)
}
