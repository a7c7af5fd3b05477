/// How many characters of snippet content survive into a generated title.
pub const SNIPPET_PREVIEW_CHARS: usize = 50;

/// The four user-editable item tables behind the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Snippet,
    Document,
    Bookmark,
    Tool,
}

impl SourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Snippet => "snippet",
            SourceKind::Document => "document",
            SourceKind::Bookmark => "bookmark",
            SourceKind::Tool => "tool",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "snippet" => Some(SourceKind::Snippet),
            "document" => Some(SourceKind::Document),
            "bookmark" => Some(SourceKind::Bookmark),
            "tool" => Some(SourceKind::Tool),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub content: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    pub id: i64,
    pub title: String,
    pub link: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkRecord {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRecord {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub description: String,
    pub category: String,
    pub keywords: String,
    pub created_at: String,
}

/// One stored item, regardless of which table it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRecord {
    Snippet(SnippetRecord),
    Document(DocumentRecord),
    Bookmark(BookmarkRecord),
    Tool(ToolRecord),
}

impl SourceRecord {
    pub fn kind(&self) -> SourceKind {
        match self {
            SourceRecord::Snippet(_) => SourceKind::Snippet,
            SourceRecord::Document(_) => SourceKind::Document,
            SourceRecord::Bookmark(_) => SourceKind::Bookmark,
            SourceRecord::Tool(_) => SourceKind::Tool,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            SourceRecord::Snippet(s) => s.id,
            SourceRecord::Document(d) => d.id,
            SourceRecord::Bookmark(b) => b.id,
            SourceRecord::Tool(t) => t.id,
        }
    }

    /// Title shown in the result list. Untitled snippets fall back to a
    /// shortened slice of their content.
    pub fn display_title(&self) -> String {
        match self {
            SourceRecord::Snippet(s) => {
                if s.title.is_empty() {
                    snippet_preview(&s.content)
                } else {
                    s.title.clone()
                }
            }
            SourceRecord::Document(d) => d.title.clone(),
            SourceRecord::Bookmark(b) => b.title.clone(),
            SourceRecord::Tool(t) => t.name.clone(),
        }
    }

    pub fn display_subtitle(&self) -> String {
        match self {
            SourceRecord::Snippet(s) => {
                if s.description.is_empty() {
                    s.content.clone()
                } else {
                    s.description.clone()
                }
            }
            SourceRecord::Document(d) => d.link.clone(),
            SourceRecord::Bookmark(b) => {
                if b.url.is_empty() {
                    b.description.clone()
                } else {
                    b.url.clone()
                }
            }
            SourceRecord::Tool(t) => t.description.clone(),
        }
    }

    /// What selecting this item should do.
    pub fn activation(&self) -> ResultAction {
        match self {
            SourceRecord::Snippet(s) => ResultAction::CopyText(s.content.clone()),
            SourceRecord::Document(d) => ResultAction::OpenExternal(d.link.clone()),
            SourceRecord::Bookmark(b) => ResultAction::OpenExternal(b.url.clone()),
            SourceRecord::Tool(t) => ResultAction::OpenExternal(t.url.clone()),
        }
    }
}

pub fn snippet_preview(content: &str) -> String {
    if content.chars().count() > SNIPPET_PREVIEW_CHARS {
        let head: String = content.chars().take(SNIPPET_PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        content.to_string()
    }
}

/// Classified shape of a captured clipboard text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Text,
    Url,
    Email,
    Phone,
    Color,
    Code,
    File,
    Image,
}

impl ContentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Url => "url",
            ContentKind::Email => "email",
            ContentKind::Phone => "phone",
            ContentKind::Color => "color",
            ContentKind::Code => "code",
            ContentKind::File => "file",
            ContentKind::Image => "image",
        }
    }

    /// Stored labels round-trip through the database as plain text, so an
    /// unknown label degrades to `Text` rather than failing the row.
    pub fn from_label(value: &str) -> Self {
        match value {
            "url" => ContentKind::Url,
            "email" => ContentKind::Email,
            "phone" => ContentKind::Phone,
            "color" => ContentKind::Color,
            "code" => ContentKind::Code,
            "file" => ContentKind::File,
            "image" => ContentKind::Image,
            _ => ContentKind::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardEntry {
    pub id: i64,
    pub kind: ContentKind,
    pub content: String,
    pub preview: String,
    pub size: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Kind tag carried on every palette row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Snippet,
    Document,
    Bookmark,
    Tool,
    System,
    Emoji,
}

impl ResultKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ResultKind::Snippet => "snippet",
            ResultKind::Document => "document",
            ResultKind::Bookmark => "bookmark",
            ResultKind::Tool => "tool",
            ResultKind::System => "system",
            ResultKind::Emoji => "emoji",
        }
    }
}

impl From<SourceKind> for ResultKind {
    fn from(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Snippet => ResultKind::Snippet,
            SourceKind::Document => ResultKind::Document,
            SourceKind::Bookmark => ResultKind::Bookmark,
            SourceKind::Tool => ResultKind::Tool,
        }
    }
}

/// Side effect a row triggers when the user picks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultAction {
    /// Put the text on the system clipboard.
    CopyText(String),
    /// Open a URL with the default handler.
    OpenExternal(String),
    /// Open a local file or directory.
    OpenPath(String),
    /// Show the file in its parent folder.
    RevealPath(String),
    /// Built-in command routed by id, e.g. `reload` or `quit`.
    Command(String),
}

/// One ranked row in the palette. Lower scores rank higher.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub kind: ResultKind,
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub score: f64,
    pub action: ResultAction,
}

impl SearchResult {
    pub fn from_record(record: &SourceRecord, score: f64) -> Self {
        SearchResult {
            kind: record.kind().into(),
            id: record.id().to_string(),
            title: record.display_title(),
            subtitle: record.display_subtitle(),
            score,
            action: record.activation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(title: &str, description: &str, content: &str) -> SourceRecord {
        SourceRecord::Snippet(SnippetRecord {
            id: 1,
            title: title.to_string(),
            description: description.to_string(),
            content: content.to_string(),
            created_at: String::new(),
        })
    }

    #[test]
    fn snippet_preview_shortens_only_long_content() {
        assert_eq!(snippet_preview("let x = 1;"), "let x = 1;");

        let long = "a".repeat(80);
        let preview = snippet_preview(&long);
        assert_eq!(preview.chars().count(), SNIPPET_PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn untitled_snippet_uses_content_preview_as_title() {
        let record = snippet("", "", "console.log('Hello World');");
        assert_eq!(record.display_title(), "console.log('Hello World');");

        let titled = snippet("Hello World", "Basic console log", "console.log('Hello World');");
        assert_eq!(titled.display_title(), "Hello World");
        assert_eq!(titled.display_subtitle(), "Basic console log");
    }

    #[test]
    fn snippet_without_description_shows_full_content_as_subtitle() {
        let record = snippet("SQL Query", "", "SELECT * FROM users WHERE active = 1;");
        assert_eq!(record.display_subtitle(), "SELECT * FROM users WHERE active = 1;");
    }

    #[test]
    fn bookmark_subtitle_prefers_url_over_description() {
        let record = SourceRecord::Bookmark(BookmarkRecord {
            id: 4,
            title: "GitHub".to_string(),
            url: "https://github.com".to_string(),
            description: "Code repository hosting".to_string(),
            created_at: String::new(),
        });
        assert_eq!(record.display_subtitle(), "https://github.com");
        assert_eq!(
            record.activation(),
            ResultAction::OpenExternal("https://github.com".to_string())
        );
    }
}
