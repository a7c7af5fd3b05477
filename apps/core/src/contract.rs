use serde::{Deserialize, Serialize};

use crate::clipboard::CaptureOutcome;
use crate::core_service::{ActivateOutcome, QueryReply, QueryResults};
use crate::filesearch::{file_category, FileHit};
use crate::model::{ClipboardEntry, ResultAction, SearchResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivateRequest {
    pub action: ActionDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddSnippetRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddDocumentRequest {
    pub title: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddBookmarkRequest {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddToolRequest {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub keywords: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteItemRequest {
    pub kind: String,
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClipboardUpdateRequest {
    pub id: i64,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClipboardDeleteRequest {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetMonitoringRequest {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "payload")]
pub enum CoreRequest {
    Query(QueryRequest),
    Escape,
    Activate(ActivateRequest),
    AddSnippet(AddSnippetRequest),
    AddDocument(AddDocumentRequest),
    AddBookmark(AddBookmarkRequest),
    AddTool(AddToolRequest),
    DeleteItem(DeleteItemRequest),
    ReloadData,
    ClipboardTick,
    ClipboardUpdate(ClipboardUpdateRequest),
    ClipboardDelete(ClipboardDeleteRequest),
    ClipboardClear,
    SetClipboardMonitoring(SetMonitoringRequest),
    RefreshFileIndex,
}

/// Mirror of `ResultAction` that crosses the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "value")]
pub enum ActionDto {
    CopyText(String),
    OpenExternal(String),
    OpenPath(String),
    RevealPath(String),
    Command(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RowDto {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub subtitle: String,
    pub score: f64,
    pub action: ActionDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClipboardRowDto {
    pub id: i64,
    pub kind: String,
    pub content: String,
    pub preview: String,
    pub size: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileRowDto {
    pub name: String,
    pub path: String,
    pub is_directory: bool,
    pub size: u64,
    pub modified_epoch_secs: i64,
    pub category: String,
    pub score: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "rows")]
pub enum ResultsDto {
    Palette(Vec<RowDto>),
    Clipboard(Vec<ClipboardRowDto>),
    Files(Vec<FileRowDto>),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryReplyDto {
    pub sequence: u64,
    pub mode: String,
    pub placeholder: Option<String>,
    pub cleared_input: bool,
    pub results: ResultsDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivateResponse {
    pub completed: bool,
    pub host_command: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MutationResponse {
    pub success: bool,
    pub id: Option<i64>,
    pub error: Option<String>,
}

impl MutationResponse {
    pub fn ok(id: Option<i64>) -> Self {
        Self {
            success: true,
            id,
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            id: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountResponse {
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TickResponse {
    pub outcome: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonitoringResponse {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "payload")]
pub enum CoreResponse {
    Query(QueryReplyDto),
    Activate(ActivateResponse),
    Mutation(MutationResponse),
    Reload(CountResponse),
    FileIndex(CountResponse),
    ClipboardCleared(CountResponse),
    Tick(TickResponse),
    Monitoring(MonitoringResponse),
}

impl From<ResultAction> for ActionDto {
    fn from(value: ResultAction) -> Self {
        match value {
            ResultAction::CopyText(text) => Self::CopyText(text),
            ResultAction::OpenExternal(url) => Self::OpenExternal(url),
            ResultAction::OpenPath(path) => Self::OpenPath(path),
            ResultAction::RevealPath(path) => Self::RevealPath(path),
            ResultAction::Command(id) => Self::Command(id),
        }
    }
}

impl From<ActionDto> for ResultAction {
    fn from(value: ActionDto) -> Self {
        match value {
            ActionDto::CopyText(text) => Self::CopyText(text),
            ActionDto::OpenExternal(url) => Self::OpenExternal(url),
            ActionDto::OpenPath(path) => Self::OpenPath(path),
            ActionDto::RevealPath(path) => Self::RevealPath(path),
            ActionDto::Command(id) => Self::Command(id),
        }
    }
}

impl From<SearchResult> for RowDto {
    fn from(value: SearchResult) -> Self {
        Self {
            id: value.id,
            kind: value.kind.as_str().to_string(),
            title: value.title,
            subtitle: value.subtitle,
            score: value.score,
            action: value.action.into(),
        }
    }
}

impl From<ClipboardEntry> for ClipboardRowDto {
    fn from(value: ClipboardEntry) -> Self {
        Self {
            id: value.id,
            kind: value.kind.as_str().to_string(),
            content: value.content,
            preview: value.preview,
            size: value.size,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<FileHit> for FileRowDto {
    fn from(value: FileHit) -> Self {
        let category = file_category(&value.file.name, value.file.is_directory).to_string();
        Self {
            name: value.file.name,
            path: value.file.path.to_string_lossy().into_owned(),
            is_directory: value.file.is_directory,
            size: value.file.size,
            modified_epoch_secs: value.file.modified_epoch_secs,
            category,
            score: value.score,
        }
    }
}

impl From<QueryResults> for ResultsDto {
    fn from(value: QueryResults) -> Self {
        match value {
            QueryResults::Palette(rows) => {
                Self::Palette(rows.into_iter().map(RowDto::from).collect())
            }
            QueryResults::Clipboard(rows) => {
                Self::Clipboard(rows.into_iter().map(ClipboardRowDto::from).collect())
            }
            QueryResults::Files(rows) => {
                Self::Files(rows.into_iter().map(FileRowDto::from).collect())
            }
        }
    }
}

impl From<QueryReply> for QueryReplyDto {
    fn from(value: QueryReply) -> Self {
        Self {
            sequence: value.sequence,
            mode: value.mode.as_str().to_string(),
            placeholder: value.placeholder.map(str::to_string),
            cleared_input: value.cleared_input,
            results: value.results.into(),
        }
    }
}

impl From<ActivateOutcome> for ActivateResponse {
    fn from(value: ActivateOutcome) -> Self {
        Self {
            completed: value.completed,
            host_command: value.host_command,
            message: value.message,
        }
    }
}

impl From<CaptureOutcome> for TickResponse {
    fn from(value: CaptureOutcome) -> Self {
        let outcome = match value {
            CaptureOutcome::Ignored => "ignored",
            CaptureOutcome::Inserted => "inserted",
            CaptureOutcome::Refreshed => "refreshed",
        };
        Self {
            outcome: outcome.to_string(),
        }
    }
}
