use ctrl_core::contract::{
    ActionDto, ClipboardRowDto, CoreRequest, FileRowDto, QueryRequest, RowDto,
};
use ctrl_core::filesearch::{FileEntry, FileHit};
use ctrl_core::model::{ClipboardEntry, ContentKind, ResultAction, ResultKind, SearchResult};
use std::path::PathBuf;

#[test]
fn request_envelope_round_trips() {
    let request = CoreRequest::Query(QueryRequest {
        query: "docker".to_string(),
    });

    let encoded = serde_json::to_string(&request).unwrap();
    let decoded: CoreRequest = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded, request);
    assert!(encoded.contains("\"kind\":\"Query\""));
    assert!(encoded.contains("\"payload\""));
}

#[test]
fn unit_requests_encode_with_kind_only() {
    let encoded = serde_json::to_string(&CoreRequest::ClipboardTick).unwrap();
    assert_eq!(encoded, "{\"kind\":\"ClipboardTick\"}");

    let decoded: CoreRequest = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, CoreRequest::ClipboardTick);
}

#[test]
fn action_dto_mirrors_result_action_both_ways() {
    let action = ResultAction::RevealPath("/home/u/Desktop/deck.pdf".to_string());

    let dto: ActionDto = action.clone().into();
    let encoded = serde_json::to_string(&dto).unwrap();
    assert!(encoded.contains("\"type\":\"RevealPath\""));

    let back: ResultAction = dto.into();
    assert_eq!(back, action);
}

#[test]
fn search_result_converts_to_row_dto() {
    let result = SearchResult {
        kind: ResultKind::Tool,
        id: "7".to_string(),
        title: "Figma".to_string(),
        subtitle: "design tool".to_string(),
        score: 0.25,
        action: ResultAction::OpenExternal("https://figma.com".to_string()),
    };

    let row = RowDto::from(result);

    assert_eq!(row.kind, "tool");
    assert_eq!(row.score, 0.25);
    assert_eq!(
        row.action,
        ActionDto::OpenExternal("https://figma.com".to_string())
    );
}

#[test]
fn file_hit_converts_with_display_category() {
    let hit = FileHit {
        file: FileEntry {
            name: "deck.pdf".to_string(),
            path: PathBuf::from("/home/u/Desktop/deck.pdf"),
            is_directory: false,
            size: 1234,
            modified_epoch_secs: 99,
        },
        score: 50,
    };

    let row = FileRowDto::from(hit);

    assert_eq!(row.category, "pdf");
    assert_eq!(row.path, "/home/u/Desktop/deck.pdf");
    assert_eq!(row.score, 50);

    let folder = FileHit {
        file: FileEntry {
            name: "projects".to_string(),
            path: PathBuf::from("/home/u/Desktop/projects"),
            is_directory: true,
            size: 0,
            modified_epoch_secs: 0,
        },
        score: 100,
    };
    assert_eq!(FileRowDto::from(folder).category, "folder");
}

#[test]
fn clipboard_entry_converts_preserving_kind_label() {
    let entry = ClipboardEntry {
        id: 3,
        kind: ContentKind::Url,
        content: "https://a.example".to_string(),
        preview: "https://a.example".to_string(),
        size: 17,
        created_at: "2025-01-01 10:00:00".to_string(),
        updated_at: "2025-01-01 10:05:00".to_string(),
    };

    let row = ClipboardRowDto::from(entry);

    assert_eq!(row.kind, "url");
    assert_eq!(row.size, 17);
    assert_eq!(row.updated_at, "2025-01-01 10:05:00");
}
