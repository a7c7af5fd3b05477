use serde::{Deserialize, Serialize};

use crate::contract::{
    CoreRequest, CoreResponse, CountResponse, MonitoringResponse, MutationResponse,
};
use crate::core_service::{CoreService, ServiceError};
use crate::model::SourceKind;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidJson,
    InvalidRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TransportResponse {
    Ok { response: CoreResponse },
    Err { error: ErrorResponse },
}

/// Store failures on mutations come back as `MutationResponse` errors so the
/// host can show them inline; transport-level errors are reserved for
/// requests that could not be understood at all.
pub fn handle_request(service: &mut CoreService, request: CoreRequest) -> TransportResponse {
    let response = match request {
        CoreRequest::Query(req) => CoreResponse::Query(service.handle_query(&req.query).into()),
        CoreRequest::Escape => CoreResponse::Query(service.on_escape().into()),
        CoreRequest::Activate(req) => {
            let action = req.action.into();
            CoreResponse::Activate(service.activate(&action).into())
        }
        CoreRequest::AddSnippet(req) => {
            mutation_response(service.add_snippet(&req.title, &req.description, &req.content))
        }
        CoreRequest::AddDocument(req) => {
            mutation_response(service.add_document(&req.title, &req.link))
        }
        CoreRequest::AddBookmark(req) => {
            mutation_response(service.add_bookmark(&req.title, &req.url, &req.description))
        }
        CoreRequest::AddTool(req) => mutation_response(service.add_tool(
            &req.name,
            &req.url,
            &req.description,
            &req.category,
            &req.keywords,
        )),
        CoreRequest::DeleteItem(req) => match SourceKind::parse(&req.kind) {
            Some(kind) => change_response(service.delete_item(kind, req.id)),
            None => {
                return TransportResponse::Err {
                    error: ErrorResponse {
                        code: ErrorCode::InvalidRequest,
                        message: format!("unknown item kind: {}", req.kind),
                    },
                }
            }
        },
        CoreRequest::ReloadData => CoreResponse::Reload(CountResponse {
            count: service.reload_data(),
        }),
        CoreRequest::ClipboardTick => CoreResponse::Tick(service.clipboard_tick().into()),
        CoreRequest::ClipboardUpdate(req) => {
            change_response(service.clipboard_update(req.id, &req.content))
        }
        CoreRequest::ClipboardDelete(req) => change_response(service.clipboard_delete(req.id)),
        CoreRequest::ClipboardClear => match service.clipboard_clear() {
            Ok(count) => CoreResponse::ClipboardCleared(CountResponse { count }),
            Err(error) => CoreResponse::Mutation(MutationResponse::err(error.to_string())),
        },
        CoreRequest::SetClipboardMonitoring(req) => {
            service.set_clipboard_monitoring(req.enabled);
            CoreResponse::Monitoring(MonitoringResponse {
                enabled: service.is_monitoring_clipboard(),
            })
        }
        CoreRequest::RefreshFileIndex => CoreResponse::FileIndex(CountResponse {
            count: service.rebuild_file_index(),
        }),
    };

    TransportResponse::Ok { response }
}

pub fn handle_json(service: &mut CoreService, payload: &str) -> String {
    let response = match serde_json::from_str::<CoreRequest>(payload) {
        Ok(request) => handle_request(service, request),
        Err(error) => TransportResponse::Err {
            error: ErrorResponse {
                code: ErrorCode::InvalidJson,
                message: error.to_string(),
            },
        },
    };

    serde_json::to_string(&response).expect("transport response should serialize")
}

fn mutation_response(result: Result<i64, ServiceError>) -> CoreResponse {
    match result {
        Ok(id) => CoreResponse::Mutation(MutationResponse::ok(Some(id))),
        Err(error) => CoreResponse::Mutation(MutationResponse::err(error.to_string())),
    }
}

fn change_response(result: Result<bool, ServiceError>) -> CoreResponse {
    match result {
        Ok(true) => CoreResponse::Mutation(MutationResponse::ok(None)),
        Ok(false) => CoreResponse::Mutation(MutationResponse::err("not found".to_string())),
        Err(error) => CoreResponse::Mutation(MutationResponse::err(error.to_string())),
    }
}
