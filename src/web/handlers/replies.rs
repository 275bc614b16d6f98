//! Reply handlers for the anonboard API.

use axum::{
    extract::{Path, Query, State},
    Form, Json,
};
use std::sync::Arc;

use crate::board::{ListingService, ModerationService, ThreadDetail};
use crate::web::dto::{
    CreateReplyForm, DeleteReplyForm, ReplyCreatedResponse, ReportReplyForm, ThreadQuery,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::AnonboardError;

/// GET /api/replies/:board?thread_id=... - Full thread with all replies.
pub async fn get_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Query(query): Query<ThreadQuery>,
) -> Result<Json<ThreadDetail>, ApiError> {
    let thread_id = query.thread_id.ok_or_else(|| {
        ApiError::bad_request("Thread ID is missing in the query parameters")
    })?;

    let service = ListingService::new(&state.db);
    let detail = service
        .get_thread(&board, &thread_id)
        .await
        .map_err(|e| match e {
            AnonboardError::NotFound(what) => ApiError::not_found(format!("{what} not found")),
            e => {
                tracing::error!("Failed to get thread: {}", e);
                ApiError::internal("Failed to retrieve thread.")
            }
        })?;

    Ok(Json(detail))
}

/// POST /api/replies/:board - Add a reply to a thread.
pub async fn create_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Form(req): Form<CreateReplyForm>,
) -> Result<Json<ReplyCreatedResponse>, ApiError> {
    let thread_id = req
        .thread_id
        .ok_or_else(|| ApiError::bad_request("thread_id is required"))?;
    let text = req
        .text
        .ok_or_else(|| ApiError::bad_request("text is required"))?;
    let delete_password = req
        .delete_password
        .ok_or_else(|| ApiError::bad_request("delete_password is required"))?;

    let service = ModerationService::new(&state.db);
    let reply = service
        .create_reply(&board, &thread_id, &text, &delete_password)
        .await
        .map_err(|e| match e {
            AnonboardError::NotFound(what) => ApiError::not_found(format!("{what} not found")),
            e => {
                tracing::error!("Failed to create reply: {}", e);
                ApiError::internal("Failed to add a reply.")
            }
        })?;

    Ok(Json(reply.into()))
}

/// DELETE /api/replies/:board - Soft-delete a reply after password check.
pub async fn delete_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Form(req): Form<DeleteReplyForm>,
) -> Result<&'static str, ApiError> {
    let thread_id = req
        .thread_id
        .ok_or_else(|| ApiError::bad_request("thread_id is required"))?;
    let reply_id = req
        .reply_id
        .ok_or_else(|| ApiError::bad_request("reply_id is required"))?;
    let delete_password = req
        .delete_password
        .ok_or_else(|| ApiError::bad_request("delete_password is required"))?;

    let service = ModerationService::new(&state.db);
    let outcome = service
        .delete_reply(&board, &thread_id, &reply_id, &delete_password)
        .await
        .map_err(|e| match e {
            AnonboardError::NotFound(what) => ApiError::not_found(format!("{what} not found")),
            e => {
                tracing::error!("Failed to delete reply: {}", e);
                ApiError::internal("Failed to delete the reply.")
            }
        })?;

    Ok(outcome.as_str())
}

/// PUT /api/replies/:board - Report a reply. No password required.
pub async fn report_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Form(req): Form<ReportReplyForm>,
) -> Result<&'static str, ApiError> {
    let thread_id = req
        .thread_id
        .ok_or_else(|| ApiError::bad_request("thread_id is required"))?;
    let reply_id = req
        .reply_id
        .ok_or_else(|| ApiError::bad_request("reply_id is required"))?;

    let service = ModerationService::new(&state.db);
    service
        .report_reply(&board, &thread_id, &reply_id)
        .await
        .map_err(|e| match e {
            AnonboardError::NotFound(what) => ApiError::not_found(format!("{what} not found")),
            e => {
                tracing::error!("Failed to report reply: {}", e);
                ApiError::internal("Failed to mark the reply as reported.")
            }
        })?;

    Ok("reported")
}
