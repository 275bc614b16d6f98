//! Thread handlers for the anonboard API.

use axum::{
    extract::{Path, State},
    Form, Json,
};
use std::sync::Arc;

use crate::board::{ListingService, ModerationService, ThreadSummary};
use crate::web::dto::{CreateThreadForm, DeleteThreadForm, ReportThreadForm, ThreadCreatedResponse};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::AnonboardError;

/// POST /api/threads/:board - Create a new thread.
pub async fn create_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Form(req): Form<CreateThreadForm>,
) -> Result<Json<ThreadCreatedResponse>, ApiError> {
    let text = req
        .text
        .ok_or_else(|| ApiError::bad_request("text is required"))?;
    let delete_password = req
        .delete_password
        .ok_or_else(|| ApiError::bad_request("delete_password is required"))?;

    let service = ModerationService::new(&state.db);
    let thread = service
        .create_thread(&board, &text, &delete_password)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create thread: {}", e);
            ApiError::internal("Failed to save the thread.")
        })?;

    Ok(Json(thread.into()))
}

/// GET /api/threads/:board - List the board's most recent threads.
pub async fn list_threads(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
) -> Result<Json<Vec<ThreadSummary>>, ApiError> {
    let service = ListingService::new(&state.db);
    let threads = service.list_recent_threads(&board).await.map_err(|e| match e {
        AnonboardError::NotFound(what) => ApiError::not_found(format!("{what} not found")),
        e => {
            tracing::error!("Failed to list threads: {}", e);
            ApiError::internal("Failed to retrieve threads.")
        }
    })?;

    Ok(Json(threads))
}

/// DELETE /api/threads/:board - Delete a thread after password check.
pub async fn delete_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Form(req): Form<DeleteThreadForm>,
) -> Result<&'static str, ApiError> {
    let thread_id = req
        .thread_id
        .ok_or_else(|| ApiError::bad_request("thread_id is required"))?;
    let delete_password = req
        .delete_password
        .ok_or_else(|| ApiError::bad_request("delete_password is required"))?;

    let service = ModerationService::new(&state.db);
    let outcome = service
        .delete_thread(&board, &thread_id, &delete_password)
        .await
        .map_err(|e| match e {
            AnonboardError::NotFound(what) => ApiError::not_found(format!("{what} not found")),
            e => {
                tracing::error!("Failed to delete thread: {}", e);
                ApiError::internal("Failed to delete the thread.")
            }
        })?;

    Ok(outcome.as_str())
}

/// PUT /api/threads/:board - Report a thread. No password required.
pub async fn report_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Form(req): Form<ReportThreadForm>,
) -> Result<&'static str, ApiError> {
    let thread_id = req
        .thread_id
        .ok_or_else(|| ApiError::bad_request("thread_id is required"))?;

    let service = ModerationService::new(&state.db);
    service
        .report_thread(&board, &thread_id)
        .await
        .map_err(|e| match e {
            AnonboardError::NotFound(what) => ApiError::not_found(format!("{what} not found")),
            e => {
                tracing::error!("Failed to report thread: {}", e);
                ApiError::internal("Failed to mark the thread as reported.")
            }
        })?;

    Ok("reported")
}
