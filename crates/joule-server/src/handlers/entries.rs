//! Daily log handlers

use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, Json};
use joule_core::{Entry, EntryDraft};
use tracing::info;

use crate::{core_error, session_id, AppError, AppState, SuccessResponse};

/// GET /api/entries - List the session's entries in insertion order
pub async fn list_entries(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Entry>>, AppError> {
    let session = session_id(&headers);
    let entries = state
        .sessions
        .read(&session, |s| s.entries().to_vec())
        .await;
    Ok(Json(entries))
}

/// POST /api/entries - Validate and append a daily entry
pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(draft): Json<EntryDraft>,
) -> Result<Json<Entry>, AppError> {
    let session = session_id(&headers);

    // Validation happens before the store is touched; a rejected draft
    // leaves the session unchanged.
    let entry = draft.build().map_err(core_error)?;

    info!(
        date = %entry.date,
        total_kwh = entry.total_kwh(),
        "Entry logged"
    );

    let entry = state
        .sessions
        .write(&session, |s| {
            s.append(entry.clone());
            entry
        })
        .await;

    Ok(Json(entry))
}

/// DELETE /api/entries - Clear the session's log, keeping the profile
pub async fn clear_entries(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<SuccessResponse>, AppError> {
    let session = session_id(&headers);

    let removed = state
        .sessions
        .write(&session, |s| {
            let removed = s.len();
            s.clear();
            removed
        })
        .await;

    info!(removed, "Session log cleared");
    Ok(Json(SuccessResponse { success: true }))
}
