//! CSV export handlers

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Response, StatusCode},
};
use joule_core::export_entries_csv;
use tracing::info;

use crate::{session_id, AppError, AppState};

/// GET /api/export/entries - Download the session's raw log as CSV
pub async fn export_entries(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response<Body>, AppError> {
    let session = session_id(&headers);
    let csv = state
        .sessions
        .read(&session, |s| export_entries_csv(s.entries()))
        .await?;

    let rows = csv.lines().count().saturating_sub(1);
    info!(rows, "Exported entry log to CSV");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/csv; charset=utf-8")
        .header(
            header::CONTENT_DISPOSITION,
            format!(
                "attachment; filename=\"energy-log-{}.csv\"",
                chrono::Utc::now().format("%Y%m%d")
            ),
        )
        .body(Body::from(csv))
        .map_err(|e| AppError::internal(&e.to_string()))
}
