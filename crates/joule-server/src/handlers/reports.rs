//! Dashboard and summary handlers

use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, Json};
use joule_core::{summarize, SummaryView};
use serde::Serialize;

use crate::{session_id, AppError, AppState};

/// Headline numbers for the dashboard cards
#[derive(Serialize)]
pub struct DashboardResponse {
    pub days_tracked: usize,
    pub average_per_day_kwh: f64,
    pub highest_day_kwh: f64,
    pub monthly_estimate_kwh: f64,
    pub estimated_monthly_cost: f64,
}

/// GET /api/dashboard - Headline statistics for the session
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<DashboardResponse>, AppError> {
    let session = session_id(&headers);
    let summary = state
        .sessions
        .read(&session, |s| summarize(s.entries()))
        .await;

    Ok(Json(DashboardResponse {
        days_tracked: summary.days_tracked,
        average_per_day_kwh: summary.average_per_day_kwh,
        highest_day_kwh: summary.peak.as_ref().map(|p| p.kwh).unwrap_or(0.0),
        monthly_estimate_kwh: summary.monthly_estimate_kwh,
        estimated_monthly_cost: summary.estimated_monthly_cost,
    }))
}

/// GET /api/summary - Full aggregate view the charts consume
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<SummaryView>, AppError> {
    let session = session_id(&headers);
    let summary = state
        .sessions
        .read(&session, |s| summarize(s.entries()))
        .await;
    Ok(Json(summary))
}
