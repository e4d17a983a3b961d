//! Energy-saving tip handlers

use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, Json};
use joule_core::{summarize, EfficiencyScore, Tip, TipEngine};
use serde::Serialize;

use crate::{session_id, AppError, AppState};

/// Efficiency badge shown next to the tip list
#[derive(Serialize)]
pub struct ScoreInfo {
    pub score: EfficiencyScore,
    pub label: &'static str,
    pub stars: u8,
    pub average_per_day_kwh: f64,
}

/// Tip list plus the efficiency badge; the badge is absent until the
/// session has at least one tracked day
#[derive(Serialize)]
pub struct TipsResponse {
    pub score: Option<ScoreInfo>,
    pub tips: Vec<Tip>,
}

/// GET /api/tips - Prioritized energy-saving advice for the session
pub async fn get_tips(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<TipsResponse>, AppError> {
    let session = session_id(&headers);
    let summary = state
        .sessions
        .read(&session, |s| summarize(s.entries()))
        .await;

    let score = if summary.days_tracked > 0 {
        let score = EfficiencyScore::from_average(summary.average_per_day_kwh);
        Some(ScoreInfo {
            score,
            label: score.label(),
            stars: score.stars(),
            average_per_day_kwh: summary.average_per_day_kwh,
        })
    } else {
        None
    };

    let tips = TipEngine::new().tips_for(&summary);

    Ok(Json(TipsResponse { score, tips }))
}
