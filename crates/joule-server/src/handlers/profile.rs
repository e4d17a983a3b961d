//! User profile handlers

use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, Json};
use joule_core::UserProfile;
use tracing::info;

use crate::{session_id, AppError, AppState};

/// GET /api/profile - The session's profile, 404 until one is set
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<UserProfile>, AppError> {
    let session = session_id(&headers);
    let profile = state
        .sessions
        .read(&session, |s| s.profile().cloned())
        .await;

    profile
        .map(Json)
        .ok_or_else(|| AppError::not_found("Profile not set"))
}

/// PUT /api/profile - Set or replace the session's profile
pub async fn put_profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(profile): Json<UserProfile>,
) -> Result<Json<UserProfile>, AppError> {
    let session = session_id(&headers);

    if profile.name.trim().is_empty() {
        return Err(AppError::bad_request("Name is required"));
    }
    if profile.age == 0 || profile.age > 120 {
        return Err(AppError::bad_request("Age must be between 1 and 120"));
    }

    info!(name = %profile.name, "Profile updated");

    let profile = state
        .sessions
        .write(&session, |s| {
            s.set_profile(profile.clone());
            profile
        })
        .await;

    Ok(Json(profile))
}
