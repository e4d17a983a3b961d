//! Joule Web Server
//!
//! Axum-based REST API for the Joule household energy tracker. The server is
//! the presentation layer: it owns the per-session stores, validates form
//! input through joule-core, and hands the chart frontend its summary, tip,
//! and CSV export data.
//!
//! Sessions are in-memory only. Each request names its session with the
//! `X-Session-Id` header; requests without one share the "local" session,
//! matching single-user use.

use std::sync::Arc;

use axum::{
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::CorsLayer, services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};
use tracing::{error, info, warn};

mod handlers;
mod sessions;

pub use sessions::SessionManager;

/// Session header; absent means the shared local session
const SESSION_HEADER: &str = "x-session-id";

/// Session used by requests that carry no session header
pub const DEFAULT_SESSION: &str = "local";

/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
}

/// Shared application state
pub struct AppState {
    pub sessions: SessionManager,
    pub config: ServerConfig,
}

/// Resolve the session a request operates on
pub fn session_id(headers: &HeaderMap) -> String {
    headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .unwrap_or_else(|| DEFAULT_SESSION.to_string())
}

/// Success response
#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Create the application router
pub fn create_router(static_dir: Option<&str>, config: ServerConfig) -> Router {
    let state = Arc::new(AppState {
        sessions: SessionManager::new(),
        config: config.clone(),
    });

    let api_routes = Router::new()
        // Form wiring
        .route("/appliances", get(handlers::list_appliances))
        .route("/estimate", post(handlers::post_estimate))
        // Profile
        .route(
            "/profile",
            get(handlers::get_profile).put(handlers::put_profile),
        )
        // Daily log
        .route(
            "/entries",
            get(handlers::list_entries)
                .post(handlers::create_entry)
                .delete(handlers::clear_entries),
        )
        // Analytics
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/summary", get(handlers::get_summary))
        // Insights
        .route("/tips", get(handlers::get_tips))
        // Export
        .route("/export/entries", get(handlers::export_entries));

    // Build CORS layer
    let cors = if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE])
    };

    let mut app = Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ));

    // Serve the chart frontend if a directory is provided
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app
}

/// Start the server
pub async fn serve(
    host: &str,
    port: u16,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> anyhow::Result<()> {
    if static_dir.is_none() {
        warn!("No static directory configured; serving the API only");
    }

    let app = create_router(static_dir, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn internal(msg: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.to_string(),
            internal: None,
        }
    }
}

/// Map a core error to a response: validation and data errors surface to
/// the user, everything else stays generic
pub fn core_error(err: joule_core::Error) -> AppError {
    match err {
        joule_core::Error::Validation(msg) | joule_core::Error::InvalidData(msg) => {
            AppError::bad_request(&msg)
        }
        other => other.into(),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            internal: Some(err),
        }
    }
}

#[cfg(test)]
mod tests;
