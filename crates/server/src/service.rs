//! HTTP API for the suggestion service.
//!
//! Sessions are created explicitly and addressed by id; each suggestion
//! request is one synchronous pass over the shared catalog. An exhausted
//! candidate set is a 200 with a null movie and an explanatory message,
//! not an error.

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use catalog::{Catalog, Movie};
use session::SessionStore;

use crate::suggester::{SuggestMode, Suggester};

type ApiResult<T> = Result<Json<T>, ApiError>;
type ApiError = (StatusCode, Json<Value>);

fn not_found_error(id: &str) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "unknown session",
            "session_id": id
        })),
    )
}

fn internal_error(message: &str, details: &str) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": message,
            "details": details
        })),
    )
}

#[derive(Clone)]
pub struct AppState {
    pub suggester: Suggester,
    pub sessions: SessionStore,
}

/// Body returned by the suggest endpoint
#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    /// The chosen record, or null when nothing unseen matched
    pub movie: Option<Movie>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub fn create_app(catalog: Arc<Catalog>) -> Router {
    let state = AppState {
        suggester: Suggester::new(catalog),
        sessions: SessionStore::new(),
    };
    build_router(state)
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/sessions", post(create_session))
        .route("/sessions/{session_id}", delete(remove_session))
        .route("/sessions/{session_id}/suggest", post(suggest))
        .route("/sessions/{session_id}/history", get(history))
        .route("/sessions/{session_id}/reset", post(reset))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({
        "service": "Film Aura",
        "description": "Movie suggestions by language, mood, random pick, or trending list",
        "endpoints": {
            "POST /sessions": "Create a viewing session",
            "POST /sessions/{session_id}/suggest": "Request a suggestion (body: mode)",
            "GET /sessions/{session_id}/history": "Movies shown so far, oldest first",
            "POST /sessions/{session_id}/reset": "Clear history and seen titles",
            "DELETE /sessions/{session_id}": "Discard the session",
            "GET /health": "Health check"
        }
    }))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn create_session(State(state): State<AppState>) -> Json<Value> {
    let session_id = state.sessions.create();
    info!("session {} created", session_id);
    Json(json!({ "session_id": session_id }))
}

async fn suggest(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(mode): Json<SuggestMode>,
) -> ApiResult<SuggestResponse> {
    let outcome = state
        .sessions
        .with_session(&session_id, |session| {
            state.suggester.suggest(session, &mode)
        })
        .ok_or_else(|| not_found_error(&session_id))?;

    let movie = outcome.map_err(|e| {
        error!("suggestion failed for session {}: {}", session_id, e);
        internal_error("suggestion failed", &e.to_string())
    })?;

    let message = movie.is_none().then(|| mode.empty_notice());
    Ok(Json(SuggestResponse { movie, message }))
}

async fn history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Vec<Movie>> {
    state
        .sessions
        .history(&session_id)
        .map(Json)
        .ok_or_else(|| not_found_error(&session_id))
}

async fn reset(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Value> {
    if state.sessions.reset(&session_id) {
        info!("session {} reset", session_id);
        Ok(Json(json!({ "status": "reset" })))
    } else {
        Err(not_found_error(&session_id))
    }
}

async fn remove_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Value> {
    if state.sessions.remove(&session_id) {
        Ok(Json(json!({ "status": "removed" })))
    } else {
        Err(not_found_error(&session_id))
    }
}
