//! REST API endpoint handlers.
//!
//! Content handlers build a fresh literal record per request; the
//! records are pure values, so repeated calls return identical bodies.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Liveness message |
//! | `GET` | `/api/hello` | Greeting message |
//! | `GET` | `/api/diet` | Diet guide |
//! | `GET` | `/api/workouts` | Workout catalog |
//! | `GET` | `/api/recovery` | Recovery toolkit |
//! | `GET` | `/test` | Database diagnostic report |
//!
//! Each handler carries a `utoipa::path` annotation; the `OpenAPI`
//! document is assembled in [`crate::openapi`].

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{Method, Uri};
use gymcoach_types::{DiagnosticReport, DietGuide, Message, RecoveryToolkit, WorkoutCatalog};

use crate::diagnostics;
use crate::error::ApiError;
use crate::state::AppState;

/// Body of `GET /`.
pub const ROOT_MESSAGE: &str = "Gym Coach Backend is running";

/// Body of `GET /api/hello`.
pub const HELLO_MESSAGE: &str = "Hello from the backend API!";

// ---------------------------------------------------------------------------
// Liveness
// ---------------------------------------------------------------------------

/// `GET /` -- report that the backend is up.
#[utoipa::path(
    get,
    path = "/",
    tag = "status",
    responses((status = 200, body = Message))
)]
pub async fn root() -> Json<Message> {
    Json(Message::new(ROOT_MESSAGE))
}

/// `GET /api/hello` -- greeting used by the web client's connectivity check.
#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "status",
    responses((status = 200, body = Message))
)]
pub async fn hello() -> Json<Message> {
    Json(Message::new(HELLO_MESSAGE))
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

/// `GET /api/diet`
#[utoipa::path(
    get,
    path = "/api/diet",
    tag = "content",
    responses((status = 200, body = DietGuide))
)]
pub async fn get_diet() -> Json<DietGuide> {
    Json(gymcoach_content::diet_guide())
}

/// `GET /api/workouts`
#[utoipa::path(
    get,
    path = "/api/workouts",
    tag = "content",
    responses((status = 200, body = WorkoutCatalog))
)]
pub async fn get_workouts() -> Json<WorkoutCatalog> {
    Json(gymcoach_content::workout_catalog())
}

/// `GET /api/recovery`
#[utoipa::path(
    get,
    path = "/api/recovery",
    tag = "content",
    responses((status = 200, body = RecoveryToolkit))
)]
pub async fn get_recovery() -> Json<RecoveryToolkit> {
    Json(gymcoach_content::recovery_toolkit())
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// `GET /test` -- probe the optional database integration.
///
/// Always answers 200; failures are described in the body.
#[utoipa::path(
    get,
    path = "/test",
    tag = "diagnostics",
    responses((status = 200, body = DiagnosticReport))
)]
pub async fn test_database(State(state): State<Arc<AppState>>) -> Json<DiagnosticReport> {
    Json(diagnostics::run_probe(&state).await)
}

// ---------------------------------------------------------------------------
// Fallbacks
// ---------------------------------------------------------------------------

/// Fallback for paths with no route.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    tracing::debug!(%method, %uri, "No route");
    ApiError::NotFound
}

/// Fallback for known paths requested with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    tracing::debug!(%method, %uri, "Method not allowed");
    ApiError::MethodNotAllowed
}
