//! Axum router construction for the Gym Coach API.
//!
//! Assembles all routes into a single [`Router`] with permissive CORS
//! and request tracing.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::openapi;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- liveness message
/// - `GET /api/hello` -- greeting
/// - `GET /api/diet` -- diet guide
/// - `GET /api/workouts` -- workout catalog
/// - `GET /api/recovery` -- recovery toolkit
/// - `GET /test` -- database diagnostic report
/// - `GET /openapi.json` -- `OpenAPI` document
/// - `GET /docs` -- Swagger UI
///
/// Unknown paths answer 404 and unsupported methods 405, both with a
/// JSON `detail` body.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/hello", get(handlers::hello))
        .route("/api/diet", get(handlers::get_diet))
        .route("/api/workouts", get(handlers::get_workouts))
        .route("/api/recovery", get(handlers::get_recovery))
        .route("/test", get(handlers::test_database))
        .route(openapi::OPENAPI_PATH, get(openapi::openapi_json))
        .route(openapi::DOCS_PATH, get(openapi::swagger_ui))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy: every origin, method, and header, with credentials.
///
/// A wildcard `*` is not allowed together with credentials, so the
/// request's own origin, method, and headers are echoed back instead.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
