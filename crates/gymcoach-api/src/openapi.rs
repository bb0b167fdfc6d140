//! `OpenAPI` document and interactive docs.
//!
//! `GET /openapi.json` serves the generated `OpenAPI` 3.1 document for every
//! route. `GET /docs` serves a Swagger UI page that loads it.

use axum::Json;
use axum::response::Html;
use gymcoach_types::{
    BreathingRoutine, ConnectionStatus, DiagnosticReport, DietGuide, EnvFlag, Exercise, Hydration,
    Level, Meal, Message, Pillar, Program, RecoveryToolkit, Stretch, WeightLiters, WorkoutCatalog,
};
use utoipa::OpenApi;

use crate::handlers;

/// Path of the generated document.
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Path of the Swagger UI page.
pub const DOCS_PATH: &str = "/docs";

/// `OpenAPI` description of the Gym Coach API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gym Coach API",
        version = "1.0.0",
        description = "Diet, workout, and recovery guidance plus a database diagnostic"
    ),
    paths(
        handlers::root,
        handlers::hello,
        handlers::get_diet,
        handlers::get_workouts,
        handlers::get_recovery,
        handlers::test_database,
    ),
    components(schemas(
        Message,
        DietGuide,
        Meal,
        Hydration,
        WeightLiters,
        WorkoutCatalog,
        Program,
        Level,
        Exercise,
        RecoveryToolkit,
        Pillar,
        Stretch,
        BreathingRoutine,
        DiagnosticReport,
        EnvFlag,
        ConnectionStatus,
    )),
    tags(
        (name = "status", description = "Liveness and greeting"),
        (name = "content", description = "Coaching content"),
        (name = "diagnostics", description = "Database integration health")
    )
)]
pub struct ApiDoc;

/// `GET /openapi.json`
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// `GET /docs`
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Gym Coach API - Swagger UI</title>
    <link rel="stylesheet" type="text/css" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {
            window.ui = SwaggerUIBundle({
                url: '/openapi.json',
                dom_id: '#swagger-ui',
                deepLinking: true,
                presets: [SwaggerUIBundle.presets.apis],
                layout: "BaseLayout"
            });
        };
    </script>
</body>
</html>
"#;
