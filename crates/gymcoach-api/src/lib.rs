//! HTTP API for the Gym Coach backend.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Content endpoints** (`/api/diet`, `/api/workouts`, `/api/recovery`)
//!   returning hard-coded coaching records
//! - **Liveness endpoints** (`/`, `/api/hello`)
//! - **Diagnostic endpoint** (`/test`) reporting on the optional database
//!   integration
//! - **API docs** (`/openapi.json`, `/docs`)
//!
//! # Architecture
//!
//! Handlers are stateless except for `/test`, which reads the injected
//! [`DatabaseIntegration`](gymcoach_db::DatabaseIntegration) and the
//! environment through the shared [`AppState`]. CORS is fully permissive
//! with credentials allowed.

pub mod diagnostics;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use openapi::ApiDoc;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, serve, start_server};
pub use state::{AppState, EnvLookup};
