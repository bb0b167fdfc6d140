//! Error types for the database integration.
//!
//! All errors are propagated via [`DbError`] which wraps the underlying
//! [`sqlx`] error with context about which operation failed.

/// Errors that can occur in the database integration.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The store rejected the request.
    #[error("{0}")]
    Store(String),
}
