//! Optional database integration for the Gym Coach API.
//!
//! The API itself stores nothing. This crate only exists so the
//! diagnostic endpoint can report whether a database is configured and
//! reachable. A deployment either leaves the integration out entirely or
//! builds a [`DatabaseIntegration`] at startup and hands it to the API.
//!
//! # Acquisition outcomes
//!
//! ```text
//! DatabaseIntegration::acquire()
//!     |
//!     +-- Ok(Some(handle))  --> handle.list_collections()
//!     +-- Ok(None)          --> integration present, no usable handle
//!     +-- Err(error)        --> handle construction failed at startup
//! ```
//!
//! # Modules
//!
//! - [`handle`] -- [`StoreHandle`] dispatch and [`DatabaseIntegration`]
//! - [`postgres`] -- `PostgreSQL` pool and configuration
//! - [`memory`] -- Fixed-listing in-memory store
//! - [`error`] -- Shared error types

pub mod error;
pub mod handle;
pub mod memory;
pub mod postgres;

// Re-export primary types for convenience.
pub use error::DbError;
pub use handle::{DatabaseIntegration, StoreHandle};
pub use memory::MemoryStore;
pub use postgres::{PostgresConfig, PostgresStore};
