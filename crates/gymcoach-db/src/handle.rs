//! Database handle dispatch and the three-way acquisition result.
//!
//! [`StoreHandle`] uses enum dispatch instead of a trait object because
//! collection listing is async, and async methods are not dyn-compatible.

use crate::error::DbError;
use crate::memory::MemoryStore;
use crate::postgres::{PostgresConfig, PostgresStore};

/// A database handle the diagnostic probe can interrogate.
#[derive(Clone)]
pub enum StoreHandle {
    /// A lazily connected `PostgreSQL` pool.
    Postgres(PostgresStore),
    /// A fixed-listing in-memory store.
    Memory(MemoryStore),
}

impl StoreHandle {
    /// Whether the handle is initialized and usable.
    pub fn is_available(&self) -> bool {
        match self {
            Self::Postgres(store) => store.is_available(),
            Self::Memory(store) => store.is_available(),
        }
    }

    /// The database name, if the handle knows it.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Postgres(store) => store.name(),
            Self::Memory(store) => store.name(),
        }
    }

    /// List up to `limit` collection names.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the backing store cannot be reached or
    /// rejects the query.
    pub async fn list_collections(&self, limit: usize) -> Result<Vec<String>, DbError> {
        match self {
            Self::Postgres(store) => store.list_collections(limit).await,
            Self::Memory(store) => store.list_collections(limit),
        }
    }

    /// Short backend label for logging.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }
}

/// Internal state of an enabled integration.
enum HandleState {
    Ready(StoreHandle),
    Uninitialized,
    Failed(DbError),
}

/// An enabled database integration.
///
/// Whether the integration exists at all is expressed by the caller
/// holding an `Option<DatabaseIntegration>`. Once it exists, it holds a
/// usable handle, nothing, or the error that prevented building one.
pub struct DatabaseIntegration {
    state: HandleState,
}

impl DatabaseIntegration {
    /// An integration wrapping an already-built handle.
    pub const fn with_handle(handle: StoreHandle) -> Self {
        Self {
            state: HandleState::Ready(handle),
        }
    }

    /// An integration with no handle.
    pub const fn uninitialized() -> Self {
        Self {
            state: HandleState::Uninitialized,
        }
    }

    /// An integration whose handle could not be built.
    pub const fn failed(error: DbError) -> Self {
        Self {
            state: HandleState::Failed(error),
        }
    }

    /// Build the integration from an optional `PostgreSQL` configuration.
    ///
    /// No configuration yields an uninitialized integration. A bad URL is
    /// captured rather than returned, so startup never fails on it.
    /// Must be called from within a Tokio runtime.
    pub fn from_postgres(config: Option<&PostgresConfig>) -> Self {
        let Some(config) = config else {
            tracing::info!("Database integration enabled without a URL");
            return Self::uninitialized();
        };
        match PostgresStore::connect_lazy(config) {
            Ok(store) => Self::with_handle(StoreHandle::Postgres(store)),
            Err(e) => {
                tracing::warn!(error = %e, "Database handle could not be created");
                Self::failed(e)
            }
        }
    }

    /// Acquire the handle.
    ///
    /// Returns `Ok(None)` when no handle exists or the handle reports it
    /// is not available.
    ///
    /// # Errors
    ///
    /// Returns the error captured when the handle was built.
    pub fn acquire(&self) -> Result<Option<&StoreHandle>, &DbError> {
        match &self.state {
            HandleState::Ready(handle) if handle.is_available() => Ok(Some(handle)),
            HandleState::Ready(_) | HandleState::Uninitialized => Ok(None),
            HandleState::Failed(error) => Err(error),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ready_handle_is_acquired() {
        let integration = DatabaseIntegration::with_handle(StoreHandle::Memory(
            MemoryStore::with_collections("gym", ["users"]),
        ));
        let handle = integration.acquire().unwrap().unwrap();
        assert_eq!(handle.name(), Some("gym"));
        assert_eq!(handle.kind(), "memory");
    }

    #[test]
    fn unavailable_handle_counts_as_uninitialized() {
        let integration = DatabaseIntegration::with_handle(StoreHandle::Memory(
            MemoryStore::with_collections("gym", ["users"]).unavailable(),
        ));
        assert!(integration.acquire().unwrap().is_none());
    }

    #[test]
    fn uninitialized_integration_has_no_handle() {
        let integration = DatabaseIntegration::uninitialized();
        assert!(integration.acquire().unwrap().is_none());
    }

    #[test]
    fn failed_integration_returns_its_error() {
        let integration = DatabaseIntegration::failed(DbError::Config(String::from("bad url")));
        let err = integration.acquire().err().map(ToString::to_string);
        assert_eq!(err.as_deref(), Some("Configuration error: bad url"));
    }

    #[tokio::test]
    async fn from_postgres_without_config_is_uninitialized() {
        let integration = DatabaseIntegration::from_postgres(None);
        assert!(integration.acquire().unwrap().is_none());
    }

    #[tokio::test]
    async fn from_postgres_with_bad_url_is_failed() {
        let config = PostgresConfig::new("::not-a-url::");
        let integration = DatabaseIntegration::from_postgres(Some(&config));
        assert!(integration.acquire().is_err());
    }

    #[tokio::test]
    async fn memory_listing_through_handle() {
        let handle = StoreHandle::Memory(MemoryStore::with_collections("gym", ["users", "logs"]));
        let names = handle.list_collections(10).await.unwrap();
        assert_eq!(names, ["users", "logs"]);
    }
}
