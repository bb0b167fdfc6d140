//! In-memory store with a fixed collection listing.
//!
//! Stands in for a real database in tests. The
//! listing outcome is chosen at construction: either a list of names or
//! an error message returned on every call.

use crate::error::DbError;

/// A store whose listing result is fixed at construction time.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    name: Option<String>,
    available: bool,
    listing: Result<Vec<String>, String>,
}

impl MemoryStore {
    /// A store that lists the given collections.
    pub fn with_collections<I, S>(name: &str, collections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: Some(name.to_owned()),
            available: true,
            listing: Ok(collections.into_iter().map(Into::into).collect()),
        }
    }

    /// A store whose listing always fails with `message`.
    pub fn failing(name: &str, message: &str) -> Self {
        Self {
            name: Some(name.to_owned()),
            available: true,
            listing: Err(message.to_owned()),
        }
    }

    /// Mark the store as not yet initialized.
    #[must_use]
    pub const fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    /// The configured store name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether the store is marked as initialized.
    pub const fn is_available(&self) -> bool {
        self.available
    }

    /// Return up to `limit` of the configured names, in order.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Store`] if the store was built with [`MemoryStore::failing`].
    pub fn list_collections(&self, limit: usize) -> Result<Vec<String>, DbError> {
        match &self.listing {
            Ok(names) => Ok(names.iter().take(limit).cloned().collect()),
            Err(message) => Err(DbError::Store(message.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_respects_limit_and_order() {
        let store = MemoryStore::with_collections("gym", ["a", "b", "c"]);
        let names = store.list_collections(2).unwrap_or_default();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn failing_store_returns_its_message() {
        let store = MemoryStore::failing("gym", "connection reset by peer");
        let err = store.list_collections(10).err().map(|e| e.to_string());
        assert_eq!(err.as_deref(), Some("connection reset by peer"));
    }

    #[test]
    fn unavailable_flag() {
        let store = MemoryStore::with_collections("gym", Vec::<String>::new());
        assert!(store.is_available());
        assert!(!store.unavailable().is_available());
    }
}
