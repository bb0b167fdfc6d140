//! Shared application state for the API server.
//!
//! [`AppState`] is built once at startup and shared read-only across all
//! requests via `Arc`. It carries the optional database integration and
//! the environment lookup used by the diagnostic probe.

use std::time::Duration;

use gymcoach_db::DatabaseIntegration;

/// Upper bound on how long the diagnostic probe waits for the database.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Reads an environment variable, returning `None` when unset.
pub type EnvLookup = fn(&str) -> Option<String>;

/// Read from the process environment. Empty values count as unset.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Shared state for the Axum application.
pub struct AppState {
    /// The database integration, or `None` when it is not enabled.
    pub database: Option<DatabaseIntegration>,
    /// Environment lookup used for presence checks.
    pub env_lookup: EnvLookup,
    /// Deadline for the collection listing in the diagnostic probe.
    pub probe_timeout: Duration,
}

impl AppState {
    /// Create application state reading the process environment.
    pub const fn new(database: Option<DatabaseIntegration>) -> Self {
        Self {
            database,
            env_lookup: process_env,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    /// Replace the environment lookup.
    #[must_use]
    pub const fn with_env_lookup(mut self, env_lookup: EnvLookup) -> Self {
        self.env_lookup = env_lookup;
        self
    }

    /// Replace the probe deadline.
    #[must_use]
    pub const fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Whether the named environment variable is set.
    pub fn env_is_set(&self, name: &str) -> bool {
        (self.env_lookup)(name).is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(clippy::unnecessary_wraps)]
    fn fixed_env(_: &str) -> Option<String> {
        Some(String::from("set"))
    }

    #[test]
    fn builders_compose_in_const_context() {
        let state = const {
            AppState::new(None)
                .with_env_lookup(fixed_env)
                .with_probe_timeout(Duration::from_millis(250))
        };
        assert_eq!(state.probe_timeout, Duration::from_millis(250));
        assert!(state.env_is_set("DATABASE_URL"));
        assert!(state.database.is_none());
    }

    #[test]
    fn default_state_has_no_integration_and_five_second_deadline() {
        let state = AppState::default();
        assert!(state.database.is_none());
        assert_eq!(state.probe_timeout, DEFAULT_PROBE_TIMEOUT);
    }
}
