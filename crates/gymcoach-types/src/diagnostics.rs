//! Diagnostic report returned by `GET /test`.
//!
//! The report describes the optional database integration in
//! human-readable terms. Each field is an enumerated state that renders
//! to a fixed display string on the wire, so clients see the same text
//! whether or not the integration is compiled in or configured.

use std::fmt;

use serde::{Serialize, Serializer};
use ts_rs::TS;
use utoipa::ToSchema;

/// Display text for the `backend` field; the handler only runs when the
/// backend is up.
pub const BACKEND_RUNNING: &str = "✅ Running";

/// Maximum number of collection names included in a report.
pub const MAX_COLLECTIONS: usize = 10;

/// Maximum number of characters of an error message included in a report.
pub const MAX_ERROR_CHARS: usize = 50;

/// Live snapshot of database integration health.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS, ToSchema)]
#[ts(export, export_to = "bindings/")]
pub struct DiagnosticReport {
    /// Always [`BACKEND_RUNNING`].
    pub backend: String,
    /// Outcome of acquiring and probing the database handle.
    #[ts(as = "String")]
    #[schema(value_type = String)]
    pub database: DatabaseStatus,
    /// Whether `DATABASE_URL` is set in the environment.
    pub database_url: EnvFlag,
    /// Whether `DATABASE_NAME` is set in the environment.
    pub database_name: EnvFlag,
    /// Whether a database handle was obtained.
    pub connection_status: ConnectionStatus,
    /// Up to [`MAX_COLLECTIONS`] collection names, empty unless the probe
    /// succeeded.
    pub collections: Vec<String>,
}

/// Outcome of the database probe.
///
/// Serialized via its [`Display`](fmt::Display) text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseStatus {
    /// The database integration is not enabled in this deployment.
    IntegrationMissing,
    /// The integration is enabled but no usable handle exists.
    HandleUninitialized,
    /// The handle answered the collection listing.
    Working,
    /// The handle exists but listing collections failed.
    ///
    /// Holds the error text, already truncated to [`MAX_ERROR_CHARS`].
    ProbeFailure(String),
    /// Acquiring the handle failed.
    ///
    /// Holds the error text, already truncated to [`MAX_ERROR_CHARS`].
    IntegrationError(String),
}

impl DatabaseStatus {
    /// Build a [`DatabaseStatus::ProbeFailure`], truncating the message.
    pub fn probe_failure(message: &str) -> Self {
        Self::ProbeFailure(truncate_error(message))
    }

    /// Build a [`DatabaseStatus::IntegrationError`], truncating the message.
    pub fn integration_error(message: &str) -> Self {
        Self::IntegrationError(truncate_error(message))
    }
}

impl fmt::Display for DatabaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IntegrationMissing => {
                f.write_str("❌ Database module not found (database integration not enabled)")
            }
            Self::HandleUninitialized => f.write_str("⚠️  Available but not initialized"),
            Self::Working => f.write_str("✅ Connected & Working"),
            Self::ProbeFailure(message) => write!(f, "⚠️  Connected but Error: {message}"),
            Self::IntegrationError(message) => write!(f, "❌ Error: {message}"),
        }
    }
}

impl Serialize for DatabaseStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Presence of an environment variable. Only presence is reported, never
/// the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS, ToSchema)]
#[ts(export, export_to = "bindings/")]
pub enum EnvFlag {
    /// The variable is set.
    #[serde(rename = "✅ Set")]
    Set,
    /// The variable is unset.
    #[serde(rename = "❌ Not Set")]
    NotSet,
}

impl EnvFlag {
    /// Map an optional variable value to a flag.
    pub const fn from_presence(present: bool) -> Self {
        if present { Self::Set } else { Self::NotSet }
    }
}

/// Whether the probe obtained a database handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS, ToSchema)]
#[ts(export, export_to = "bindings/")]
pub enum ConnectionStatus {
    /// A handle was obtained.
    Connected,
    /// No handle was obtained.
    #[serde(rename = "Not Connected")]
    NotConnected,
}

/// Cut an error message down to [`MAX_ERROR_CHARS`] characters.
///
/// Counts `char`s, not bytes, so multi-byte text is never split.
pub fn truncate_error(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}
