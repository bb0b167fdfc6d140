//! The database probe behind `GET /test`.
//!
//! The probe never fails. Every outcome, from "integration not enabled"
//! to "listing timed out", is folded into a [`DiagnosticReport`] field.
//! Environment presence flags are computed independently of the database
//! outcome.

use std::time::Duration;

use gymcoach_db::DatabaseIntegration;
use gymcoach_types::diagnostics::{BACKEND_RUNNING, MAX_COLLECTIONS};
use gymcoach_types::{ConnectionStatus, DatabaseStatus, DiagnosticReport, EnvFlag};
use tracing::{debug, warn};

use crate::state::AppState;

/// Variable whose presence is reported as `database_url`.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Variable whose presence is reported as `database_name`.
pub const DATABASE_NAME_VAR: &str = "DATABASE_NAME";

/// Database half of the report.
struct DatabaseProbe {
    status: DatabaseStatus,
    connection: ConnectionStatus,
    collections: Vec<String>,
}

impl DatabaseProbe {
    const fn disconnected(status: DatabaseStatus) -> Self {
        Self {
            status,
            connection: ConnectionStatus::NotConnected,
            collections: Vec::new(),
        }
    }

    const fn connected(status: DatabaseStatus, collections: Vec<String>) -> Self {
        Self {
            status,
            connection: ConnectionStatus::Connected,
            collections,
        }
    }
}

/// Build the diagnostic report for the current state and environment.
pub async fn run_probe(state: &AppState) -> DiagnosticReport {
    let probe = probe_database(state.database.as_ref(), state.probe_timeout).await;

    DiagnosticReport {
        backend: BACKEND_RUNNING.to_owned(),
        database: probe.status,
        database_url: EnvFlag::from_presence(state.env_is_set(DATABASE_URL_VAR)),
        database_name: EnvFlag::from_presence(state.env_is_set(DATABASE_NAME_VAR)),
        connection_status: probe.connection,
        collections: probe.collections,
    }
}

/// Acquire the handle and list collections, bounded by `timeout`.
async fn probe_database(
    integration: Option<&DatabaseIntegration>,
    timeout: Duration,
) -> DatabaseProbe {
    let Some(integration) = integration else {
        return DatabaseProbe::disconnected(DatabaseStatus::IntegrationMissing);
    };

    let handle = match integration.acquire() {
        Ok(Some(handle)) => handle,
        Ok(None) => return DatabaseProbe::disconnected(DatabaseStatus::HandleUninitialized),
        Err(e) => {
            warn!(error = %e, "Database handle unavailable");
            return DatabaseProbe::disconnected(DatabaseStatus::integration_error(&e.to_string()));
        }
    };

    match tokio::time::timeout(timeout, handle.list_collections(MAX_COLLECTIONS)).await {
        Ok(Ok(mut names)) => {
            names.truncate(MAX_COLLECTIONS);
            debug!(
                backend = handle.kind(),
                database = handle.name().unwrap_or("<unnamed>"),
                collections = names.len(),
                "Database probe succeeded"
            );
            DatabaseProbe::connected(DatabaseStatus::Working, names)
        }
        Ok(Err(e)) => {
            warn!(backend = handle.kind(), error = %e, "Collection listing failed");
            DatabaseProbe::connected(DatabaseStatus::probe_failure(&e.to_string()), Vec::new())
        }
        Err(_) => {
            let message = format!("probe timed out after {}ms", timeout.as_millis());
            warn!(backend = handle.kind(), "{message}");
            DatabaseProbe::connected(DatabaseStatus::probe_failure(&message), Vec::new())
        }
    }
}
