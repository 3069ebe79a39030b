//! One-shot connectivity check run before the listener is bound.

use log::{error, info};

use crate::constants::{MSG_DB_CONNECTED, MSG_DB_CONNECT_FAILED};

use super::{SqlExecutor, SqlOutcome, Statement};

/// Run `SELECT 1` through the executor and log the result.
///
/// Never retries and never aborts startup; the return value is only
/// informational.
pub async fn run_startup_probe(executor: &SqlExecutor) -> bool {
    match executor.fetch(&Statement::new("SELECT 1 AS v")).await {
        SqlOutcome::Failed(err) => {
            error!("{}: {}", MSG_DB_CONNECT_FAILED, err);
            false
        }
        _ => {
            info!("{}", MSG_DB_CONNECTED);
            true
        }
    }
}
