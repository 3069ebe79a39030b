//! Database layer - connection pool, statement wrapper and startup probe.
//!
//! Every statement goes through [`SqlExecutor`]; repositories never touch
//! the pool directly.

pub mod executor;
pub mod probe;
pub mod statement;

pub use executor::{Row, SqlExecutor, SqlOutcome};
pub use probe::run_startup_probe;
pub use statement::Statement;

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

/// Store-level failure as seen by repositories and services.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("{0}")]
    Failed(String),

    #[error("expected {expected}, statement produced {found}")]
    UnexpectedOutcome {
        expected: &'static str,
        found: &'static str,
    },

    #[error("could not decode row: {0}")]
    Decode(String),
}

/// Create a PostgreSQL connection pool without opening a connection.
///
/// Connections are validated when acquired, so a dropped connection is
/// replaced instead of failing the statement. An unreachable store fails
/// each acquire after `acquire_timeout` rather than sqlx's 30s default.
pub fn create_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .test_before_acquire(true)
        .connect_lazy(database_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    const UNREACHABLE_URL: &str = "postgres://nobody@127.0.0.1:1/nothing";

    #[actix_web::test]
    async fn test_create_pool_is_lazy() {
        // Nothing listens here; a lazy pool must still be created.
        let pool = create_pool(UNREACHABLE_URL, 1, Duration::from_secs(1));
        assert!(pool.is_ok());
    }

    #[test]
    fn test_create_pool_rejects_malformed_url() {
        assert!(create_pool("not a url", 1, Duration::from_secs(1)).is_err());
    }

    #[actix_web::test]
    async fn test_acquire_gives_up_after_timeout() {
        let pool = create_pool(UNREACHABLE_URL, 1, Duration::from_millis(300)).unwrap();
        assert_eq!(pool.options().get_acquire_timeout(), Duration::from_millis(300));

        let started = Instant::now();
        assert!(pool.acquire().await.is_err());
        assert!(started.elapsed() < Duration::from_secs(10));
    }
}
