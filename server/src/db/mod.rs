//! Postgres pool construction and embedded migrations.
//!
//! The Q&A feed is read-heavy and every handler borrows a connection for a
//! single query or a short transaction, so the pool stays small by default
//! and bounds how long a request may wait for a free connection. Migrations
//! run before the listener binds, so a schema mismatch fails startup instead
//! of surfacing as per-request errors.

#[cfg(test)]
#[path = "db_test.rs"]
mod db_test;

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Pool sizing read from the environment, with conservative defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl PoolSettings {
    /// Read `DB_MAX_CONNECTIONS` and `DB_ACQUIRE_TIMEOUT_SECS`. Absent,
    /// unparseable, or zero values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("DB_MAX_CONNECTIONS").ok().as_deref(),
            std::env::var("DB_ACQUIRE_TIMEOUT_SECS").ok().as_deref(),
        )
    }

    fn from_values(max_connections: Option<&str>, acquire_timeout_secs: Option<&str>) -> Self {
        let max_connections = max_connections
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);
        let acquire_timeout_secs = acquire_timeout_secs
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_ACQUIRE_TIMEOUT_SECS);
        Self {
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        }
    }
}

/// Connect to Postgres with [`PoolSettings`] from the environment and run
/// the embedded migrations.
///
/// # Errors
///
/// Returns an error if the connection or migrations fail.
pub async fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let settings = PoolSettings::from_env();
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;

    Ok(pool)
}
