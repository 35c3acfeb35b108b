//! Session token management.
//!
//! ARCHITECTURE
//! ============
//! HTTP auth uses long-lived random tokens sent as `Authorization: Token
//! <token>`. Tokens are opaque 32-byte hex strings stored server-side with an
//! expiry; a background sweeper deletes expired rows so the table does not
//! grow without bound.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt::Write;
use std::time::Duration;

use rand::Rng;
use sqlx::PgPool;
use tokio::task::JoinHandle;
use tracing::{error, info};
use uuid::Uuid;

use crate::state::AppState;

const SWEEP_INTERVAL_SECS: u64 = 3600;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Create a session for the given user, returning the token.
pub async fn create_session(pool: &PgPool, user_id: Uuid) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query("INSERT INTO sessions (token, user_id) VALUES ($1, $2)")
        .bind(&token)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(token)
}

/// Validate a session token and return the associated user.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<shared::User>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT u.id, u.username, u.first_name, u.last_name, u.avatar_url
          FROM sessions s
          JOIN users u ON u.id = s.user_id
          WHERE s.token = $1 AND s.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| super::user_from_row(&r, "")))
}

/// Delete a session by token.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

/// Spawn the background task that deletes expired sessions hourly.
pub fn spawn_session_sweeper(state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(SWEEP_INTERVAL_SECS));
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            match sqlx::query("DELETE FROM sessions WHERE expires_at <= now()")
                .execute(&state.pool)
                .await
            {
                Ok(result) if result.rows_affected() > 0 => {
                    info!(swept = result.rows_affected(), "expired sessions removed");
                }
                Ok(_) => {}
                Err(e) => error!(error = %e, "session sweep failed"),
            }
        }
    })
}
