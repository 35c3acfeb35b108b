//! Account service — signup, credential checks, profiles, stats.
//!
//! TRADE-OFFS
//! ==========
//! Passwords are stored as `salt$sha256(salt + password)` hex. Verification
//! recomputes the digest with the stored salt, so a leaked row does not
//! yield a reusable credential for other accounts.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use rand::Rng;
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

const USERNAME_MIN_LEN: usize = 3;
const USERNAME_MAX_LEN: usize = 30;
const PASSWORD_MIN_LEN: usize = 8;
const SEARCH_LIMIT: i64 = 20;

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("invalid username")]
    InvalidUsername,
    #[error("password too short")]
    WeakPassword,
    #[error("username already taken")]
    UsernameTaken,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("date of birth is invalid")]
    InvalidDateOfBirth,
    #[error("user not found")]
    NotFound,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

// =============================================================================
// VALIDATION & HASHING
// =============================================================================

/// Normalize a username: trimmed, lowercased, `[a-z0-9_]`, 3..=30 chars.
#[must_use]
pub fn normalize_username(username: &str) -> Option<String> {
    let normalized = username.trim().to_ascii_lowercase();
    if normalized.len() < USERNAME_MIN_LEN || normalized.len() > USERNAME_MAX_LEN {
        return None;
    }
    if !normalized
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return None;
    }
    Some(normalized)
}

fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    super::session::bytes_to_hex(&hasher.finalize())
}

/// Hash a password with a fresh random salt, producing `salt$digest`.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let salt_bytes: [u8; 16] = rand::rng().random();
    let salt = super::session::bytes_to_hex(&salt_bytes);
    let digest = sha256_hex(&format!("{salt}{password}"));
    format!("{salt}${digest}")
}

/// Check a password against a stored `salt$digest` value.
#[must_use]
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt, digest)) = stored.split_once('$') else {
        return false;
    };
    sha256_hex(&format!("{salt}{password}")) == digest
}

/// Parse a `YYYY-MM-DD` date of birth, rejecting malformed or future dates.
pub fn parse_date_of_birth(raw: &str) -> Result<Date, AccountError> {
    let format = format_description!("[year]-[month]-[day]");
    let date = Date::parse(raw.trim(), &format).map_err(|_| AccountError::InvalidDateOfBirth)?;
    if date > OffsetDateTime::now_utc().date() {
        return Err(AccountError::InvalidDateOfBirth);
    }
    Ok(date)
}

// =============================================================================
// SIGNUP / SIGNIN
// =============================================================================

/// Create a new user. Returns the public user on success.
pub async fn signup(pool: &PgPool, body: &shared::SignupRequest) -> Result<shared::User, AccountError> {
    let username = normalize_username(&body.username).ok_or(AccountError::InvalidUsername)?;
    if body.password.len() < PASSWORD_MIN_LEN {
        return Err(AccountError::WeakPassword);
    }

    let id = Uuid::new_v4();
    let result = sqlx::query(
        "INSERT INTO users (id, username, password_hash, first_name, last_name)
         VALUES ($1, $2, $3, $4, $5)
         ON CONFLICT (username) DO NOTHING",
    )
    .bind(id)
    .bind(&username)
    .bind(hash_password(&body.password))
    .bind(body.first_name.trim())
    .bind(body.last_name.trim())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AccountError::UsernameTaken);
    }

    Ok(shared::User {
        id,
        username,
        first_name: body.first_name.trim().to_owned(),
        last_name: body.last_name.trim().to_owned(),
        avatar_url: None,
    })
}

/// Verify credentials and return the user.
pub async fn signin(pool: &PgPool, username: &str, password: &str) -> Result<shared::User, AccountError> {
    let username = normalize_username(username).ok_or(AccountError::InvalidCredentials)?;

    let row = sqlx::query(
        "SELECT id, username, first_name, last_name, avatar_url, password_hash
         FROM users WHERE username = $1",
    )
    .bind(&username)
    .fetch_optional(pool)
    .await?
    .ok_or(AccountError::InvalidCredentials)?;

    let stored: String = row.get("password_hash");
    if !verify_password(password, &stored) {
        return Err(AccountError::InvalidCredentials);
    }

    Ok(super::user_from_row(&row, ""))
}

// =============================================================================
// PROFILES
// =============================================================================

/// Fetch a public profile by username.
pub async fn profile_by_username(pool: &PgPool, username: &str) -> Result<shared::UserProfile, AccountError> {
    let row = sqlx::query(
        r"SELECT id, username, first_name, last_name, avatar_url, self_description,
                 to_char(date_of_birth, 'YYYY-MM-DD') AS date_of_birth
          FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?
    .ok_or(AccountError::NotFound)?;

    Ok(shared::UserProfile {
        user: super::user_from_row(&row, ""),
        self_description: row.get("self_description"),
        date_of_birth: row.get("date_of_birth"),
    })
}

/// Apply a partial settings update and return the fresh profile.
pub async fn update_settings(
    pool: &PgPool,
    user_id: Uuid,
    update: &shared::AccountSettingsUpdate,
) -> Result<shared::UserProfile, AccountError> {
    let date_of_birth = match update.date_of_birth.as_deref() {
        Some(raw) => Some(parse_date_of_birth(raw)?),
        None => None,
    };

    let row = sqlx::query(
        r"UPDATE users SET
              first_name = COALESCE($2, first_name),
              last_name = COALESCE($3, last_name),
              avatar_url = COALESCE($4, avatar_url),
              self_description = COALESCE($5, self_description),
              date_of_birth = COALESCE($6, date_of_birth)
          WHERE id = $1
          RETURNING id, username, first_name, last_name, avatar_url, self_description,
                    to_char(date_of_birth, 'YYYY-MM-DD') AS date_of_birth",
    )
    .bind(user_id)
    .bind(update.first_name.as_deref())
    .bind(update.last_name.as_deref())
    .bind(update.avatar_url.as_deref())
    .bind(update.self_description.as_deref())
    .bind(date_of_birth)
    .fetch_optional(pool)
    .await?
    .ok_or(AccountError::NotFound)?;

    Ok(shared::UserProfile {
        user: super::user_from_row(&row, ""),
        self_description: row.get("self_description"),
        date_of_birth: row.get("date_of_birth"),
    })
}

// =============================================================================
// STATS & SEARCH
// =============================================================================

/// Aggregate answer/friend/like counters for a profile page.
pub async fn stats_by_username(pool: &PgPool, username: &str) -> Result<shared::UserStats, AccountError> {
    let user_id: Uuid = sqlx::query_scalar("SELECT id FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?
        .ok_or(AccountError::NotFound)?;

    let row = sqlx::query(
        r"SELECT COUNT(a.id) AS answers_count,
                 COALESCE(SUM(a.likes), 0)::BIGINT AS likes_count
          FROM answers a
          JOIN questions q ON q.id = a.question_id
          WHERE q.asked_user = $1",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    let friends_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM friendships WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await?;

    Ok(shared::UserStats {
        answers_count: row.get("answers_count"),
        friends_count,
        likes_count: row.get("likes_count"),
    })
}

/// Escape `ILIKE` wildcards so user input only matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Substring search over usernames and display names.
pub async fn search_users(pool: &PgPool, query: &str) -> Result<Vec<shared::User>, AccountError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    let pattern = format!("%{}%", escape_like(trimmed));

    let rows = sqlx::query(
        "SELECT id, username, first_name, last_name, avatar_url
         FROM users
         WHERE username ILIKE $1 OR first_name ILIKE $1 OR last_name ILIKE $1
         ORDER BY username ASC
         LIMIT $2",
    )
    .bind(pattern)
    .bind(SEARCH_LIMIT)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(|r| super::user_from_row(r, "")).collect())
}
