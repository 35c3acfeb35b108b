//! Domain services.
//!
//! DESIGN
//! ======
//! Each service is a set of free functions over `PgPool` with its own
//! `thiserror` enum. Routes translate service errors to HTTP statuses; the
//! services themselves know nothing about Axum.

pub mod account;
pub mod answer;
pub mod comment;
pub mod friend;
pub mod question;
pub mod session;

use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

/// Map user columns selected under a prefix (`{prefix}id`,
/// `{prefix}username`, ...) into a wire [`shared::User`].
pub(crate) fn user_from_row(row: &PgRow, prefix: &str) -> shared::User {
    shared::User {
        id: row.get::<Uuid, _>(format!("{prefix}id").as_str()),
        username: row.get(format!("{prefix}username").as_str()),
        first_name: row.get(format!("{prefix}first_name").as_str()),
        last_name: row.get(format!("{prefix}last_name").as_str()),
        avatar_url: row.get(format!("{prefix}avatar_url").as_str()),
    }
}

/// Same as [`user_from_row`] for a LEFT JOINed user: `None` when the id
/// column is NULL (anonymous asker).
pub(crate) fn opt_user_from_row(row: &PgRow, prefix: &str) -> Option<shared::User> {
    let id: Option<Uuid> = row.get(format!("{prefix}id").as_str());
    id.map(|id| shared::User {
        id,
        username: row.get(format!("{prefix}username").as_str()),
        first_name: row.get(format!("{prefix}first_name").as_str()),
        last_name: row.get(format!("{prefix}last_name").as_str()),
        avatar_url: row.get(format!("{prefix}avatar_url").as_str()),
    })
}
