//! Friendship service — requests, accept/reject, unfriending.
//!
//! DESIGN
//! ======
//! A friendship is stored as two rows, one per direction, so friend-list and
//! feed queries are a single equality lookup on `user_id`. Accepting a
//! request inserts both rows and deletes the request in one transaction.

use sqlx::{PgPool, Row};
use uuid::Uuid;

use shared::FriendRequest;

#[derive(Debug, thiserror::Error)]
pub enum FriendError {
    #[error("request not found: {0}")]
    RequestNotFound(Uuid),
    #[error("user not found: {0}")]
    UserNotFound(Uuid),
    #[error("users are already friends")]
    AlreadyFriends,
    #[error("request already exists")]
    AlreadyRequested,
    #[error("cannot befriend yourself")]
    SelfFriendship,
    #[error("users are not friends")]
    NotFriends,
    #[error("request is not addressed to this user")]
    Forbidden,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create a friendship request from `from_user` to `to_user`.
pub async fn request_friendship(pool: &PgPool, from_user: Uuid, to_user: Uuid) -> Result<Uuid, FriendError> {
    if from_user == to_user {
        return Err(FriendError::SelfFriendship);
    }

    let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
        .bind(to_user)
        .fetch_one(pool)
        .await?;
    if !exists {
        return Err(FriendError::UserNotFound(to_user));
    }

    let already_friends: bool =
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM friendships WHERE user_id = $1 AND friend_id = $2)")
            .bind(from_user)
            .bind(to_user)
            .fetch_one(pool)
            .await?;
    if already_friends {
        return Err(FriendError::AlreadyFriends);
    }

    let id = Uuid::new_v4();
    let result = sqlx::query(
        "INSERT INTO friend_requests (id, from_user, to_user)
         VALUES ($1, $2, $3)
         ON CONFLICT (from_user, to_user) DO NOTHING",
    )
    .bind(id)
    .bind(from_user)
    .bind(to_user)
    .execute(pool)
    .await?;
    if result.rows_affected() == 0 {
        return Err(FriendError::AlreadyRequested);
    }

    Ok(id)
}

/// Accept a request addressed to `user_id`, creating the friendship.
pub async fn accept_request(pool: &PgPool, request_id: Uuid, user_id: Uuid) -> Result<(), FriendError> {
    let mut tx = pool.begin().await?;

    let row: Option<(Uuid, Uuid)> =
        sqlx::query_as("DELETE FROM friend_requests WHERE id = $1 RETURNING from_user, to_user")
            .bind(request_id)
            .fetch_optional(&mut *tx)
            .await?;
    let (from_user, to_user) = row.ok_or(FriendError::RequestNotFound(request_id))?;
    if to_user != user_id {
        // Roll back the delete; the request was not ours to consume.
        tx.rollback().await?;
        return Err(FriendError::Forbidden);
    }

    sqlx::query(
        "INSERT INTO friendships (user_id, friend_id)
         VALUES ($1, $2), ($2, $1)
         ON CONFLICT DO NOTHING",
    )
    .bind(from_user)
    .bind(to_user)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(())
}

/// Reject a request addressed to `user_id`.
pub async fn reject_request(pool: &PgPool, request_id: Uuid, user_id: Uuid) -> Result<(), FriendError> {
    let row: Option<(Uuid,)> = sqlx::query_as("SELECT to_user FROM friend_requests WHERE id = $1")
        .bind(request_id)
        .fetch_optional(pool)
        .await?;
    let (to_user,) = row.ok_or(FriendError::RequestNotFound(request_id))?;
    if to_user != user_id {
        return Err(FriendError::Forbidden);
    }

    sqlx::query("DELETE FROM friend_requests WHERE id = $1")
        .bind(request_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Remove a friendship in both directions.
pub async fn remove_friend(pool: &PgPool, user_id: Uuid, other_user: Uuid) -> Result<(), FriendError> {
    let result = sqlx::query(
        "DELETE FROM friendships
         WHERE (user_id = $1 AND friend_id = $2) OR (user_id = $2 AND friend_id = $1)",
    )
    .bind(user_id)
    .bind(other_user)
    .execute(pool)
    .await?;
    if result.rows_affected() == 0 {
        return Err(FriendError::NotFriends);
    }
    Ok(())
}

/// The user's friends, ordered by username.
pub async fn list_friends(pool: &PgPool, user_id: Uuid) -> Result<Vec<shared::User>, FriendError> {
    let rows = sqlx::query(
        "SELECT u.id, u.username, u.first_name, u.last_name, u.avatar_url
         FROM friendships f
         JOIN users u ON u.id = f.friend_id
         WHERE f.user_id = $1
         ORDER BY u.username ASC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(|r| super::user_from_row(r, "")).collect())
}

/// Pending requests addressed to the user, newest first.
pub async fn list_requests(pool: &PgPool, user_id: Uuid) -> Result<Vec<FriendRequest>, FriendError> {
    let rows = sqlx::query(
        r"SELECT r.id,
                 (EXTRACT(EPOCH FROM r.created_at) * 1000)::BIGINT AS ts,
                 u.id AS from_id, u.username AS from_username,
                 u.first_name AS from_first_name, u.last_name AS from_last_name,
                 u.avatar_url AS from_avatar_url
          FROM friend_requests r
          JOIN users u ON u.id = r.from_user
          WHERE r.to_user = $1
          ORDER BY r.created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| FriendRequest {
            id: row.get("id"),
            from_user: super::user_from_row(row, "from_"),
            ts: row.get("ts"),
        })
        .collect())
}
