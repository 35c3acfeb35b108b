//! Comment service — listing and creating comments under answers.

use sqlx::{PgPool, Row};
use uuid::Uuid;

use shared::Comment;

#[derive(Debug, thiserror::Error)]
pub enum CommentError {
    #[error("answer not found: {0}")]
    AnswerNotFound(Uuid),
    #[error("comment text is empty")]
    EmptyText,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Comments under an answer, newest first.
pub async fn list_comments(pool: &PgPool, answer_id: Uuid) -> Result<Vec<Comment>, CommentError> {
    let rows = sqlx::query(
        r"SELECT c.id, c.comment_text, c.answer_id,
                 (EXTRACT(EPOCH FROM c.created_at) * 1000)::BIGINT AS ts,
                 u.id AS user_id, u.username AS user_username,
                 u.first_name AS user_first_name, u.last_name AS user_last_name,
                 u.avatar_url AS user_avatar_url
          FROM comments c
          JOIN users u ON u.id = c.commented_user
          WHERE c.answer_id = $1
          ORDER BY c.created_at DESC",
    )
    .bind(answer_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| Comment {
            id: row.get("id"),
            comment_text: row.get("comment_text"),
            commented_user: super::user_from_row(row, "user_"),
            answer_id: row.get("answer_id"),
            ts: row.get("ts"),
        })
        .collect())
}

/// Create a comment. 404s for unknown answers before inserting.
pub async fn create_comment(
    pool: &PgPool,
    answer_id: Uuid,
    user_id: Uuid,
    comment_text: &str,
) -> Result<Comment, CommentError> {
    let text = comment_text.trim();
    if text.is_empty() {
        return Err(CommentError::EmptyText);
    }

    let id = Uuid::new_v4();
    let result = sqlx::query(
        "INSERT INTO comments (id, answer_id, commented_user, comment_text)
         SELECT $1, $2, $3, $4 WHERE EXISTS (SELECT 1 FROM answers WHERE id = $2)",
    )
    .bind(id)
    .bind(answer_id)
    .bind(user_id)
    .bind(text)
    .execute(pool)
    .await?;
    if result.rows_affected() == 0 {
        return Err(CommentError::AnswerNotFound(answer_id));
    }

    let row = sqlx::query(
        r"SELECT c.id, c.comment_text, c.answer_id,
                 (EXTRACT(EPOCH FROM c.created_at) * 1000)::BIGINT AS ts,
                 u.id AS user_id, u.username AS user_username,
                 u.first_name AS user_first_name, u.last_name AS user_last_name,
                 u.avatar_url AS user_avatar_url
          FROM comments c
          JOIN users u ON u.id = c.commented_user
          WHERE c.id = $1",
    )
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(Comment {
        id: row.get("id"),
        comment_text: row.get("comment_text"),
        commented_user: super::user_from_row(&row, "user_"),
        answer_id: row.get("answer_id"),
        ts: row.get("ts"),
    })
}
