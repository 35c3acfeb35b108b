//! Question service — asking, listing unanswered, deletion.

#[cfg(test)]
#[path = "question_test.rs"]
mod question_test;

use sqlx::{PgPool, Row};
use sqlx::postgres::PgRow;
use uuid::Uuid;

use shared::Question;

#[derive(Debug, thiserror::Error)]
pub enum QuestionError {
    #[error("question not found: {0}")]
    NotFound(Uuid),
    #[error("asked user not found: {0}")]
    AskedUserNotFound(Uuid),
    #[error("question is not addressed to this user")]
    Forbidden,
    #[error("question text is empty")]
    EmptyText,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

const QUESTION_SELECT: &str = r"
    SELECT q.id, q.question_text,
           (EXTRACT(EPOCH FROM q.created_at) * 1000)::BIGINT AS ts,
           au.id AS asked_id, au.username AS asked_username,
           au.first_name AS asked_first_name, au.last_name AS asked_last_name,
           au.avatar_url AS asked_avatar_url,
           ak.id AS asker_id, ak.username AS asker_username,
           ak.first_name AS asker_first_name, ak.last_name AS asker_last_name,
           ak.avatar_url AS asker_avatar_url
    FROM questions q
    JOIN users au ON au.id = q.asked_user
    LEFT JOIN users ak ON ak.id = q.asker";

fn question_from_row(row: &PgRow) -> Question {
    Question {
        id: row.get("id"),
        question_text: row.get("question_text"),
        asked_user: super::user_from_row(row, "asked_"),
        asker: super::opt_user_from_row(row, "asker_"),
        ts: row.get("ts"),
    }
}

/// Ask one user a question. `asker` is `None` for anonymous questions.
pub async fn create_question(
    pool: &PgPool,
    asked_user: Uuid,
    asker: Option<Uuid>,
    question_text: &str,
) -> Result<Question, QuestionError> {
    let text = question_text.trim();
    if text.is_empty() {
        return Err(QuestionError::EmptyText);
    }

    let id = Uuid::new_v4();
    let result = sqlx::query(
        "INSERT INTO questions (id, question_text, asked_user, asker)
         SELECT $1, $2, $3, $4 WHERE EXISTS (SELECT 1 FROM users WHERE id = $3)",
    )
    .bind(id)
    .bind(text)
    .bind(asked_user)
    .bind(asker)
    .execute(pool)
    .await?;
    if result.rows_affected() == 0 {
        return Err(QuestionError::AskedUserNotFound(asked_user));
    }

    fetch_question(pool, id).await
}

/// Ask the same question to several users. Unknown recipients are skipped;
/// the created questions are returned in recipient order. All inserts share
/// one transaction, so an error mid-batch creates nothing.
pub async fn create_questions(
    pool: &PgPool,
    asked_users: &[Uuid],
    asker: Option<Uuid>,
    question_text: &str,
) -> Result<Vec<Question>, QuestionError> {
    let text = question_text.trim();
    if text.is_empty() {
        return Err(QuestionError::EmptyText);
    }

    let mut tx = pool.begin().await?;
    let mut created_ids = Vec::with_capacity(asked_users.len());
    for &asked_user in asked_users {
        let id = Uuid::new_v4();
        let result = sqlx::query(
            "INSERT INTO questions (id, question_text, asked_user, asker)
             SELECT $1, $2, $3, $4 WHERE EXISTS (SELECT 1 FROM users WHERE id = $3)",
        )
        .bind(id)
        .bind(text)
        .bind(asked_user)
        .bind(asker)
        .execute(&mut *tx)
        .await?;
        if result.rows_affected() > 0 {
            created_ids.push(id);
        }
    }
    tx.commit().await?;

    let mut created = Vec::with_capacity(created_ids.len());
    for id in created_ids {
        created.push(fetch_question(pool, id).await?);
    }
    Ok(created)
}

/// Fetch one question with both user sides embedded.
pub async fn fetch_question(pool: &PgPool, question_id: Uuid) -> Result<Question, QuestionError> {
    let sql = format!("{QUESTION_SELECT} WHERE q.id = $1");
    let row = sqlx::query(&sql)
        .bind(question_id)
        .fetch_optional(pool)
        .await?
        .ok_or(QuestionError::NotFound(question_id))?;
    Ok(question_from_row(&row))
}

/// Unanswered questions directed at the user, newest first.
pub async fn unanswered_for(pool: &PgPool, user_id: Uuid) -> Result<Vec<Question>, QuestionError> {
    let sql = format!(
        "{QUESTION_SELECT}
         WHERE q.asked_user = $1
           AND NOT EXISTS (SELECT 1 FROM answers a WHERE a.question_id = q.id)
         ORDER BY q.created_at DESC"
    );
    let rows = sqlx::query(&sql).bind(user_id).fetch_all(pool).await?;
    Ok(rows.iter().map(question_from_row).collect())
}

/// Delete a question. Only the user it was asked of may delete it.
pub async fn delete_question(pool: &PgPool, question_id: Uuid, user_id: Uuid) -> Result<(), QuestionError> {
    let asked_user: Uuid = sqlx::query_scalar("SELECT asked_user FROM questions WHERE id = $1")
        .bind(question_id)
        .fetch_optional(pool)
        .await?
        .ok_or(QuestionError::NotFound(question_id))?;
    if asked_user != user_id {
        return Err(QuestionError::Forbidden);
    }

    sqlx::query("DELETE FROM questions WHERE id = $1")
        .bind(question_id)
        .execute(pool)
        .await?;
    Ok(())
}
