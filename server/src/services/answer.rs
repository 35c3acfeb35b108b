//! Answer service — creation, feed queries, reaction totals.
//!
//! DESIGN
//! ======
//! The wall feed is answers to questions asked of the caller's friends,
//! newest first, paginated by a millisecond-timestamp cursor. Each answer
//! row is joined with its question and both user sides so one query yields
//! a complete card.
//!
//! Reaction endpoints store the client-computed absolute total. The value is
//! clamped at zero to keep the counters non-negative; beyond that the client
//! is trusted, which matches the original system's contract.

#[cfg(test)]
#[path = "answer_test.rs"]
mod answer_test;

use sqlx::{PgPool, Row};
use sqlx::postgres::PgRow;
use uuid::Uuid;

use shared::{Answer, Page};

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 50;

#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("answer not found: {0}")]
    NotFound(Uuid),
    #[error("question not found: {0}")]
    QuestionNotFound(Uuid),
    #[error("question was not asked to this user")]
    Forbidden,
    #[error("question already answered")]
    AlreadyAnswered,
    #[error("user not found")]
    UserNotFound,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Parsed `?cursor=<ms>&page_size=<n>` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageParams {
    /// Exclusive upper bound on item `ts`; `None` means start from newest.
    pub cursor: Option<i64>,
    pub page_size: i64,
}

impl PageParams {
    /// Parse raw query values. Unparseable values fall back to defaults;
    /// page size is clamped to `1..=MAX_PAGE_SIZE`.
    #[must_use]
    pub fn from_query(cursor: Option<&str>, page_size: Option<&str>) -> Self {
        let cursor = cursor.and_then(|v| v.parse::<i64>().ok());
        let page_size = page_size
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        Self { cursor, page_size }
    }
}

/// Build a page envelope from one-more-than-requested rows.
fn to_page(mut items: Vec<Answer>, page_size: i64) -> Page<Answer> {
    let has_more = items.len() as i64 > page_size;
    if has_more {
        items.truncate(usize::try_from(page_size).unwrap_or(items.len()));
    }
    let next_cursor = if has_more { items.last().map(|a| a.ts) } else { None };
    Page { items, next_cursor }
}

// =============================================================================
// ROW MAPPING
// =============================================================================

const ANSWER_SELECT: &str = r"
    SELECT a.id, a.answer_text, a.likes, a.dislikes,
           (EXTRACT(EPOCH FROM a.created_at) * 1000)::BIGINT AS ts,
           q.id AS question_id, q.question_text,
           au.id AS asked_id, au.username AS asked_username,
           au.first_name AS asked_first_name, au.last_name AS asked_last_name,
           au.avatar_url AS asked_avatar_url,
           ak.id AS asker_id, ak.username AS asker_username,
           ak.first_name AS asker_first_name, ak.last_name AS asker_last_name,
           ak.avatar_url AS asker_avatar_url
    FROM answers a
    JOIN questions q ON q.id = a.question_id
    JOIN users au ON au.id = q.asked_user
    LEFT JOIN users ak ON ak.id = q.asker";

fn answer_from_row(row: &PgRow) -> Answer {
    Answer {
        id: row.get("id"),
        answer_text: row.get("answer_text"),
        likes: row.get("likes"),
        dislikes: row.get("dislikes"),
        question_id: row.get("question_id"),
        question_text: row.get("question_text"),
        asked_user: super::user_from_row(row, "asked_"),
        asker: super::opt_user_from_row(row, "asker_"),
        ts: row.get("ts"),
    }
}

// =============================================================================
// CREATION
// =============================================================================

/// Answer a question directed at `user_id`.
pub async fn create_answer(
    pool: &PgPool,
    user_id: Uuid,
    question_id: Uuid,
    answer_text: &str,
) -> Result<Answer, AnswerError> {
    let asked_user: Uuid = sqlx::query_scalar("SELECT asked_user FROM questions WHERE id = $1")
        .bind(question_id)
        .fetch_optional(pool)
        .await?
        .ok_or(AnswerError::QuestionNotFound(question_id))?;
    if asked_user != user_id {
        return Err(AnswerError::Forbidden);
    }

    let id = Uuid::new_v4();
    let result = sqlx::query(
        "INSERT INTO answers (id, question_id, answer_text)
         VALUES ($1, $2, $3)
         ON CONFLICT (question_id) DO NOTHING",
    )
    .bind(id)
    .bind(question_id)
    .bind(answer_text)
    .execute(pool)
    .await?;
    if result.rows_affected() == 0 {
        return Err(AnswerError::AlreadyAnswered);
    }

    fetch_answer(pool, id).await
}

/// Fetch one answer with its full card context.
pub async fn fetch_answer(pool: &PgPool, answer_id: Uuid) -> Result<Answer, AnswerError> {
    let sql = format!("{ANSWER_SELECT} WHERE a.id = $1");
    let row = sqlx::query(&sql)
        .bind(answer_id)
        .fetch_optional(pool)
        .await?
        .ok_or(AnswerError::NotFound(answer_id))?;
    Ok(answer_from_row(&row))
}

// =============================================================================
// FEEDS
// =============================================================================

/// Wall feed: answers to questions asked of the caller's friends.
pub async fn wall_feed(pool: &PgPool, user_id: Uuid, params: PageParams) -> Result<Page<Answer>, AnswerError> {
    let sql = format!(
        "{ANSWER_SELECT}
         WHERE q.asked_user IN (SELECT friend_id FROM friendships WHERE user_id = $1)
           AND ($2::BIGINT IS NULL OR (EXTRACT(EPOCH FROM a.created_at) * 1000)::BIGINT < $2)
         ORDER BY a.created_at DESC
         LIMIT $3"
    );
    let rows = sqlx::query(&sql)
        .bind(user_id)
        .bind(params.cursor)
        .bind(params.page_size + 1)
        .fetch_all(pool)
        .await?;

    Ok(to_page(rows.iter().map(answer_from_row).collect(), params.page_size))
}

/// Answers given by one user, newest first.
pub async fn answers_for_username(
    pool: &PgPool,
    username: &str,
    params: PageParams,
) -> Result<Page<Answer>, AnswerError> {
    let user_id: Uuid = sqlx::query_scalar("SELECT id FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?
        .ok_or(AnswerError::UserNotFound)?;

    let sql = format!(
        "{ANSWER_SELECT}
         WHERE q.asked_user = $1
           AND ($2::BIGINT IS NULL OR (EXTRACT(EPOCH FROM a.created_at) * 1000)::BIGINT < $2)
         ORDER BY a.created_at DESC
         LIMIT $3"
    );
    let rows = sqlx::query(&sql)
        .bind(user_id)
        .bind(params.cursor)
        .bind(params.page_size + 1)
        .fetch_all(pool)
        .await?;

    Ok(to_page(rows.iter().map(answer_from_row).collect(), params.page_size))
}

// =============================================================================
// REACTIONS
// =============================================================================

/// Store a new like total, returning the value actually stored.
pub async fn set_likes(pool: &PgPool, answer_id: Uuid, total: i64) -> Result<i64, AnswerError> {
    let stored: Option<i64> = sqlx::query_scalar("UPDATE answers SET likes = GREATEST($2, 0) WHERE id = $1 RETURNING likes")
        .bind(answer_id)
        .bind(total)
        .fetch_optional(pool)
        .await?;
    stored.ok_or(AnswerError::NotFound(answer_id))
}

/// Store a new dislike total, returning the value actually stored.
pub async fn set_dislikes(pool: &PgPool, answer_id: Uuid, total: i64) -> Result<i64, AnswerError> {
    let stored: Option<i64> =
        sqlx::query_scalar("UPDATE answers SET dislikes = GREATEST($2, 0) WHERE id = $1 RETURNING dislikes")
            .bind(answer_id)
            .bind(total)
            .fetch_optional(pool)
            .await?;
    stored.ok_or(AnswerError::NotFound(answer_id))
}
