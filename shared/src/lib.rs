//! Shared wire types for the askwall API.
//!
//! This crate owns the JSON representation used by both `server` and
//! `client`. Responses embed related users directly (an answer carries its
//! question text plus asked-user and asker) so the client renders a card
//! from a single fetch. Timestamps on the wire are milliseconds since the
//! Unix epoch.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// USERS
// =============================================================================

/// Public user summary embedded in answers, comments and questions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique handle, shown as `@username`.
    pub username: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Avatar image URL, if set.
    pub avatar_url: Option<String>,
}

/// Full profile returned by account-info endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(flatten)]
    pub user: User,
    /// Free-form bio text.
    pub self_description: Option<String>,
    /// Date of birth as `YYYY-MM-DD`.
    pub date_of_birth: Option<String>,
}

/// Aggregate counters shown on a profile page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub answers_count: i64,
    pub friends_count: i64,
    pub likes_count: i64,
}

// =============================================================================
// QUESTIONS / ANSWERS / COMMENTS
// =============================================================================

/// A question directed at a user. `asker` is `None` for anonymous questions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub question_text: String,
    pub asked_user: User,
    pub asker: Option<User>,
    /// Milliseconds since the Unix epoch.
    pub ts: i64,
}

/// An answer with its question context and independent reaction counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: Uuid,
    pub answer_text: String,
    pub likes: i64,
    pub dislikes: i64,
    pub question_id: Uuid,
    pub question_text: String,
    pub asked_user: User,
    pub asker: Option<User>,
    /// Milliseconds since the Unix epoch.
    pub ts: i64,
}

/// A comment under an answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub comment_text: String,
    pub commented_user: User,
    pub answer_id: Uuid,
    /// Milliseconds since the Unix epoch.
    pub ts: i64,
}

/// A pending friendship request addressed to the current user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendRequest {
    pub id: Uuid,
    pub from_user: User,
    /// Milliseconds since the Unix epoch.
    pub ts: i64,
}

// =============================================================================
// PAGINATION
// =============================================================================

/// One page of a cursor-paginated listing, newest first.
///
/// `next_cursor` is the `ts` of the last item; pass it back as `?cursor=` to
/// fetch the next page. `None` means the listing is exhausted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<i64>,
}

// =============================================================================
// REQUEST / RESPONSE BODIES
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SigninRequest {
    pub username: String,
    pub password: String,
}

/// Returned by signup and signin; the token goes into the
/// `Authorization: Token <token>` header on subsequent requests.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: User,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateQuestionRequest {
    pub asked_user: Uuid,
    pub question_text: String,
    #[serde(default)]
    pub is_anon: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateQuestionsRequest {
    pub asked_users: Vec<Uuid>,
    pub question_text: String,
    #[serde(default)]
    pub is_anon: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateAnswerRequest {
    pub question_id: Uuid,
    pub answer_text: String,
}

/// Body of `PATCH /api/answer/{id}/like` — the new absolute total.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct LikePatch {
    pub likes: i64,
}

/// Body of `PATCH /api/answer/{id}/dislike` — the new absolute total.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DislikePatch {
    pub dislikes: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub comment_text: String,
}

/// Partial profile update; absent fields are left unchanged.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AccountSettingsUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub self_description: Option<String>,
    /// `YYYY-MM-DD`; rejected if in the future.
    pub date_of_birth: Option<String>,
}
