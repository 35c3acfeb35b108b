//! Answer routes — wall feed, answering, reaction PATCHes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::answer::{self, AnswerError, PageParams};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PageQuery {
    pub cursor: Option<String>,
    pub page_size: Option<String>,
}

impl PageQuery {
    fn params(&self) -> PageParams {
        PageParams::from_query(self.cursor.as_deref(), self.page_size.as_deref())
    }
}

pub(crate) fn answer_error_to_status(err: &AnswerError) -> StatusCode {
    match err {
        AnswerError::NotFound(_) | AnswerError::QuestionNotFound(_) | AnswerError::UserNotFound => {
            StatusCode::NOT_FOUND
        }
        AnswerError::Forbidden => StatusCode::FORBIDDEN,
        AnswerError::AlreadyAnswered => StatusCode::CONFLICT,
        AnswerError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /api/answers` — the caller's wall feed, cursor-paginated.
pub async fn wall(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<PageQuery>,
) -> Result<Json<shared::Page<shared::Answer>>, StatusCode> {
    let page = answer::wall_feed(&state.pool, auth.user.id, query.params())
        .await
        .map_err(|e| answer_error_to_status(&e))?;
    Ok(Json(page))
}

/// `GET /api/users/:username/answers` — one user's answers.
pub async fn user_answers(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(username): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<shared::Page<shared::Answer>>, StatusCode> {
    let page = answer::answers_for_username(&state.pool, &username, query.params())
        .await
        .map_err(|e| answer_error_to_status(&e))?;
    Ok(Json(page))
}

/// `POST /api/answers` — answer one of the caller's questions.
pub async fn create_answer(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<shared::CreateAnswerRequest>,
) -> Result<(StatusCode, Json<shared::Answer>), StatusCode> {
    let created = answer::create_answer(&state.pool, auth.user.id, body.question_id, &body.answer_text)
        .await
        .map_err(|e| answer_error_to_status(&e))?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PATCH /api/answer/:id/like` — store the new like total.
pub async fn patch_like(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(answer_id): Path<Uuid>,
    Json(body): Json<shared::LikePatch>,
) -> Result<Json<shared::LikePatch>, StatusCode> {
    let likes = answer::set_likes(&state.pool, answer_id, body.likes)
        .await
        .map_err(|e| answer_error_to_status(&e))?;
    Ok(Json(shared::LikePatch { likes }))
}

/// `PATCH /api/answer/:id/dislike` — store the new dislike total.
pub async fn patch_dislike(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(answer_id): Path<Uuid>,
    Json(body): Json<shared::DislikePatch>,
) -> Result<Json<shared::DislikePatch>, StatusCode> {
    let dislikes = answer::set_dislikes(&state.pool, answer_id, body.dislikes)
        .await
        .map_err(|e| answer_error_to_status(&e))?;
    Ok(Json(shared::DislikePatch { dislikes }))
}

#[cfg(test)]
#[path = "answers_test.rs"]
mod tests;
