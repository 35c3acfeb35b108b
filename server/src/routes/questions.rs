//! Question routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::question::{self, QuestionError};
use crate::state::AppState;

pub(crate) fn question_error_to_status(err: &QuestionError) -> StatusCode {
    match err {
        QuestionError::NotFound(_) | QuestionError::AskedUserNotFound(_) => StatusCode::NOT_FOUND,
        QuestionError::Forbidden => StatusCode::FORBIDDEN,
        QuestionError::EmptyText => StatusCode::BAD_REQUEST,
        QuestionError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /api/questions` — the caller's unanswered questions.
pub async fn unanswered(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<shared::Question>>, StatusCode> {
    let questions = question::unanswered_for(&state.pool, auth.user.id)
        .await
        .map_err(|e| question_error_to_status(&e))?;
    Ok(Json(questions))
}

/// `POST /api/questions` — ask one user; anonymous when `is_anon`.
pub async fn create_question(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<shared::CreateQuestionRequest>,
) -> Result<(StatusCode, Json<shared::Question>), StatusCode> {
    let asker = if body.is_anon { None } else { Some(auth.user.id) };
    let created = question::create_question(&state.pool, body.asked_user, asker, &body.question_text)
        .await
        .map_err(|e| question_error_to_status(&e))?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `POST /api/questions/multiple` — ask several users the same question.
pub async fn create_questions(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<shared::CreateQuestionsRequest>,
) -> Result<(StatusCode, Json<Vec<shared::Question>>), StatusCode> {
    let asker = if body.is_anon { None } else { Some(auth.user.id) };
    let created = question::create_questions(&state.pool, &body.asked_users, asker, &body.question_text)
        .await
        .map_err(|e| question_error_to_status(&e))?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `DELETE /api/questions/:id` — the asked user deletes a question.
pub async fn delete_question(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(question_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    question::delete_question(&state.pool, question_id, auth.user.id)
        .await
        .map_err(|e| question_error_to_status(&e))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_error_maps_not_found() {
        let err = QuestionError::NotFound(Uuid::nil());
        assert_eq!(question_error_to_status(&err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn question_error_maps_forbidden() {
        assert_eq!(question_error_to_status(&QuestionError::Forbidden), StatusCode::FORBIDDEN);
    }

    #[test]
    fn question_error_maps_empty_text() {
        assert_eq!(question_error_to_status(&QuestionError::EmptyText), StatusCode::BAD_REQUEST);
    }
}
