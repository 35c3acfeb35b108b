//! Comment routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::comment::{self, CommentError};
use crate::state::AppState;

pub(crate) fn comment_error_to_status(err: &CommentError) -> StatusCode {
    match err {
        CommentError::AnswerNotFound(_) => StatusCode::NOT_FOUND,
        CommentError::EmptyText => StatusCode::BAD_REQUEST,
        CommentError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /api/answer/:id/comments` — comments under an answer, newest first.
pub async fn list_comments(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(answer_id): Path<Uuid>,
) -> Result<Json<Vec<shared::Comment>>, StatusCode> {
    let comments = comment::list_comments(&state.pool, answer_id)
        .await
        .map_err(|e| comment_error_to_status(&e))?;
    Ok(Json(comments))
}

/// `POST /api/answer/:id/comments` — create a comment as the caller.
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(answer_id): Path<Uuid>,
    Json(body): Json<shared::CreateCommentRequest>,
) -> Result<(StatusCode, Json<shared::Comment>), StatusCode> {
    let created = comment::create_comment(&state.pool, answer_id, auth.user.id, &body.comment_text)
        .await
        .map_err(|e| comment_error_to_status(&e))?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_error_maps_missing_answer_to_404() {
        let err = CommentError::AnswerNotFound(Uuid::nil());
        assert_eq!(comment_error_to_status(&err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn comment_error_maps_empty_text_to_400() {
        assert_eq!(comment_error_to_status(&CommentError::EmptyText), StatusCode::BAD_REQUEST);
    }
}
