//! Friendship routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::friend::{self, FriendError};
use crate::state::AppState;

pub(crate) fn friend_error_to_status(err: &FriendError) -> StatusCode {
    match err {
        FriendError::RequestNotFound(_) | FriendError::UserNotFound(_) => StatusCode::NOT_FOUND,
        FriendError::AlreadyFriends | FriendError::AlreadyRequested | FriendError::NotFriends => StatusCode::CONFLICT,
        FriendError::SelfFriendship => StatusCode::BAD_REQUEST,
        FriendError::Forbidden => StatusCode::FORBIDDEN,
        FriendError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /api/friends` — the caller's friends.
pub async fn list_friends(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Vec<shared::User>>, StatusCode> {
    let friends = friend::list_friends(&state.pool, auth.user.id)
        .await
        .map_err(|e| friend_error_to_status(&e))?;
    Ok(Json(friends))
}

/// `GET /api/friends/requests` — pending requests addressed to the caller.
pub async fn list_requests(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<shared::FriendRequest>>, StatusCode> {
    let requests = friend::list_requests(&state.pool, auth.user.id)
        .await
        .map_err(|e| friend_error_to_status(&e))?;
    Ok(Json(requests))
}

/// `POST /api/friendship/request/:user_id` — send a friendship request.
pub async fn request_friendship(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<(StatusCode, Json<serde_json::Value>), StatusCode> {
    let request_id = friend::request_friendship(&state.pool, auth.user.id, user_id)
        .await
        .map_err(|e| friend_error_to_status(&e))?;
    Ok((StatusCode::CREATED, Json(serde_json::json!({ "request_id": request_id }))))
}

/// `POST /api/friendship/accept/:request_id` — accept a pending request.
pub async fn accept_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(request_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    friend::accept_request(&state.pool, request_id, auth.user.id)
        .await
        .map_err(|e| friend_error_to_status(&e))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `POST /api/friendship/reject/:request_id` — reject a pending request.
pub async fn reject_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(request_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    friend::reject_request(&state.pool, request_id, auth.user.id)
        .await
        .map_err(|e| friend_error_to_status(&e))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `DELETE /api/friendship/:user_id` — unfriend.
pub async fn remove_friend(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    friend::remove_friend(&state.pool, auth.user.id, user_id)
        .await
        .map_err(|e| friend_error_to_status(&e))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn friend_error_maps_conflicts() {
        assert_eq!(friend_error_to_status(&FriendError::AlreadyFriends), StatusCode::CONFLICT);
        assert_eq!(friend_error_to_status(&FriendError::AlreadyRequested), StatusCode::CONFLICT);
        assert_eq!(friend_error_to_status(&FriendError::NotFriends), StatusCode::CONFLICT);
    }

    #[test]
    fn friend_error_maps_self_friendship_to_400() {
        assert_eq!(friend_error_to_status(&FriendError::SelfFriendship), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn friend_error_maps_foreign_request_to_403() {
        assert_eq!(friend_error_to_status(&FriendError::Forbidden), StatusCode::FORBIDDEN);
    }
}
