//! Auth routes — signup, signin, logout, current user.

use axum::extract::{FromRef, State};
use axum::http::{StatusCode, header};
use axum::response::Json;

use crate::services::{account, session};
use crate::state::AppState;

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Extract the token from an `Authorization` header value.
/// Accepts the `Token <value>` scheme the client sends, plus `Bearer`.
pub(crate) fn token_from_header(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("token") && !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Authenticated user extracted from the `Authorization: Token` header.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: shared::User,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(token_from_header)
            .ok_or(StatusCode::UNAUTHORIZED)?
            .to_owned();

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, &token)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token })
    }
}

pub(crate) fn account_error_to_status(err: &account::AccountError) -> StatusCode {
    match err {
        account::AccountError::InvalidUsername
        | account::AccountError::WeakPassword
        | account::AccountError::InvalidDateOfBirth => StatusCode::BAD_REQUEST,
        account::AccountError::UsernameTaken => StatusCode::CONFLICT,
        account::AccountError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        account::AccountError::NotFound => StatusCode::NOT_FOUND,
        account::AccountError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/signup` — create user + session.
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<shared::SignupRequest>,
) -> Result<(StatusCode, Json<shared::SessionResponse>), StatusCode> {
    let user = account::signup(&state.pool, &body).await.map_err(|e| {
        tracing::warn!(error = %e, "signup rejected");
        account_error_to_status(&e)
    })?;

    let token = session::create_session(&state.pool, user.id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok((StatusCode::CREATED, Json(shared::SessionResponse { token, user })))
}

/// `POST /api/auth/signin` — verify credentials, return a fresh token.
pub async fn signin(
    State(state): State<AppState>,
    Json(body): Json<shared::SigninRequest>,
) -> Result<Json<shared::SessionResponse>, StatusCode> {
    let user = account::signin(&state.pool, &body.username, &body.password)
        .await
        .map_err(|e| account_error_to_status(&e))?;

    let token = session::create_session(&state.pool, user.id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(shared::SessionResponse { token, user }))
}

/// `POST /api/auth/logout` — delete the presented session.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> StatusCode {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::error!(error = %e, "logout failed");
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    StatusCode::NO_CONTENT
}

/// `GET /api/auth/me` — return current user.
pub async fn me(auth: AuthUser) -> Json<shared::User> {
    Json(auth.user)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
