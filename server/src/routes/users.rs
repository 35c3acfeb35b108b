//! User profile routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use super::auth::{AuthUser, account_error_to_status};
use crate::services::account;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// `GET /api/users/:username/info` — public profile.
pub async fn info(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(username): Path<String>,
) -> Result<Json<shared::UserProfile>, StatusCode> {
    let profile = account::profile_by_username(&state.pool, &username)
        .await
        .map_err(|e| account_error_to_status(&e))?;
    Ok(Json(profile))
}

/// `GET /api/users/:username/stats` — aggregate counters.
pub async fn stats(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(username): Path<String>,
) -> Result<Json<shared::UserStats>, StatusCode> {
    let stats = account::stats_by_username(&state.pool, &username)
        .await
        .map_err(|e| account_error_to_status(&e))?;
    Ok(Json(stats))
}

/// `GET /api/users/search?q=` — username/name substring search.
pub async fn search(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<shared::User>>, StatusCode> {
    let users = account::search_users(&state.pool, &query.q)
        .await
        .map_err(|e| account_error_to_status(&e))?;
    Ok(Json(users))
}

/// `PATCH /api/account/settings` — partial profile update for the caller.
pub async fn update_settings(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<shared::AccountSettingsUpdate>,
) -> Result<Json<shared::UserProfile>, StatusCode> {
    let profile = account::update_settings(&state.pool, auth.user.id, &body)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "settings update rejected");
            account_error_to_status(&e)
        })?;
    Ok(Json(profile))
}
