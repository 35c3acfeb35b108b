//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API under `/api` and serves the built client
//! bundle as static files at `/`, so the WASM frontend can use relative URLs
//! against its own origin.

pub mod answers;
pub mod auth;
pub mod comments;
pub mod friends;
pub mod questions;
pub mod users;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{delete, get, patch, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/signin", post(auth::signin))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/answers", get(answers::wall).post(answers::create_answer))
        .route("/api/answer/{id}/like", patch(answers::patch_like))
        .route("/api/answer/{id}/dislike", patch(answers::patch_dislike))
        .route(
            "/api/answer/{id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route("/api/questions", get(questions::unanswered).post(questions::create_question))
        .route("/api/questions/multiple", post(questions::create_questions))
        .route("/api/questions/{id}", delete(questions::delete_question))
        .route("/api/friends", get(friends::list_friends))
        .route("/api/friends/requests", get(friends::list_requests))
        .route("/api/friendship/request/{user_id}", post(friends::request_friendship))
        .route("/api/friendship/accept/{request_id}", post(friends::accept_request))
        .route("/api/friendship/reject/{request_id}", post(friends::reject_request))
        .route("/api/friendship/{user_id}", delete(friends::remove_friend))
        .route("/api/users/search", get(users::search))
        .route("/api/users/{username}/info", get(users::info))
        .route("/api/users/{username}/stats", get(users::stats))
        .route("/api/users/{username}/answers", get(answers::user_answers))
        .route("/api/account/settings", patch(users::update_settings))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Resolve the directory holding the built client bundle.
fn web_dir() -> PathBuf {
    std::env::var("WEB_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../client/dist"))
}

/// Full application: API routes plus the static client at `/`.
pub fn app(state: AppState) -> Router {
    let web_service = ServeDir::new(web_dir()).append_index_html_on_directories(true);

    api_routes(state)
        .fallback_service(web_service)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
