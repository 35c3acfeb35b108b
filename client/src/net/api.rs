//! REST API helpers for communicating with the server.
//!
//! Client-side (csr): real HTTP calls via `gloo-net` against relative URLs,
//! so whatever origin serves the bundle also serves the API.
//! Native builds: stubs returning `None`/error, since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch failures
//! degrade UI behavior without crashing the app.

#![allow(clippy::unused_async)]

use shared::{Answer, Comment, Page, Question, SessionResponse, User};

#[cfg(feature = "csr")]
fn auth_header(token: &str) -> String {
    format!("Token {token}")
}

// =============================================================================
// AUTH
// =============================================================================

/// Fetch the user owning `token` from `/api/auth/me`.
/// Returns `None` if the token is stale or on native builds.
pub async fn fetch_me(token: &str) -> Option<User> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .header("Authorization", &auth_header(token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        None
    }
}

/// Sign in via `POST /api/auth/signin`.
///
/// # Errors
///
/// Returns a display-ready message when the request fails or the
/// credentials are rejected.
pub async fn signin(username: &str, password: &str) -> Result<SessionResponse, String> {
    #[cfg(feature = "csr")]
    {
        let body = shared::SigninRequest { username: username.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post("/api/auth/signin")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        match resp.status() {
            200 => resp.json::<SessionResponse>().await.map_err(|e| e.to_string()),
            401 => Err("Wrong username or password.".to_owned()),
            status => Err(format!("sign-in failed: {status}")),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, password);
        Err("not available off-browser".to_owned())
    }
}

/// Create an account via `POST /api/auth/signup`.
///
/// # Errors
///
/// Returns a display-ready message when the request fails or is rejected.
pub async fn signup(body: &shared::SignupRequest) -> Result<SessionResponse, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/signup")
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        match resp.status() {
            201 => resp.json::<SessionResponse>().await.map_err(|e| e.to_string()),
            409 => Err("That username is taken.".to_owned()),
            400 => Err("Invalid username or password (8 characters minimum).".to_owned()),
            status => Err(format!("sign-up failed: {status}")),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = body;
        Err("not available off-browser".to_owned())
    }
}

/// Invalidate the session via `POST /api/auth/logout`.
pub async fn logout(token: &str) {
    #[cfg(feature = "csr")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .header("Authorization", &auth_header(token))
            .send()
            .await;
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
    }
}

// =============================================================================
// WALL & QUESTIONS
// =============================================================================

/// Fetch a page of the wall feed from `/api/answers`.
pub async fn fetch_wall(token: &str, cursor: Option<i64>) -> Option<Page<Answer>> {
    #[cfg(feature = "csr")]
    {
        let url = match cursor {
            Some(cursor) => format!("/api/answers?cursor={cursor}"),
            None => "/api/answers".to_owned(),
        };
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &auth_header(token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Page<Answer>>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, cursor);
        None
    }
}

/// Fetch the caller's unanswered questions from `/api/questions`.
pub async fn fetch_questions(token: &str) -> Option<Vec<Question>> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/api/questions")
            .header("Authorization", &auth_header(token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Question>>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        None
    }
}

/// Answer a question via `POST /api/answers`.
pub async fn create_answer(token: &str, question_id: uuid::Uuid, answer_text: &str) -> Option<Answer> {
    #[cfg(feature = "csr")]
    {
        let body = shared::CreateAnswerRequest { question_id, answer_text: answer_text.to_owned() };
        let resp = gloo_net::http::Request::post("/api/answers")
            .header("Authorization", &auth_header(token))
            .json(&body)
            .ok()?
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Answer>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, question_id, answer_text);
        None
    }
}

// =============================================================================
// REACTIONS
// =============================================================================

/// Send a new like total via `PATCH /api/answer/{id}/like`.
///
/// # Errors
///
/// Returns a message when the request fails; callers log it and keep their
/// optimistic local state.
pub async fn patch_likes(token: &str, answer_id: uuid::Uuid, likes: i64) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::patch(&format!("/api/answer/{answer_id}/like"))
            .header("Authorization", &auth_header(token))
            .json(&shared::LikePatch { likes })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("like update failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, answer_id, likes);
        Err("not available off-browser".to_owned())
    }
}

/// Send a new dislike total via `PATCH /api/answer/{id}/dislike`.
///
/// # Errors
///
/// Returns a message when the request fails; callers log it and keep their
/// optimistic local state.
pub async fn patch_dislikes(token: &str, answer_id: uuid::Uuid, dislikes: i64) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::patch(&format!("/api/answer/{answer_id}/dislike"))
            .header("Authorization", &auth_header(token))
            .json(&shared::DislikePatch { dislikes })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("dislike update failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, answer_id, dislikes);
        Err("not available off-browser".to_owned())
    }
}

// =============================================================================
// COMMENTS
// =============================================================================

/// Fetch comments under an answer.
pub async fn fetch_comments(token: &str, answer_id: uuid::Uuid) -> Option<Vec<Comment>> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&format!("/api/answer/{answer_id}/comments"))
            .header("Authorization", &auth_header(token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Comment>>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, answer_id);
        None
    }
}

/// Create a comment under an answer.
pub async fn create_comment(token: &str, answer_id: uuid::Uuid, comment_text: &str) -> Option<Comment> {
    #[cfg(feature = "csr")]
    {
        let body = shared::CreateCommentRequest { comment_text: comment_text.to_owned() };
        let resp = gloo_net::http::Request::post(&format!("/api/answer/{answer_id}/comments"))
            .header("Authorization", &auth_header(token))
            .json(&body)
            .ok()?
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Comment>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, answer_id, comment_text);
        None
    }
}
