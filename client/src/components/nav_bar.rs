//! Top navigation bar with section links and sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Navigation bar shown on authenticated pages.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        #[cfg(feature = "csr")]
        if let Some(token) = auth.get_untracked().token {
            leptos::task::spawn_local(async move {
                crate::net::api::logout(&token).await;
            });
        }

        crate::util::token_store::clear_token();
        auth.update(|a| {
            a.token = None;
            a.user = None;
        });
        navigate("/signin", NavigateOptions::default());
    };

    let handle = move || {
        auth.get()
            .user
            .map(|u| format!("@{}", u.username))
            .unwrap_or_default()
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"askwall"</span>
            <a class="nav-bar__link" href="/wall">
                "Wall"
            </a>
            <a class="nav-bar__link" href="/questions">
                "Questions"
            </a>
            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__user">{handle}</span>
            <button class="btn" title="Sign out" on:click=on_sign_out>
                "Sign out"
            </button>
        </nav>
    }
}
