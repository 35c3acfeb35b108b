//! Questions page — everything asked of the user that still lacks an answer.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::components::question_card::QuestionCard;
use crate::state::auth::AuthState;

/// Questions page — lists the user's unanswered questions, newest first.
/// Redirects to `/signin` if the user is not authenticated.
#[component]
pub fn QuestionsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Redirect to sign-in if not authenticated.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/signin", NavigateOptions::default());
        }
    });

    let questions = RwSignal::new(None::<Vec<shared::Question>>);
    let loaded = RwSignal::new(false);

    // Initial fetch once a session token is ready.
    Effect::new(move || {
        let state = auth.get();
        if loaded.get_untracked() || !state.is_authenticated() {
            return;
        }
        loaded.set(true);

        #[cfg(feature = "csr")]
        if let Some(token) = state.token {
            leptos::task::spawn_local(async move {
                let fetched = crate::net::api::fetch_questions(&token).await;
                questions.set(Some(fetched.unwrap_or_default()));
            });
        }
    });

    // Answered questions disappear from the list.
    let on_answered = Callback::new(move |question_id: uuid::Uuid| {
        questions.update(|list| {
            if let Some(list) = list {
                list.retain(|q| q.id != question_id);
            }
        });
    });

    view! {
        <div class="questions-page">
            <NavBar/>

            <main class="questions-page__list">
                {move || match questions.get() {
                    None => view! { <p class="questions-page__empty">"Loading questions..."</p> }.into_any(),
                    Some(list) if list.is_empty() => {
                        view! { <p class="questions-page__empty">"No unanswered questions."</p> }.into_any()
                    }
                    Some(list) => list
                        .into_iter()
                        .map(|q| view! { <QuestionCard question=q on_answered=on_answered/> })
                        .collect::<Vec<_>>()
                        .into_any(),
                }}
            </main>
        </div>
    }
}
