//! Wall page — paginated feed of the user's friends' answers.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::answer_card::AnswerCard;
use crate::components::nav_bar::NavBar;
use crate::state::auth::AuthState;

/// Wall page — cursor-paginated answer feed, newest first.
/// Redirects to `/signin` if the user is not authenticated.
#[component]
pub fn WallPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Redirect to sign-in if not authenticated.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/signin", NavigateOptions::default());
        }
    });

    let answers = RwSignal::new(Vec::<shared::Answer>::new());
    let next_cursor = RwSignal::new(None::<i64>);
    let loaded = RwSignal::new(false);
    let loading_more = RwSignal::new(false);

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
                if let Some(page) = crate::net::api::fetch_wall(&token, None).await {
                    answers.set(page.items);
                    next_cursor.set(page.next_cursor);
                }
            });
        }
    });

    let on_load_more = move |_| {
        let Some(cursor) = next_cursor.get_untracked() else {
            return;
        };
        if loading_more.get_untracked() {
            return;
        }

        #[cfg(feature = "csr")]
        if let Some(token) = auth.get_untracked().token {
            loading_more.set(true);
            leptos::task::spawn_local(async move {
                if let Some(page) = crate::net::api::fetch_wall(&token, Some(cursor)).await {
                    answers.update(|list| list.extend(page.items));
                    next_cursor.set(page.next_cursor);
                }
                loading_more.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (cursor, auth);
    };

    view! {
        <div class="wall-page">
            <NavBar/>

            <main class="wall-page__feed">
                {move || {
                    let list = answers.get();
                    if list.is_empty() {
                        view! { <p class="wall-page__empty">"No answers here yet."</p> }.into_any()
                    } else {
                        list.into_iter()
                            .map(|a| view! { <AnswerCard answer=a/> })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}

                <Show when=move || next_cursor.get().is_some()>
                    <button
                        class="btn wall-page__more"
                        disabled=move || loading_more.get()
                        on:click=on_load_more
                    >
                        "Load more"
                    </button>
                </Show>
            </main>
        </div>
    }
}
