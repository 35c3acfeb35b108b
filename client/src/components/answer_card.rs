//! Answer card — question header, answer text, reactions, comments.
//!
//! The like/dislike buttons drive the [`ReactionState`] machine and send one
//! PATCH per changed counter. Updates are optimistic: a failed request is
//! logged and the local state is kept, so local and remote counts can
//! diverge until the next full fetch.

use leptos::prelude::*;

use crate::components::user_info::UserInfo;
use crate::state::auth::AuthState;
use crate::state::reaction::ReactionState;

#[cfg(feature = "csr")]
use crate::state::reaction::CounterUpdate;

#[cfg(feature = "csr")]
fn send_counter_updates(token: String, answer_id: uuid::Uuid, update: CounterUpdate) {
    if let Some(likes) = update.likes {
        let token = token.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::patch_likes(&token, answer_id, likes).await {
                log::warn!("{e}");
            }
        });
    }
    if let Some(dislikes) = update.dislikes {
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::patch_dislikes(&token, answer_id, dislikes).await {
                log::warn!("{e}");
            }
        });
    }
}

/// A single answer on the wall.
#[component]
pub fn AnswerCard(answer: shared::Answer) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let answer_id = answer.id;
    let reaction = RwSignal::new(ReactionState::from_totals(answer.likes, answer.dislikes));

    let show_comments = RwSignal::new(false);
    let comments = RwSignal::new(None::<Vec<shared::Comment>>);
    let comment_text = RwSignal::new(String::new());

    let on_like = move |_| {
        let mut state = reaction.get();
        let update = state.toggle_like();
        reaction.set(state);

        #[cfg(feature = "csr")]
        if let Some(token) = auth.get_untracked().token {
            send_counter_updates(token, answer_id, update);
        }
        #[cfg(not(feature = "csr"))]
        let _ = (update, auth);
    };

    let on_dislike = move |_| {
        let mut state = reaction.get();
        let update = state.toggle_dislike();
        reaction.set(state);

        #[cfg(feature = "csr")]
        if let Some(token) = auth.get_untracked().token {
            send_counter_updates(token, answer_id, update);
        }
        #[cfg(not(feature = "csr"))]
        let _ = (update, auth);
    };

    let on_toggle_comments = move |_| {
        let show = !show_comments.get();
        show_comments.set(show);

        #[cfg(feature = "csr")]
        if show && comments.get_untracked().is_none() {
            if let Some(token) = auth.get_untracked().token {
                leptos::task::spawn_local(async move {
                    let fetched = crate::net::api::fetch_comments(&token, answer_id).await;
                    comments.set(Some(fetched.unwrap_or_default()));
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = auth;
    };

    let on_send_comment = move |_| {
        let text = comment_text.get();
        if text.trim().is_empty() {
            return;
        }

        #[cfg(feature = "csr")]
        if let Some(token) = auth.get_untracked().token {
            let text = text.trim().to_owned();
            comment_text.set(String::new());
            leptos::task::spawn_local(async move {
                if let Some(created) = crate::net::api::create_comment(&token, answer_id, &text).await {
                    comments.update(|list| {
                        list.get_or_insert_with(Vec::new).insert(0, created);
                    });
                    show_comments.set(true);
                } else {
                    log::warn!("comment create failed");
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = auth;
    };

    let asker_line = answer.asker.as_ref().map(|asker| format!("@{}", asker.username));

    view! {
        <article class="answer-card">
            <header class="answer-card__header">
                <h2 class="answer-card__question">{answer.question_text.clone()}</h2>
                {asker_line.map(|line| view! { <span class="answer-card__asker">{line}</span> })}
            </header>

            <div class="answer-card__body">
                <UserInfo user=answer.asked_user.clone()/>
                <p class="answer-card__text">{answer.answer_text.clone()}</p>
            </div>

            <footer class="answer-card__actions">
                <input
                    class="answer-card__comment-input"
                    type="text"
                    placeholder="Write a comment!"
                    prop:value=move || comment_text.get()
                    on:input=move |ev| comment_text.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            on_send_comment(());
                        }
                    }
                />
                <button class="btn" title="Send" on:click=move |_| on_send_comment(())>
                    "Send"
                </button>
                <button class="btn" title="Comments" on:click=on_toggle_comments>
                    "Comments"
                </button>

                <button
                    class=move || if reaction.get().is_liked { "btn btn--active" } else { "btn" }
                    title="Like"
                    on:click=on_like
                >
                    "Like"
                </button>
                <span class="answer-card__count">{move || reaction.get().likes}</span>

                <button
                    class=move || if reaction.get().is_disliked { "btn btn--active" } else { "btn" }
                    title="Dislike"
                    on:click=on_dislike
                >
                    "Dislike"
                </button>
                <span class="answer-card__count">{move || reaction.get().dislikes}</span>
            </footer>

            <Show when=move || show_comments.get()>
                <ul class="answer-card__comments">
                    {move || match comments.get() {
                        None => view! { <li class="comment">"Loading comments..."</li> }.into_any(),
                        Some(list) => list
                            .into_iter()
                            .map(|c| {
                                let by = format!("@{}", c.commented_user.username);
                                view! {
                                    <li class="comment">
                                        <span class="comment__author">{by}</span>
                                        <span class="comment__text">{c.comment_text}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any(),
                    }}
                </ul>
            </Show>
        </article>
    }
}
