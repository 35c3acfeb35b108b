//! Unanswered question card with an inline answer form.

use leptos::prelude::*;

use crate::components::user_info::UserInfo;
use crate::state::auth::AuthState;

/// A question waiting to be answered. Submitting the answer posts it and
/// notifies the parent through `on_answered` so the card can be removed.
#[component]
pub fn QuestionCard(question: shared::Question, on_answered: Callback<uuid::Uuid>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let question_id = question.id;
    let answer_text = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let on_submit = move |_| {
        let text = answer_text.get();
        if text.trim().is_empty() || sending.get_untracked() {
            return;
        }

        #[cfg(feature = "csr")]
        if let Some(token) = auth.get_untracked().token {
            let text = text.trim().to_owned();
            sending.set(true);
            leptos::task::spawn_local(async move {
                let created = crate::net::api::create_answer(&token, question_id, &text).await;
                sending.set(false);
                if created.is_some() {
                    on_answered.run(question_id);
                } else {
                    log::warn!("answer create failed");
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (auth, on_answered);
    };

    // Anonymous questions hide the asker entirely.
    let asker = question.asker.clone();

    view! {
        <article class="question-card">
            <header class="question-card__header">
                {match asker {
                    Some(user) => view! { <UserInfo user=user/> }.into_any(),
                    None => view! { <span class="question-card__anon">"Anonymous"</span> }.into_any(),
                }}
            </header>

            <p class="question-card__text">{question.question_text.clone()}</p>

            <div class="question-card__form">
                <textarea
                    class="question-card__input"
                    placeholder="Write your answer..."
                    prop:value=move || answer_text.get()
                    on:input=move |ev| answer_text.set(event_target_value(&ev))
                ></textarea>
                <button
                    class="btn btn--primary"
                    disabled=move || sending.get()
                    on:click=on_submit
                >
                    "Answer"
                </button>
            </div>
        </article>
    }
}
