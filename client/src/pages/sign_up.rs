//! Sign-up page creating a new account.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Sign-up page. A successful signup signs the user in immediately and
/// navigates to the wall.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Already signed in? Go straight to the wall.
    Effect::new(move || {
        if auth.get().is_authenticated() {
            navigate("/wall", NavigateOptions::default());
        }
    });

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let sending = RwSignal::new(false);

    let on_submit = move |_| {
        let user = username.get_untracked();
        let pass = password.get_untracked();
        if user.trim().is_empty() || pass.is_empty() || sending.get_untracked() {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let body = shared::SignupRequest {
                username: user.trim().to_owned(),
                password: pass,
                first_name: first_name.get_untracked().trim().to_owned(),
                last_name: last_name.get_untracked().trim().to_owned(),
            };
            sending.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::signup(&body).await {
                    Ok(session) => {
                        crate::util::token_store::save_token(&session.token);
                        auth.update(|a| {
                            a.token = Some(session.token);
                            a.user = Some(session.user);
                            a.loading = false;
                        });
                    }
                    Err(message) => {
                        sending.set(false);
                        error.set(Some(message));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (user, pass, auth, first_name, last_name);
    };

    view! {
        <div class="auth-page">
            <h1>"askwall"</h1>
            <p>"Create an account"</p>

            <form class="auth-page__form" on:submit=move |ev| {
                ev.prevent_default();
                on_submit(());
            }>
                <input
                    class="auth-page__input"
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    class="auth-page__input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <input
                    class="auth-page__input"
                    type="text"
                    placeholder="First name (optional)"
                    prop:value=move || first_name.get()
                    on:input=move |ev| first_name.set(event_target_value(&ev))
                />
                <input
                    class="auth-page__input"
                    type="text"
                    placeholder="Last name (optional)"
                    prop:value=move || last_name.get()
                    on:input=move |ev| last_name.set(event_target_value(&ev))
                />

                {move || error.get().map(|message| view! { <p class="auth-page__error">{message}</p> })}

                <button class="btn btn--primary" type="submit" disabled=move || sending.get()>
                    "Sign up"
                </button>
            </form>

            <p class="auth-page__switch">
                "Already registered? "
                <a href="/signin">"Sign in"</a>
            </p>
        </div>
    }
}
