//! Sign-in page with a username/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Sign-in page. A successful sign-in stores the session token and
/// navigates to the wall.
#[component]
pub fn SignInPage() -> impl IntoView {
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
            sending.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::signin(user.trim(), &pass).await {
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
        let _ = (user, pass, auth);
    };

    view! {
        <div class="auth-page">
            <h1>"askwall"</h1>
            <p>"Sign in to your account"</p>

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

                {move || error.get().map(|message| view! { <p class="auth-page__error">{message}</p> })}

                <button class="btn btn--primary" type="submit" disabled=move || sending.get()>
                    "Sign in"
                </button>
            </form>

            <p class="auth-page__switch">
                "No account yet? "
                <a href="/signup">"Sign up"</a>
            </p>
        </div>
    }
}
