//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{questions::QuestionsPage, sign_in::SignInPage, sign_up::SignUpPage, wall::WallPage};
use crate::state::auth::AuthState;

/// Root application component.
///
/// Provides the shared auth context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Restore a persisted session on startup.
    Effect::new(move || {
        if auth.get_untracked().bootstrapped {
            return;
        }
        auth.update(|a| {
            a.bootstrapped = true;
            a.token = crate::util::token_store::load_token();
            a.loading = a.token.is_some();
        });

        #[cfg(feature = "csr")]
        if let Some(token) = auth.get_untracked().token {
            leptos::task::spawn_local(async move {
                let user = crate::net::api::fetch_me(&token).await;
                auth.update(|a| {
                    if user.is_none() {
                        // Stale token; drop it so pages redirect to sign-in.
                        a.token = None;
                        crate::util::token_store::clear_token();
                    }
                    a.user = user;
                    a.loading = false;
                });
            });
        }
    });

    view! {
        <Title text="askwall"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("wall") view=WallPage/>
                <Route path=StaticSegment("questions") view=QuestionsPage/>
                <Route path=StaticSegment("signin") view=SignInPage/>
                <Route path=StaticSegment("signup") view=SignUpPage/>
            </Routes>
        </Router>
    }
}
