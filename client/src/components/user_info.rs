//! Answered-user info line shown inside an answer card.

use leptos::prelude::*;

/// Avatar, display name, and handle of the user who answered.
#[component]
pub fn UserInfo(user: shared::User) -> impl IntoView {
    let display_name = format!("{} {}", user.first_name, user.last_name);
    let handle = format!("@{}", user.username);

    view! {
        <div class="user-info">
            {user
                .avatar_url
                .map(|url| view! { <img class="user-info__avatar" src=url alt="avatar"/> })}
            <span class="user-info__name">{display_name.trim().to_owned()}</span>
            <span class="user-info__handle">{handle}</span>
        </div>
    }
}
