use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_has_no_session() {
    let state = AuthState::default();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
    assert!(!state.bootstrapped);
}

#[test]
fn is_authenticated_requires_user() {
    let mut state = AuthState::default();
    state.token = Some("abc".into());
    assert!(!state.is_authenticated());

    state.user = Some(shared::User {
        id: uuid::Uuid::nil(),
        username: "erin".into(),
        first_name: String::new(),
        last_name: String::new(),
        avatar_url: None,
    });
    assert!(state.is_authenticated());
}
