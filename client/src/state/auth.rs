#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Authentication state tracking the session token, current user, and
/// loading status. Provided via context as an `RwSignal`.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<shared::User>,
    /// True while the persisted session is being revalidated.
    pub loading: bool,
    /// Set once the startup effect has run, so it only runs once.
    pub bootstrapped: bool,
}

impl AuthState {
    /// Whether a signed-in user is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
