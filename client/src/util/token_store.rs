//! Session token persistence.
//!
//! Stores the API token in `localStorage` so a page reload keeps the user
//! signed in. Requires a browser environment; native builds are no-ops.

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "askwall_token";

/// Read the persisted session token, if any.
#[must_use]
pub fn load_token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(STORAGE_KEY).ok()?
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist the session token.
pub fn save_token(token: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
    }
}

/// Drop the persisted session token.
pub fn clear_token() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
