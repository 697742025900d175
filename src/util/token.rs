//! Bearer token persistence.
//!
//! The login flow stores the API token in `localStorage` so a returning
//! visitor is signed in without re-entering credentials. Requires a browser
//! environment; on the server every function is a no-op or returns `None`.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "reckon_token";

/// Read the stored bearer token, if any.
pub fn read() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the bearer token for future visits.
pub fn store(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the stored bearer token.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
