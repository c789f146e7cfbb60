//! Browser localStorage persistence for the session user.
//!
//! The external API has no session endpoint; the authenticated `User`
//! object returned by login/register is the session, cached under one
//! localStorage key and restored on startup. SSR paths safely no-op so
//! server rendering stays deterministic.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use models::User;
#[cfg(feature = "hydrate")]
use serde::Serialize;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
const SESSION_KEY: &str = "ladle_session";

/// Load the cached session user, if one is stored.
pub fn load() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        load_json(SESSION_KEY)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Cache the session user after login, registration, or a profile update.
pub fn save(user: &User) {
    #[cfg(feature = "hydrate")]
    {
        save_json(SESSION_KEY, user);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
    }
}

/// Drop the cached session on logout.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load a JSON value from `localStorage` for `key`.
#[cfg(feature = "hydrate")]
fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = local_storage()?;
    let raw = storage.get_item(key).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value to `localStorage` for `key`.
#[cfg(feature = "hydrate")]
fn save_json<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = local_storage() else {
        return;
    };
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    let _ = storage.set_item(key, &raw);
}
