//! Browser localStorage helpers for the persisted leaderboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so state holders
//! never touch web-sys. Every failure (no window, storage disabled, quota,
//! unparseable JSON) degrades to "nothing stored" or a logged no-op.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Parse a stored JSON string. Anything that does not match `T` is `None`.
pub fn decode_json<T: DeserializeOwned>(raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            leptos::logging::log!("stored JSON rejected: {e}");
            None
        }
    }
}

/// Load a JSON value from `localStorage` for `key`.
///
/// Returns `None` when the key is absent or its content does not parse.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(key).ok().flatten()?;
        let decoded = decode_json(&raw);
        if decoded.is_none() {
            leptos::logging::warn!("ignoring malformed localStorage value for {key}");
        }
        decoded
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                leptos::logging::warn!("failed to encode {key} for localStorage: {e}");
                return;
            }
        };
        if storage.set_item(key, &raw).is_err() {
            leptos::logging::warn!("localStorage rejected write for {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from `localStorage`.
pub fn remove_key(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage()
            && storage.remove_item(key).is_err()
        {
            leptos::logging::warn!("localStorage rejected removal of {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
