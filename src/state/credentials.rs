//! Credential Store: the persisted session material.
//!
//! Wraps `localStorage` under three keys: the bearer token, the last-known
//! user snapshot, and a tag recording which profile variant the session last
//! used. The store is the single source of truth for the token; the request
//! builder re-reads it on every call. Storage writes are treated as always
//! succeeding, matching how the rest of the app uses `localStorage`.
//!
//! Non-browser builds (SSR, native tests) back the same API with an
//! in-process map so session logic behaves identically off-browser.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use crate::net::types::Usuario;

const TOKEN_KEY: &str = "portal_token";
const USER_KEY: &str = "portal_usuario";
const PROFILE_KIND_KEY: &str = "portal_perfil";

/// Which profile endpoint the session last authenticated against.
///
/// Persisted so a refresh probes the same variant the session was opened
/// with. Unknown tags fall back to `General`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileKind {
    #[default]
    General,
    Responsable,
    Evaluador,
}

impl ProfileKind {
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::General => "perfil",
            Self::Responsable => "perfil-responsable",
            Self::Evaluador => "perfil-evaluador",
        }
    }

    fn from_tag(tag: &str) -> Self {
        match tag {
            "perfil-responsable" => Self::Responsable,
            "perfil-evaluador" => Self::Evaluador,
            _ => Self::General,
        }
    }
}

/// Read the bearer token. `None` means the session is anonymous.
pub fn token() -> Option<String> {
    read(TOKEN_KEY)
}

/// Persist a new bearer token, replacing any previous one.
pub fn set_token(token: &str) {
    write(TOKEN_KEY, token);
}

/// Read the cached user snapshot. Unparseable snapshots are treated as
/// absent; the snapshot is a rendering hint, never an authorization input.
pub fn cached_user() -> Option<Usuario> {
    let raw = read(USER_KEY)?;
    serde_json::from_str(&raw).ok()
}

/// Persist the user snapshot for the next bootstrap.
pub fn set_cached_user(user: &Usuario) {
    if let Ok(json) = serde_json::to_string(user) {
        write(USER_KEY, &json);
    }
}

/// Read the persisted profile-variant tag.
pub fn profile_kind() -> ProfileKind {
    read(PROFILE_KIND_KEY).map_or(ProfileKind::General, |t| ProfileKind::from_tag(&t))
}

/// Persist the profile-variant tag alongside the token.
pub fn set_profile_kind(kind: ProfileKind) {
    write(PROFILE_KIND_KEY, kind.as_tag());
}

/// Remove token, snapshot, and variant tag as one logical operation.
/// A partial clear is never observable: all three keys go together.
pub fn clear() {
    remove(TOKEN_KEY);
    remove(USER_KEY);
    remove(PROFILE_KIND_KEY);
}

// =============================================================
// Storage backends
// =============================================================

#[cfg(feature = "hydrate")]
fn read(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}

#[cfg(feature = "hydrate")]
fn write(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

#[cfg(feature = "hydrate")]
fn remove(key: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static STORE: std::cell::RefCell<std::collections::HashMap<&'static str, String>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

#[cfg(not(feature = "hydrate"))]
fn read(key: &'static str) -> Option<String> {
    STORE.with(|s| s.borrow().get(key).cloned())
}

#[cfg(not(feature = "hydrate"))]
fn write(key: &'static str, value: &str) {
    STORE.with(|s| {
        s.borrow_mut().insert(key, value.to_owned());
    });
}

#[cfg(not(feature = "hydrate"))]
fn remove(key: &'static str) {
    STORE.with(|s| {
        s.borrow_mut().remove(key);
    });
}
