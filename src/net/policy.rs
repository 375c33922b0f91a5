//! Session-invalidation policy for failed API calls.
//!
//! The response pipeline funnels every failure through [`classify`], a pure
//! function deciding whether the failure means the session is dead. The
//! actual side effects (credential clear + hard redirect) live in
//! [`invalidate`] so the policy itself stays free of browser APIs.
//!
//! Handshake calls (login and the profile variants) are exempt from
//! invalidation: a wrong password must surface as a form error, and a failed
//! profile probe must not redirect the login page onto itself.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use std::cell::Cell;

use crate::state::credentials;

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/no-autorizado";

/// What a failed call means for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionVerdict {
    /// Local failure only; the caller renders its own error.
    Keep,
    /// The session is stale: clear credentials and return to login.
    Invalidate,
}

/// True for endpoints exempt from forced invalidation: the login call and
/// every profile variant.
pub fn is_handshake(path: &str) -> bool {
    let path = path.split('?').next().unwrap_or(path);
    path.ends_with("/auth/login")
        || path.ends_with("/auth/perfil")
        || path.contains("/auth/perfil-")
}

/// Backends behind a web login sometimes answer API calls with the HTML
/// login page or a bare "Unauthorized." string instead of a JSON error.
/// Both mean the bearer token was not accepted.
pub fn body_signals_unauthenticated(body: &str) -> bool {
    body.contains("<!DOCTYPE html")
        || body.to_lowercase().contains("<html")
        || body.contains("Unauthorized.")
}

/// Classify a failed call. `status` is `None` when no HTTP response was
/// received at all; network failures never touch the session.
pub fn classify(path: &str, status: Option<u16>, body: Option<&str>) -> SessionVerdict {
    let Some(status) = status else {
        return SessionVerdict::Keep;
    };
    if is_handshake(path) {
        return SessionVerdict::Keep;
    }
    if matches!(status, 401 | 403 | 419) {
        return SessionVerdict::Invalidate;
    }
    if body.is_some_and(body_signals_unauthenticated) {
        return SessionVerdict::Invalidate;
    }
    SessionVerdict::Keep
}

thread_local! {
    // Latched once a redirect has been decided. `window.location` does not
    // change until the reload lands, so concurrent failures in the same tick
    // cannot rely on a pathname check alone.
    static REDIRECT_LATCHED: Cell<bool> = const { Cell::new(false) };
}

/// Clear the session and decide the redirect target, idempotently.
///
/// Returns `Some(LOGIN_PATH)` exactly once per page lifetime, and only when
/// the app is not already on the login page. The credential clear itself is
/// safe to repeat.
pub fn invalidate(current_path: &str) -> Option<&'static str> {
    credentials::clear();
    if current_path == LOGIN_PATH {
        return None;
    }
    if REDIRECT_LATCHED.with(|l| l.replace(true)) {
        None
    } else {
        Some(LOGIN_PATH)
    }
}
