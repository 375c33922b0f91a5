//! Session state machine and controller operations.
//!
//! `SessionState` is the single in-memory authority on who is logged in.
//! It lives in an `RwSignal` provided via context from the app root; guards
//! and pages observe it read-only, and only the operations in this module
//! write it. The persisted side (token, snapshot, variant tag) lives in
//! [`crate::state::credentials`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::auth;
use crate::net::types::Usuario;
use crate::state::credentials;

/// The authentication state machine.
///
/// `Loading` holds from app start until the initial probe resolves, so
/// guards can wait instead of guessing. Exactly one value exists at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Loading,
    Anonymous,
    Authenticated(Usuario),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The authoritative user, only while authenticated.
    pub fn user(&self) -> Option<&Usuario> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Loading | Self::Anonymous => None,
        }
    }

    /// True iff authenticated and the role set contains `slug` exactly.
    pub fn has_role(&self, slug: &str) -> bool {
        self.user()
            .is_some_and(|u| u.roles.iter().any(|r| r.slug == slug))
    }

    /// True iff authenticated and the role set intersects `slugs`.
    pub fn has_any_role(&self, slugs: &[&str]) -> bool {
        self.user()
            .is_some_and(|u| u.roles.iter().any(|r| slugs.contains(&r.slug.as_str())))
    }
}

/// The persisted snapshot, for rendering continuity while still `Loading`.
/// Never an authorization input: guards only consume `SessionState`.
pub fn loading_hint() -> Option<Usuario> {
    credentials::cached_user()
}

/// Probe the session: no token means anonymous with no network call;
/// otherwise the stored profile variant is fetched authoritatively.
///
/// Profile endpoints are handshake calls, so the response pipeline leaves
/// the credentials alone on failure; this is the one place that clears them
/// when the probe is rejected.
async fn resolve_session() -> SessionState {
    if credentials::token().is_none() {
        return SessionState::Anonymous;
    }
    match auth::perfil(credentials::profile_kind()).await {
        Ok(user) => SessionState::Authenticated(user),
        Err(e) => {
            leptos::logging::warn!("session probe failed: {e}");
            credentials::clear();
            SessionState::Anonymous
        }
    }
}

/// Re-run the probe and publish the outcome. The state never leaves
/// `Loading` before the probe completes.
pub async fn refresh(session: RwSignal<SessionState>) {
    session.set(resolve_session().await);
}

/// Kick off the initial probe from the app root.
pub fn bootstrap(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        refresh(session).await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = session;
}

/// Attempt a login, then refresh into the authenticated state.
///
/// On failure the state is untouched and the message is returned for the
/// form to display. A 200 without a token counts as a failure.
///
/// # Errors
///
/// The display message, preferring the backend's own wording.
pub async fn login(
    session: RwSignal<SessionState>,
    correo: String,
    password: String,
) -> Result<(), String> {
    let resp = auth::login(&correo, &password)
        .await
        .map_err(|e| e.display_message())?;
    if resp.token.is_none() {
        return Err(resp
            .message
            .unwrap_or_else(|| "Credenciales inválidas".to_owned()));
    }
    refresh(session).await;
    Ok(())
}

/// Close the session locally: clear persisted credentials and go anonymous.
/// No network call, so an already-expired token cannot produce a spurious
/// failure on the way out.
pub fn logout(session: RwSignal<SessionState>) {
    session.set(close_session());
}

fn close_session() -> SessionState {
    credentials::clear();
    SessionState::Anonymous
}
