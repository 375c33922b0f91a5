//! Backend auth endpoints: login and the profile variants.
//!
//! All endpoints here are handshake calls — the policy layer never
//! invalidates the session because of them. Logout is deliberately absent
//! from the wire: closing a session is purely local (see the session
//! controller), which avoids a spurious 401 against an already-expired
//! token.

use super::api;
use super::types::{ApiError, LoginResponse, Usuario};
use crate::state::credentials::{self, ProfileKind};

#[derive(serde::Serialize)]
struct LoginRequest<'a> {
    correo: &'a str,
    password: &'a str,
    device: &'a str,
}

/// `POST /auth/login`. On a response carrying a token, persists the token,
/// the user snapshot, and the general profile tag.
///
/// A 200 without a token is still a failed login; the caller inspects
/// [`LoginResponse::token`] and surfaces [`LoginResponse::message`].
///
/// # Errors
///
/// Propagates the API error untouched so the form can show the backend's
/// message.
pub async fn login(correo: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = LoginRequest { correo, password, device: "web" };
    let resp: LoginResponse = api::post_json("/auth/login", &body).await?;

    if let Some(token) = &resp.token {
        credentials::set_token(token);
        credentials::set_profile_kind(ProfileKind::General);
        if let Some(user) = &resp.user {
            credentials::set_cached_user(user);
        }
    }
    Ok(resp)
}

/// Fetch the authoritative profile for a variant and persist the fresh
/// snapshot plus the variant tag.
///
/// # Errors
///
/// Propagates the API error; the session controller owns the transition to
/// anonymous on failure.
pub async fn perfil(kind: ProfileKind) -> Result<Usuario, ApiError> {
    let user: Usuario = api::get_json(endpoint(kind)).await?;
    credentials::set_cached_user(&user);
    credentials::set_profile_kind(kind);
    Ok(user)
}

fn endpoint(kind: ProfileKind) -> &'static str {
    match kind {
        ProfileKind::General => "/auth/perfil",
        ProfileKind::Responsable => "/auth/perfil-responsable",
        ProfileKind::Evaluador => "/auth/perfil-evaluador",
    }
}
