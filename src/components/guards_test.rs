use super::*;
use crate::net::types::{Rol, Usuario};
use crate::state::credentials;

fn usuario(slugs: &[&str]) -> Usuario {
    Usuario {
        id: "u-1".to_owned(),
        nombres: "Ana".to_owned(),
        apellidos: "Quispe".to_owned(),
        correo: "ana@ejemplo.edu".to_owned(),
        roles: slugs
            .iter()
            .map(|s| Rol {
                id: format!("r-{s}"),
                nombre: (*s).to_owned(),
                slug: (*s).to_owned(),
            })
            .collect(),
    }
}

fn authenticated(slugs: &[&str]) -> SessionState {
    SessionState::Authenticated(usuario(slugs))
}

// =============================================================
// Loading holds every guard on the placeholder
// =============================================================

#[test]
fn loading_always_renders_placeholder() {
    let requirements = [
        Requirement::Authenticated,
        Requirement::Role("administrador"),
        Requirement::AnyRole(vec!["responsable", "responsable_academico"]),
        Requirement::GuestOnly { landing: "/dashboard" },
    ];
    for req in &requirements {
        assert_eq!(
            evaluate(&SessionState::Loading, req),
            GuardOutcome::Placeholder,
            "{req:?}"
        );
    }
}

// =============================================================
// RequireAuth
// =============================================================

#[test]
fn anonymous_redirects_to_login() {
    assert_eq!(
        evaluate(&SessionState::Anonymous, &Requirement::Authenticated),
        GuardOutcome::RedirectToLogin
    );
}

#[test]
fn authenticated_renders() {
    assert_eq!(
        evaluate(&authenticated(&[]), &Requirement::Authenticated),
        GuardOutcome::Render
    );
}

// =============================================================
// Role guards
// =============================================================

#[test]
fn matching_role_renders() {
    assert_eq!(
        evaluate(&authenticated(&["administrador"]), &Requirement::Role("administrador")),
        GuardOutcome::Render
    );
}

#[test]
fn wrong_role_redirects_to_unauthorized() {
    assert_eq!(
        evaluate(&authenticated(&["administrador"]), &Requirement::Role("evaluador")),
        GuardOutcome::RedirectToUnauthorized
    );
}

#[test]
fn role_guard_on_anonymous_redirects_to_login_not_unauthorized() {
    assert_eq!(
        evaluate(&SessionState::Anonymous, &Requirement::Role("administrador")),
        GuardOutcome::RedirectToLogin
    );
}

#[test]
fn any_role_accepts_either_slug() {
    let req = Requirement::AnyRole(vec!["responsable", "responsable_academico"]);
    assert_eq!(
        evaluate(&authenticated(&["responsable_academico"]), &req),
        GuardOutcome::Render
    );
    assert_eq!(
        evaluate(&authenticated(&["evaluador"]), &req),
        GuardOutcome::RedirectToUnauthorized
    );
}

// =============================================================
// RedirectIfAuth
// =============================================================

#[test]
fn guest_only_renders_for_anonymous() {
    let req = Requirement::GuestOnly { landing: "/dashboard" };
    assert_eq!(evaluate(&SessionState::Anonymous, &req), GuardOutcome::Render);
}

#[test]
fn guest_only_bounces_authenticated_to_landing() {
    let req = Requirement::GuestOnly { landing: "/dashboard" };
    assert_eq!(
        evaluate(&authenticated(&["evaluador"]), &req),
        GuardOutcome::RedirectTo("/dashboard")
    );
}

// =============================================================
// Logout sequencing
// =============================================================

#[test]
fn logout_then_guard_redirects_to_login_with_store_empty() {
    credentials::set_token("abc");
    credentials::set_cached_user(&usuario(&["administrador"]));

    // The controller's logout transition with its credential clear.
    credentials::clear();
    let state = SessionState::Anonymous;

    assert_eq!(
        evaluate(&state, &Requirement::Authenticated),
        GuardOutcome::RedirectToLogin
    );
    assert!(credentials::token().is_none());
}

// =============================================================
// Post-login scenario
// =============================================================

#[test]
fn admin_session_passes_admin_guard_and_fails_evaluador_guard() {
    credentials::set_token("abc");
    let state = authenticated(&["administrador"]);

    assert_eq!(credentials::token().as_deref(), Some("abc"));
    assert_eq!(
        evaluate(&state, &Requirement::Role("administrador")),
        GuardOutcome::Render
    );
    assert_eq!(
        evaluate(&state, &Requirement::Role("evaluador")),
        GuardOutcome::RedirectToUnauthorized
    );
}
