use super::*;
use crate::net::types::Rol;

fn usuario() -> Usuario {
    Usuario {
        id: "u-1".to_owned(),
        nombres: "Ana".to_owned(),
        apellidos: "Quispe".to_owned(),
        correo: "ana@ejemplo.edu".to_owned(),
        roles: vec![Rol {
            id: "r-1".to_owned(),
            nombre: "Administrador".to_owned(),
            slug: "administrador".to_owned(),
        }],
    }
}

// =============================================================
// Token round-trip
// =============================================================

#[test]
fn token_absent_by_default() {
    assert!(token().is_none());
}

#[test]
fn set_then_get_returns_same_token() {
    set_token("abc");
    assert_eq!(token().as_deref(), Some("abc"));
}

#[test]
fn set_replaces_previous_token() {
    set_token("first");
    set_token("second");
    assert_eq!(token().as_deref(), Some("second"));
}

// =============================================================
// Snapshot and tag
// =============================================================

#[test]
fn cached_user_round_trips() {
    set_cached_user(&usuario());
    assert_eq!(cached_user(), Some(usuario()));
}

#[test]
fn profile_kind_defaults_to_general() {
    assert_eq!(profile_kind(), ProfileKind::General);
}

#[test]
fn profile_kind_round_trips() {
    set_profile_kind(ProfileKind::Evaluador);
    assert_eq!(profile_kind(), ProfileKind::Evaluador);
}

#[test]
fn unknown_tag_falls_back_to_general() {
    assert_eq!(ProfileKind::from_tag("perfil-competidor"), ProfileKind::General);
}

// =============================================================
// Atomic clear
// =============================================================

#[test]
fn clear_removes_all_three_keys() {
    set_token("abc");
    set_cached_user(&usuario());
    set_profile_kind(ProfileKind::Responsable);

    clear();

    assert!(token().is_none());
    assert!(cached_user().is_none());
    assert_eq!(profile_kind(), ProfileKind::General);
}

#[test]
fn clear_on_empty_store_is_a_no_op() {
    clear();
    assert!(token().is_none());
}
