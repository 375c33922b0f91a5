use super::*;

// =============================================================
// Precedence order
// =============================================================

#[test]
fn administrador_maps_to_admin_path() {
    assert_eq!(landing_path_for_slugs(&["administrador"]), ADMIN_PATH);
}

#[test]
fn evaluador_maps_to_evaluador_path() {
    assert_eq!(landing_path_for_slugs(&["evaluador"]), EVALUADOR_PATH);
}

#[test]
fn responsable_takes_precedence_over_evaluador() {
    assert_eq!(
        landing_path_for_slugs(&["responsable", "evaluador"]),
        RESPONSABLE_PATH
    );
}

#[test]
fn administrador_takes_precedence_over_everything() {
    assert_eq!(
        landing_path_for_slugs(&["comunicaciones", "evaluador", "responsable", "administrador"]),
        ADMIN_PATH
    );
}

#[test]
fn comunicaciones_maps_to_comunicaciones_path() {
    assert_eq!(landing_path_for_slugs(&["comunicaciones"]), COMUNICACIONES_PATH);
}

// =============================================================
// Totality
// =============================================================

#[test]
fn empty_role_set_maps_to_dashboard() {
    let none: [&str; 0] = [];
    assert_eq!(landing_path_for_slugs(&none), DASHBOARD_PATH);
}

#[test]
fn unknown_slugs_map_to_dashboard() {
    assert_eq!(landing_path_for_slugs(&["competidor", "tutor"]), DASHBOARD_PATH);
}

#[test]
fn slug_match_is_case_sensitive() {
    assert_eq!(landing_path_for_slugs(&["ADMINISTRADOR"]), DASHBOARD_PATH);
}
