//! Role → landing-path resolution.
//!
//! After login the UI navigates to a canonical page per role. Precedence is
//! fixed: administrador wins over responsable, which wins over evaluador,
//! which wins over comunicaciones. Users with none of those land on the
//! generic dashboard.

#[cfg(test)]
#[path = "role_paths_test.rs"]
mod role_paths_test;

use crate::net::types::Usuario;

pub const ADMIN_PATH: &str = "/admin";
pub const RESPONSABLE_PATH: &str = "/responsable";
pub const EVALUADOR_PATH: &str = "/evaluador";
pub const COMUNICACIONES_PATH: &str = "/comunicaciones";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Resolve the landing path for a set of role slugs.
///
/// Total and deterministic: any slug set maps to exactly one path.
pub fn landing_path_for_slugs<S: AsRef<str>>(slugs: &[S]) -> &'static str {
    let has = |wanted: &str| slugs.iter().any(|s| s.as_ref() == wanted);
    if has("administrador") {
        ADMIN_PATH
    } else if has("responsable") {
        RESPONSABLE_PATH
    } else if has("evaluador") {
        EVALUADOR_PATH
    } else if has("comunicaciones") {
        COMUNICACIONES_PATH
    } else {
        DASHBOARD_PATH
    }
}

/// Resolve the landing path for a user from their full role set.
pub fn landing_path(user: &Usuario) -> &'static str {
    landing_path_for_slugs(&user.role_slugs())
}
