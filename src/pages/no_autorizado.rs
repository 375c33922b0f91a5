//! Page shown when an authenticated user lacks the required role.

use leptos::prelude::*;

/// Unauthorized page — reachable without authentication so the guard
/// redirect can never loop.
#[component]
pub fn NoAutorizadoPage() -> impl IntoView {
    view! {
        <div class="no-autorizado-page">
            <h1>"Acceso no autorizado"</h1>
            <p>"Tu cuenta no tiene permisos para esta sección."</p>
            <a href="/dashboard">"Volver al panel"</a>
        </div>
    }
}
