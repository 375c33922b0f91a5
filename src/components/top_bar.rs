//! Top bar with the current user's name and the logout action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::policy::LOGIN_PATH;
use crate::state::session::{self, SessionState};

/// Header shown on authenticated pages.
///
/// While the probe is still resolving, the persisted snapshot is shown as a
/// rendering hint so the header does not flash empty on reload.
#[component]
pub fn TopBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let display_name = move || {
        let state = session.get();
        state
            .user()
            .cloned()
            .or_else(|| state.is_loading().then(session::loading_hint).flatten())
            .map(|u| format!("{} {}", u.nombres, u.apellidos))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        session::logout(session);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <header class="top-bar">
            <span class="top-bar__title">"Portal"</span>
            <span class="top-bar__user">{display_name}</span>
            <button class="btn top-bar__logout" on:click=on_logout>
                "Cerrar sesión"
            </button>
        </header>
    }
}
