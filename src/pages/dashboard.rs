//! Generic landing page for authenticated users without a role-specific panel.

use leptos::prelude::*;

use crate::components::top_bar::TopBar;
use crate::state::session::SessionState;

/// Dashboard page — the default landing destination.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let saludo = move || {
        session
            .get()
            .user()
            .map_or_else(String::new, |u| format!("Hola, {}", u.nombres))
    };

    view! {
        <div class="dashboard-page">
            <TopBar/>
            <main class="dashboard-page__content">
                <h1>"Panel general"</h1>
                <p>{saludo}</p>
            </main>
        </div>
    }
}
