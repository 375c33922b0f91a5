//! Administrator panel entry page.

use leptos::prelude::*;

use crate::components::top_bar::TopBar;

/// Admin landing page. The CRUD sections hang off this route.
#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <div class="panel-page">
            <TopBar/>
            <main class="panel-page__content">
                <h1>"Administración"</h1>
                <nav class="panel-page__nav">
                    <a href="/admin/responsables">"Responsables"</a>
                    <a href="/admin/evaluadores">"Evaluadores"</a>
                    <a href="/admin/inscritos">"Inscritos"</a>
                </nav>
            </main>
        </div>
    }
}
