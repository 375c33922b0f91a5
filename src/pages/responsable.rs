//! Responsible-party panel entry page.

use leptos::prelude::*;

use crate::components::top_bar::TopBar;

/// Panel for the academic responsible role.
#[component]
pub fn ResponsablePage() -> impl IntoView {
    view! {
        <div class="panel-page">
            <TopBar/>
            <main class="panel-page__content">
                <h1>"Panel del responsable"</h1>
                <nav class="panel-page__nav">
                    <a href="/responsable/competidores">"Competidores"</a>
                </nav>
            </main>
        </div>
    }
}
