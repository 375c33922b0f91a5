//! Evaluator panel entry page.

use leptos::prelude::*;

use crate::components::top_bar::TopBar;

/// Panel for the evaluator role.
#[component]
pub fn EvaluadorPage() -> impl IntoView {
    view! {
        <div class="panel-page">
            <TopBar/>
            <main class="panel-page__content">
                <h1>"Panel del evaluador"</h1>
            </main>
        </div>
    }
}
