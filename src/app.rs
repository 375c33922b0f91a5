//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::guards::{RedirectIfAuth, RequireAnyRole, RequireAuth, RequireRole};
use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, evaluador::EvaluadorPage, login::LoginPage,
    no_autorizado::NoAutorizadoPage, responsable::ResponsablePage,
};
use crate::state::session::{self, SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session state context, kicks off the initial session probe,
/// and declares the guarded route map.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Single writer lives in `state::session`; everything below the router
    // observes this signal read-only.
    let session_state = RwSignal::new(SessionState::default());
    provide_context(session_state);

    // Initial probe: runs client-side only; the state holds `Loading` until
    // it resolves, so guards wait instead of redirecting early.
    Effect::new(move || session::bootstrap(session_state));

    view! {
        <Stylesheet id="leptos" href="/pkg/portal-client.css"/>
        <Title text="Portal"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/dashboard"/> }>
                <Route
                    path=StaticSegment("login")
                    view=|| {
                        view! {
                            <RedirectIfAuth>
                                <LoginPage/>
                            </RedirectIfAuth>
                        }
                    }
                />
                <Route path=StaticSegment("no-autorizado") view=NoAutorizadoPage/>
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <DashboardPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <DashboardPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| {
                        view! {
                            <RequireRole slug="administrador">
                                <AdminPage/>
                            </RequireRole>
                        }
                    }
                />
                <Route
                    path=StaticSegment("responsable")
                    view=|| {
                        view! {
                            <RequireAnyRole slugs=vec!["responsable", "responsable_academico"]>
                                <ResponsablePage/>
                            </RequireAnyRole>
                        }
                    }
                />
                <Route
                    path=StaticSegment("evaluador")
                    view=|| {
                        view! {
                            <RequireRole slug="evaluador">
                                <EvaluadorPage/>
                            </RequireRole>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
