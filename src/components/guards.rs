//! Route guards: declarative access control over the session state.
//!
//! Each guard evaluates the pure [`evaluate`] function against the current
//! `SessionState` and renders children, a neutral loader, or a
//! history-replacing redirect. Guards never mutate session state; while the
//! initial probe is still `Loading` they hold on the loader instead of
//! guessing, which is what prevents a redirect flicker on a cold reload.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::net::policy::{LOGIN_PATH, UNAUTHORIZED_PATH};
use crate::state::session::SessionState;
use crate::util::role_paths::DASHBOARD_PATH;

/// What a route declares about who may enter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Requirement {
    /// Any authenticated user.
    Authenticated,
    /// Authenticated and holding this exact role slug.
    Role(&'static str),
    /// Authenticated and holding at least one of these slugs.
    AnyRole(Vec<&'static str>),
    /// Only unauthenticated visitors; authenticated ones go to `landing`.
    GuestOnly { landing: &'static str },
}

/// The guard decision for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    Placeholder,
    RedirectToLogin,
    RedirectToUnauthorized,
    RedirectTo(&'static str),
}

/// Decide what to do for a navigation. Pure: no side effects, no browser.
pub fn evaluate(state: &SessionState, requirement: &Requirement) -> GuardOutcome {
    if state.is_loading() {
        return GuardOutcome::Placeholder;
    }
    match requirement {
        Requirement::Authenticated => {
            if state.user().is_some() {
                GuardOutcome::Render
            } else {
                GuardOutcome::RedirectToLogin
            }
        }
        Requirement::Role(slug) => {
            if state.user().is_none() {
                GuardOutcome::RedirectToLogin
            } else if state.has_role(slug) {
                GuardOutcome::Render
            } else {
                GuardOutcome::RedirectToUnauthorized
            }
        }
        Requirement::AnyRole(slugs) => {
            if state.user().is_none() {
                GuardOutcome::RedirectToLogin
            } else if state.has_any_role(slugs) {
                GuardOutcome::Render
            } else {
                GuardOutcome::RedirectToUnauthorized
            }
        }
        Requirement::GuestOnly { landing } => {
            if state.user().is_some() {
                GuardOutcome::RedirectTo(landing)
            } else {
                GuardOutcome::Render
            }
        }
    }
}

/// Neutral placeholder shown while the session probe is unresolved.
#[component]
pub fn SessionLoader() -> impl IntoView {
    view! {
        <div class="session-loader">
            <span class="session-loader__dot"></span>
            <span class="session-loader__label">"Cargando…"</span>
        </div>
    }
}

/// Gate children behind any authenticated session.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    move || render_outcome(evaluate(&session.get(), &Requirement::Authenticated), &children)
}

/// Gate children behind one exact role slug.
#[component]
pub fn RequireRole(slug: &'static str, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let requirement = Requirement::Role(slug);
    move || render_outcome(evaluate(&session.get(), &requirement), &children)
}

/// Gate children behind membership in any of the given slugs.
#[component]
pub fn RequireAnyRole(slugs: Vec<&'static str>, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let requirement = Requirement::AnyRole(slugs);
    move || render_outcome(evaluate(&session.get(), &requirement), &children)
}

/// Inverse guard for the login page: an authenticated user never sees it.
#[component]
pub fn RedirectIfAuth(
    #[prop(default = DASHBOARD_PATH)] to: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let requirement = Requirement::GuestOnly { landing: to };
    move || render_outcome(evaluate(&session.get(), &requirement), &children)
}

fn render_outcome(outcome: GuardOutcome, children: &ChildrenFn) -> AnyView {
    match outcome {
        GuardOutcome::Render => children(),
        GuardOutcome::Placeholder => view! { <SessionLoader/> }.into_any(),
        GuardOutcome::RedirectToLogin => replace_with(LOGIN_PATH),
        GuardOutcome::RedirectToUnauthorized => replace_with(UNAUTHORIZED_PATH),
        GuardOutcome::RedirectTo(path) => replace_with(path),
    }
}

// Guards always replace history so the back button cannot return to a
// blocked page.
fn replace_with(path: &'static str) -> AnyView {
    let options = NavigateOptions {
        replace: true,
        ..Default::default()
    };
    view! { <Redirect path=path options=options/> }.into_any()
}
