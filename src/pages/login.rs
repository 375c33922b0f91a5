//! Login page with the email/password form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::util::role_paths;

fn correo_valido(correo: &str) -> bool {
    let Some((local, domain)) = correo.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.')
}

/// Login page — submits credentials, shows the backend's failure message
/// inline, and navigates to the role-derived landing path on success.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let correo = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let puede_enviar =
        move || correo_valido(&correo.get()) && password.get().len() >= 6 && !pending.get();

    let submit = Callback::new(move |()| {
        error.set(None);
        if !puede_enviar() {
            error.set(Some("Verifica tu correo y contraseña.".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let correo = correo.get_untracked().trim().to_owned();
            let password = password.get_untracked();
            let navigate = navigate.clone();
            pending.set(true);
            leptos::task::spawn_local(async move {
                match crate::state::session::login(session, correo, password).await {
                    Ok(()) => {
                        let target = session
                            .get_untracked()
                            .user()
                            .map_or(role_paths::DASHBOARD_PATH, role_paths::landing_path);
                        navigate(target, NavigateOptions::default());
                    }
                    Err(message) => error.set(Some(message)),
                }
                pending.set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        let _ = &navigate;
    });

    view! {
        <div class="login-page">
            <form
                class="login-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <h1>"Ingresar al sistema"</h1>

                <label class="login-form__label">
                    "Correo institucional"
                    <input
                        class="login-form__input"
                        type="email"
                        prop:value=move || correo.get()
                        on:input=move |ev| correo.set(event_target_value(&ev))
                        placeholder="usuario@ejemplo.edu"
                        autocomplete="email"
                    />
                </label>

                <label class="login-form__label">
                    "Contraseña"
                    <input
                        class="login-form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        placeholder="••••••••"
                        autocomplete="current-password"
                    />
                </label>

                <Show when=move || error.get().is_some()>
                    <div class="login-form__error" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || !puede_enviar()>
                    {move || if pending.get() { "Validando…" } else { "Entrar" }}
                </button>
            </form>
        </div>
    }
}
