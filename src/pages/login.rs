//! Login page: email + password, redirects by role on success.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::types::LoginRequest;
use crate::state::auth::AuthState;

/// Login page. On success the session is persisted, the shared auth state
/// is updated, and the user lands on their role's dashboard. A failed
/// attempt answers 401 from the server; the request pipeline suppresses
/// its login redirect on this path, so the error just renders inline.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use crate::state::session::{Session, SessionStore};
            use crate::util::storage::StorageError;

            let navigate = navigate.clone();
            pending.set(true);
            error.set(None);
            let credentials = LoginRequest {
                email: email.get(),
                password: password.get(),
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&credentials).await {
                    Ok(response) => {
                        let saved = SessionStore::from_browser()
                            .ok_or(StorageError::Unavailable)
                            .and_then(|store| store.save(&response.token, &response.user));
                        match saved {
                            Ok(()) => {
                                let role = response.user.role;
                                auth.update(|state| {
                                    state.session = Some(Session {
                                        token: response.token,
                                        user: response.user,
                                    });
                                });
                                navigate(role.dashboard_path(), NavigateOptions::default());
                            }
                            Err(err) => error.set(Some(err.to_string())),
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = auth;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <header class="auth-card__header">
                    <h1>"MediCare"</h1>
                    <h2>"Welcome Back"</h2>
                    <p>"Sign in to your account"</p>
                </header>

                <Show when=move || error.get().is_some()>
                    <div class="auth-card__error">{move || error.get()}</div>
                </Show>

                <form on:submit=submit>
                    <label class="auth-card__label">
                        "Email"
                        <input
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-card__label">
                        "Password"
                        <input
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                        {move || if pending.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "Don't have an account? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
