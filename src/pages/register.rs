//! Registration page: account details plus a role selection.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::types::RegisterRequest;
use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Registration page. A successful registration responds like a login:
/// the session is saved and the user lands on their role's dashboard.
/// The password-confirmation mismatch is caught client-side before any
/// request is made.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Admin);
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if password.get() != confirmation.get() {
            error.set(Some("Passwords do not match".to_owned()));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            use crate::state::session::{Session, SessionStore};
            use crate::util::storage::StorageError;

            let navigate = navigate.clone();
            pending.set(true);
            error.set(None);
            let details = RegisterRequest {
                name: name.get(),
                email: email.get(),
                password: password.get(),
                password_confirmation: confirmation.get(),
                role: role.get(),
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&details).await {
                    Ok(response) => {
                        let saved = SessionStore::from_browser()
                            .ok_or(StorageError::Unavailable)
                            .and_then(|store| store.save(&response.token, &response.user));
                        match saved {
                            Ok(()) => {
                                let user_role = response.user.role;
                                auth.update(|state| {
                                    state.session = Some(Session {
                                        token: response.token,
                                        user: response.user,
                                    });
                                });
                                navigate(user_role.dashboard_path(), NavigateOptions::default());
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
            <div class="auth-card auth-card--wide">
                <header class="auth-card__header">
                    <h1>"MediCare"</h1>
                    <h2>"Create Account"</h2>
                </header>

                <Show when=move || error.get().is_some()>
                    <div class="auth-card__error">{move || error.get()}</div>
                </Show>

                <form on:submit=submit>
                    <label class="auth-card__label">
                        "Full Name"
                        <input
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
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
                    <label class="auth-card__label">
                        "Confirm Password"
                        <input
                            type="password"
                            required
                            prop:value=move || confirmation.get()
                            on:input=move |ev| confirmation.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-card__label">
                        "Role"
                        <select on:change=move |ev| {
                            role.set(match event_target_value(&ev).as_str() {
                                "doctor" => Role::Doctor,
                                _ => Role::Admin,
                            });
                        }>
                            <option value="admin" selected=move || role.get() == Role::Admin>
                                "Administrator"
                            </option>
                            <option value="doctor" selected=move || role.get() == Role::Doctor>
                                "Doctor"
                            </option>
                        </select>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                        {move || if pending.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "Already have an account? " <a href="/login">"Sign In"</a>
                </p>
            </div>
        </div>
    }
}
