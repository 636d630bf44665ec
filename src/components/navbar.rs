//! Top navigation bar: brand, role-dependent links, and logout.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Navigation bar shown on every protected screen.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let user = move || auth.get().session.map(|s| s.user);
    let home_path = move || {
        user().map_or("/login", |u| u.role.dashboard_path())
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                // Best-effort server-side invalidation; the local session
                // is cleared even when the call fails.
                if let Err(err) = crate::net::api::logout().await {
                    log::warn!("logout request failed: {err}");
                }
                if let Some(store) = crate::state::session::SessionStore::from_browser() {
                    store.clear();
                }
                auth.update(|state| state.session = None);
                navigate("/login", NavigateOptions::default());
            });
        }
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href=home_path>
                "MediCare"
            </a>

            <Show when=move || user().is_some()>
                {move || {
                    user()
                        .map(|u| {
                            let links = match u.role {
                                Role::Admin => view! {
                                    <div class="navbar__links">
                                        <a href="/admin/dashboard">"Dashboard"</a>
                                        <a href="/admin/patients">"Patients"</a>
                                        <a href="/admin/doctors">"Doctors"</a>
                                        <a href="/admin/billing">"Billing"</a>
                                    </div>
                                }
                                    .into_any(),
                                Role::Doctor => view! {
                                    <div class="navbar__links">
                                        <a href="/doctor/dashboard">"Dashboard"</a>
                                    </div>
                                }
                                    .into_any(),
                            };
                            view! {
                                {links}
                                <div class="navbar__user">
                                    "Welcome, " <span class="navbar__name">{u.name.clone()}</span>
                                    <span class="navbar__role">{u.role.as_str()}</span>
                                </div>
                            }
                        })
                }}
            </Show>

            <button class="navbar__logout" on:click=on_logout>
                "Logout"
            </button>
        </nav>
    }
}
