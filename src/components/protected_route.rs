//! Per-navigation route guard for protected screen subtrees.
//!
//! Mounted as the view of a `ParentRoute`; nested screens render through
//! its `Outlet` only once the check passes. The decision is re-derived
//! from persisted storage on every navigation, never cached, so a
//! session cleared between navigations (logout, 401, another tab) is
//! honored no later than the next one.
//!
//! This is a UX convenience, not a security boundary: the remote API
//! independently rejects requests whose token does not grant access. The
//! guard's job is to avoid flashing unauthorized UI.

use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};
use leptos_router::hooks::use_location;

use crate::net::types::Role;
use crate::state::auth::{AccessDecision, evaluate_access};
use crate::state::session::SessionStore;

/// Guard wrapper for a protected route subtree. An empty `allowed` slice
/// admits any authenticated role.
#[component]
pub fn ProtectedRoute(allowed: &'static [Role]) -> impl IntoView {
    let location = use_location();

    // Reading `pathname` makes this re-run on every navigation. Without a
    // reachable storage medium (SSR render pass) the check stays in
    // `Checking` and hydration settles it.
    let decision = move || {
        let path = location.pathname.get();
        let Some(store) = SessionStore::from_browser() else {
            return AccessDecision::Checking;
        };
        let decision = evaluate_access(store.load(), allowed);
        match &decision {
            AccessDecision::Authorized(session) => {
                log::debug!("guard: {path} allowed for role {}", session.user.role.as_str());
            }
            AccessDecision::Unauthenticated => {
                // The requested path is noted but the login flow does not
                // implement the return trip; it always lands on the
                // role dashboard.
                log::info!("guard: no session for {path}; redirecting to login");
            }
            AccessDecision::Forbidden => {
                log::info!("guard: role not permitted for {path}; redirecting to unauthorized");
            }
            AccessDecision::Checking => {}
        }
        decision
    };

    view! {
        {move || match decision() {
            AccessDecision::Checking => view! {
                <div class="guard-loading">
                    <div class="guard-loading__spinner"></div>
                </div>
            }
                .into_any(),
            AccessDecision::Unauthenticated => view! { <Redirect path="/login"/> }.into_any(),
            AccessDecision::Forbidden => view! { <Redirect path="/unauthorized"/> }.into_any(),
            AccessDecision::Authorized(_) => view! { <Outlet/> }.into_any(),
        }}
    }
}
