//! Static access-denied screen, the target of a `Forbidden` guard decision.

use leptos::prelude::*;

/// Shown when an authenticated user's role does not permit the requested
/// screen. Not an application error; the way out is the home link.
#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="unauthorized-page">
            <div class="unauthorized-page__card">
                <h2>"Access Denied"</h2>
                <p>"You do not have permission to access this page."</p>
                <a class="btn btn--primary" href="/">
                    "Go Home"
                </a>
            </div>
        </div>
    }
}
