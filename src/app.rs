//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::pages::admin::dashboard::AdminDashboard;
use crate::pages::admin::doctors::{DoctorForm, DoctorList};
use crate::pages::admin::patients::{PatientForm, PatientList, PatientView};
use crate::pages::billing::BillingList;
use crate::pages::doctor::dashboard::DoctorDashboard;
use crate::pages::doctor::update_patient::UpdatePatient;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::unauthorized::UnauthorizedPage;
use crate::state::auth::{ADMIN_ONLY, AuthState, DOCTOR_ONLY};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Provides the shared auth context, reconstructs the persisted session
/// once the browser is available, and sets up client-side routing. The
/// route table mirrors the screen set: two public entry routes, a static
/// access-denied page, and two role-guarded subtrees.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Load the persisted session on the client and watch for logout in
    // other tabs. Effects never run during SSR, so the server renders
    // with an empty auth state and hydration fills it in.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let session =
                crate::state::session::SessionStore::from_browser().and_then(|s| s.load());
            auth.update(|state| state.session = session);
            crate::state::session::watch_external_logout(auth);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/medicare-client.css"/>
        <Title text="MediCare"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/login"/> }>
                // Public routes.
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>

                // Admin subtree.
                <ParentRoute path=StaticSegment("admin") view=AdminSection>
                    <Route path=StaticSegment("dashboard") view=AdminDashboard/>
                    <Route path=StaticSegment("patients") view=PatientList/>
                    <Route path=(StaticSegment("patients"), StaticSegment("add")) view=PatientForm/>
                    <Route path=(StaticSegment("patients"), ParamSegment("id")) view=PatientView/>
                    <Route
                        path=(StaticSegment("patients"), ParamSegment("id"), StaticSegment("edit"))
                        view=PatientForm
                    />
                    <Route path=StaticSegment("doctors") view=DoctorList/>
                    <Route path=(StaticSegment("doctors"), StaticSegment("add")) view=DoctorForm/>
                    <Route
                        path=(StaticSegment("doctors"), ParamSegment("id"), StaticSegment("edit"))
                        view=DoctorForm
                    />
                    <Route path=StaticSegment("billing") view=BillingList/>
                </ParentRoute>

                // Doctor subtree.
                <ParentRoute path=StaticSegment("doctor") view=DoctorSection>
                    <Route path=StaticSegment("dashboard") view=DoctorDashboard/>
                    <Route
                        path=(StaticSegment("patients"), ParamSegment("id"), StaticSegment("update"))
                        view=UpdatePatient
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Admin-only guard mounted at the head of the `/admin` subtree.
#[component]
fn AdminSection() -> impl IntoView {
    view! { <ProtectedRoute allowed=ADMIN_ONLY/> }
}

/// Doctor-only guard mounted at the head of the `/doctor` subtree.
#[component]
fn DoctorSection() -> impl IntoView {
    view! { <ProtectedRoute allowed=DOCTOR_ONLY/> }
}
