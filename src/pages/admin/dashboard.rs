//! Admin dashboard: headline counts, quick actions, and recent records.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::types::Patient;

/// Admin landing page. Shows patient/doctor counts, quick links into the
/// CRUD screens, and the five most recent patients.
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let patients = LocalResource::new(|| crate::net::api::fetch_patients());
    let doctors = LocalResource::new(|| crate::net::api::fetch_doctors());

    let patient_count = move || {
        patients
            .get()
            .and_then(|result| result.map(|list| list.len()).ok())
    };
    let doctor_count = move || {
        doctors
            .get()
            .and_then(|result| result.map(|list| list.len()).ok())
    };

    let recent_patients = move || {
        patients.get().and_then(|result| {
            result
                .map(|list| list.into_iter().take(5).collect::<Vec<Patient>>())
                .ok()
        })
    };

    view! {
        <div class="page">
            <Navbar/>

            <div class="page__body">
                <h1>"Admin Dashboard"</h1>

                <div class="stat-cards">
                    <div class="stat-card">
                        <span class="stat-card__label">"Total Patients"</span>
                        <span class="stat-card__value">
                            {move || patient_count().map_or_else(|| "-".to_owned(), |n| n.to_string())}
                        </span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Total Doctors"</span>
                        <span class="stat-card__value">
                            {move || doctor_count().map_or_else(|| "-".to_owned(), |n| n.to_string())}
                        </span>
                    </div>
                </div>

                <div class="quick-actions">
                    <a class="btn btn--primary" href="/admin/patients/add">
                        "Add Patient"
                    </a>
                    <a class="btn btn--primary" href="/admin/doctors/add">
                        "Add Doctor"
                    </a>
                    <a class="btn" href="/admin/patients">
                        "View Patients"
                    </a>
                    <a class="btn" href="/admin/doctors">
                        "View Doctors"
                    </a>
                    <a class="btn" href="/admin/billing">
                        "View Billing"
                    </a>
                </div>

                <section class="dashboard-section">
                    <h2>"Recent Patients"</h2>
                    <Suspense fallback=move || view! { <p>"Loading patients..."</p> }>
                        {move || {
                            recent_patients()
                                .map(|list| {
                                    if list.is_empty() {
                                        view! { <p>"No patients yet."</p> }.into_any()
                                    } else {
                                        view! {
                                            <table class="data-table">
                                                <thead>
                                                    <tr>
                                                        <th>"Name"</th>
                                                        <th>"Diagnosis"</th>
                                                        <th>"Actions"</th>
                                                    </tr>
                                                </thead>
                                                <tbody>
                                                    {list
                                                        .into_iter()
                                                        .map(|p| {
                                                            let view_href = format!("/admin/patients/{}", p.id);
                                                            let edit_href = format!("/admin/patients/{}/edit", p.id);
                                                            view! {
                                                                <tr>
                                                                    <td>{p.full_name()}</td>
                                                                    <td>{p.diagnosis.clone()}</td>
                                                                    <td>
                                                                        <a class="link" href=view_href>"View"</a>
                                                                        <a class="link" href=edit_href>"Edit"</a>
                                                                    </td>
                                                                </tr>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </tbody>
                                            </table>
                                        }
                                            .into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </section>
            </div>
        </div>
    }
}
