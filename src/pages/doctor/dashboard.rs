//! Doctor dashboard: the signed-in doctor's patients with a search filter.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

/// Doctor landing page. Lists only the patients assigned to the signed-in
/// doctor; the server resolves the doctor from the bearer credential.
#[component]
pub fn DoctorDashboard() -> impl IntoView {
    let patients = LocalResource::new(|| crate::net::api::fetch_doctor_patients());
    let search = RwSignal::new(String::new());

    view! {
        <div class="page">
            <Navbar/>

            <div class="page__body">
                <h1>"Doctor Dashboard"</h1>

                <input
                    class="search-input"
                    type="text"
                    placeholder="Search patients by name or diagnosis..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />

                <Suspense fallback=move || view! { <p>"Loading patients..."</p> }>
                    {move || {
                        patients
                            .get()
                            .map(|result| match result {
                                Err(err) => {
                                    view! { <p class="page__error">{err.to_string()}</p> }.into_any()
                                }
                                Ok(list) => {
                                    let had_any = !list.is_empty();
                                    let term = search.get();
                                    let filtered: Vec<_> = list
                                        .into_iter()
                                        .filter(|p| p.matches_search(&term))
                                        .collect();
                                    if filtered.is_empty() {
                                        let empty = if had_any {
                                            "No patients found."
                                        } else {
                                            "No patients assigned to you."
                                        };
                                        view! { <p>{empty}</p> }.into_any()
                                    } else {
                                        view! {
                                            <table class="data-table">
                                                <thead>
                                                    <tr>
                                                        <th>"Name"</th>
                                                        <th>"Age"</th>
                                                        <th>"Diagnosis"</th>
                                                        <th>"Prescription"</th>
                                                        <th>"Actions"</th>
                                                    </tr>
                                                </thead>
                                                <tbody>
                                                    {filtered
                                                        .into_iter()
                                                        .map(|p| {
                                                            let update_href =
                                                                format!("/doctor/patients/{}/update", p.id);
                                                            view! {
                                                                <tr>
                                                                    <td>{p.full_name()}</td>
                                                                    <td>{p.age.map_or_else(String::new, |a| a.to_string())}</td>
                                                                    <td>{p.diagnosis.clone()}</td>
                                                                    <td>{p.prescription.clone().unwrap_or_default()}</td>
                                                                    <td>
                                                                        <a class="link" href=update_href>
                                                                            "Update"
                                                                        </a>
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
                                }
                            })
                    }}
                </Suspense>
            </div>
        </div>
    }
}
