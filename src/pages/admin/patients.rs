//! Admin patient screens: list with search, create/edit form, detail view.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::components::navbar::Navbar;
#[cfg(feature = "hydrate")]
use crate::net::types::{PatientPayload, non_empty};

/// Patient list with an in-memory name/diagnosis filter and delete.
#[component]
pub fn PatientList() -> impl IntoView {
    let patients = LocalResource::new(|| crate::net::api::fetch_patients());
    let search = RwSignal::new(String::new());

    let on_delete = move |id: u64| {
        #[cfg(feature = "hydrate")]
        {
            let patients = patients.clone();
            leptos::task::spawn_local(async move {
                if let Err(err) = crate::net::api::delete_patient(id).await {
                    log::warn!("delete patient {id} failed: {err}");
                }
                patients.refetch();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    view! {
        <div class="page">
            <Navbar/>

            <div class="page__body">
                <header class="page__header">
                    <h1>"Patients"</h1>
                    <a class="btn btn--primary" href="/admin/patients/add">
                        "Add Patient"
                    </a>
                </header>

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
                                    let term = search.get();
                                    let filtered: Vec<_> = list
                                        .into_iter()
                                        .filter(|p| p.matches_search(&term))
                                        .collect();
                                    if filtered.is_empty() {
                                        view! { <p>"No patients found."</p> }.into_any()
                                    } else {
                                        view! {
                                            <table class="data-table">
                                                <thead>
                                                    <tr>
                                                        <th>"Name"</th>
                                                        <th>"Age"</th>
                                                        <th>"Gender"</th>
                                                        <th>"Diagnosis"</th>
                                                        <th>"Actions"</th>
                                                    </tr>
                                                </thead>
                                                <tbody>
                                                    {filtered
                                                        .into_iter()
                                                        .map(|p| {
                                                            let id = p.id;
                                                            let view_href = format!("/admin/patients/{id}");
                                                            let edit_href = format!("/admin/patients/{id}/edit");
                                                            view! {
                                                                <tr>
                                                                    <td>{p.full_name()}</td>
                                                                    <td>{p.age.map_or_else(String::new, |a| a.to_string())}</td>
                                                                    <td>{p.gender.clone().unwrap_or_default()}</td>
                                                                    <td>{p.diagnosis.clone()}</td>
                                                                    <td>
                                                                        <a class="link" href=view_href>"View"</a>
                                                                        <a class="link" href=edit_href>"Edit"</a>
                                                                        <button
                                                                            class="link link--danger"
                                                                            on:click=move |_| on_delete(id)
                                                                        >
                                                                            "Delete"
                                                                        </button>
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

/// Patient create/edit form. Edit mode is selected by the presence of the
/// `:id` route parameter; the existing record populates the fields once.
#[component]
pub fn PatientForm() -> impl IntoView {
    let params = use_params_map();
    let patient_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<u64>().ok())
    };

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let dob = RwSignal::new(String::new());
    let gender = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let spouse = RwSignal::new(String::new());
    let diagnosis = RwSignal::new(String::new());
    let history = RwSignal::new(String::new());
    let procedure = RwSignal::new(String::new());
    let prescription = RwSignal::new(String::new());
    let doctor_id = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let doctors = LocalResource::new(|| crate::net::api::fetch_doctors());
    let existing = LocalResource::new(move || {
        let id = patient_id();
        async move {
            match id {
                Some(id) => crate::net::api::fetch_patient(id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    // Populate the form once when the existing record arrives.
    let populated = RwSignal::new(false);
    Effect::new(move || {
        if let Some(Ok(Some(patient))) = existing.get() {
            if !populated.get_untracked() {
                first_name.set(patient.first_name);
                last_name.set(patient.last_name);
                age.set(patient.age.map_or_else(String::new, |a| a.to_string()));
                dob.set(patient.dob.unwrap_or_default());
                gender.set(patient.gender.unwrap_or_default());
                address.set(patient.address.unwrap_or_default());
                spouse.set(patient.spouse.unwrap_or_default());
                diagnosis.set(patient.diagnosis);
                history.set(patient.history.unwrap_or_default());
                procedure.set(patient.procedure.unwrap_or_default());
                prescription.set(patient.prescription.unwrap_or_default());
                doctor_id.set(patient.doctor_id.map_or_else(String::new, |d| d.to_string()));
                populated.set(true);
            }
        }
    });

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            pending.set(true);
            error.set(None);
            let payload = PatientPayload {
                first_name: first_name.get().trim().to_owned(),
                last_name: last_name.get().trim().to_owned(),
                age: age.get().trim().parse().ok(),
                dob: non_empty(&dob.get()),
                gender: non_empty(&gender.get()),
                address: non_empty(&address.get()),
                spouse: non_empty(&spouse.get()),
                diagnosis: diagnosis.get().trim().to_owned(),
                history: non_empty(&history.get()),
                procedure: non_empty(&procedure.get()),
                prescription: non_empty(&prescription.get()),
                doctor_id: doctor_id.get().trim().parse().ok(),
            };
            let id = patient_id();
            leptos::task::spawn_local(async move {
                let result = match id {
                    Some(id) => crate::net::api::update_patient(id, &payload).await,
                    None => crate::net::api::create_patient(&payload).await,
                };
                match result {
                    Ok(_) => navigate("/admin/patients", NavigateOptions::default()),
                    Err(err) => error.set(Some(err.to_string())),
                }
                pending.set(false);
            });
        }
    };

    view! {
        <div class="page">
            <Navbar/>

            <div class="page__body page__body--narrow">
                <h1>{move || if patient_id().is_some() { "Edit Patient" } else { "Add Patient" }}</h1>

                <Show when=move || error.get().is_some()>
                    <div class="form__error">{move || error.get()}</div>
                </Show>

                <form class="form" on:submit=submit>
                    <label>
                        "First Name"
                        <input
                            type="text"
                            required
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Last Name"
                        <input
                            type="text"
                            required
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Age"
                        <input
                            type="number"
                            prop:value=move || age.get()
                            on:input=move |ev| age.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Date of Birth"
                        <input
                            type="date"
                            prop:value=move || dob.get()
                            on:input=move |ev| dob.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Gender"
                        <select on:change=move |ev| gender.set(event_target_value(&ev))>
                            <option value="" selected=move || gender.get().is_empty()>
                                "Select..."
                            </option>
                            <option value="male" selected=move || gender.get() == "male">
                                "Male"
                            </option>
                            <option value="female" selected=move || gender.get() == "female">
                                "Female"
                            </option>
                            <option value="other" selected=move || gender.get() == "other">
                                "Other"
                            </option>
                        </select>
                    </label>
                    <label>
                        "Address"
                        <input
                            type="text"
                            prop:value=move || address.get()
                            on:input=move |ev| address.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Spouse"
                        <input
                            type="text"
                            prop:value=move || spouse.get()
                            on:input=move |ev| spouse.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Diagnosis"
                        <input
                            type="text"
                            required
                            prop:value=move || diagnosis.get()
                            on:input=move |ev| diagnosis.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "History"
                        <textarea
                            prop:value=move || history.get()
                            on:input=move |ev| history.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label>
                        "Procedure"
                        <input
                            type="text"
                            prop:value=move || procedure.get()
                            on:input=move |ev| procedure.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Prescription"
                        <textarea
                            prop:value=move || prescription.get()
                            on:input=move |ev| prescription.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label>
                        "Assigned Doctor"
                        <Suspense fallback=move || view! { <select disabled><option>"Loading..."</option></select> }>
                            {move || {
                                doctors
                                    .get()
                                    .map(|result| {
                                        let list = result.unwrap_or_default();
                                        view! {
                                            <select on:change=move |ev| doctor_id.set(event_target_value(&ev))>
                                                <option value="" selected=move || doctor_id.get().is_empty()>
                                                    "Unassigned"
                                                </option>
                                                {list
                                                    .into_iter()
                                                    .map(|d| {
                                                        let value = d.id.to_string();
                                                        let selected_value = value.clone();
                                                        view! {
                                                            <option
                                                                value=value
                                                                selected=move || doctor_id.get() == selected_value
                                                            >
                                                                {d.display_name()}
                                                            </option>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </select>
                                        }
                                    })
                            }}
                        </Suspense>
                    </label>

                    <div class="form__actions">
                        <a class="btn" href="/admin/patients">
                            "Cancel"
                        </a>
                        <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                            {move || if pending.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Read-only patient detail view.
#[component]
pub fn PatientView() -> impl IntoView {
    let params = use_params_map();
    let patient_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<u64>().ok())
    };

    let patient = LocalResource::new(move || {
        let id = patient_id();
        async move {
            match id {
                Some(id) => crate::net::api::fetch_patient(id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    view! {
        <div class="page">
            <Navbar/>

            <div class="page__body page__body--narrow">
                <Suspense fallback=move || view! { <p>"Loading patient..."</p> }>
                    {move || {
                        patient
                            .get()
                            .map(|result| match result {
                                Err(err) => {
                                    view! { <p class="page__error">{err.to_string()}</p> }.into_any()
                                }
                                Ok(None) => view! { <p>"Patient not found."</p> }.into_any(),
                                Ok(Some(p)) => {
                                    let edit_href = format!("/admin/patients/{}/edit", p.id);
                                    view! {
                                        <header class="page__header">
                                            <h1>{p.full_name()}</h1>
                                            <a class="btn btn--primary" href=edit_href>
                                                "Edit"
                                            </a>
                                        </header>
                                        <dl class="detail-list">
                                            <dt>"Age"</dt>
                                            <dd>{p.age.map_or_else(String::new, |a| a.to_string())}</dd>
                                            <dt>"Date of Birth"</dt>
                                            <dd>{p.dob.clone().unwrap_or_default()}</dd>
                                            <dt>"Gender"</dt>
                                            <dd>{p.gender.clone().unwrap_or_default()}</dd>
                                            <dt>"Address"</dt>
                                            <dd>{p.address.clone().unwrap_or_default()}</dd>
                                            <dt>"Spouse"</dt>
                                            <dd>{p.spouse.clone().unwrap_or_default()}</dd>
                                            <dt>"Diagnosis"</dt>
                                            <dd>{p.diagnosis.clone()}</dd>
                                            <dt>"History"</dt>
                                            <dd>{p.history.clone().unwrap_or_default()}</dd>
                                            <dt>"Procedure"</dt>
                                            <dd>{p.procedure.clone().unwrap_or_default()}</dd>
                                            <dt>"Prescription"</dt>
                                            <dd>{p.prescription.clone().unwrap_or_default()}</dd>
                                        </dl>
                                        <a class="link" href="/admin/patients">
                                            "Back to patients"
                                        </a>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>
        </div>
    }
}
