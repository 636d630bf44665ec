//! Doctor-role patient update: clinical fields only.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::components::navbar::Navbar;
#[cfg(feature = "hydrate")]
use crate::net::types::{ClinicalUpdate, non_empty};

/// Update form for a doctor's own patient. Only the clinical fields are
/// editable; demographics belong to the admin screens.
#[component]
pub fn UpdatePatient() -> impl IntoView {
    let params = use_params_map();
    let patient_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<u64>().ok())
    };

    let diagnosis = RwSignal::new(String::new());
    let history = RwSignal::new(String::new());
    let procedure = RwSignal::new(String::new());
    let prescription = RwSignal::new(String::new());
    let patient_name = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let existing = LocalResource::new(move || {
        let id = patient_id();
        async move {
            match id {
                Some(id) => crate::net::api::fetch_patient(id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    let populated = RwSignal::new(false);
    Effect::new(move || {
        if let Some(Ok(Some(patient))) = existing.get() {
            if !populated.get_untracked() {
                patient_name.set(patient.full_name());
                diagnosis.set(patient.diagnosis);
                history.set(patient.history.unwrap_or_default());
                procedure.set(patient.procedure.unwrap_or_default());
                prescription.set(patient.prescription.unwrap_or_default());
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
            let Some(id) = patient_id() else {
                return;
            };
            let navigate = navigate.clone();
            pending.set(true);
            error.set(None);
            let update = ClinicalUpdate {
                diagnosis: diagnosis.get().trim().to_owned(),
                history: non_empty(&history.get()),
                procedure: non_empty(&procedure.get()),
                prescription: non_empty(&prescription.get()),
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::update_patient_clinical(id, &update).await {
                    Ok(_) => navigate("/doctor/dashboard", NavigateOptions::default()),
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
                <h1>"Update Patient"</h1>
                <p class="page__subtitle">{move || patient_name.get()}</p>

                <Show when=move || error.get().is_some()>
                    <div class="form__error">{move || error.get()}</div>
                </Show>

                <form class="form" on:submit=submit>
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

                    <div class="form__actions">
                        <a class="btn" href="/doctor/dashboard">
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
