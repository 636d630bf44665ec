//! Admin doctor screens: list with search and create/edit form.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::components::navbar::Navbar;
#[cfg(feature = "hydrate")]
use crate::net::types::{DoctorPayload, NewDoctorUser, Role, non_empty};

/// Doctor list with an in-memory name filter and delete.
#[component]
pub fn DoctorList() -> impl IntoView {
    let doctors = LocalResource::new(|| crate::net::api::fetch_doctors());
    let search = RwSignal::new(String::new());

    let on_delete = move |id: u64| {
        #[cfg(feature = "hydrate")]
        {
            let doctors = doctors.clone();
            leptos::task::spawn_local(async move {
                if let Err(err) = crate::net::api::delete_doctor(id).await {
                    log::warn!("delete doctor {id} failed: {err}");
                }
                doctors.refetch();
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
                    <h1>"Doctors"</h1>
                    <a class="btn btn--primary" href="/admin/doctors/add">
                        "Add Doctor"
                    </a>
                </header>

                <input
                    class="search-input"
                    type="text"
                    placeholder="Search doctors by name or procedure..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />

                <Suspense fallback=move || view! { <p>"Loading doctors..."</p> }>
                    {move || {
                        doctors
                            .get()
                            .map(|result| match result {
                                Err(err) => {
                                    view! { <p class="page__error">{err.to_string()}</p> }.into_any()
                                }
                                Ok(list) => {
                                    let term = search.get().to_lowercase();
                                    let filtered: Vec<_> = list
                                        .into_iter()
                                        .filter(|d| {
                                            term.is_empty()
                                                || d.display_name().to_lowercase().contains(&term)
                                                || d.procedure
                                                    .as_deref()
                                                    .is_some_and(|p| p.to_lowercase().contains(&term))
                                        })
                                        .collect();
                                    if filtered.is_empty() {
                                        view! { <p>"No doctors found."</p> }.into_any()
                                    } else {
                                        view! {
                                            <table class="data-table">
                                                <thead>
                                                    <tr>
                                                        <th>"Name"</th>
                                                        <th>"Email"</th>
                                                        <th>"Procedure"</th>
                                                        <th>"Actions"</th>
                                                    </tr>
                                                </thead>
                                                <tbody>
                                                    {filtered
                                                        .into_iter()
                                                        .map(|d| {
                                                            let id = d.id;
                                                            let edit_href = format!("/admin/doctors/{id}/edit");
                                                            let email = d
                                                                .user
                                                                .as_ref()
                                                                .map(|u| u.email.clone())
                                                                .unwrap_or_default();
                                                            view! {
                                                                <tr>
                                                                    <td>{d.display_name()}</td>
                                                                    <td>{email}</td>
                                                                    <td>{d.procedure.clone().unwrap_or_default()}</td>
                                                                    <td>
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

/// Doctor create/edit form. Create mode also collects account credentials
/// for the new doctor's login; edit mode only touches the clinical fields
/// and the supervising admin.
#[component]
pub fn DoctorForm() -> impl IntoView {
    let params = use_params_map();
    let doctor_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<u64>().ok())
    };

    let procedure = RwSignal::new(String::new());
    let diagnosis = RwSignal::new(String::new());
    let history = RwSignal::new(String::new());
    let admin_id = RwSignal::new(String::new());
    let account_name = RwSignal::new(String::new());
    let account_email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let admins = LocalResource::new(|| crate::net::api::fetch_admins());
    let existing = LocalResource::new(move || {
        let id = doctor_id();
        async move {
            match id {
                Some(id) => crate::net::api::fetch_doctor(id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    // Default to the first admin once the list arrives.
    Effect::new(move || {
        if let Some(Ok(list)) = admins.get() {
            if admin_id.get_untracked().is_empty() {
                if let Some(first) = list.first() {
                    admin_id.set(first.id.to_string());
                }
            }
        }
    });

    // Populate the form once when the existing record arrives.
    let populated = RwSignal::new(false);
    Effect::new(move || {
        if let Some(Ok(Some(doctor))) = existing.get() {
            if !populated.get_untracked() {
                procedure.set(doctor.procedure.unwrap_or_default());
                diagnosis.set(doctor.diagnosis.unwrap_or_default());
                history.set(doctor.history.unwrap_or_default());
                if let Some(id) = doctor.admin_id {
                    admin_id.set(id.to_string());
                }
                populated.set(true);
            }
        }
    });

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let is_create = doctor_id().is_none();
        if is_create && password.get() != confirmation.get() {
            error.set(Some("Passwords do not match".to_owned()));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            pending.set(true);
            error.set(None);
            let user = is_create.then(|| NewDoctorUser {
                name: account_name.get().trim().to_owned(),
                email: account_email.get().trim().to_owned(),
                password: password.get(),
                password_confirmation: confirmation.get(),
                role: Role::Doctor,
            });
            let payload = DoctorPayload {
                procedure: non_empty(&procedure.get()),
                diagnosis: non_empty(&diagnosis.get()),
                history: non_empty(&history.get()),
                admin_id: admin_id.get().trim().parse().ok(),
                user,
            };
            let id = doctor_id();
            leptos::task::spawn_local(async move {
                let result = match id {
                    Some(id) => crate::net::api::update_doctor(id, &payload).await,
                    None => crate::net::api::create_doctor(&payload).await,
                };
                match result {
                    Ok(_) => navigate("/admin/doctors", NavigateOptions::default()),
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
                <h1>{move || if doctor_id().is_some() { "Edit Doctor" } else { "Add Doctor" }}</h1>

                <Show when=move || error.get().is_some()>
                    <div class="form__error">{move || error.get()}</div>
                </Show>

                <form class="form" on:submit=submit>
                    <Show when=move || doctor_id().is_none()>
                        <label>
                            "Full Name"
                            <input
                                type="text"
                                required
                                prop:value=move || account_name.get()
                                on:input=move |ev| account_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Email"
                            <input
                                type="email"
                                required
                                prop:value=move || account_email.get()
                                on:input=move |ev| account_email.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Password"
                            <input
                                type="password"
                                required
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Confirm Password"
                            <input
                                type="password"
                                required
                                prop:value=move || confirmation.get()
                                on:input=move |ev| confirmation.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>

                    <label>
                        "Procedure"
                        <input
                            type="text"
                            prop:value=move || procedure.get()
                            on:input=move |ev| procedure.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Diagnosis Expertise"
                        <input
                            type="text"
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
                        "Supervising Admin"
                        <Suspense fallback=move || view! { <select disabled><option>"Loading..."</option></select> }>
                            {move || {
                                admins
                                    .get()
                                    .map(|result| {
                                        let list = result.unwrap_or_default();
                                        view! {
                                            <select on:change=move |ev| admin_id.set(event_target_value(&ev))>
                                                {list
                                                    .into_iter()
                                                    .map(|a| {
                                                        let value = a.id.to_string();
                                                        let selected_value = value.clone();
                                                        view! {
                                                            <option
                                                                value=value
                                                                selected=move || admin_id.get() == selected_value
                                                            >
                                                                {a.display_name()}
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
                        <a class="btn" href="/admin/doctors">
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
