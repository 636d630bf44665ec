//! Billing list: payment state per patient with a record-payment action.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::types::BillingStatus;
#[cfg(feature = "hydrate")]
use crate::net::types::PaymentUpdate;

/// Billing records for all patients. Recording a payment prompts for an
/// amount, derives the paid/pending status from payment versus amount,
/// and sends both with the update before refetching.
#[component]
pub fn BillingList() -> impl IntoView {
    let billings = LocalResource::new(|| crate::net::api::fetch_billings());
    let error = RwSignal::new(None::<String>);

    let on_record_payment = move |id: u64, current: f64, amount: f64| {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let message = format!(
                "Current Payment: ${current:.2}\nTotal Bill: ${amount:.2}\nEnter payment amount:"
            );
            let entered = window
                .prompt_with_message_and_default(&message, &format!("{current:.2}"))
                .unwrap_or(None);
            let Some(entered) = entered else {
                return; // User canceled.
            };
            let Some(update) = PaymentUpdate::parse(&entered, amount) else {
                error.set(Some("Please enter a valid payment amount".to_owned()));
                return;
            };
            error.set(None);
            let billings = billings.clone();
            leptos::task::spawn_local(async move {
                if let Err(err) = crate::net::api::update_billing(id, update).await {
                    error.set(Some(err.to_string()));
                }
                billings.refetch();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, current, amount);
        }
    };

    view! {
        <div class="page">
            <Navbar/>

            <div class="page__body">
                <h1>"Billing"</h1>

                <Show when=move || error.get().is_some()>
                    <div class="page__error">{move || error.get()}</div>
                </Show>

                <Suspense fallback=move || view! { <p>"Loading billing records..."</p> }>
                    {move || {
                        billings
                            .get()
                            .map(|result| match result {
                                Err(err) => {
                                    view! { <p class="page__error">{err.to_string()}</p> }.into_any()
                                }
                                Ok(list) => {
                                    if list.is_empty() {
                                        view! { <p>"No billing records."</p> }.into_any()
                                    } else {
                                        view! {
                                            <table class="data-table">
                                                <thead>
                                                    <tr>
                                                        <th>"Patient"</th>
                                                        <th>"Amount"</th>
                                                        <th>"Payment"</th>
                                                        <th>"Status"</th>
                                                        <th>"Actions"</th>
                                                    </tr>
                                                </thead>
                                                <tbody>
                                                    {list
                                                        .into_iter()
                                                        .map(|b| {
                                                            let id = b.id;
                                                            let amount = b.amount;
                                                            let payment = b.payment.unwrap_or(0.0);
                                                            let status_class = match b.status {
                                                                BillingStatus::Paid => "badge badge--paid",
                                                                BillingStatus::Pending => "badge badge--pending",
                                                            };
                                                            let status_label = match b.status {
                                                                BillingStatus::Paid => "Paid",
                                                                BillingStatus::Pending => "Pending",
                                                            };
                                                            view! {
                                                                <tr>
                                                                    <td>{b.patient_name()}</td>
                                                                    <td>{format!("${amount:.2}")}</td>
                                                                    <td>{format!("${payment:.2}")}</td>
                                                                    <td>
                                                                        <span class=status_class>{status_label}</span>
                                                                    </td>
                                                                    <td>
                                                                        <button
                                                                            class="link"
                                                                            on:click=move |_| on_record_payment(id, payment, amount)
                                                                        >
                                                                            "Record Payment"
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
