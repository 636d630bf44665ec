//! Authenticated request pipeline and REST endpoint helpers.
//!
//! Every call the screens make funnels through [`send`]: the one place
//! that attaches the bearer credential on the way out and watches for an
//! authentication rejection on the way back. A 401 from any endpoint
//! clears the persisted session and forces navigation to the login
//! screen, unless the user is already there: a failed login
//! attempt legitimately answers 401 and must not redirect in a loop.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`], since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed [`ApiError`]; screens render its `Display` text.
//! There are no retries: a rejected credential means the user signs in
//! again.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::error::ApiError;
use crate::net::types::{
    Admin, AuthResponse, Billing, ClinicalUpdate, Doctor, DoctorPayload, LoginRequest, Patient,
    PatientPayload, PaymentUpdate, RegisterRequest,
};

/// Base URL of the MediCare REST API. Overridable at build time.
pub fn api_url() -> &'static str {
    option_env!("MEDICARE_API_URL").unwrap_or("http://doctor-back.test/api")
}

/// HTTP verbs the API surface uses.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// Header value for a stored bearer token.
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Whether a response status signals that the credential was rejected.
pub fn is_auth_rejection(status: u16) -> bool {
    status == 401
}

/// Whether an auth rejection at `current_path` should force navigation to
/// the login screen. Already being on `/login` suppresses the redirect so
/// a failed login attempt cannot loop.
pub fn should_force_login(current_path: &str) -> bool {
    current_path != "/login"
}

/// Human-readable message for a non-2xx response. Prefers the server's
/// `message` field when the body carries one.
pub fn error_message(status: u16, body: Option<&serde_json::Value>) -> String {
    body.and_then(|b| b.get("message"))
        .and_then(serde_json::Value::as_str)
        .map_or_else(
            || format!("Request failed with status {status}"),
            ToOwned::to_owned,
        )
}

#[cfg(feature = "hydrate")]
fn json_body<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|_| ApiError::Decode)
}

/// React to a rejected credential: drop the session, then navigate to
/// the login screen unless the user is already on it.
#[cfg(feature = "hydrate")]
fn on_auth_rejected() {
    log::warn!("api: credential rejected by server; clearing session");
    if let Some(store) = crate::state::session::SessionStore::from_browser() {
        store.clear();
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let current = window.location().pathname().unwrap_or_default();
    if should_force_login(&current) {
        let _ = window.location().set_href("/login");
    }
}

/// The single chokepoint every outgoing request passes through: attaches
/// the bearer header when a session exists, and runs the auth-rejection
/// check on every response before the caller sees it.
#[cfg(feature = "hydrate")]
async fn send(
    verb: Verb,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::Request;

    let url = format!("{}{path}", api_url());
    let builder = match verb {
        Verb::Get => Request::get(&url),
        Verb::Post => Request::post(&url),
        Verb::Put => Request::put(&url),
        Verb::Delete => Request::delete(&url),
    };
    let mut builder = builder.header("Accept", "application/json");

    if let Some(session) =
        crate::state::session::SessionStore::from_browser().and_then(|s| s.load())
    {
        builder = builder.header("Authorization", &bearer_value(&session.token));
    }

    let request = match body {
        Some(json) => builder.json(&json).map_err(|_| ApiError::Decode)?,
        None => builder.build().map_err(|_| ApiError::Decode)?,
    };

    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if is_auth_rejection(response.status()) {
        on_auth_rejected();
        return Err(ApiError::AuthRejected);
    }
    Ok(response)
}

#[cfg(feature = "hydrate")]
async fn request_json<T: serde::de::DeserializeOwned>(
    verb: Verb,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    let response = send(verb, path, body).await?;
    let status = response.status();
    if !response.ok() {
        let body = response.json::<serde_json::Value>().await.ok();
        return Err(ApiError::Http {
            status,
            message: error_message(status, body.as_ref()),
        });
    }
    response.json::<T>().await.map_err(|_| ApiError::Decode)
}

#[cfg(feature = "hydrate")]
async fn request_unit(
    verb: Verb,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<(), ApiError> {
    let response = send(verb, path, body).await?;
    let status = response.status();
    if !response.ok() {
        let body = response.json::<serde_json::Value>().await.ok();
        return Err(ApiError::Http {
            status,
            message: error_message(status, body.as_ref()),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------

/// Exchange credentials for a token and user profile via `POST /login`.
pub async fn login(credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(Verb::Post, "/login", Some(json_body(credentials)?)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /register`; responds like a login.
pub async fn register(details: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(Verb::Post, "/register", Some(json_body(details)?)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = details;
        Err(ApiError::Unavailable)
    }
}

/// Invalidate the credential server-side via `POST /logout`. The caller
/// clears the local session whether or not this succeeds.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_unit(Verb::Post, "/logout", None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

// ---------------------------------------------------------------------
// Admins
// ---------------------------------------------------------------------

/// List administrators (the doctor form picks a supervising admin).
pub async fn fetch_admins() -> Result<Vec<Admin>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(Verb::Get, "/admins", None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

// ---------------------------------------------------------------------
// Doctors
// ---------------------------------------------------------------------

pub async fn fetch_doctors() -> Result<Vec<Doctor>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(Verb::Get, "/doctors", None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

pub async fn fetch_doctor(id: u64) -> Result<Doctor, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(Verb::Get, &format!("/doctors/{id}"), None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

pub async fn create_doctor(payload: &DoctorPayload) -> Result<Doctor, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(Verb::Post, "/doctors", Some(json_body(payload)?)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

pub async fn update_doctor(id: u64, payload: &DoctorPayload) -> Result<Doctor, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(Verb::Put, &format!("/doctors/{id}"), Some(json_body(payload)?)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err(ApiError::Unavailable)
    }
}

pub async fn delete_doctor(id: u64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_unit(Verb::Delete, &format!("/doctors/{id}"), None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

// ---------------------------------------------------------------------
// Patients
// ---------------------------------------------------------------------

pub async fn fetch_patients() -> Result<Vec<Patient>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(Verb::Get, "/patients", None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

pub async fn fetch_patient(id: u64) -> Result<Patient, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(Verb::Get, &format!("/patients/{id}"), None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

pub async fn create_patient(payload: &PatientPayload) -> Result<Patient, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(Verb::Post, "/patients", Some(json_body(payload)?)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

pub async fn update_patient(id: u64, payload: &PatientPayload) -> Result<Patient, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(Verb::Put, &format!("/patients/{id}"), Some(json_body(payload)?)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err(ApiError::Unavailable)
    }
}

/// Doctor-role update of the clinical fields on one of their patients.
pub async fn update_patient_clinical(id: u64, update: &ClinicalUpdate) -> Result<Patient, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(Verb::Put, &format!("/patients/{id}"), Some(json_body(update)?)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, update);
        Err(ApiError::Unavailable)
    }
}

pub async fn delete_patient(id: u64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_unit(Verb::Delete, &format!("/patients/{id}"), None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Patients assigned to the signed-in doctor via `GET /doctor/patients`.
pub async fn fetch_doctor_patients() -> Result<Vec<Patient>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(Verb::Get, "/doctor/patients", None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

// ---------------------------------------------------------------------
// Billing
// ---------------------------------------------------------------------

pub async fn fetch_billings() -> Result<Vec<Billing>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(Verb::Get, "/billings", None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Record a payment against a billing record via `PUT /billings/:id`.
pub async fn update_billing(id: u64, update: PaymentUpdate) -> Result<Billing, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(Verb::Put, &format!("/billings/{id}"), Some(json_body(&update)?)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, update);
        Err(ApiError::Unavailable)
    }
}
