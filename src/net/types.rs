//! Wire types shared with the MediCare REST API.
//!
//! Field names mirror the server's JSON. Optional fields default to absent
//! on deserialization so older records with missing columns still load.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Closed set of account roles. Unknown role strings fail to deserialize,
/// which the session store treats as corrupt storage (no session).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Doctor,
}

impl Role {
    /// Wire/display spelling of the role tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
        }
    }

    /// Landing page for this role after login.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Admin => "/admin/dashboard",
            Role::Doctor => "/doctor/dashboard",
        }
    }
}

/// An authenticated account as returned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Successful login/registration response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub role: Role,
}

/// A patient record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub spouse: Option<String>,
    #[serde(default)]
    pub diagnosis: String,
    #[serde(default)]
    pub history: Option<String>,
    #[serde(default)]
    pub procedure: Option<String>,
    #[serde(default)]
    pub prescription: Option<String>,
    #[serde(default)]
    pub doctor_id: Option<u64>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive substring match over name and diagnosis, used by
    /// the in-memory list filters.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.full_name().to_lowercase().contains(&term)
            || self.diagnosis.to_lowercase().contains(&term)
    }
}

/// Create/update body for a patient.
#[derive(Clone, Debug, Default, Serialize)]
pub struct PatientPayload {
    pub first_name: String,
    pub last_name: String,
    pub age: Option<u32>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub spouse: Option<String>,
    pub diagnosis: String,
    pub history: Option<String>,
    pub procedure: Option<String>,
    pub prescription: Option<String>,
    pub doctor_id: Option<u64>,
}

/// Clinical fields a doctor may update on their own patients.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ClinicalUpdate {
    pub diagnosis: String,
    pub history: Option<String>,
    pub procedure: Option<String>,
    pub prescription: Option<String>,
}

/// A doctor record. `user` carries the linked account when the server
/// includes it in the payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: u64,
    #[serde(default)]
    pub procedure: Option<String>,
    #[serde(default)]
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub history: Option<String>,
    #[serde(default)]
    pub admin_id: Option<u64>,
    #[serde(default)]
    pub user: Option<User>,
}

impl Doctor {
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map_or_else(|| format!("Doctor #{}", self.id), |u| u.name.clone())
    }
}

/// Account credentials for a doctor created through the admin screen.
#[derive(Clone, Debug, Serialize)]
pub struct NewDoctorUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub role: Role,
}

/// Create/update body for a doctor. `user` is only sent on create.
#[derive(Clone, Debug, Serialize)]
pub struct DoctorPayload {
    pub procedure: Option<String>,
    pub diagnosis: Option<String>,
    pub history: Option<String>,
    pub admin_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<NewDoctorUser>,
}

/// An administrator record, used to pick a supervising admin on the
/// doctor form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    pub id: u64,
    #[serde(default)]
    pub user: Option<User>,
}

impl Admin {
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map_or_else(|| format!("Admin #{}", self.id), |u| u.name.clone())
    }
}

/// Payment state of a billing record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingStatus {
    Paid,
    Pending,
}

impl BillingStatus {
    /// A bill is paid once recorded payments cover the full amount.
    pub fn from_amounts(payment: f64, amount: f64) -> Self {
        if payment >= amount {
            BillingStatus::Paid
        } else {
            BillingStatus::Pending
        }
    }
}

/// A billing record for a patient.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Billing {
    pub id: u64,
    pub patient_id: u64,
    #[serde(default)]
    pub patient: Option<Patient>,
    pub amount: f64,
    #[serde(default)]
    pub payment: Option<f64>,
    pub status: BillingStatus,
}

impl Billing {
    pub fn patient_name(&self) -> String {
        self.patient
            .as_ref()
            .map_or_else(|| format!("Patient #{}", self.patient_id), Patient::full_name)
    }
}

/// Body for recording a payment against a billing record. Carries the
/// status derived from the new payment so the server stores both.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct PaymentUpdate {
    pub payment: f64,
    pub status: BillingStatus,
}

impl PaymentUpdate {
    /// Parse a user-entered payment amount against the billed total.
    /// Negative, non-finite, and non-numeric input is rejected.
    pub fn parse(input: &str, amount: f64) -> Option<Self> {
        let payment: f64 = input.trim().parse().ok()?;
        if !payment.is_finite() || payment < 0.0 {
            return None;
        }
        Some(Self {
            payment,
            status: BillingStatus::from_amounts(payment, amount),
        })
    }
}

/// Normalize a form input for an optional payload field: whitespace-only
/// input is sent as absent, not as an empty string.
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
