use super::*;

fn patient() -> Patient {
    Patient {
        id: 3,
        first_name: "Ngozi".to_owned(),
        last_name: "Eze".to_owned(),
        age: Some(42),
        dob: None,
        gender: Some("female".to_owned()),
        address: None,
        spouse: None,
        diagnosis: "Hypertension".to_owned(),
        history: None,
        procedure: None,
        prescription: None,
        doctor_id: Some(7),
    }
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_round_trips_through_its_wire_spelling() {
    assert_eq!(
        serde_json::from_str::<Role>("\"admin\"").expect("admin"),
        Role::Admin
    );
    assert_eq!(
        serde_json::from_str::<Role>("\"doctor\"").expect("doctor"),
        Role::Doctor
    );
    assert_eq!(serde_json::to_string(&Role::Admin).expect("encode"), "\"admin\"");
}

#[test]
fn unknown_role_fails_to_deserialize() {
    assert!(serde_json::from_str::<Role>("\"nurse\"").is_err());
    assert!(serde_json::from_str::<Role>("\"Admin\"").is_err());
}

#[test]
fn role_dashboard_paths() {
    assert_eq!(Role::Admin.dashboard_path(), "/admin/dashboard");
    assert_eq!(Role::Doctor.dashboard_path(), "/doctor/dashboard");
}

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn auth_response_decodes_token_and_user() {
    let json = r#"{
        "token": "tok-123",
        "user": {"id": 7, "name": "Amaka Obi", "email": "amaka@clinic.test", "role": "doctor"}
    }"#;
    let response: AuthResponse = serde_json::from_str(json).expect("decode");
    assert_eq!(response.token, "tok-123");
    assert_eq!(response.user.role, Role::Doctor);
    assert_eq!(response.user.name, "Amaka Obi");
}

// =============================================================
// Patient
// =============================================================

#[test]
fn patient_decodes_with_missing_optional_fields() {
    let json = r#"{"id": 1, "first_name": "Ngozi", "last_name": "Eze", "diagnosis": "Asthma"}"#;
    let patient: Patient = serde_json::from_str(json).expect("decode");
    assert!(patient.age.is_none());
    assert!(patient.doctor_id.is_none());
    assert_eq!(patient.diagnosis, "Asthma");
}

#[test]
fn full_name_joins_first_and_last() {
    assert_eq!(patient().full_name(), "Ngozi Eze");
}

#[test]
fn search_matches_name_case_insensitively() {
    assert!(patient().matches_search("ngozi"));
    assert!(patient().matches_search("EZE"));
    assert!(patient().matches_search("ozi e"));
}

#[test]
fn search_matches_diagnosis() {
    assert!(patient().matches_search("hyperten"));
}

#[test]
fn search_rejects_non_matching_terms() {
    assert!(!patient().matches_search("diabetes"));
    assert!(!patient().matches_search("okafor"));
}

#[test]
fn empty_search_matches_everything() {
    assert!(patient().matches_search(""));
}

// =============================================================
// Doctor / Admin display names
// =============================================================

#[test]
fn doctor_display_name_prefers_linked_account() {
    let doctor = Doctor {
        id: 7,
        procedure: None,
        diagnosis: None,
        history: None,
        admin_id: None,
        user: Some(User {
            id: 9,
            name: "Dr. Bello".to_owned(),
            email: "bello@clinic.test".to_owned(),
            role: Role::Doctor,
        }),
    };
    assert_eq!(doctor.display_name(), "Dr. Bello");
}

#[test]
fn doctor_display_name_falls_back_to_id() {
    let doctor = Doctor {
        id: 7,
        procedure: None,
        diagnosis: None,
        history: None,
        admin_id: None,
        user: None,
    };
    assert_eq!(doctor.display_name(), "Doctor #7");
}

#[test]
fn doctor_payload_omits_user_when_absent() {
    let payload = DoctorPayload {
        procedure: Some("Cardiology".to_owned()),
        diagnosis: None,
        history: None,
        admin_id: Some(1),
        user: None,
    };
    let value = serde_json::to_value(&payload).expect("encode");
    assert!(value.get("user").is_none());
}

// =============================================================
// Billing
// =============================================================

#[test]
fn billing_status_paid_once_payment_covers_amount() {
    assert_eq!(BillingStatus::from_amounts(100.0, 100.0), BillingStatus::Paid);
    assert_eq!(BillingStatus::from_amounts(150.0, 100.0), BillingStatus::Paid);
}

#[test]
fn billing_status_pending_while_underpaid() {
    assert_eq!(BillingStatus::from_amounts(0.0, 100.0), BillingStatus::Pending);
    assert_eq!(BillingStatus::from_amounts(99.99, 100.0), BillingStatus::Pending);
}

#[test]
fn billing_patient_name_falls_back_to_id() {
    let billing = Billing {
        id: 1,
        patient_id: 3,
        patient: None,
        amount: 50.0,
        payment: None,
        status: BillingStatus::Pending,
    };
    assert_eq!(billing.patient_name(), "Patient #3");
}

#[test]
fn payment_update_parses_valid_amounts() {
    assert_eq!(PaymentUpdate::parse("25", 100.0).map(|u| u.payment), Some(25.0));
    assert_eq!(PaymentUpdate::parse(" 12.50 ", 100.0).map(|u| u.payment), Some(12.5));
    assert_eq!(PaymentUpdate::parse("0", 100.0).map(|u| u.payment), Some(0.0));
}

#[test]
fn payment_update_rejects_invalid_input() {
    assert!(PaymentUpdate::parse("-5", 100.0).is_none());
    assert!(PaymentUpdate::parse("abc", 100.0).is_none());
    assert!(PaymentUpdate::parse("", 100.0).is_none());
}

#[test]
fn payment_update_rejects_non_finite_input() {
    assert!(PaymentUpdate::parse("NaN", 100.0).is_none());
    assert!(PaymentUpdate::parse("inf", 100.0).is_none());
    assert!(PaymentUpdate::parse("-inf", 100.0).is_none());
    assert!(PaymentUpdate::parse("infinity", 100.0).is_none());
}

#[test]
fn payment_update_derives_status_from_billed_amount() {
    let partial = PaymentUpdate::parse("40", 100.0);
    assert_eq!(partial.map(|u| u.status), Some(BillingStatus::Pending));
    let full = PaymentUpdate::parse("100", 100.0);
    assert_eq!(full.map(|u| u.status), Some(BillingStatus::Paid));
}

// =============================================================
// Form helpers
// =============================================================

#[test]
fn non_empty_normalizes_blank_input_to_absent() {
    assert_eq!(non_empty(""), None);
    assert_eq!(non_empty("   "), None);
    assert_eq!(non_empty(" lisinopril "), Some("lisinopril".to_owned()));
}
