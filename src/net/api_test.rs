use super::*;

// =============================================================
// Credential propagation
// =============================================================

#[test]
fn bearer_value_formats_stored_token_exactly() {
    assert_eq!(bearer_value("tok-123"), "Bearer tok-123");
    assert_eq!(bearer_value(""), "Bearer ");
}

// =============================================================
// Auth-rejection detection
// =============================================================

#[test]
fn only_401_is_an_auth_rejection() {
    assert!(is_auth_rejection(401));
    assert!(!is_auth_rejection(400));
    assert!(!is_auth_rejection(403));
    assert!(!is_auth_rejection(419));
    assert!(!is_auth_rejection(500));
    assert!(!is_auth_rejection(200));
}

#[test]
fn rejection_on_login_page_does_not_redirect() {
    // A failed login attempt answers 401; redirecting would loop.
    assert!(!should_force_login("/login"));
}

#[test]
fn rejection_elsewhere_forces_login() {
    assert!(should_force_login("/doctor/dashboard"));
    assert!(should_force_login("/admin/dashboard"));
    assert!(should_force_login("/"));
    assert!(should_force_login(""));
}

// =============================================================
// Error messages
// =============================================================

#[test]
fn error_message_prefers_server_message_field() {
    let body = serde_json::json!({"message": "These credentials do not match our records."});
    assert_eq!(
        error_message(422, Some(&body)),
        "These credentials do not match our records."
    );
}

#[test]
fn error_message_falls_back_to_status_without_body() {
    assert_eq!(error_message(500, None), "Request failed with status 500");
}

#[test]
fn error_message_falls_back_when_message_is_not_a_string() {
    let body = serde_json::json!({"message": {"nested": true}});
    assert_eq!(error_message(422, Some(&body)), "Request failed with status 422");

    let body = serde_json::json!({"error": "something else"});
    assert_eq!(error_message(404, Some(&body)), "Request failed with status 404");
}

// =============================================================
// Base URL
// =============================================================

#[test]
fn api_url_has_no_trailing_slash() {
    // Endpoint paths all start with '/'.
    assert!(!api_url().ends_with('/'));
    assert!(api_url().starts_with("http"));
}
