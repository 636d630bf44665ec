use super::*;
use crate::net::types::User;

fn session(role: Role) -> Session {
    Session {
        token: "tok-123".to_owned(),
        user: User {
            id: 7,
            name: "Amaka Obi".to_owned(),
            email: "amaka@clinic.test".to_owned(),
            role,
        },
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_has_no_session() {
    let state = AuthState::default();
    assert!(state.session.is_none());
}

// =============================================================
// evaluate_access
// =============================================================

#[test]
fn no_session_is_unauthenticated() {
    assert_eq!(
        evaluate_access(None, ADMIN_ONLY),
        AccessDecision::Unauthenticated
    );
    assert_eq!(evaluate_access(None, &[]), AccessDecision::Unauthenticated);
}

#[test]
fn doctor_on_admin_route_is_forbidden() {
    assert_eq!(
        evaluate_access(Some(session(Role::Doctor)), ADMIN_ONLY),
        AccessDecision::Forbidden
    );
}

#[test]
fn admin_on_doctor_route_is_forbidden() {
    assert_eq!(
        evaluate_access(Some(session(Role::Admin)), DOCTOR_ONLY),
        AccessDecision::Forbidden
    );
}

#[test]
fn matching_role_is_authorized() {
    let doctor = session(Role::Doctor);
    assert_eq!(
        evaluate_access(Some(doctor.clone()), DOCTOR_ONLY),
        AccessDecision::Authorized(doctor)
    );

    let admin = session(Role::Admin);
    assert_eq!(
        evaluate_access(Some(admin.clone()), ADMIN_ONLY),
        AccessDecision::Authorized(admin)
    );
}

#[test]
fn empty_allowed_set_admits_any_authenticated_role() {
    let doctor = session(Role::Doctor);
    assert_eq!(
        evaluate_access(Some(doctor.clone()), &[]),
        AccessDecision::Authorized(doctor)
    );
}

#[test]
fn decision_is_derived_fresh_from_the_given_session() {
    // Same allowed set, different sessions: the outcome tracks the
    // session passed in, with nothing cached in between.
    assert_eq!(
        evaluate_access(Some(session(Role::Admin)), ADMIN_ONLY),
        AccessDecision::Authorized(session(Role::Admin))
    );
    assert_eq!(
        evaluate_access(None, ADMIN_ONLY),
        AccessDecision::Unauthenticated
    );
}
