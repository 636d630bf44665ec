#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Role;
use crate::state::session::Session;

/// In-memory authentication state, provided as a reactive context for the
/// navbar and post-login redirects. The route guard does not trust this
/// copy; it re-reads persisted storage on every navigation.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
}

/// Role sets for the two protected route subtrees.
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
pub const DOCTOR_ONLY: &[Role] = &[Role::Doctor];

/// Outcome of a route-access check for one navigation.
///
/// `Checking` is never produced by [`evaluate_access`]; the guard holds it
/// while persisted storage is unreachable (the SSR render pass), deferring
/// the decision to hydration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Checking,
    Authorized(Session),
    Unauthenticated,
    Forbidden,
}

/// Decide access for one navigation. An empty `allowed` set admits any
/// authenticated role. No session is always `Unauthenticated`, never an
/// error.
pub fn evaluate_access(session: Option<Session>, allowed: &[Role]) -> AccessDecision {
    match session {
        None => AccessDecision::Unauthenticated,
        Some(session) if allowed.is_empty() || allowed.contains(&session.user.role) => {
            AccessDecision::Authorized(session)
        }
        Some(_) => AccessDecision::Forbidden,
    }
}
