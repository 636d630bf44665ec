//! Shared client-side state.
//!
//! DESIGN
//! ======
//! `session` owns persistence of the credential (token + user profile);
//! `auth` is the in-memory view of it plus the route-access state machine.
//! The route guard re-reads persisted storage on every navigation rather
//! than trusting the in-memory copy, so a logout in another tab or a
//! cleared token is picked up no later than the next navigation.

pub mod auth;
pub mod session;
