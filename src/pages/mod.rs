//! Screen set: list/form/detail views over the guarded API client.

pub mod admin;
pub mod billing;
pub mod doctor;
pub mod login;
pub mod register;
pub mod unauthorized;
