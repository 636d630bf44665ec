//! Doctor-role screens.

pub mod dashboard;
pub mod update_patient;
