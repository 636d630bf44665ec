//! Admin-role screens.

pub mod dashboard;
pub mod doctors;
pub mod patients;
