//! Network layer: wire types, the error taxonomy, and the authenticated
//! request pipeline all screens call through.

pub mod api;
pub mod error;
pub mod types;
