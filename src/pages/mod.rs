//! Top-level routed pages.

pub mod admin;
pub mod dashboard;
pub mod evaluador;
pub mod login;
pub mod no_autorizado;
pub mod responsable;
