//! Top-level routed views.

pub mod generate;
pub mod login;
pub mod projects;
