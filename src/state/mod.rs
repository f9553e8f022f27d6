//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `projects`, `generation`, `ui`) so
//! individual components can depend on small focused models. Everything in
//! here is plain data with pure methods; IO lives in `net` and `session`.

pub mod generation;
pub mod projects;
pub mod session;
pub mod ui;
