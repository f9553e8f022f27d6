//! Network layer: REST calls to the backend and the identity provider.
//!
//! DESIGN
//! ======
//! `api` talks to the SynthIoT backend, `identity` to the third-party
//! identity provider. Both are real HTTP via `gloo-net` under `hydrate`
//! and inert stubs under SSR. Response-parsing helpers are plain functions
//! so they stay unit-testable on the host.

pub mod api;
pub mod error;
pub mod identity;
pub mod types;
