//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so individual components depend on small focused
//! models. `reaction` is a pure state machine with no Leptos types, which
//! keeps the toggle semantics testable off-browser.

pub mod auth;
pub mod reaction;
