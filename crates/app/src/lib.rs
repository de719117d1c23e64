//! # chargehub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `ChargeApi` — list charges, rename a charge, set a charge's state
//!   - `Timer` — wait for a duration on the host's event loop
//! - Define the **use-cases** driven by the page:
//!   - `ChargeService` — submit a name update, toggle a state, list charges
//!   - `flash` — show a notification in an alert slot, then hide it
//! - Build endpoint paths, read error bodies and hold the client configuration
//!
//! ## Dependency rule
//! Depends on `chargehub-domain` only. Never imports adapter crates.
//! Port futures are not required to be `Send`: the browser event loop is
//! single-threaded.

pub mod config;
pub mod endpoints;
pub mod ports;
pub mod response;
pub mod services;
