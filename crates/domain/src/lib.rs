//! # chargehub-domain
//!
//! Pure domain model for the chargehub charge-management page.
//!
//! ## Responsibilities
//! - Foundational types: the opaque [`ChargeId`](id::ChargeId), error conventions
//! - Define **Charges** (controllable electrical loads with a name and an on/off state)
//! - Define **Etat** (the two-valued on/off state and how it is presented)
//! - Define **Notifications** (transient success/error banners)
//! - Hold every user-facing message so adapters never build text themselves
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod error;
pub mod id;
pub mod message;

pub mod charge;
pub mod notification;
