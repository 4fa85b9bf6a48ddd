//! # machinehub-domain
//!
//! Pure domain model for the machinehub outlet inventory.
//!
//! ## Responsibilities
//! - Foundational types: the machine identifier and error conventions
//! - Define **Machines** (physical devices plugged into a numbered power outlet)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod machine;
