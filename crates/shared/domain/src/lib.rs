//! # Domain Models
//!
//! Plain data shared across the workspace with `serde` as the only dependency.
//! No I/O and no business rules live here.

pub mod config;
pub mod constants;
pub mod registry;
