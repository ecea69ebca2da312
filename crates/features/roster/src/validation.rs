//! Field rules checked before any write reaches the store.
//!
//! Everything here is pure; the service calls these functions first and only opens a transaction
//! once they pass.

use crate::entity::Strength;
use crate::error::RosterError;
use std::str::FromStr;

/// Minimum `Power.description` length, counted in Unicode scalar values.
pub const MIN_DESCRIPTION_CHARS: usize = 20;

pub const DESCRIPTION_TOO_SHORT: &str = "Description must be at least 20 characters long.";
pub const INVALID_STRENGTH: &str = "Strength must be 'Strong', 'Weak', or 'Average'.";

/// Accepts a power description of at least [`MIN_DESCRIPTION_CHARS`] characters.
///
/// A missing description fails the same way as a short one.
///
/// # Errors
/// [`RosterError::Validation`] with [`DESCRIPTION_TOO_SHORT`].
pub fn validate_description(candidate: Option<&str>) -> Result<&str, RosterError> {
    match candidate {
        Some(description) if description.chars().count() >= MIN_DESCRIPTION_CHARS => {
            Ok(description)
        }
        _ => Err(RosterError::validation(DESCRIPTION_TOO_SHORT)),
    }
}

/// Parses a link strength; only the exact names `Strong`, `Weak` and `Average` are accepted.
///
/// # Errors
/// [`RosterError::Validation`] with [`INVALID_STRENGTH`] for anything else, including no value.
pub fn parse_strength(candidate: Option<&str>) -> Result<Strength, RosterError> {
    candidate
        .and_then(|raw| Strength::from_str(raw).ok())
        .ok_or_else(|| RosterError::validation(INVALID_STRENGTH))
}
