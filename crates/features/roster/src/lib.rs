//! Roster feature slice: heroes, powers and the `hero_powers` links between them.
//!
//! * [`entity`]: SeaORM models for the three tables.
//! * [`validation`]: pure field rules run before every write.
//! * [`graph`]: cascades and the derived hero/power views.
//! * [`model`]: request bodies and cycle-free response projections.
//! * [`RosterService`]: transactional entity operations.
//! * [`router`] (feature `server`): the REST endpoints.

pub mod entity;
mod error;
pub mod graph;
pub mod model;
mod service;
pub mod validation;

#[cfg(feature = "server")]
mod endpoints;

pub use crate::error::{RosterError, RosterErrorExt};
pub use crate::service::RosterService;
#[cfg(feature = "server")]
pub use crate::endpoints::router;

use hhub_database::Database;
use hhub_kernel::domain::registry::InitializedSlice;

/// Roster feature state.
#[hhub_derive::hhub_slice]
pub struct Roster {
    pub service: RosterService,
}

/// Builds the roster slice on top of an initialized (migrated) database.
pub fn init(database: &Database) -> Result<InitializedSlice, RosterError> {
    let slice = Roster::new(RosterInner { service: RosterService::new(database.clone()) });
    tracing::info!("Roster slice initialized");

    Ok(InitializedSlice::new(slice))
}
