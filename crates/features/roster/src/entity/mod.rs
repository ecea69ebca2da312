//! SeaORM entities for the roster tables.

pub mod hero;
pub mod hero_power;
pub mod power;
mod strength;

pub use strength::Strength;
