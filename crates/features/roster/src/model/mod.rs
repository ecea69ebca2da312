//! Wire shapes.
//!
//! Every read has its own projection type, so nesting stops where the type stops: a power inside
//! a hero's links is a [`summary::PowerSummary`] and cannot carry links or heroes of its own.

pub mod details;
pub mod request;
pub mod summary;

pub use details::{HeroDetail, HeroPowerCreated, HeroPowerItem};
pub use request::{NewHero, NewHeroPower, NewPower, PowerPatch};
pub use summary::{HeroSummary, PowerSummary};
