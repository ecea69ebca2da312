//! Axum building blocks shared by every feature router.

pub mod error;
mod health;
mod router;
pub mod state;

pub use router::system_router;
