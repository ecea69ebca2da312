//! Facade crate for `HeroHub` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it composes other crates and holds no business rules.
//!
//! ## Usage
//! - Add `hhub` with the `server` feature.
//! - Call [`init`] to build every feature slice, then [`server::router::api_router`] for routes.

use hhub_database::Database;
pub use hhub_domain as domain;
pub use hhub_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        use hhub_kernel::server::state::ApiState;
        pub use hhub_kernel::server::system_router;
        use utoipa_axum::router::OpenApiRouter;

        /// System routes plus every feature slice's routes.
        #[must_use]
        pub fn api_router() -> OpenApiRouter<ApiState> {
            OpenApiRouter::new().merge(system_router()).merge(hhub_roster::router())
        }
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use hhub_roster as roster;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "roster",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled feature slices.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    database: &Database,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let mut slices = Vec::new();

    // Roster (heroes, powers, hero_powers)
    slices.push(features::roster::init(database)?);

    Ok(slices)
}
