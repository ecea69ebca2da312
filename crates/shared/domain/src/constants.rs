//! `OpenAPI` tags and other well-known strings.

pub const SYSTEM_TAG: &str = "System";
pub const HEROES_TAG: &str = "Heroes";
pub const POWERS_TAG: &str = "Powers";
pub const HERO_POWERS_TAG: &str = "HeroPowers";

/// Prefix for environment overrides, e.g. `HHUB__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "HHUB";
