//! Kernel utilities shared across slices.
//!
//! * [`config::load_config`] layers an optional config file with `HHUB__` environment overrides.
//! * With the `server` feature: the shared [`server::state::ApiState`], the `/health` endpoint and
//!   the JSON error payloads every slice answers with.
//!
//! ```rust,no_run
//! use hhub_kernel::config::load_config;
//! use hhub_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(None::<&str>).unwrap_or_default();
//! assert!(cfg.server.port > 0);
//! ```

pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use hhub_domain as domain;
