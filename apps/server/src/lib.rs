//! # HeroHub Server
//!
//! HTTP front end for the roster: `Axum` routes over a `SeaORM` store, documented with `utoipa`.
//!
//! ## Example
//! ```no_run
//! use hhub_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(5555)
//!         .build()
//!         .await?
//!         .run()
//!         .await
//! }
//! ```

mod router;

use anyhow::{Context, Result, anyhow};
use axum::Router;
use axum_server::Handle;
use hhub::domain::config::{ApiConfig, LogConfig};
use hhub::kernel::server::state::ApiState;
use hhub_database::Database;
use hhub_logger::{LevelFilter, Logger};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info};

/// Installs the global logger described by the `[log]` section.
///
/// # Errors
/// Fails on an unknown level, invalid filter directives or an unusable log directory.
pub fn init_logging(cfg: &LogConfig) -> Result<Logger> {
    let level = parse_level(&cfg.level)?;
    let mut builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level);
    if let Some(filter) = &cfg.filter {
        builder = builder.env_filter(filter);
    }

    let logger = match &cfg.directory {
        Some(directory) => builder.file(directory).json(cfg.json).init(),
        None => builder.init(),
    }
    .context("Failed to initialize logging")?;
    Ok(logger)
}

fn parse_level(level: &str) -> Result<LevelFilter> {
    level.trim().parse().with_context(|| format!("Unknown log level '{level}'"))
}

/// A fluent builder for configuring and initializing the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: ApiConfig,
}

impl ServerBuilder {
    pub fn config(mut self, cfg: ApiConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.cfg.database.url = url.into();
        self
    }

    async fn init_database(&self) -> Result<Database> {
        let db_cfg = &self.cfg.database;
        Database::builder()
            .url(&db_cfg.url)
            .max_connections(db_cfg.max_connections)
            .min_connections(db_cfg.min_connections)
            .connect_timeout(Duration::from_secs(db_cfg.connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(db_cfg.acquire_timeout_secs))
            .sql_logging(db_cfg.sql_logging)
            .init()
            .await
            .context("Failed to establish database connection")
    }

    /// Opens the store (running migrations), builds every feature slice and the shared state.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated, or a slice fails to
    /// initialize.
    pub async fn build(self) -> Result<Server> {
        let address = SocketAddr::new(self.cfg.server.address, self.cfg.server.port);
        info!(%address, "Initializing server");

        let db = self.init_database().await?;
        let slices = hhub::init(&db).map_err(|e| anyhow!("Platform bootstrap failed: {e}"))?;

        let state = ApiState::builder()
            .config(self.cfg)
            .db(db)
            .register_slices(slices)
            .build()
            .context("Failed to finalize API state registry")?;
        Ok(Server { state })
    }
}

/// A fully initialized server instance ready to run.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: ApiState,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// The axum application without a listener, for embedding or in-process requests.
    pub fn app(&self) -> Router {
        router::init(self.state.clone())
    }

    /// Serves until Ctrl+C or SIGTERM, then drains in-flight requests for
    /// `server.shutdown_grace_secs`.
    ///
    /// # Errors
    /// Returns an error if the listener cannot bind to the configured address.
    pub async fn run(self) -> Result<()> {
        let cfg = self.state.config.clone();
        let address = SocketAddr::new(cfg.server.address, cfg.server.port);
        let grace = Duration::from_secs(cfg.server.shutdown_grace_secs);

        let app = self.app();

        let handle = Handle::<SocketAddr>::new();
        let shutdown_handle = handle.clone();
        tokio::spawn(async move {
            if let Err(e) = shutdown_signal().await {
                error!("Error while waiting for shutdown signal: {e}");
                return;
            }
            info!(grace_secs = grace.as_secs(), "Shutdown signal received, draining connections");
            shutdown_handle.graceful_shutdown(Some(grace));
        });

        info!("Starting HTTP server on http://{address}");
        axum_server::bind(address)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .context("HTTP server failed")?;

        info!("Server shutdown complete");
        Ok(())
    }

    #[must_use]
    pub const fn state(&self) -> &ApiState {
        &self.state
    }
}

/// Resolves on SIGINT (Ctrl+C) or, on unix, SIGTERM.
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => res?,
        res = terminate => res?,
    }

    Ok(())
}
