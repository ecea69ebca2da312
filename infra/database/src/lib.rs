//! # Database Infrastructure
//!
//! Opens the shared [SeaORM](https://www.sea-ql.org/SeaORM/) connection pool and applies the
//! workspace migrations before any feature slice touches the store.
//!
//! * `sqlite::memory:` (the default) and `sqlite://path?mode=rwc` are both supported.
//! * In-memory databases are pinned to a single pooled connection so every request sees the same
//!   data for the lifetime of the process.
//!
//! ## Example
//!
//! ```rust
//! use hhub_database::{Database, DatabaseError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), DatabaseError> {
//!     let db = Database::builder().url("sqlite::memory:").init().await?;
//!     db.ping_store().await?;
//!     Ok(())
//! }
//! ```

mod error;
pub mod migration;

pub use crate::error::{DatabaseError, DatabaseErrorExt};

use crate::migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, DatabaseConnection};
use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

const DEFAULT_MAX_CONNECTIONS: u32 = 8;
const DEFAULT_MIN_CONNECTIONS: u32 = 1;
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug)]
pub struct DatabaseInner {
    connection: DatabaseConnection,
    url: String,
}

impl Drop for DatabaseInner {
    fn drop(&mut self) {
        debug!(url = %self.url, "Database pool handle dropped");
    }
}

/// Cheaply cloneable handle to the migrated connection pool.
///
/// Derefs to [`DatabaseConnection`], so it can be passed anywhere SeaORM expects a
/// `&impl ConnectionTrait` or `&impl TransactionTrait`.
#[derive(Debug, Clone)]
pub struct Database {
    inner: Arc<DatabaseInner>,
}

impl Database {
    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::new()
    }

    /// The URL the pool was opened with.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.inner.url
    }

    /// Round-trips to the store; `/health` reports the outcome.
    ///
    /// # Errors
    /// [`DatabaseError::Connection`] if the pool cannot reach the store.
    pub async fn ping_store(&self) -> Result<(), DatabaseError> {
        self.inner.connection.ping().await.map_err(|e| DatabaseError::Connection {
            message: e.to_string().into(),
            context: Some("Pinging the store".into()),
        })
    }
}

impl Deref for Database {
    type Target = DatabaseConnection;

    fn deref(&self) -> &Self::Target {
        &self.inner.connection
    }
}

/// Fluent builder for the connection pool.
#[must_use = "builders do nothing unless you call .init()"]
#[derive(Debug)]
pub struct DatabaseBuilder {
    url: Option<String>,
    max_connections: u32,
    min_connections: u32,
    connect_timeout: Duration,
    acquire_timeout: Duration,
    sql_logging: bool,
}

impl Default for DatabaseBuilder {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            min_connections: DEFAULT_MIN_CONNECTIONS,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
            sql_logging: false,
        }
    }
}

impl DatabaseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub const fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub const fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub const fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    /// Emits every SQL statement through `tracing` at debug level.
    pub const fn sql_logging(mut self, enabled: bool) -> Self {
        self.sql_logging = enabled;
        self
    }

    /// Opens the pool and brings the schema up to date.
    ///
    /// # Errors
    /// * [`DatabaseError::Validation`] for a missing URL or an empty pool.
    /// * [`DatabaseError::Connection`] if the store cannot be opened.
    /// * [`DatabaseError::Migration`] if a migration fails to apply.
    #[instrument(skip(self), fields(url = self.url))]
    pub async fn init(self) -> Result<Database, DatabaseError> {
        let url = self.url.clone().filter(|url| !url.trim().is_empty()).ok_or(
            DatabaseError::Validation { message: "URL is required".into(), context: None },
        )?;
        if self.max_connections == 0 {
            return Err(DatabaseError::Validation {
                message: "max_connections must be greater than zero".into(),
                context: Some(url.into()),
            });
        }

        let options = self.connect_options(&url);
        let connection = sea_orm::Database::connect(options).await.map_err(|e| {
            DatabaseError::Connection {
                message: e.to_string().into(),
                context: Some(format!("Opening {url}").into()),
            }
        })?;
        info!(
            %url,
            backend = ?connection.get_database_backend(),
            "Database connection established"
        );

        info!("Applying database migrations...");
        Migrator::up(&connection, None).await.map_err(|e| DatabaseError::Migration {
            message: e.to_string().into(),
            context: Some(url.clone().into()),
        })?;
        info!("Database migrations applied successfully");

        Ok(Database { inner: Arc::new(DatabaseInner { connection, url }) })
    }

    fn connect_options(&self, url: &str) -> ConnectOptions {
        let in_memory = is_in_memory(url);
        let max = if in_memory { 1 } else { self.max_connections };
        // The pool never reaps below `min`, which keeps the in-memory database alive.
        let min = if in_memory { 1 } else { self.min_connections.min(max) };
        if in_memory && self.max_connections != 1 {
            debug!(requested = self.max_connections, "In-memory store pinned to one connection");
        }

        let mut options = ConnectOptions::new(url.to_owned());
        options
            .max_connections(max)
            .min_connections(min)
            .connect_timeout(self.connect_timeout)
            .acquire_timeout(self.acquire_timeout)
            .sqlx_logging(self.sql_logging);
        options
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file:roster?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://./hhub.db?mode=rwc"));
    }

    #[test]
    fn in_memory_pool_is_pinned_to_one_connection() {
        let options = DatabaseBuilder::new().max_connections(16).connect_options("sqlite::memory:");
        assert_eq!(options.get_max_connections(), Some(1));
        assert_eq!(options.get_min_connections(), Some(1));
    }

    #[test]
    fn file_pool_keeps_requested_size() {
        let options = DatabaseBuilder::new()
            .max_connections(4)
            .min_connections(2)
            .connect_options("sqlite://./hhub.db?mode=rwc");
        assert_eq!(options.get_max_connections(), Some(4));
        assert_eq!(options.get_min_connections(), Some(2));
    }
}
