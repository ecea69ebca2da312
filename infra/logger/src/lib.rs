//! # Logger
//!
//! Global `tracing` subscriber setup for `HeroHub` binaries.
//!
//! * Console output (compact, ANSI) and/or a rolling file appender with non-blocking I/O.
//! * Level defaults come from the builder; `RUST_LOG` still wins unless an explicit
//!   [`LoggerBuilder::env_filter`] is given.
//! * Optional `profiling` support requires building with `--cfg tokio_unstable`.
//!
//! ## Example
//!
//! ```rust
//! # use hhub_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("hhub-server")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug)]
struct FileSink {
    directory: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

#[derive(Debug)]
struct LoggerSettings {
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    file: Option<FileSink>,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self { console: true, level: LevelFilter::INFO, env_filter: None, file: None }
    }
}

/// Typestate: no logger name yet.
#[derive(Debug)]
pub struct Unnamed;
/// Typestate: named logger.
#[derive(Debug)]
pub struct Named(String);
/// Typestate: console only.
#[derive(Debug)]
pub struct ConsoleOnly;
/// Typestate: rolling file output configured.
#[derive(Debug)]
pub struct WithFile;

/// Builder for the global tracing subscriber.
///
/// The name is mandatory before [`LoggerBuilder::init`] becomes available; file-only options such
/// as [`LoggerBuilder::rotation`] appear once [`LoggerBuilder::file`] has been called.
#[derive(Debug)]
pub struct LoggerBuilder<N = Unnamed, F = ConsoleOnly> {
    settings: LoggerSettings,
    name: N,
    sink: PhantomData<F>,
}

impl<F> LoggerBuilder<Unnamed, F> {
    /// Names the logger; the name also prefixes rolling log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, F> {
        LoggerBuilder { settings: self.settings, name: Named(name.into()), sink: PhantomData }
    }
}

impl<F> LoggerBuilder<Named, F> {
    /// Default level for targets not covered by the env filter.
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Programmatic filter directives (e.g. `hhub_roster=debug,sqlx=warn`).
    ///
    /// Invalid directives make [`LoggerBuilder::init`] fail.
    #[must_use]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.settings.env_filter = Some(filter.into());
        self
    }

    /// Toggles the console layer.
    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Adds a daily rolling file appender writing into `directory`.
    pub fn file(mut self, directory: impl Into<PathBuf>) -> LoggerBuilder<Named, WithFile> {
        self.settings.file = Some(FileSink {
            directory: directory.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        });
        LoggerBuilder { settings: self.settings, name: self.name, sink: PhantomData }
    }

    /// Installs the subscriber globally.
    ///
    /// The returned [`Logger`] owns the file writer guard and must be kept alive until shutdown.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`, a bad filter
    ///   or when every output is disabled.
    /// * [`LoggerError::Subscriber`] if a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { settings, name: Named(name), .. } = self;
        validate(&settings, &name)?;

        let filter = env_filter(&settings)?;
        let mut layers: Vec<BoxedLayer> = Vec::new();

        #[cfg(all(feature = "profiling", tokio_unstable))]
        if settings.console {
            layers.push(console_subscriber::spawn().boxed());
        }

        if settings.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = match settings.file {
            Some(sink) => {
                let (file_layer, guard) = file_layer(&name, sink)?;
                layers.push(file_layer);
                Some(guard)
            }
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging output enabled; enable the console or a log file".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;

        Ok(Logger { guard })
    }
}

impl LoggerBuilder<Named, WithFile> {
    /// How many rotated files to keep.
    #[must_use]
    pub fn max_files(mut self, max: usize) -> Self {
        if let Some(sink) = self.settings.file.as_mut() {
            sink.max_files = max;
        }
        self
    }

    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(sink) = self.settings.file.as_mut() {
            sink.rotation = rotation;
        }
        self
    }

    /// Writes file records as JSON lines.
    #[must_use]
    pub fn json(mut self, enabled: bool) -> Self {
        if let Some(sink) = self.settings.file.as_mut() {
            sink.json = enabled;
        }
        self
    }
}

/// Handle to the installed logging system.
#[must_use = "dropping the logger stops the background file writer"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring the global subscriber.
    ///
    /// ```rust
    /// use hhub_logger::{LevelFilter, Logger};
    ///
    /// let builder = Logger::builder().name("hhub-server").level(LevelFilter::WARN);
    /// # drop(builder);
    /// ```
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: LoggerSettings::default(), name: Unnamed, sink: PhantomData }
    }

    /// `true` when a file writer is attached.
    #[must_use]
    pub const fn has_file_output(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logger shutting down, flushing file output");
        }
    }
}

fn validate(settings: &LoggerSettings, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }
    if settings.file.as_ref().is_some_and(|sink| sink.max_files == 0) {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }
    Ok(())
}

fn env_filter(settings: &LoggerSettings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    match &settings.env_filter {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder.parse(directives).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{directives}': {e}").into(),
                context: None,
            }
        }),
    }
}

fn file_layer(name: &str, sink: FileSink) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    fs::create_dir_all(&sink.directory).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("Creating log directory {}", sink.directory.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(sink.rotation)
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(sink.max_files)
        .build(&sink.directory)
        .context("Configuring rolling log file")?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let base = layer().with_writer(writer).with_ansi(false);
    let boxed: BoxedLayer = if sink.json { base.json().boxed() } else { base.boxed() };

    Ok((boxed, guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder().name("test-app");
        assert!(builder.settings.console);
        assert_eq!(builder.settings.level, LevelFilter::INFO);
        assert!(builder.settings.env_filter.is_none());
        assert!(builder.settings.file.is_none());
    }

    #[test]
    fn file_options_are_recorded() {
        let builder = Logger::builder()
            .name("test-app")
            .env_filter("hhub_roster=debug")
            .file("/tmp/hhub-logs")
            .max_files(3)
            .rotation(Rotation::HOURLY)
            .json(true);

        let sink = builder.settings.file.as_ref().expect("file sink");
        assert_eq!(sink.max_files, 3);
        assert!(sink.json);
        assert_eq!(sink.directory, PathBuf::from("/tmp/hhub-logs"));
        assert_eq!(builder.settings.env_filter.as_deref(), Some("hhub_roster=debug"));
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Logger::builder().name("  ").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn zero_max_files_is_rejected() {
        let err =
            Logger::builder().name("test-app").file("/tmp/x").max_files(0).init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn all_outputs_disabled_is_rejected() {
        let err = Logger::builder().name("test-app").console(false).init().unwrap_err();
        assert_eq!(err.kind(), "InvalidConfiguration");
    }

    #[test]
    fn invalid_filter_is_rejected() {
        let err =
            Logger::builder().name("test-app").env_filter("hhub_roster=loud").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
