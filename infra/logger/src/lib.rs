//! # Logger
//!
//! Installs the global `tracing` subscriber for folio binaries.
//!
//! * Native targets log to the terminal and, optionally, to rolling files written by a
//!   non-blocking background worker.
//! * `wasm32` targets log to the browser devtools console. Timestamps are omitted there
//!   because `std::time::SystemTime` is unavailable in the browser.
//! * Use [`LoggerBuilder::env_filter`] to set module-directed filters
//!   (e.g., `"folio_ui=debug,folio_kernel=info"`), in addition to `RUST_LOG`.
//!
//! ## Example
//!
//! ```rust
//! # use folio_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("folio-site")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

#[cfg(target_arch = "wasm32")]
mod browser;
mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
#[cfg(not(target_arch = "wasm32"))]
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;
#[cfg(not(target_arch = "wasm32"))]
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::Builder;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_MAX_FILES: usize = 10;
#[cfg(not(target_arch = "wasm32"))]
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

#[derive(Debug)]
pub struct LoggerConfig {
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    #[cfg(not(target_arch = "wasm32"))]
    file: FileConfig,
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
struct FileConfig {
    path: Option<PathBuf>,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            level: LevelFilter::INFO,
            env_filter: None,
            #[cfg(not(target_arch = "wasm32"))]
            file: FileConfig {
                path: None,
                rotation: Rotation::DAILY,
                max_files: DEFAULT_MAX_FILES,
                json: false,
            },
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);
#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    config: LoggerConfig,
    name: N,
    file_state: std::marker::PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Sets the name of the logger.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder {
            name: WithName(name.into()),
            config: self.config,
            file_state: std::marker::PhantomData,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl LoggerBuilder<WithName, WithFile> {
    /// Configures maximum number of log files to keep.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.file.max_files = max;
        self
    }

    /// Configures the log file rotation strategy.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.file.rotation = rotation;
        self
    }

    /// Writes file logs as JSON lines.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self) -> Self {
        self.config.file.json = true;
        self
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    /// Configures the minimum log level to be emitted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `folio_ui=debug`).
    ///
    /// On native targets `RUST_LOG` is consulted only when no explicit filter is set.
    /// Invalid filters will cause [`LoggerBuilder::init`] to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Enables console logging (terminal natively, devtools console on wasm).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Sets the directory for rolling log files.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn path(self, path: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        let mut config = self.config;
        config.file.path = Some(path.into());
        LoggerBuilder { config, name: self.name, file_state: std::marker::PhantomData }
    }

    /// Consumes the builder and initializes the global tracing subscriber.
    ///
    /// # Returns
    /// A [`Logger`] handle. When file logging is enabled it owns the background worker
    /// guard; keep it alive for the duration of the program so buffered lines are flushed.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set.
    /// Returns [`LoggerError::InvalidConfiguration`] for invalid builder settings and
    /// [`LoggerError::Filter`] for a malformed `env_filter`.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate_config(&self.config, &self.name.0)?;

        let env_filter = build_env_filter(&self.config)?;

        let mut layers: Vec<BoxedLayer> = Vec::new();

        if self.config.console {
            layers.push(console_layer());
        }

        #[cfg(not(target_arch = "wasm32"))]
        let guard = match file_layer(&self.config.file, &self.name.0)? {
            Some((layer, guard)) => {
                layers.push(layer);
                Some(guard)
            }
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(layers).with(env_filter).try_init()?;

        tracing::debug!(logger = %self.name.0, "Logging initialized");

        Ok(Logger {
            #[cfg(not(target_arch = "wasm32"))]
            guard,
        })
    }
}

/// A handle to the initialized logging system.
///
/// Natively this struct holds the file worker guard. Drop it only when the application is
/// shutting down.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    #[cfg(not(target_arch = "wasm32"))]
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] to configure the global tracing subscriber.
    ///
    /// The `name` identifies the application and prefixes rolling log files
    /// (e.g., `folio-site.2026-10-17.log`).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder {
            config: LoggerConfig::default(),
            name: NoName,
            file_state: std::marker::PhantomData,
        }
    }

    /// Returns a reference to the underlying worker guard, if present.
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn console_layer() -> BoxedLayer {
    tracing_subscriber::fmt::layer().compact().with_ansi(true).boxed()
}

#[cfg(target_arch = "wasm32")]
fn console_layer() -> BoxedLayer {
    tracing_subscriber::fmt::layer()
        .with_writer(browser::BrowserConsole)
        .with_ansi(false)
        .without_time()
        .with_level(true)
        .boxed()
}

#[cfg(not(target_arch = "wasm32"))]
fn file_layer(
    file: &FileConfig,
    name: &str,
) -> Result<Option<(BoxedLayer, WorkerGuard)>, LoggerError> {
    use tracing_appender::rolling::RollingFileAppender;

    let Some(path) = &file.path else {
        return Ok(None);
    };

    std::fs::create_dir_all(path).context(format!("cannot create {}", path.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(file.rotation.clone())
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(file.max_files)
        .build(path)?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false);

    let boxed = if file.json { layer.json().boxed() } else { layer.boxed() };

    Ok(Some((boxed, guard)))
}

fn validate_config(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    if config.file.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    #[cfg(target_arch = "wasm32")]
    let _ = config;

    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    let Some(filter) = config.env_filter.as_ref() else {
        return Ok(default_filter(builder));
    };

    builder.parse(filter).context(format!("'{filter}'"))
}

#[cfg(not(target_arch = "wasm32"))]
fn default_filter(builder: Builder) -> EnvFilter {
    builder.from_env_lossy()
}

// No process environment in the browser.
#[cfg(target_arch = "wasm32")]
fn default_filter(builder: Builder) -> EnvFilter {
    builder.parse_lossy("")
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_logger_builder_initial_state() {
        let logger_builder = Logger::builder().name("test-site").env_filter("folio_ui=debug");
        assert!(logger_builder.config.console);
        assert_eq!(logger_builder.config.level, LevelFilter::INFO);
        assert_eq!(logger_builder.config.env_filter.as_deref(), Some("folio_ui=debug"));
        assert!(logger_builder.config.file.path.is_none());
        assert!(!logger_builder.config.file.json);
    }

    #[test]
    #[serial]
    fn test_logger_builder_file_configuration() {
        let logger_builder = Logger::builder()
            .name("test-site")
            .console(false)
            .path("logs")
            .max_files(3)
            .json()
            .level(LevelFilter::DEBUG);

        assert!(!logger_builder.config.console);
        assert_eq!(logger_builder.config.level, LevelFilter::DEBUG);
        assert_eq!(logger_builder.config.file.max_files, 3);
        assert!(logger_builder.config.file.json);
        assert_eq!(logger_builder.config.file.path.as_deref(), Some(std::path::Path::new("logs")));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let config = LoggerConfig::default();
        let err = validate_config(&config, "   ").expect_err("blank name must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_zero_max_files_is_rejected() {
        let mut config = LoggerConfig::default();
        config.file.max_files = 0;
        let err = validate_config(&config, "site").expect_err("zero max_files must fail");
        assert!(err.to_string().contains("max_files"));
    }

    #[test]
    fn test_invalid_env_filter_is_reported() {
        let config =
            LoggerConfig { env_filter: Some("folio=verbose".to_owned()), ..LoggerConfig::default() };
        let err = build_env_filter(&config).expect_err("malformed filter must fail");
        assert!(matches!(err, LoggerError::Filter { .. }));
        assert!(err.to_string().contains("'folio=verbose'"), "{err}");
    }
}
