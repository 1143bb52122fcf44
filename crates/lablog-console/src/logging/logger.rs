//! `log` crate logger that writes through a [`LabConsole`].
//!
//! # Usage
//!
//! ```ignore
//! use lablog_console::logging::ConsoleLogger;
//! use log::Level;
//!
//! // Simple initialization
//! ConsoleLogger::init(Level::Info)?;
//!
//! // Or use the builder for more control
//! ConsoleLogger::builder()
//!     .level(Level::Debug)
//!     .with_timestamps(false)
//!     .try_init();
//! ```

use std::sync::Arc;

use log::{Level, LevelFilter, Log, Metadata, Record};

use super::{header, level_route};
use crate::console::{LabConsole, shared_console};
use crate::loggable::Loggable;

/// Logger that prints each record as one colored console line.
pub struct ConsoleLogger {
    console: Arc<LabConsole>,
    min_level: Level,
    show_timestamps: bool,
    show_targets: bool,
}

impl ConsoleLogger {
    /// Create a logger on the global console with the given minimum level.
    #[must_use]
    pub fn new(min_level: Level) -> Self {
        ConsoleLoggerBuilder::new().level(min_level).build()
    }

    /// Create a logger using the builder pattern.
    #[must_use]
    pub fn builder() -> ConsoleLoggerBuilder {
        ConsoleLoggerBuilder::new()
    }

    /// Initialize as the global logger.
    ///
    /// Returns an error if a logger has already been set.
    pub fn init(min_level: Level) -> Result<(), log::SetLoggerError> {
        ConsoleLoggerBuilder::new().level(min_level).init()
    }

    /// Initialize as the global logger, ignoring errors if already set.
    pub fn try_init(min_level: Level) {
        let _ = Self::init(min_level);
    }

    fn format_record(&self, record: &Record) -> String {
        let target = self.show_targets.then(|| record.target());
        header(
            record.level(),
            target,
            &record.args().to_string(),
            self.show_timestamps,
        )
    }
}

/// Builder for configuring the console logger.
#[derive(Debug)]
pub struct ConsoleLoggerBuilder {
    min_level: Level,
    show_timestamps: bool,
    show_targets: bool,
    console: Option<Arc<LabConsole>>,
}

impl Default for ConsoleLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLoggerBuilder {
    /// Create a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: Level::Info,
            show_timestamps: true,
            show_targets: true,
            console: None,
        }
    }

    /// Set the minimum log level.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Set the minimum log level from a LevelFilter.
    #[must_use]
    pub fn level_filter(mut self, filter: LevelFilter) -> Self {
        self.min_level = filter.to_level().unwrap_or(Level::Trace);
        self
    }

    /// Set whether to show timestamps.
    #[must_use]
    pub fn with_timestamps(mut self, show: bool) -> Self {
        self.show_timestamps = show;
        self
    }

    /// Set whether to show targets.
    #[must_use]
    pub fn with_targets(mut self, show: bool) -> Self {
        self.show_targets = show;
        self
    }

    /// Write through `console` instead of the global one.
    #[must_use]
    pub fn with_console(mut self, console: Arc<LabConsole>) -> Self {
        self.console = Some(console);
        self
    }

    /// Build the logger without installing it.
    #[must_use]
    pub fn build(self) -> ConsoleLogger {
        ConsoleLogger {
            console: self.console.unwrap_or_else(shared_console),
            min_level: self.min_level,
            show_timestamps: self.show_timestamps,
            show_targets: self.show_targets,
        }
    }

    /// Build and install as the global logger.
    ///
    /// Returns an error if a logger has already been set.
    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.min_level;
        log::set_boxed_logger(Box::new(self.build()))?;
        log::set_max_level(level.to_level_filter());
        Ok(())
    }

    /// Build and install, ignoring errors if already set.
    pub fn try_init(self) {
        let _ = self.init();
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let (color, stream) = level_route(record.level());
        let line = self.format_record(record);
        self.console.log([Loggable::Text(line)], color, stream);
    }

    fn flush(&self) {}
}
