//! Configured console wrapper

use std::io::{self, Write};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use lablog_core::RenderOptions;

use crate::color::{Color, Stream, colorize};
use crate::config::LogConfig;
use crate::divider::{DIVIDER, divider_line};
use crate::loggable::Loggable;

type Sink = Mutex<Box<dyn Write + Send>>;

/// lablog console: renders arguments and writes one colored line per
/// argument to stdout or stderr
pub struct LabConsole {
    config: LogConfig,
    options: RenderOptions,
    stdout: Sink,
    stderr: Sink,
}

impl LabConsole {
    /// Create from environment configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LogConfig::from_env())
    }

    /// Create with explicit configuration, writing to the process streams
    #[must_use]
    pub fn with_config(config: LogConfig) -> Self {
        Self::with_writers(config, io::stdout(), io::stderr())
    }

    /// Create with custom writers (for testing)
    #[must_use]
    pub fn with_writers<O, E>(config: LogConfig, stdout: O, stderr: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            options: config.render_options(),
            config,
            stdout: Mutex::new(Box::new(stdout)),
            stderr: Mutex::new(Box::new(stderr)),
        }
    }

    // ─────────────────────────────────────────────────
    // State Queries
    // ─────────────────────────────────────────────────

    /// The active configuration
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Check if escape codes are emitted
    pub fn use_color(&self) -> bool {
        self.config.use_color()
    }

    // ─────────────────────────────────────────────────
    // Output Methods
    // ─────────────────────────────────────────────────

    /// Renders one argument and colors it, without writing
    pub fn format(&self, thing: &Loggable, color: Color) -> String {
        colorize(&thing.render(&self.options), color, self.use_color())
    }

    /// Writes every argument, in order, one line each
    pub fn log<I>(&self, things: I, color: Color, stream: Stream)
    where
        I: IntoIterator,
        I::Item: Into<Loggable>,
    {
        for thing in things {
            let line = self.format(&thing.into(), color);
            self.write_line(stream, &line);
        }
    }

    /// Writes a finished line as a single write
    ///
    /// I/O errors are dropped: logging never fails its caller.
    pub fn write_line(&self, stream: Stream, line: &str) {
        let sink = match stream {
            Stream::Stdout => &self.stdout,
            Stream::Stderr => &self.stderr,
        };
        let mut writer = sink.lock().unwrap_or_else(PoisonError::into_inner);
        let mut unit = String::with_capacity(line.len() + 1);
        unit.push_str(line);
        unit.push('\n');
        let _ = writer.write_all(unit.as_bytes());
        let _ = writer.flush();
    }

    // ─────────────────────────────────────────────────
    // Convenience Methods
    // ─────────────────────────────────────────────────

    pub fn black<I: IntoIterator<Item: Into<Loggable>>>(&self, things: I) {
        self.log(things, Color::Black, Stream::Stdout);
    }

    pub fn red<I: IntoIterator<Item: Into<Loggable>>>(&self, things: I) {
        self.log(things, Color::Red, Stream::Stdout);
    }

    pub fn green<I: IntoIterator<Item: Into<Loggable>>>(&self, things: I) {
        self.log(things, Color::Green, Stream::Stdout);
    }

    pub fn yellow<I: IntoIterator<Item: Into<Loggable>>>(&self, things: I) {
        self.log(things, Color::Yellow, Stream::Stdout);
    }

    pub fn blue<I: IntoIterator<Item: Into<Loggable>>>(&self, things: I) {
        self.log(things, Color::Blue, Stream::Stdout);
    }

    pub fn magenta<I: IntoIterator<Item: Into<Loggable>>>(&self, things: I) {
        self.log(things, Color::Magenta, Stream::Stdout);
    }

    pub fn cyan<I: IntoIterator<Item: Into<Loggable>>>(&self, things: I) {
        self.log(things, Color::Cyan, Stream::Stdout);
    }

    pub fn white<I: IntoIterator<Item: Into<Loggable>>>(&self, things: I) {
        self.log(things, Color::White, Stream::Stdout);
    }

    pub fn gray<I: IntoIterator<Item: Into<Loggable>>>(&self, things: I) {
        self.log(things, Color::Gray, Stream::Stdout);
    }

    /// Alias of [`gray`](Self::gray)
    pub fn grey<I: IntoIterator<Item: Into<Loggable>>>(&self, things: I) {
        self.gray(things);
    }

    pub fn darkgray<I: IntoIterator<Item: Into<Loggable>>>(&self, things: I) {
        self.log(things, Color::DarkGray, Stream::Stdout);
    }

    /// White, to stdout
    pub fn info<I: IntoIterator<Item: Into<Loggable>>>(&self, things: I) {
        self.log(things, Color::White, Stream::Stdout);
    }

    /// Yellow, to stderr
    pub fn warn<I: IntoIterator<Item: Into<Loggable>>>(&self, things: I) {
        self.log(things, Color::Yellow, Stream::Stderr);
    }

    /// Red, to stderr
    pub fn error<I: IntoIterator<Item: Into<Loggable>>>(&self, things: I) {
        self.log(things, Color::Red, Stream::Stderr);
    }

    /// A divider line in this console's color mode
    pub fn divider_line(&self, color: Color, ch: char, width: usize) -> String {
        divider_line(color, ch, width, self.use_color())
    }

    /// Print the two-line `#` divider, uncolored
    pub fn divider(&self) {
        self.write_line(Stream::Stdout, DIVIDER);
    }

    /// Print a single divider line to stdout
    pub fn rule(&self, color: Color, width: usize) {
        let line = self.divider_line(color, '─', width);
        self.write_line(Stream::Stdout, &line);
    }
}

impl Default for LabConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LabConsole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabConsole")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// ─────────────────────────────────────────────────────────
// Global Console Accessor
// ─────────────────────────────────────────────────────────

static CONSOLE: OnceLock<Arc<LabConsole>> = OnceLock::new();

/// Get the global console instance
#[must_use]
pub fn console() -> &'static LabConsole {
    shared_ref()
}

/// Get a shared handle to the global console
#[must_use]
pub fn shared_console() -> Arc<LabConsole> {
    Arc::clone(shared_ref())
}

fn shared_ref() -> &'static Arc<LabConsole> {
    CONSOLE.get_or_init(|| Arc::new(LabConsole::new()))
}

/// Initialize the global console with specific settings
/// Must be called before any output; returns error if already initialized
pub fn init_console(config: LogConfig) -> Result<(), &'static str> {
    CONSOLE
        .set(Arc::new(LabConsole::with_config(config)))
        .map_err(|_| "Console already initialized")
}
