//! Bridges from the `log` and `tracing` ecosystems into the console.
//!
//! - [`ConsoleLogger`] - a `log` crate logger
//! - [`ConsoleLayer`] / [`ConsoleSubscriberBuilder`] - a tracing layer
//!
//! Both pick color and stream from the record level the same way the
//! console's named methods do: errors are red and warnings yellow on
//! stderr, everything else goes to stdout.

mod logger;
mod subscriber;

pub use logger::{ConsoleLogger, ConsoleLoggerBuilder};
pub use subscriber::{ConsoleLayer, ConsoleSubscriberBuilder};

use log::Level;
use time::{OffsetDateTime, format_description};

use crate::color::{Color, Stream};

/// Color and stream for a record at `level`.
#[must_use]
pub fn level_route(level: Level) -> (Color, Stream) {
    match level {
        Level::Error => (Color::Red, Stream::Stderr),
        Level::Warn => (Color::Yellow, Stream::Stderr),
        Level::Info => (Color::White, Stream::Stdout),
        Level::Debug => (Color::Gray, Stream::Stdout),
        Level::Trace => (Color::DarkGray, Stream::Stdout),
    }
}

/// Current UTC time as `HH:MM:SS`.
pub(crate) fn timestamp() -> Option<String> {
    let fmt = format_description::parse("[hour]:[minute]:[second]").ok()?;
    OffsetDateTime::now_utc().format(&fmt).ok()
}

/// Builds the `[ts] LEVEL target: message` line shared by both bridges.
pub(crate) fn header(
    level: Level,
    target: Option<&str>,
    message: &str,
    with_timestamp: bool,
) -> String {
    let mut line = String::new();
    if with_timestamp {
        if let Some(ts) = timestamp() {
            line.push('[');
            line.push_str(&ts);
            line.push_str("] ");
        }
    }
    line.push_str(&format!("{level:<5} "));
    if let Some(target) = target {
        line.push_str(target);
        line.push_str(": ");
    }
    line.push_str(message);
    line
}
