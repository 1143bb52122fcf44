//! Colored console output for lablog.
//!
//! Every argument passed to a log call is rendered on its own line: text
//! as-is (size-bounded), everything else through [`lablog_core::render`].
//!
//! ```no_run
//! use lablog_console::{MapRef, blue, warn};
//!
//! let job = MapRef::new();
//! job.set("id", 7);
//! blue!("job queued", job);
//! warn!("retrying");
//! ```

#![forbid(unsafe_code)]

pub mod color;
pub mod config;
pub mod console;
pub mod detection;
pub mod divider;
pub mod logging; // log / tracing bridges
pub mod loggable;
pub mod testing; // Test utilities

pub use crate::color::{Color, ParseColorError, Stream, colorize};
pub use crate::config::LogConfig;
pub use crate::console::{LabConsole, console, init_console, shared_console};
pub use crate::detection::{ColorMode, should_color};
pub use crate::divider::{DIVIDER, divider_line, divider_line_default};
pub use lablog_core::{BigInt, ErrorRef, Function, ListRef, MapRef, Symbol, Value};
pub use crate::loggable::Loggable;

#[doc(hidden)]
#[macro_export]
macro_rules! __lablog_dispatch {
    ($method:ident; $($thing:expr),+ $(,)?) => {
        $crate::console().$method([$($crate::Loggable::from($thing)),+])
    };
}

/// Logs each argument on its own line in black.
#[macro_export]
macro_rules! black {
    ($($thing:expr),+ $(,)?) => { $crate::__lablog_dispatch!(black; $($thing),+) };
}

/// Logs each argument on its own line in red.
#[macro_export]
macro_rules! red {
    ($($thing:expr),+ $(,)?) => { $crate::__lablog_dispatch!(red; $($thing),+) };
}

/// Logs each argument on its own line in green.
#[macro_export]
macro_rules! green {
    ($($thing:expr),+ $(,)?) => { $crate::__lablog_dispatch!(green; $($thing),+) };
}

/// Logs each argument on its own line in yellow.
#[macro_export]
macro_rules! yellow {
    ($($thing:expr),+ $(,)?) => { $crate::__lablog_dispatch!(yellow; $($thing),+) };
}

/// Logs each argument on its own line in blue.
#[macro_export]
macro_rules! blue {
    ($($thing:expr),+ $(,)?) => { $crate::__lablog_dispatch!(blue; $($thing),+) };
}

/// Logs each argument on its own line in magenta.
#[macro_export]
macro_rules! magenta {
    ($($thing:expr),+ $(,)?) => { $crate::__lablog_dispatch!(magenta; $($thing),+) };
}

/// Logs each argument on its own line in cyan.
#[macro_export]
macro_rules! cyan {
    ($($thing:expr),+ $(,)?) => { $crate::__lablog_dispatch!(cyan; $($thing),+) };
}

/// Logs each argument on its own line in white.
#[macro_export]
macro_rules! white {
    ($($thing:expr),+ $(,)?) => { $crate::__lablog_dispatch!(white; $($thing),+) };
}

/// Logs each argument on its own line in gray.
#[macro_export]
macro_rules! gray {
    ($($thing:expr),+ $(,)?) => { $crate::__lablog_dispatch!(gray; $($thing),+) };
}

/// Same as [`gray!`].
#[macro_export]
macro_rules! grey {
    ($($thing:expr),+ $(,)?) => { $crate::__lablog_dispatch!(gray; $($thing),+) };
}

/// Logs each argument on its own line in dark gray.
#[macro_export]
macro_rules! darkgray {
    ($($thing:expr),+ $(,)?) => { $crate::__lablog_dispatch!(darkgray; $($thing),+) };
}

/// White, to stdout.
#[macro_export]
macro_rules! info {
    ($($thing:expr),+ $(,)?) => { $crate::__lablog_dispatch!(info; $($thing),+) };
}

/// Yellow, to stderr.
#[macro_export]
macro_rules! warn {
    ($($thing:expr),+ $(,)?) => { $crate::__lablog_dispatch!(warn; $($thing),+) };
}

/// Red, to stderr.
#[macro_export]
macro_rules! error {
    ($($thing:expr),+ $(,)?) => { $crate::__lablog_dispatch!(error; $($thing),+) };
}
