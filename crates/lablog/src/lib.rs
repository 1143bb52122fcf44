//! lablog: colored console logging that never fails on what you hand it.
//!
//! Each argument to a log call prints on its own line. Text prints as-is;
//! any other value (cyclic graphs, big integers, errors, your own types) is
//! rendered as 4-space-indented JSON with every string size-bounded.
//!
//! # Quick Start
//!
//! ```no_run
//! use lablog::prelude::*;
//!
//! let request = MapRef::new();
//! request.set("path", "/health");
//! request.set("self", request.clone());
//!
//! blue!("incoming", request);
//! warn!("slow response");
//! error!(ErrorRef::new("TimeoutError", "gave up after 30s"));
//! ```
//!
//! # Crates
//!
//! - [`lablog_core`]: value model and renderer, usable without a console
//! - [`lablog_console`]: colors, streams, configuration, `log`/`tracing` bridges

#![forbid(unsafe_code)]

pub use lablog_console::logging;
pub use lablog_console::testing;
pub use lablog_console::{
    Color, ColorMode, DIVIDER, LabConsole, LogConfig, Loggable, ParseColorError, Stream,
    colorize, console, divider_line, divider_line_default, init_console, shared_console,
    should_color,
};
pub use lablog_console::{
    black, blue, cyan, darkgray, error, gray, green, grey, info, magenta, red, warn, white,
    yellow,
};
pub use lablog_core::{
    BigInt, CIRCULAR_MARKER, ContentKind, CustomValue, CyclePolicy, DEFAULT_MAX_STRING_LEN,
    ErrorRef, Function, ListRef, MapRef, ParseBigIntError, RenderError, RenderOptions, Symbol,
    UNSERIALIZABLE_MARKER, Value, classify, render, render_plain, render_with, to_json,
    truncate_string, try_render,
};
pub use serde_json;

/// Prelude module for convenient imports.
///
/// ```ignore
/// use lablog::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BigInt, Color, ErrorRef, Function, ListRef, LogConfig, Loggable, MapRef, Stream, Symbol,
        Value, console, render,
    };
    pub use crate::{
        black, blue, cyan, darkgray, error, gray, green, grey, info, magenta, red, warn, white,
        yellow,
    };
}

/// Renders `value` with the global console's settings, without printing.
#[must_use]
pub fn to_text(value: impl Into<Loggable>) -> String {
    value.into().render(&console().config().render_options())
}
