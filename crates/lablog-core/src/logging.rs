//! Log targets and re-exports for lablog's own diagnostics.
//!
//! lablog reports internal events (render fallbacks, console write
//! failures, CLI input errors) through the [`log`] facade. It does not
//! install a logger itself; `lablog-console` ships one that writes through
//! the colored console.
//!
//! # Log Targets
//!
//! - `lablog`: root target
//! - `lablog::render`: serializer fallbacks
//! - `lablog::console`: presentation adapter
//! - `lablog::cli`: command-line tool
//!
//! Example filter: `RUST_LOG=lablog::render=debug`

pub use log::{debug, error, info, trace, warn};
pub use log::{Level, LevelFilter};

/// Log targets used by lablog components.
pub mod targets {
    /// Root target for all lablog logs.
    pub const LABLOG: &str = "lablog";

    /// Serializer fallbacks and encoding failures.
    pub const RENDER: &str = "lablog::render";

    /// Color and stream dispatch.
    pub const CONSOLE: &str = "lablog::console";

    /// Command-line tool.
    pub const CLI: &str = "lablog::cli";
}

/// Returns whether logging is enabled at `level` for `target`.
#[inline]
#[must_use]
pub fn is_enabled(level: Level, target: &str) -> bool {
    log::log_enabled!(target: target, level)
}
