//! Centralized configuration for lablog console output.
//!
//! `LogConfig` collects every knob the console uses, supporting both
//! programmatic and environment variable-based configuration.

use std::env;

use lablog_core::render::{CyclePolicy, DEFAULT_MAX_DEPTH, RenderOptions};
use lablog_core::truncate::DEFAULT_MAX_STRING_LEN;

use crate::detection::ColorMode;

/// Variable holding the per-string size budget.
pub const MAX_STRING_VAR: &str = "LABLOG_MAX_STRING";

/// Older name for [`MAX_STRING_VAR`], read only when that one is unset.
pub const LEGACY_MAX_STRING_VAR: &str = "LEARNINGLAB_LOG_MAX_STRING";

/// Variable selecting the cycle policy (`ancestors` or `shared`).
pub const CYCLES_VAR: &str = "LABLOG_CYCLES";

/// Configuration for lablog console output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Color decision and where it came from
    pub color: ColorMode,
    /// Size budget for every string, in characters
    pub max_string_len: usize,
    /// Which repeated references render as `[Circular]`
    pub cycle_policy: CyclePolicy,
    /// Nesting limit before falling back to plain text
    pub max_depth: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Default,
            max_string_len: DEFAULT_MAX_STRING_LEN,
            cycle_policy: CyclePolicy::AncestorChain,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl LogConfig {
    /// Create config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create config from environment variables
    ///
    /// # Environment Variables
    ///
    /// | Variable | Values | Description |
    /// |----------|--------|-------------|
    /// | `LABLOG_MAX_STRING` | integer ≥ 0 | String size budget (default 10000) |
    /// | `LEARNINGLAB_LOG_MAX_STRING` | integer ≥ 0 | Same, when `LABLOG_MAX_STRING` is unset |
    /// | `LABLOG_CYCLES` | ancestors/shared | Cycle collapsing policy |
    /// | `FORCE_COLOR` | non-empty, not `0` | Force colors on |
    /// | `NO_COLOR` | non-empty | Disable colors |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create config through `lookup`, which maps variable names to values
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.color = ColorMode::from_lookup(&lookup);

        // Non-numeric or negative values keep the default
        let budget = lookup(MAX_STRING_VAR)
            .filter(|v| !v.trim().is_empty())
            .or_else(|| lookup(LEGACY_MAX_STRING_VAR));
        if let Some(max) = budget.and_then(|v| v.trim().parse::<usize>().ok()) {
            config.max_string_len = max;
        }

        if let Some(policy) = lookup(CYCLES_VAR).and_then(|v| CyclePolicy::parse(&v)) {
            config.cycle_policy = policy;
        }

        config
    }

    // ─────────────────────────────────────────────────
    // Builder Methods
    // ─────────────────────────────────────────────────

    /// Force colors on or off, ignoring the environment
    #[must_use]
    pub fn force_color(mut self, force: bool) -> Self {
        self.color = if force {
            ColorMode::Forced
        } else {
            ColorMode::Disabled
        };
        self
    }

    /// Disable colors
    #[must_use]
    pub fn plain_mode(self) -> Self {
        self.force_color(false)
    }

    /// Set the string size budget
    #[must_use]
    pub fn with_max_string_len(mut self, max: usize) -> Self {
        self.max_string_len = max;
        self
    }

    /// Set the cycle policy
    #[must_use]
    pub fn with_cycle_policy(mut self, policy: CyclePolicy) -> Self {
        self.cycle_policy = policy;
        self
    }

    /// Set the nesting limit
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    // ─────────────────────────────────────────────────
    // Resolution Methods
    // ─────────────────────────────────────────────────

    /// Check if escape codes should be emitted
    #[must_use]
    pub fn use_color(&self) -> bool {
        self.color.is_enabled()
    }

    /// Options handed to the renderer
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_max_string_len(self.max_string_len)
            .with_cycle_policy(self.cycle_policy)
            .with_max_depth(self.max_depth)
    }
}
