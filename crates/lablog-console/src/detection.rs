//! Color detection from the environment.
//!
//! A non-empty `FORCE_COLOR` other than `"0"` turns color on; otherwise a
//! non-empty `NO_COLOR` turns it off; otherwise color stays on.

/// Where the color decision came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Forced on (`FORCE_COLOR` or an explicit override).
    Forced,
    /// Disabled (`NO_COLOR` or an explicit override).
    Disabled,
    /// Nothing set; colored by default.
    #[default]
    Default,
}

impl ColorMode {
    /// Detects the mode from the process environment.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Detects the mode through `lookup`, which maps variable names to values.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if lookup("FORCE_COLOR").is_some_and(|v| !v.is_empty() && v != "0") {
            return Self::Forced;
        }
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            return Self::Disabled;
        }
        Self::Default
    }

    /// Whether escape codes should be emitted.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

/// Determine if color output should be used for this process.
#[must_use]
pub fn should_color() -> bool {
    ColorMode::detect().is_enabled()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_is_colored() {
        let mode = ColorMode::from_lookup(lookup(&[]));
        assert_eq!(mode, ColorMode::Default);
        assert!(mode.is_enabled());
    }

    #[test]
    fn test_no_color_disables() {
        let mode = ColorMode::from_lookup(lookup(&[("NO_COLOR", "1")]));
        assert_eq!(mode, ColorMode::Disabled);
        assert!(!mode.is_enabled());
    }

    #[test]
    fn test_empty_values_are_unset() {
        let mode = ColorMode::from_lookup(lookup(&[("NO_COLOR", "")]));
        assert_eq!(mode, ColorMode::Default);
        let mode = ColorMode::from_lookup(lookup(&[("FORCE_COLOR", ""), ("NO_COLOR", "1")]));
        assert_eq!(mode, ColorMode::Disabled);
    }

    #[test]
    fn test_force_color_beats_no_color() {
        let mode = ColorMode::from_lookup(lookup(&[("FORCE_COLOR", "1"), ("NO_COLOR", "1")]));
        assert_eq!(mode, ColorMode::Forced);
        assert!(mode.is_enabled());
    }

    #[test]
    fn test_force_color_zero_is_ignored() {
        let mode = ColorMode::from_lookup(lookup(&[("FORCE_COLOR", "0"), ("NO_COLOR", "1")]));
        assert_eq!(mode, ColorMode::Disabled);
    }
}
