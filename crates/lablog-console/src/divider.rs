//! Section dividers.

use crate::color::{Color, colorize};

/// Two full lines of `#`, for separating blocks of output.
pub const DIVIDER: &str = "#########################################################\n#########################################################";

/// Width used when the caller has no preference.
pub const DEFAULT_DIVIDER_WIDTH: usize = 60;

/// Upper bound on a divider's width.
pub const MAX_DIVIDER_WIDTH: usize = 200;

/// A single line of `ch` repeated `width` times (clamped to 1..=200),
/// colored when `use_color` is set.
#[must_use]
pub fn divider_line(color: Color, ch: char, width: usize, use_color: bool) -> String {
    let line: String = std::iter::repeat_n(ch, width.clamp(1, MAX_DIVIDER_WIDTH)).collect();
    colorize(&line, color, use_color)
}

/// The default divider: gray `─` at [`DEFAULT_DIVIDER_WIDTH`].
#[must_use]
pub fn divider_line_default(use_color: bool) -> String {
    divider_line(Color::Gray, '─', DEFAULT_DIVIDER_WIDTH, use_color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divider_constant_shape() {
        let lines: Vec<&str> = DIVIDER.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.len() == 57 && l.chars().all(|c| c == '#')));
    }

    #[test]
    fn test_default_line() {
        let line = divider_line_default(false);
        assert_eq!(line.chars().count(), 60);
        assert!(line.chars().all(|c| c == '─'));
    }

    #[test]
    fn test_width_is_clamped() {
        assert_eq!(divider_line(Color::Gray, '=', 0, false), "=");
        assert_eq!(divider_line(Color::Gray, '=', 500, false).len(), 200);
    }

    #[test]
    fn test_colored_line() {
        assert_eq!(
            divider_line(Color::Gray, '-', 3, true),
            "\u{1b}[38;5;245m---\u{1b}[0m"
        );
    }
}
