//! Colors and output streams.
//!
//! Escape sequences come from the `console` crate with styling forced on;
//! whether to apply them at all is decided by the caller (see
//! [`ColorMode`](crate::detection::ColorMode)).

use std::fmt;
use std::str::FromStr;

use console::Style;

/// The semantic colors a log line can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    DarkGray,
}

impl Color {
    /// Every color, in declaration order.
    pub const ALL: [Color; 10] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Gray,
        Color::DarkGray,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Gray => "gray",
            Color::DarkGray => "darkgray",
        }
    }

    /// Terminal style for this color.
    ///
    /// Red, yellow and the grays use the 256-color palette; the rest use the
    /// basic 8-color codes.
    #[must_use]
    pub fn style(self) -> Style {
        let style = Style::new().force_styling(true);
        match self {
            Color::Black => style.black(),
            Color::Red => style.color256(196),
            Color::Green => style.green(),
            Color::Yellow => style.color256(11),
            Color::Blue => style.blue(),
            Color::Magenta => style.magenta(),
            Color::Cyan => style.cyan(),
            Color::White => style.white(),
            Color::Gray => style.color256(245),
            Color::DarkGray => style.color256(239),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for an unknown color name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color: {}", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "black" => Ok(Color::Black),
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "blue" => Ok(Color::Blue),
            "magenta" => Ok(Color::Magenta),
            "cyan" => Ok(Color::Cyan),
            "white" => Ok(Color::White),
            "gray" | "grey" => Ok(Color::Gray),
            "darkgray" | "darkgrey" | "dark-gray" | "dark_gray" => Ok(Color::DarkGray),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}

/// Destination stream for a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

/// Wraps `text` in `color` when `enabled`, otherwise returns it unchanged.
#[must_use]
pub fn colorize(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        color.style().apply_to(text).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorize_disabled_is_identity() {
        assert_eq!(colorize("plain", Color::Red, false), "plain");
    }

    #[test]
    fn test_basic_color_codes() {
        assert_eq!(colorize("x", Color::Blue, true), "\u{1b}[34mx\u{1b}[0m");
        assert_eq!(colorize("x", Color::Green, true), "\u{1b}[32mx\u{1b}[0m");
        assert_eq!(colorize("x", Color::Black, true), "\u{1b}[30mx\u{1b}[0m");
    }

    #[test]
    fn test_palette_color_codes() {
        assert_eq!(colorize("x", Color::Red, true), "\u{1b}[38;5;196mx\u{1b}[0m");
        assert_eq!(colorize("x", Color::Yellow, true), "\u{1b}[38;5;11mx\u{1b}[0m");
        assert_eq!(colorize("x", Color::Gray, true), "\u{1b}[38;5;245mx\u{1b}[0m");
        assert_eq!(colorize("x", Color::DarkGray, true), "\u{1b}[38;5;239mx\u{1b}[0m");
    }

    #[test]
    fn test_parse_names_and_aliases() {
        for color in Color::ALL {
            assert_eq!(color.name().parse::<Color>(), Ok(color));
        }
        assert_eq!("grey".parse::<Color>(), Ok(Color::Gray));
        assert_eq!("DarkGrey".parse::<Color>(), Ok(Color::DarkGray));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "teal".parse::<Color>().unwrap_err();
        assert_eq!(err.to_string(), "unknown color: teal");
    }

    #[test]
    fn test_stream_default_is_stdout() {
        assert_eq!(Stream::default(), Stream::Stdout);
    }
}
