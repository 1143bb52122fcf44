//! Size-bounding for string values.
//!
//! Over-budget strings keep a head and a tail and gain a marker saying how
//! much was cut and what the content looked like:
//!
//! ```text
//! AAAAAAAA…AAAAAAAAAA [truncated 30 chars from string]
//! ```
//!
//! All lengths are counted in `char`s, so cuts never split a code point.

use std::borrow::Cow;
use std::fmt;

/// Default size budget for a single string.
pub const DEFAULT_MAX_STRING_LEN: usize = 10_000;

/// Strings shorter than this are never classified as base64.
pub const BASE64_MIN_LEN: usize = 1024;

/// Characters of the budget given up to make room for the tail and marker.
const HEAD_RESERVE: usize = 20;

/// Characters kept from the end of a truncated string.
const TAIL_LEN: usize = 10;

/// Heuristic content classification reported in the truncation marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Base64,
    String,
}

impl ContentKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Base64 => "base64",
            ContentKind::String => "string",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_base64_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'=')
}

/// Classifies `s` as base64 or ordinary text.
///
/// Base64 requires at least [`BASE64_MIN_LEN`] characters and, once all
/// whitespace is dropped, a non-empty body drawn only from `A-Z a-z 0-9 + / =`
/// whose length is a multiple of 4.
#[must_use]
pub fn classify(s: &str) -> ContentKind {
    if s.chars().count() < BASE64_MIN_LEN {
        return ContentKind::String;
    }

    let mut body_len = 0usize;
    for c in s.chars().filter(|c| !c.is_whitespace()) {
        if !c.is_ascii() || !is_base64_byte(c as u8) {
            return ContentKind::String;
        }
        body_len += 1;
    }

    if body_len > 0 && body_len % 4 == 0 {
        ContentKind::Base64
    } else {
        ContentKind::String
    }
}

/// Applies the size budget to `s`.
///
/// Within budget the input is borrowed back untouched. Otherwise the result
/// is `head…tail [truncated <k> chars from <kind>]`, where `head` is the
/// first `max_len - 20` characters (saturating at zero), `tail` the last 10,
/// and `k` the number of characters over budget.
#[must_use]
pub fn truncate_string(s: &str, max_len: usize) -> Cow<'_, str> {
    // Byte length bounds char count from above.
    if s.len() <= max_len {
        return Cow::Borrowed(s);
    }
    let char_len = s.chars().count();
    if char_len <= max_len {
        return Cow::Borrowed(s);
    }

    let head_end = byte_offset_of_char(s, max_len.saturating_sub(HEAD_RESERVE));
    let tail_start = byte_offset_of_char(s, char_len.saturating_sub(TAIL_LEN));
    let kind = classify(s);

    Cow::Owned(format!(
        "{}…{} [truncated {} chars from {}]",
        &s[..head_end],
        &s[tail_start..],
        char_len - max_len,
        kind
    ))
}

fn byte_offset_of_char(s: &str, char_index: usize) -> usize {
    s.char_indices().nth(char_index).map_or(s.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_budget_is_borrowed() {
        let s = "hello";
        assert!(matches!(truncate_string(s, 5), Cow::Borrowed("hello")));
        assert!(matches!(truncate_string(s, 100), Cow::Borrowed(_)));
    }

    #[test]
    fn test_multibyte_within_char_budget_is_untouched() {
        // 5 chars, 10 bytes
        let s = "ééééé";
        assert_eq!(truncate_string(s, 5), s);
    }

    #[test]
    fn test_truncates_with_head_tail_and_marker() {
        let s = "A".repeat(50);
        let out = truncate_string(&s, 20);
        // max_len - 20 = 0 head chars
        assert_eq!(out, "…AAAAAAAAAA [truncated 30 chars from string]");
    }

    #[test]
    fn test_head_length_is_budget_minus_reserve() {
        let s: String = ('a'..='z').cycle().take(100).collect();
        let out = truncate_string(&s, 30);
        let (head, rest) = out.split_once('…').unwrap();
        assert_eq!(head, &s[..10]);
        assert!(rest.starts_with(&s[90..]));
        assert!(rest.ends_with("[truncated 70 chars from string]"));
    }

    #[test]
    fn test_zero_budget() {
        let out = truncate_string("abcdef", 0);
        assert_eq!(out, "…abcdef [truncated 6 chars from string]");
    }

    #[test]
    fn test_cuts_respect_char_boundaries() {
        let s = "日本語".repeat(20);
        let out = truncate_string(&s, 25);
        let (head, _) = out.split_once('…').unwrap();
        assert_eq!(head.chars().count(), 5);
        assert!(out.contains("[truncated 35 chars from string]"));
    }

    #[test]
    fn test_classify_base64() {
        let s = "QUJD".repeat(256);
        assert_eq!(s.len(), 1024);
        assert_eq!(classify(&s), ContentKind::Base64);
    }

    #[test]
    fn test_classify_base64_ignores_whitespace() {
        let mut s = String::new();
        for _ in 0..20 {
            s.push_str(&"QUJD".repeat(19));
            s.push('\n');
        }
        assert!(s.len() >= BASE64_MIN_LEN);
        assert_eq!(classify(&s), ContentKind::Base64);
    }

    #[test]
    fn test_classify_short_is_string() {
        assert_eq!(classify(&"QUJD".repeat(255)), ContentKind::String);
    }

    #[test]
    fn test_classify_bad_char_is_string() {
        let mut s = "QUJD".repeat(256);
        s.replace_range(100..101, "!");
        assert_eq!(classify(&s), ContentKind::String);
    }

    #[test]
    fn test_classify_length_not_multiple_of_four() {
        let s = format!("{}A", "QUJD".repeat(256));
        assert_eq!(classify(&s), ContentKind::String);
    }

    #[test]
    fn test_classify_all_whitespace_is_string() {
        assert_eq!(classify(&" ".repeat(2048)), ContentKind::String);
    }

    #[test]
    fn test_truncation_marker_reports_base64() {
        let s = "QUJD".repeat(300);
        let out = truncate_string(&s, 100);
        assert!(out.ends_with("[truncated 1100 chars from base64]"));
    }
}
