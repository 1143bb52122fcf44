//! What the console accepts.
//!
//! Text is printed as-is after size-bounding. Everything else goes through
//! the full renderer. A [`Value::String`] counts as text.

use lablog_core::logging::{debug, targets};
use lablog_core::{
    BigInt, ErrorRef, Function, ListRef, MapRef, RenderOptions, Symbol, UNSERIALIZABLE_MARKER,
    Value, render_plain, render_with,
};
use serde::Serialize;

/// One argument to a log call.
#[derive(Debug, Clone)]
pub enum Loggable {
    /// Raw text, bounded but not quoted.
    Text(String),
    /// A value for the serializer.
    Value(Value),
}

impl Loggable {
    /// Wraps any serde-serializable type.
    ///
    /// A failing `Serialize` impl logs at debug level and yields the
    /// `[Unserializable]` marker as text.
    pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Self {
        match Value::from_serialize(value) {
            Ok(value) => Self::from(value),
            Err(err) => {
                debug!(target: targets::CONSOLE, "cannot convert value for logging: {err}");
                Loggable::Text(UNSERIALIZABLE_MARKER.to_string())
            }
        }
    }

    /// Wraps a Rust error as an error object.
    pub fn error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Loggable::Value(Value::Error(ErrorRef::from_error(err)))
    }

    /// Produces the final, uncolored text for this argument.
    #[must_use]
    pub fn render(&self, options: &RenderOptions) -> String {
        match self {
            Loggable::Text(text) => render_plain(text, options.max_string_len),
            Loggable::Value(value) => render_with(value, options),
        }
    }
}

impl From<&str> for Loggable {
    fn from(text: &str) -> Self {
        Loggable::Text(text.to_string())
    }
}

impl From<String> for Loggable {
    fn from(text: String) -> Self {
        Loggable::Text(text)
    }
}

impl From<&String> for Loggable {
    fn from(text: &String) -> Self {
        Loggable::Text(text.clone())
    }
}

impl From<Value> for Loggable {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Loggable::Text(text),
            other => Loggable::Value(other),
        }
    }
}

impl From<&Value> for Loggable {
    fn from(value: &Value) -> Self {
        Self::from(value.clone())
    }
}

/// JSON strings print as text, like any other string.
impl From<serde_json::Value> for Loggable {
    fn from(json: serde_json::Value) -> Self {
        Self::from(Value::from(json))
    }
}

macro_rules! impl_from_via_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Loggable {
                fn from(v: $t) -> Self {
                    Loggable::Value(Value::from(v))
                }
            }
        )*
    };
}

impl_from_via_value!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, BigInt,
    Symbol, Function, ErrorRef, ListRef, MapRef
);

#[cfg(test)]
mod tests {
    use super::*;

    fn render(thing: impl Into<Loggable>, max: usize) -> String {
        thing
            .into()
            .render(&RenderOptions::new().with_max_string_len(max))
    }

    #[test]
    fn test_text_is_not_quoted() {
        assert_eq!(render("hello", 100), "hello");
        assert_eq!(render(String::from("a\"b"), 100), "a\"b");
    }

    #[test]
    fn test_text_is_truncated() {
        let out = render("A".repeat(50), 20);
        assert!(out.contains("[truncated 30 chars from string]"));
        assert!(!out.starts_with('"'));
    }

    #[test]
    fn test_string_value_counts_as_text() {
        assert!(matches!(Loggable::from(Value::from("s")), Loggable::Text(_)));
        assert!(matches!(
            Loggable::from(serde_json::json!("s")),
            Loggable::Text(_)
        ));
    }

    #[test]
    fn test_values_are_rendered() {
        let map = MapRef::new();
        map.set("y", 2);
        assert_eq!(render(map, 100), "{\n    \"y\": 2\n}");
        assert_eq!(render(42, 100), "42");
        assert_eq!(render(BigInt::from(9), 100), "\"9n\"");
    }

    #[test]
    fn test_serialize_struct() {
        #[derive(Serialize)]
        struct Job {
            id: u32,
            tags: Vec<&'static str>,
        }
        let out = render(
            Loggable::serialize(&Job {
                id: 7,
                tags: vec!["a"],
            }),
            100,
        );
        assert!(out.contains("\"id\": 7"));
        assert!(out.contains("\"a\""));
    }

    #[test]
    fn test_serialize_failure_is_marker() {
        use std::collections::HashMap;
        // Non-string map keys cannot become JSON objects
        let mut map = HashMap::new();
        map.insert(vec![1u8], 1);
        assert_eq!(render(Loggable::serialize(&map), 100), UNSERIALIZABLE_MARKER);
    }

    #[test]
    fn test_error_wrapping() {
        let err = "x".parse::<u8>().unwrap_err();
        let out = render(Loggable::error(&err), 1000);
        assert!(out.contains("\"name\": \"ParseIntError\""));
    }
}
