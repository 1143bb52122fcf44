//! Behavioral tests for the renderer's public contract.
//!
//! These cover the guarantees consumers rely on:
//! - Totality: every value renders to a string
//! - Cycle termination with the `[Circular]` marker
//! - Truncation marker and base64 classification
//! - Per-kind encodings (big integers, symbols, callables, errors)

use std::sync::Arc;

use lablog_core::{
    BigInt, CustomValue, ErrorRef, Function, ListRef, MapRef, RenderError, RenderOptions, Symbol,
    UNSERIALIZABLE_MARKER, Value, render, render_with, to_json,
};

// ============================================================================
// Scenario Tests
// ============================================================================

#[test]
fn test_cyclic_graph_with_bigint_and_symbol() {
    let a = MapRef::new();
    a.set("x", 1);
    let b = MapRef::new();
    b.set("a", a.clone());
    b.set("big", BigInt::from(123));
    b.set("s", Symbol::new("s"));
    a.set("b", b);

    let out = render(&Value::Map(a), 10_000);

    assert!(out.contains("\"x\": 1"), "missing x: {out}");
    assert!(out.contains("\"a\": \"[Circular]\""), "missing marker: {out}");
    assert!(out.contains("\"123n\""), "missing bigint: {out}");
    assert!(out.contains("\"Symbol(s)\""), "missing symbol: {out}");
}

#[test]
fn test_cyclic_graph_exact_layout() {
    let a = MapRef::new();
    a.set("x", 1);
    let b = MapRef::new();
    b.set("a", a.clone());
    b.set("big", BigInt::from(123));
    a.set("b", b);

    let expected = "{\n    \"x\": 1,\n    \"b\": {\n        \"a\": \"[Circular]\",\n        \"big\": \"123n\"\n    }\n}";
    assert_eq!(render(&Value::Map(a), 10_000), expected);
}

#[test]
fn test_bigint_marker() {
    assert_eq!(render(&Value::BigInt(BigInt::from(123)), 10_000), "\"123n\"");
    let huge: BigInt = "-99999999999999999999999999".parse().unwrap();
    assert_eq!(
        render(&Value::BigInt(huge), 10_000),
        "\"-99999999999999999999999999n\""
    );
}

#[test]
fn test_function_placeholder() {
    assert_eq!(
        render(&Value::Function(Function::named("onClick")), 10_000),
        "\"[Function onClick]\""
    );
    assert_eq!(
        render(&Value::Function(Function::anonymous()), 10_000),
        "\"[Function anonymous]\""
    );
}

#[test]
fn test_error_expansion() {
    let err = ErrorRef::new("Error", "kaboom")
        .with_stack("Error: kaboom\n    at main")
        .with_field("code", "E_KABOOM");

    let out = render(&Value::Error(err), 10_000);

    assert!(out.contains("\"name\": \"Error\""), "{out}");
    assert!(out.contains("\"message\": \"kaboom\""), "{out}");
    assert!(out.contains("\"code\": \"E_KABOOM\""), "{out}");
    assert!(out.contains("\"stack\": \"Error: kaboom\\n    at main\""), "{out}");
}

#[test]
fn test_error_fields_keep_order() {
    let err = ErrorRef::new("Error", "kaboom").with_field("code", "E_KABOOM");
    let json = to_json(&Value::Error(err), &RenderOptions::new())
        .unwrap()
        .unwrap();
    let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["name", "message", "code"]);
}

#[test]
fn test_error_nested_in_map() {
    let err = ErrorRef::from_error(&std::io::Error::other("disk full"));
    let ctx = MapRef::new();
    ctx.set("op", "write");
    ctx.set("err", err);
    let out = render(&Value::Map(ctx), 10_000);
    assert!(out.contains("\"message\": \"disk full\""), "{out}");
    assert!(out.contains("\"name\": \"Error\""), "{out}");
}

// ============================================================================
// Truncation
// ============================================================================

#[test]
fn test_short_string_passes_unchanged() {
    let s = "exactly twenty chars";
    assert_eq!(s.chars().count(), 20);
    assert_eq!(render(&Value::from(s), 20), format!("\"{s}\""));
}

#[test]
fn test_long_string_marker() {
    let out = render(&Value::from("A".repeat(50)), 20);
    assert!(out.contains("[truncated 30 chars from string]"), "{out}");
}

#[test]
fn test_base64_marker_at_any_depth() {
    let payload = "aGVsbG8gd29ybGQh".repeat(128);
    let attachment = MapRef::new();
    attachment.set("data", payload.clone());
    let list: ListRef = [Value::Map(attachment)].into_iter().collect();

    let out = render(&Value::List(list), 100);
    let k = payload.len() - 100;
    assert!(out.contains(&format!("[truncated {k} chars from base64]")), "{out}");
}

#[test]
fn test_same_length_with_bad_char_is_string() {
    let mut payload = "aGVsbG8gd29ybGQh".repeat(128);
    payload.replace_range(0..1, "*");
    let out = render(&Value::from(payload), 100);
    assert!(out.contains("chars from string]"), "{out}");
}

#[test]
fn test_map_keys_are_not_truncated() {
    let key = "k".repeat(40);
    let map = MapRef::new();
    map.set(key.clone(), 1);
    let out = render(&Value::Map(map), 10);
    assert!(out.contains(&key));
}

// ============================================================================
// Totality and Fallbacks
// ============================================================================

#[derive(Debug)]
struct Connection {
    peer: &'static str,
}

impl CustomValue for Connection {
    fn type_name(&self) -> &str {
        "Connection"
    }

    fn to_value(&self) -> Result<Value, RenderError> {
        let map = MapRef::new();
        map.set("peer", self.peer);
        Ok(Value::Map(map))
    }
}

#[derive(Debug)]
struct Opaque {
    describable: bool,
}

impl CustomValue for Opaque {
    fn type_name(&self) -> &str {
        "Opaque"
    }

    fn to_value(&self) -> Result<Value, RenderError> {
        Err(RenderError::custom("no structural view"))
    }

    fn describe(&self) -> Result<String, RenderError> {
        if self.describable {
            Ok("Opaque<handle 7>".to_string())
        } else {
            Err(RenderError::custom("cannot describe"))
        }
    }
}

#[test]
fn test_custom_value_structural_view() {
    let out = render(&Value::custom(Connection { peer: "10.0.0.1" }), 10_000);
    assert_eq!(out, "{\n    \"peer\": \"10.0.0.1\"\n}");
}

#[test]
fn test_custom_value_falls_back_to_describe() {
    let out = render(&Value::custom(Opaque { describable: true }), 10_000);
    assert_eq!(out, "Opaque<handle 7>");
}

#[test]
fn test_total_failure_yields_marker() {
    let out = render(&Value::custom(Opaque { describable: false }), 10_000);
    assert_eq!(out, UNSERIALIZABLE_MARKER);
}

#[test]
fn test_nested_failure_coerces_the_root() {
    let map = MapRef::new();
    map.set("inner", Value::custom(Opaque { describable: true }));
    assert_eq!(render(&Value::Map(map), 10_000), "[Object]");
}

#[derive(Debug)]
struct SelfViewing(std::sync::OnceLock<Value>);

impl CustomValue for SelfViewing {
    fn type_name(&self) -> &str {
        "SelfViewing"
    }

    fn to_value(&self) -> Result<Value, RenderError> {
        let map = MapRef::new();
        map.set("me", self.0.get().cloned().unwrap_or_default());
        Ok(Value::Map(map))
    }
}

#[test]
fn test_custom_value_cycle_terminates() {
    let node = Arc::new(SelfViewing(std::sync::OnceLock::new()));
    let value = Value::Custom(node.clone());
    node.0.set(value.clone()).unwrap();

    let out = render(&value, 10_000);
    assert_eq!(out, "{\n    \"me\": \"[Circular]\"\n}");
}

#[test]
fn test_deep_nesting_is_total() {
    let root = MapRef::new();
    let mut current = root.clone();
    for _ in 0..1_000 {
        let next = MapRef::new();
        current.set("child", next.clone());
        current = next;
    }
    assert_eq!(render(&Value::Map(root), 10_000), "[Object]");
}

#[test]
fn test_deep_nesting_within_limit_renders() {
    let root = ListRef::new();
    let mut current = root.clone();
    for _ in 0..20 {
        let next = ListRef::new();
        current.push(next.clone());
        current = next;
    }
    let options = RenderOptions::new().with_max_depth(64);
    let out = render_with(&Value::List(root), &options);
    assert!(out.starts_with('['));
    assert!(out.contains("[]"));
}

#[test]
fn test_every_kind_renders() {
    let list: ListRef = [
        Value::Undefined,
        Value::Null,
        Value::Bool(false),
        Value::Number(f64::NAN),
        Value::BigInt(BigInt::zero()),
        Value::from("s"),
        Value::Symbol(Symbol::anonymous()),
        Value::Function(Function::anonymous()),
        Value::Error(ErrorRef::new("RangeError", "out of range")),
        Value::Map(MapRef::new()),
        Value::List(ListRef::new()),
        Value::custom(Connection { peer: "p" }),
    ]
    .into_iter()
    .collect();

    let out = render(&Value::List(list), 10_000);
    for needle in [
        "null",
        "false",
        "\"0n\"",
        "\"s\"",
        "\"Symbol()\"",
        "\"[Function anonymous]\"",
        "\"RangeError\"",
        "{}",
        "[]",
        "\"peer\": \"p\"",
    ] {
        assert!(out.contains(needle), "missing {needle} in {out}");
    }
}

#[test]
fn test_renders_are_independent() {
    let shared: MapRef = [("v", 1)].into_iter().collect();
    let first = render(&Value::Map(shared.clone()), 10_000);
    let second = render(&Value::Map(shared), 10_000);
    assert_eq!(first, second);
    assert!(!second.contains("[Circular]"));
}

#[test]
fn test_concurrent_renders_of_shared_graph() {
    let a = MapRef::new();
    a.set("x", 1);
    a.set("self", a.clone());
    let value = Value::Map(a);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let value = value.clone();
            std::thread::spawn(move || render(&value, 10_000))
        })
        .collect();

    let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(outputs.windows(2).all(|w| w[0] == w[1]));
    assert!(outputs[0].contains("\"self\": \"[Circular]\""));
}
