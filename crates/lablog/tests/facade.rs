//! The facade exposes the whole API from one crate.

use lablog::prelude::*;
use lablog::testing::TestConsole;

#[test]
fn prelude_types_render() {
    let map = MapRef::new();
    map.set("id", BigInt::from(7));
    map.set("me", map.clone());
    let out = render(&Value::Map(map), 10_000);
    assert_eq!(out, "{\n    \"id\": \"7n\",\n    \"me\": \"[Circular]\"\n}");
}

#[test]
fn json_macro_is_reexported() {
    let value = Value::from(lablog::serde_json::json!({"ok": true}));
    assert_eq!(render(&value, 10_000), "{\n    \"ok\": true\n}");
}

#[test]
fn to_text_uses_console_settings() {
    assert_eq!(lablog::to_text("plain"), "plain");
    assert_eq!(lablog::to_text(Value::Null), "null");
}

#[test]
fn test_console_is_reachable() {
    let tc = TestConsole::new();
    tc.console().info([Loggable::from(Symbol::new("tag"))]);
    assert_eq!(tc.output(), vec!["\"Symbol(tag)\""]);
}

#[test]
fn macros_accept_mixed_arguments() {
    // The global console writes to the real streams; this only checks that
    // every macro form compiles and runs.
    let list: ListRef = [1, 2, 3].into_iter().collect();
    blue!("a", 1, list.clone());
    grey!(true,);
    info!(Value::Null);
    darkgray!(String::from("owned"));
}
