//! The runtime value model the renderer walks.
//!
//! Scalars are plain data. Lists, mappings and error objects are shared
//! handles (`Arc` + `RwLock`), so a graph built from them can alias and even
//! contain itself. Identity is the address of the shared allocation.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use crate::bigint::BigInt;
use crate::error::RenderError;
use crate::number::format_js_number;
use crate::truncate::truncate_string;

/// Largest integer an `f64` holds exactly (2^53 - 1).
pub(crate) const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Any value that can be handed to the renderer.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absent value; omitted from mappings, `null` inside lists.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(BigInt),
    String(String),
    Symbol(Symbol),
    Function(Function),
    Error(ErrorRef),
    List(ListRef),
    Map(MapRef),
    /// Any other object, seen through [`CustomValue`].
    Custom(Arc<dyn CustomValue>),
}

/// Escape hatch for application types that are not plain data.
///
/// `to_value` is the structural view the renderer walks. `describe` is the
/// raw text used when structural rendering fails.
pub trait CustomValue: fmt::Debug + Send + Sync {
    /// Short type label, used by the default `describe`.
    fn type_name(&self) -> &str;

    /// Structural view of this object.
    ///
    /// # Errors
    ///
    /// Implementations report anything that prevents building the view.
    fn to_value(&self) -> Result<Value, RenderError>;

    /// Plain-text coercion of this object.
    ///
    /// # Errors
    ///
    /// Implementations may fail; the renderer then emits its fixed marker.
    fn describe(&self) -> Result<String, RenderError> {
        Ok(format!("[{}]", self.type_name()))
    }
}

/// A unique-identifier value with an optional description.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Symbol {
    description: Option<String>,
}

impl Symbol {
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
        }
    }

    /// A symbol with no description.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description.as_deref().unwrap_or(""))
    }
}

/// A callable, known only by its name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Function {
    name: Option<String>,
}

impl Function {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// The name, or `None` when missing or empty.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Function {}]", self.name().unwrap_or("anonymous"))
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Inserts or replaces `key`, keeping the slot of an existing key.
fn upsert(entries: &mut Vec<(String, Value)>, key: String, value: Value) {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some(slot) => slot.1 = value,
        None => entries.push((key, value)),
    }
}

// ─────────────────────────────────────────────────────────
// Lists
// ─────────────────────────────────────────────────────────

/// Shared, ordered list.
#[derive(Clone, Default)]
pub struct ListRef(Arc<RwLock<Vec<Value>>>);

impl ListRef {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, value: impl Into<Value>) {
        write(&self.0).push(value.into());
    }

    /// Replaces the element at `index`. Returns false when out of bounds.
    pub fn set(&self, index: usize, value: impl Into<Value>) -> bool {
        match write(&self.0).get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value> {
        read(&self.0).get(index).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        read(&self.0).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        read(&self.0).is_empty()
    }

    /// Copy of the current elements (cheap: handles are reference counted).
    #[must_use]
    pub fn snapshot(&self) -> Vec<Value> {
        read(&self.0).clone()
    }

    /// True when both handles point at the same list.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn identity(&self) -> usize {
        Arc::as_ptr(&self.0).cast::<()>() as usize
    }
}

impl fmt::Debug for ListRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListRef")
            .field("id", &format_args!("{:#x}", self.identity()))
            .field("len", &self.len())
            .finish()
    }
}

impl<V: Into<Value>> FromIterator<V> for ListRef {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self(Arc::new(RwLock::new(
            iter.into_iter().map(Into::into).collect(),
        )))
    }
}

// ─────────────────────────────────────────────────────────
// Mappings
// ─────────────────────────────────────────────────────────

/// Shared mapping with keys in first-assignment order.
#[derive(Clone, Default)]
pub struct MapRef(Arc<RwLock<Vec<(String, Value)>>>);

impl MapRef {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`. An existing key keeps its position.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        upsert(&mut write(&self.0), key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        read(&self.0)
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    pub fn remove(&self, key: &str) -> Option<Value> {
        let mut entries = write(&self.0);
        let index = entries.iter().position(|(k, _)| k == key)?;
        Some(entries.remove(index).1)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        read(&self.0).iter().any(|(k, _)| k == key)
    }

    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        read(&self.0).iter().map(|(k, _)| k.clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        read(&self.0).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        read(&self.0).is_empty()
    }

    /// Copy of the current entries, in key order.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, Value)> {
        read(&self.0).clone()
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn identity(&self) -> usize {
        Arc::as_ptr(&self.0).cast::<()>() as usize
    }
}

impl fmt::Debug for MapRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapRef")
            .field("id", &format_args!("{:#x}", self.identity()))
            .field("keys", &self.keys())
            .finish()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for MapRef {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let map = Self::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

// ─────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct ErrorData {
    name: String,
    message: String,
    stack: Option<String>,
    fields: Vec<(String, Value)>,
}

/// Shared error-like object: name, message, stack and extra fields.
#[derive(Clone)]
pub struct ErrorRef(Arc<RwLock<ErrorData>>);

impl ErrorRef {
    #[must_use]
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self(Arc::new(RwLock::new(ErrorData {
            name: name.into(),
            message: message.into(),
            ..ErrorData::default()
        })))
    }

    /// Builds an error object from a Rust error.
    ///
    /// The name is the error's type name (`"Error"` for trait objects) and
    /// the `source()` chain becomes the stack text.
    #[must_use]
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        let name = short_type_name(std::any::type_name::<E>());
        let message = err.to_string();

        let mut stack = format!("{name}: {message}");
        let mut source = err.source();
        while let Some(cause) = source {
            stack.push_str("\n    caused by: ");
            stack.push_str(&cause.to_string());
            source = cause.source();
        }

        Self::new(name, message).with_stack(stack)
    }

    #[must_use]
    pub fn with_stack(self, stack: impl Into<String>) -> Self {
        self.set_stack(Some(stack.into()));
        self
    }

    #[must_use]
    pub fn with_field(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_field(key, value);
        self
    }

    pub fn set_stack(&self, stack: Option<String>) {
        write(&self.0).stack = stack;
    }

    /// Sets an extra field. An existing key keeps its position.
    pub fn set_field(&self, key: impl Into<String>, value: impl Into<Value>) {
        upsert(&mut write(&self.0).fields, key.into(), value.into());
    }

    #[must_use]
    pub fn name(&self) -> String {
        read(&self.0).name.clone()
    }

    #[must_use]
    pub fn message(&self) -> String {
        read(&self.0).message.clone()
    }

    #[must_use]
    pub fn stack(&self) -> Option<String> {
        read(&self.0).stack.clone()
    }

    #[must_use]
    pub fn fields(&self) -> Vec<(String, Value)> {
        read(&self.0).fields.clone()
    }

    /// Plain mapping view: `name`, `message`, `stack`, then every extra
    /// field. An extra field sharing one of the first three keys replaces
    /// it in place. A missing stack is `Undefined`.
    #[must_use]
    pub fn expand(&self) -> Vec<(String, Value)> {
        let data = read(&self.0);
        let mut entries = vec![
            ("name".to_string(), Value::String(data.name.clone())),
            ("message".to_string(), Value::String(data.message.clone())),
            (
                "stack".to_string(),
                data.stack.clone().map_or(Value::Undefined, Value::String),
            ),
        ];
        for (key, value) in &data.fields {
            upsert(&mut entries, key.clone(), value.clone());
        }
        entries
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn identity(&self) -> usize {
        Arc::as_ptr(&self.0).cast::<()>() as usize
    }
}

impl fmt::Debug for ErrorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = read(&self.0);
        f.debug_struct("ErrorRef")
            .field("name", &data.name)
            .field("message", &data.message)
            .field("fields", &data.fields.len())
            .finish()
    }
}

fn short_type_name(full: &str) -> String {
    if full.starts_with("dyn ") {
        return "Error".to_string();
    }
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}

// ─────────────────────────────────────────────────────────
// Value helpers
// ─────────────────────────────────────────────────────────

impl Value {
    /// Converts any serde-serializable type into a value tree.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Json`] if `T`'s `Serialize` impl fails.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, RenderError> {
        Ok(Self::from(serde_json::to_value(value)?))
    }

    /// A symbol value with the given description.
    #[must_use]
    pub fn symbol(description: impl Into<String>) -> Self {
        Value::Symbol(Symbol::new(description))
    }

    /// A callable value with the given name.
    #[must_use]
    pub fn function(name: impl Into<String>) -> Self {
        Value::Function(Function::named(name))
    }

    /// Wraps a custom object.
    pub fn custom(value: impl CustomValue + 'static) -> Self {
        Value::Custom(Arc::new(value))
    }

    /// Short kind label, as used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Function(_) => "function",
            Value::Error(_) => "error",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Custom(_) => "custom",
        }
    }

    /// Best-effort plain text, used when structural rendering fails.
    ///
    /// Never recurses into children, so it terminates for any graph.
    ///
    /// # Errors
    ///
    /// Only a custom object's `describe` can fail.
    pub fn coerce(&self, max_len: usize) -> Result<String, RenderError> {
        Ok(match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => format_js_number(*n),
            Value::BigInt(b) => format!("{b}n"),
            Value::String(s) => truncate_string(s, max_len).into_owned(),
            Value::Symbol(s) => s.to_string(),
            Value::Function(f) => f.to_string(),
            Value::Error(e) => {
                let text = format!("{}: {}", e.name(), e.message());
                truncate_string(&text, max_len).into_owned()
            }
            Value::List(l) => format!("[List({})]", l.len()),
            Value::Map(_) => "[Object]".to_string(),
            Value::Custom(c) => c.describe()?,
        })
    }
}


// ─────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(f64::from(n))
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, u8, u16, u32, f32, f64);

macro_rules! impl_from_wide_int {
    ($($t:ty),*) => {
        $(
            /// Exact in an `f64` when within ±(2^53 - 1); an arbitrary-precision
            /// integer otherwise.
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    let as_float = n as f64;
                    if as_float.abs() <= MAX_SAFE_INTEGER {
                        Value::Number(as_float)
                    } else {
                        Value::BigInt(BigInt::from(n))
                    }
                }
            }
        )*
    };
}

impl_from_wide_int!(i64, u64, i128, u128, isize, usize);

impl From<BigInt> for Value {
    fn from(b: BigInt) -> Self {
        Value::BigInt(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

impl From<ErrorRef> for Value {
    fn from(e: ErrorRef) -> Self {
        Value::Error(e)
    }
}

impl From<ListRef> for Value {
    fn from(l: ListRef) -> Self {
        Value::List(l)
    }
}

impl From<MapRef> for Value {
    fn from(m: MapRef) -> Self {
        Value::Map(m)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items.into_iter().collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => number_from_json(&n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Map(map.into_iter().collect()),
        }
    }
}

/// Integers outside the exact `f64` range stay lossless as [`BigInt`].
fn number_from_json(n: &serde_json::Number) -> Value {
    if let Some(i) = n.as_i64() {
        return Value::from(i);
    }
    if let Some(u) = n.as_u64() {
        return Value::from(u);
    }
    Value::Number(n.as_f64().unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_set_keeps_first_position() {
        let map = MapRef::new();
        map.set("a", 1);
        map.set("b", 2);
        map.set("a", 3);
        assert_eq!(map.keys(), vec!["a", "b"]);
        assert!(matches!(map.get("a"), Some(Value::Number(n)) if n == 3.0));
    }

    #[test]
    fn test_map_remove() {
        let map: MapRef = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        assert!(map.remove("b").is_some());
        assert!(map.remove("b").is_none());
        assert_eq!(map.keys(), vec!["a", "c"]);
        assert!(!map.contains_key("b"));
    }

    #[test]
    fn test_list_operations() {
        let list = ListRef::new();
        assert!(list.is_empty());
        list.push(1);
        list.push("two");
        assert_eq!(list.len(), 2);
        assert!(list.set(0, true));
        assert!(!list.set(5, true));
        assert!(matches!(list.get(0), Some(Value::Bool(true))));
        assert!(list.get(9).is_none());
    }

    #[test]
    fn test_handle_identity() {
        let a = MapRef::new();
        let alias = a.clone();
        let other = MapRef::new();
        assert!(a.ptr_eq(&alias));
        assert!(!a.ptr_eq(&other));
        assert_eq!(a.identity(), alias.identity());
    }

    #[test]
    fn test_debug_does_not_follow_cycles() {
        let list = ListRef::new();
        list.push(list.clone());
        let debug = format!("{:?}", Value::List(list));
        assert!(debug.contains("ListRef"));
        assert!(debug.contains("len: 1"));
    }

    #[test]
    fn test_symbol_and_function_display() {
        assert_eq!(Symbol::new("s").to_string(), "Symbol(s)");
        assert_eq!(Symbol::anonymous().to_string(), "Symbol()");
        assert_eq!(Function::named("handler").to_string(), "[Function handler]");
        assert_eq!(Function::named("").to_string(), "[Function anonymous]");
        assert_eq!(Function::anonymous().to_string(), "[Function anonymous]");
    }

    #[test]
    fn test_error_expand_order_and_override() {
        let err = ErrorRef::new("Error", "kaboom")
            .with_field("code", "E_KABOOM")
            .with_field("message", "overridden");
        let keys: Vec<String> = err.expand().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "message", "stack", "code"]);
        let expanded = err.expand();
        assert!(matches!(&expanded[1].1, Value::String(s) if s == "overridden"));
        assert!(matches!(expanded[2].1, Value::Undefined));
    }

    #[test]
    fn test_error_from_rust_error() {
        let parse_err = "abc".parse::<i32>().unwrap_err();
        let err = ErrorRef::from_error(&parse_err);
        assert_eq!(err.name(), "ParseIntError");
        assert_eq!(err.message(), parse_err.to_string());
        assert!(err.stack().unwrap().starts_with("ParseIntError: "));
    }

    #[test]
    fn test_error_from_dyn_error_includes_sources() {
        #[derive(Debug)]
        struct Outer(RenderError);

        impl fmt::Display for Outer {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("outer failure")
            }
        }

        impl std::error::Error for Outer {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                Some(&self.0)
            }
        }

        let outer = Outer(RenderError::custom("inner failure"));
        let dyn_err: &dyn std::error::Error = &outer;
        let err = ErrorRef::from_error(dyn_err);
        assert_eq!(err.name(), "Error");
        assert_eq!(err.message(), "outer failure");
        assert!(
            err.stack()
                .unwrap()
                .contains("caused by: Custom value error: inner failure")
        );
    }

    #[test]
    fn test_wide_ints_become_bigint_outside_safe_range() {
        assert!(matches!(Value::from(42i64), Value::Number(n) if n == 42.0));
        assert!(matches!(Value::from(u64::MAX), Value::BigInt(_)));
        assert!(matches!(Value::from(-(1i64 << 60)), Value::BigInt(b) if b.is_negative()));
    }

    #[test]
    fn test_from_json_preserves_key_order() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"zeta": 1, "alpha": [true, null], "mid": "x"}"#).unwrap();
        let Value::Map(map) = Value::from(json) else {
            panic!("expected map");
        };
        assert_eq!(map.keys(), vec!["zeta", "alpha", "mid"]);
        assert!(matches!(map.get("alpha"), Some(Value::List(l)) if l.len() == 2));
    }

    #[test]
    fn test_from_json_big_number_is_lossless() {
        let json: serde_json::Value = serde_json::from_str("18446744073709551615").unwrap();
        assert!(matches!(Value::from(json), Value::BigInt(b) if b.digits() == "18446744073709551615"));
    }

    #[test]
    fn test_from_serialize() {
        #[derive(Serialize)]
        struct Point {
            x: i32,
            y: i32,
        }
        let Value::Map(map) = Value::from_serialize(&Point { x: 1, y: 2 }).unwrap() else {
            panic!("expected map");
        };
        assert_eq!(map.keys(), vec!["x", "y"]);
    }

    #[test]
    fn test_option_conversion() {
        assert!(matches!(Value::from(None::<i32>), Value::Null));
        assert!(matches!(Value::from(Some("x")), Value::String(s) if s == "x"));
    }

    #[test]
    fn test_coerce_scalars() {
        assert_eq!(Value::Undefined.coerce(100).unwrap(), "undefined");
        assert_eq!(Value::Number(f64::NAN).coerce(100).unwrap(), "NaN");
        assert_eq!(Value::Number(f64::NEG_INFINITY).coerce(100).unwrap(), "-Infinity");
        assert_eq!(Value::Number(3.0).coerce(100).unwrap(), "3");
        assert_eq!(Value::Number(2.5).coerce(100).unwrap(), "2.5");
        assert_eq!(Value::Number(1e21).coerce(100).unwrap(), "1e+21");
        assert_eq!(Value::Number(1e-7).coerce(100).unwrap(), "1e-7");
        assert_eq!(Value::BigInt(BigInt::from(7)).coerce(100).unwrap(), "7n");
    }

    #[test]
    fn test_coerce_composites_do_not_recurse() {
        let list = ListRef::new();
        list.push(list.clone());
        assert_eq!(Value::List(list).coerce(100).unwrap(), "[List(1)]");
        assert_eq!(Value::Map(MapRef::new()).coerce(100).unwrap(), "[Object]");
        let err = ErrorRef::new("TypeError", "bad input");
        assert_eq!(Value::Error(err).coerce(100).unwrap(), "TypeError: bad input");
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(Value::Undefined.kind(), "undefined");
        assert_eq!(Value::symbol("s").kind(), "symbol");
        assert_eq!(Value::function("f").kind(), "function");
        assert_eq!(Value::from(vec![Value::Null]).kind(), "list");
    }
}
