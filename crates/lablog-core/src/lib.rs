//! Safe, bounded rendering of arbitrary runtime values.
//!
//! This crate provides:
//! - [`Value`], a value model that can hold cyclic graphs, big integers,
//!   symbols, callables, error objects and custom objects
//! - [`render`], a total function turning any value into pretty-printed,
//!   size-bounded text
//! - [`truncate_string`], the per-string size budget
//!
//! # Example
//!
//! ```
//! use lablog_core::{MapRef, Value, render};
//!
//! let a = MapRef::new();
//! a.set("x", 1);
//! a.set("me", a.clone());
//!
//! let text = render(&Value::Map(a), 10_000);
//! assert!(text.contains("\"x\": 1"));
//! assert!(text.contains("\"[Circular]\""));
//! ```

#![forbid(unsafe_code)]

mod bigint;
mod error;
pub mod number;
pub mod logging;
pub mod render;
pub mod truncate;
mod value;

pub use bigint::{BigInt, ParseBigIntError};
pub use error::RenderError;
pub use number::format_js_number;
pub use render::{
    CIRCULAR_MARKER, CyclePolicy, RenderOptions, UNSERIALIZABLE_MARKER, render, render_plain,
    render_with, to_json, try_render,
};
pub use truncate::{ContentKind, DEFAULT_MAX_STRING_LEN, classify, truncate_string};
pub use value::{CustomValue, ErrorRef, Function, ListRef, MapRef, Symbol, Value};
