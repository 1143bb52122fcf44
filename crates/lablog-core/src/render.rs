//! The safe value renderer.
//!
//! [`render`] turns any [`Value`] graph into pretty-printed, JSON-shaped text
//! and never fails:
//!
//! 1. The graph is lowered to an order-preserving `serde_json::Value`,
//!    applying the per-kind rules (big integers as `"123n"`, callables as
//!    `"[Function name]"`, symbols as `"Symbol(desc)"`, errors expanded to
//!    mappings, every string size-bounded, cycles replaced by
//!    `"[Circular]"`).
//! 2. The tree is written with a 4-space indent.
//! 3. If either step fails, the value's raw coercion is returned instead,
//!    and if that fails too, the fixed `[Unserializable]` marker.
//!
//! All state lives in a per-call [`Walker`]; nothing is shared between calls.

use std::collections::HashSet;

use log::debug;
use serde::Serialize;
use serde_json::Value as Json;

use crate::error::RenderError;
use crate::logging::targets;
use crate::number::JsFormatter;
use crate::truncate::{DEFAULT_MAX_STRING_LEN, truncate_string};
use crate::value::{MAX_SAFE_INTEGER, Value};

/// Emitted in place of a composite that is already being rendered.
pub const CIRCULAR_MARKER: &str = "[Circular]";

/// Returned when both structural rendering and raw coercion fail.
pub const UNSERIALIZABLE_MARKER: &str = "[Unserializable]";

/// Returned for a top-level [`Value::Undefined`].
pub const UNDEFINED_TEXT: &str = "undefined";

/// Default nesting limit.
///
/// Lowering, writing and dropping a tree all recurse once per level, so the
/// limit has to stay well inside a 2 MiB thread stack in debug builds. An
/// acyclic value nested deeper than this falls back to raw coercion
/// (`[List(n)]` / `[Object]`). Raise it with [`RenderOptions::with_max_depth`]
/// when the caller runs on a bigger stack.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Default limit on the number of values visited in one call.
///
/// Bounds the output of graphs that share nodes heavily: a chain of lists
/// each holding the next one twice doubles in rendered size per level.
pub const DEFAULT_MAX_NODES: usize = 250_000;

/// Default indentation width, in spaces.
pub const DEFAULT_INDENT: usize = 4;

/// Which repeated identities collapse to [`CIRCULAR_MARKER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CyclePolicy {
    /// Only an object that is its own ancestor collapses. Shared but acyclic
    /// references are rendered in full at every occurrence.
    #[default]
    AncestorChain,
    /// Any object seen earlier in the same call collapses, even when the
    /// earlier occurrence was a sibling rather than an ancestor.
    SharedIdentity,
}

impl CyclePolicy {
    /// Parses `ancestors` / `shared` (case-insensitive).
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "ancestors" | "ancestor" | "cycles" => Some(Self::AncestorChain),
            "shared" | "identity" | "all" => Some(Self::SharedIdentity),
            _ => None,
        }
    }
}

/// Knobs for a render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Size budget for each string, in characters.
    pub max_string_len: usize,
    /// Cycle collapsing policy.
    pub cycle_policy: CyclePolicy,
    /// Nesting deeper than this is an encoding failure. See
    /// [`DEFAULT_MAX_DEPTH`] for the stack trade-off.
    pub max_depth: usize,
    /// Visiting more values than this is an encoding failure.
    pub max_nodes: usize,
    /// Spaces per indentation level.
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_string_len: DEFAULT_MAX_STRING_LEN,
            cycle_policy: CyclePolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            max_nodes: DEFAULT_MAX_NODES,
            indent: DEFAULT_INDENT,
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_string_len(mut self, max: usize) -> Self {
        self.max_string_len = max;
        self
    }

    #[must_use]
    pub fn with_cycle_policy(mut self, policy: CyclePolicy) -> Self {
        self.cycle_policy = policy;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    #[must_use]
    pub fn with_max_nodes(mut self, nodes: usize) -> Self {
        self.max_nodes = nodes;
        self
    }

    #[must_use]
    pub fn with_indent(mut self, spaces: usize) -> Self {
        self.indent = spaces;
        self
    }
}

/// Renders `value` with the default options and the given string budget.
#[must_use]
pub fn render(value: &Value, max_string_len: usize) -> String {
    render_with(value, &RenderOptions::new().with_max_string_len(max_string_len))
}

/// Renders `value` with explicit options. Never fails.
#[must_use]
pub fn render_with(value: &Value, options: &RenderOptions) -> String {
    match try_render(value, options) {
        Ok(text) => text,
        Err(err) => {
            debug!(
                target: targets::RENDER,
                "structured render of {} failed, coercing: {err}",
                value.kind()
            );
            match value.coerce(options.max_string_len) {
                Ok(text) => text,
                Err(err) => {
                    debug!(target: targets::RENDER, "raw coercion failed: {err}");
                    UNSERIALIZABLE_MARKER.to_string()
                }
            }
        }
    }
}

/// Structural rendering without the fallback chain.
///
/// # Errors
///
/// Returns the first encoding failure: nesting past `max_depth`, more than
/// `max_nodes` values, a custom value's `to_value` error, or a serde_json
/// write error.
pub fn try_render(value: &Value, options: &RenderOptions) -> Result<String, RenderError> {
    let Some(json) = to_json(value, options)? else {
        return Ok(UNDEFINED_TEXT.to_string());
    };

    let indent = " ".repeat(options.indent);
    let mut buf = Vec::with_capacity(128);
    let formatter = JsFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    json.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

/// Lowers `value` to a JSON tree with every rendering rule applied.
///
/// Returns `Ok(None)` for a top-level [`Value::Undefined`].
///
/// # Errors
///
/// Same as [`try_render`], minus the write step.
pub fn to_json(value: &Value, options: &RenderOptions) -> Result<Option<Json>, RenderError> {
    Walker::new(options).lower(value, 0)
}

/// Raw-string path used by the console for top-level text: size-bounding
/// only, no quoting or escaping.
#[must_use]
pub fn render_plain(text: &str, max_string_len: usize) -> String {
    truncate_string(text, max_string_len).into_owned()
}

/// Per-call walk state.
struct Walker<'a> {
    options: &'a RenderOptions,
    /// Identities of composites on the current path (or, under
    /// [`CyclePolicy::SharedIdentity`], seen anywhere so far).
    visited: HashSet<usize>,
    /// Values lowered so far.
    nodes: usize,
}

impl<'a> Walker<'a> {
    fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            visited: HashSet::new(),
            nodes: 0,
        }
    }

    fn lower(&mut self, value: &Value, depth: usize) -> Result<Option<Json>, RenderError> {
        self.nodes += 1;
        if self.nodes > self.options.max_nodes {
            return Err(RenderError::BudgetExceeded(self.options.max_nodes));
        }

        let json = match value {
            Value::Undefined => return Ok(None),
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Number(n) => number(*n),
            Value::BigInt(b) => Json::String(format!("{b}n")),
            Value::String(s) => Json::String(self.bounded(s)),
            Value::Symbol(s) => Json::String(s.to_string()),
            Value::Function(f) => Json::String(f.to_string()),
            Value::Error(err) => {
                // Errors are expanded afresh at every occurrence
                return self.guarded(err.identity(), depth, false, |walker, depth| {
                    walker.lower_entries(err.expand(), depth).map(Some)
                });
            }
            Value::List(list) => {
                return self.guarded(list.identity(), depth, true, |walker, depth| {
                    let items = list.snapshot();
                    let mut out = Vec::with_capacity(items.len());
                    for item in &items {
                        out.push(walker.lower(item, depth)?.unwrap_or(Json::Null));
                    }
                    Ok(Some(Json::Array(out)))
                });
            }
            Value::Map(map) => {
                return self.guarded(map.identity(), depth, true, |walker, depth| {
                    walker.lower_entries(map.entries(), depth).map(Some)
                });
            }
            Value::Custom(custom) => {
                let id = std::sync::Arc::as_ptr(custom).cast::<()>() as usize;
                return self.guarded(id, depth, true, |walker, depth| {
                    let view = custom.to_value()?;
                    walker.lower(&view, depth)
                });
            }
        };
        Ok(Some(json))
    }

    /// Mapping entries in order; `Undefined` entries are dropped.
    fn lower_entries(
        &mut self,
        entries: Vec<(String, Value)>,
        depth: usize,
    ) -> Result<Json, RenderError> {
        let mut out = serde_json::Map::with_capacity(entries.len());
        for (key, value) in entries {
            if let Some(json) = self.lower(&value, depth)? {
                out.insert(key, json);
            }
        }
        Ok(Json::Object(out))
    }

    /// Runs `body` for a composite with identity `id`, one level deeper.
    ///
    /// With `shareable` unset the identity only marks the current path, even
    /// under [`CyclePolicy::SharedIdentity`].
    fn guarded<F>(
        &mut self,
        id: usize,
        depth: usize,
        shareable: bool,
        body: F,
    ) -> Result<Option<Json>, RenderError>
    where
        F: FnOnce(&mut Self, usize) -> Result<Option<Json>, RenderError>,
    {
        if depth >= self.options.max_depth {
            return Err(RenderError::DepthExceeded(self.options.max_depth));
        }
        if !self.visited.insert(id) {
            return Ok(Some(Json::String(CIRCULAR_MARKER.to_string())));
        }

        let result = body(self, depth + 1);

        if !shareable || self.options.cycle_policy == CyclePolicy::AncestorChain {
            self.visited.remove(&id);
        }
        result
    }

    fn bounded(&self, s: &str) -> String {
        truncate_string(s, self.options.max_string_len).into_owned()
    }
}

/// NaN and infinities have no JSON literal and become `null`. Integral values
/// in the exact range print without a fractional part; other numbers are
/// written by [`JsFormatter`].
fn number(n: f64) -> Json {
    if !n.is_finite() {
        return Json::Null;
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return Json::from(n as i64);
    }
    serde_json::Number::from_f64(n).map_or(Json::Null, Json::Number)
}
