//! Tracing subscriber integration.
//!
//! Provides a tracing `Layer` that prints each event's message as a colored
//! line, followed by its structured fields rendered as one mapping value.

use std::fmt;
use std::sync::Arc;

use lablog_core::{ErrorRef, MapRef, Value};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

use super::{header, level_route};
use crate::console::{LabConsole, shared_console};
use crate::loggable::Loggable;

/// A tracing layer that writes events through a [`LabConsole`].
pub struct ConsoleLayer {
    console: Arc<LabConsole>,
    include_timestamps: bool,
    include_targets: bool,
}

impl ConsoleLayer {
    /// Create a layer writing through `console`.
    #[must_use]
    pub fn new(console: Arc<LabConsole>) -> Self {
        Self {
            console,
            include_timestamps: true,
            include_targets: true,
        }
    }

    /// Toggle the `HH:MM:SS` prefix.
    #[must_use]
    pub fn with_timestamps(mut self, show: bool) -> Self {
        self.include_timestamps = show;
        self
    }

    /// Toggle the target prefix.
    #[must_use]
    pub fn with_targets(mut self, show: bool) -> Self {
        self.include_targets = show;
        self
    }
}

struct FieldCollector {
    message: Option<String>,
    fields: MapRef,
}

impl FieldCollector {
    fn new() -> Self {
        Self {
            message: None,
            fields: MapRef::new(),
        }
    }

    fn record_value(&mut self, field: &Field, value: Value) {
        self.fields.set(field.name(), value);
    }
}

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            if self.message.is_none() {
                self.message = Some(format!("{value:?}"));
            }
        } else {
            self.record_value(field, Value::String(format!("{value:?}")));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            if self.message.is_none() {
                self.message = Some(value.to_string());
            }
        } else {
            self.record_value(field, Value::from(value));
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.record_value(field, Value::Bool(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_value(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.record_value(field, Value::from(value));
    }

    fn record_i128(&mut self, field: &Field, value: i128) {
        self.record_value(field, Value::from(value));
    }

    fn record_u128(&mut self, field: &Field, value: u128) {
        self.record_value(field, Value::from(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.record_value(field, Value::Number(value));
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.record_value(field, Value::Error(ErrorRef::from_error(value)));
    }
}

fn to_log_level(level: tracing::Level) -> log::Level {
    match level {
        tracing::Level::ERROR => log::Level::Error,
        tracing::Level::WARN => log::Level::Warn,
        tracing::Level::INFO => log::Level::Info,
        tracing::Level::DEBUG => log::Level::Debug,
        tracing::Level::TRACE => log::Level::Trace,
    }
}

impl<S> Layer<S> for ConsoleLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut collector = FieldCollector::new();
        event.record(&mut collector);

        if let Some(scope) = ctx.event_scope(event) {
            let spans: Vec<&str> = scope.from_root().map(|span| span.name()).collect();
            if !spans.is_empty() {
                collector.fields.set("span", spans.join("::"));
            }
        }

        let level = to_log_level(*metadata.level());
        let message = collector
            .message
            .unwrap_or_else(|| metadata.name().to_string());
        let target = self.include_targets.then(|| metadata.target());

        let mut units = vec![Loggable::Text(header(
            level,
            target,
            &message,
            self.include_timestamps,
        ))];
        if !collector.fields.is_empty() {
            units.push(Loggable::Value(Value::Map(collector.fields)));
        }

        let (color, stream) = level_route(level);
        self.console.log(units, color, stream);
    }
}

/// Builder for configuring a console tracing subscriber.
#[derive(Debug)]
pub struct ConsoleSubscriberBuilder {
    show_timestamps: bool,
    show_targets: bool,
    level_filter: LevelFilter,
    console: Option<Arc<LabConsole>>,
}

impl Default for ConsoleSubscriberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSubscriberBuilder {
    /// Create a new builder with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            show_timestamps: true,
            show_targets: true,
            level_filter: LevelFilter::INFO,
            console: None,
        }
    }

    /// Toggle timestamp rendering.
    #[must_use]
    pub fn with_timestamps(mut self, show: bool) -> Self {
        self.show_timestamps = show;
        self
    }

    /// Toggle target rendering.
    #[must_use]
    pub fn with_targets(mut self, show: bool) -> Self {
        self.show_targets = show;
        self
    }

    /// Set the minimum log level.
    #[must_use]
    pub fn with_level_filter(mut self, filter: LevelFilter) -> Self {
        self.level_filter = filter;
        self
    }

    /// Write through `console` instead of the global one.
    #[must_use]
    pub fn with_console(mut self, console: Arc<LabConsole>) -> Self {
        self.console = Some(console);
        self
    }

    /// Build the subscriber without installing it.
    #[must_use]
    pub fn build(self) -> impl Subscriber + Send + Sync + 'static {
        let layer = ConsoleLayer::new(self.console.unwrap_or_else(shared_console))
            .with_timestamps(self.show_timestamps)
            .with_targets(self.show_targets);

        tracing_subscriber::registry()
            .with(self.level_filter)
            .with(layer)
    }

    /// Build and install as the global subscriber.
    pub fn init(self) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
        tracing::subscriber::set_global_default(self.build())
    }
}
