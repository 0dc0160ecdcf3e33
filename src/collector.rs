//! This module provides a `tracing` layer that forwards log events to the
//! console sink.
use crate::console::ConsoleSink;
use crate::entry::{FieldValue, LogEntry};
use crate::severity::Severity;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{Event, Metadata, Subscriber};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    registry::LookupSpan,
    EnvFilter, Layer,
};

/// A `tracing` layer that converts events into entries for a `ConsoleSink`.
pub struct ConsoleCollector {
    sink: Arc<ConsoleSink>,
}

impl ConsoleCollector {
    /// Creates a new `ConsoleCollector`.
    ///
    /// # Arguments
    ///
    /// * `sink` - The `ConsoleSink` that receives converted entries.
    pub fn new(sink: Arc<ConsoleSink>) -> Self {
        Self { sink }
    }

    /// Initializes the `tracing` subscriber with console output.
    ///
    /// This sets up the global default subscriber for the application.
    ///
    /// # Arguments
    ///
    /// * `sink` - The `ConsoleSink` to use for console output.
    ///
    /// # Errors
    ///
    /// This function will return an error if the global default subscriber
    /// cannot be set.
    pub fn init_subscriber(
        sink: Arc<ConsoleSink>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let collector = ConsoleCollector::new(sink);
        let subscriber = tracing_subscriber::registry().with(collector);

        tracing::subscriber::set_global_default(subscriber)?;
        Ok(())
    }

    /// Initializes the `tracing` subscriber with console output behind an
    /// environment-driven level filter.
    ///
    /// # Arguments
    ///
    /// * `sink` - The `ConsoleSink` to use for console output.
    /// * `filter` - The level filter applied before events reach the sink.
    ///
    /// # Errors
    ///
    /// This function will return an error if the global default subscriber
    /// cannot be set.
    pub fn init_subscriber_with_filter(
        sink: Arc<ConsoleSink>,
        filter: EnvFilter,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let collector = ConsoleCollector::new(sink);
        let subscriber = tracing_subscriber::registry().with(filter).with(collector);

        tracing::subscriber::set_global_default(subscriber)?;
        Ok(())
    }
}

impl<S> Layer<S> for ConsoleCollector
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    /// Declares interest in every event regardless of severity.
    ///
    /// Level filtering belongs to the surrounding subscriber stack, not
    /// to the sink.
    fn enabled(&self, _metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        true
    }

    /// Handles a `tracing` event.
    ///
    /// This function is called by the `tracing` subscriber whenever a new
    /// event is recorded. It extracts the message and fields from the
    /// event, resolves the module name, and emits the resulting entry on
    /// the console sink.
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Extract the message and fields from the event.
        let mut visitor = EntryVisitor::default();
        event.record(&mut visitor);

        let mut fields = visitor.fields;

        // Fall back to the module path when the call site attached no
        // module field.
        if !fields.contains_key("module") {
            let module = if let Some(module_path) = metadata.module_path() {
                // Extract the last component for cleaner display.
                module_path
                    .split("::")
                    .last()
                    .unwrap_or(module_path)
                    .to_string()
            } else {
                metadata.target().to_string()
            };
            fields.insert("module".to_string(), FieldValue::Text(module));
        }

        let entry = LogEntry {
            timestamp: Utc::now(),
            level: Severity::from(*metadata.level()),
            message: visitor.message,
            fields,
        };

        // `on_event` has no error channel, so a failed console write is
        // reported on raw stderr rather than dropped.
        if let Err(e) = self.sink.emit(&entry) {
            eprintln!("{}: {}", e, e.source);
        }
    }
}

/// A `tracing::field::Visit` implementation that captures the message and
/// the remaining fields of an event.
#[derive(Default)]
struct EntryVisitor {
    message: String,
    fields: BTreeMap<String, FieldValue>,
}

impl tracing::field::Visit for EntryVisitor {
    /// Records a debug-formatted value.
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.insert(
                field.name().to_string(),
                FieldValue::Other(format!("{:?}", value)),
            );
        }
    }

    /// Records a string value.
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields
                .insert(field.name().to_string(), FieldValue::Text(value.to_string()));
        }
    }

    /// Records an `i64` value.
    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields
                .insert(field.name().to_string(), FieldValue::Int(value));
        }
    }

    /// Records a `u64` value.
    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields
                .insert(field.name().to_string(), FieldValue::Uint(value));
        }
    }

    /// Records an `f64` value.
    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields
                .insert(field.name().to_string(), FieldValue::Float(value));
        }
    }

    /// Records a `bool` value.
    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields
                .insert(field.name().to_string(), FieldValue::Bool(value));
        }
    }
}
