//! Logger frontend: a named channel fanning records out to its handlers.
//!
//! Responsibilities:
//! - Hold the ordered handler chain and dispatch records to it.
//!
//! Does NOT handle:
//! - Handler construction (see registry.rs / builder.rs).
//!
//! Invariants:
//! - Handlers receive records in attachment order.
//! - The chain is append-only; the builder never returns a logger with a
//!   partially constructed chain.

use std::io;

use serde_json::{Map, Value};

use crate::handler::Handler;
use crate::severity::Severity;

/// One log event.
#[derive(Debug, Clone)]
pub struct Record {
    pub severity: Severity,
    pub message: String,
    /// Structured context attached to the event; empty by default.
    pub context: Map<String, Value>,
}

impl Record {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            context: Map::new(),
        }
    }

    pub fn with_context(mut self, context: Map<String, Value>) -> Self {
        self.context = context;
        self
    }
}

/// A named logger with an ordered handler chain.
pub struct Logger {
    name: String,
    handlers: Vec<Box<dyn Handler>>,
}

impl Logger {
    /// Create a logger with no handlers attached.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handlers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a handler to the end of the chain.
    pub fn append_handler(&mut self, handler: Box<dyn Handler>) {
        self.handlers.push(handler);
    }

    /// The handler chain in attachment order.
    pub fn handlers(&self) -> &[Box<dyn Handler>] {
        &self.handlers
    }

    /// Log a message, fanning out to every handler whose threshold the
    /// severity meets.
    pub fn log(&mut self, severity: Severity, message: &str) -> io::Result<()> {
        self.log_record(&Record::new(severity, message))
    }

    /// Log a prebuilt record.
    pub fn log_record(&mut self, record: &Record) -> io::Result<()> {
        for handler in &mut self.handlers {
            if handler.is_handling(record.severity) {
                handler.handle(record)?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let classes: Vec<&str> = self.handlers.iter().map(|h| h.class()).collect();
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("handlers", &classes)
            .finish()
    }
}
