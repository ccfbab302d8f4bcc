//! Response accumulation.
//!
//! The dispatcher appends each successful return value to a `ResponseSink`
//! passed in by the caller. How those values are serialized and sent back is
//! the caller's business; `ResponseManager` is the plain collecting sink.

use serde_json::Value;

/// Receives the return value of every successful dispatch.
pub trait ResponseSink {
    fn append(&mut self, value: Value);
}

/// Collects dispatch results in arrival order.
#[derive(Debug, Clone, Default)]
pub struct ResponseManager {
    values: Vec<Value>,
}

impl ResponseManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The most recently appended value.
    pub fn last(&self) -> Option<&Value> {
        self.values.last()
    }

    /// Drain into a JSON array.
    pub fn into_json(self) -> Value {
        Value::Array(self.values)
    }
}

impl ResponseSink for ResponseManager {
    fn append(&mut self, value: Value) {
        tracing::trace!("[Response] append {}", value);
        self.values.push(value);
    }
}
