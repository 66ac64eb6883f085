//! Shared test utilities for the integration suites.
//!
//! Import via `mod common;` from a suite's main.rs.

#![allow(dead_code)]

use exception::{ErrorRef, Exception, ExceptionCore, Representation};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

// ============================================================================
// Builders
// ============================================================================

/// Every representation, each holding type "T" where it can
pub fn every_representation() -> Vec<Exception> {
    vec![
        Exception::sentinel("T"),
        Exception::with_message("T", "m", &[]),
        Exception::sentinel("T: m").add_cause([Exception::sentinel("C")]),
        exception::join([Exception::sentinel("A"), Exception::sentinel("B")]).unwrap(),
    ]
}

/// Leaf exception named `E{n}`
pub fn leaf(n: usize) -> Exception {
    Exception::from(format!("E{}", n))
}

/// Display strings of a list of errors
pub fn names(errors: &[ErrorRef]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}

/// Everything observable about an exception except identity
#[derive(Debug, Clone, PartialEq)]
pub struct Observed {
    pub representation: Representation,
    pub type_tag: String,
    pub message: String,
    pub causes: Vec<String>,
    pub suppressed: Vec<String>,
    pub recovered: Option<String>,
    pub has_trace: bool,
}

pub fn observe(err: &Exception) -> Observed {
    Observed {
        representation: err.representation(),
        type_tag: err.type_tag().to_string(),
        message: err.message().to_string(),
        causes: names(err.causes()),
        suppressed: names(err.suppressed()),
        recovered: err.recovered().map(|recovered| recovered.describe()),
        has_trace: err.stack_trace().is_some(),
    }
}

// ============================================================================
// Log capture
// ============================================================================

/// In-memory writer for `tracing-subscriber`
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a plain-text subscriber and return what it logged
pub fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    buffer.contents()
}
