//! Structured logging of exceptions
//!
//! Emits one `tracing` event per exception on the [`LOG_TARGET`] target.
//! The event carries the fields the exception actually has:
//!
//! | Field | Recorded when | Value |
//! |---|---|---|
//! | `error` | always | type tag |
//! | `message` | message non-empty | message |
//! | `cause` | causes present | JSON, an object for one cause, an array for several |
//! | `suppressed` | suppressed errors present | JSON, same shape as `cause` |
//! | `recovered` | recovered value present | its description |
//! | `stack_trace` | trace present | JSON array of `{function, file, line}` |
//!
//! Field selection is the `Serialize` implementation of the exception; this
//! crate only forwards the selected fields.

#![warn(missing_docs)]

use exception_core::{Exception, ExceptionCore};
use serde_json::Value;
use tracing::field::display;
use tracing::Level;

/// Target of every event emitted by this crate
pub const LOG_TARGET: &str = "exception";

/// The event fields of one exception
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LogFields {
    /// Type tag, the identity consumers select on
    pub error: String,
    /// Message, when non-empty
    pub message: Option<String>,
    /// Causes as JSON
    pub cause: Option<String>,
    /// Suppressed errors as JSON
    pub suppressed: Option<String>,
    /// Recovered value description
    pub recovered: Option<String>,
    /// Stack trace as JSON
    pub stack_trace: Option<String>,
}

impl LogFields {
    /// Select the fields of `exception`
    pub fn of(exception: &Exception) -> Self {
        let mut selected = match serde_json::to_value(exception) {
            Ok(Value::Object(map)) => map,
            _ => Default::default(),
        };
        let mut json_field = |name: &str| selected.remove(name).map(|value| value.to_string());
        Self {
            error: exception.type_tag().to_string(),
            message: Some(exception.message())
                .filter(|message| !message.is_empty())
                .map(str::to_string),
            cause: json_field("cause"),
            suppressed: json_field("suppressed"),
            recovered: exception.recovered().map(|recovered| recovered.describe()),
            stack_trace: json_field("stack_trace"),
        }
    }
}

macro_rules! emit {
    ($level:expr, $fields:expr) => {
        tracing::event!(
            target: LOG_TARGET,
            $level,
            error = %$fields.error,
            message = $fields.message.as_deref().map(display),
            cause = $fields.cause.as_deref().map(display),
            suppressed = $fields.suppressed.as_deref().map(display),
            recovered = $fields.recovered.as_deref().map(display),
            stack_trace = $fields.stack_trace.as_deref().map(display),
        )
    };
}

/// Emit `exception` as a `tracing` event at `level`
pub fn log_exception(exception: &Exception, level: Level) {
    let fields = LogFields::of(exception);
    if level == Level::ERROR {
        emit!(Level::ERROR, fields);
    } else if level == Level::WARN {
        emit!(Level::WARN, fields);
    } else if level == Level::INFO {
        emit!(Level::INFO, fields);
    } else if level == Level::DEBUG {
        emit!(Level::DEBUG, fields);
    } else {
        emit!(Level::TRACE, fields);
    }
}

/// Log-and-continue helpers
pub trait LogExt: Sized {
    /// Log at `level` and return `self`
    fn log(self, level: Level) -> Self;

    /// Log at `ERROR` and return `self`
    fn log_error(self) -> Self {
        self.log(Level::ERROR)
    }
}

impl LogExt for Exception {
    fn log(self, level: Level) -> Self {
        log_exception(&self, level);
        self
    }
}

/// Only the `Err` side is logged
impl<T> LogExt for Result<T, Exception> {
    fn log(self, level: Level) -> Self {
        if let Err(exception) = &self {
            log_exception(exception, level);
        }
        self
    }
}
