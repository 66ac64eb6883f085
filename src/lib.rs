//! Exception - structured error values for Rust
//!
//! An exception carries a type tag, a message, the errors that caused it,
//! errors suppressed while handling it, the value recovered from a panic and
//! the stack trace of where it was raised. Every field is optional, and the
//! value picks the smallest representation that holds what it carries.
//!
//! # Quick Start
//!
//! ```
//! use exception::{join, Exception, ExceptionCore};
//!
//! const ERR_READ: Exception = Exception::sentinel("Io: read failed");
//!
//! let err = Exception::with_message("Config", "cannot load {}", &[&"app.toml"])
//!     .add_cause([ERR_READ])
//!     .add_suppressed(join([Exception::sentinel("Close")]))
//!     .fill_stack_trace(0);
//!
//! assert_eq!(err.to_string(), "Config: cannot load app.toml");
//! assert!(exception::find(&err, &Exception::sentinel("Io")).is_some());
//! ```
//!
//! # Architecture
//!
//! - `exception-core`: the value model, merging, matching and stack capture
//! - `exception-panic`: turns panics into exceptions at recovery points
//! - `exception-log`: emits exceptions as structured `tracing` events

pub use exception_core::*;

/// Panic bridge
pub mod panic {
    pub use exception_panic::*;
}

/// Structured logging
pub mod log {
    pub use exception_log::*;
}

pub use exception_log::LogExt;
pub use exception_panic::{catch, raise, recover};
