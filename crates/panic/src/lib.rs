//! Panic bridge for the exception model
//!
//! Converts panics into [`Exception`](exception_core::Exception) values at
//! recovery points:
//! - [`raise`]: unwind with a value wrapped in a bridge exception
//! - [`recover`]: normalize an intercepted panic payload
//! - [`catch`]: run a closure as a recovery point
//!
//! The stack of the panicking code is captured by a panic hook (installed by
//! [`catch`] or [`install_hook`]) and trimmed of the runtime's dispatch
//! frames, so frame 0 of a recovered trace is the code that panicked.
//!
//! ```
//! use exception_core::ExceptionCore;
//! use exception_panic::{catch, PANICKED};
//!
//! let err = catch(|| -> u32 { panic!("boom") }).unwrap_err();
//! assert_eq!(err.type_tag(), PANICKED);
//! assert_eq!(err.recovered().and_then(|r| r.as_str()), Some("boom"));
//! ```

#![warn(missing_docs)]

pub mod bridge;
pub mod config;
pub mod error;
pub mod hook;
pub mod trim;

pub use bridge::{catch, is_panicked, raise, recover, PANICKED, PANIC_ERROR};
pub use config::{
    configure, current_config, PanicConfig, CONFIG_FILE_NAME, DEFAULT_DISPATCH_MARKERS,
};
pub use error::{ConfigError, ConfigResult};
pub use hook::{hook_installed, install_hook};
pub use trim::trim_dispatch_frames;
