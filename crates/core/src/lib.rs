//! Exception value model
//!
//! This crate defines the structured error value used throughout the
//! workspace:
//! - [`ExceptionCore`]: the capability trait every representation implements
//! - Representations: [`Sentinel`], [`Pair`], [`Record`], [`MultiError`]
//! - [`Exception`]: the closed sum of the representations
//! - Merge: [`join`] and the flattening helpers in [`merge`]
//! - Matching: [`ExceptionCore::is`], [`ExceptionCore::cast_into`], [`matching::find`]
//! - Stack capture: [`capture_stack`], [`StackTrace`]
//! - Supporting types: [`ErrorRef`], [`Recovered`], [`Template`]
//!
//! Exceptions are immutable values. Every transformation consumes the
//! receiver and returns the resulting exception, promoting it to a richer
//! representation when the new data does not fit the old one.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cause;
pub mod exception;
pub mod matching;
pub mod merge;
pub mod recovered;
pub mod repr;
mod serialize;
pub mod stack;
pub mod template;
pub mod traits;

pub use cause::{ErrorRef, IntoErrorRef};
pub use exception::{Exception, Representation};
pub use matching::{as_core, find, matches};
pub use merge::join;
pub use recovered::Recovered;
pub use repr::{MultiError, Pair, Record, Sentinel};
pub use stack::{capture_stack, StackFrame, StackTrace, MAX_STACK_DEPTH};
pub use template::{format_template, Template};
pub use traits::ExceptionCore;
