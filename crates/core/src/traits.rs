//! The exception capability set
//!
//! [`ExceptionCore`] is implemented by every representation and by the
//! [`Exception`] sum type. Accessors are object safe so any representation
//! can be inspected as `&dyn ExceptionCore`; transformations consume the
//! receiver and return the resulting [`Exception`], which may be a promoted
//! representation. Callers must always continue with the returned value.

use std::any::Any;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use crate::cause::{ErrorRef, IntoErrorRef};
use crate::matching::as_core;
use crate::recovered::Recovered;
use crate::stack::{capture_stack, StackTrace};
use crate::Exception;

/// Structured error context: type, message, causes, suppressed errors,
/// recovered value and stack trace
///
/// None of the operations fail. Absent data is reported as an empty string,
/// an empty slice or `None`.
pub trait ExceptionCore: Error + Send + Sync + 'static {
    /// Type tag, the identity used for matching
    fn type_tag(&self) -> &str;

    /// Human readable message, empty when absent
    fn message(&self) -> &str;

    /// Underlying causes, in attachment order
    fn causes(&self) -> &[ErrorRef];

    /// Errors observed while handling this one but not propagated
    fn suppressed(&self) -> &[ErrorRef];

    /// Value captured when a raise was intercepted
    fn recovered(&self) -> Option<&Recovered>;

    /// Captured stack trace, innermost frame first
    fn stack_trace(&self) -> Option<&StackTrace>;

    /// Store a message, expanding `{}` placeholders from `params` when any
    /// are given
    ///
    /// An empty message leaves the receiver unchanged, parameters or not.
    fn set_message<M>(self, message: M, params: &[&dyn fmt::Display]) -> Exception
    where
        Self: Sized,
        M: Into<Cow<'static, str>>;

    /// Attach causes, flattening multi-errors and skipping `None`
    ///
    /// Returns the receiver unchanged when nothing is attached.
    fn add_cause<I>(self, errors: I) -> Exception
    where
        Self: Sized,
        I: IntoIterator,
        I::Item: IntoErrorRef;

    /// Attach suppressed errors, flattening multi-errors and skipping `None`
    ///
    /// Returns the receiver unchanged when nothing is attached.
    fn add_suppressed<I>(self, errors: I) -> Exception
    where
        Self: Sized,
        I: IntoIterator,
        I::Item: IntoErrorRef;

    /// Store a recovered value; `None` leaves the receiver unchanged
    fn set_recovered(self, recovered: Option<Recovered>) -> Exception
    where
        Self: Sized;

    /// Store an already captured stack trace
    fn set_stack_trace(self, trace: StackTrace) -> Exception
    where
        Self: Sized;

    /// Capture the current stack and store it
    ///
    /// `skip = 0` makes the caller of `fill_stack_trace` frame 0.
    #[inline(never)]
    fn fill_stack_trace(self, skip: usize) -> Exception
    where
        Self: Sized,
    {
        let trace = capture_stack(skip + 1);
        self.set_stack_trace(trace)
    }

    /// Whether `target` is an exception with the same type tag
    ///
    /// Message, causes and the rest are ignored. Non-exception targets never
    /// match.
    fn is(&self, target: &(dyn Error + 'static)) -> bool {
        as_core(target).is_some_and(|target| target.type_tag() == self.type_tag())
    }

    /// Write a copy of this exception into `target` if it is an
    /// [`Exception`] slot whose current type tag equals this one's
    ///
    /// Returns `false` and leaves `target` untouched otherwise.
    fn cast_into(&self, target: &mut dyn Any) -> bool
    where
        Self: Sized + Clone + Into<Exception>,
    {
        match target.downcast_mut::<Exception>() {
            Some(slot) if slot.type_tag() == self.type_tag() => {
                *slot = self.clone().into();
                true
            }
            _ => false,
        }
    }
}
