//! Shared handles to underlying errors
//!
//! Causes and suppressed errors are stored as [`ErrorRef`]s: reference
//! counted handles to any `std::error::Error + Send + Sync`. Cloning a list
//! of them never copies the errors themselves.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::matching::as_core;
use crate::repr::{MultiError, Pair, Sentinel};
use crate::traits::ExceptionCore;
use crate::Exception;

/// Shared handle to an underlying error
#[derive(Clone)]
pub struct ErrorRef(Arc<dyn Error + Send + Sync + 'static>);

impl ErrorRef {
    /// Wrap an error
    pub fn new<E: Error + Send + Sync + 'static>(error: E) -> Self {
        Self(Arc::new(error))
    }

    /// Wrap an already shared error
    pub fn from_arc(error: Arc<dyn Error + Send + Sync + 'static>) -> Self {
        Self(error)
    }

    /// Wrap a boxed error without re-boxing it
    pub fn from_boxed(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self(Arc::from(error))
    }

    /// Borrow the underlying error
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.0
    }

    /// Borrow the underlying error as `T`
    pub fn downcast_ref<T: Error + 'static>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// View the underlying error as an exception, whatever its representation
    pub fn as_core(&self) -> Option<&dyn ExceptionCore> {
        as_core(self.as_error())
    }

    /// Elements of the underlying error if it is a multi-error
    pub(crate) fn as_multi(&self) -> Option<&[ErrorRef]> {
        match self.0.downcast_ref::<Exception>() {
            Some(Exception::Multi(multi)) => Some(multi.errors()),
            Some(_) => None,
            None => self.0.downcast_ref::<MultiError>().map(MultiError::errors),
        }
    }

    /// Whether both handles point at the same error
    pub fn ptr_eq(&self, other: &ErrorRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ErrorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for ErrorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl<E: Error + Send + Sync + 'static> From<E> for ErrorRef {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl AsRef<dyn Error + Send + Sync + 'static> for ErrorRef {
    fn as_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.as_error()
    }
}

/// Argument accepted wherever errors are attached or joined
///
/// `None` plays the role of a nil error and is skipped.
pub trait IntoErrorRef {
    /// Convert into a handle, or `None` for a nil error
    fn into_error_ref(self) -> Option<ErrorRef>;
}

impl IntoErrorRef for ErrorRef {
    fn into_error_ref(self) -> Option<ErrorRef> {
        Some(self)
    }
}

impl IntoErrorRef for &ErrorRef {
    fn into_error_ref(self) -> Option<ErrorRef> {
        Some(self.clone())
    }
}

impl IntoErrorRef for Exception {
    fn into_error_ref(self) -> Option<ErrorRef> {
        Some(ErrorRef::new(self))
    }
}

impl IntoErrorRef for &Exception {
    fn into_error_ref(self) -> Option<ErrorRef> {
        Some(ErrorRef::new(self.clone()))
    }
}

impl IntoErrorRef for Sentinel {
    fn into_error_ref(self) -> Option<ErrorRef> {
        Exception::from(self).into_error_ref()
    }
}

impl IntoErrorRef for Pair {
    fn into_error_ref(self) -> Option<ErrorRef> {
        Exception::from(self).into_error_ref()
    }
}

impl IntoErrorRef for MultiError {
    fn into_error_ref(self) -> Option<ErrorRef> {
        Exception::from(self).into_error_ref()
    }
}

impl<T: IntoErrorRef> IntoErrorRef for Option<T> {
    fn into_error_ref(self) -> Option<ErrorRef> {
        self.and_then(IntoErrorRef::into_error_ref)
    }
}
