//! The exception sum type

use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use crate::cause::{ErrorRef, IntoErrorRef};
use crate::recovered::Recovered;
use crate::repr::{MultiError, Pair, Record, Sentinel};
use crate::stack::StackTrace;
use crate::template::{expand_message, format_template};
use crate::traits::ExceptionCore;

/// Any exception, in whichever representation it currently has
///
/// Every transformation returns a new `Exception`, so code written against
/// this type never has to care which representation it is holding.
///
/// ```
/// use exception_core::{Exception, ExceptionCore};
///
/// const ERR_CLOSED: Exception = Exception::sentinel("Io: closed");
///
/// let err = ERR_CLOSED.add_cause([Exception::sentinel("Disk")]);
/// assert_eq!(err.to_string(), "Io: closed");
/// assert_eq!(err.causes()[0].to_string(), "Disk");
/// assert!(err.is(&ERR_CLOSED));
/// ```
#[derive(Debug, Clone)]
pub enum Exception {
    /// Type only, or `"Type: Message"` text
    Sentinel(Sentinel),
    /// Type and message
    Pair(Pair),
    /// Every field
    Record(Box<Record>),
    /// Flat list of joined errors
    Multi(MultiError),
}

/// Which representation an [`Exception`] holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// [`Exception::Sentinel`]
    Sentinel,
    /// [`Exception::Pair`]
    Pair,
    /// [`Exception::Record`]
    Record,
    /// [`Exception::Multi`]
    Multi,
}

impl Exception {
    /// Sentinel over a literal, usable in `const` items
    pub const fn sentinel(text: &'static str) -> Self {
        Exception::Sentinel(Sentinel::new(text))
    }

    /// Exception with an explicit type and a templated message
    ///
    /// The message is stored verbatim when it is empty or `params` is empty.
    pub fn with_message(
        type_tag: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        params: &[&dyn fmt::Display],
    ) -> Self {
        let message = message.into();
        let message = if message.is_empty() || params.is_empty() {
            message
        } else {
            Cow::Owned(format_template(&message, params))
        };
        Exception::Pair(Pair::new(type_tag, message))
    }

    /// The representation currently held
    pub fn representation(&self) -> Representation {
        match self {
            Exception::Sentinel(_) => Representation::Sentinel,
            Exception::Pair(_) => Representation::Pair,
            Exception::Record(_) => Representation::Record,
            Exception::Multi(_) => Representation::Multi,
        }
    }

    /// View as the capability trait object
    pub fn as_dyn(&self) -> &dyn ExceptionCore {
        match self {
            Exception::Sentinel(inner) => inner,
            Exception::Pair(inner) => inner,
            Exception::Record(inner) => &**inner,
            Exception::Multi(inner) => inner,
        }
    }
}

impl From<Sentinel> for Exception {
    fn from(inner: Sentinel) -> Self {
        Exception::Sentinel(inner)
    }
}

impl From<Pair> for Exception {
    fn from(inner: Pair) -> Self {
        Exception::Pair(inner)
    }
}

impl From<Record> for Exception {
    fn from(inner: Record) -> Self {
        Exception::Record(Box::new(inner))
    }
}

impl From<MultiError> for Exception {
    fn from(inner: MultiError) -> Self {
        Exception::Multi(inner)
    }
}

impl From<&'static str> for Exception {
    fn from(text: &'static str) -> Self {
        Exception::sentinel(text)
    }
}

impl From<String> for Exception {
    fn from(text: String) -> Self {
        Exception::Sentinel(Sentinel::owned(text))
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exception::Sentinel(inner) => fmt::Display::fmt(inner, f),
            Exception::Pair(inner) => fmt::Display::fmt(inner, f),
            Exception::Record(inner) => fmt::Display::fmt(inner, f),
            Exception::Multi(inner) => fmt::Display::fmt(inner, f),
        }
    }
}

impl Error for Exception {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Exception::Sentinel(_) | Exception::Pair(_) => None,
            Exception::Record(inner) => inner.source(),
            Exception::Multi(inner) => inner.source(),
        }
    }
}

impl Serialize for Exception {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Exception::Sentinel(inner) => inner.serialize(serializer),
            Exception::Pair(inner) => inner.serialize(serializer),
            Exception::Record(inner) => inner.serialize(serializer),
            Exception::Multi(inner) => inner.serialize(serializer),
        }
    }
}

impl ExceptionCore for Exception {
    fn type_tag(&self) -> &str {
        self.as_dyn().type_tag()
    }

    fn message(&self) -> &str {
        self.as_dyn().message()
    }

    fn causes(&self) -> &[ErrorRef] {
        self.as_dyn().causes()
    }

    fn suppressed(&self) -> &[ErrorRef] {
        self.as_dyn().suppressed()
    }

    fn recovered(&self) -> Option<&Recovered> {
        self.as_dyn().recovered()
    }

    fn stack_trace(&self) -> Option<&StackTrace> {
        self.as_dyn().stack_trace()
    }

    fn set_message<M>(self, message: M, params: &[&dyn fmt::Display]) -> Exception
    where
        M: Into<Cow<'static, str>>,
    {
        match self {
            Exception::Sentinel(inner) => inner.set_message(message, params),
            Exception::Pair(inner) => inner.set_message(message, params),
            Exception::Record(mut inner) => {
                inner.update_message(expand_message(message, params));
                Exception::Record(inner)
            }
            Exception::Multi(inner) => inner.set_message(message, params),
        }
    }

    fn add_cause<I>(self, errors: I) -> Exception
    where
        I: IntoIterator,
        I::Item: IntoErrorRef,
    {
        match self {
            Exception::Sentinel(inner) => inner.add_cause(errors),
            Exception::Pair(inner) => inner.add_cause(errors),
            Exception::Record(mut inner) => {
                inner.extend_causes(errors);
                Exception::Record(inner)
            }
            Exception::Multi(inner) => inner.add_cause(errors),
        }
    }

    fn add_suppressed<I>(self, errors: I) -> Exception
    where
        I: IntoIterator,
        I::Item: IntoErrorRef,
    {
        match self {
            Exception::Sentinel(inner) => inner.add_suppressed(errors),
            Exception::Pair(inner) => inner.add_suppressed(errors),
            Exception::Record(mut inner) => {
                inner.extend_suppressed(errors);
                Exception::Record(inner)
            }
            Exception::Multi(inner) => inner.add_suppressed(errors),
        }
    }

    fn set_recovered(self, recovered: Option<Recovered>) -> Exception {
        match self {
            Exception::Sentinel(inner) => inner.set_recovered(recovered),
            Exception::Pair(inner) => inner.set_recovered(recovered),
            Exception::Record(mut inner) => {
                inner.update_recovered(recovered);
                Exception::Record(inner)
            }
            Exception::Multi(inner) => inner.set_recovered(recovered),
        }
    }

    fn set_stack_trace(self, trace: StackTrace) -> Exception {
        match self {
            Exception::Sentinel(inner) => inner.set_stack_trace(trace),
            Exception::Pair(inner) => inner.set_stack_trace(trace),
            Exception::Record(mut inner) => {
                inner.replace_stack_trace(trace);
                Exception::Record(inner)
            }
            Exception::Multi(inner) => inner.set_stack_trace(trace),
        }
    }
}
