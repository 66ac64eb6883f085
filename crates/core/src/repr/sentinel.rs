//! Constant marker errors

use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::{fmt_type_message, Pair, Record};
use crate::cause::{ErrorRef, IntoErrorRef};
use crate::merge::combine;
use crate::recovered::Recovered;
use crate::serialize::serialize_core;
use crate::stack::StackTrace;
use crate::template::expand_message;
use crate::traits::ExceptionCore;
use crate::Exception;

/// Separates the type from the message in sentinel text
pub(crate) const TYPE_SEPARATOR: &str = ": ";

/// Marker error built from a single string
///
/// The text is `"Type"` or `"Type: Message"`; without `": "` the whole text
/// is the type. A sentinel built from a literal allocates nothing, so it can
/// be declared as a constant:
///
/// ```
/// use exception_core::{ExceptionCore, Sentinel};
///
/// const ERR_READ: Sentinel = Sentinel::new("read failed");
/// assert_eq!(ERR_READ.type_tag(), "read failed");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sentinel(Cow<'static, str>);

impl Sentinel {
    /// Sentinel over a literal
    pub const fn new(text: &'static str) -> Self {
        Self(Cow::Borrowed(text))
    }

    /// Sentinel over an owned string
    pub fn owned(text: String) -> Self {
        Self(Cow::Owned(text))
    }

    /// The raw text, separator included
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into owned type and message, borrowing from literals
    pub(crate) fn into_parts(self) -> (Cow<'static, str>, Cow<'static, str>) {
        match self.0 {
            Cow::Borrowed(text) => {
                let (type_tag, message) = split(text);
                (Cow::Borrowed(type_tag), Cow::Borrowed(message))
            }
            Cow::Owned(mut text) => match text.find(TYPE_SEPARATOR) {
                Some(index) => {
                    let message = text[index + TYPE_SEPARATOR.len()..].to_string();
                    text.truncate(index);
                    (Cow::Owned(text), Cow::Owned(message))
                }
                None => (Cow::Owned(text), Cow::Borrowed("")),
            },
        }
    }

    fn into_record(self) -> Record {
        let (type_tag, message) = self.into_parts();
        Record::promote(type_tag, message)
    }
}

fn split(text: &str) -> (&str, &str) {
    text.split_once(TYPE_SEPARATOR).unwrap_or((text, ""))
}

impl From<&'static str> for Sentinel {
    fn from(text: &'static str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Sentinel {
    fn from(text: String) -> Self {
        Self::owned(text)
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (type_tag, message) = split(&self.0);
        fmt_type_message(f, type_tag, message)
    }
}

impl Error for Sentinel {}

impl Serialize for Sentinel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_core(self, serializer)
    }
}

impl ExceptionCore for Sentinel {
    fn type_tag(&self) -> &str {
        split(&self.0).0
    }

    fn message(&self) -> &str {
        split(&self.0).1
    }

    fn causes(&self) -> &[ErrorRef] {
        &[]
    }

    fn suppressed(&self) -> &[ErrorRef] {
        &[]
    }

    fn recovered(&self) -> Option<&Recovered> {
        None
    }

    fn stack_trace(&self) -> Option<&StackTrace> {
        None
    }

    fn set_message<M>(self, message: M, params: &[&dyn fmt::Display]) -> Exception
    where
        M: Into<Cow<'static, str>>,
    {
        match expand_message(message, params) {
            Some(message) => Pair::new(self.into_parts().0, message).into(),
            None => self.into(),
        }
    }

    fn add_cause<I>(self, errors: I) -> Exception
    where
        I: IntoIterator,
        I::Item: IntoErrorRef,
    {
        let mut causes = Vec::new();
        if !combine(&mut causes, errors) {
            return self.into();
        }
        self.into_record().with_causes(causes).into()
    }

    fn add_suppressed<I>(self, errors: I) -> Exception
    where
        I: IntoIterator,
        I::Item: IntoErrorRef,
    {
        let mut suppressed = Vec::new();
        if !combine(&mut suppressed, errors) {
            return self.into();
        }
        self.into_record().with_suppressed(suppressed).into()
    }

    fn set_recovered(self, recovered: Option<Recovered>) -> Exception {
        match recovered {
            Some(recovered) => self.into_record().with_recovered(recovered).into(),
            None => self.into(),
        }
    }

    fn set_stack_trace(self, trace: StackTrace) -> Exception {
        self.into_record().with_stack_trace(trace).into()
    }
}
