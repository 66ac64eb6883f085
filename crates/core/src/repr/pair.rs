//! Type plus message, nothing else

use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::{fmt_type_message, Record};
use crate::cause::{ErrorRef, IntoErrorRef};
use crate::merge::combine;
use crate::recovered::Recovered;
use crate::serialize::serialize_core;
use crate::stack::StackTrace;
use crate::template::expand_message;
use crate::traits::ExceptionCore;
use crate::Exception;

/// An exception carrying a type and a message
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pair {
    type_tag: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl Pair {
    /// Create a pair; the message is stored verbatim
    pub fn new(
        type_tag: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            type_tag: type_tag.into(),
            message: message.into(),
        }
    }

    /// Const pair over two literals
    pub const fn from_static(type_tag: &'static str, message: &'static str) -> Self {
        Self {
            type_tag: Cow::Borrowed(type_tag),
            message: Cow::Borrowed(message),
        }
    }

    fn into_record(self) -> Record {
        Record::promote(self.type_tag, self.message)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_type_message(f, &self.type_tag, &self.message)
    }
}

impl Error for Pair {}

impl Serialize for Pair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_core(self, serializer)
    }
}

impl ExceptionCore for Pair {
    fn type_tag(&self) -> &str {
        &self.type_tag
    }

    fn message(&self) -> &str {
        &self.message
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

    fn set_message<M>(mut self, message: M, params: &[&dyn fmt::Display]) -> Exception
    where
        M: Into<Cow<'static, str>>,
    {
        if let Some(message) = expand_message(message, params) {
            self.message = message;
        }
        self.into()
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
