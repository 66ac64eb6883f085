//! The general representation

use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::fmt_type_message;
use crate::cause::{ErrorRef, IntoErrorRef};
use crate::merge::concat;
use crate::recovered::Recovered;
use crate::serialize::serialize_core;
use crate::stack::StackTrace;
use crate::template::expand_message;
use crate::traits::ExceptionCore;
use crate::Exception;

/// An exception that can carry every field
///
/// Records are only produced by promotion; inside [`Exception`] they live
/// behind a `Box` so the common representations stay small.
#[derive(Debug, Clone, Default)]
pub struct Record {
    type_tag: Cow<'static, str>,
    message: Cow<'static, str>,
    causes: Vec<ErrorRef>,
    suppressed: Vec<ErrorRef>,
    recovered: Option<Recovered>,
    stack_trace: Option<StackTrace>,
}

impl Record {
    /// Promotion target carrying the source's type and message
    pub(crate) fn promote(type_tag: Cow<'static, str>, message: Cow<'static, str>) -> Self {
        Self {
            type_tag,
            message,
            ..Self::default()
        }
    }

    pub(crate) fn with_causes(mut self, causes: Vec<ErrorRef>) -> Self {
        self.causes = causes;
        self
    }

    pub(crate) fn with_suppressed(mut self, suppressed: Vec<ErrorRef>) -> Self {
        self.suppressed = suppressed;
        self
    }

    pub(crate) fn with_recovered(mut self, recovered: Recovered) -> Self {
        self.recovered = Some(recovered);
        self
    }

    pub(crate) fn with_stack_trace(mut self, trace: StackTrace) -> Self {
        self.stack_trace = Some(trace);
        self
    }

    // In-place updates shared by `Record` and `Exception::Record`

    pub(crate) fn update_message(&mut self, message: Option<Cow<'static, str>>) {
        if let Some(message) = message {
            self.message = message;
        }
    }

    pub(crate) fn extend_causes<I>(&mut self, errors: I)
    where
        I: IntoIterator,
        I::Item: IntoErrorRef,
    {
        concat(&mut self.causes, errors);
    }

    pub(crate) fn extend_suppressed<I>(&mut self, errors: I)
    where
        I: IntoIterator,
        I::Item: IntoErrorRef,
    {
        concat(&mut self.suppressed, errors);
    }

    pub(crate) fn update_recovered(&mut self, recovered: Option<Recovered>) {
        if recovered.is_some() {
            self.recovered = recovered;
        }
    }

    pub(crate) fn replace_stack_trace(&mut self, trace: StackTrace) {
        self.stack_trace = Some(trace);
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_type_message(f, &self.type_tag, &self.message)
    }
}

impl Error for Record {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.causes
            .first()
            .map(|cause| cause.as_error() as &(dyn Error + 'static))
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_core(self, serializer)
    }
}

impl ExceptionCore for Record {
    fn type_tag(&self) -> &str {
        &self.type_tag
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn causes(&self) -> &[ErrorRef] {
        &self.causes
    }

    fn suppressed(&self) -> &[ErrorRef] {
        &self.suppressed
    }

    fn recovered(&self) -> Option<&Recovered> {
        self.recovered.as_ref()
    }

    fn stack_trace(&self) -> Option<&StackTrace> {
        self.stack_trace.as_ref()
    }

    fn set_message<M>(mut self, message: M, params: &[&dyn fmt::Display]) -> Exception
    where
        M: Into<Cow<'static, str>>,
    {
        self.update_message(expand_message(message, params));
        self.into()
    }

    fn add_cause<I>(mut self, errors: I) -> Exception
    where
        I: IntoIterator,
        I::Item: IntoErrorRef,
    {
        self.extend_causes(errors);
        self.into()
    }

    fn add_suppressed<I>(mut self, errors: I) -> Exception
    where
        I: IntoIterator,
        I::Item: IntoErrorRef,
    {
        self.extend_suppressed(errors);
        self.into()
    }

    fn set_recovered(mut self, recovered: Option<Recovered>) -> Exception {
        self.update_recovered(recovered);
        self.into()
    }

    fn set_stack_trace(mut self, trace: StackTrace) -> Exception {
        self.replace_stack_trace(trace);
        self.into()
    }
}
