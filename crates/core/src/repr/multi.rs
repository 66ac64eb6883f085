//! Flat error lists produced by joining

use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::Record;
use crate::cause::{ErrorRef, IntoErrorRef};
use crate::merge::{combine, concat};
use crate::recovered::Recovered;
use crate::serialize::serialize_core;
use crate::stack::StackTrace;
use crate::template::expand_message;
use crate::traits::ExceptionCore;
use crate::Exception;

/// A flat, non-empty list of errors with no type or message of its own
///
/// No element is ever itself a multi-error: every construction path
/// flattens nested lists first. Build one with [`join`](crate::join).
#[derive(Debug, Clone)]
pub struct MultiError(Vec<ErrorRef>);

impl MultiError {
    /// Wrap a list that is already flat and non-empty
    pub(crate) fn from_flat(errors: Vec<ErrorRef>) -> Self {
        debug_assert!(!errors.is_empty());
        debug_assert!(errors.iter().all(|error| error.as_multi().is_none()));
        Self(errors)
    }

    /// The joined errors, in join order
    pub fn errors(&self) -> &[ErrorRef] {
        &self.0
    }

    /// Number of joined errors
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no joined errors; never true for a multi-error
    /// built by `join`, which is non-empty by construction
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the joined errors
    pub fn iter(&self) -> std::slice::Iter<'_, ErrorRef> {
        self.0.iter()
    }

    fn into_record(self) -> Record {
        Record::promote(Cow::Borrowed(""), Cow::Borrowed("")).with_causes(self.0)
    }
}

impl<'a> IntoIterator for &'a MultiError {
    type Item = &'a ErrorRef;
    type IntoIter = std::slice::Iter<'a, ErrorRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for MultiError {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl Error for MultiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0
            .first()
            .map(|error| error.as_error() as &(dyn Error + 'static))
    }
}

impl Serialize for MultiError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_core(self, serializer)
    }
}

impl ExceptionCore for MultiError {
    fn type_tag(&self) -> &str {
        ""
    }

    fn message(&self) -> &str {
        ""
    }

    fn causes(&self) -> &[ErrorRef] {
        &self.0
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
            Some(message) => {
                let mut record = self.into_record();
                record.update_message(Some(message));
                record.into()
            }
            None => self.into(),
        }
    }

    fn add_cause<I>(mut self, errors: I) -> Exception
    where
        I: IntoIterator,
        I::Item: IntoErrorRef,
    {
        concat(&mut self.0, errors);
        self.into()
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
