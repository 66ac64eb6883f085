//! Flattening of error lists
//!
//! Every list stored by an exception (causes, suppressed errors, the
//! elements of a [`MultiError`]) goes through this module, which inlines the
//! contents of any multi-error argument and drops `None`. Lists are therefore
//! flat by construction and keep the left-to-right, depth-first order of the
//! arguments.

use crate::cause::{ErrorRef, IntoErrorRef};
use crate::repr::MultiError;
use crate::Exception;

/// Append every non-`None` error to `target`, inlining multi-errors
///
/// Returns whether anything was appended.
pub fn combine<I>(target: &mut Vec<ErrorRef>, errors: I) -> bool
where
    I: IntoIterator,
    I::Item: IntoErrorRef,
{
    let before = target.len();
    concat(target, errors);
    target.len() > before
}

/// Same as [`combine`] for callers that hold a list either way
pub fn concat<I>(target: &mut Vec<ErrorRef>, errors: I)
where
    I: IntoIterator,
    I::Item: IntoErrorRef,
{
    for error in errors.into_iter().filter_map(IntoErrorRef::into_error_ref) {
        push_flat(target, error);
    }
}

/// Join errors into one
///
/// Returns `None` when no error survives (no arguments, or only `None`),
/// otherwise a [`MultiError`] holding the flattened list.
///
/// ```
/// use exception_core::{join, Exception, ExceptionCore};
///
/// assert!(join(Vec::<Exception>::new()).is_none());
///
/// let inner = join([Exception::sentinel("B"), Exception::sentinel("C")]);
/// let joined = join([Some(Exception::sentinel("A")), None, inner]).unwrap();
/// let names: Vec<String> = joined.causes().iter().map(|e| e.to_string()).collect();
/// assert_eq!(names, ["A", "B", "C"]);
/// ```
pub fn join<I>(errors: I) -> Option<Exception>
where
    I: IntoIterator,
    I::Item: IntoErrorRef,
{
    let mut flat = Vec::new();
    if !combine(&mut flat, errors) {
        return None;
    }
    Some(MultiError::from_flat(flat).into())
}

/// Push one error, inlining nested multi-errors with an explicit work list
fn push_flat(target: &mut Vec<ErrorRef>, error: ErrorRef) {
    let errors = match error.as_multi() {
        Some(errors) => errors,
        None => {
            target.push(error);
            return;
        }
    };
    let mut pending = vec![errors.iter()];
    while let Some(iter) = pending.last_mut() {
        match iter.next() {
            Some(next) => match next.as_multi() {
                Some(nested) => pending.push(nested.iter()),
                None => target.push(next.clone()),
            },
            None => {
                pending.pop();
            }
        }
    }
}
