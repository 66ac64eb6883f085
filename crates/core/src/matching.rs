//! Type-tag matching over arbitrary errors

use std::error::Error;

use crate::repr::{MultiError, Pair, Record, Sentinel};
use crate::traits::ExceptionCore;
use crate::Exception;

/// View any error as an exception if it is one
///
/// Recognises [`Exception`] and every bare representation.
pub fn as_core<'a>(error: &'a (dyn Error + 'static)) -> Option<&'a dyn ExceptionCore> {
    if let Some(exception) = error.downcast_ref::<Exception>() {
        return Some(exception.as_dyn());
    }
    if let Some(inner) = error.downcast_ref::<Sentinel>() {
        return Some(inner);
    }
    if let Some(inner) = error.downcast_ref::<Pair>() {
        return Some(inner);
    }
    if let Some(inner) = error.downcast_ref::<Record>() {
        return Some(inner);
    }
    error
        .downcast_ref::<MultiError>()
        .map(|inner| inner as &dyn ExceptionCore)
}

/// Whether `error` is an exception whose type tag equals `target`'s
pub fn matches(error: &(dyn Error + 'static), target: &dyn ExceptionCore) -> bool {
    as_core(error).is_some_and(|core| core.type_tag() == target.type_tag())
}

/// Find the first error in the tree rooted at `error` whose type tag equals
/// `target`'s
///
/// The walk is depth-first and pre-order. Exceptions descend into all of
/// their causes; other errors follow their `source()` chain.
pub fn find<'a>(
    error: &'a (dyn Error + 'static),
    target: &dyn ExceptionCore,
) -> Option<&'a dyn ExceptionCore> {
    let mut pending: Vec<&'a (dyn Error + 'static)> = vec![error];
    while let Some(next) = pending.pop() {
        match as_core(next) {
            Some(core) => {
                if core.type_tag() == target.type_tag() {
                    return Some(core);
                }
                pending.extend(
                    core.causes()
                        .iter()
                        .rev()
                        .map(|cause| cause.as_error() as &(dyn Error + 'static)),
                );
            }
            None => pending.extend(next.source()),
        }
    }
    None
}
