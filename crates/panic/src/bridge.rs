//! Raise and recover
//!
//! Panics crossing a recovery point come out as exceptions of type
//! [`PANICKED`]: the raised value is kept as the recovered value and the
//! stack of the raising code as the stack trace.
//!
//! A bridge exception that is raised again passes through untouched, so a
//! chain of recovery points that re-raise keeps the trace captured by the
//! first one.

use exception_core::{capture_stack, Exception, ExceptionCore, Recovered, Sentinel, StackTrace};
use std::any::Any;
use std::fmt;
use std::panic::{self, UnwindSafe};
use tracing::debug;

use crate::config::with_config;
use crate::hook::{clear_pending_trace, install_hook, take_pending_trace, PayloadKey};

/// Type tag reserved for exceptions produced by the bridge
pub const PANICKED: &str = "panicked";

/// Sentinel carrying the [`PANICKED`] type tag
pub const PANIC_ERROR: Sentinel = Sentinel::new(PANICKED);

/// Whether `exception` was produced by the bridge
pub fn is_panicked(exception: &Exception) -> bool {
    exception.type_tag() == PANICKED
}

fn bridge_exception(recovered: Recovered, trace: StackTrace) -> Exception {
    PANIC_ERROR
        .set_recovered(Some(recovered))
        .set_stack_trace(trace)
}

/// Unwind with `value` as a bridge exception
///
/// A bridge exception is raised as is. Anything else becomes the recovered
/// value of a new bridge exception whose trace starts at the caller. The
/// unwind does not run the panic hook.
#[inline(never)]
pub fn raise<V>(value: V) -> !
where
    V: Any + Send + Sync + fmt::Debug,
{
    let recovered = Recovered::new(value);
    let exception = match recovered.downcast_ref::<Exception>() {
        Some(exception) if is_panicked(exception) => exception.clone(),
        _ => bridge_exception(recovered, capture_stack(1)),
    };
    panic::resume_unwind(Box::new(exception))
}

/// Turn an intercepted panic payload into a bridge exception
///
/// `None` (nothing was raised) yields `None`. Bridge exceptions are returned
/// unchanged. Any other payload is wrapped, using the trace the panic hook
/// parked for it if there is one, else a capture taken here.
#[inline(never)]
pub fn recover(payload: Option<Box<dyn Any + Send>>) -> Option<Exception> {
    Some(recover_payload(payload?, 1))
}

/// The fallback capture is kept whole; outward of a recovery point there are
/// only enclosing recovery points, never dispatch frames.
#[inline(never)]
fn recover_payload(payload: Box<dyn Any + Send>, skip: usize) -> Exception {
    let payload = match payload.downcast::<Exception>() {
        Ok(exception) if is_panicked(&exception) => return *exception,
        Ok(exception) => exception as Box<dyn Any + Send>,
        Err(other) => other,
    };
    let trace = match take_pending_trace(&PayloadKey::of(&*payload)) {
        Some(trace) => trace,
        None => capture_stack(skip + 1),
    };
    bridge_exception(Recovered::from_payload(payload), trace)
}

/// Run `f` as a recovery point
///
/// Returns `f`'s value, or the bridge exception for the panic that escaped
/// it. Installs the capturing panic hook on first use.
#[inline(never)]
pub fn catch<F, R>(f: F) -> Result<R, Exception>
where
    F: FnOnce() -> R + UnwindSafe,
{
    install_hook();
    clear_pending_trace();
    let payload = match panic::catch_unwind(f) {
        Ok(value) => return Ok(value),
        Err(payload) => payload,
    };
    let exception = recover_payload(payload, 1);
    if with_config(|config| config.log_recovered) {
        debug!(
            target: "exception::panic",
            recovered = %exception.recovered().map(Recovered::describe).unwrap_or_default(),
            frames = exception.stack_trace().map_or(0, |trace| trace.len()),
            "Recovered panic"
        );
    }
    Err(exception)
}
