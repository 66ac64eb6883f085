//! Panic hook that captures the raise-site stack
//!
//! `catch_unwind` only returns after the stack has unwound, so the hook is
//! the last point where the frames of the panicking code are still live.
//! The hook captures and trims the stack and parks it in a thread-local
//! slot, keyed by the payload it was captured for. The recovery on the same
//! thread picks it up only if it is recovering that payload.

use exception_core::{capture_stack, Exception, StackTrace};
use once_cell::sync::OnceCell;
use std::any::{Any, TypeId};
use std::cell::Cell;
use std::panic;
use tracing::{debug, trace};

use crate::bridge::is_panicked;
use crate::config::with_config;
use crate::trim::trim_dispatch_frames;

static HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

thread_local! {
    static PENDING_TRACE: Cell<Option<(PayloadKey, StackTrace)>> = const { Cell::new(None) };
}

/// What both the hook and the recovery point can observe of a payload
///
/// Text payloads compare by content, since the hook may see a `String`
/// where the recovery point later sees the same text. Anything else
/// compares by type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PayloadKey {
    Text(String),
    Typed(TypeId),
}

impl PayloadKey {
    pub(crate) fn of(payload: &(dyn Any + Send)) -> Self {
        if let Some(text) = payload.downcast_ref::<&'static str>() {
            return PayloadKey::Text(text.to_string());
        }
        if let Some(text) = payload.downcast_ref::<String>() {
            return PayloadKey::Text(text.clone());
        }
        PayloadKey::Typed((*payload).type_id())
    }
}

/// Install the capturing hook in front of the current one
///
/// Idempotent. The hook that was installed before stays reachable and runs
/// after ours while `forward_to_previous_hook` is set.
pub fn install_hook() {
    HOOK_INSTALLED.get_or_init(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let payload = info.payload();
            let bridged = payload
                .downcast_ref::<Exception>()
                .is_some_and(is_panicked);
            let (markers, forward) = with_config(|config| {
                let markers = (!bridged).then(|| config.dispatch_markers.clone());
                (markers, config.forward_to_previous_hook)
            });
            if let Some(markers) = markers {
                let trace = trim_dispatch_frames(capture_stack(0), markers.as_slice());
                let key = PayloadKey::of(payload);
                PENDING_TRACE.with(|slot| slot.set(Some((key, trace))));
            }
            if forward {
                previous(info);
            }
        }));
        debug!(target: "exception::panic", "Installed panic hook");
    });
}

/// Whether [`install_hook`] has run in this process
pub fn hook_installed() -> bool {
    HOOK_INSTALLED.get().is_some()
}

/// Take the trace parked by the hook on this thread if it was captured for
/// a payload matching `key`
///
/// The slot is emptied either way; a trace parked for another payload
/// belongs to a panic that was recovered elsewhere.
pub(crate) fn take_pending_trace(key: &PayloadKey) -> Option<StackTrace> {
    let (parked, trace) = PENDING_TRACE.with(Cell::take)?;
    if parked == *key {
        return Some(trace);
    }
    trace!(
        target: "exception::panic",
        frames = trace.len(),
        "Discarded trace parked for another panic"
    );
    None
}

/// Drop any trace left over from a panic nobody recovered
pub(crate) fn clear_pending_trace() {
    PENDING_TRACE.with(|slot| slot.set(None));
}
