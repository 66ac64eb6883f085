//! Dispatch frame trimming
//!
//! A trace captured while a panic is in flight starts inside the runtime's
//! panic machinery. Trimming drops everything up to and including the
//! dispatch frames so frame 0 is the code that panicked.

use exception_core::StackTrace;
use tracing::trace;

/// Drop the frames up to and including the first run of dispatch frames
///
/// The scan goes outward from frame 0 to the first frame whose function
/// path starts with one of `markers`, then past every directly following
/// marker frame. Returns the trace unchanged when no marker frame is found.
pub fn trim_dispatch_frames<S: AsRef<str>>(trace: StackTrace, markers: &[S]) -> StackTrace {
    let is_dispatch = |function: &str| {
        markers
            .iter()
            .any(|marker| function.starts_with(marker.as_ref()))
    };

    let Some(first) = trace.iter().position(|frame| is_dispatch(&frame.function)) else {
        trace!(
            target: "exception::panic",
            frames = trace.len(),
            "No dispatch frame found; keeping full trace"
        );
        return trace;
    };
    let run = trace[first..]
        .iter()
        .take_while(|frame| is_dispatch(&frame.function))
        .count();
    trace.skip_innermost(first + run)
}
