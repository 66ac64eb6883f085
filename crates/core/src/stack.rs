//! Stack capture
//!
//! Captures the active call stack as an ordered list of [`StackFrame`]s,
//! frame 0 being the innermost (closest to the capture point).
//!
//! ## Skip semantics
//!
//! `capture_stack(0)` starts at the immediate caller of `capture_stack`.
//! Every increment of `skip` drops one more frame from the inner end.
//! Frames belonging to the capture machinery itself are never returned.
//!
//! ## Resolution
//!
//! Each physical frame is resolved to one logical frame per symbol, so
//! inlined calls show up as their own entries. Capture stops at the first
//! frame that cannot be resolved to a function, a file and a line, and
//! never returns more than [`MAX_STACK_DEPTH`] frames.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::ops::Deref;

/// Maximum number of frames kept in a captured [`StackTrace`]
pub const MAX_STACK_DEPTH: usize = 64;

/// Upper bound on raw frames walked, including the capture machinery and
/// the frames requested to be skipped
const RAW_FRAME_LIMIT: usize = 256;

/// Suffix of the capture function's demangled path, used when the marker
/// frame cannot be located by address
const CAPTURE_FN_SUFFIX: &str = "stack::capture_stack";

/// A single resolved call frame
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StackFrame {
    /// Demangled function path without the symbol hash
    pub function: String,
    /// Source file
    pub file: String,
    /// 1-based source line
    pub line: u32,
}

impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:{})", self.function, self.file, self.line)
    }
}

/// Ordered list of frames, innermost first
///
/// An empty trace is a valid capture result and is distinct from "no trace"
/// only in that exceptions report the latter as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StackTrace(Vec<StackFrame>);

impl StackTrace {
    /// Create a trace from already resolved frames
    pub fn new(frames: Vec<StackFrame>) -> Self {
        Self(frames)
    }

    /// Frames, innermost first
    pub fn frames(&self) -> &[StackFrame] {
        &self.0
    }

    /// Drop the `count` innermost frames
    ///
    /// Returns an empty trace when `count` exceeds the trace length.
    pub fn skip_innermost(mut self, count: usize) -> Self {
        let count = count.min(self.0.len());
        self.0.drain(..count);
        self
    }

    /// Consume the trace, returning its frames
    pub fn into_frames(self) -> Vec<StackFrame> {
        self.0
    }
}

impl Deref for StackTrace {
    type Target = [StackFrame];

    fn deref(&self) -> &[StackFrame] {
        &self.0
    }
}

impl From<Vec<StackFrame>> for StackTrace {
    fn from(frames: Vec<StackFrame>) -> Self {
        Self(frames)
    }
}

impl<'a> IntoIterator for &'a StackTrace {
    type Item = &'a StackFrame;
    type IntoIter = std::slice::Iter<'a, StackFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "  at {}", frame)?;
        }
        Ok(())
    }
}

/// Capture the current call stack
///
/// `skip = 0` makes the caller of this function frame 0. At most
/// [`MAX_STACK_DEPTH`] frames are returned; fewer (including none) is valid.
#[inline(never)]
pub fn capture_stack(skip: usize) -> StackTrace {
    let mut raw: SmallVec<[backtrace::Frame; MAX_STACK_DEPTH]> = SmallVec::new();
    backtrace::trace(|frame| {
        raw.push(frame.clone());
        raw.len() < RAW_FRAME_LIMIT
    });
    resolve_after_marker(&raw, capture_stack as *const () as usize, skip)
}

/// Resolve the frames lying outward of the capture function's own frame
fn resolve_after_marker(raw: &[backtrace::Frame], marker: usize, skip: usize) -> StackTrace {
    let start = raw
        .iter()
        .position(|frame| frame.symbol_address() as usize == marker)
        .or_else(|| raw.iter().position(is_capture_frame))
        .map_or(0, |index| index + 1);

    let mut frames = Vec::with_capacity(MAX_STACK_DEPTH.min(raw.len().saturating_sub(start)));
    let mut to_skip = skip;
    for frame in &raw[start..] {
        let mut resolved: SmallVec<[Option<StackFrame>; 4]> = SmallVec::new();
        backtrace::resolve_frame(frame, |symbol| resolved.push(to_stack_frame(symbol)));
        if resolved.is_empty() {
            break;
        }
        for logical in resolved {
            let Some(logical) = logical else {
                return StackTrace(frames);
            };
            if to_skip > 0 {
                to_skip -= 1;
                continue;
            }
            frames.push(logical);
            if frames.len() == MAX_STACK_DEPTH {
                return StackTrace(frames);
            }
        }
    }
    StackTrace(frames)
}

fn is_capture_frame(frame: &backtrace::Frame) -> bool {
    let mut found = false;
    backtrace::resolve_frame(frame, |symbol| {
        if let Some(name) = symbol.name() {
            found |= format!("{:#}", name).ends_with(CAPTURE_FN_SUFFIX);
        }
    });
    found
}

fn to_stack_frame(symbol: &backtrace::Symbol) -> Option<StackFrame> {
    let function = format!("{:#}", symbol.name()?);
    let file = symbol.filename()?.display().to_string();
    let line = symbol.lineno().filter(|line| *line >= 1)?;
    if function.is_empty() || file.is_empty() {
        return None;
    }
    Some(StackFrame {
        function,
        file,
        line,
    })
}
