//! Stack capture contract

use exception::{capture_stack, StackTrace, MAX_STACK_DEPTH};

#[inline(never)]
fn outer(skip: usize) -> StackTrace {
    inner(skip)
}

#[inline(never)]
fn inner(skip: usize) -> StackTrace {
    capture_stack(skip)
}

#[inline(never)]
fn deep(depth: usize) -> StackTrace {
    if depth == 0 {
        capture_stack(0)
    } else {
        let trace = deep(depth - 1);
        std::hint::black_box(depth);
        trace
    }
}

#[test]
fn skip_zero_starts_at_immediate_caller() {
    let trace = outer(0);
    assert!(trace[0].function.ends_with("inner"), "frame 0: {}", trace[0]);
    assert!(trace[1].function.ends_with("outer"), "frame 1: {}", trace[1]);
}

#[test]
fn skip_drops_innermost_frames() {
    let trace = outer(1);
    assert!(trace[0].function.ends_with("outer"), "frame 0: {}", trace[0]);

    let trace = outer(2);
    assert!(
        trace[0].function.ends_with("skip_drops_innermost_frames"),
        "frame 0: {}",
        trace[0]
    );
}

#[test]
fn capture_is_bounded() {
    let trace = deep(MAX_STACK_DEPTH + 10);
    assert_eq!(trace.len(), MAX_STACK_DEPTH);
    assert!(trace.iter().all(|frame| frame.function.ends_with("deep")));
}

#[test]
fn frames_are_fully_resolved() {
    let trace = outer(0);
    for frame in &trace {
        assert!(!frame.function.is_empty());
        assert!(!frame.file.is_empty());
        assert!(frame.line >= 1);
    }
    assert!(trace[0].file.ends_with("stack.rs"), "file: {}", trace[0].file);
}

#[test]
fn oversized_skip_is_empty_not_absent() {
    let trace = capture_stack(10_000);
    assert!(trace.is_empty());
    assert_eq!(trace.to_string(), "");
}
