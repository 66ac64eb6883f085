//! Raise, recover and catch through the facade

use crate::common::*;
use exception::panic::{is_panicked, PANICKED};
use exception::{catch, raise, Exception, ExceptionCore, Recovered};
use std::panic::AssertUnwindSafe;

#[derive(Debug, PartialEq)]
struct Job {
    id: u32,
}

#[inline(never)]
fn fail_job() {
    raise(Job { id: 7 })
}

#[inline(never)]
fn divide(a: u32, b: u32) -> u32 {
    if b == 0 {
        panic!("division by zero")
    }
    a / b
}

#[test]
fn raised_value_is_recovered_with_caller_trace() {
    let err = catch(fail_job).unwrap_err();
    assert_eq!(err.type_tag(), PANICKED);
    assert_eq!(
        err.recovered().and_then(Recovered::downcast_ref::<Job>),
        Some(&Job { id: 7 })
    );
    assert_eq!(err.recovered().unwrap().describe(), "Job { id: 7 }");

    let trace = err.stack_trace().unwrap();
    assert!(trace[0].function.ends_with("fail_job"), "frame 0: {}", trace[0]);
}

#[test]
fn plain_panic_trace_starts_in_user_code() {
    let err = catch(|| divide(1, 0)).unwrap_err();
    let trace = err.stack_trace().unwrap();
    assert!(trace[0].function.ends_with("divide"), "frame 0: {}", trace[0]);
    assert_eq!(
        err.recovered().and_then(Recovered::as_str),
        Some("division by zero")
    );
}

#[test]
fn reraise_chain_preserves_trace() {
    let first = catch(|| divide(1, 0)).unwrap_err();
    let mut current = first.clone();
    for _ in 0..3 {
        let value = current.clone();
        current = catch(AssertUnwindSafe(move || raise(value))).unwrap_err();
    }
    assert_eq!(current.stack_trace(), first.stack_trace());
    assert!(is_panicked(&current));
}

#[test]
fn recovered_exception_composes_with_model() {
    let err = catch(|| divide(1, 0)).unwrap_err();
    let wrapped = Exception::with_message("Job", "failed", &[]).add_cause([err]);
    assert!(exception::find(&wrapped, &Exception::sentinel(PANICKED)).is_some());

    let json = serde_json::to_value(&wrapped).unwrap();
    assert_eq!(json["cause"]["type"], PANICKED);
    assert_eq!(json["cause"]["recovered"], "division by zero");
    assert!(json["cause"]["stack_trace"].as_array().is_some());
}

#[test]
fn catch_logs_recovery() {
    let logs = capture_logs(|| {
        let _ = catch(|| divide(1, 0));
    });
    assert!(logs.contains("Recovered panic"), "logs: {}", logs);
    assert!(logs.contains("division by zero"), "logs: {}", logs);
}
