//! is, cast_into and cause-tree search

use exception::{find, join, matches, Exception, ExceptionCore, Pair, Sentinel};
use std::io;

const ERR_IO: Exception = Exception::sentinel("Io");
const ERR_NET: Sentinel = Sentinel::new("Net: unreachable");

#[test]
fn is_ignores_message_and_causes() {
    let err = Exception::with_message("Io", "disk full", &[])
        .add_cause([Exception::sentinel("Disk")]);
    assert!(err.is(&ERR_IO));
    assert!(ERR_IO.is(&err));
    assert!(!err.is(&ERR_NET));
}

#[test]
fn is_false_for_foreign_errors() {
    let foreign = io::Error::new(io::ErrorKind::Other, "Io");
    assert!(!ERR_IO.is(&foreign));
    assert!(!matches(&foreign, &ERR_IO));
}

#[test]
fn is_works_across_representations() {
    let multi = join([Exception::sentinel("A")]).unwrap();
    assert!(multi.is(&Exception::with_message("", "anything", &[])));
    assert!(Pair::new("Net", "x").is(&ERR_NET));
}

#[test]
fn cast_into_copies_on_type_match() {
    let err = Exception::with_message("Net", "timed out", &[]).add_cause([ERR_IO]);
    let mut slot = Exception::from(ERR_NET);
    assert!(err.cast_into(&mut slot));
    assert_eq!(slot.message(), "timed out");
    assert_eq!(slot.causes().len(), 1);
}

#[test]
fn cast_into_rejects_mismatches() {
    let err = Exception::with_message("Net", "timed out", &[]);

    let mut slot = ERR_IO;
    assert!(!err.cast_into(&mut slot));
    assert_eq!(slot.to_string(), "Io");

    let mut not_an_exception = 0_u32;
    assert!(!err.cast_into(&mut not_an_exception));
    assert_eq!(not_an_exception, 0);
}

#[test]
fn find_searches_causes_of_joined_errors() {
    let err = Exception::sentinel("Request").add_cause(join([
        Exception::sentinel("Auth"),
        Exception::sentinel("Retry").add_cause([Exception::with_message("Io", "reset", &[])]),
    ]));
    let found = find(&err, &ERR_IO).unwrap();
    assert_eq!(found.message(), "reset");
    assert!(find(&err, &ERR_NET).is_none());
}

#[test]
fn find_matches_root_first() {
    let err = Exception::with_message("Io", "outer", &[])
        .add_cause([Exception::with_message("Io", "inner", &[])]);
    assert_eq!(find(&err, &ERR_IO).unwrap().message(), "outer");
}
