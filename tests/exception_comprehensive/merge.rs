//! Join and flattening

use crate::common::*;
use exception::{join, merge, ErrorRef, Exception, ExceptionCore, Representation};
use proptest::prelude::*;
use std::fmt;

#[derive(Debug)]
struct Plain(&'static str);

impl fmt::Display for Plain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for Plain {}

#[test]
fn join_of_nothing_is_none() {
    assert!(join(Vec::<Exception>::new()).is_none());
    assert!(join([None::<Exception>, None]).is_none());
    assert!(join([join(Vec::<Exception>::new())]).is_none());
}

#[test]
fn join_keeps_foreign_errors() {
    let joined = join([
        ErrorRef::new(Plain("first")),
        ErrorRef::new(leaf(2)),
        ErrorRef::new(Plain("third")),
    ])
    .unwrap();
    assert_eq!(joined.representation(), Representation::Multi);
    assert_eq!(names(joined.causes()), vec!["first", "E2", "third"]);
    assert!(joined.causes()[0].as_core().is_none());
    assert!(joined.causes()[1].as_core().is_some());
}

#[test]
fn join_inlines_deeply_nested_lists() {
    let mut nested = join([leaf(0)]);
    for n in 1..50 {
        nested = join([nested, Some(leaf(n))]);
    }
    let joined = nested.unwrap();
    let expected: Vec<String> = (0..50).map(|n| format!("E{}", n)).collect();
    assert_eq!(names(joined.causes()), expected);
}

#[test]
fn causes_never_hold_multi_errors() {
    let err = Exception::sentinel("T")
        .add_cause(join([leaf(1), leaf(2)]))
        .add_suppressed(join([join([leaf(3)]), join([leaf(4), leaf(5)])]));
    assert_eq!(names(err.causes()), vec!["E1", "E2"]);
    assert_eq!(names(err.suppressed()), vec!["E3", "E4", "E5"]);
    for error in err.causes().iter().chain(err.suppressed()) {
        assert_ne!(
            error.as_core().map(|core| core.type_tag().is_empty()),
            Some(true)
        );
    }
}

#[test]
fn combine_reports_whether_anything_was_added() {
    let mut target = vec![ErrorRef::new(leaf(0))];
    assert!(!merge::combine(&mut target, [None::<ErrorRef>]));
    assert!(merge::combine(&mut target, join([leaf(1)])));
    assert_eq!(names(&target), vec!["E0", "E1"]);
}

/// Argument tree: a leaf, a nil, or a nested join
#[derive(Debug, Clone)]
enum Arg {
    Leaf(usize),
    Nil,
    Joined(Vec<Arg>),
}

fn arg_strategy() -> impl Strategy<Value = Arg> {
    let leaf = prop_oneof![
        4 => (0usize..100).prop_map(Arg::Leaf),
        1 => Just(Arg::Nil),
    ];
    leaf.prop_recursive(4, 32, 5, |inner| {
        prop::collection::vec(inner, 0..5).prop_map(Arg::Joined)
    })
}

fn build(arg: &Arg) -> Option<Exception> {
    match arg {
        Arg::Leaf(n) => Some(leaf(*n)),
        Arg::Nil => None,
        Arg::Joined(args) => join(args.iter().map(build)),
    }
}

fn flatten(arg: &Arg, out: &mut Vec<String>) {
    match arg {
        Arg::Leaf(n) => out.push(format!("E{}", n)),
        Arg::Nil => {}
        Arg::Joined(args) => args.iter().for_each(|arg| flatten(arg, out)),
    }
}

proptest! {
    #[test]
    fn join_is_order_preserving_depth_first_flattening(
        args in prop::collection::vec(arg_strategy(), 0..6)
    ) {
        let mut expected = Vec::new();
        args.iter().for_each(|arg| flatten(arg, &mut expected));

        match join(args.iter().map(build)) {
            None => prop_assert!(expected.is_empty()),
            Some(joined) => {
                prop_assert_eq!(joined.representation(), Representation::Multi);
                prop_assert_eq!(names(joined.causes()), expected);
            }
        }
    }
}
