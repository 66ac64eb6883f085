//! Construction, accessors, display and promotion

use crate::common::*;
use exception::{Exception, ExceptionCore, Recovered, Representation, Sentinel, Template};

// ============================================================================
// Sentinel parsing
// ============================================================================

#[test]
fn sentinel_type_only() {
    let err = Exception::sentinel("Type");
    assert_eq!(err.type_tag(), "Type");
    assert_eq!(err.message(), "");
    assert_eq!(err.to_string(), "Type");
}

#[test]
fn sentinel_type_and_message() {
    let err = Exception::sentinel("Type: Msg");
    assert_eq!(err.type_tag(), "Type");
    assert_eq!(err.message(), "Msg");
    assert_eq!(err.to_string(), "Type: Msg");
}

#[test]
fn sentinel_message_only() {
    let err = Exception::sentinel(": Msg");
    assert_eq!(err.type_tag(), "");
    assert_eq!(err.to_string(), "Msg");
}

#[test]
fn sentinel_empty() {
    let err = Exception::sentinel("");
    assert_eq!(
        observe(&err),
        Observed {
            representation: Representation::Sentinel,
            type_tag: String::new(),
            message: String::new(),
            causes: vec![],
            suppressed: vec![],
            recovered: None,
            has_trace: false,
        }
    );
    assert_eq!(err.to_string(), "");
}

#[test]
fn sentinel_without_space_is_all_type() {
    let err = Exception::sentinel("Type:Msg");
    assert_eq!(err.type_tag(), "Type:Msg");
    assert_eq!(err.message(), "");
}

// ============================================================================
// No spurious promotion
// ============================================================================

#[test]
fn add_nothing_keeps_every_representation() {
    for err in every_representation() {
        let before = observe(&err);

        let after = err.clone().add_cause(Vec::<Exception>::new());
        assert_eq!(observe(&after), before);

        let after = err.clone().add_cause([None::<Exception>, None]);
        assert_eq!(observe(&after), before);

        let after = err.clone().add_suppressed([None::<Exception>]);
        assert_eq!(observe(&after), before);

        let after = err.clone().set_recovered(None);
        assert_eq!(observe(&after), before);

        let after = err.set_message("", &[&1]);
        assert_eq!(observe(&after), before);
    }
}

// ============================================================================
// Promotion
// ============================================================================

#[test]
fn add_cause_on_sentinel_yields_ordered_record() {
    let e1 = Exception::sentinel("E1");
    let e2 = Exception::with_message("E2", "second", &[]);
    let err = Exception::sentinel("Type: Msg").add_cause([e1, e2]);

    assert_eq!(err.representation(), Representation::Record);
    assert_eq!(err.type_tag(), "Type");
    assert_eq!(err.message(), "Msg");
    assert_eq!(names(err.causes()), vec!["E1", "E2: second"]);
}

#[test]
fn promotion_only_moves_toward_record() {
    let err = Exception::sentinel("T")
        .set_message("m", &[])
        .set_recovered(Some(Recovered::new(1_u8)))
        .set_message("n", &[]);
    assert_eq!(err.representation(), Representation::Record);
    assert_eq!(err.message(), "n");
    assert_eq!(err.recovered().map(Recovered::describe).as_deref(), Some("1"));
}

#[test]
fn every_representation_promotes_on_recovered() {
    for err in every_representation() {
        let before = observe(&err);
        let after = err.set_recovered(Some(Recovered::new("v")));
        let observed = observe(&after);
        assert_eq!(observed.representation, Representation::Record);
        assert_eq!(observed.type_tag, before.type_tag);
        assert_eq!(observed.message, before.message);
        assert_eq!(observed.causes, before.causes);
        assert_eq!(observed.recovered.as_deref(), Some("v"));
    }
}

#[test]
fn fill_stack_trace_promotes_and_points_at_caller() {
    for err in every_representation() {
        let filled = err.fill_stack_trace(0);
        assert_eq!(filled.representation(), Representation::Record);
        let trace = filled.stack_trace().unwrap();
        assert!(
            trace[0]
                .function
                .ends_with("fill_stack_trace_promotes_and_points_at_caller"),
            "unexpected frame 0: {}",
            trace[0]
        );
    }
}

#[test]
fn clones_are_independent() {
    let original = Exception::sentinel("T").add_cause([Exception::sentinel("A")]);
    let extended = original.clone().add_cause([Exception::sentinel("B")]);
    assert_eq!(names(original.causes()), vec!["A"]);
    assert_eq!(names(extended.causes()), vec!["A", "B"]);
    assert!(original.causes()[0].ptr_eq(&extended.causes()[0]));
}

// ============================================================================
// Templates
// ============================================================================

#[test]
fn set_message_with_params_formats() {
    let err = Exception::sentinel("Io").set_message("read {} of {} bytes", &[&3, &8]);
    assert_eq!(err.to_string(), "Io: read 3 of 8 bytes");
}

#[test]
fn set_message_without_params_is_verbatim() {
    let err = Exception::sentinel("Io").set_message("literal {}", &[]);
    assert_eq!(err.message(), "literal {}");
}

#[test]
fn template_formats_into_sentinel() {
    const NOT_FOUND: Template = Template::new("NotFound: {} missing");
    let err: Sentinel = NOT_FOUND.format(&[&"key"]);
    assert_eq!(err.type_tag(), "NotFound");
    assert_eq!(err.message(), "key missing");
    assert!(Exception::from(err).is(&Exception::sentinel("NotFound")));
}
