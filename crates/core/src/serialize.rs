//! Field selection for structured sinks
//!
//! Every representation serializes to a map with:
//!
//! - `type`, always
//! - `message`, when non-empty
//! - `cause` and `suppressed`, omitted when empty, a single value when there
//!   is one error and an array otherwise
//! - `recovered`, as its description, when present
//! - `stack_trace`, as an array of `{function, file, line}`, when present
//!
//! Nested exceptions serialize with the same rules; foreign errors serialize
//! as their display string.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::cause::ErrorRef;
use crate::traits::ExceptionCore;

pub(crate) fn serialize_core<S: Serializer>(
    core: &dyn ExceptionCore,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(None)?;
    map.serialize_entry("type", core.type_tag())?;
    if !core.message().is_empty() {
        map.serialize_entry("message", core.message())?;
    }
    if !core.causes().is_empty() {
        map.serialize_entry("cause", &ErrorList(core.causes()))?;
    }
    if !core.suppressed().is_empty() {
        map.serialize_entry("suppressed", &ErrorList(core.suppressed()))?;
    }
    if let Some(recovered) = core.recovered() {
        map.serialize_entry("recovered", &recovered.describe())?;
    }
    if let Some(trace) = core.stack_trace() {
        map.serialize_entry("stack_trace", trace)?;
    }
    map.end()
}

/// One error, or an array when there are several
struct ErrorList<'a>(&'a [ErrorRef]);

impl Serialize for ErrorList<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let [single] = self.0 {
            return ErrorField(single).serialize(serializer);
        }
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for error in self.0 {
            seq.serialize_element(&ErrorField(error))?;
        }
        seq.end()
    }
}

struct ErrorField<'a>(&'a ErrorRef);

impl Serialize for ErrorField<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.as_core() {
            Some(core) => serialize_core(core, serializer),
            None => serializer.collect_str(self.0),
        }
    }
}
