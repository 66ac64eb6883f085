//! Concrete exception representations
//!
//! Four shapes of the same abstract value, chosen by what they carry:
//!
//! | Representation | Carries | Allocation |
//! |---|---|---|
//! | [`Sentinel`] | type (and an optional `": "`-separated message) | none for literals |
//! | [`Pair`] | type and message | none for literals |
//! | [`Record`] | any subset of all fields | boxed inside [`Exception`](crate::Exception) |
//! | [`MultiError`] | a flat, non-empty list of errors | one list |
//!
//! Promotion only ever moves toward [`Record`] and carries every field the
//! source already had.

mod multi;
mod pair;
mod record;
mod sentinel;

pub use multi::MultiError;
pub use pair::Pair;
pub use record::Record;
pub use sentinel::Sentinel;

use std::fmt;

/// `Type: Message`, or whichever half is non-empty
pub(crate) fn fmt_type_message(
    f: &mut fmt::Formatter<'_>,
    type_tag: &str,
    message: &str,
) -> fmt::Result {
    if type_tag.is_empty() {
        f.write_str(message)
    } else if message.is_empty() {
        f.write_str(type_tag)
    } else {
        write!(f, "{}: {}", type_tag, message)
    }
}
