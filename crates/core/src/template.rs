//! Message templates
//!
//! Each `{}` consumes the next parameter, rendered with `Display`. `{{` and
//! `}}` produce literal braces. A `{}` left without a parameter stays as
//! `{}`, and surplus parameters are ignored.

use std::borrow::Cow;
use std::fmt::{self, Write};

use crate::repr::Sentinel;

/// Reusable message pattern
///
/// ```
/// use exception_core::{ExceptionCore, Template};
///
/// const NOT_FOUND: Template = Template::new("NotFound: key {} in {}");
///
/// let err = NOT_FOUND.format(&[&"user:7", &"cache"]);
/// assert_eq!(err.type_tag(), "NotFound");
/// assert_eq!(err.message(), "key user:7 in cache");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template(Cow<'static, str>);

impl Template {
    /// Template over a literal
    pub const fn new(pattern: &'static str) -> Self {
        Self(Cow::Borrowed(pattern))
    }

    /// The unexpanded pattern
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Expand into a sentinel whose type and message are parsed from the
    /// expanded text
    pub fn format(&self, params: &[&dyn fmt::Display]) -> Sentinel {
        Sentinel::owned(format_template(&self.0, params))
    }
}

impl From<String> for Template {
    fn from(pattern: String) -> Self {
        Self(Cow::Owned(pattern))
    }
}

/// Expand `pattern` with `params`
pub fn format_template(pattern: &str, params: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(pattern.len() + 8 * params.len());
    let mut params = params.iter();
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('{', Some('{')) | ('}', Some('}')) => {
                chars.next();
                out.push(c);
            }
            ('{', Some('}')) => {
                chars.next();
                match params.next() {
                    // Writing into a String cannot fail
                    Some(param) => {
                        let _ = write!(out, "{}", param);
                    }
                    None => out.push_str("{}"),
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// The message to store for `set_message`, or `None` when the receiver
/// should stay unchanged
pub(crate) fn expand_message<M>(
    message: M,
    params: &[&dyn fmt::Display],
) -> Option<Cow<'static, str>>
where
    M: Into<Cow<'static, str>>,
{
    let message = message.into();
    if message.is_empty() {
        None
    } else if params.is_empty() {
        Some(message)
    } else {
        Some(Cow::Owned(format_template(&message, params)))
    }
}
