//! Values captured when a raise was intercepted
//!
//! A [`Recovered`] is a shared, immutable handle to an arbitrary value plus a
//! function that renders it for display and structured logging. Panic
//! payloads that are not `Sync` are kept behind a mutex so the handle stays
//! shareable across threads.

use parking_lot::Mutex;
use std::any::{Any, TypeId};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::Exception;

type Describe = fn(&(dyn Any + Send + Sync)) -> String;

/// Rendering used for payloads of unknown type
const OPAQUE_DESCRIPTION: &str = "Box<dyn Any>";

/// A recovered value
#[derive(Clone)]
pub struct Recovered {
    value: Arc<dyn Any + Send + Sync>,
    describe: Describe,
}

/// Holder for panic payloads that are `Send` but not `Sync`
struct OpaquePayload(Mutex<Box<dyn Any + Send>>);

impl Recovered {
    /// Wrap a value
    ///
    /// Text values (`&'static str`, `String`) describe themselves verbatim,
    /// exceptions through their `Display` output and everything else through
    /// its `Debug` output.
    pub fn new<T: Any + Send + Sync + fmt::Debug>(value: T) -> Self {
        let describe: Describe = if is_text::<T>() {
            describe_text
        } else if TypeId::of::<T>() == TypeId::of::<Exception>() {
            describe_display::<Exception>
        } else {
            describe_debug::<T>
        };
        Self {
            value: Arc::new(value),
            describe,
        }
    }

    /// Wrap an error, described through its `Display` output
    pub fn from_error<E: Error + Send + Sync + 'static>(error: E) -> Self {
        Self {
            value: Arc::new(error),
            describe: describe_display::<E>,
        }
    }

    /// Normalize a raw panic payload
    ///
    /// `&'static str`, `String` and [`Exception`] payloads are stored as
    /// themselves; anything else is kept opaque and can be reached through
    /// [`Recovered::with_payload`].
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<&'static str>() {
            Ok(text) => return Self::new(*text),
            Err(other) => other,
        };
        let payload = match payload.downcast::<String>() {
            Ok(text) => return Self::new(*text),
            Err(other) => other,
        };
        let payload = match payload.downcast::<Exception>() {
            Ok(exception) => return Self::from_error(*exception),
            Err(other) => other,
        };
        Self {
            value: Arc::new(OpaquePayload(Mutex::new(payload))),
            describe: |_| OPAQUE_DESCRIPTION.to_string(),
        }
    }

    /// Borrow the value as `T`
    ///
    /// Opaque payloads never match; use [`Recovered::with_payload`] for them.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Borrow the value as text if it is a `&'static str` or a `String`
    pub fn as_str(&self) -> Option<&str> {
        text_of(&*self.value)
    }

    /// Run `f` against the value as `T`, reaching into opaque payloads
    pub fn with_payload<T: Any, R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        if let Some(value) = self.value.downcast_ref::<T>() {
            return Some(f(value));
        }
        let opaque = self.value.downcast_ref::<OpaquePayload>()?;
        let guard = opaque.0.lock();
        guard.downcast_ref::<T>().map(f)
    }

    /// Whether the value is an opaque panic payload
    pub fn is_opaque(&self) -> bool {
        self.value.is::<OpaquePayload>()
    }

    /// Human readable rendering of the value
    pub fn describe(&self) -> String {
        (self.describe)(&*self.value)
    }

    /// Whether both handles share the same value
    pub fn ptr_eq(&self, other: &Recovered) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl fmt::Debug for Recovered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Recovered").field(&self.describe()).finish()
    }
}

impl fmt::Display for Recovered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

fn is_text<T: Any>() -> bool {
    let id = TypeId::of::<T>();
    id == TypeId::of::<&'static str>() || id == TypeId::of::<String>()
}

fn text_of(value: &(dyn Any + Send + Sync)) -> Option<&str> {
    if let Some(text) = value.downcast_ref::<&'static str>() {
        return Some(*text);
    }
    value.downcast_ref::<String>().map(String::as_str)
}

fn describe_text(value: &(dyn Any + Send + Sync)) -> String {
    text_of(value).unwrap_or_default().to_string()
}

fn describe_debug<T: Any + fmt::Debug>(value: &(dyn Any + Send + Sync)) -> String {
    value
        .downcast_ref::<T>()
        .map(|value| format!("{:?}", value))
        .unwrap_or_default()
}

fn describe_display<T: Any + fmt::Display>(value: &(dyn Any + Send + Sync)) -> String {
    value
        .downcast_ref::<T>()
        .map(|value| value.to_string())
        .unwrap_or_default()
}
