//! Error records.
//!
//! An [`Error`] says what failed (`field`), why (`error_message`), and carries
//! whatever auxiliary context the producer wants to attach (`extra`).
//!
//! Identity is field + message. Two errors that differ only in `extra` are the
//! same error, which is what lets a [`Notification`](crate::Notification)
//! deduplicate reports coming from different validation passes.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rustc_hash::FxHashMap;

/// A shared, type-erased auxiliary value.
pub type ExtraValue = Arc<dyn Any + Send + Sync>;

/// Auxiliary context attached to an [`Error`], keyed by name.
///
/// The library never inspects it. It takes no part in equality.
pub type Extra = FxHashMap<String, ExtraValue>;

/// An immutable record of a single failure.
///
/// # Equality
///
/// [`Error::is_equal`] compares `field` and `error_message` only. The
/// `PartialEq`, `Eq` and `Hash` impls are written by hand on top of it so
/// that `extra` can never leak into comparisons.
#[derive(Clone)]
pub struct Error {
    field: String,
    error_message: String,
    extra: Extra,
}

impl Error {
    /// Create an error with no auxiliary context.
    pub fn new(field: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self::with_extra(field, error_message, Extra::default())
    }

    /// Create an error carrying auxiliary context.
    pub fn with_extra(
        field: impl Into<String>,
        error_message: impl Into<String>,
        extra: Extra,
    ) -> Self {
        Error {
            field: field.into(),
            error_message: error_message.into(),
            extra,
        }
    }

    /// Attach one auxiliary value, replacing any previous value under `key`.
    #[must_use]
    pub fn with_extra_value<V: Any + Send + Sync>(
        mut self,
        key: impl Into<String>,
        value: V,
    ) -> Self {
        self.extra.insert(key.into(), Arc::new(value));
        self
    }

    /// What failed.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Human-readable description of the failure.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn extra(&self) -> &Extra {
        &self.extra
    }

    /// Look up an auxiliary value and downcast it to `V`.
    ///
    /// Returns `None` if the key is absent or holds a value of another type.
    pub fn extra_value<V: Any>(&self, key: &str) -> Option<&V> {
        self.extra
            .get(key)
            .and_then(|value| (**value).downcast_ref::<V>())
    }

    /// Check whether two errors describe the same failure.
    ///
    /// Only `field` and `error_message` are compared.
    #[inline]
    pub fn is_equal(&self, other: &Error) -> bool {
        self.field == other.field && self.error_message == other.error_message
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl Eq for Error {}

impl Hash for Error {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.field.hash(state);
        self.error_message.hash(state);
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error_message)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Values are type-erased; keys are sorted for stable output.
        let mut keys: Vec<&str> = self.extra.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("Error")
            .field("field", &self.field)
            .field("error_message", &self.error_message)
            .field("extra", &keys)
            .finish()
    }
}
