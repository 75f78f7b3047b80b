//! Notification: an accumulator for errors.
//!
//! Errors are kept in insertion order. An error equal (per
//! [`Error::is_equal`]) to one already stored is dropped, so the first
//! occurrence wins and the collection never holds two equal errors.
//!
//! There is no removal. Once an error is reported it stays reported.

use std::fmt;

use crate::Error;

/// Ordered, deduplicated collection of [`Error`]s.
///
/// # Example
///
/// ```text
/// let mut notification = Notification::new();
/// notification.add_error(Error::new("name", "required"));
/// notification.add_error(Error::new("name", "required")); // dropped
///
/// let mut all = Notification::with_error(Error::new("age", "negative"));
/// all.merge(&notification); // `notification` is left untouched
/// assert_eq!(all.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notification {
    errors: Vec<Error>,
}

impl Notification {
    /// Create an empty notification.
    pub fn new() -> Self {
        Notification { errors: Vec::new() }
    }

    /// Create a notification seeded with one error.
    pub fn with_error(error: Error) -> Self {
        let mut notification = Notification::new();
        notification.add_error(error);
        notification
    }

    /// Add an error unless an equal one is already present.
    pub fn add_error(&mut self, error: Error) {
        if self.has_error(&error) {
            tracing::trace!(
                field = error.field(),
                error_message = error.error_message(),
                "duplicate error dropped"
            );
            return;
        }
        self.errors.push(error);
    }

    /// Check if an error equal to `error` is stored.
    pub fn has_error(&self, error: &Error) -> bool {
        self.errors.iter().any(|stored| stored.is_equal(error))
    }

    /// All stored errors, in insertion order.
    ///
    /// The slice is read-only; the only way in is [`Notification::add_error`].
    pub fn get_errors(&self) -> &[Error] {
        &self.errors
    }

    /// Check if at least one error is stored.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    /// Append every error of `other` that is not already present.
    ///
    /// Only `self` changes. `other` is read, never cleared, so several
    /// sources can be merged into one accumulator and stay usable.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(existing = self.errors.len(), incoming = other.errors.len())
    )]
    pub fn merge(&mut self, other: &Notification) {
        for error in other {
            self.add_error(error.clone());
        }
    }
}

impl From<Error> for Notification {
    fn from(error: Error) -> Self {
        Notification::with_error(error)
    }
}

impl From<Option<Error>> for Notification {
    fn from(error: Option<Error>) -> Self {
        error.map_or_else(Notification::new, Notification::with_error)
    }
}

impl FromIterator<Error> for Notification {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        let mut notification = Notification::new();
        notification.extend(iter);
        notification
    }
}

impl Extend<Error> for Notification {
    fn extend<I: IntoIterator<Item = Error>>(&mut self, iter: I) {
        for error in iter {
            self.add_error(error);
        }
    }
}

impl IntoIterator for Notification {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Notification {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}
