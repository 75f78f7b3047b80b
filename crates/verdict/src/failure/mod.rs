//! Misuse signals raised by [`Outcome`](crate::Outcome).
//!
//! Two categories:
//!
//! - **Construction**: the caller tried to build an invalid outcome
//!   (`ValueCannotBeNull`, `ErrorsListIsEmpty`).
//! - **Wrong state**: the caller asked for the side the outcome is not on
//!   (`ResultInErrorState`, `ResultInOkState`). These carry what the outcome
//!   actually holds, so nothing is lost by the failed access.
//!
//! All of them are logic errors in the calling code. They are returned at
//! the point of misuse and never retried.

use crate::Notification;

/// A misuse of [`Outcome`](crate::Outcome).
///
/// `T` is the type of the carried value: `&T` for borrowing accessors and
/// `T` for consuming ones.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ResultError<T> {
    /// A success was constructed without a value.
    #[error("Value cannot be null")]
    ValueCannotBeNull,

    /// A failure was constructed from a notification with no errors.
    #[error("Errors list is empty")]
    ErrorsListIsEmpty,

    /// The value was requested from an outcome in ERROR state.
    #[error("The result is in ERROR state")]
    ResultInErrorState(Notification),

    /// The errors were requested from an outcome in OK state.
    #[error("The result is in OK state")]
    ResultInOkState(T),
}

impl<T> ResultError<T> {
    /// Check whether this is a construction-time failure.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            ResultError::ValueCannotBeNull | ResultError::ErrorsListIsEmpty
        )
    }

    /// Check whether this is a wrong-state access.
    pub fn is_state_error(&self) -> bool {
        matches!(
            self,
            ResultError::ResultInErrorState(_) | ResultError::ResultInOkState(_)
        )
    }

    /// The errors held by the outcome, for `ResultInErrorState`.
    pub fn errors(&self) -> Option<&Notification> {
        match self {
            ResultError::ResultInErrorState(errors) => Some(errors),
            _ => None,
        }
    }

    /// The value held by the outcome, for `ResultInOkState`.
    pub fn value(&self) -> Option<&T> {
        match self {
            ResultError::ResultInOkState(value) => Some(value),
            _ => None,
        }
    }

    /// Take the errors out, for `ResultInErrorState`.
    pub fn into_errors(self) -> Option<Notification> {
        match self {
            ResultError::ResultInErrorState(errors) => Some(errors),
            _ => None,
        }
    }

    /// Take the value out, for `ResultInOkState`.
    pub fn into_value(self) -> Option<T> {
        match self {
            ResultError::ResultInOkState(value) => Some(value),
            _ => None,
        }
    }
}
