//! Outcome: a success value or a non-empty set of errors.
//!
//! The state is a private enum behind [`Outcome`], so the only ways in are
//! the constructors below. Those refuse the two invalid shapes (a success
//! with no value, a failure with no errors), which means every `Outcome` in
//! memory is valid and never changes state.
//!
//! # Consuming an outcome
//!
//! Prefer [`Outcome::either`]. The accessors ([`Outcome::get_value`],
//! [`Outcome::get_errors`] and their consuming forms) exist for callers that
//! already know the state, and return a [`ResultError`] when they are wrong.

use crate::{Notification, ResultError};

/// Value of a success that has nothing else to report.
///
/// Used only by [`Outcome::success`], so that a valueless success still has
/// a value to hand out.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Okay;

#[derive(Clone, Debug, PartialEq)]
enum State<T> {
    Ok(T),
    Error(Notification),
}

/// The outcome of an operation.
///
/// Either OK, holding a `T`, or ERROR, holding a [`Notification`] with at
/// least one error. Outcomes are immutable.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome<T> {
    state: State<T>,
}

impl Outcome<Okay> {
    /// Create a successful outcome with no value of its own.
    pub fn success() -> Self {
        Outcome::ok(Okay)
    }
}

impl Default for Outcome<Okay> {
    fn default() -> Self {
        Outcome::success()
    }
}

impl<T> Outcome<T> {
    /// Create an outcome in OK state.
    pub fn ok(value: T) -> Self {
        Outcome {
            state: State::Ok(value),
        }
    }

    /// Create an outcome in OK state from a value that may be absent.
    ///
    /// Fails with [`ResultError::ValueCannotBeNull`] on `None`.
    pub fn from_option(value: Option<T>) -> Result<Self, ResultError<T>> {
        match value {
            Some(value) => Ok(Outcome::ok(value)),
            None => {
                tracing::debug!("success constructed without a value");
                Err(ResultError::ValueCannotBeNull)
            }
        }
    }

    /// Create an outcome in ERROR state.
    ///
    /// Fails with [`ResultError::ErrorsListIsEmpty`] if `errors` holds no
    /// error: an outcome never fails without a reason.
    pub fn error(errors: Notification) -> Result<Self, ResultError<T>> {
        if !errors.has_errors() {
            tracing::debug!("failure constructed from an empty notification");
            return Err(ResultError::ErrorsListIsEmpty);
        }
        Ok(Outcome {
            state: State::Error(errors),
        })
    }

    /// Check if the outcome is in OK state.
    pub fn is_ok(&self) -> bool {
        matches!(self.state, State::Ok(_))
    }

    /// Check if the outcome is in ERROR state.
    pub fn is_error(&self) -> bool {
        !self.is_ok()
    }

    /// Borrow the value.
    ///
    /// In ERROR state, fails with [`ResultError::ResultInErrorState`]
    /// carrying a copy of the errors.
    pub fn get_value(&self) -> Result<&T, ResultError<&T>> {
        match &self.state {
            State::Ok(value) => Ok(value),
            State::Error(errors) => {
                tracing::debug!(errors = errors.len(), "value requested in ERROR state");
                Err(ResultError::ResultInErrorState(errors.clone()))
            }
        }
    }

    /// Get a copy of the errors.
    ///
    /// The copy is independent: adding to it does not affect this outcome.
    /// In OK state, fails with [`ResultError::ResultInOkState`] carrying the
    /// value.
    pub fn get_errors(&self) -> Result<Notification, ResultError<&T>> {
        match &self.state {
            State::Error(errors) => Ok(errors.clone()),
            State::Ok(value) => {
                tracing::debug!("errors requested in OK state");
                Err(ResultError::ResultInOkState(value))
            }
        }
    }

    /// Take the value out. Same contract as [`Outcome::get_value`].
    pub fn into_value(self) -> Result<T, ResultError<T>> {
        match self.state {
            State::Ok(value) => Ok(value),
            State::Error(errors) => {
                tracing::debug!(errors = errors.len(), "value requested in ERROR state");
                Err(ResultError::ResultInErrorState(errors))
            }
        }
    }

    /// Take the errors out. Same contract as [`Outcome::get_errors`].
    pub fn into_errors(self) -> Result<Notification, ResultError<T>> {
        match self.state {
            State::Error(errors) => Ok(errors),
            State::Ok(value) => {
                tracing::debug!("errors requested in OK state");
                Err(ResultError::ResultInOkState(value))
            }
        }
    }

    /// Run `on_success` with the value if OK, otherwise `on_error` with the
    /// errors, and return what it returns.
    ///
    /// Exactly one of the two closures is called.
    pub fn either<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_error: impl FnOnce(Notification) -> R,
    ) -> R {
        match self.state {
            State::Ok(value) => on_success(value),
            State::Error(errors) => on_error(errors),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Notification> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.either(Ok, Err)
    }
}
