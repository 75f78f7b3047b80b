//! Outcome values with accumulated errors.
//!
//! An [`Outcome`] is either a success holding a value, or a failure holding a
//! non-empty [`Notification`]: an ordered, deduplicated set of [`Error`]
//! records. Validation code collects every problem it finds instead of
//! stopping at the first one, then decides success or failure once.
//!
//! - [`Error`]: field, message and opaque auxiliary data. Two errors are the
//!   same error when field and message match; auxiliary data is ignored.
//! - [`Notification`]: accumulates errors, dropping duplicates, and merges
//!   other notifications into itself without touching them.
//! - [`Outcome`]: two closed states. Invalid states (a failure with no errors,
//!   a success with no value) cannot be constructed.
//!
//! # Usage
//!
//! ```text
//! let mut errors = Notification::new();
//! if name.is_empty() {
//!     errors.add_error(Error::new("name", "must not be empty"));
//! }
//! if age > 150 {
//!     errors.add_error(Error::new("age", "out of range"));
//! }
//!
//! let outcome = if errors.has_errors() {
//!     Outcome::error(errors)?
//! } else {
//!     Outcome::ok(User { name, age })
//! };
//!
//! outcome.either(|user| save(user), |errors| report(&errors))
//! ```
//!
//! # Misuse
//!
//! Accessors called in the wrong state, and constructors given invalid input,
//! return a [`ResultError`] instead of panicking. [`Outcome::either`] is the
//! way to consume an outcome without ever seeing a wrong-state error.

mod error;
mod failure;
mod notification;
mod outcome;

pub use error::{Error, Extra, ExtraValue};
pub use failure::ResultError;
pub use notification::Notification;
pub use outcome::{Okay, Outcome};
