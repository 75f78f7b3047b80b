//! Property-based tests for error identity, accumulation and outcomes.
//!
//! Errors are drawn from a deliberately small alphabet so that generated
//! sequences contain plenty of duplicates.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use std::collections::HashSet;

use proptest::prelude::*;
use verdict::{Error, Notification, Outcome, ResultError};

// -- Strategies --

/// Field names and messages from a tiny pool, to force collisions.
fn small_text() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["", "a", "b", "code", "name"]).prop_map(String::from)
}

fn error_strategy() -> impl Strategy<Value = Error> {
    (small_text(), small_text(), any::<u16>()).prop_map(|(field, message, tag)| {
        Error::new(field, message).with_extra_value("tag", tag)
    })
}

fn errors_strategy() -> impl Strategy<Value = Vec<Error>> {
    prop::collection::vec(error_strategy(), 0..24)
}

/// Reference model: distinct (field, message) pairs in first-occurrence order.
fn distinct_keys(errors: &[Error]) -> Vec<(String, String)> {
    let mut seen = HashSet::new();
    errors
        .iter()
        .map(|e| (e.field().to_string(), e.error_message().to_string()))
        .filter(|key| seen.insert(key.clone()))
        .collect()
}

fn keys(notification: &Notification) -> Vec<(String, String)> {
    notification
        .iter()
        .map(|e| (e.field().to_string(), e.error_message().to_string()))
        .collect()
}

// -- Properties --

proptest! {
    #[test]
    fn equality_ignores_extra(
        field in small_text(),
        message in small_text(),
        x in any::<u32>(),
        y in any::<i64>(),
    ) {
        let left = Error::new(field.clone(), message.clone()).with_extra_value("x", x);
        let right = Error::new(field, message).with_extra_value("y", y);
        prop_assert!(left.is_equal(&right));
        prop_assert!(right.is_equal(&left));
    }

    #[test]
    fn equality_follows_field_and_message(a in error_strategy(), b in error_strategy()) {
        let same = a.field() == b.field() && a.error_message() == b.error_message();
        prop_assert_eq!(a.is_equal(&b), same);
    }

    #[test]
    fn add_error_keeps_first_occurrences(errors in errors_strategy()) {
        let mut notification = Notification::new();
        for error in &errors {
            notification.add_error(error.clone());
        }

        prop_assert_eq!(keys(&notification), distinct_keys(&errors));
        prop_assert_eq!(notification.has_errors(), !errors.is_empty());

        // First occurrence wins, extra included.
        for stored in notification.iter() {
            let first = errors.iter().find(|e| e.is_equal(stored)).unwrap();
            prop_assert_eq!(
                stored.extra_value::<u16>("tag"),
                first.extra_value::<u16>("tag")
            );
        }
    }

    #[test]
    fn merge_is_ordered_union_and_leaves_source(
        left in errors_strategy(),
        right in errors_strategy(),
    ) {
        let mut target: Notification = left.iter().cloned().collect();
        let source: Notification = right.iter().cloned().collect();
        let source_before = keys(&source);

        target.merge(&source);

        let combined: Vec<Error> = left.iter().chain(right.iter()).cloned().collect();
        prop_assert_eq!(keys(&target), distinct_keys(&combined));
        prop_assert_eq!(keys(&source), source_before);
    }

    #[test]
    fn error_outcome_requires_errors(errors in errors_strategy()) {
        let notification: Notification = errors.into_iter().collect();
        let expected_ok = notification.has_errors();

        match Outcome::<u8>::error(notification) {
            Ok(outcome) => {
                prop_assert!(expected_ok);
                prop_assert!(outcome.is_error());
            }
            Err(err) => {
                prop_assert!(!expected_ok);
                prop_assert_eq!(err, ResultError::ErrorsListIsEmpty);
            }
        }
    }

    #[test]
    fn get_errors_is_a_copy(
        errors in prop::collection::vec(error_strategy(), 1..12),
        extra in error_strategy(),
    ) {
        let outcome = Outcome::<()>::error(errors.into_iter().collect()).unwrap();
        let before = keys(&outcome.get_errors().unwrap());

        let mut copy = outcome.get_errors().unwrap();
        copy.add_error(extra);

        prop_assert_eq!(keys(&outcome.get_errors().unwrap()), before);
    }

    #[test]
    fn either_dispatches_on_state(value in any::<i32>(), errors in errors_strategy()) {
        let ok = Outcome::ok(value).either(Some, |_| None);
        prop_assert_eq!(ok, Some(value));

        if let Ok(failed) = Outcome::<i32>::error(errors.iter().cloned().collect()) {
            let count = failed.either(|_| 0, |n| n.len());
            prop_assert_eq!(count, distinct_keys(&errors).len());
        }
    }
}
