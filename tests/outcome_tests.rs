//! Unit tests for Outcome<T>.
//!
//! Outcome holds either a success value or a failure message. Failure
//! messages travel through chains unchanged.

use duality::optional::Optional;
use duality::outcome::Outcome;
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction and Type Checking
// =============================================================================

#[rstest]
#[case(Outcome::ok(1), true)]
#[case(Outcome::err("no"), false)]
fn is_ok_and_is_err_are_complements(#[case] value: Outcome<i32>, #[case] expected_ok: bool) {
    assert_eq!(value.is_ok(), expected_ok);
    assert_eq!(value.is_err(), !expected_ok);
}

#[rstest]
fn error_is_absent_on_success() {
    let value: Outcome<i32> = Outcome::ok(0);
    assert!(value.error().is_absent());
}

// =============================================================================
// Propagation
// =============================================================================

#[rstest]
fn error_is_preserved_through_chain() {
    let calls = Cell::new(0);
    let result = Outcome::<i32>::err("E")
        .on_success(|x| {
            calls.set(calls.get() + 1);
            x + 1
        })
        .on_success(|x| {
            calls.set(calls.get() + 1);
            x.to_string()
        });
    assert_eq!(result.error(), Optional::some("E"));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn first_failure_in_bind_chain_wins() {
    let reached_third = Cell::new(false);
    let result = Outcome::ok(1)
        .bind(|_| Outcome::<i32>::err("first"))
        .bind(|_| Outcome::<i32>::err("second"))
        .on_success(|x| {
            reached_third.set(true);
            x
        });
    assert_eq!(result.error(), Optional::some("first"));
    assert!(!reached_third.get());
}

#[rstest]
fn long_messages_are_not_truncated() {
    let message = "x".repeat(10_000);
    let result = Outcome::<u8>::err(message.clone()).on_success(u32::from);
    assert_eq!(result.into_error(), Optional::some(message));
}

#[rstest]
fn on_success_calls_function_once() {
    let calls = Cell::new(0);
    let result = Outcome::ok(2).on_success(|x| {
        calls.set(calls.get() + 1);
        x * 3
    });
    assert_eq!(result, Outcome::ok(6));
    assert_eq!(calls.get(), 1);
}

// =============================================================================
// Fold and Unwrap
// =============================================================================

#[rstest]
fn fold_round_trip_on_success() {
    assert_eq!(Outcome::ok(9).fold(|x| x, |_| -1), 9);
}

#[rstest]
fn fold_round_trip_on_failure() {
    let message = Outcome::<String>::err("m").fold(|x| x, |e| e);
    assert_eq!(message, "m");
}

#[rstest]
fn unwrap_or_else_is_lazy_and_fresh() {
    let evaluations = Cell::new(0);
    let provider = || {
        evaluations.set(evaluations.get() + 1);
        0
    };
    assert_eq!(Outcome::ok(5).unwrap_or_else(provider), 5);
    assert_eq!(evaluations.get(), 0);

    let failed: Outcome<i32> = Outcome::err("x");
    assert_eq!(failed.clone().unwrap_or_else(provider), 0);
    assert_eq!(failed.unwrap_or_else(provider), 0);
    assert_eq!(evaluations.get(), 2);
}

#[rstest]
fn unwrap_or_eager_default() {
    assert_eq!(Outcome::<i32>::err("x").unwrap_or(11), 11);
    assert_eq!(Outcome::ok(3).unwrap_or(11), 3);
}

// =============================================================================
// Scenarios
// =============================================================================

#[rstest]
fn failed_int_mapped_to_string_keeps_message() {
    let result = Outcome::<i32>::err("bad").on_success(|x| x.to_string());
    assert_eq!(result.error(), Optional::some("bad"));
}

#[rstest]
fn outcome_may_wrap_optional() {
    let found: Outcome<Optional<i32>> = Outcome::ok(Optional::none());
    assert!(found.is_ok());
    assert_eq!(found.unwrap_or(Optional::some(1)), Optional::none());
}
