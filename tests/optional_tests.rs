//! Unit tests for Optional<T>.
//!
//! Optional has two states fixed at construction:
//! - present: holds exactly one value
//! - absent: holds nothing and carries no reason

use duality::optional::Optional;
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction and Type Checking
// =============================================================================

#[rstest]
fn some_is_present() {
    let value = Optional::some("hello");
    assert!(value.is_present());
    assert!(!value.is_absent());
}

#[rstest]
fn none_is_absent() {
    let value: Optional<&str> = Optional::none();
    assert!(value.is_absent());
}

#[rstest]
fn some_of_none_is_not_none() {
    let nested: Optional<Optional<i32>> = Optional::some(Optional::none());
    assert!(nested.is_present());
    assert_ne!(nested, Optional::none());
}

#[rstest]
fn presence_is_orthogonal_to_payload_nullability() {
    let value: Optional<Option<String>> = Optional::some(None);
    assert!(value.is_present());
    assert_eq!(value.unwrap_or_else(|| Some("default".to_string())), None);
}

// =============================================================================
// Map / Bind
// =============================================================================

#[rstest]
fn map_on_present_calls_function_once() {
    let calls = Cell::new(0);
    let result = Optional::some(2).map(|x| {
        calls.set(calls.get() + 1);
        x + 1
    });
    assert_eq!(result, Optional::some(3));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn map_on_absent_never_calls_function() {
    let probe = Cell::new("untouched");
    let absent: Optional<i32> = Optional::none();
    let result = absent.map(|x| {
        probe.set("touched");
        x
    });
    assert_eq!(result, Optional::none());
    assert_eq!(probe.get(), "untouched");
}

#[rstest]
fn bind_can_turn_present_into_absent() {
    let result = Optional::some(3).bind(|x| {
        if x > 5 {
            Optional::some(x)
        } else {
            Optional::none()
        }
    });
    assert_eq!(result, Optional::none());
}

#[rstest]
fn bind_on_absent_never_calls_function() {
    let probe = Cell::new(false);
    let absent: Optional<i32> = Optional::none();
    let result = absent.bind(|x| {
        probe.set(true);
        Optional::some(x)
    });
    assert_eq!(result, Optional::none());
    assert!(!probe.get());
}

// =============================================================================
// Fold
// =============================================================================

#[rstest]
fn fold_present_runs_only_on_some() {
    let none_called = Cell::new(false);
    let result = Optional::some(4).fold(
        |x| x * 10,
        || {
            none_called.set(true);
            0
        },
    );
    assert_eq!(result, 40);
    assert!(!none_called.get());
}

#[rstest]
fn fold_absent_runs_only_on_none() {
    let some_called = Cell::new(false);
    let absent: Optional<i32> = Optional::none();
    let result = absent.fold(
        |x| {
            some_called.set(true);
            x
        },
        || -1,
    );
    assert_eq!(result, -1);
    assert!(!some_called.get());
}

// =============================================================================
// Unwrap
// =============================================================================

#[rstest]
#[case(1)]
#[case(3)]
#[case(10)]
fn unwrap_or_else_evaluates_provider_every_call(#[case] times: usize) {
    let evaluations = Cell::new(0);
    let absent: Optional<i32> = Optional::none();
    for _ in 0..times {
        let value = absent.unwrap_or_else(|| {
            evaluations.set(evaluations.get() + 1);
            7
        });
        assert_eq!(value, 7);
    }
    assert_eq!(evaluations.get(), times);
}

#[rstest]
fn unwrap_or_else_never_evaluates_provider_when_present() {
    let evaluations = Cell::new(0);
    let value = Optional::some(1).unwrap_or_else(|| {
        evaluations.set(evaluations.get() + 1);
        2
    });
    assert_eq!(value, 1);
    assert_eq!(evaluations.get(), 0);
}

#[rstest]
fn unwrap_or_uses_plain_default() {
    assert_eq!(Optional::some(5).unwrap_or(0), 5);
    assert_eq!(Optional::<i32>::none().unwrap_or(0), 0);
}

// =============================================================================
// Scenarios
// =============================================================================

#[rstest]
fn map_to_string_then_unwrap() {
    let text = Optional::some(42)
        .map(|x| x.to_string())
        .unwrap_or_else(String::new);
    assert_eq!(text, "42");
}

#[rstest]
fn payload_is_moved_not_cloned() {
    let payload = vec![1, 2, 3];
    let address = payload.as_ptr();
    let unwrapped = Optional::some(payload).unwrap_or_else(Vec::new);
    assert_eq!(unwrapped.as_ptr(), address);
}

#[rstest]
#[case(Optional::some("x".to_string()), "Some(x)")]
#[case(Optional::none(), "None")]
fn display_representation(#[case] value: Optional<String>, #[case] expected: &str) {
    assert_eq!(format!("{value}"), expected);
}
