//! Behavior of the protected frame.

use std::cell::Cell;
use std::panic::panic_any;

use guard_this::{guard, protect, run, Captured, GuardExt, Guarded};

#[test]
fn noop_returns_empty() {
    assert!(run(|| ()).is_none());
}

#[test]
fn panic_message_is_captured() {
    let captured = run(|| panic!("boom")).unwrap();
    assert_eq!(captured.message(), "boom");
    assert_eq!(captured.category(), Captured::PANIC);
}

#[test]
fn formatted_panic_message_is_captured() {
    let captured = run(|| panic!("bad value: {}", 7)).unwrap();
    assert_eq!(captured.message(), "bad value: 7");
}

#[test]
fn opaque_payload_is_captured() {
    let captured = run(|| panic_any(42_i32)).unwrap();
    assert_eq!(captured.category(), Captured::PANIC);
    assert_eq!(captured.message(), "unknown panic payload");
}

#[test]
fn side_effects_survive_the_panic() {
    let counter = Cell::new(0);
    let captured = run(|| {
        counter.set(counter.get() + 1);
        panic!("boom");
    });
    assert!(captured.is_some());
    assert_eq!(counter.get(), 1);
}

#[test]
fn operation_is_invoked_exactly_once() {
    let calls = Cell::new(0);
    assert!(run(|| calls.set(calls.get() + 1)).is_none());
    assert_eq!(calls.get(), 1);

    let calls = Cell::new(0);
    let captured = run(|| {
        calls.set(calls.get() + 1);
        panic!("boom");
    });
    assert!(captured.is_some());
    assert_eq!(calls.get(), 1);
}

#[test]
fn sequential_calls_do_not_interfere() {
    let first = run(|| panic!("first"));
    let second = run(|| ());
    assert_eq!(first.unwrap().message(), "first");
    assert!(second.is_none());
}

#[test]
fn protect_returns_the_value() {
    assert_eq!(protect(|| 21 * 2).unwrap(), 42);
}

#[test]
fn protect_yields_the_capture_on_panic() {
    let captured = protect(|| -> i32 { panic!("boom") }).unwrap_err();
    assert_eq!(captured.message(), "boom");
}

#[test]
fn guard_macro_yields_the_capture() {
    let captured = guard! {
        try { panic!("boom") }
    };
    assert_eq!(captured.unwrap().message(), "boom");

    let captured = guard! {
        try { () }
    };
    assert!(captured.is_none());
}

#[test]
fn guard_macro_runs_the_handler() {
    let seen = Cell::new(false);
    guard! {
        try { panic!("boom") }
        catch e {
            assert_eq!(e.message(), "boom");
            seen.set(true);
        }
    }
    assert!(seen.get());
}

#[test]
fn guard_macro_handler_skipped_on_success() {
    let seen = Cell::new(false);
    guard! {
        try { () }
        catch _e { seen.set(true); }
    }
    assert!(!seen.get());
}

#[test]
fn guard_macro_direct_mode_fallback() {
    let val = guard! {
        try -> i32 { panic!("boom") }
        else { -1 }
    };
    assert_eq!(val, -1);

    let val = guard! {
        try -> i32 { 42 }
        else { -1 }
    };
    assert_eq!(val, 42);
}

#[test]
fn guard_macro_direct_mode_handler() {
    let val = guard! {
        try -> usize { panic!("boom") }
        catch e { e.message().len() }
    };
    assert_eq!(val, 4);
}

#[test]
fn closure_extensions() {
    let captured = (|| panic!("boom")).guarded();
    assert_eq!(captured.unwrap().message(), "boom");

    let result = (|| 21 * 2).protected();
    assert_eq!(result.unwrap(), 42);
}

#[test]
fn display_shows_category_message_and_data() {
    let captured = Captured::new("Overflow", "value exceeds limit").kv("limit", "100");
    let rendered = captured.to_string();
    assert!(rendered.starts_with("[Overflow] value exceeds limit"));
    assert!(rendered.contains("limit: 100"));
}

#[test]
fn result_alias_and_message_conversions() {
    fn compute() -> guard_this::Result<i32> {
        protect(|| 21 * 2)
    }
    assert_eq!(compute().unwrap(), 42);

    let captured: Captured = "boom".into();
    assert_eq!(captured.message(), "boom");
    let captured: Captured = String::from("boom").into();
    assert_eq!(captured.category(), Captured::PANIC);
}

#[test]
fn captured_slots_into_error_handling() {
    let captured = run(|| panic!("boom")).unwrap();
    let err: Box<dyn std::error::Error> = Box::new(captured);
    assert!(err.to_string().contains("boom"));
}
