#![cfg(feature = "effect")]
//! Unit tests for the Effect type.
//!
//! Tests construction, deferral, transformation (map, map_err, chain),
//! and the terminal operations (fork, run, try_run).

use dirsync_console::effect::Effect;
use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;

// =============================================================================
// Construction and Execution
// =============================================================================

#[rstest]
fn effect_of_yields_the_wrapped_value() {
    let effect: Effect<i32, String> = Effect::of(42);
    assert_eq!(effect.try_run(), Ok(42));
}

#[rstest]
fn effect_fail_yields_the_wrapped_error() {
    let effect: Effect<i32, String> = Effect::fail("boom".to_string());
    assert_eq!(effect.try_run(), Err("boom".to_string()));
}

#[rstest]
fn effect_new_defers_execution_until_run() {
    let executed = Rc::new(Cell::new(false));
    let flag = Rc::clone(&executed);

    let effect: Effect<i32, String> = Effect::new(move || {
        flag.set(true);
        Ok(7)
    });

    assert!(!executed.get());
    assert_eq!(effect.try_run(), Ok(7));
    assert!(executed.get());
}

#[rstest]
fn transformations_stay_deferred() {
    let executed = Rc::new(Cell::new(false));
    let flag = Rc::clone(&executed);

    let _effect: Effect<i32, String> = Effect::new(move || {
        flag.set(true);
        Ok(1)
    })
    .map(|value| value + 1)
    .chain(Effect::of);

    // Dropped without running, so the computation never fires.
    assert!(!executed.get());
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn map_transforms_the_success_value() {
    let effect: Effect<i32, String> = Effect::of(10);
    assert_eq!(effect.map(|value| value * 3).try_run(), Ok(30));
}

#[rstest]
fn map_is_skipped_on_failure() {
    let touched = Rc::new(Cell::new(false));
    let flag = Rc::clone(&touched);

    let effect: Effect<i32, String> = Effect::fail("boom".to_string());
    let result = effect
        .map(move |value| {
            flag.set(true);
            value + 1
        })
        .try_run();

    assert_eq!(result, Err("boom".to_string()));
    assert!(!touched.get());
}

#[rstest]
fn map_err_transforms_the_error_channel() {
    let effect: Effect<i32, i32> = Effect::fail(404);
    let result = effect.map_err(|code| format!("status {code}")).try_run();
    assert_eq!(result, Err("status 404".to_string()));
}

#[rstest]
fn map_err_leaves_success_untouched() {
    let effect: Effect<i32, i32> = Effect::of(1);
    assert_eq!(effect.map_err(|code| format!("status {code}")).try_run(), Ok(1));
}

#[rstest]
fn chain_sequences_dependent_effects() {
    let effect: Effect<i32, String> = Effect::of(5);
    let result = effect.chain(|value| Effect::of(value * 2)).try_run();
    assert_eq!(result, Ok(10));
}

#[rstest]
fn chain_short_circuits_on_failure() {
    let touched = Rc::new(Cell::new(false));
    let flag = Rc::clone(&touched);

    let effect: Effect<i32, String> = Effect::fail("boom".to_string());
    let result = effect
        .chain(move |value| {
            flag.set(true);
            Effect::<i32, String>::of(value)
        })
        .try_run();

    assert_eq!(result, Err("boom".to_string()));
    assert!(!touched.get());
}

#[rstest]
fn chain_propagates_the_second_failure() {
    let effect: Effect<i32, String> = Effect::of(5);
    let result = effect
        .chain(|_| Effect::<i32, String>::fail("late".to_string()))
        .try_run();
    assert_eq!(result, Err("late".to_string()));
}

// =============================================================================
// Terminal Operations
// =============================================================================

#[rstest]
fn fork_routes_success_to_the_second_handler() {
    let effect: Effect<i32, String> = Effect::of(2);
    let message = effect.fork(|error| format!("failed: {error}"), |value| format!("got {value}"));
    assert_eq!(message, "got 2");
}

#[rstest]
fn fork_routes_failure_to_the_first_handler() {
    let effect: Effect<i32, String> = Effect::fail("boom".to_string());
    let message = effect.fork(|error| format!("failed: {error}"), |value| format!("got {value}"));
    assert_eq!(message, "failed: boom");
}

#[rstest]
fn run_recovers_from_failure_with_a_fallback() {
    let effect: Effect<i32, String> = Effect::fail("boom".to_string());
    assert_eq!(effect.run(|_| -1), -1);
}

#[rstest]
fn run_passes_success_through() {
    let effect: Effect<i32, String> = Effect::of(9);
    assert_eq!(effect.run(|_| -1), 9);
}
