#![cfg(feature = "effect")]
//! Property-based tests for State laws.
//!
//! Tests the following laws using proptest:
//!
//! ## Functor Laws
//! - Identity: state.map(|x| x) == state
//! - Composition: state.map(f).map(g) == state.map(|x| g(f(x)))
//!
//! ## Monad Laws
//! - Left Identity: pure(a).and_then(f) == f(a)
//! - Right Identity: m.and_then(pure) == m
//!
//! ## State-Access Laws
//! - Get Put: get().and_then(put) == pure(())
//! - Put Get: put(s).then(get()) returns s
//! - Put Put: put(s1).then(put(s2)) == put(s2)
//! - Modify Composition: modify(f).then(modify(g)) == modify(|s| g(f(s)))

use dirsync_console::effect::State;
use proptest::prelude::*;

proptest! {
    /// Functor Identity Law: state.map(|x| x) == state
    #[test]
    fn prop_state_functor_identity(initial_state in -1000i32..1000i32) {
        let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
        let mapped: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1)).map(|x| x);

        prop_assert_eq!(state.run(initial_state), mapped.run(initial_state));
    }

    /// Functor Composition Law: state.map(f).map(g) == state.map(|x| g(f(x)))
    #[test]
    fn prop_state_functor_composition(initial_state in -100i32..100i32) {
        let function1 = |x: i32| x.wrapping_add(1);
        let function2 = |x: i32| x.wrapping_mul(2);

        let left: State<i32, i32> = State::new(|s: i32| (s, s)).map(function1).map(function2);
        let right: State<i32, i32> =
            State::new(|s: i32| (s, s)).map(move |x| function2(function1(x)));

        prop_assert_eq!(left.run(initial_state), right.run(initial_state));
    }

    /// Monad Left Identity Law: pure(a).and_then(f) == f(a)
    #[test]
    fn prop_state_monad_left_identity(value in -100i32..100i32, initial_state in -100i32..100i32) {
        let function = |x: i32| State::<i32, i32>::new(move |s: i32| (x.wrapping_mul(2), s.wrapping_add(1)));

        let left = State::<i32, i32>::pure(value).and_then(function);
        let right = function(value);

        prop_assert_eq!(left.run(initial_state), right.run(initial_state));
    }

    /// Monad Right Identity Law: m.and_then(pure) == m
    #[test]
    fn prop_state_monad_right_identity(initial_state in -1000i32..1000i32) {
        let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
        let chained: State<i32, i32> =
            State::new(|s: i32| (s * 2, s + 1)).and_then(State::pure);

        prop_assert_eq!(state.run(initial_state), chained.run(initial_state));
    }

    /// Get Put Law: get().and_then(put) == pure(())
    #[test]
    fn prop_state_get_put_law(initial_state in -1000i32..1000i32) {
        let left: State<i32, ()> = State::get().and_then(State::put);
        let right: State<i32, ()> = State::pure(());

        prop_assert_eq!(left.run(initial_state), right.run(initial_state));
    }

    /// Put Get Law: put(s).then(get()) returns s
    #[test]
    fn prop_state_put_get_law(new_state in -1000i32..1000i32, initial_state in -1000i32..1000i32) {
        let computation: State<i32, i32> = State::put(new_state).then(State::get());
        let (result, final_state) = computation.run(initial_state);

        prop_assert_eq!(result, new_state);
        prop_assert_eq!(final_state, new_state);
    }

    /// Put Put Law: put(s1).then(put(s2)) == put(s2)
    #[test]
    fn prop_state_put_put_law(
        first in -1000i32..1000i32,
        second in -1000i32..1000i32,
        initial_state in -1000i32..1000i32,
    ) {
        let left: State<i32, ()> = State::put(first).then(State::put(second));
        let right: State<i32, ()> = State::put(second);

        prop_assert_eq!(left.run(initial_state), right.run(initial_state));
    }

    /// Modify Composition Law: modify(f).then(modify(g)) == modify(|s| g(f(s)))
    #[test]
    fn prop_state_modify_composition(initial_state in -100i32..100i32) {
        let function1 = |s: i32| s.wrapping_add(3);
        let function2 = |s: i32| s.wrapping_mul(2);

        let left: State<i32, ()> = State::modify(function1).then(State::modify(function2));
        let right: State<i32, ()> = State::modify(move |s| function2(function1(s)));

        prop_assert_eq!(left.exec(initial_state), right.exec(initial_state));
    }
}
