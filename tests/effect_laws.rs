#![cfg(feature = "effect")]
//! Property-based tests for Effect laws.
//!
//! Tests the following laws using proptest:
//!
//! ## Functor Laws
//! - Identity: effect.map(|x| x) == effect
//! - Composition: effect.map(f).map(g) == effect.map(|x| g(f(x)))
//!
//! ## Monad Laws
//! - Left Identity: of(a).chain(f) == f(a)
//! - Right Identity: m.chain(of) == m
//! - Associativity: m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))
//!
//! ## Failure Laws
//! - fail(e).map(f) == fail(e)
//! - fail(e).chain(f) == fail(e)

use dirsync_console::effect::Effect;
use proptest::prelude::*;

proptest! {
    /// Functor Identity Law: effect.map(|x| x) == effect
    #[test]
    fn prop_effect_functor_identity(value in -1000i32..1000i32) {
        let effect: Effect<i32, String> = Effect::of(value);
        prop_assert_eq!(effect.map(|x| x).try_run(), Ok(value));
    }

    /// Functor Composition Law: effect.map(f).map(g) == effect.map(|x| g(f(x)))
    #[test]
    fn prop_effect_functor_composition(value in -1000i32..1000i32) {
        let function1 = |x: i32| x.wrapping_add(1);
        let function2 = |x: i32| x.wrapping_mul(2);

        let left: Effect<i32, String> = Effect::of(value);
        let right: Effect<i32, String> = Effect::of(value);

        prop_assert_eq!(
            left.map(function1).map(function2).try_run(),
            right.map(move |x| function2(function1(x))).try_run()
        );
    }

    /// Monad Left Identity Law: of(a).chain(f) == f(a)
    #[test]
    fn prop_effect_monad_left_identity(value in -1000i32..1000i32) {
        let function = |x: i32| Effect::<i32, String>::of(x.wrapping_mul(3));

        let left: Effect<i32, String> = Effect::of(value);

        prop_assert_eq!(left.chain(function).try_run(), function(value).try_run());
    }

    /// Monad Right Identity Law: m.chain(of) == m
    #[test]
    fn prop_effect_monad_right_identity(value in -1000i32..1000i32) {
        let effect: Effect<i32, String> = Effect::of(value);
        prop_assert_eq!(effect.chain(Effect::of).try_run(), Ok(value));
    }

    /// Monad Associativity Law:
    /// m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))
    #[test]
    fn prop_effect_monad_associativity(value in -1000i32..1000i32) {
        let function1 = |x: i32| Effect::<i32, String>::of(x.wrapping_add(10));
        let function2 = |x: i32| Effect::<i32, String>::of(x.wrapping_mul(2));

        let left: Effect<i32, String> = Effect::of(value);
        let right: Effect<i32, String> = Effect::of(value);

        prop_assert_eq!(
            left.chain(function1).chain(function2).try_run(),
            right.chain(move |x| function1(x).chain(function2)).try_run()
        );
    }

    /// A failed effect ignores map.
    #[test]
    fn prop_effect_failure_absorbs_map(error in "\\PC{1,16}") {
        let effect: Effect<i32, String> = Effect::fail(error.clone());
        prop_assert_eq!(effect.map(|x| x + 1).try_run(), Err(error));
    }

    /// A failed effect ignores chain.
    #[test]
    fn prop_effect_failure_absorbs_chain(error in "\\PC{1,16}") {
        let effect: Effect<i32, String> = Effect::fail(error.clone());
        prop_assert_eq!(effect.chain(Effect::of).try_run(), Err(error));
    }
}
