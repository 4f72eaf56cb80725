//! Effect - deferred fallible computation.
//!
//! The `Effect` type wraps a synchronous computation that may fail. The
//! computation is not executed until `run` or `fork` is called, so effects
//! can be composed safely without performing side effects prematurely.
//!
//! # Design Philosophy
//!
//! An `Effect` "describes" a fallible operation but doesn't "execute" it.
//! Execution happens only through the terminal operations `run` and `fork`,
//! which hand the outcome to caller-supplied continuations. Domain failures
//! travel in the error channel and never escape as panics.
//!
//! # Examples
//!
//! ```rust
//! use dirsync_console::effect::Effect;
//!
//! // A pure effect
//! let effect: Effect<i32, String> = Effect::of(42);
//! assert_eq!(effect.run(|_| 0), 42);
//!
//! // Chained effects
//! let effect: Effect<i32, String> = Effect::of(10)
//!     .map(|x| x * 2)
//!     .chain(|x| Effect::of(x + 1));
//! assert_eq!(effect.run(|_| 0), 21);
//! ```
//!
//! # Deferral
//!
//! ```rust
//! use dirsync_console::effect::Effect;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let executed = Rc::new(Cell::new(false));
//! let flag = executed.clone();
//!
//! let effect: Effect<i32, String> = Effect::new(move || {
//!     flag.set(true);
//!     Ok(42)
//! });
//!
//! // Not executed yet
//! assert!(!executed.get());
//!
//! assert_eq!(effect.run(|_| 0), 42);
//! assert!(executed.get());
//! ```

/// A deferred computation that either succeeds with an `A` or fails with
/// an `E`.
///
/// `Effect<A, E>` wraps a `FnOnce() -> Result<A, E>`. Nothing runs until a
/// terminal operation (`run`, `fork`) consumes the effect; every combinator
/// returns a new `Effect` and leaves the original logic untouched.
///
/// # Type Parameters
///
/// - `A`: The success value type.
/// - `E`: The failure value type.
///
/// # Laws
///
/// 1. **Identity**: `Effect::of(a).run(f) == a`, with `f` never invoked.
/// 2. **Map Composition**: `effect.map(g).map(h)` and
///    `effect.map(|x| h(g(x)))` produce the same outcome under `run`.
/// 3. **Short-Circuit**: once a step fails, no downstream `map`/`chain`
///    closure is invoked and the failure handler receives the original
///    error unchanged.
pub struct Effect<A, E> {
    /// The wrapped fallible computation.
    run_effect: Box<dyn FnOnce() -> Result<A, E>>,
}

impl<A: 'static, E: 'static> Effect<A, E> {
    /// Creates a new effect from a fallible closure.
    ///
    /// The closure will not be executed until `run` or `fork` is called.
    ///
    /// # Arguments
    ///
    /// * `computation` - A closure producing `Ok` on success or `Err` on
    ///   failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dirsync_console::effect::Effect;
    ///
    /// let effect: Effect<i32, String> = Effect::new(|| Ok(10 + 20));
    /// assert_eq!(effect.run(|_| 0), 30);
    /// ```
    pub fn new<F>(computation: F) -> Self
    where
        F: FnOnce() -> Result<A, E> + 'static,
    {
        Self {
            run_effect: Box::new(computation),
        }
    }

    /// Wraps a value in an always-succeeding effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dirsync_console::effect::Effect;
    ///
    /// let effect: Effect<i32, String> = Effect::of(42);
    /// assert_eq!(effect.run(|_| 0), 42);
    /// ```
    pub fn of(value: A) -> Self {
        Self::new(move || Ok(value))
    }

    /// Wraps an error in an always-failing effect.
    ///
    /// This is the lifted failure that `chain` substitutes for the
    /// continuation when an upstream step has already failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dirsync_console::effect::Effect;
    ///
    /// let effect: Effect<i32, String> = Effect::fail("boom".to_string());
    /// assert_eq!(effect.run(|e| e.len() as i32), 4);
    /// ```
    pub fn fail(error: E) -> Self {
        Self::new(move || Err(error))
    }

    /// Transforms the success value of this effect.
    ///
    /// The mapping closure is applied only when the computation succeeds;
    /// a failure passes through unchanged and the closure is never invoked.
    ///
    /// # Arguments
    ///
    /// * `function` - A function applied to the success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dirsync_console::effect::Effect;
    ///
    /// let effect: Effect<i32, String> = Effect::of(21).map(|x| x * 2);
    /// assert_eq!(effect.run(|_| 0), 42);
    /// ```
    pub fn map<B, F>(self, function: F) -> Effect<B, E>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        Effect::new(move || (self.run_effect)().map(function))
    }

    /// Transforms the failure value of this effect.
    ///
    /// The counterpart of `map` for the error channel; a success passes
    /// through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dirsync_console::effect::Effect;
    ///
    /// let effect: Effect<i32, String> =
    ///     Effect::fail("boom".to_string()).map_err(|e| format!("doc(): {e}"));
    /// assert_eq!(effect.run(|e| e.len() as i32), 12);
    /// ```
    pub fn map_err<E2, F>(self, function: F) -> Effect<A, E2>
    where
        F: FnOnce(E) -> E2 + 'static,
        E2: 'static,
    {
        Effect::new(move || (self.run_effect)().map_err(function))
    }

    /// Chains this effect with a function producing the next effect.
    ///
    /// When this effect succeeds, the continuation builds the next effect,
    /// which is evaluated in place; its outcome becomes the overall outcome.
    /// When this effect fails, the continuation is never invoked and the
    /// failure short-circuits to the terminal operation.
    ///
    /// # Arguments
    ///
    /// * `function` - A function from the success value to the next effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dirsync_console::effect::Effect;
    ///
    /// let effect: Effect<i32, String> =
    ///     Effect::of(10).chain(|x| Effect::of(x * 2));
    /// assert_eq!(effect.run(|_| 0), 20);
    /// ```
    pub fn chain<B, F>(self, function: F) -> Effect<B, E>
    where
        F: FnOnce(A) -> Effect<B, E> + 'static,
        B: 'static,
    {
        Effect::new(move || match (self.run_effect)() {
            Ok(value) => (function(value).run_effect)(),
            Err(error) => Err(error),
        })
    }

    /// Alias for `chain`.
    ///
    /// This is the conventional Rust name for monadic bind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dirsync_console::effect::Effect;
    ///
    /// let effect: Effect<i32, String> =
    ///     Effect::of(10).and_then(|x| Effect::of(x + 5));
    /// assert_eq!(effect.run(|_| 0), 15);
    /// ```
    pub fn and_then<B, F>(self, function: F) -> Effect<B, E>
    where
        F: FnOnce(A) -> Effect<B, E> + 'static,
        B: 'static,
    {
        self.chain(function)
    }

    /// Executes the effect and dispatches the outcome.
    ///
    /// This is the terminal operation: the wrapped computation runs to
    /// completion, then exactly one of the two continuations is invoked
    /// with the outcome. The effect is consumed.
    ///
    /// # Arguments
    ///
    /// * `on_fail` - Continuation for the failure value.
    /// * `on_succeed` - Continuation for the success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dirsync_console::effect::Effect;
    ///
    /// let effect: Effect<i32, String> = Effect::of(42);
    /// let outcome = effect.fork(|error| error, |value| format!("got {value}"));
    /// assert_eq!(outcome, "got 42");
    /// ```
    pub fn fork<B, FE, FA>(self, on_fail: FE, on_succeed: FA) -> B
    where
        FE: FnOnce(E) -> B,
        FA: FnOnce(A) -> B,
    {
        match (self.run_effect)() {
            Ok(value) => on_succeed(value),
            Err(error) => on_fail(error),
        }
    }

    /// Executes the effect, recovering from failure with the given handler.
    ///
    /// Equivalent to `fork(on_fail, identity)`: a success is returned as-is
    /// and a failure is converted to a success value by the handler.
    ///
    /// # Arguments
    ///
    /// * `on_fail` - Handler turning the failure value into a fallback.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dirsync_console::effect::Effect;
    ///
    /// let effect: Effect<i32, String> = Effect::fail("missing".to_string());
    /// assert_eq!(effect.run(|_| -1), -1);
    /// ```
    pub fn run<FE>(self, on_fail: FE) -> A
    where
        FE: FnOnce(E) -> A,
    {
        self.fork(on_fail, |value| value)
    }

    /// Executes the effect and returns the raw `Result`.
    ///
    /// Useful at boundaries that already speak `Result`, such as the
    /// reducer layer or tests.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dirsync_console::effect::Effect;
    ///
    /// let effect: Effect<i32, String> = Effect::of(7);
    /// assert_eq!(effect.try_run(), Ok(7));
    /// ```
    pub fn try_run(self) -> Result<A, E> {
        (self.run_effect)()
    }
}
