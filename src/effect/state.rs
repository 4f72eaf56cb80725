//! State - pure state-passing computation.
//!
//! A `State<S, A>` encapsulates a function `S -> (A, S)`: given the current
//! state it produces a result and the next state. Every settings transition
//! in the console is expressed this way, which keeps transitions pure and
//! leaves the caller responsible for installing the returned state.
//!
//! # Laws
//!
//! State satisfies the Functor and Monad laws plus the state-access laws:
//!
//! - Get Put: `get().and_then(|s| put(s)) == pure(())`
//! - Put Get: `put(s).then(get())` returns `s`
//! - Put Put: `put(s1).then(put(s2)) == put(s2)`
//! - Modify Composition: `modify(f).then(modify(g)) == modify(|s| g(f(s)))`
//!
//! # Examples
//!
//! Counter pattern:
//!
//! ```rust
//! use dirsync_console::effect::State;
//!
//! fn increment() -> State<i32, ()> {
//!     State::modify(|count| count + 1)
//! }
//!
//! let computation = increment().then(increment()).then(State::get());
//! let (count, _) = computation.run(0);
//! assert_eq!(count, 2);
//! ```
//!
//! Scoped access through a lens:
//!
//! ```rust
//! use dirsync_console::effect::{State, over};
//! use dirsync_console::optics::FunctionLens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Settings { port: u16, hostname: String }
//!
//! let port = FunctionLens::new(
//!     |s: &Settings| &s.port,
//!     |s: Settings, port: u16| Settings { port, ..s },
//! );
//!
//! let settings = Settings { port: 8080, hostname: "proxy".to_string() };
//! let updated = over(port, |p| p + 1).exec(settings);
//! assert_eq!(updated.port, 8081);
//! assert_eq!(updated.hostname, "proxy");
//! ```

use std::rc::Rc;

#[cfg(feature = "optics")]
use crate::optics::Lens;

/// A computation that threads a state value through a sequence of steps.
///
/// `State<S, A>` represents a function from an initial state of type `S` to
/// a result of type `A` paired with the next state.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The result type
///
/// # Examples
///
/// ```rust
/// use dirsync_console::effect::State;
///
/// let computation: State<i32, i32> = State::get()
///     .and_then(|current| State::put(current + 1).then(State::pure(current)));
///
/// let (result, final_state) = computation.run(10);
/// assert_eq!(result, 10);
/// assert_eq!(final_state, 11);
/// ```
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// The wrapped state transition function.
    /// Uses Rc so State values can be cloned for sequencing.
    run_function: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a new State from a transition function.
    ///
    /// # Arguments
    ///
    /// * `function` - Takes the current state, returns `(result, next_state)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dirsync_console::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// let (result, final_state) = state.run(10);
    /// assert_eq!(result, 20);
    /// assert_eq!(final_state, 11);
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation with the given initial state.
    ///
    /// Returns both the result and the final state.
    pub fn run(&self, initial_state: S) -> (A, S) {
        (self.run_function)(initial_state)
    }

    /// Runs the computation and returns only the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dirsync_console::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(state.eval(10), 20);
    /// ```
    pub fn eval(&self, initial_state: S) -> A {
        let (result, _) = self.run(initial_state);
        result
    }

    /// Runs the computation and returns only the final state.
    ///
    /// This is how the console applies a transition: build the `State`
    /// value, `exec` it against the current state, install the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dirsync_console::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(state.exec(10), 11);
    /// ```
    pub fn exec(&self, initial_state: S) -> S {
        let (_, final_state) = self.run(initial_state);
        final_state
    }

    /// Creates a State that returns a constant value, leaving the state
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dirsync_console::effect::State;
    ///
    /// let state: State<i32, &str> = State::pure("constant");
    /// let (result, final_state) = state.run(42);
    /// assert_eq!(result, "constant");
    /// assert_eq!(final_state, 42);
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Maps a function over the result of this State.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dirsync_console::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s, s));
    /// let mapped = state.map(|value| value * 2);
    /// let (result, final_state) = mapped.run(21);
    /// assert_eq!(result, 42);
    /// assert_eq!(final_state, 21);
    /// ```
    pub fn map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (result, new_state) = (original_function)(state);
            (function(result), new_state)
        })
    }

    /// Chains this State with a function producing the next State.
    ///
    /// The next computation is built from the result of this one and runs
    /// against the state this one produced, so ordering is preserved and
    /// the state is threaded through each step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dirsync_console::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s, s + 1));
    /// let chained = state.and_then(|value| State::new(move |s: i32| (value + s, s)));
    /// let (result, final_state) = chained.run(10);
    /// assert_eq!(result, 21); // 10 + 11
    /// assert_eq!(final_state, 11);
    /// ```
    pub fn and_then<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (result, intermediate_state) = (original_function)(state);
            let next_state = function(result);
            next_state.run(intermediate_state)
        })
    }

    /// Sequences two States, discarding the first result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dirsync_console::effect::State;
    ///
    /// let first: State<i32, i32> = State::new(|s: i32| (s, s + 10));
    /// let second: State<i32, &str> = State::pure("result");
    /// let (result, final_state) = first.then(second).run(42);
    /// assert_eq!(result, "result");
    /// assert_eq!(final_state, 52);
    /// ```
    #[must_use]
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        self.and_then(move |_| next.clone())
    }
}

// =============================================================================
// State Access Operations
// =============================================================================

impl<St> State<St, St>
where
    St: Clone + 'static,
{
    /// Creates a State that returns the current state without modifying it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dirsync_console::effect::State;
    ///
    /// let state: State<i32, i32> = State::get();
    /// let (result, final_state) = state.run(42);
    /// assert_eq!(result, 42);
    /// assert_eq!(final_state, 42);
    /// ```
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: St| (state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Creates a State that replaces the current state with a new value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dirsync_console::effect::State;
    ///
    /// let state: State<i32, ()> = State::put(100);
    /// let (_, final_state) = state.run(42);
    /// assert_eq!(final_state, 100);
    /// ```
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), new_state.clone()))
    }

    /// Creates a State that transforms the current state with a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dirsync_console::effect::State;
    ///
    /// let state: State<i32, ()> = State::modify(|x| x * 2);
    /// let (_, final_state) = state.run(21);
    /// assert_eq!(final_state, 42);
    /// ```
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a State that projects a value out of the current state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dirsync_console::effect::State;
    ///
    /// #[derive(Clone)]
    /// struct Config { port: u16 }
    ///
    /// let state: State<Config, u16> = State::gets(|c: &Config| c.port);
    /// let (result, _) = state.run(Config { port: 8080 });
    /// assert_eq!(result, 8080);
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| {
            let result = projection(&state);
            (result, state)
        })
    }
}

// =============================================================================
// Lens-Scoped Helpers
// =============================================================================

/// Creates a State yielding a clone of the field the lens focuses on.
///
/// The state itself passes through unchanged.
///
/// # Examples
///
/// ```rust
/// use dirsync_console::effect::get_state_prop;
/// use dirsync_console::optics::FunctionLens;
///
/// #[derive(Clone)]
/// struct Settings { hostname: String }
///
/// let hostname = FunctionLens::new(
///     |s: &Settings| &s.hostname,
///     |s: Settings, hostname: String| Settings { hostname, ..s },
/// );
///
/// let settings = Settings { hostname: "proxy".to_string() };
/// let (value, _) = get_state_prop(hostname).run(settings);
/// assert_eq!(value, "proxy");
/// ```
#[cfg(feature = "optics")]
pub fn get_state_prop<S, A, L>(lens: L) -> State<S, A>
where
    L: Lens<S, A> + 'static,
    S: 'static,
    A: Clone + 'static,
{
    State::new(move |state: S| {
        let value = lens.get(&state).clone();
        (value, state)
    })
}

/// Creates a State replacing the field the lens focuses on.
///
/// Only the focused field changes; sibling fields move through untouched.
///
/// # Examples
///
/// ```rust
/// use dirsync_console::effect::set_state_prop;
/// use dirsync_console::optics::FunctionLens;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Settings { port: u16 }
///
/// let port = FunctionLens::new(
///     |s: &Settings| &s.port,
///     |s: Settings, port: u16| Settings { port, ..s },
/// );
///
/// let updated = set_state_prop(port, 9090).exec(Settings { port: 8080 });
/// assert_eq!(updated, Settings { port: 9090 });
/// ```
#[cfg(feature = "optics")]
pub fn set_state_prop<S, A, L>(lens: L, value: A) -> State<S, ()>
where
    L: Lens<S, A> + 'static,
    S: 'static,
    A: Clone + 'static,
{
    State::new(move |state: S| ((), lens.set(state, value.clone())))
}

/// Creates a State replacing the focused field with `function(&field)`.
///
/// # Examples
///
/// ```rust
/// use dirsync_console::effect::over;
/// use dirsync_console::optics::FunctionLens;
///
/// #[derive(Clone)]
/// struct Counter { value: i32 }
///
/// let value = FunctionLens::new(
///     |c: &Counter| &c.value,
///     |c: Counter, value: i32| Counter { value, ..c },
/// );
///
/// let counter = over(value, |v| v + 1).exec(Counter { value: 41 });
/// assert_eq!(counter.value, 42);
/// ```
#[cfg(feature = "optics")]
pub fn over<S, A, L, F>(lens: L, function: F) -> State<S, ()>
where
    L: Lens<S, A> + 'static,
    F: Fn(&A) -> A + 'static,
    S: 'static,
    A: 'static,
{
    State::new(move |state: S| ((), lens.modify_ref(state, &function)))
}

/// Lifts a computation over an inner state into one over an outer state.
///
/// The lens carves the inner state out of the outer value, the inner
/// computation runs against it, and the produced inner state is written
/// back; every other field of the outer state moves through untouched.
///
/// # Examples
///
/// ```rust
/// use dirsync_console::effect::{State, zoom};
/// use dirsync_console::lens;
///
/// #[derive(Clone)]
/// struct Pane { open: bool, count: i32 }
///
/// let bump: State<i32, ()> = State::modify(|count| count + 1);
/// let lifted: State<Pane, ()> = zoom(lens!(Pane, count), bump);
///
/// let pane = lifted.exec(Pane { open: true, count: 41 });
/// assert_eq!(pane.count, 42);
/// assert!(pane.open);
/// ```
#[cfg(feature = "optics")]
pub fn zoom<Outer, Inner, A, L>(lens: L, inner: State<Inner, A>) -> State<Outer, A>
where
    L: Lens<Outer, Inner> + 'static,
    Outer: 'static,
    Inner: Clone + 'static,
    A: 'static,
{
    State::new(move |outer: Outer| {
        let (value, next_inner) = inner.run(lens.get(&outer).clone());
        (value, lens.set(outer, next_inner))
    })
}

// =============================================================================
// Clone Implementation
// =============================================================================

impl<S, A> Clone for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: self.run_function.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn state_new_and_run() {
        let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
        let (result, final_state) = state.run(10);
        assert_eq!(result, 20);
        assert_eq!(final_state, 11);
    }

    #[rstest]
    fn state_pure_does_not_modify_state() {
        let state: State<i32, &str> = State::pure("constant");
        let (result, final_state) = state.run(42);
        assert_eq!(result, "constant");
        assert_eq!(final_state, 42);
    }

    #[rstest]
    fn state_get_returns_current_state() {
        let state: State<i32, i32> = State::get();
        let (result, final_state) = state.run(42);
        assert_eq!(result, 42);
        assert_eq!(final_state, 42);
    }

    #[rstest]
    fn state_put_replaces_state() {
        let state: State<i32, ()> = State::put(100);
        let ((), final_state) = state.run(42);
        assert_eq!(final_state, 100);
    }

    #[rstest]
    fn state_modify_transforms_state() {
        let state: State<i32, ()> = State::modify(|x| x * 2);
        let ((), final_state) = state.run(21);
        assert_eq!(final_state, 42);
    }

    #[rstest]
    fn state_map_transforms_result() {
        let state: State<i32, i32> = State::new(|s: i32| (s, s));
        let mapped = state.map(|value| value * 2);
        let (result, final_state) = mapped.run(21);
        assert_eq!(result, 42);
        assert_eq!(final_state, 21);
    }

    #[rstest]
    fn state_and_then_chains_states() {
        let state: State<i32, i32> = State::new(|s: i32| (s, s + 1));
        let chained = state.and_then(|value| State::new(move |s: i32| (value + s, s)));
        let (result, final_state) = chained.run(10);
        assert_eq!(result, 21); // 10 + 11
        assert_eq!(final_state, 11);
    }

    #[rstest]
    fn state_clone_runs_identically() {
        let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
        let cloned = state.clone();
        assert_eq!(state.run(10), cloned.run(10));
    }
}
