//! Deferred computation types.
//!
//! This module provides the two computation shapes the console is built on:
//!
//! - [`Effect`]: a synchronous computation that may fail. The wrapped
//!   function is not invoked until [`Effect::run`] or [`Effect::fork`] is
//!   called, so fallible work can be described, composed and handed around
//!   without being performed.
//! - [`State`]: a pure state transition `S -> (A, S)`. Every settings
//!   mutation in the console is expressed as a `State` value and applied by
//!   the caller, which keeps transitions testable in isolation and leaves
//!   state ownership explicit.
//!
//! # Failure policy
//!
//! `Effect` carries domain failures in its `Result` error channel and
//! surfaces them only through the caller-supplied failure continuation.
//! Misuse of the combinators (a non-function argument, a wrapped computation
//! producing the wrong shape) is impossible to express: the type system
//! rejects it at compile time.
//!
//! # Examples
//!
//! ```rust
//! use dirsync_console::effect::{Effect, State};
//!
//! let effect: Effect<i32, String> = Effect::new(|| Ok(10)).map(|x| x * 2);
//! assert_eq!(effect.run(|_| 0), 20);
//!
//! let transition: State<i32, ()> = State::modify(|count| count + 1);
//! assert_eq!(transition.exec(41), 42);
//! ```

mod effect;
mod state;

pub use effect::Effect;
pub use state::State;
#[cfg(feature = "optics")]
pub use state::{get_state_prop, over, set_state_prop, zoom};
