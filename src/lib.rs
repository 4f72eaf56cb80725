//! # dirsync-console
//!
//! Effect and state-management primitives for a directory synchronization
//! settings console.
//!
//! ## Overview
//!
//! The rendering layer of the console is plain UI glue; everything with real
//! invariants lives here:
//!
//! - **Effect**: a lazy, synchronous wrapper around a fallible computation.
//!   Nothing executes until `run` or `fork` is called, so side effects can be
//!   described and composed without being performed.
//! - **State**: a pure state-passing computation `S -> (A, S)`, the building
//!   block for every settings transition.
//! - **Optics**: lenses focusing a single field of a state value, the typed
//!   replacement for string-keyed property access.
//! - **Store**: action creators, reducers and first-match-wins reducer
//!   combination for the application-level settings state.
//! - **Rules**: the exclusion-rule editor state machine, a multi-record
//!   CRUD editor with validation, draft staging and auto-incrementing ids.
//! - **Dom**: element-tree helpers exposing the render host through the
//!   `Effect` error channel.
//!
//! ## Feature Flags
//!
//! - `effect`: `Effect` and `State`
//! - `optics`: lenses
//! - `store`: actions, reducers, application state
//! - `rules`: the exclusion-rule editor
//! - `dom`: element-tree effect helpers
//! - `serde`: `Serialize`/`Deserialize` derives for the data-model types
//!
//! ## Example
//!
//! ```rust
//! use dirsync_console::effect::Effect;
//!
//! let effect: Effect<i32, String> = Effect::of(20).map(|x| x + 1);
//! assert_eq!(effect.run(|_| 0), 21);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use dirsync_console::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "store")]
    pub use crate::store::*;

    #[cfg(feature = "rules")]
    pub use crate::rules::*;

    #[cfg(feature = "dom")]
    pub use crate::dom::*;
}

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "store")]
pub mod store;

#[cfg(feature = "rules")]
pub mod rules;

#[cfg(feature = "dom")]
pub mod dom;
