//! Lens optics for focusing on state fields.
//!
//! The console's state transitions are scoped to a single field of a larger
//! state value: the rule list, the draft being edited, the id counter. A
//! [`Lens`] names that field once, as a typed getter/setter pair instead of
//! a string key, and the `effect` module's `get_state_prop`, `set_state_prop`
//! and `over` helpers lift it into state computations.
//!
//! # Examples
//!
//! ```rust
//! use dirsync_console::optics::Lens;
//! use dirsync_console::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Settings { port: u16, hostname: String }
//!
//! let port = lens!(Settings, port);
//!
//! let settings = Settings { port: 8080, hostname: "proxy".to_string() };
//! assert_eq!(*port.get(&settings), 8080);
//!
//! let updated = port.set(settings, 9090);
//! assert_eq!(updated.port, 9090);
//! ```

mod lens;

pub use lens::{FunctionLens, Lens};
