//! Application store: actions, reducers and the settings state they drive.
//!
//! UI events become [`Action`] values, actions are matched by [`Reducer`]s
//! into state computations, and the computations are applied to the
//! application state by [`dispatch`]. Reducers are combined front-to-back
//! with first-match-wins semantics, and an action nobody recognizes leaves
//! the state untouched: a designed no-op, never an error.
//!
//! The state itself is always passed explicitly: there is no ambient store
//! singleton, and every transition returns a new state value the caller
//! installs atomically.
//!
//! # Examples
//!
//! ```rust
//! use dirsync_console::store::{
//!     AppState, Payload, SELECT_MENU_ITEM, dispatch, select_menu_item, store_reducer,
//! };
//!
//! let reducer = store_reducer();
//! let action = select_menu_item("ldapConfiguration".to_string());
//! let next = dispatch(&reducer, AppState::default(), &action);
//! assert!(next.active_config.is_none());
//! ```

mod action;
mod navigation;
mod sync_configuration;

pub use action::{Action, CombinedReducer, Reduce, Reducer, combine_reducers, create_action, dispatch};
pub use navigation::{
    AppState, ConfigDescriptor, Menu, SELECT_MENU_ITEM, TOGGLE_MENU_ITEM_VISIBILITY,
    TabDescriptor, UPDATE_ACTIVE_PANE, change_active_pane, mark_menu_item_selected,
    navigation_reducer, select_menu_item, toggle_menu_item, toggle_menu_item_visibility,
    toggle_menu_item_visibility_action, update_active_pane,
};
pub use sync_configuration::{
    SAVE_TAB_CHANGES, save_tab_changes, sync_configuration_reducer, update_active_config_tabs,
};

use crate::effect::State;

/// Payload carried by store actions.
///
/// One action stream serves every reducer in the store, so the payload is a
/// closed set of shapes; a handler receiving a shape it does not expect
/// leaves the state unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    /// No payload.
    None,
    /// A config identifier.
    Id(String),
    /// Replacement tabs for the config with the given identifier.
    Tabs {
        /// The config the tabs belong to.
        id: String,
        /// The new tab set.
        tabs: Vec<TabDescriptor>,
    },
}

/// The combined reducer for the whole settings store.
///
/// Registration order is significant: reducers are consulted front to back
/// and the first one recognizing the action wins, so this order must be
/// preserved when reducers are added.
#[must_use]
pub fn store_reducer() -> CombinedReducer<AppState, Payload> {
    combine_reducers(vec![
        Box::new(navigation_reducer()),
        Box::new(sync_configuration_reducer()),
    ])
}

pub(crate) fn no_change<S: 'static>() -> State<S, ()> {
    State::pure(())
}
