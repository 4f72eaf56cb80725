//! Navigation state for the settings console.
//!
//! The application state holds one config descriptor per settings area
//! (domain connection, proxy, exclusion rules, ...) plus the descriptor
//! whose pane is currently shown. Menu selection flips `menu.active` flags;
//! pane promotion copies the active descriptor back into the list and then
//! promotes the next active entry.

use crate::effect::{State, get_state_prop, over, set_state_prop};
use crate::lens;
use crate::store::{Action, Payload, Reducer, create_action, no_change};

/// Action kind: a menu entry was clicked.
pub const SELECT_MENU_ITEM: &str = "SELECT_MENU_ITEM";
/// Action kind: promote the next active config into the pane.
pub const UPDATE_ACTIVE_PANE: &str = "UPDATE_ACTIVE_PANE";
/// Action kind: show or hide a menu entry.
pub const TOGGLE_MENU_ITEM_VISIBILITY: &str = "TOGGLE_MENU_ITEM_VISIBILITY";

/// Sidebar menu entry of one settings area.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Menu {
    /// Text shown in the sidebar.
    pub label: String,
    /// Sort position in the sidebar.
    pub position: u32,
    /// Whether the entry is shown at all.
    pub visible: bool,
    /// Whether the entry is the selected one.
    pub active: bool,
    /// Whether the user may disable the entry.
    pub can_be_disabled: bool,
}

/// One tab inside a settings pane.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabDescriptor {
    /// Stable tab identifier.
    pub id: String,
    /// Heading shown on the tab.
    pub heading: String,
    /// Whether the tab is the one in front.
    pub active: bool,
}

/// A navigable unit of settings: menu entry plus its tabs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigDescriptor {
    /// Stable config identifier.
    pub id: String,
    /// Pane title.
    pub title: String,
    /// Sidebar entry.
    pub menu: Menu,
    /// The pane's tabs.
    pub tabs: Vec<TabDescriptor>,
}

/// Top-level state of the settings console.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppState {
    /// The descriptor whose pane is currently rendered.
    pub active_config: Option<ConfigDescriptor>,
    /// Every settings area, in menu order.
    pub data: Vec<ConfigDescriptor>,
}

/// Creates a `SELECT_MENU_ITEM` action for the given config id.
#[must_use]
pub fn select_menu_item(id: String) -> Action<Payload> {
    create_action(SELECT_MENU_ITEM)(Payload::Id(id))
}

/// Creates an `UPDATE_ACTIVE_PANE` action.
#[must_use]
pub fn change_active_pane() -> Action<Payload> {
    create_action(UPDATE_ACTIVE_PANE)(Payload::None)
}

/// Creates a `TOGGLE_MENU_ITEM_VISIBILITY` action for the given config id.
#[must_use]
pub fn toggle_menu_item_visibility_action(id: String) -> Action<Payload> {
    create_action(TOGGLE_MENU_ITEM_VISIBILITY)(Payload::Id(id))
}

/// Flips `menu.active` on the `data` entry matching the given id.
pub fn toggle_menu_item(id: String) -> State<AppState, ()> {
    over(lens!(AppState, data), move |configs: &Vec<ConfigDescriptor>| {
        configs
            .iter()
            .cloned()
            .map(|mut config| {
                if config.id == id {
                    config.menu.active = !config.menu.active;
                }
                config
            })
            .collect()
    })
}

/// Marks the menu entry with the given id as the selected one.
///
/// Deactivates the currently active config's menu when it differs from the
/// given id, then toggles the matching `data` entry.
pub fn mark_menu_item_selected(id: String) -> State<AppState, ()> {
    let next_id = id.clone();
    over(
        lens!(AppState, active_config),
        move |active: &Option<ConfigDescriptor>| {
            active.clone().map(|mut config| {
                if config.id != id {
                    config.menu.active = !config.menu.active;
                }
                config
            })
        },
    )
    .and_then(move |()| toggle_menu_item(next_id.clone()))
}

/// Flips `menu.visible` on the `data` entry matching the given id.
///
/// Entries whose menu cannot be disabled are left visible; the toggle only
/// applies when `menu.can_be_disabled` is set.
pub fn toggle_menu_item_visibility(id: String) -> State<AppState, ()> {
    over(lens!(AppState, data), move |configs: &Vec<ConfigDescriptor>| {
        configs
            .iter()
            .cloned()
            .map(|mut config| {
                if config.id == id && config.menu.can_be_disabled {
                    config.menu.visible = !config.menu.visible;
                }
                config
            })
            .collect()
    })
}

/// Saves the active config back into `data` to preserve changes made to it
/// through user actions, as the active config is replaced on a menu change.
fn commit_active_config() -> State<AppState, ()> {
    get_state_prop(lens!(AppState, active_config)).and_then(
        |active: Option<ConfigDescriptor>| match active {
            Some(config) => over(lens!(AppState, data), move |configs: &Vec<ConfigDescriptor>| {
                configs
                    .iter()
                    .map(|existing| {
                        if existing.id == config.id {
                            config.clone()
                        } else {
                            existing.clone()
                        }
                    })
                    .collect()
            }),
            None => no_change(),
        },
    )
}

/// Promotes the first `data` entry whose menu is active as the new active
/// config, falling back to the head of the list, or `None` when empty.
fn find_next_active_config() -> State<AppState, ()> {
    get_state_prop(lens!(AppState, data)).and_then(|configs: Vec<ConfigDescriptor>| {
        let next = configs
            .iter()
            .find(|config| config.menu.active)
            .or_else(|| configs.first())
            .cloned();
        set_state_prop(lens!(AppState, active_config), next)
    })
}

/// Commits the outgoing active config, then promotes the next active one.
pub fn update_active_pane() -> State<AppState, ()> {
    commit_active_config().and_then(|()| find_next_active_config())
}

/// The navigation reducer.
#[must_use]
pub fn navigation_reducer() -> Reducer<AppState, Payload> {
    Reducer::new()
        .on(SELECT_MENU_ITEM, |payload: &Payload| match payload {
            Payload::Id(id) => mark_menu_item_selected(id.clone()),
            _ => no_change(),
        })
        .on(UPDATE_ACTIVE_PANE, |_: &Payload| update_active_pane())
        .on(TOGGLE_MENU_ITEM_VISIBILITY, |payload: &Payload| match payload {
            Payload::Id(id) => toggle_menu_item_visibility(id.clone()),
            _ => no_change(),
        })
}
