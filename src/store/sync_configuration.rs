//! Sync-configuration reducer: persisting tab edits back to the store.

use crate::effect::{State, over};
use crate::lens;
use crate::store::navigation::{AppState, ConfigDescriptor, TabDescriptor};
use crate::store::{Action, Payload, Reducer, create_action, no_change};

/// Action kind: a pane's tab changes were saved.
pub const SAVE_TAB_CHANGES: &str = "SAVE_TAB_CHANGES";

/// Creates a `SAVE_TAB_CHANGES` action carrying the full replacement tabs.
///
/// The whole tab set travels with the action, not a diff.
#[must_use]
pub fn save_tab_changes(id: String, tabs: Vec<TabDescriptor>) -> Action<Payload> {
    create_action(SAVE_TAB_CHANGES)(Payload::Tabs { id, tabs })
}

/// Replaces the tabs of the `data` entry matching the given id.
pub fn update_active_config_tabs(id: String, tabs: Vec<TabDescriptor>) -> State<AppState, ()> {
    over(lens!(AppState, data), move |configs: &Vec<ConfigDescriptor>| {
        configs
            .iter()
            .cloned()
            .map(|mut config| {
                if config.id == id {
                    config.tabs = tabs.clone();
                }
                config
            })
            .collect()
    })
}

/// The sync-configuration reducer.
#[must_use]
pub fn sync_configuration_reducer() -> Reducer<AppState, Payload> {
    Reducer::new().on(SAVE_TAB_CHANGES, |payload: &Payload| match payload {
        Payload::Tabs { id, tabs } => update_active_config_tabs(id.clone(), tabs.clone()),
        _ => no_change(),
    })
}
