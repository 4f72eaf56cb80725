//! Editor session: the component-local state around the rule editor.
//!
//! The rendering layer owns nothing here but callbacks; the session holds
//! the editor's [`RulesState`] together with the modal flag and the form
//! error message, runs the editing computations against it, and installs
//! each produced state atomically before the next transition can read it.
//! Changes reach the parent's config store only through
//! [`EditorSession::updated_config`], which hands over the full committed
//! rule list, never a diff.

use crate::effect::{State, set_state_prop, zoom};
use crate::lens;
use crate::rules::editor::{
    edit_new_exclusion_rule, save_rule_being_edited, update_rule_being_edited,
};
use crate::rules::model::{EditorSeed, ExclusionRule, RuleUpdate, RulesState, SelectOption};

const EMPTY_RULE_MESSAGE: &str = "You must enter an exclusion rule first.";

/// Component-local state: the editor plus its form chrome.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EditorState {
    /// The rule editor state machine.
    pub rules: RulesState,
    /// Validation message shown next to the rule input.
    pub form_error_msg: String,
    /// Whether the rule modal is open.
    pub modal_open: bool,
}

fn set_error_msg(message: String) -> State<EditorState, ()> {
    set_state_prop(lens!(EditorState, form_error_msg), message)
}

fn clear_error_msg() -> State<EditorState, ()> {
    set_error_msg(String::new())
}

fn change_modal_status(open: bool) -> State<EditorState, ()> {
    set_state_prop(lens!(EditorState, modal_open), open)
}

fn in_rules(computation: State<RulesState, ()>) -> State<EditorState, ()> {
    zoom(lens!(EditorState, rules), computation)
}

/// One live editor instance.
///
/// Owned by a single settings pane; never shared between panes. All
/// mutation goes through the session so every transition is applied to the
/// latest committed state.
#[derive(Clone, Debug, Default)]
pub struct EditorSession {
    state: EditorState,
}

impl EditorSession {
    /// Creates a session from caller-supplied reference data and previously
    /// committed rules.
    #[must_use]
    pub fn from_seed(seed: Option<EditorSeed>) -> Self {
        Self {
            state: EditorState {
                rules: RulesState::from_seed(seed),
                form_error_msg: String::new(),
                modal_open: false,
            },
        }
    }

    /// The current state, for rendering.
    #[must_use]
    pub const fn state(&self) -> &EditorState {
        &self.state
    }

    /// Runs a computation against the current state and installs the result.
    fn commit(&mut self, computation: &State<EditorState, ()>) {
        self.state = computation.exec(self.state.clone());
    }

    /// Opens the modal with a freshly staged draft and a clean form.
    pub fn open_new_exclusion_rule(&mut self) {
        let computation = change_modal_status(true)
            .then(in_rules(edit_new_exclusion_rule()))
            .then(clear_error_msg());
        self.commit(&computation);
    }

    /// Closes the modal, discarding nothing but the form chrome.
    pub fn cancel_exclusion_rule(&mut self) {
        self.commit(&change_modal_status(false));
    }

    /// Applies a change to the rule text.
    ///
    /// Empty input (after trimming) raises the form error message instead
    /// of touching the draft; anything else updates the draft and clears
    /// the message.
    pub fn handle_rule_change(&mut self, input: &str) {
        let trimmed = input.trim().to_string();
        let computation = if trimmed.is_empty() {
            set_error_msg(EMPTY_RULE_MESSAGE.to_string())
        } else {
            in_rules(update_rule_being_edited(RuleUpdate {
                rule: Some(trimmed),
                ..RuleUpdate::default()
            }))
            .then(clear_error_msg())
        };
        self.commit(&computation);
    }

    /// Applies a change to the type selections.
    pub fn handle_rule_type_change(&mut self, update: RuleUpdate) {
        self.commit(&in_rules(update_rule_being_edited(update)));
    }

    /// Commits the staged draft, leaving the modal open.
    pub fn apply_changes(&mut self) {
        if self.is_form_valid() {
            self.commit(&in_rules(save_rule_being_edited()));
        }
    }

    /// Commits the staged draft and closes the modal.
    pub fn save_new_exclusion_rule(&mut self) {
        if self.is_form_valid() {
            let computation =
                in_rules(save_rule_being_edited()).then(change_modal_status(false));
            self.commit(&computation);
        }
    }

    /// Whether the form currently holds a committable draft.
    #[must_use]
    pub fn is_form_valid(&self) -> bool {
        self.state
            .rules
            .rule_being_edited
            .as_ref()
            .is_some_and(|draft| !draft.rule.trim().is_empty())
    }

    /// Label of a match-type option, or the empty string when unmatched.
    #[must_use]
    pub fn find_match_type_label(&self, id: &str) -> String {
        find_label(&self.state.rules.match_types, id)
    }

    /// Label of an exclusion-type option, or the empty string when
    /// unmatched.
    #[must_use]
    pub fn find_exclusion_type_label(&self, id: &str) -> String {
        find_label(&self.state.rules.exclusion_types, id)
    }

    /// The full committed rule list, for the parent's config-update
    /// callback.
    #[must_use]
    pub fn updated_config(&self) -> Vec<ExclusionRule> {
        self.state.rules.exclusion_rules.clone()
    }
}

fn find_label(options: &[SelectOption], id: &str) -> String {
    options
        .iter()
        .find(|option| option.id == id)
        .map_or_else(String::new, |option| option.label.clone())
}
