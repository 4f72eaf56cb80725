//! The exclusion-rule editor.
//!
//! Directory synchronization removes anything not present in the LDAP
//! server; exclusion rules carve out users, groups and calendar resources
//! that must survive a sync. This module is the editor's state machine: a
//! list of committed rules, one staged draft, an auto-incrementing id
//! counter, and the operations that create, update, reorder, commit and
//! delete rules.
//!
//! # Record lifecycle
//!
//! A rule starts as a draft ([`RuleDraft`], `saved == false`) held in
//! `rule_being_edited`. Committing a valid draft appends its committed form
//! ([`ExclusionRule`], no `saved` flag) to the list and marks the draft
//! saved; committing again replaces the matching list entry in place.
//! Deletion removes the list entry entirely.
//!
//! # Failure policy
//!
//! User-facing edits never raise: a missing draft, a validation failure or
//! an unmatched id leaves the state unchanged. The editor fails safe where
//! the `Effect` layer fails loud.
//!
//! # Examples
//!
//! ```rust
//! use dirsync_console::rules::{
//!     RulesState, edit_new_exclusion_rule, save_rule_being_edited, update_rule_being_edited,
//!     RuleUpdate,
//! };
//!
//! let state = RulesState::from_seed(None);
//! let state = edit_new_exclusion_rule()
//!     .then(update_rule_being_edited(RuleUpdate {
//!         rule: Some("cn=admins,ou=groups".to_string()),
//!         match_type: Some("exactMatch".to_string()),
//!         exclusion_type: Some("groupEmail".to_string()),
//!     }))
//!     .then(save_rule_being_edited())
//!     .exec(state);
//!
//! assert_eq!(state.exclusion_rules.len(), 1);
//! assert_eq!(state.next_rule_id, 1);
//! ```

mod editor;
mod model;
mod session;

pub use editor::{
    delete_exclusion_rule, edit_exclusion_rule, edit_new_exclusion_rule, move_exclusion_rule_down,
    move_exclusion_rule_up, save_rule_being_edited, update_rule_being_edited,
};
pub use model::{EditorSeed, ExclusionRule, RuleDraft, RuleUpdate, RulesState, SelectOption};
pub use session::{EditorSession, EditorState};
