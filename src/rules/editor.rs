//! State transitions of the exclusion-rule editor.
//!
//! Every operation is a pure [`State`] computation over [`RulesState`]:
//! state in, state out, no I/O. Invalid input (a missing draft, a failed
//! validation, an id nothing matches) produces the unchanged state rather
//! than an error.

use crate::effect::{State, get_state_prop, over, set_state_prop};
use crate::lens;
use crate::rules::model::{ExclusionRule, RuleDraft, RuleUpdate, RulesState, SelectOption};

fn no_change() -> State<RulesState, ()> {
    State::pure(())
}

/// Yields the current id counter and advances it.
///
/// The counter saturates at the ceiling rather than wrapping.
fn generate_next_rule_id() -> State<RulesState, u64> {
    get_state_prop(lens!(RulesState, next_rule_id)).and_then(|id| {
        set_state_prop(lens!(RulesState, next_rule_id), id.saturating_add(1)).map(move |()| id)
    })
}

/// Stages a fresh draft as the rule being edited.
///
/// The draft takes the next id from the counter, defaults both type
/// selections to the first available option (empty string when the option
/// list is empty), and starts with empty rule text, unsaved.
pub fn edit_new_exclusion_rule() -> State<RulesState, ()> {
    generate_next_rule_id().and_then(|id| {
        State::gets(move |state: &RulesState| {
            let first_id =
                |options: &Vec<SelectOption>| options.first().map_or_else(String::new, |option| option.id.clone());
            RuleDraft {
                id,
                match_type: first_id(&state.match_types),
                exclusion_type: first_id(&state.exclusion_types),
                rule: String::new(),
                saved: false,
            }
        })
        .and_then(|draft| set_state_prop(lens!(RulesState, rule_being_edited), Some(draft)))
    })
}

/// Merges an update onto the draft.
///
/// Only the writable fields carried by the update change; the id and the
/// saved flag are untouchable. Without a staged draft this is a no-op.
pub fn update_rule_being_edited(update: RuleUpdate) -> State<RulesState, ()> {
    over(
        lens!(RulesState, rule_being_edited),
        move |draft: &Option<RuleDraft>| {
            draft.as_ref().map(|current| {
                let mut merged = current.clone();
                if let Some(rule) = &update.rule {
                    merged.rule = rule.clone();
                }
                if let Some(match_type) = &update.match_type {
                    merged.match_type = match_type.clone();
                }
                if let Some(exclusion_type) = &update.exclusion_type {
                    merged.exclusion_type = exclusion_type.clone();
                }
                merged
            })
        },
    )
}

/// Marks the staged draft as saved.
fn mark_edited_rule_saved() -> State<RulesState, ()> {
    over(
        lens!(RulesState, rule_being_edited),
        |draft: &Option<RuleDraft>| {
            draft.as_ref().map(|current| {
                let mut saved = current.clone();
                saved.saved = true;
                saved
            })
        },
    )
}

/// Appends the draft's committed form to the list, then marks the draft
/// saved.
fn add_exclusion_rule_to_list(draft: &RuleDraft) -> State<RulesState, ()> {
    let committed = draft.commit();
    over(
        lens!(RulesState, exclusion_rules),
        move |rules: &Vec<ExclusionRule>| {
            let mut next = rules.clone();
            next.push(committed.clone());
            next
        },
    )
    .then(mark_edited_rule_saved())
}

/// Replaces the list entry matching the draft's id in place.
fn update_exclusion_rule_in_list(draft: &RuleDraft) -> State<RulesState, ()> {
    let committed = draft.commit();
    over(
        lens!(RulesState, exclusion_rules),
        move |rules: &Vec<ExclusionRule>| {
            rules
                .iter()
                .map(|rule| {
                    if rule.id == committed.id {
                        committed.clone()
                    } else {
                        rule.clone()
                    }
                })
                .collect()
        },
    )
}

/// Commits the staged draft.
///
/// A valid, unsaved draft is appended to the list (stripping the transient
/// flag) and then marked saved, so a second commit of the same draft updates
/// the matching list entry in place instead. An invalid or missing draft
/// leaves the state unchanged.
pub fn save_rule_being_edited() -> State<RulesState, ()> {
    get_state_prop(lens!(RulesState, rule_being_edited)).and_then(
        |draft: Option<RuleDraft>| match draft {
            Some(draft) if draft.is_valid() => {
                if draft.saved {
                    update_exclusion_rule_in_list(&draft)
                } else {
                    add_exclusion_rule_to_list(&draft)
                }
            }
            _ => no_change(),
        },
    )
}

/// Removes the first list entry matching the given id.
///
/// An unmatched id leaves the list untouched.
pub fn delete_exclusion_rule(id: u64) -> State<RulesState, ()> {
    over(
        lens!(RulesState, exclusion_rules),
        move |rules: &Vec<ExclusionRule>| {
            let mut next = rules.clone();
            if let Some(index) = next.iter().position(|rule| rule.id == id) {
                next.remove(index);
            }
            next
        },
    )
}

/// Swaps the matching entry with its predecessor.
///
/// A no-op when the id is unmatched or the entry is already first.
pub fn move_exclusion_rule_up(id: u64) -> State<RulesState, ()> {
    over(
        lens!(RulesState, exclusion_rules),
        move |rules: &Vec<ExclusionRule>| {
            let mut next = rules.clone();
            if let Some(index) = next.iter().position(|rule| rule.id == id) {
                if index > 0 {
                    next.swap(index, index - 1);
                }
            }
            next
        },
    )
}

/// Swaps the matching entry with its successor.
///
/// A no-op when the id is unmatched or the entry is already last.
pub fn move_exclusion_rule_down(id: u64) -> State<RulesState, ()> {
    over(
        lens!(RulesState, exclusion_rules),
        move |rules: &Vec<ExclusionRule>| {
            let mut next = rules.clone();
            if let Some(index) = next.iter().position(|rule| rule.id == id) {
                if index + 1 < next.len() {
                    next.swap(index, index + 1);
                }
            }
            next
        },
    )
}

/// Stages the list entry matching the given id for editing.
///
/// The staged draft has the same shape a new draft would, already marked
/// saved. An unmatched id leaves the current draft untouched.
pub fn edit_exclusion_rule(id: u64) -> State<RulesState, ()> {
    get_state_prop(lens!(RulesState, exclusion_rules)).and_then(
        move |rules: Vec<ExclusionRule>| match rules.iter().find(|rule| rule.id == id) {
            Some(rule) => set_state_prop(
                lens!(RulesState, rule_being_edited),
                Some(RuleDraft::from_rule(rule)),
            ),
            None => no_change(),
        },
    )
}
