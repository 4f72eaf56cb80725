//! Data model of the exclusion-rule editor.

/// A selectable option in the match-type and exclusion-type dropdowns.
///
/// Read-only reference data supplied by the surrounding UI; used only for
/// default selection and label lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectOption {
    /// Stable option identifier.
    pub id: String,
    /// Text shown to the user.
    pub label: String,
}

/// A committed exclusion rule.
///
/// The id is assigned once when the record is drafted and never reassigned
/// for the lifetime of the record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExclusionRule {
    /// Unique identifier within one editor session.
    pub id: u64,
    /// Selected match-type option id.
    pub match_type: String,
    /// Selected exclusion-type option id.
    pub exclusion_type: String,
    /// The rule text: an address, substring or regular expression.
    pub rule: String,
}

/// The rule currently staged in the editor.
///
/// `saved` distinguishes a brand-new draft from one whose record is already
/// in the list; committing converts the draft into an [`ExclusionRule`],
/// which is how the transient flag is stripped before the record is kept.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleDraft {
    /// Identifier the committed record will carry.
    pub id: u64,
    /// Selected match-type option id.
    pub match_type: String,
    /// Selected exclusion-type option id.
    pub exclusion_type: String,
    /// The rule text.
    pub rule: String,
    /// Whether the record already exists in the committed list.
    pub saved: bool,
}

impl RuleDraft {
    /// Stages an existing list entry for editing.
    #[must_use]
    pub fn from_rule(rule: &ExclusionRule) -> Self {
        Self {
            id: rule.id,
            match_type: rule.match_type.clone(),
            exclusion_type: rule.exclusion_type.clone(),
            rule: rule.rule.clone(),
            saved: true,
        }
    }

    /// The committed form of this draft, without the transient flag.
    #[must_use]
    pub fn commit(&self) -> ExclusionRule {
        ExclusionRule {
            id: self.id,
            match_type: self.match_type.clone(),
            exclusion_type: self.exclusion_type.clone(),
            rule: self.rule.clone(),
        }
    }

    /// Whether the draft may be committed.
    ///
    /// The rule text and both type selections must be non-empty after
    /// trimming.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.rule.trim().is_empty()
            && !self.match_type.trim().is_empty()
            && !self.exclusion_type.trim().is_empty()
    }
}

/// A partial update to the draft.
///
/// Only the writable fields appear here; the id and the saved flag cannot
/// be touched through an update. Absent fields leave the draft's current
/// value in place.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleUpdate {
    /// New rule text, when present.
    pub rule: Option<String>,
    /// New match-type selection, when present.
    pub match_type: Option<String>,
    /// New exclusion-type selection, when present.
    pub exclusion_type: Option<String>,
}

/// Externally supplied initialization data.
///
/// Only these three collections can be seeded from outside; everything else
/// in [`RulesState`] is derived. Absent fields fall back to empty lists.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditorSeed {
    /// Previously committed rules.
    #[cfg_attr(feature = "serde", serde(default))]
    pub exclusion_rules: Option<Vec<ExclusionRule>>,
    /// Match-type reference data.
    #[cfg_attr(feature = "serde", serde(default))]
    pub match_types: Option<Vec<SelectOption>>,
    /// Exclusion-type reference data.
    #[cfg_attr(feature = "serde", serde(default))]
    pub exclusion_types: Option<Vec<SelectOption>>,
}

/// The full state of one editor instance.
///
/// Owned exclusively by that instance and never shared. Invariant:
/// `next_rule_id` is at least as large as every id in `exclusion_rules`
/// and in the draft, and strictly larger until the counter saturates at
/// `u64::MAX`, so ids within a session are unique.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RulesState {
    /// Match-type reference data.
    pub match_types: Vec<SelectOption>,
    /// Exclusion-type reference data.
    pub exclusion_types: Vec<SelectOption>,
    /// The committed rules, in priority order.
    pub exclusion_rules: Vec<ExclusionRule>,
    /// The staged draft, when a rule is being edited.
    pub rule_being_edited: Option<RuleDraft>,
    /// The id the next drafted rule will receive.
    pub next_rule_id: u64,
}

impl RulesState {
    /// Builds the initial editor state from caller-supplied data.
    ///
    /// Missing collections become empty, no draft is staged, and the id
    /// counter resumes above the largest seeded rule id (`0` for an empty
    /// or absent list).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dirsync_console::rules::RulesState;
    ///
    /// let state = RulesState::from_seed(None);
    /// assert_eq!(state.next_rule_id, 0);
    /// assert!(state.exclusion_rules.is_empty());
    /// assert!(state.rule_being_edited.is_none());
    /// ```
    #[must_use]
    pub fn from_seed(seed: Option<EditorSeed>) -> Self {
        let seed = seed.unwrap_or_default();
        let exclusion_rules = seed.exclusion_rules.unwrap_or_default();
        let next_rule_id = exclusion_rules
            .iter()
            .map(|rule| rule.id)
            .max()
            .map_or(0, |largest| largest.saturating_add(1));
        Self {
            match_types: seed.match_types.unwrap_or_default(),
            exclusion_types: seed.exclusion_types.unwrap_or_default(),
            exclusion_rules,
            rule_being_edited: None,
            next_rule_id,
        }
    }
}
