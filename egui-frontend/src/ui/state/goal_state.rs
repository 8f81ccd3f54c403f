//! # Goal State Module
//!
//! Draft buffers behind the goals tab widgets.
//!
//! ## Purpose:
//! Immediate-mode widgets need backing storage, so every goals row edits a
//! `GoalDraft` held here. Nothing consumes the drafts: goal assignment is
//! not wired to a backend, and the product has not confirmed whether these
//! fields should submit anywhere. Until that is clarified the buffers are
//! session-local and display-only.

use shared::{GoalPeriod, ProspectingGoal};
use std::collections::HashMap;

/// Editable goal fields for one roster row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalDraft {
    pub period: GoalPeriod,
    /// Raw text of the target field; no numeric validation happens here
    pub target_text: String,
}

impl GoalDraft {
    fn from_default(goal: Option<&ProspectingGoal>) -> Self {
        match goal {
            Some(goal) => Self {
                period: goal.period,
                target_text: goal.target.to_string(),
            },
            None => Self {
                period: GoalPeriod::Monthly,
                target_text: String::new(),
            },
        }
    }
}

/// Draft buffers for the goals tab, keyed by member id
#[derive(Debug, Default)]
pub struct GoalUiState {
    drafts: HashMap<String, GoalDraft>,
}

impl GoalUiState {
    /// Mutable draft for a member, initialized from the configured default
    /// goal the first time the row renders
    pub fn draft_mut(
        &mut self,
        member_id: &str,
        default: Option<&ProspectingGoal>,
    ) -> &mut GoalDraft {
        self.drafts
            .entry(member_id.to_string())
            .or_insert_with(|| GoalDraft::from_default(default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_initializes_from_default_goal() {
        let mut goals = GoalUiState::default();
        let default = ProspectingGoal {
            period: GoalPeriod::Weekly,
            target: 10,
        };
        let draft = goals.draft_mut("vendedor2", Some(&default));
        assert_eq!(draft.period, GoalPeriod::Weekly);
        assert_eq!(draft.target_text, "10");
    }

    #[test]
    fn test_draft_without_default_is_blank_monthly() {
        let mut goals = GoalUiState::default();
        let draft = goals.draft_mut("vendedor3", None);
        assert_eq!(draft.period, GoalPeriod::Monthly);
        assert!(draft.target_text.is_empty());
    }

    #[test]
    fn test_edits_survive_across_lookups() {
        let mut goals = GoalUiState::default();
        goals.draft_mut("vendedor1", None).target_text = "25".to_string();
        goals.draft_mut("vendedor1", None).period = GoalPeriod::Daily;

        let draft = goals.draft_mut("vendedor1", None);
        assert_eq!(draft.target_text, "25");
        assert_eq!(draft.period, GoalPeriod::Daily);
    }
}
