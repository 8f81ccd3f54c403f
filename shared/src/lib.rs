use serde::{Deserialize, Serialize};
use std::fmt;

/// A salesperson on the team lead's roster.
///
/// Supplied by the enclosing application as a read-only ordered sequence;
/// this crate never mutates members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Opaque identifier assigned by the roster service
    pub id: String,
    /// Display name shown next to the avatar
    pub name: String,
    /// Avatar reference (URL or path); rendering falls back to initials
    pub avatar_url: String,
}

impl TeamMember {
    /// Up to two initials derived from the display name, for avatar fallback
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// The cadence over which a prospecting target is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl GoalPeriod {
    /// All periods in the order the selector presents them
    pub const ALL: [GoalPeriod; 3] = [GoalPeriod::Monthly, GoalPeriod::Weekly, GoalPeriod::Daily];

    pub fn label(&self) -> &'static str {
        match self {
            GoalPeriod::Daily => "Daily goal",
            GoalPeriod::Weekly => "Weekly goal",
            GoalPeriod::Monthly => "Monthly goal",
        }
    }
}

impl fmt::Display for GoalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A prospecting goal assigned to one salesperson.
///
/// Monthly goals are divided per week by the backend when computing a
/// salesperson's weekly target; this crate only carries the assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProspectingGoal {
    pub period: GoalPeriod,
    /// Number of prospecting contacts expected over the period
    pub target: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_from_display_name() {
        let member = TeamMember {
            id: "vendedor1".to_string(),
            name: "Ana Borges".to_string(),
            avatar_url: String::new(),
        };
        assert_eq!(member.initials(), "AB");

        let single = TeamMember {
            id: "vendedor2".to_string(),
            name: "carlos".to_string(),
            avatar_url: String::new(),
        };
        assert_eq!(single.initials(), "C");
    }

    #[test]
    fn test_goal_period_wire_format() {
        // Config files use the lowercase period names
        let goal: ProspectingGoal =
            serde_json::from_str(r#"{"period":"monthly","target":30}"#).unwrap();
        assert_eq!(goal.period, GoalPeriod::Monthly);
        assert_eq!(goal.target, 30);

        assert_eq!(
            serde_json::to_string(&GoalPeriod::Weekly).unwrap(),
            "\"weekly\""
        );
    }
}
