//! # Screen Configuration
//!
//! Injected configuration for the Hunter Settings screen: the roster, which
//! members start with hunter mode enabled, and the default goal shown per
//! member in the goals tab.
//!
//! ## Purpose:
//! The screen itself owns no data source. Everything it displays arrives
//! through a `ScreenConfig` built by the host, either from a JSON file or
//! from the built-in demo roster, keeping the screen pure and testable.

use serde::{Deserialize, Serialize};
use shared::{GoalPeriod, ProspectingGoal, TeamMember};
use std::collections::HashMap;
use std::path::Path;

/// Errors raised while loading a roster configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything the Hunter Settings screen needs from its host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Ordered roster shown in both tabs
    pub roster: Vec<TeamMember>,
    /// Member ids that start with hunter mode enabled
    #[serde(default)]
    pub initial_access: HashMap<String, bool>,
    /// Default goal pre-filled per member in the goals tab
    #[serde(default)]
    pub default_goals: HashMap<String, ProspectingGoal>,
}

impl ScreenConfig {
    /// Load a configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Built-in demo roster used when no configuration file is given
    pub fn demo() -> Self {
        let roster = vec![
            TeamMember {
                id: "vendedor1".to_string(),
                name: "Ana Borges".to_string(),
                avatar_url: "https://i.pravatar.cc/150?u=vendedor1".to_string(),
            },
            TeamMember {
                id: "vendedor2".to_string(),
                name: "Carlos Dias".to_string(),
                avatar_url: "https://i.pravatar.cc/150?u=vendedor2".to_string(),
            },
            TeamMember {
                id: "vendedor3".to_string(),
                name: "Fernanda Lima".to_string(),
                avatar_url: "https://i.pravatar.cc/150?u=vendedor3".to_string(),
            },
        ];

        let mut initial_access = HashMap::new();
        initial_access.insert("vendedor1".to_string(), true);

        let mut default_goals = HashMap::new();
        default_goals.insert(
            "vendedor1".to_string(),
            ProspectingGoal {
                period: GoalPeriod::Monthly,
                target: 30,
            },
        );
        default_goals.insert(
            "vendedor2".to_string(),
            ProspectingGoal {
                period: GoalPeriod::Weekly,
                target: 10,
            },
        );

        Self {
            roster,
            initial_access,
            default_goals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_config_shape() {
        let config = ScreenConfig::demo();
        assert_eq!(config.roster.len(), 3);
        assert_eq!(config.initial_access.get("vendedor1"), Some(&true));
        assert_eq!(
            config.default_goals.get("vendedor2").map(|g| g.period),
            Some(GoalPeriod::Weekly)
        );
    }

    #[test]
    fn test_parse_minimal_config() {
        // Access and goal maps are optional in config files
        let config: ScreenConfig = serde_json::from_str(
            r#"{"roster":[{"id":"v9","name":"Nova","avatar_url":""}]}"#,
        )
        .unwrap();
        assert_eq!(config.roster.len(), 1);
        assert!(config.initial_access.is_empty());
        assert!(config.default_goals.is_empty());
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = ScreenConfig::demo();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ScreenConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_unknown_member_in_initial_access_is_retained() {
        // A config may reference an id outside the roster; it parses fine
        // and the stray entry is carried along without affecting anyone
        let config: ScreenConfig = serde_json::from_str(
            r#"{
                "roster": [{"id": "v1", "name": "Ana", "avatar_url": ""}],
                "initial_access": {"v1": true, "ghost": true}
            }"#,
        )
        .unwrap();
        assert_eq!(config.initial_access.get("ghost"), Some(&true));

        let app = crate::ui::app_state::HunterSettingsApp::from_config(config).unwrap();
        assert!(app.access.is_enabled("v1"));
        assert_eq!(app.access.entry_count(), 2);
    }

    #[test]
    fn test_parse_full_config() {
        let config: ScreenConfig = serde_json::from_str(
            r#"{
                "roster": [{"id": "v1", "name": "Ana", "avatar_url": ""}],
                "initial_access": {"v1": true},
                "default_goals": {"v1": {"period": "daily", "target": 5}}
            }"#,
        )
        .unwrap();
        assert_eq!(config.initial_access.get("v1"), Some(&true));
        let goal = config.default_goals.get("v1").unwrap();
        assert_eq!(goal.period, GoalPeriod::Daily);
        assert_eq!(goal.target, 5);
    }
}
