//! # Access State Module
//!
//! Per-salesperson "hunter mode" flags for the access tab.
//!
//! ## Responsibilities:
//! - Track which members have active prospecting enabled
//! - Default missing entries to disabled
//!
//! ## Purpose:
//! Entries are created lazily: a member id only appears in the map once its
//! row has been toggled (or the host seeded it), so the map never grows
//! beyond the roster during a session. Nothing is persisted; the map is
//! rebuilt from configuration on every launch.

use std::collections::HashMap;

/// Per-salesperson hunter mode flags
#[derive(Debug, Default)]
pub struct AccessState {
    enabled: HashMap<String, bool>,
}

impl AccessState {
    /// Create access state seeded from host configuration
    pub fn new(initial: HashMap<String, bool>) -> Self {
        Self { enabled: initial }
    }

    /// Whether hunter mode is on for a member; a missing entry reads disabled
    pub fn is_enabled(&self, member_id: &str) -> bool {
        self.enabled.get(member_id).copied().unwrap_or(false)
    }

    /// Flip hunter mode for a member. Missing entries default to disabled
    /// before flipping, so the first toggle always enables.
    pub fn toggle(&mut self, member_id: &str) {
        let entry = self.enabled.entry(member_id.to_string()).or_insert(false);
        *entry = !*entry;
    }

    /// Number of members with an explicit entry (toggled or seeded)
    #[allow(dead_code)]
    pub fn entry_count(&self) -> usize {
        self.enabled.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untoggled_member_reads_disabled() {
        let access = AccessState::default();
        assert!(!access.is_enabled("vendedor1"));
        assert_eq!(access.entry_count(), 0);
    }

    #[test]
    fn test_first_toggle_enables() {
        let mut access = AccessState::default();
        access.toggle("vendedor2");
        assert!(access.is_enabled("vendedor2"));
        assert_eq!(access.entry_count(), 1);
    }

    #[test]
    fn test_double_toggle_restores_original_value() {
        let mut access = AccessState::default();
        access.toggle("vendedor1");
        access.toggle("vendedor1");
        assert!(!access.is_enabled("vendedor1"));

        let mut seeded = AccessState::new(
            [("vendedor1".to_string(), true)].into_iter().collect(),
        );
        seeded.toggle("vendedor1");
        seeded.toggle("vendedor1");
        assert!(seeded.is_enabled("vendedor1"));
    }

    #[test]
    fn test_stray_seeded_entry_is_harmless() {
        // Hosts may seed an id that is not on the roster; the entry is
        // retained as-is and other members read their own values
        let mut access = AccessState::new(
            [("ghost".to_string(), true), ("vendedor1".to_string(), true)]
                .into_iter()
                .collect(),
        );
        assert!(access.is_enabled("vendedor1"));
        assert!(access.is_enabled("ghost"));
        assert_eq!(access.entry_count(), 2);

        // Toggling a roster member never disturbs the stray entry
        access.toggle("vendedor1");
        assert!(!access.is_enabled("vendedor1"));
        assert!(access.is_enabled("ghost"));
    }

    #[test]
    fn test_seeded_member_toggles_off() {
        let mut access = AccessState::new(
            [("vendedor1".to_string(), true)].into_iter().collect(),
        );
        assert!(access.is_enabled("vendedor1"));
        access.toggle("vendedor1");
        assert!(!access.is_enabled("vendedor1"));
    }
}
