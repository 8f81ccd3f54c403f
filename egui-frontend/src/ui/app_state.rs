//! # App State Module
//!
//! Central state for the Hunter Settings screen.
//!
//! ## Key Types:
//! - `SettingsTab` - the two mutually exclusive views (Access, Goals)
//! - `ScreenEvent` - what the screen reports back to its host shell
//! - `HunterSettingsApp` - the application state struct
//!
//! ## State Management:
//! All screen state lives in one place, split into focused sub-structs
//! (access flags, goal drafts, modal state, feedback messages). Components
//! are `impl` blocks on `HunterSettingsApp` in their own files, so every
//! renderer sees the same single source of truth.
//!
//! ## Events:
//! Renderers never act on the host directly. They push `ScreenEvent`s which
//! the shell drains once per frame: back navigation and the two submission
//! acknowledgments.

use anyhow::bail;
use log::info;
use shared::{ProspectingGoal, TeamMember};
use std::collections::{HashMap, HashSet};

use crate::config::ScreenConfig;
use crate::ui::state::{AccessState, GoalUiState, ModalState, UiState};

/// Tabs available in the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsTab {
    Access,
    Goals,
}

/// Events the screen emits toward its host shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    /// The back affordance was pressed
    NavigateBack,
    /// The request-leads dialog was confirmed
    LeadRequestSubmitted,
    /// The upload-leads dialog was confirmed
    LeadUploadSubmitted,
}

/// Main application struct for the Hunter Settings screen
pub struct HunterSettingsApp {
    /// Read-only ordered roster supplied by the host
    pub roster: Vec<TeamMember>,

    /// Default goal per member, supplied by the host
    pub default_goals: HashMap<String, ProspectingGoal>,

    /// Currently active tab
    pub current_tab: SettingsTab,

    // State split by concern
    pub access: AccessState,
    pub goals: GoalUiState,
    pub modals: ModalState,
    pub ui: UiState,

    /// Events waiting for the shell to drain
    pending_events: Vec<ScreenEvent>,
}

impl HunterSettingsApp {
    /// Build screen state from injected configuration.
    ///
    /// No UI context is needed, which keeps this constructible in tests.
    /// Fails on duplicate member ids: access flags and goal drafts are keyed
    /// by id, so two rows sharing one would silently share state.
    pub fn from_config(config: ScreenConfig) -> Result<Self, anyhow::Error> {
        let mut seen = HashSet::new();
        for member in &config.roster {
            if !seen.insert(member.id.as_str()) {
                bail!("duplicate member id in roster: {}", member.id);
            }
        }

        Ok(Self {
            roster: config.roster,
            default_goals: config.default_goals,
            current_tab: SettingsTab::Access, // Default to the access view
            access: AccessState::new(config.initial_access),
            goals: GoalUiState::default(),
            modals: ModalState::new(),
            ui: UiState::new(),
            pending_events: Vec::new(),
        })
    }

    /// Create the app inside an eframe creation context
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: ScreenConfig,
    ) -> Result<Self, anyhow::Error> {
        info!(
            "Initializing Hunter Settings app with {} roster members",
            config.roster.len()
        );
        crate::ui::components::styling::setup_screen_style(&cc.egui_ctx);
        Self::from_config(config)
    }

    /// Switch the active tab. Pure assignment; panel state is untouched.
    pub fn select_tab(&mut self, tab: SettingsTab) {
        self.current_tab = tab;
    }

    /// Queue an event for the shell
    pub fn emit(&mut self, event: ScreenEvent) {
        self.pending_events.push(event);
    }

    /// Drain all pending events, oldest first
    pub fn take_events(&mut self) -> Vec<ScreenEvent> {
        std::mem::take(&mut self.pending_events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_app() -> HunterSettingsApp {
        HunterSettingsApp::from_config(ScreenConfig::demo()).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let app = demo_app();
        assert_eq!(app.current_tab, SettingsTab::Access);
        assert!(!app.modals.any_modal_open());
    }

    #[test]
    fn test_seeded_access_scenario() {
        // Demo config seeds vendedor1 enabled; one toggle disables it
        let mut app = demo_app();
        assert!(app.access.is_enabled("vendedor1"));
        assert!(!app.access.is_enabled("vendedor2"));

        app.access.toggle("vendedor1");
        assert!(!app.access.is_enabled("vendedor1"));
    }

    #[test]
    fn test_tab_switch_preserves_access_entries() {
        let mut app = demo_app();
        app.access.toggle("vendedor2");

        app.select_tab(SettingsTab::Goals);
        app.select_tab(SettingsTab::Access);

        assert!(app.access.is_enabled("vendedor2"));
        assert!(app.access.is_enabled("vendedor1"));
    }

    #[test]
    fn test_events_drain_in_order() {
        let mut app = demo_app();
        app.emit(ScreenEvent::LeadRequestSubmitted);
        app.emit(ScreenEvent::NavigateBack);

        assert_eq!(
            app.take_events(),
            vec![ScreenEvent::LeadRequestSubmitted, ScreenEvent::NavigateBack]
        );
        assert!(app.take_events().is_empty());
    }

    #[test]
    fn test_request_dialog_cancel_is_side_effect_free() {
        let mut app = demo_app();
        app.modals.open_request_leads();
        app.modals.close_request_leads();

        assert!(!app.modals.any_modal_open());
        assert_eq!(app.current_tab, SettingsTab::Access);
        assert!(app.access.is_enabled("vendedor1"));
        assert!(app.take_events().is_empty());
    }

    #[test]
    fn test_upload_dialog_confirm_only_emits_event() {
        let mut app = demo_app();
        app.modals.open_upload_leads();

        // Confirm path: emit and close, nothing else changes
        app.emit(ScreenEvent::LeadUploadSubmitted);
        app.modals.close_upload_leads();

        assert!(!app.modals.any_modal_open());
        assert_eq!(app.current_tab, SettingsTab::Access);
        assert!(app.access.is_enabled("vendedor1"));
        assert_eq!(app.take_events(), vec![ScreenEvent::LeadUploadSubmitted]);
    }

    #[test]
    fn test_duplicate_roster_ids_rejected() {
        let mut config = ScreenConfig::demo();
        let dup = config.roster[0].clone();
        config.roster.push(dup);
        assert!(HunterSettingsApp::from_config(config).is_err());
    }
}
