//! # UI Components Module
//!
//! Rendering code for the Hunter Settings screen, one concern per file.
//!
//! ## Module Organization:
//! - `header` - back affordance and screen title
//! - `tab_manager` - tab toggle buttons and content routing
//! - `access_panel` - lead supply card and per-salesperson access toggles
//! - `goals_panel` - per-salesperson goal period and target fields
//! - `modals` - request-leads and upload-leads dialogs
//! - `styling` - global egui style setup
//! - `theme` - centralized color constants
//! - `ui_components` - painter helpers (toggle switch, avatar disc, cards)
//!
//! ## Architecture:
//! Each component is an `impl` block on `HunterSettingsApp`, so all
//! renderers share the single state struct without passing it around.

pub mod access_panel;
pub mod goals_panel;
pub mod header;
pub mod modals;
pub mod styling;
pub mod tab_manager;
pub mod theme;
pub mod ui_components;

pub use styling::setup_screen_style;
pub use ui_components::{avatar_disc, toggle_switch};
