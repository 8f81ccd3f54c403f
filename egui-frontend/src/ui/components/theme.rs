//! # Theme Configuration
//!
//! Centralized color constants for the Hunter Settings screen. All rendering
//! code pulls from here so the dark product palette stays consistent and can
//! be retuned in one place.

use eframe::egui::Color32;

/// Dark product palette
pub mod colors {
    use super::Color32;

    /// Window and panel background
    pub const BACKGROUND: Color32 = Color32::from_rgb(10, 15, 30);

    /// Card and dialog surfaces
    pub const CARD_BACKGROUND: Color32 = Color32::from_rgb(17, 24, 43);

    /// Borders around cards, rows and fields
    pub const CARD_BORDER: Color32 = Color32::from_rgb(36, 48, 73);

    /// Row background inside cards
    pub const ROW_BACKGROUND: Color32 = Color32::from_rgb(10, 15, 30);

    /// Text field background
    pub const FIELD_BACKGROUND: Color32 = Color32::from_rgb(10, 15, 30);

    /// Brand accent for primary actions and active states
    pub const PRIMARY: Color32 = Color32::from_rgb(34, 211, 238);

    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(224, 224, 224);

    /// Secondary, less prominent text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(140, 150, 170);

    /// Text drawn on top of the accent color
    pub const TEXT_ON_PRIMARY: Color32 = Color32::from_rgb(10, 15, 30);

    /// Tab pill backgrounds
    pub const ACTIVE_BACKGROUND: Color32 = PRIMARY;
    pub const INACTIVE_BACKGROUND: Color32 = Color32::from_rgb(17, 24, 43);

    /// Feedback colors
    pub const SUCCESS: Color32 = Color32::from_rgb(74, 222, 128);
    pub const DANGER: Color32 = Color32::from_rgb(248, 113, 113);

    /// Neutral button fill (cancel actions)
    pub const NEUTRAL_BUTTON: Color32 = Color32::from_rgb(55, 65, 90);

    /// Toggle switch track when off
    pub const SWITCH_OFF: Color32 = Color32::from_rgb(36, 48, 73);

    /// Avatar disc palette, picked per member id
    pub const AVATAR_PALETTE: [Color32; 5] = [
        Color32::from_rgb(34, 211, 238),
        Color32::from_rgb(167, 139, 250),
        Color32::from_rgb(251, 146, 60),
        Color32::from_rgb(74, 222, 128),
        Color32::from_rgb(244, 114, 182),
    ];
}
