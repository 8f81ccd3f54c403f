//! # Styling Module
//!
//! Global egui style setup for the Hunter Settings screen.
//!
//! ## Purpose:
//! Applies the dark product palette and shared widget geometry (rounding,
//! padding, text sizes) once per frame. Individual components only choose
//! colors from `theme::colors`, never restyle the context themselves.

use eframe::egui;

use crate::ui::components::theme::colors;

/// Apply the dark screen styling to the whole context
pub fn setup_screen_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals = egui::Visuals::dark();
        style.visuals.window_fill = colors::BACKGROUND;
        style.visuals.panel_fill = colors::BACKGROUND;
        style.visuals.override_text_color = Some(colors::TEXT_PRIMARY);
        style.visuals.button_frame = true;

        // Text edits use extreme_bg_color in egui 0.28
        style.visuals.extreme_bg_color = colors::FIELD_BACKGROUND;
        style.visuals.widgets.inactive.bg_stroke =
            egui::Stroke::new(1.0, colors::CARD_BORDER);
        style.visuals.widgets.hovered.bg_stroke =
            egui::Stroke::new(1.0, colors::PRIMARY);
        style.visuals.selection.bg_fill = colors::PRIMARY.linear_multiply(0.4);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );

        // Rounded corners and padding
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);

        style
    });
}
