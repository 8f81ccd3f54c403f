//! # Tab Manager Module
//!
//! Content routing between the two settings views.
//!
//! ## Tab Flow:
//! - SettingsTab::Access -> lead supply card + per-salesperson access toggles
//! - SettingsTab::Goals -> per-salesperson prospecting goal fields
//!
//! Switching tabs is a pure assignment; no panel state is reset.

use eframe::egui;

use crate::ui::app_state::{HunterSettingsApp, SettingsTab};
use crate::ui::components::theme::colors;

impl HunterSettingsApp {
    /// Render the tab toggle buttons and the active panel
    pub fn render_main_content(&mut self, ui: &mut egui::Ui) {
        self.draw_tab_toggle_buttons(ui);

        ui.add_space(12.0);

        match self.current_tab {
            SettingsTab::Access => self.render_access_panel(ui),
            SettingsTab::Goals => self.render_goals_panel(ui),
        }
    }

    /// Draw the Access/Goals pill buttons
    fn draw_tab_toggle_buttons(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.add(tab_button("Access & distribution", self.current_tab == SettingsTab::Access))
                .clicked()
            {
                self.select_tab(SettingsTab::Access);
            }

            ui.add_space(8.0);

            if ui.add(tab_button("Prospecting goals", self.current_tab == SettingsTab::Goals))
                .clicked()
            {
                self.select_tab(SettingsTab::Goals);
            }
        });
    }
}

fn tab_button(label: &str, active: bool) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(label)
            .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
            .color(if active {
                colors::TEXT_ON_PRIMARY
            } else {
                colors::TEXT_SECONDARY
            }),
    )
    .min_size(egui::vec2(160.0, 30.0))
    .rounding(egui::Rounding::same(6.0))
    .fill(if active {
        colors::ACTIVE_BACKGROUND
    } else {
        colors::INACTIVE_BACKGROUND
    })
    .stroke(egui::Stroke::new(1.5, colors::CARD_BORDER))
}
