//! # Header Module
//!
//! Screen header: back affordance and the screen title.
//!
//! ## Purpose:
//! The back link is the screen's only outward navigation; pressing it emits
//! `ScreenEvent::NavigateBack` for the shell to route.

use eframe::egui;

use crate::ui::app_state::{HunterSettingsApp, ScreenEvent};
use crate::ui::components::theme::colors;

impl HunterSettingsApp {
    /// Render the header
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        let frame = egui::Frame::none().inner_margin(egui::Margin::symmetric(4.0, 8.0));

        frame.show(ui, |ui| {
            ui.vertical(|ui| {
                let back = ui.add(
                    egui::Button::new(
                        egui::RichText::new("← Back to settings")
                            .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                            .color(colors::TEXT_SECONDARY),
                    )
                    .frame(false),
                );
                if back.clicked() {
                    self.emit(ScreenEvent::NavigateBack);
                }

                ui.add_space(4.0);

                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Active Prospecting Mode (Hunter)")
                            .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    )
                    .selectable(false),
                );
            });
        });
    }
}
