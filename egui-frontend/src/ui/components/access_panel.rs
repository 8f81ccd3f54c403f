//! # Access Panel Module
//!
//! The "Access & distribution" tab: a lead-supply card with the two dialog
//! triggers, and the roster card with one hunter-mode toggle per salesperson.

use eframe::egui;

use crate::ui::app_state::HunterSettingsApp;
use crate::ui::components::theme::colors;
use crate::ui::components::ui_components::{avatar_disc, card_frame, row_frame, toggle_switch};

impl HunterSettingsApp {
    /// Render the access tab
    pub fn render_access_panel(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.render_lead_supply_card(ui);
                ui.add_space(16.0);
                self.render_roster_access_card(ui);
                ui.add_space(16.0);
            });
    }

    /// Card with the request-leads and upload-leads triggers
    fn render_lead_supply_card(&mut self, ui: &mut egui::Ui) {
        card_frame().show(ui, |ui| {
            ui.label(
                egui::RichText::new("Lead supply")
                    .font(egui::FontId::new(19.0, egui::FontFamily::Proportional))
                    .strong(),
            );
            ui.label(
                egui::RichText::new(
                    "Request qualified leads from our base or upload your own list for distribution.",
                )
                .color(colors::TEXT_SECONDARY),
            );

            ui.add_space(10.0);

            ui.columns(2, |columns| {
                columns[0].vertical(|ui| {
                    if ui
                        .add_sized(
                            [ui.available_width(), 56.0],
                            egui::Button::new(
                                egui::RichText::new("➕ Request Triad3 leads").strong(),
                            )
                            .fill(colors::ROW_BACKGROUND)
                            .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                            .rounding(egui::Rounding::same(8.0)),
                        )
                        .clicked()
                    {
                        log::info!("📨 Opening request-leads dialog");
                        self.modals.open_request_leads();
                    }
                    ui.label(
                        egui::RichText::new("Ask our team for a fresh lead list.")
                            .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                            .color(colors::TEXT_SECONDARY),
                    );
                });

                columns[1].vertical(|ui| {
                    if ui
                        .add_sized(
                            [ui.available_width(), 56.0],
                            egui::Button::new(
                                egui::RichText::new("📤 Upload database").strong(),
                            )
                            .fill(colors::ROW_BACKGROUND)
                            .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                            .rounding(egui::Rounding::same(8.0)),
                        )
                        .clicked()
                    {
                        log::info!("📁 Opening upload-leads dialog");
                        self.modals.open_upload_leads();
                    }
                    ui.label(
                        egui::RichText::new("Upload a .csv file with your leads.")
                            .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                            .color(colors::TEXT_SECONDARY),
                    );
                });
            });
        });
    }

    /// Card listing every salesperson with a hunter-mode switch
    fn render_roster_access_card(&mut self, ui: &mut egui::Ui) {
        card_frame().show(ui, |ui| {
            ui.label(
                egui::RichText::new("Salesperson access")
                    .font(egui::FontId::new(19.0, egui::FontFamily::Proportional))
                    .strong(),
            );
            ui.label(
                egui::RichText::new("Enable or disable Hunter mode for each salesperson on your team.")
                    .color(colors::TEXT_SECONDARY),
            );

            ui.add_space(10.0);

            let roster = self.roster.clone();
            for member in &roster {
                row_frame().show(ui, |ui| {
                    ui.horizontal(|ui| {
                        avatar_disc(ui, member, 36.0);
                        ui.add_space(4.0);
                        ui.add(
                            egui::Label::new(egui::RichText::new(&member.name).strong())
                                .selectable(false),
                        );

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let mut on = self.access.is_enabled(&member.id);
                            if toggle_switch(ui, &mut on).changed() {
                                self.access.toggle(&member.id);
                                log::info!(
                                    "🎯 Hunter mode for {} -> {}",
                                    member.id,
                                    if on { "enabled" } else { "disabled" }
                                );
                            }
                        });
                    });
                });
                ui.add_space(6.0);
            }
        });
    }
}
