//! # Request Leads Modal
//!
//! Dialog asking the Triad3 team for a new lead list.
//!
//! ## Responsibilities:
//! - Quantity input for the requested lead count
//! - Confirm emits `ScreenEvent::LeadRequestSubmitted` and closes
//! - Cancel and backdrop clicks dismiss without side effects

use eframe::egui;

use crate::ui::app_state::{HunterSettingsApp, ScreenEvent};
use crate::ui::components::modals::shared::show_modal_overlay;
use crate::ui::components::theme::colors;
use crate::ui::components::ui_components::{neutral_button, primary_button};

const MODAL_SIZE: egui::Vec2 = egui::vec2(420.0, 240.0);

impl HunterSettingsApp {
    /// Render the request-leads dialog
    pub fn render_request_leads_modal(&mut self, ctx: &egui::Context) {
        if !self.modals.show_request_leads_modal {
            return;
        }

        let mut confirmed = false;
        let mut cancelled = false;
        let quantity = &mut self.modals.request_quantity;

        let backdrop_clicked = show_modal_overlay(ctx, "request_leads_modal_overlay", MODAL_SIZE, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);

                ui.label(
                    egui::RichText::new("Request leads")
                        .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                        .strong(),
                );

                ui.add_space(10.0);

                ui.label(
                    egui::RichText::new(
                        "How many leads would you like to request for your Hunter team?",
                    )
                    .color(colors::TEXT_SECONDARY),
                );

                ui.add_space(14.0);

                // The typed quantity is display-only; the submission event
                // carries no payload
                ui.add(
                    egui::TextEdit::singleline(quantity)
                        .hint_text("e.g. 50")
                        .desired_width(160.0)
                        .horizontal_align(egui::Align::Center)
                        .font(egui::FontId::new(18.0, egui::FontFamily::Proportional)),
                );

                ui.add_space(20.0);

                ui.horizontal(|ui| {
                    ui.add_space(60.0);
                    if ui.add(neutral_button("Cancel")).clicked() {
                        cancelled = true;
                    }
                    ui.add_space(16.0);
                    if ui.add(primary_button("Send request")).clicked() {
                        confirmed = true;
                    }
                });
            });
        });

        if confirmed {
            log::info!("📨 Lead request submitted");
            self.emit(ScreenEvent::LeadRequestSubmitted);
            self.modals.close_request_leads();
        } else if cancelled || (backdrop_clicked && !self.modals.modal_just_opened) {
            self.modals.close_request_leads();
        }

        self.modals.modal_just_opened = false;
    }
}
