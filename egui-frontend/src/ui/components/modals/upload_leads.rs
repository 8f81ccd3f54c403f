//! # Upload Leads Modal
//!
//! Dialog for uploading the team lead's own lead database.
//!
//! ## Responsibilities:
//! - Native file picker filtered to `.csv`
//! - Show the chosen file name; the file is never opened or parsed here
//! - Confirm emits `ScreenEvent::LeadUploadSubmitted` and closes

use eframe::egui;

use crate::ui::app_state::{HunterSettingsApp, ScreenEvent};
use crate::ui::components::modals::shared::show_modal_overlay;
use crate::ui::components::theme::colors;
use crate::ui::components::ui_components::{neutral_button, primary_button};

const MODAL_SIZE: egui::Vec2 = egui::vec2(440.0, 300.0);

impl HunterSettingsApp {
    /// Render the upload-leads dialog
    pub fn render_upload_leads_modal(&mut self, ctx: &egui::Context) {
        if !self.modals.show_upload_leads_modal {
            return;
        }

        let mut confirmed = false;
        let mut cancelled = false;
        let selected_csv = &mut self.modals.selected_csv;

        let backdrop_clicked = show_modal_overlay(ctx, "upload_leads_modal_overlay", MODAL_SIZE, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);

                ui.label(
                    egui::RichText::new("Upload database")
                        .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                        .strong(),
                );

                ui.add_space(10.0);

                ui.label(
                    egui::RichText::new("Upload a .csv file with the columns: name, phone.")
                        .color(colors::TEXT_SECONDARY),
                );

                ui.add_space(14.0);

                egui::Frame::none()
                    .fill(colors::ROW_BACKGROUND)
                    .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                    .rounding(egui::Rounding::same(8.0))
                    .inner_margin(egui::Margin::same(16.0))
                    .show(ui, |ui| {
                        ui.set_width(360.0);
                        ui.vertical_centered(|ui| {
                            match selected_csv.as_deref().and_then(|p| p.file_name()) {
                                Some(file_name) => {
                                    ui.label(
                                        egui::RichText::new(format!(
                                            "📄 {}",
                                            file_name.to_string_lossy()
                                        ))
                                        .strong(),
                                    );
                                }
                                None => {
                                    ui.label(
                                        egui::RichText::new("No file selected")
                                            .color(colors::TEXT_SECONDARY),
                                    );
                                }
                            }

                            ui.add_space(8.0);

                            if ui.button("📁 Choose file").clicked() {
                                log::info!("📁 Opening native CSV picker");
                                if let Some(path) = rfd::FileDialog::new()
                                    .set_title("Select lead database")
                                    .add_filter("CSV files", &["csv"])
                                    .pick_file()
                                {
                                    log::info!("📁 User selected file: {:?}", path);
                                    *selected_csv = Some(path);
                                }
                            }
                        });
                    });

                ui.add_space(18.0);

                ui.horizontal(|ui| {
                    ui.add_space(70.0);
                    if ui.add(neutral_button("Cancel")).clicked() {
                        cancelled = true;
                    }
                    ui.add_space(16.0);
                    // Confirm regardless of selection; the file is never
                    // read, so there is nothing to validate
                    if ui.add(primary_button("Upload leads")).clicked() {
                        confirmed = true;
                    }
                });
            });
        });

        if confirmed {
            log::info!("📤 Lead upload submitted");
            self.emit(ScreenEvent::LeadUploadSubmitted);
            self.modals.close_upload_leads();
        } else if cancelled || (backdrop_clicked && !self.modals.modal_just_opened) {
            self.modals.close_upload_leads();
        }

        self.modals.modal_just_opened = false;
    }
}
