use eframe::egui;

use crate::ui::app_state::{HunterSettingsApp, ScreenEvent};
use crate::ui::components::styling::setup_screen_style;
use crate::ui::components::theme::colors;

impl eframe::App for HunterSettingsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_screen_style(ctx);

        // Feedback messages fade out on their own; keep repainting while
        // one is visible so the expiry is honored without input events
        self.ui.expire_messages(std::time::Instant::now());
        if self.ui.has_messages() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }

        // Escape dismisses whichever dialog is open
        if self.modals.any_modal_open() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.modals.hide_all_modals();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui);

            ui.separator();

            self.render_messages(ui);

            self.render_main_content(ui);
        });

        // Dialogs render above the panel content
        self.render_modals(ctx);

        for event in self.take_events() {
            self.handle_event(ctx, event);
        }
    }
}

impl HunterSettingsApp {
    /// React to events the renderers queued this frame.
    ///
    /// The standalone binary is the whole host, so back navigation closes
    /// the window; an embedding shell would route it to its own navigator.
    fn handle_event(&mut self, ctx: &egui::Context, event: ScreenEvent) {
        match event {
            ScreenEvent::NavigateBack => {
                log::info!("⬅ Leaving Hunter Settings");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            ScreenEvent::LeadRequestSubmitted => {
                self.ui
                    .set_success("Lead request sent to the Triad3 team.".to_string());
            }
            ScreenEvent::LeadUploadSubmitted => {
                self.ui
                    .set_success("Your lead database was queued for distribution.".to_string());
            }
        }
    }

    /// Render the transient feedback line under the header
    fn render_messages(&self, ui: &mut egui::Ui) {
        if let Some(error) = &self.ui.error_message {
            ui.colored_label(colors::DANGER, format!("❌ {}", error));
        }
        if let Some(success) = &self.ui.success_message {
            ui.colored_label(colors::SUCCESS, format!("✅ {}", success));
        }
    }
}
