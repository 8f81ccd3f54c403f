//! # Shared Modal Utilities
//!
//! Common overlay frame and backdrop handling for both dialogs, plus the
//! per-frame modal coordinator.

use eframe::egui;

use crate::ui::app_state::HunterSettingsApp;
use crate::ui::components::theme::colors;

/// Padding between a dialog's content and its visible edge
const DIALOG_MARGIN: f32 = 20.0;
const DIALOG_STROKE_WIDTH: f32 = 1.5;

impl HunterSettingsApp {
    /// Render all dialogs - main modal coordinator
    pub fn render_modals(&mut self, ctx: &egui::Context) {
        self.render_request_leads_modal(ctx);
        self.render_upload_leads_modal(ctx);
    }
}

/// Draw a centered dialog above a dimmed backdrop.
///
/// Returns true when a click landed outside the dialog rect; callers decide
/// whether that dismisses (the opening click itself must not, see
/// `ModalState::modal_just_opened`).
pub fn show_modal_overlay(
    ctx: &egui::Context,
    id: &str,
    size: egui::Vec2,
    add_contents: impl FnOnce(&mut egui::Ui),
) -> bool {
    let mut backdrop_clicked = false;

    egui::Area::new(egui::Id::new(id))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            let screen_rect = ctx.screen_rect();
            ui.painter().rect_filled(
                screen_rect,
                egui::Rounding::ZERO,
                egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128),
            );

            ui.allocate_ui_at_rect(screen_rect, |ui| {
                ui.centered_and_justified(|ui| {
                    egui::Frame::window(&ui.style())
                        .fill(colors::CARD_BACKGROUND)
                        .stroke(egui::Stroke::new(DIALOG_STROKE_WIDTH, colors::CARD_BORDER))
                        .rounding(egui::Rounding::same(12.0))
                        .inner_margin(egui::Margin::same(DIALOG_MARGIN))
                        .show(ui, |ui| {
                            ui.set_min_size(size);
                            ui.set_max_size(size);
                            add_contents(ui);
                        });
                });
            });

            if ui.ctx().input(|i| i.pointer.any_click()) {
                if let Some(pointer_pos) = ui.ctx().input(|i| i.pointer.latest_pos()) {
                    if !dialog_hit_rect(screen_rect.center(), size).contains(pointer_pos) {
                        backdrop_clicked = true;
                    }
                }
            }
        });

    backdrop_clicked
}

/// The full visible extent of a dialog: content plus the frame's inner
/// margin and stroke. Clicks inside this rect never count as backdrop.
fn dialog_hit_rect(center: egui::Pos2, content_size: egui::Vec2) -> egui::Rect {
    egui::Rect::from_center_size(center, content_size)
        .expand(DIALOG_MARGIN + DIALOG_STROKE_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_on_dialog_margin_ring_is_not_backdrop() {
        let center = egui::pos2(480.0, 360.0);
        let content_size = egui::vec2(420.0, 240.0);
        let hit_rect = dialog_hit_rect(center, content_size);

        // A click on the frame's own border ring, just outside the content
        // area, stays inside the dialog
        let on_margin = egui::pos2(center.x + content_size.x / 2.0 + 10.0, center.y);
        assert!(hit_rect.contains(on_margin));

        // A click clearly past the visible edge is backdrop
        let outside = egui::pos2(
            center.x + content_size.x / 2.0 + DIALOG_MARGIN + DIALOG_STROKE_WIDTH + 5.0,
            center.y,
        );
        assert!(!hit_rect.contains(outside));
    }
}
