//! # UI Components Module
//!
//! Reusable drawing helpers shared by the panels and dialogs.
//!
//! ## Key Functions:
//! - `toggle_switch()` - animated on/off switch for the access rows
//! - `avatar_disc()` - painter-drawn avatar fallback with initials
//! - `card_frame()` / `row_frame()` - shared container styling
//! - `primary_button()` / `neutral_button()` - styled action buttons

use eframe::egui;
use shared::TeamMember;

use crate::ui::components::theme::colors;

/// Animated on/off switch in the product accent color.
///
/// Flips `on` when clicked and reports the change through the response.
pub fn toggle_switch(ui: &mut egui::Ui, on: &mut bool) -> egui::Response {
    let desired_size = ui.spacing().interact_size.y * egui::vec2(2.0, 1.0);
    let (rect, mut response) = ui.allocate_exact_size(desired_size, egui::Sense::click());

    if response.clicked() {
        *on = !*on;
        response.mark_changed();
    }

    if ui.is_rect_visible(rect) {
        let how_on = ui.ctx().animate_bool_responsive(response.id, *on);
        let radius = 0.5 * rect.height();

        let track = egui::Rgba::from(colors::SWITCH_OFF) * (1.0 - how_on)
            + egui::Rgba::from(colors::PRIMARY) * how_on;
        ui.painter()
            .rect_filled(rect, egui::Rounding::same(radius), egui::Color32::from(track));

        let knob_x = egui::lerp((rect.left() + radius)..=(rect.right() - radius), how_on);
        ui.painter().circle_filled(
            egui::pos2(knob_x, rect.center().y),
            0.75 * radius,
            egui::Color32::WHITE,
        );
    }

    response
}

/// Round avatar with the member's initials.
///
/// Avatar references in the roster are remote URLs this screen never
/// fetches, so every member renders as an initials disc.
pub fn avatar_disc(ui: &mut egui::Ui, member: &TeamMember, size: f32) {
    let (rect, _response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    if ui.is_rect_visible(rect) {
        ui.painter()
            .circle_filled(rect.center(), size / 2.0, avatar_color(&member.id));
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            member.initials(),
            egui::FontId::new(size * 0.4, egui::FontFamily::Proportional),
            colors::TEXT_ON_PRIMARY,
        );
    }
}

/// Stable palette pick so a member keeps the same disc color across frames
fn avatar_color(member_id: &str) -> egui::Color32 {
    let index = member_id
        .bytes()
        .fold(0usize, |acc, byte| acc.wrapping_add(byte as usize))
        % colors::AVATAR_PALETTE.len();
    colors::AVATAR_PALETTE[index]
}

/// Frame for the top-level cards on both tabs
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(colors::CARD_BACKGROUND)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::same(16.0))
}

/// Frame for one roster row inside a card
pub fn row_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(colors::ROW_BACKGROUND)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::symmetric(12.0, 10.0))
}

/// Accent-filled button for confirm actions
pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text)
            .strong()
            .color(colors::TEXT_ON_PRIMARY),
    )
    .fill(colors::PRIMARY)
    .rounding(egui::Rounding::same(8.0))
    .min_size(egui::vec2(130.0, 36.0))
}

/// Muted button for cancel actions
pub fn neutral_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text).color(colors::TEXT_PRIMARY))
        .fill(colors::NEUTRAL_BUTTON)
        .rounding(egui::Rounding::same(8.0))
        .min_size(egui::vec2(100.0, 36.0))
}
