//! # Goals Panel Module
//!
//! The "Prospecting goals" tab: one row per salesperson with a goal period
//! selector and a numeric target field. The fields edit session-local
//! drafts; submission is not wired anywhere (see `state::goal_state`).

use eframe::egui;
use shared::GoalPeriod;

use crate::ui::app_state::HunterSettingsApp;
use crate::ui::components::theme::colors;
use crate::ui::components::ui_components::{avatar_disc, card_frame, row_frame};

impl HunterSettingsApp {
    /// Render the goals tab
    pub fn render_goals_panel(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                card_frame().show(ui, |ui| {
                    ui.label(
                        egui::RichText::new("Prospecting goals")
                            .font(egui::FontId::new(19.0, egui::FontFamily::Proportional))
                            .strong(),
                    );
                    ui.label(
                        egui::RichText::new(
                            "Set daily, weekly or monthly goals. Monthly goals are split per week for the salesperson.",
                        )
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

                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        let draft = self
                                            .goals
                                            .draft_mut(&member.id, self.default_goals.get(&member.id));

                                        ui.add(
                                            egui::TextEdit::singleline(&mut draft.target_text)
                                                .hint_text("Prospect count")
                                                .desired_width(130.0),
                                        );

                                        ui.add_space(8.0);

                                        egui::ComboBox::from_id_source(("goal-period", &member.id))
                                            .selected_text(draft.period.label())
                                            .width(140.0)
                                            .show_ui(ui, |ui| {
                                                for period in GoalPeriod::ALL {
                                                    ui.selectable_value(
                                                        &mut draft.period,
                                                        period,
                                                        period.label(),
                                                    );
                                                }
                                            });
                                    },
                                );
                            });
                        });
                        ui.add_space(6.0);
                    }
                });
                ui.add_space(16.0);
            });
    }
}
