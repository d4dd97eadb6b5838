//! Control Panel Widget
//! Left side panel with totals input and export controls.

use crate::data::Totals;
use egui::{Color32, DragValue, RichText};
use std::path::PathBuf;

/// User settings for the charts
#[derive(Default, Clone)]
pub struct UserSettings {
    pub totals_path: Option<PathBuf>,
    pub totals: Totals,
}

/// Left side control panel with totals entry and export controls.
pub struct ControlPanel {
    pub settings: UserSettings,
    pub status: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            settings: UserSettings::default(),
            status: "Ready".to_string(),
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 Status Charts")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Test Status Summary")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Totals File Section =====
        ui.label(RichText::new("📁 Totals Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .settings
                        .totals_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "Manual entry".to_string());

                    ui.label(RichText::new(&path_text).size(12.0).color(
                        if self.settings.totals_path.is_some() {
                            Color32::WHITE
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = ControlPanelAction::BrowseTotals;
                        }
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Totals Section =====
        ui.label(RichText::new("🔢 Test Totals").size(14.0).strong());
        ui.add_space(8.0);

        let label_width = 80.0;
        let mut changed = false;

        for (label, value) in [
            ("Passed:", &mut self.settings.totals.passed),
            ("Failed:", &mut self.settings.totals.failed),
            ("Warning:", &mut self.settings.totals.warning),
        ] {
            ui.horizontal(|ui| {
                ui.add_sized([label_width, 20.0], egui::Label::new(label));
                changed |= ui
                    .add(DragValue::new(value).speed(1).range(0..=u64::MAX))
                    .changed();
            });
            ui.add_space(5.0);
        }

        if changed {
            // Manual edits override whatever file was loaded
            self.settings.totals_path = None;
            action = ControlPanelAction::TotalsChanged;
        }

        ui.add_space(5.0);
        ui.label(
            RichText::new(format!("Total tests: {}", self.settings.totals.sum()))
                .size(12.0)
                .color(Color32::GRAY),
        );

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            let button = egui::Button::new(RichText::new("🖼 Export PNG").size(16.0))
                .min_size(egui::vec2(200.0, 35.0));
            if ui.add(button).clicked() {
                action = ControlPanelAction::ExportPng;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Exported") || self.status.contains("Loaded") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Set the status line
    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    TotalsChanged,
    BrowseTotals,
    ExportPng,
}
