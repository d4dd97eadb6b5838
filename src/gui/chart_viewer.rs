//! Chart Viewer Widget
//! Central panel showing the two status chart cards side by side.

use crate::charts::{ChartSpec, StatusChartPlotter, COLUMN_CONTAINER, PIE_CONTAINER};
use crate::data::Totals;
use egui::{RichText, ScrollArea};

const CARD_SPACING: f32 = 15.0;
const CARD_WIDTH: f32 = 360.0;

/// Holds the two chart specs and the pie selection state.
/// Specs are rebuilt whenever the totals change.
pub struct ChartViewer {
    pie_spec: ChartSpec,
    column_spec: ChartSpec,
    selected_slice: Option<usize>,
}

impl ChartViewer {
    pub fn new(totals: Totals) -> Self {
        Self {
            pie_spec: ChartSpec::pie(&totals),
            column_spec: ChartSpec::column(&totals),
            selected_slice: None,
        }
    }

    /// Rebuild both specs from new totals and drop the slice selection.
    pub fn set_totals(&mut self, totals: Totals) {
        self.pie_spec = ChartSpec::pie(&totals);
        self.column_spec = ChartSpec::column(&totals);
        self.selected_slice = None;
    }

    /// Draw both chart cards, wrapping when the window is narrow.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(CARD_SPACING);
                ui.horizontal_wrapped(|ui| {
                    ui.push_id(PIE_CONTAINER, |ui| {
                        Self::draw_card(ui, "Status Breakdown", |ui| {
                            StatusChartPlotter::draw_pie_chart(
                                ui,
                                &self.pie_spec,
                                &mut self.selected_slice,
                            );
                        });
                    });
                    ui.add_space(CARD_SPACING);
                    ui.push_id(COLUMN_CONTAINER, |ui| {
                        Self::draw_card(ui, "Status Counts", |ui| {
                            StatusChartPlotter::draw_column_chart(ui, &self.column_spec);
                        });
                    });
                });
            });
    }

    /// Draw a single chart card with a fixed width.
    fn draw_card(ui: &mut egui::Ui, heading: &str, add_chart: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.vertical(|ui| {
                    ui.label(RichText::new(heading).size(14.0).strong());
                    ui.add_space(8.0);
                    add_chart(ui);
                });
            });
    }
}
