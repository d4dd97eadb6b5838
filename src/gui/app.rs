//! Status Charts Main Application
//! Main window with control panel and chart viewer.

use crate::charts::{PngChartRenderer, StatusDashboard, COLUMN_CONTAINER, PIE_CONTAINER};
use crate::data::Totals;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use anyhow::Context;
use egui::SidePanel;
use std::path::{Path, PathBuf};

/// Pixel size of exported chart images
const EXPORT_WIDTH: u32 = 640;
const EXPORT_HEIGHT: u32 = 480;

/// Main application window.
pub struct StatusChartsApp {
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl StatusChartsApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let control_panel = ControlPanel::new();
        let chart_viewer = ChartViewer::new(control_panel.settings.totals);
        Self {
            control_panel,
            chart_viewer,
        }
    }

    /// Handle totals file selection
    fn handle_browse_totals(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON Files", &["json"])
            .pick_file()
        {
            match Totals::from_json_file(&path) {
                Ok(totals) => {
                    self.control_panel.settings.totals = totals;
                    self.control_panel.settings.totals_path = Some(path);
                    self.chart_viewer.set_totals(totals);
                    self.control_panel
                        .set_status(&format!("Loaded totals: {} tests", totals.sum()));
                }
                Err(e) => {
                    self.control_panel.set_status(&format!("Error: {}", e));
                }
            }
        }
    }

    /// Handle PNG export - render both charts and write them next to the
    /// chosen path.
    fn handle_export_png(&mut self) {
        let output_path = match rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("status_charts.png")
            .save_file()
        {
            Some(path) => path,
            None => return, // User cancelled
        };

        match Self::export_charts(self.control_panel.settings.totals, &output_path) {
            Ok([pie_path, bar_path]) => {
                self.control_panel.set_status(&format!(
                    "Exported {} and {}",
                    pie_path.display(),
                    bar_path.display()
                ));
                let _ = open::that(&pie_path);
            }
            Err(e) => {
                self.control_panel.set_status(&format!("Error: {:#}", e));
            }
        }
    }

    /// Render both charts through the static backend and write the PNGs.
    fn export_charts(totals: Totals, path: &Path) -> anyhow::Result<[PathBuf; 2]> {
        let mut renderer = PngChartRenderer::new(EXPORT_WIDTH, EXPORT_HEIGHT);
        StatusDashboard::new(totals)
            .render_charts(&mut renderer)
            .context("Chart rendering failed")?;

        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("status_charts");
        let pie_path = dir.join(format!("{stem}_pie.png"));
        let bar_path = dir.join(format!("{stem}_bar.png"));

        for (container, out) in [(PIE_CONTAINER, &pie_path), (COLUMN_CONTAINER, &bar_path)] {
            let bytes = renderer
                .png_bytes(container)
                .with_context(|| format!("No rendered image for {container}"))?;
            std::fs::write(out, bytes)
                .with_context(|| format!("Failed to write {}", out.display()))?;
        }

        Ok([pie_path, bar_path])
    }
}

impl eframe::App for StatusChartsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::BrowseTotals => self.handle_browse_totals(),
                        ControlPanelAction::TotalsChanged => {
                            self.chart_viewer
                                .set_totals(self.control_panel.settings.totals);
                        }
                        ControlPanelAction::ExportPng => self.handle_export_png(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
