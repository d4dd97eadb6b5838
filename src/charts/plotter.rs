//! Chart Plotter Module
//! Interactive chart drawing with egui and egui_plot.

use crate::charts::ChartSpec;
use egui::{Color32, Sense, Shape, Stroke, Vec2};
use egui_plot::{Bar, BarChart, Legend, Plot};
use std::f64::consts::{FRAC_PI_2, TAU};

use super::renderer::slice_angles;

/// Creates the interactive status charts using the egui painter and egui_plot.
pub struct StatusChartPlotter;

impl StatusChartPlotter {
    /// Parse a `#rrggbb` hex color; anything else falls back to gray.
    pub fn color32_from_hex(hex: &str) -> Color32 {
        let parse = |range| u8::from_str_radix(hex.get(range).unwrap_or(""), 16);
        match (
            hex.as_bytes().first(),
            parse(1..3),
            parse(3..5),
            parse(5..7),
        ) {
            (Some(b'#'), Ok(r), Ok(g), Ok(b)) => Color32::from_rgb(r, g, b),
            _ => Color32::GRAY,
        }
    }

    /// Slice index containing the given angle (radians, atan2 convention).
    fn slice_at_angle(angles: &[(f64, f64)], angle: f64) -> Option<usize> {
        // Slices run clockwise from 12 o'clock, i.e. -PI/2 .. 3*PI/2
        let mut a = angle;
        if a < -FRAC_PI_2 {
            a += TAU;
        }
        angles.iter().position(|&(start, end)| a >= start && a < end)
    }

    /// Draw the pie chart. Clicking a slice toggles its selection, which
    /// offsets the slice outward; selection has no other effect.
    pub fn draw_pie_chart(ui: &mut egui::Ui, spec: &ChartSpec, selected: &mut Option<usize>) {
        let ChartSpec::Pie {
            allow_point_select,
            slices,
            ..
        } = spec
        else {
            return;
        };

        let side = ui.available_width().min(300.0).max(120.0);
        let sense = if *allow_point_select {
            Sense::click()
        } else {
            Sense::hover()
        };
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(side), sense);
        let painter = ui.painter_at(rect);

        if slices.is_empty() {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "No Data",
                egui::FontId::proportional(18.0),
                ui.visuals().weak_text_color(),
            );
            return;
        }

        let center = rect.center();
        let radius = side * 0.32;
        let angles = slice_angles(slices);

        if *allow_point_select {
            let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let v = pos - center;
                    if v.length() <= radius + 10.0 {
                        let hit = Self::slice_at_angle(&angles, v.y.atan2(v.x) as f64);
                        *selected = if hit == *selected { None } else { hit };
                    }
                }
            }
        }

        for (i, (slice, &(start, end))) in slices.iter().zip(angles.iter()).enumerate() {
            let color = Self::color32_from_hex(&slice.color);
            let mid = (start + end) / 2.0;
            let offset = if *selected == Some(i) {
                Vec2::new(mid.cos() as f32, mid.sin() as f32) * 8.0
            } else {
                Vec2::ZERO
            };

            // Triangle fan; per-step triangles stay convex for any sweep
            let steps = (((end - start) / 0.05).ceil() as usize).max(1);
            let point_at = |angle: f64| {
                center
                    + offset
                    + Vec2::new(angle.cos() as f32, angle.sin() as f32) * radius
            };
            for step in 0..steps {
                let a0 = start + (end - start) * step as f64 / steps as f64;
                let a1 = start + (end - start) * (step + 1) as f64 / steps as f64;
                painter.add(Shape::convex_polygon(
                    vec![center + offset, point_at(a0), point_at(a1)],
                    color,
                    Stroke::NONE,
                ));
            }

            // Data label outside the slice
            let label_pos = center
                + offset
                + Vec2::new(mid.cos() as f32, mid.sin() as f32) * radius * 1.12;
            let align = if mid.cos() >= 0.0 {
                egui::Align2::LEFT_CENTER
            } else {
                egui::Align2::RIGHT_CENTER
            };
            painter.text(
                label_pos,
                align,
                slice.data_label(),
                egui::FontId::proportional(12.0),
                ui.visuals().text_color(),
            );
        }
    }

    /// Draw the column chart: one bar per category at its raw count.
    pub fn draw_column_chart(ui: &mut egui::Ui, spec: &ChartSpec) {
        let ChartSpec::Column {
            display,
            categories,
            series,
            y_min,
        } = spec
        else {
            return;
        };

        let x_labels = categories.clone();
        let y_max = series.iter().map(|s| s.value).max().unwrap_or(0).max(1);

        let mut plot = Plot::new("status_columns")
            .height(260.0)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .clamp_grid(true)
            .include_y(*y_min as f64)
            .include_y(y_max as f64 * 1.1)
            .include_x(-0.6)
            .include_x(series.len() as f64 - 0.4)
            .legend(Legend::default())
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() < 1e-6 && idx >= 0.0 && (idx as usize) < x_labels.len()
                {
                    x_labels[idx as usize].clone()
                } else {
                    String::new()
                }
            });

        if !display.tooltip {
            plot = plot.show_x(false).show_y(false);
        }

        plot.show(ui, |plot_ui| {
            for (i, s) in series.iter().enumerate() {
                let color = Self::color32_from_hex(&s.color);
                let bar = Bar::new(i as f64, s.value as f64)
                    .width(0.6)
                    .fill(color)
                    .name(&s.name);
                plot_ui.bar_chart(BarChart::new(vec![bar]).color(color).name(&s.name));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Totals;

    #[test]
    fn hex_colors_map_to_color32() {
        assert_eq!(
            StatusChartPlotter::color32_from_hex("#81c784"),
            Color32::from_rgb(0x81, 0xc7, 0x84)
        );
        assert_eq!(StatusChartPlotter::color32_from_hex("#zz"), Color32::GRAY);
    }

    #[test]
    fn click_angles_resolve_to_slices() {
        let ChartSpec::Pie { slices, .. } = ChartSpec::pie(&Totals::new(8, 1, 1)) else {
            panic!("expected pie spec");
        };
        let angles = slice_angles(&slices);

        // 80% slice spans from 12 o'clock most of the way around
        assert_eq!(StatusChartPlotter::slice_at_angle(&angles, 0.0), Some(0));
        assert_eq!(
            StatusChartPlotter::slice_at_angle(&angles, -FRAC_PI_2),
            Some(0)
        );
        // Just shy of 12 o'clock, coming from the left: the last slice
        let just_before_top = -FRAC_PI_2 - 0.01;
        assert_eq!(
            StatusChartPlotter::slice_at_angle(&angles, just_before_top),
            Some(2)
        );
    }
}
