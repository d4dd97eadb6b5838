//! Chart Renderer Module
//! The rendering seam: a backend trait, the dashboard component that issues
//! the two render calls, and a plotters backend producing PNG bytes.

use crate::charts::{ChartSpec, ColumnSeries, PieSlice, COLUMN_CONTAINER, PIE_CONTAINER};
use crate::data::Totals;
use image::{ImageFormat, RgbImage};
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::collections::HashMap;
use std::f64::consts::{FRAC_PI_2, TAU};
use std::io::Cursor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Chart backend error: {0}")]
    Backend(String),
    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
}

/// Handle to a rendered chart, identifying the container it landed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderHandle {
    pub container: String,
    pub width: u32,
    pub height: u32,
}

/// Rendering backend seam.
///
/// Backends take a container id and a declarative spec and mutate the
/// container to hold the chart. Tests substitute a recording fake.
pub trait ChartRenderer {
    fn render(&mut self, container_id: &str, spec: &ChartSpec) -> Result<RenderHandle, RenderError>;
}

/// The chart-renderer component: builds both specs from one totals value
/// and hands them to a backend.
pub struct StatusDashboard {
    totals: Totals,
}

impl StatusDashboard {
    pub fn new(totals: Totals) -> Self {
        Self { totals }
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    /// Issue the two render calls, pie first, into the fixed containers.
    /// The calls are sequential and independent; specs are rebuilt from the
    /// same totals on every invocation.
    pub fn render_charts(
        &self,
        renderer: &mut dyn ChartRenderer,
    ) -> Result<[RenderHandle; 2], RenderError> {
        let pie = renderer.render(PIE_CONTAINER, &ChartSpec::pie(&self.totals))?;
        let column = renderer.render(COLUMN_CONTAINER, &ChartSpec::column(&self.totals))?;
        Ok([pie, column])
    }
}

/// Start and end angle for each slice, clockwise from 12 o'clock.
pub fn slice_angles(slices: &[PieSlice]) -> Vec<(f64, f64)> {
    let mut start = -FRAC_PI_2;
    slices
        .iter()
        .map(|slice| {
            let end = start + slice.fraction * TAU;
            let arc = (start, end);
            start = end;
            arc
        })
        .collect()
}

/// Parse a `#rrggbb` hex color; anything else falls back to black.
fn rgb_from_hex(hex: &str) -> RGBColor {
    let parse = |range| u8::from_str_radix(hex.get(range).unwrap_or(""), 16);
    match (
        hex.as_bytes().first(),
        parse(1..3),
        parse(3..5),
        parse(5..7),
    ) {
        (Some(b'#'), Ok(r), Ok(g), Ok(b)) => RGBColor(r, g, b),
        _ => RGBColor(0, 0, 0),
    }
}

/// Static backend: draws each chart with plotters into an RGB buffer and
/// keeps the PNG-encoded result per container.
pub struct PngChartRenderer {
    width: u32,
    height: u32,
    images: HashMap<String, Vec<u8>>,
}

impl PngChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            images: HashMap::new(),
        }
    }

    /// PNG bytes for a container, if it was rendered.
    pub fn png_bytes(&self, container_id: &str) -> Option<&[u8]> {
        self.images.get(container_id).map(|v| v.as_slice())
    }

    fn encode_png(buf: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
        let img = RgbImage::from_raw(width, height, buf)
            .ok_or_else(|| RenderError::Backend("RGB buffer size mismatch".to_string()))?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    fn draw_pie(
        buf: &mut [u8],
        width: u32,
        height: u32,
        slices: &[PieSlice],
        title: Option<&str>,
    ) -> Result<(), RenderError> {
        let backend = |e: DrawingAreaErrorKind<_>| RenderError::Backend(e.to_string());

        let root = BitMapBackend::with_buffer(buf, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(backend)?;

        if let Some(text) = title {
            root.draw(&Text::new(
                text.to_string(),
                (width as i32 / 2, 10),
                TextStyle::from(("sans-serif", 18).into_font())
                    .pos(Pos::new(HPos::Center, VPos::Top)),
            ))
            .map_err(backend)?;
        }

        if slices.is_empty() {
            root.draw(&Text::new(
                "No Data".to_string(),
                (width as i32 / 2, height as i32 / 2),
                TextStyle::from(("sans-serif", 20).into_font())
                    .color(&RGBColor(120, 120, 120))
                    .pos(Pos::new(HPos::Center, VPos::Center)),
            ))
            .map_err(backend)?;
            return root.present().map_err(|e| RenderError::Backend(e.to_string()));
        }

        let center = (width as f64 / 2.0, height as f64 / 2.0);
        let radius = (width.min(height) as f64) * 0.32;
        let label_style = TextStyle::from(("sans-serif", 14).into_font());

        for (slice, (start, end)) in slices.iter().zip(slice_angles(slices)) {
            let color = rgb_from_hex(&slice.color);

            // Sector as a polygon fan from the center
            let steps = (((end - start) / 0.02).ceil() as usize).max(1);
            let mut points = vec![(center.0 as i32, center.1 as i32)];
            for i in 0..=steps {
                let angle = start + (end - start) * i as f64 / steps as f64;
                points.push((
                    (center.0 + radius * angle.cos()) as i32,
                    (center.1 + radius * angle.sin()) as i32,
                ));
            }
            root.draw(&Polygon::new(points, color.filled()))
                .map_err(backend)?;

            // Data label outside the slice, anchored away from the pie
            let mid = (start + end) / 2.0;
            let lx = center.0 + radius * 1.15 * mid.cos();
            let ly = center.1 + radius * 1.15 * mid.sin();
            let hpos = if mid.cos() >= 0.0 {
                HPos::Left
            } else {
                HPos::Right
            };
            root.draw(&Text::new(
                slice.data_label(),
                (lx as i32, ly as i32),
                label_style.clone().pos(Pos::new(hpos, VPos::Center)),
            ))
            .map_err(backend)?;
        }

        root.present().map_err(|e| RenderError::Backend(e.to_string()))
    }

    fn draw_column(
        buf: &mut [u8],
        width: u32,
        height: u32,
        categories: &[String],
        series: &[ColumnSeries],
        y_min: u64,
        title: Option<&str>,
    ) -> Result<(), RenderError> {
        let backend = |e: String| RenderError::Backend(e);

        let root = BitMapBackend::with_buffer(buf, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| backend(e.to_string()))?;

        let y_max = series.iter().map(|s| s.value).max().unwrap_or(0);
        // Headroom above the tallest bar; all-zero data still gets a 0..1 axis
        let y_top = (y_max + y_max.div_ceil(10)).max(1);

        let categories = categories.to_vec();
        let mut builder = ChartBuilder::on(&root);
        builder
            .margin(15)
            .x_label_area_size(28)
            .y_label_area_size(44);
        if let Some(text) = title {
            builder.caption(text, ("sans-serif", 18));
        }
        let mut chart = builder
            .build_cartesian_2d((0..series.len()).into_segmented(), y_min..y_top)
            .map_err(|e| backend(e.to_string()))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_label_formatter(&|seg| match seg {
                SegmentValue::CenterOf(i) => categories.get(*i).cloned().unwrap_or_default(),
                _ => String::new(),
            })
            .draw()
            .map_err(|e| backend(e.to_string()))?;

        for (i, s) in series.iter().enumerate() {
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(i), y_min),
                    (SegmentValue::Exact(i + 1), s.value),
                ],
                rgb_from_hex(&s.color).filled(),
            );
            bar.set_margin(0, 0, 10, 10);
            chart
                .draw_series(std::iter::once(bar))
                .map_err(|e| backend(e.to_string()))?;
        }

        root.present().map_err(|e| backend(e.to_string()))
    }
}

impl ChartRenderer for PngChartRenderer {
    fn render(&mut self, container_id: &str, spec: &ChartSpec) -> Result<RenderHandle, RenderError> {
        let (width, height) = (self.width, self.height);
        let mut buf = vec![0u8; (width * height * 3) as usize];

        match spec {
            ChartSpec::Pie {
                display, slices, ..
            } => {
                Self::draw_pie(&mut buf, width, height, slices, display.title.as_deref())?;
            }
            ChartSpec::Column {
                display,
                categories,
                series,
                y_min,
            } => {
                Self::draw_column(
                    &mut buf,
                    width,
                    height,
                    categories,
                    series,
                    *y_min,
                    display.title.as_deref(),
                )?;
            }
        }

        let png = Self::encode_png(buf, width, height)?;
        self.images.insert(container_id.to_string(), png);

        Ok(RenderHandle {
            container: container_id.to_string(),
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_angles_are_contiguous_and_cover_the_circle() {
        let ChartSpec::Pie { slices, .. } = ChartSpec::pie(&Totals::new(8, 1, 1)) else {
            panic!("expected pie spec");
        };
        let angles = slice_angles(&slices);
        assert_eq!(angles.len(), 3);
        assert!((angles[0].0 - -FRAC_PI_2).abs() < 1e-12);
        for pair in angles.windows(2) {
            assert!((pair[0].1 - pair[1].0).abs() < 1e-12);
        }
        let total: f64 = angles.iter().map(|(a, b)| b - a).sum();
        assert!((total - TAU).abs() < 1e-9);
    }

    #[test]
    fn zero_count_slice_has_zero_sweep() {
        let ChartSpec::Pie { slices, .. } = ChartSpec::pie(&Totals::new(5, 5, 0)) else {
            panic!("expected pie spec");
        };
        let angles = slice_angles(&slices);
        assert!((angles[2].1 - angles[2].0).abs() < 1e-12);
    }

    #[test]
    fn hex_colors_parse() {
        assert_eq!(rgb_from_hex("#81c784"), RGBColor(0x81, 0xc7, 0x84));
        assert_eq!(rgb_from_hex("#e57373"), RGBColor(0xe5, 0x73, 0x73));
        assert_eq!(rgb_from_hex("#ffb74d"), RGBColor(0xff, 0xb7, 0x4d));
        assert_eq!(rgb_from_hex("not a color"), RGBColor(0, 0, 0));
    }
}
