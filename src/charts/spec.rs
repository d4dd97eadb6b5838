//! Chart Spec Module
//! Declarative chart configurations built from totals and consumed by
//! rendering backends. Specs are plain serializable values.

use crate::data::{Status, Totals};
use serde::{Deserialize, Serialize};

/// Container id for the pie chart.
pub const PIE_CONTAINER: &str = "statusPieChart";
/// Container id for the column chart.
pub const COLUMN_CONTAINER: &str = "statusBarChart";

/// Fixed color mapping: Passed green, Failed red, Warning amber.
pub fn status_color(status: Status) -> &'static str {
    match status {
        Status::Passed => "#81c784",
        Status::Failed => "#e57373",
        Status::Warning => "#ffb74d",
    }
}

/// Shared display options for the embedded-widget look.
///
/// Both charts suppress the title, the library credits and the hover
/// tooltip. Suppression is explicit configuration, not a backend default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    pub title: Option<String>,
    pub credits: bool,
    pub tooltip: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            title: None,
            credits: false,
            tooltip: false,
        }
    }
}

/// One pie slice: a category's share of the total plus display attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub name: String,
    /// Share of the total, 0.0 to 1.0.
    pub fraction: f64,
    /// Share of the total, 0.0 to 100.0.
    pub percent: f64,
    /// Hex fill color.
    pub color: String,
}

impl PieSlice {
    /// Data label as drawn next to the slice.
    pub fn data_label(&self) -> String {
        format!("{}: {:.1} %", self.name, self.percent)
    }
}

/// One column series: a single bar holding a category's raw count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSeries {
    pub name: String,
    pub value: u64,
    /// Hex fill color.
    pub color: String,
}

/// Declarative chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "chart", rename_all = "snake_case")]
pub enum ChartSpec {
    Pie {
        display: DisplayOptions,
        /// Clicking a slice selects it visually; no follow-on action.
        allow_point_select: bool,
        /// Empty when no tests were recorded (the explicit no-data state).
        slices: Vec<PieSlice>,
    },
    Column {
        display: DisplayOptions,
        categories: Vec<String>,
        series: Vec<ColumnSeries>,
        /// Y axis lower bound. No axis title.
        y_min: u64,
    },
}

impl ChartSpec {
    /// Build the pie spec: one slice per category with its share of the
    /// total. Zero totals produce an empty slice list rather than NaN
    /// fractions.
    pub fn pie(totals: &Totals) -> Self {
        let slices = if totals.has_data() {
            Status::ALL
                .iter()
                .map(|&status| PieSlice {
                    name: status.label().to_string(),
                    // has_data() guarantees the divisor is nonzero
                    fraction: totals.fraction(status).unwrap_or(0.0),
                    percent: totals.percent(status).unwrap_or(0.0),
                    color: status_color(status).to_string(),
                })
                .collect()
        } else {
            Vec::new()
        };

        ChartSpec::Pie {
            display: DisplayOptions::default(),
            allow_point_select: true,
            slices,
        }
    }

    /// Build the column spec: three categories, each series a single bar
    /// holding the raw count. Counts pass through unchanged.
    pub fn column(totals: &Totals) -> Self {
        ChartSpec::Column {
            display: DisplayOptions::default(),
            categories: Status::ALL.iter().map(|s| s.label().to_string()).collect(),
            series: Status::ALL
                .iter()
                .map(|&status| ColumnSeries {
                    name: status.label().to_string(),
                    value: totals.count(status),
                    color: status_color(status).to_string(),
                })
                .collect(),
            y_min: 0,
        }
    }

    /// Shared display options of this spec.
    pub fn display(&self) -> &DisplayOptions {
        match self {
            ChartSpec::Pie { display, .. } => display,
            ChartSpec::Column { display, .. } => display,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pie_slices(spec: &ChartSpec) -> &[PieSlice] {
        match spec {
            ChartSpec::Pie { slices, .. } => slices,
            _ => panic!("expected pie spec"),
        }
    }

    fn column_values(spec: &ChartSpec) -> Vec<u64> {
        match spec {
            ChartSpec::Column { series, .. } => series.iter().map(|s| s.value).collect(),
            _ => panic!("expected column spec"),
        }
    }

    #[test]
    fn pie_spec_eight_one_one() {
        let spec = ChartSpec::pie(&Totals::new(8, 1, 1));
        let slices = pie_slices(&spec);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].data_label(), "Passed: 80.0 %");
        assert_eq!(slices[1].data_label(), "Failed: 10.0 %");
        assert_eq!(slices[2].data_label(), "Warning: 10.0 %");
        let total: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn pie_spec_five_five_zero() {
        let spec = ChartSpec::pie(&Totals::new(5, 5, 0));
        let slices = pie_slices(&spec);
        assert_eq!(slices[0].data_label(), "Passed: 50.0 %");
        assert_eq!(slices[1].data_label(), "Failed: 50.0 %");
        assert_eq!(slices[2].data_label(), "Warning: 0.0 %");
    }

    #[test]
    fn pie_spec_zero_totals_is_no_data() {
        let spec = ChartSpec::pie(&Totals::new(0, 0, 0));
        assert!(pie_slices(&spec).is_empty());
    }

    #[test]
    fn column_spec_passes_raw_counts_through() {
        assert_eq!(column_values(&ChartSpec::column(&Totals::new(8, 1, 1))), [8, 1, 1]);
        assert_eq!(column_values(&ChartSpec::column(&Totals::new(0, 0, 0))), [0, 0, 0]);
        assert_eq!(column_values(&ChartSpec::column(&Totals::new(5, 5, 0))), [5, 5, 0]);
    }

    #[test]
    fn colors_are_stable_regardless_of_magnitude() {
        for totals in [Totals::new(1, 100, 10_000), Totals::new(9, 9, 9)] {
            let spec = ChartSpec::column(&totals);
            let ChartSpec::Column { series, .. } = &spec else {
                panic!("expected column spec");
            };
            assert_eq!(series[0].color, "#81c784");
            assert_eq!(series[1].color, "#e57373");
            assert_eq!(series[2].color, "#ffb74d");
        }
    }

    #[test]
    fn display_suppression_is_shared() {
        let totals = Totals::new(8, 1, 1);
        for spec in [ChartSpec::pie(&totals), ChartSpec::column(&totals)] {
            let display = spec.display();
            assert_eq!(display.title, None);
            assert!(!display.credits);
            assert!(!display.tooltip);
        }
    }

    #[test]
    fn spec_building_is_idempotent() {
        let totals = Totals::new(8, 1, 1);
        assert_eq!(ChartSpec::pie(&totals), ChartSpec::pie(&totals));
        assert_eq!(ChartSpec::column(&totals), ChartSpec::column(&totals));
    }
}
