//! Charts module - Chart specs and rendering backends

mod plotter;
mod renderer;
mod spec;

pub use plotter::StatusChartPlotter;
pub use renderer::{ChartRenderer, PngChartRenderer, RenderError, RenderHandle, StatusDashboard};
pub use spec::{
    status_color, ChartSpec, ColumnSeries, DisplayOptions, PieSlice, COLUMN_CONTAINER,
    PIE_CONTAINER,
};
