//! Status Charts - Test Status Summary Charts & Interactive Viewer
//!
//! Renders a pie chart and a column chart from aggregate pass/fail/warning
//! test counts supplied by an external test-run source.

pub mod charts;
pub mod data;
pub mod gui;
