//! Data module - Totals input and validation

mod totals;

pub use totals::{Status, Totals, TotalsError};
