pub mod totals;

pub use totals::{Totals, comp_totals, compute_totals, elapsed_minutes};
