//! String-based convenience API for quick experimentation.

pub use crate::ui::{Limits, Workbench, format, parse, solve, solve_grid, solve_summary};
