//! Solve systems of linear equations entered as decimal or fraction text, and render
//! the solution as grouped integers or reduced fractions.

pub mod error;
pub mod format;
pub mod parser;
pub mod prelude;
pub mod solver;
pub mod system;
pub mod ui;

pub use error::{ParseError, Result, SolveError};
pub use format::{
    FormatOptions, approximate_rational, exact_text, format_value, format_value_with,
    format_values, group_digits, pretty_solution, pretty_solve_result,
};
pub use parser::{parse_rational, parse_value};
pub use solver::{EPSILON, LinearDiagnostics, LinearSolution, is_negligible, max_residual, solve};
pub use system::{Coefficient, Equation, Rational, System};
pub use ui::{Limits, Workbench, solve_grid};
