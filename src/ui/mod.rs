//! String-based helpers: solve a grid of cell text in one call, or drive a
//! [`Workbench`] session cell by cell.

mod workbench;

use crate::error::{ParseError, Result, SolveError};
use crate::format::{format_value, format_values, pretty_solve_result};
use crate::parser::parse_value;
use crate::solver::LinearSolution;
use crate::system::System;

pub use workbench::{DEFAULT_MAX_DIMENSION, Limits, Workbench};

pub fn parse(input: &str) -> std::result::Result<f64, ParseError> {
    parse_value(input)
}

pub fn format(value: f64) -> String {
    format_value(value)
}

/// Solve `equation_count` rows of text, each holding `variable_count` coefficients
/// followed by the constant.
pub fn solve_grid<R, S>(
    variable_count: usize,
    equation_count: usize,
    rows: &[R],
) -> Result<LinearSolution>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    if rows.len() != equation_count {
        return Err(SolveError::DimensionMismatch {
            expected: equation_count,
            got: rows.len(),
        });
    }
    System::from_rows(variable_count, rows)?.solve()
}

pub fn solve<R, S>(variable_count: usize, equation_count: usize, rows: &[R]) -> Result<Vec<String>>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let solution = solve_grid(variable_count, equation_count, rows)?;
    Ok(format_values(&solution.values))
}

pub fn solve_summary<R, S>(variable_count: usize, equation_count: usize, rows: &[R]) -> Vec<String>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    pretty_solve_result(&solve_grid(variable_count, equation_count, rows))
}
