//! Formatting helpers for rendering solution values and solver output.

pub mod number;
pub mod solve;

pub use number::{
    DEFAULT_MAX_DENOMINATOR, FormatOptions, approximate_rational, exact_text, format_value,
    format_value_with, format_values, group_digits,
};
pub use solve::{pretty_solution, pretty_solve_result};
