use crate::error::{Result, SolveError};
use crate::solver::{LinearDiagnostics, LinearSolution};

use super::number::format_value;

/// `x1 = ...` lines, one per variable, 1-based like the input grid.
pub fn pretty_solution(solution: &LinearSolution) -> Vec<String> {
    solution
        .values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("x{} = {}", i + 1, format_value(*v)))
        .collect()
}

/// Render a solve outcome into human-readable lines for CLI/demos.
pub fn pretty_solve_result(result: &Result<LinearSolution>) -> Vec<String> {
    match result {
        Ok(solution) => {
            let mut lines = vec!["Unique solution:".to_string()];
            lines.extend(pretty_solution(solution));
            push_diag(&mut lines, &solution.diagnostics);
            lines
        }
        Err(err) => {
            let mut lines = vec![format!("Error: {err}")];
            match err {
                SolveError::Inconsistent { row } => {
                    lines.push(format!("Inconsistent reduced row index: {row}"));
                }
                SolveError::Underdetermined { free_columns } => {
                    let names: Vec<String> =
                        free_columns.iter().map(|c| format!("x{}", c + 1)).collect();
                    lines.push(format!("Free variables: {}", names.join(", ")));
                }
                _ => {}
            }
            lines
        }
    }
}

fn push_diag(lines: &mut Vec<String>, diag: &LinearDiagnostics) {
    lines.push(format!("Rank: {}", diag.rank));
    if let Some(det) = diag.determinant {
        lines.push(format!("Determinant: {}", format_value(det)));
    }
    if !diag.pivot_columns.is_empty() {
        lines.push(format!("Pivot columns: {:?}", diag.pivot_columns));
    }
}
