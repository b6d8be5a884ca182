use crate::error::{Result, SolveError};

/// Magnitude below which a matrix entry is treated as zero. Shared by pivot
/// selection, zero-row detection, free-variable detection and integer snapping
/// in the formatter.
pub const EPSILON: f64 = 1e-10;

pub fn is_negligible(value: f64) -> bool {
    value.abs() < EPSILON
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinearSolution {
    pub values: Vec<f64>,
    pub diagnostics: LinearDiagnostics,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearDiagnostics {
    pub rank: usize,
    pub pivot_rows: Vec<usize>,
    pub pivot_columns: Vec<usize>,
    pub free_columns: Vec<usize>,
    pub row_swaps: usize,
    /// Product of the pivots, sign-corrected for row swaps. Only set for square systems.
    pub determinant: Option<f64>,
}

/// Solve `coefficients * x = constants` by Gauss-Jordan elimination with partial
/// pivoting.
///
/// `coefficients` holds one row per equation, all of the same width. The inputs are
/// copied into a private augmented matrix; nothing the caller owns is modified.
///
/// A row that reduces to all-zero coefficients with a non-zero constant yields
/// [`SolveError::Inconsistent`]. Otherwise any variable column that never received a
/// pivot yields [`SolveError::Underdetermined`].
pub fn solve(coefficients: &[Vec<f64>], constants: &[f64]) -> Result<LinearSolution> {
    let mut matrix = Matrix::augmented(coefficients, constants)?;
    let n_vars = matrix.cols - 1;

    let mut diagnostics = LinearDiagnostics {
        determinant: (matrix.rows == n_vars).then_some(1.0),
        ..LinearDiagnostics::default()
    };

    eliminate(&mut matrix, n_vars, &mut diagnostics);
    diagnostics.free_columns = free_columns(n_vars, &diagnostics.pivot_columns);

    let values = extract(&matrix, n_vars)?;

    if !diagnostics.free_columns.is_empty() {
        log::debug!(
            "rank {} < {} variables, free columns {:?}",
            diagnostics.rank,
            n_vars,
            diagnostics.free_columns
        );
        return Err(SolveError::Underdetermined {
            free_columns: diagnostics.free_columns,
        });
    }

    Ok(LinearSolution {
        values,
        diagnostics,
    })
}

/// Largest `|a_i . x - b_i|` over all equations.
pub fn max_residual(coefficients: &[Vec<f64>], constants: &[f64], values: &[f64]) -> f64 {
    coefficients
        .iter()
        .zip(constants)
        .map(|(row, b)| {
            let lhs: f64 = row.iter().zip(values).map(|(a, x)| a * x).sum();
            (lhs - b).abs()
        })
        .fold(0.0, f64::max)
}

fn eliminate(matrix: &mut Matrix, n_vars: usize, diag: &mut LinearDiagnostics) {
    let rows = matrix.rows;
    let cols = matrix.cols;
    let mut row = 0;

    for col in 0..n_vars {
        if row >= rows {
            break;
        }

        // Strict comparison keeps the first of equally large candidates.
        let mut pivot_idx = row;
        let mut pivot_abs = matrix.get(row, col).abs();
        for r in row + 1..rows {
            let value = matrix.get(r, col).abs();
            if value > pivot_abs {
                pivot_abs = value;
                pivot_idx = r;
            }
        }

        if pivot_idx != row {
            matrix.swap_rows(row, pivot_idx);
            diag.row_swaps += 1;
            if let Some(det) = diag.determinant.as_mut() {
                *det = -*det;
            }
        }

        if is_negligible(pivot_abs) {
            log::debug!("column {col}: no usable pivot at or below row {row}");
            continue;
        }

        let pivot_value = matrix.get(row, col);
        if let Some(det) = diag.determinant.as_mut() {
            *det *= pivot_value;
        }
        log::trace!("column {col}: pivot {pivot_value} taken from row {pivot_idx} into row {row}");

        let row_start = row * cols;
        let (before, rest) = matrix.data.split_at_mut(row_start);
        let (pivot_row, after) = rest.split_at_mut(cols);
        let pivot_row: &[f64] = pivot_row;

        for other in before
            .chunks_exact_mut(cols)
            .chain(after.chunks_exact_mut(cols))
        {
            let factor = other[col] / pivot_value;
            if factor == 0.0 {
                continue;
            }
            for (cell, p) in other[col..].iter_mut().zip(&pivot_row[col..]) {
                *cell -= factor * p;
            }
        }

        diag.pivot_rows.push(row);
        diag.pivot_columns.push(col);
        row += 1;
    }

    diag.rank = diag.pivot_columns.len();
    if let Some(det) = diag.determinant.as_mut() {
        if diag.rank < n_vars {
            *det = 0.0;
        }
    }
}

fn extract(matrix: &Matrix, n_vars: usize) -> Result<Vec<f64>> {
    let mut values = vec![0.0; n_vars];
    for r in 0..matrix.rows {
        let row = matrix.row(r);
        match row[..n_vars].iter().position(|v| !is_negligible(*v)) {
            Some(col) => values[col] = row[n_vars] / row[col],
            None if !is_negligible(row[n_vars]) => {
                log::debug!("row {r} reduces to 0 = {}", row[n_vars]);
                return Err(SolveError::Inconsistent { row: r });
            }
            None => {}
        }
    }
    Ok(values)
}

fn free_columns(n_vars: usize, pivots: &[usize]) -> Vec<usize> {
    let mut is_pivot = vec![false; n_vars];
    for &p in pivots {
        is_pivot[p] = true;
    }
    (0..n_vars).filter(|&col| !is_pivot[col]).collect()
}

struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    fn augmented(coefficients: &[Vec<f64>], constants: &[f64]) -> Result<Self> {
        let rows = coefficients.len();
        let n_vars = coefficients.first().map_or(0, Vec::len);
        if rows == 0 || n_vars == 0 {
            return Err(SolveError::InvalidShape {
                variables: n_vars,
                equations: rows,
            });
        }
        if constants.len() != rows {
            return Err(SolveError::DimensionMismatch {
                expected: rows,
                got: constants.len(),
            });
        }

        let cols = n_vars + 1;
        let mut data = Vec::with_capacity(rows * cols);
        for (row, b) in coefficients.iter().zip(constants) {
            if row.len() != n_vars {
                return Err(SolveError::DimensionMismatch {
                    expected: n_vars,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
            data.push(*b);
        }
        Ok(Matrix { rows, cols, data })
    }

    fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let cols = self.cols;
        for offset in 0..cols {
            self.data.swap(a * cols + offset, b * cols + offset);
        }
    }

    fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }
}
