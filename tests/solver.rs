use approx::assert_relative_eq;
use linsys::{SolveError, max_residual, solve};

fn rows(data: &[&[f64]]) -> Vec<Vec<f64>> {
    data.iter().map(|r| r.to_vec()).collect()
}

#[test]
fn two_by_two_unique() {
    let a = rows(&[&[1.0, 1.0], &[1.0, -1.0]]);
    let b = [3.0, 1.0];
    let solution = solve(&a, &b).expect("unique solution");
    assert_relative_eq!(solution.values[0], 2.0, epsilon = 1e-12);
    assert_relative_eq!(solution.values[1], 1.0, epsilon = 1e-12);
    assert_eq!(solution.diagnostics.rank, 2);
    assert_relative_eq!(solution.diagnostics.determinant.unwrap(), -2.0, epsilon = 1e-12);
}

#[test]
fn four_by_four_unique() {
    let a = rows(&[
        &[1.0, 1.0, 1.0, 1.0],
        &[2.0, 3.0, -1.0, 4.0],
        &[-1.0, 1.0, 5.0, -2.0],
        &[3.0, -1.0, 2.0, 1.0],
    ]);
    let b = [10.0, 20.0, 3.0, 14.0];
    let solution = solve(&a, &b).expect("unique solution");
    assert!(max_residual(&a, &b, &solution.values) < 1e-9);
}

#[test]
fn dependent_rows_are_underdetermined() {
    let a = rows(&[&[2.0, 4.0], &[1.0, 2.0]]);
    let err = solve(&a, &[10.0, 5.0]).unwrap_err();
    assert_eq!(err, SolveError::Underdetermined { free_columns: vec![1] });
    assert_eq!(
        err.to_string(),
        "underdetermined system (infinitely many solutions)"
    );
}

#[test]
fn contradictory_rows_are_inconsistent() {
    let a = rows(&[&[1.0, 1.0], &[1.0, 1.0]]);
    let err = solve(&a, &[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, SolveError::Inconsistent { row: 1 }));
    assert_eq!(err.to_string(), "inconsistent system (no solution)");
}

#[test]
fn zero_row_with_constant_wins_over_other_rows() {
    let a = rows(&[&[1.0, 0.0], &[0.0, 1.0], &[0.0, 0.0]]);
    let err = solve(&a, &[4.0, 5.0, 1.0]).unwrap_err();
    assert!(matches!(err, SolveError::Inconsistent { .. }));
}

#[test]
fn fewer_equations_than_variables() {
    let a = rows(&[&[1.0, 2.0, 3.0]]);
    let err = solve(&a, &[6.0]).unwrap_err();
    assert_eq!(
        err,
        SolveError::Underdetermined {
            free_columns: vec![1, 2]
        }
    );
}

#[test]
fn unused_variable_is_free() {
    let a = rows(&[&[1.0, 0.0], &[2.0, 0.0]]);
    let err = solve(&a, &[1.0, 2.0]).unwrap_err();
    assert_eq!(err, SolveError::Underdetermined { free_columns: vec![1] });
}

#[test]
fn variable_solving_to_zero_is_not_free() {
    let a = rows(&[&[1.0, 1.0], &[1.0, -1.0]]);
    let solution = solve(&a, &[2.0, 2.0]).expect("unique solution");
    assert_relative_eq!(solution.values[0], 2.0, epsilon = 1e-12);
    assert_eq!(solution.values[1].abs(), 0.0);
}

#[test]
fn overdetermined_but_consistent() {
    let a = rows(&[&[1.0, 1.0], &[1.0, -1.0], &[2.0, 2.0]]);
    let b = [3.0, 1.0, 6.0];
    let solution = solve(&a, &b).expect("consistent system");
    assert_eq!(solution.diagnostics.rank, 2);
    assert_eq!(solution.diagnostics.determinant, None);
    assert!(max_residual(&a, &b, &solution.values) < 1e-9);
}

#[test]
fn pivoting_swaps_in_the_largest_entry() {
    let a = rows(&[&[1e-12, 1.0], &[1.0, 1.0]]);
    let b = [1.0, 2.0];
    let solution = solve(&a, &b).expect("unique solution");
    assert_eq!(solution.diagnostics.row_swaps, 1);
    assert_relative_eq!(solution.values[0], 1.0, epsilon = 1e-9);
    assert_relative_eq!(solution.values[1], 1.0, epsilon = 1e-9);
}

#[test]
fn single_variable() {
    let solution = solve(&rows(&[&[2.0]]), &[1.0]).expect("unique solution");
    assert_eq!(solution.values, vec![0.5]);
}

#[test]
fn repeated_solves_are_identical() {
    let a = rows(&[&[0.3, -2.0, 7.1], &[4.0, 0.5, -1.0], &[-4.0, 1.5, 2.0]]);
    let b = [1.0, 2.0, 3.0];
    let first = solve(&a, &b).expect("unique solution");
    let second = solve(&a, &b).expect("unique solution");
    assert_eq!(first, second);
}

#[test]
fn caller_data_is_untouched() {
    let a = rows(&[&[2.0, 1.0], &[1.0, 3.0]]);
    let b = vec![3.0, 5.0];
    let before = (a.clone(), b.clone());
    solve(&a, &b).expect("unique solution");
    assert_eq!((a, b), before);
}

#[test]
fn shape_errors() {
    assert!(matches!(
        solve(&[], &[]),
        Err(SolveError::InvalidShape { .. })
    ));
    assert!(matches!(
        solve(&[vec![]], &[1.0]),
        Err(SolveError::InvalidShape { .. })
    ));
    assert_eq!(
        solve(&rows(&[&[1.0]]), &[1.0, 2.0]),
        Err(SolveError::DimensionMismatch {
            expected: 1,
            got: 2
        })
    );
}
