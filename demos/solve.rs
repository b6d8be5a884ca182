use linsys::{pretty_solve_result, solve};

fn main() {
    let coefficients = vec![vec![2.0, 3.0], vec![1.0, -4.0]];
    let constants = [7.0, 1.0];

    let result = solve(&coefficients, &constants);
    for line in pretty_solve_result(&result) {
        println!("{line}");
    }
}
