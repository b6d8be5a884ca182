use linsys::prelude::solve;

fn main() {
    let rows = [
        ["2", "3", "8", "7"],
        ["1", "-4", "6", "1"],
        ["3", "-1", "-1", "8"],
    ];

    match solve(3, 3, &rows) {
        Ok(values) => {
            for (i, value) in values.iter().enumerate() {
                println!("x{} = {value}", i + 1);
            }
        }
        Err(err) => eprintln!("error: {err}"),
    }
}
