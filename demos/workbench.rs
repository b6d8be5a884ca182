use linsys::Workbench;

fn main() {
    let mut bench = Workbench::new();
    if let Err(err) = bench.configure(2, 2) {
        eprintln!("error: {err}");
        return;
    }

    let cells = [["1/2", "1/3", "1"], ["0.25", "-1", "2"]];
    for (eq, row) in cells.iter().enumerate() {
        for (var, text) in row[..2].iter().enumerate() {
            if let Err(err) = bench.set_coefficient(eq, var, text) {
                eprintln!("error: {err}");
                return;
            }
        }
        if let Err(err) = bench.set_constant(eq, row[2]) {
            eprintln!("error: {err}");
            return;
        }
    }

    match bench.solve() {
        Ok(values) => println!("{}", values.join(", ")),
        Err(err) => eprintln!("error: {err}"),
    }

    bench.reset();
    println!("after reset: configured = {}", bench.system().is_some());
}
