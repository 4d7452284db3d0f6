use symcalc::prelude::*;

fn main() {
    let x = var("x");

    // x^4 + 3x^3 + 7x^2 + 2x + 10, raised to the 4th power
    let inner = x.clone().pow(4.0)
        + x.clone().pow(3.0) * 3.0
        + x.clone().pow(2.0) * 7.0
        + &x * 2.0
        + 10.0;
    let f = inner.pow(4.0);

    f.pretty_print().unwrap();
    println!();
    f.derivative().pretty_print().unwrap();
    println!();
}
