use clap::Parser;
use symcalc::prelude::*;

/// Differentiate a polynomial `a_n x^n + ... + a_1 x + a_0` and evaluate it at a point.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Coefficients, highest degree first.
    #[arg(required = true, allow_negative_numbers = true)]
    coefficients: Vec<f64>,

    /// Evaluation point.
    #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
    at: f64,

    /// Number of times to differentiate.
    #[arg(short, long, default_value_t = 1)]
    order: usize,

    /// Render width for the pretty printer.
    #[arg(short, long, default_value_t = 80)]
    width: usize,
}

fn polynomial(coefficients: &[f64]) -> Expression {
    let degree = coefficients.len() - 1;
    sum(coefficients.iter().enumerate().map(|(i, &a)| {
        product([constant(a), power(var("x"), (degree - i) as f64)])
    }))
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    let mut stdout = termcolor::StandardStream::stdout(termcolor::ColorChoice::Auto);

    let mut f = polynomial(&args.coefficients).simplify();
    print!("f(x) = ");
    f.pretty_render_to(args.width, &mut stdout)?;
    println!();

    for order in 1..=args.order {
        f = f.derivative();
        print!("f^({order})(x) = ");
        f.pretty_render_to(args.width, &mut stdout)?;
        println!("    -> {}", f.evaluate(args.at));
    }
    Ok(())
}
