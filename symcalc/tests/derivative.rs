use std::f64::consts::{E, PI};

use symcalc::prelude::*;

const VALUES: [f64; 18] = [
    1.0,
    2.0,
    3.0,
    4.0,
    5.0,
    6.0,
    7.0,
    8.0,
    1.9,
    2.9,
    29992.209992,
    100.0,
    -11.0,
    -12.0,
    0.0,
    -12.092,
    PI,
    E,
];

const NAMES: [&str; 5] = ["x", "y", "z", "myVar", "my_var"];

fn assert_close(got: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (got - expected).abs() <= tolerance,
        "expected {expected}, got {got}"
    );
}

#[test]
fn constant_derivative_is_zero() {
    for c in VALUES {
        assert_eq!(constant(c).derivative(), constant(0.0));
    }
}

#[test]
fn variable_derivative_is_one_whatever_its_name() {
    for name in NAMES {
        assert_eq!(var(name).derivative(), constant(1.0));
    }
}

#[test]
fn sum_derivative() {
    for a in VALUES {
        assert_eq!(sum([constant(a)]).derivative(), constant(0.0));
        for b in VALUES {
            assert_eq!(sum([constant(a), constant(b)]).derivative(), constant(0.0));
        }
    }
    for name in NAMES {
        assert_eq!(sum([var(name)]).derivative(), constant(1.0));
        for a in VALUES {
            for b in VALUES {
                assert_eq!(
                    sum([constant(a), var(name), constant(b)]).derivative(),
                    constant(1.0)
                );
            }
        }
    }
}

#[test]
fn product_derivative() {
    for a in VALUES {
        assert_eq!(product([constant(a)]).derivative(), constant(0.0));
        for b in VALUES {
            assert_eq!(
                product([constant(a), constant(b)]).derivative(),
                constant(0.0)
            );
        }
    }
    for name in NAMES {
        assert_eq!(product([var(name)]).derivative(), constant(1.0));
        for a in VALUES {
            for b in VALUES {
                assert_eq!(
                    product([constant(a), var(name), constant(b)]).derivative(),
                    constant(a * b)
                );
            }
        }
        assert_eq!(
            product([var(name), var(name)]).derivative(),
            product([constant(2.0), var(name)])
        );
    }
}

#[test]
fn product_of_distinct_names_uses_the_shared_variable() {
    // d/dx (x * y) with y bound to the same scalar as x
    let d = product([var("x"), var("y")]).derivative();
    assert_eq!(d, sum([var("y"), var("x")]));
    assert_eq!(d.evaluate(3.0), 6.0);
}

#[test]
fn product_rule_over_many_factors() {
    // (x + 1)(x + 2)(x + 3) has derivative 3x^2 + 12x + 11
    let f = product([
        sum([var("x"), constant(1.0)]),
        sum([var("x"), constant(2.0)]),
        sum([var("x"), constant(3.0)]),
    ]);
    let d = f.derivative();
    for x in [-3.0, -1.0, 0.0, 1.0, 2.0, 10.0] {
        assert_eq!(d.evaluate(x), 3.0 * x * x + 12.0 * x + 11.0);
    }

    // Four factors, with a constant mixed in: 5 (x + 1) x^2 (x - 2)
    let g = product([
        sum([var("x"), constant(1.0)]),
        constant(5.0),
        power(var("x"), 2.0),
        sum([var("x"), constant(-2.0)]),
    ]);
    let dg = g.derivative();
    // 5 (x^4 - x^3 - 2x^2)' = 5 (4x^3 - 3x^2 - 4x)
    for x in [-2.0, -1.0, 0.0, 0.5, 1.0, 3.0] {
        let expected = 5.0 * (4.0 * x * x * x - 3.0 * x * x - 4.0 * x);
        assert_close(dg.evaluate(x), expected);
    }
}

#[test]
fn empty_nodes_have_trivial_derivatives() {
    assert_eq!(Expression::Product(vec![]).derivative(), constant(0.0));
    assert_eq!(Expression::Sum(vec![]).derivative(), Expression::Sum(vec![]));
    assert_eq!(Expression::Sum(vec![]).derivative().evaluate(1.0), 0.0);
}

#[test]
fn power_chain_rule() {
    assert_eq!(
        power(var("x"), 2.0).derivative(),
        product([constant(2.0), var("x")])
    );
    assert_eq!(
        power(var("x"), 3.0).derivative(),
        product([constant(3.0), power(var("x"), 2.0)])
    );
    assert_eq!(power(var("x"), 0.5).derivative().evaluate(4.0), 0.25);

    // (3x + 1)^2 -> 2 * 3 * (3x + 1)
    let f = power(sum([product([constant(3.0), var("x")]), constant(1.0)]), 2.0);
    let d = f.derivative();
    for x in [-1.0, 0.0, 2.0] {
        assert_eq!(d.evaluate(x), 6.0 * (3.0 * x + 1.0));
    }
}

#[test]
fn collapsing_powers_delegate() {
    assert_eq!(power(var("x"), 1.0).derivative(), constant(1.0));
    assert_eq!(
        power(sum([var("x"), var("x")]), 0.0).derivative(),
        constant(0.0)
    );
    assert_eq!(
        power(product([constant(4.0), var("x")]), 1.0).derivative(),
        constant(4.0)
    );
}

#[test]
fn polynomial_derivative_structure() {
    let x = || var("x");
    for a1 in VALUES {
        for a2 in VALUES {
            for a3 in VALUES {
                let polynomial = sum([
                    product([constant(a1), power(x(), 2.0)]),
                    product([constant(a2), x()]),
                    constant(a3),
                ]);
                let expected = if a1 != 0.0 && a2 != 0.0 {
                    sum([constant(a2), product([constant(2.0 * a1), x()])])
                } else if a1 == 0.0 && a2 != 0.0 {
                    constant(a2)
                } else if a1 != 0.0 && a2 == 0.0 {
                    product([constant(2.0 * a1), x()])
                } else {
                    constant(0.0)
                };
                assert_eq!(
                    polynomial.derivative(),
                    expected,
                    "a1 = {a1}, a2 = {a2}, a3 = {a3}"
                );
            }
        }
    }
}

#[test]
fn derivative_of_product_of_powers() {
    let x = var("x");
    let f = (&x * 2.0 + 4.0).pow(5.0) * (&x * 3.0 + 7.0).pow(8.0);
    assert_close(f.derivative().evaluate(1.0), 3.16224e12);
}

#[test]
fn derivative_of_fractional_powers() {
    let x = var("x");
    let f = x.clone().pow(2.5) * 2.5
        + x.clone().pow(2.4) * 2.4
        + x.clone().pow(2.3) * 2.3
        + x.clone().pow(2.2) * 2.2
        + x.clone().pow(2.1) * 2.1
        + x.clone().pow(2.0) * 2.0;
    assert_close(f.derivative().evaluate(2.0), 74.47635057089805);

    let g = x.clone().pow(2.5) * 2.5 + x.clone().pow(2.4) * 2.4 + x.clone().pow(2.3) * 2.3
        - x.clone().pow(2.2) * 2.2
        - x.clone().pow(2.1) * 2.1
        + x.clone().pow(2.0) * 2.0;
    assert_close(g.derivative().evaluate(2.0), 33.33146653901524);
}

#[test]
fn derivative_of_a_power_of_a_polynomial_is_exact() {
    let x = var("x");
    let f = (x.clone().pow(4.0)
        + x.clone().pow(3.0) * 3.0
        + x.clone().pow(2.0) * 7.0
        + &x * 2.0
        + 10.0)
        .pow(4.0);
    assert_eq!(f.derivative().evaluate(1.0), 1411372.0);

    let g = (&x * &x * &x * &x + (&x * &x * &x) * 3.0 + (&x * &x) * 7.0 + &x * 2.0 + 10.0)
        .pow(4.0);
    assert_eq!(g.derivative().evaluate(1.0), 1411372.0);
}

#[test]
fn derivative_leaves_receiver_untouched() {
    let f = product([var("x"), sum([var("x"), constant(1.0)]), constant(2.0)]);
    let snapshot = f.clone();
    let _ = f.derivative();
    assert_eq!(f, snapshot);
}

#[test]
fn second_derivative() {
    let x = var("x");
    // x^3 + 2x^2 -> 6x + 4
    let f = x.clone().pow(3.0) + x.clone().pow(2.0) * 2.0;
    let d2 = f.derivative().derivative();
    for point in [-1.0, 0.0, 1.5, 4.0] {
        assert_eq!(d2.evaluate(point), 6.0 * point + 4.0);
    }
}
