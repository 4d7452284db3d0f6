//! Symbolic differentiation with respect to the single shared variable.
use log::{debug, trace};

use crate::expr::Expression;

impl Expression {
    /// Return the simplified derivative of this expression.
    ///
    /// Every variable leaf is the same variable, so `d/dx y == 1` for any name. Powers are
    /// differentiated with the chain rule for a literal exponent, products with the
    /// generalized product rule over the simplified factors, accumulated left to right.
    pub fn derivative(&self) -> Expression {
        match self {
            Expression::Constant(_) => Expression::zero(),
            Expression::Variable(_) => Expression::one(),
            Expression::Sum(terms) => {
                Expression::Sum(terms.iter().map(Expression::derivative).collect()).simplify()
            }
            Expression::Product(_) => match self.simplify() {
                Expression::Product(factors) => product_rule(&factors),
                collapsed => {
                    debug!("product simplified to {collapsed}, differentiating that instead");
                    collapsed.derivative()
                }
            },
            Expression::Power { .. } => match self.simplify() {
                Expression::Power { base, exponent } => Expression::product([
                    Expression::Constant(exponent),
                    base.derivative(),
                    Expression::power(*base, exponent - 1.0),
                ])
                .simplify(),
                collapsed => {
                    debug!("power simplified to {collapsed}, differentiating that instead");
                    collapsed.derivative()
                }
            },
        }
    }
}

/// Generalized product rule over already-simplified factors `f_0 .. f_{n-1}`.
///
/// Keeps a running derivative `D` and prefix product `P`, starting from the two-factor rule
/// on `f_0, f_1`, then for every further factor `f_k`:
/// `D <- D * f_k + P * f_k'` and `P <- f_0 * .. * f_k`. Every intermediate is simplified
/// before the next step, left to right.
fn product_rule(factors: &[Expression]) -> Expression {
    let [first, second, rest @ ..] = factors else {
        // A simplified product with fewer than two factors is the empty product.
        return Expression::zero();
    };

    let mut derivative = Expression::sum([
        Expression::product([first.derivative(), second.clone()]),
        Expression::product([first.clone(), second.derivative()]),
    ])
    .simplify();
    let mut prefix = Expression::product([first.clone(), second.clone()]).simplify();

    for (offset, factor) in rest.iter().enumerate() {
        let index = offset + 2;
        derivative = Expression::sum([
            Expression::product([derivative, factor.clone()]),
            Expression::product([prefix, factor.derivative()]),
        ])
        .simplify();
        prefix = Expression::Product(factors[..=index].to_vec()).simplify();
        trace!("product rule after factor {index}: D = {derivative}, P = {prefix}");
    }

    derivative.simplify()
}
