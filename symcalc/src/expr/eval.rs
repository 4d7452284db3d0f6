//! Numeric evaluation at a single point.
use crate::expr::Expression;

impl Expression {
    /// Evaluate this expression with every variable leaf bound to `x`.
    ///
    /// Evaluation never fails. Out-of-domain operations follow `f64` semantics: a negative
    /// base raised to a fractional exponent yields NaN, and a zero base raised to a negative
    /// exponent yields infinity. Such values propagate through the rest of the tree.
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Expression::Variable(_) => x,
            Expression::Constant(value) => *value,
            Expression::Sum(terms) => terms.iter().fold(0.0, |acc, term| acc + term.evaluate(x)),
            Expression::Product(factors) => factors
                .iter()
                .fold(1.0, |acc, factor| acc * factor.evaluate(x)),
            Expression::Power { base, exponent } => base.evaluate(x).powf(*exponent),
        }
    }
}
