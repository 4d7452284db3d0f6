use crate::expr::Expression;

pub fn var(name: impl Into<String>) -> Expression {
    Expression::variable(name)
}

pub fn constant(value: f64) -> Expression {
    Expression::constant(value)
}

pub fn sum<I: IntoIterator<Item = Expression>>(terms: I) -> Expression {
    Expression::sum(terms)
}

pub fn product<I: IntoIterator<Item = Expression>>(factors: I) -> Expression {
    Expression::product(factors)
}

pub fn power(base: Expression, exponent: f64) -> Expression {
    Expression::power(base, exponent)
}
