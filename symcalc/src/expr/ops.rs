//! Operator sugar for building expression trees.
//!
//! - `a + b` and `a * b` append to `a` when it already is a sum (resp. product), so chains
//!   like `a + b + c` build one flat n-ary node.
//! - `-a` is `(-1) * a` and `a - b` is `a + (-b)`.
//! - Every binary operator accepts an `f64` on either side, wrapped as a constant.
//! - Borrowed operands are cloned.
use std::ops::{Add, Mul, Neg, Sub};

use crate::expr::Expression;

impl Expression {
    /// Raise this expression to a literal exponent: `self ^ exponent`.
    #[inline]
    pub fn pow(self, exponent: f64) -> Expression {
        Expression::power(self, exponent)
    }

    fn append_term(self, rhs: Expression) -> Expression {
        match self {
            Expression::Sum(mut terms) => {
                terms.push(rhs);
                Expression::Sum(terms)
            }
            lhs => Expression::Sum(vec![lhs, rhs]),
        }
    }

    fn append_factor(self, rhs: Expression) -> Expression {
        match self {
            Expression::Product(mut factors) => {
                factors.push(rhs);
                Expression::Product(factors)
            }
            lhs => Expression::Product(vec![lhs, rhs]),
        }
    }

    fn subtract(self, rhs: Expression) -> Expression {
        self.append_term(-rhs)
    }
}

macro_rules! define_ops_expr {
    ($trait:ident, $method:ident, $combine:ident) => {
        impl $trait for Expression {
            type Output = Expression;

            fn $method(self, rhs: Expression) -> Self::Output {
                self.$combine(rhs)
            }
        }

        impl $trait<f64> for Expression {
            type Output = Expression;

            fn $method(self, rhs: f64) -> Self::Output {
                self.$combine(Expression::Constant(rhs))
            }
        }

        impl $trait<Expression> for f64 {
            type Output = Expression;

            fn $method(self, rhs: Expression) -> Self::Output {
                Expression::Constant(self).$combine(rhs)
            }
        }

        impl $trait<&Expression> for Expression {
            type Output = Expression;

            fn $method(self, rhs: &Expression) -> Self::Output {
                self.$combine(rhs.clone())
            }
        }

        impl $trait<Expression> for &Expression {
            type Output = Expression;

            fn $method(self, rhs: Expression) -> Self::Output {
                self.clone().$combine(rhs)
            }
        }

        impl $trait<&Expression> for &Expression {
            type Output = Expression;

            fn $method(self, rhs: &Expression) -> Self::Output {
                self.clone().$combine(rhs.clone())
            }
        }

        impl $trait<&Expression> for f64 {
            type Output = Expression;

            fn $method(self, rhs: &Expression) -> Self::Output {
                Expression::Constant(self).$combine(rhs.clone())
            }
        }

        impl $trait<f64> for &Expression {
            type Output = Expression;

            fn $method(self, rhs: f64) -> Self::Output {
                self.clone().$combine(Expression::Constant(rhs))
            }
        }
    };
}

define_ops_expr!(Add, add, append_term);
define_ops_expr!(Sub, sub, subtract);
define_ops_expr!(Mul, mul, append_factor);

impl Neg for Expression {
    type Output = Expression;

    fn neg(self) -> Self::Output {
        Expression::Product(vec![Expression::Constant(-1.0), self])
    }
}

impl Neg for &Expression {
    type Output = Expression;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}
