//! Single-variable expression trees: constructors, evaluation, simplification and derivatives.
//!
//! Role
//! - [`Expression`] is a closed tagged union over the five node kinds (variable, constant,
//!   sum, product, power). Every operation is an exhaustive `match`, so a new variant cannot
//!   be added without implementing all of them.
//! - Builders live in [`func`] and operator sugar in [`ops`]; rendering lives in [`pretty`].
//!
//! Semantics
//! - Trees are immutable: [`Expression::simplify`] and [`Expression::derivative`] always
//!   return a new tree and never touch the receiver.
//! - Every variable leaf binds to the *same* scalar in [`Expression::evaluate`], whatever its
//!   name. Names only matter for equality, rendering, and variable folding during
//!   simplification.
//! - Equality is structural: `x + 1` and `1 + x` are different trees.
//!
//! Example
//! ```
//! use symcalc::prelude::*;
//!
//! let x = var("x");
//! let f = x.clone() * x.clone() + x * 3.0;
//! assert_eq!(f.evaluate(2.0), 10.0);
//! assert_eq!(f.derivative().evaluate(2.0), 7.0);
//! ```
pub mod derivative;
pub mod eval;
pub mod func;
pub mod ops;
pub mod pretty;
pub mod simplify;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumDiscriminants, EnumIs};

/// A node of a single-variable expression tree.
///
/// Children are exclusively owned by their parent; there is no sharing and no cycles.
///
/// Equality semantics
/// - Two expressions are equal when they have the same variant and pairwise-equal children
///   in the same order. Constants compare with exact `f64` equality.
#[derive(Debug, Clone, PartialEq, EnumIs, EnumDiscriminants)]
#[strum_discriminants(derive(Hash, strum::EnumIter, strum::Display))]
#[strum_discriminants(name(ExprType))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expression {
    /// A named leaf. Evaluates to the evaluation point regardless of its name.
    Variable(String),
    /// A literal number.
    Constant(f64),
    /// An ordered n-ary sum.
    Sum(Vec<Expression>),
    /// An ordered n-ary product.
    Product(Vec<Expression>),
    /// `base ^ exponent` where the exponent is always a literal.
    Power {
        base: Box<Expression>,
        exponent: f64,
    },
}

impl Expression {
    /// Build a variable leaf.
    #[inline]
    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Variable(name.into())
    }

    /// Build a constant leaf.
    #[inline]
    pub fn constant(value: f64) -> Self {
        Expression::Constant(value)
    }

    /// The constant `0`.
    #[inline]
    pub fn zero() -> Self {
        Expression::Constant(0.0)
    }

    /// The constant `1`.
    #[inline]
    pub fn one() -> Self {
        Expression::Constant(1.0)
    }

    /// Build a sum over the given terms, keeping their order.
    pub fn sum<I: IntoIterator<Item = Expression>>(terms: I) -> Self {
        Expression::Sum(terms.into_iter().collect())
    }

    /// Build a product over the given factors, keeping their order.
    pub fn product<I: IntoIterator<Item = Expression>>(factors: I) -> Self {
        Expression::Product(factors.into_iter().collect())
    }

    /// Build `base ^ exponent`.
    #[inline]
    pub fn power(base: Expression, exponent: f64) -> Self {
        Expression::Power {
            base: Box::new(base),
            exponent,
        }
    }

    /// Return the discriminant identifying the kind of this node.
    #[inline]
    pub fn type_(&self) -> ExprType {
        ExprType::from(self)
    }

    /// Same as [`Expression::type_`]
    #[inline]
    pub fn r#type(&self) -> ExprType {
        self.type_()
    }

    /// Direct children of this node, in order. Leaves have none; a power has its base.
    pub fn children(&self) -> &[Expression] {
        match self {
            Expression::Variable(_) | Expression::Constant(_) => &[],
            Expression::Sum(children) | Expression::Product(children) => children,
            Expression::Power { base, .. } => std::slice::from_ref(base.as_ref()),
        }
    }

    /// Whether this node is exactly the constant `value`.
    #[inline]
    pub(crate) fn is_constant_value(&self, value: f64) -> bool {
        matches!(self, Expression::Constant(c) if *c == value)
    }
}

impl From<f64> for Expression {
    fn from(value: f64) -> Self {
        Expression::Constant(value)
    }
}

impl From<&str> for Expression {
    fn from(name: &str) -> Self {
        Expression::Variable(name.to_owned())
    }
}
