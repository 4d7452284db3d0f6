//! Symcalc: a single-variable symbolic expression engine.
//!
//! Expressions are immutable trees built from five node kinds: variables, constants, n-ary
//! sums, n-ary products, and powers with a literal exponent. Every tree supports
//! - numeric evaluation at a point ([`Expression::evaluate`]),
//! - a partial, rule-based simplification ([`Expression::simplify`]),
//! - symbolic differentiation ([`Expression::derivative`]), and
//! - rendering through [`std::fmt::Display`] or the colored [`PrettyExpr`](expr::pretty::PrettyExpr).
//!
//! There is exactly one independent variable: every variable leaf, whatever its name, is
//! bound to the same scalar during evaluation and differentiates to `1`.
//!
//! Example
//! ```
//! use symcalc::prelude::*;
//!
//! let x = var("x");
//! // (2x + 4)^5 * (3x + 7)^8
//! let f = (&x * 2.0 + 4.0).pow(5.0) * (&x * 3.0 + 7.0).pow(8.0);
//! let df = f.derivative();
//! assert!((df.evaluate(1.0) - 3.16224e12).abs() < 1e-3);
//!
//! let g = sum([var("x"), var("x")]).simplify();
//! assert_eq!(g, product([constant(2.0), var("x")]));
//! assert_eq!(g.to_string(), "2*x");
//! ```

/// Expressions API: the tree type, builders, and the evaluate/simplify/derivative operations.
pub mod expr;

pub use expr::{ExprType, Expression};

pub mod prelude {
    //! Convenient re-exports for end users.
    //!
    //! - [`Expression`] and its [`ExprType`] discriminant
    //! - Free-function builders from `func::*`
    //! - Pretty-printing via `PrettyExpr`
    pub use crate::expr::{ExprType, Expression, func::*, pretty::PrettyExpr};
}
