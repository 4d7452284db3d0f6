//! Partial, rule-based simplification.
//!
//! The rule set is deliberately small and is *not* a canonical form:
//! - Sums and products fold their constant children into one leading constant, merge
//!   repeated variables (`x + x` into `2*x`, `x * x` into `x^2`) and splice nested sums
//!   (resp. products) into the parent.
//! - Powers only know `f^0 = 1` and `f^1 = f`. The base of `f^1` is returned as-is, without
//!   being simplified itself, and nested powers are never collapsed.
//! - Nothing is reordered beyond the bucket order described on [`Expression::simplify`], so
//!   structurally different but equivalent inputs can simplify to different trees.
use smallvec::SmallVec;

use crate::expr::Expression;

/// Per-name occurrence counts, kept in order of first appearance.
#[derive(Default)]
struct NameCounts {
    counts: SmallVec<[(String, usize); 4]>,
}

impl NameCounts {
    fn bump(&mut self, name: String) {
        match self.counts.iter_mut().find(|(seen, _)| *seen == name) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((name, 1)),
        }
    }
}

impl IntoIterator for NameCounts {
    type Item = (String, usize);
    type IntoIter = smallvec::IntoIter<[(String, usize); 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

/// Buckets filled while scanning the simplified children of a sum or a product.
struct Buckets {
    constant: Option<f64>,
    names: NameCounts,
    rest: Vec<Expression>,
}

impl Buckets {
    /// Sort simplified children into buckets. `splice` yields the children of a nested node
    /// of the same kind as the parent, `fold` merges a constant into the accumulator.
    fn collect(
        children: impl Iterator<Item = Expression>,
        identity: f64,
        splice: fn(Expression) -> Result<Vec<Expression>, Expression>,
        fold: fn(f64, f64) -> f64,
    ) -> Self {
        let mut buckets = Buckets {
            constant: None,
            names: NameCounts::default(),
            rest: Vec::new(),
        };
        for child in children {
            match splice(child) {
                Ok(nested) => nested
                    .into_iter()
                    .for_each(|grandchild| buckets.push(grandchild, identity, fold)),
                Err(child) => buckets.push(child, identity, fold),
            }
        }
        buckets
    }

    fn push(&mut self, child: Expression, identity: f64, fold: fn(f64, f64) -> f64) {
        match child {
            Expression::Constant(value) => {
                let acc = self.constant.get_or_insert(identity);
                *acc = fold(*acc, value);
            }
            Expression::Variable(name) => self.names.bump(name),
            other => self.rest.push(other),
        }
    }
}

/// Unwrap a singleton list, otherwise wrap the list with `wrap`.
fn collapse(mut items: Vec<Expression>, wrap: fn(Vec<Expression>) -> Expression) -> Expression {
    match items.len() {
        1 => items.swap_remove(0),
        _ => wrap(items),
    }
}

fn splice_sum(child: Expression) -> Result<Vec<Expression>, Expression> {
    match child {
        Expression::Sum(terms) => Ok(terms),
        other => Err(other),
    }
}

fn splice_product(child: Expression) -> Result<Vec<Expression>, Expression> {
    match child {
        Expression::Product(factors) => Ok(factors),
        other => Err(other),
    }
}

impl Expression {
    /// Return a reduced, evaluation-equivalent copy of this expression.
    ///
    /// Rules per variant:
    /// - constants and variables are returned unchanged;
    /// - a sum becomes `[constant] ++ [other terms] ++ [c*name for each variable]`, where the
    ///   constant only appears if a constant term was present and is dropped when it is `0`
    ///   and other terms remain;
    /// - a product becomes `[constant] ++ [other factors] ++ [name^c for each variable]`,
    ///   collapses to `0` when the constants multiply to `0`, and drops a leading `1` when
    ///   other factors remain;
    /// - `f^0` becomes `1`, `f^1` becomes `f` (unsimplified), any other power is unchanged.
    ///
    /// A sum or product left with a single term is replaced by that term.
    pub fn simplify(&self) -> Expression {
        match self {
            Expression::Variable(_) | Expression::Constant(_) => self.clone(),
            Expression::Sum(terms) => simplify_sum(terms),
            Expression::Product(factors) => simplify_product(factors),
            Expression::Power { base, exponent } => simplify_power(base, *exponent),
        }
    }
}

fn simplify_sum(terms: &[Expression]) -> Expression {
    let Buckets {
        constant,
        names,
        mut rest,
    } = Buckets::collect(
        terms.iter().map(Expression::simplify),
        0.0,
        splice_sum,
        |acc, value| acc + value,
    );

    let mut result = Vec::with_capacity(rest.len() + 1);
    result.extend(constant.map(Expression::Constant));
    result.append(&mut rest);
    result.extend(
        names
            .into_iter()
            .map(|(name, count)| {
                Expression::product([
                    Expression::Constant(count as f64),
                    Expression::Variable(name),
                ])
                .simplify()
            })
            .filter(|term| !term.is_constant_value(0.0)),
    );

    if constant == Some(0.0) && result.len() > 1 {
        result.remove(0);
    }
    collapse(result, Expression::Sum)
}

fn simplify_product(factors: &[Expression]) -> Expression {
    let Buckets {
        constant,
        names,
        mut rest,
    } = Buckets::collect(
        factors.iter().map(Expression::simplify),
        1.0,
        splice_product,
        |acc, value| acc * value,
    );

    // Multiplication by zero dominates every other factor.
    if constant == Some(0.0) {
        return Expression::zero();
    }

    let mut result = Vec::with_capacity(rest.len() + 1);
    result.extend(constant.map(Expression::Constant));
    result.append(&mut rest);
    result.extend(
        names
            .into_iter()
            .map(|(name, count)| {
                Expression::power(Expression::Variable(name), count as f64).simplify()
            })
            .filter(|factor| !factor.is_constant_value(1.0)),
    );

    if constant == Some(1.0) && result.len() > 1 {
        result.remove(0);
    }
    collapse(result, Expression::Product)
}

fn simplify_power(base: &Expression, exponent: f64) -> Expression {
    if exponent == 0.0 {
        Expression::one()
    } else if exponent == 1.0 {
        base.clone()
    } else {
        Expression::power(base.clone(), exponent)
    }
}
