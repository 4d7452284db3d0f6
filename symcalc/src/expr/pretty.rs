//! RcDoc-based pretty-printer with termcolor annotations for [`Expression`].
//!
//! Role
//! - Convert an expression into an annotated document suitable for width-aware rendering.
//! - Provide colored output for terminals (TTY-aware) and plain strings for logs/tests.
//!
//! Format
//! - Variables render as their name and constants with `f64`'s `Display` (`2`, `1.9`).
//! - Sums render as `a+b+c`, products as `a*b*c`.
//! - Powers render as `(base)^exponent`.
//! - A child of a sum or product is parenthesized when it binds looser than its parent
//!   (`(x+1)*2`) or is a nested node of the same kind (`x+(y+1)`), so distinct trees never
//!   share a rendering.
//!
//! [`std::fmt::Display`] for [`Expression`] goes through the same document, so the plain
//! rendering and `to_string()` always agree.
use std::io::{self, Write};

use pretty::{FmtWrite, RcDoc, RenderAnnotated};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::expr::{ExprType, Expression};

/// Styles used to annotate parts of the pretty-printed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Parentheses are colored by nesting depth so matching pairs share a color.
    Paren(u8),
    Operator, // +, *, ^
    Ident,    // variables
    Number,   // constants and exponents
}

impl Style {
    fn to_color_spec(self) -> ColorSpec {
        let mut s = ColorSpec::new();
        match self {
            Style::Paren(depth) => {
                let fg = match depth % 6 {
                    0 => Color::Blue,
                    1 => Color::Green,
                    2 => Color::White,
                    3 => Color::Yellow,
                    4 => Color::Red,
                    5 => Color::Magenta,
                    _ => unreachable!(),
                };
                s.set_fg(Some(fg)).set_dimmed(true);
            }
            Style::Operator => {
                s.set_fg(Some(Color::Yellow)).set_bold(true);
            }
            Style::Ident => {
                s.set_fg(Some(Color::Green)).set_bold(true);
            }
            Style::Number => {
                s.set_fg(Some(Color::Magenta));
            }
        }
        s
    }
}

fn op(s: &'static str) -> RcDoc<'static, Style> {
    RcDoc::as_string(s).annotate(Style::Operator)
}

#[inline]
fn lparen(depth: u8) -> RcDoc<'static, Style> {
    RcDoc::as_string("(").annotate(Style::Paren(depth))
}

#[inline]
fn rparen(depth: u8) -> RcDoc<'static, Style> {
    RcDoc::as_string(")").annotate(Style::Paren(depth))
}

fn ident(name: &str) -> RcDoc<'static, Style> {
    RcDoc::as_string(name).annotate(Style::Ident)
}

fn number(value: f64) -> RcDoc<'static, Style> {
    RcDoc::as_string(value).annotate(Style::Number)
}

fn precedence(ty: ExprType) -> u8 {
    match ty {
        ExprType::Sum => 1,
        ExprType::Product => 2,
        ExprType::Power => 3,
        ExprType::Variable | ExprType::Constant => 255,
    }
}

/// Sums and products never absorb a nested node of their own kind.
#[inline]
fn requires_parens(child: ExprType, parent: ExprType) -> bool {
    let (child_prec, parent_prec) = (precedence(child), precedence(parent));
    parent_prec > child_prec
        || (parent_prec == child_prec && matches!(child, ExprType::Sum | ExprType::Product))
}

fn to_doc_parenthesized_with_depth(
    e: &Expression,
    parent: ExprType,
    depth: u8,
) -> RcDoc<'static, Style> {
    if requires_parens(e.type_(), parent) {
        lparen(depth)
            .append(to_doc_with_depth(e, depth.wrapping_add(1)))
            .append(rparen(depth))
            .group()
    } else {
        to_doc_with_depth(e, depth)
    }
}

fn joined(
    children: &[Expression],
    parent: ExprType,
    sep: &'static str,
    depth: u8,
) -> RcDoc<'static, Style> {
    RcDoc::intersperse(
        children
            .iter()
            .map(|child| to_doc_parenthesized_with_depth(child, parent, depth)),
        op(sep),
    )
    .group()
}

/// Depth-aware rendering that colors parentheses by nesting level.
fn to_doc_with_depth(e: &Expression, depth: u8) -> RcDoc<'static, Style> {
    match e {
        Expression::Variable(name) => ident(name),
        Expression::Constant(value) => number(*value),
        Expression::Sum(terms) => joined(terms, ExprType::Sum, "+", depth),
        Expression::Product(factors) => joined(factors, ExprType::Product, "*", depth),
        Expression::Power { base, exponent } => lparen(depth)
            .append(to_doc_with_depth(base, depth.wrapping_add(1)))
            .append(rparen(depth))
            .append(op("^"))
            .append(number(*exponent))
            .group(),
    }
}

/// Forwards rendered text to a termcolor sink, keeping a stack of active styles so that
/// closing an inner annotation restores the enclosing color instead of clearing it.
struct StyledSink<'w, W: WriteColor> {
    out: &'w mut W,
    active: Vec<Style>,
}

impl<'w, W: WriteColor> StyledSink<'w, W> {
    fn new(out: &'w mut W) -> Self {
        StyledSink {
            out,
            active: Vec::new(),
        }
    }
}

impl<'a, W: WriteColor> RenderAnnotated<'a, Style> for StyledSink<'_, W> {
    fn push_annotation(&mut self, style: &'a Style) -> io::Result<()> {
        self.active.push(*style);
        self.out.set_color(&style.to_color_spec())
    }

    fn pop_annotation(&mut self) -> io::Result<()> {
        self.active.pop();
        match self.active.last() {
            Some(outer) => self.out.set_color(&outer.to_color_spec()),
            None => self.out.reset(),
        }
    }
}

impl<W: WriteColor> pretty::Render for StyledSink<'_, W> {
    type Error = io::Error;

    fn write_str(&mut self, s: &str) -> io::Result<usize> {
        self.out.write(s.as_bytes())
    }

    fn write_str_all(&mut self, s: &str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())
    }

    fn fail_doc(&self) -> Self::Error {
        io::Error::other("expression document failed to render")
    }
}

/// Render `e` with colors to any termcolor sink at the given width.
fn render_colored<W: WriteColor>(e: &Expression, width: usize, out: &mut W) -> io::Result<()> {
    e.pretty_doc().render_raw(width, &mut StyledSink::new(out))?;
    out.flush()
}

/// Print `e` to stdout with colors when stdout is a terminal, at the terminal's width
/// (80 columns when it cannot be detected).
fn print_colored(e: &Expression) -> io::Result<()> {
    let width = term_size::dimensions().map_or(80, |(w, _)| w);
    let stdout = StandardStream::stdout(ColorChoice::Auto);
    render_colored(e, width, &mut stdout.lock())
}

/// Pretty-printing conveniences for expressions.
pub trait PrettyExpr {
    /// Build an RcDoc representation of this expression with style annotations.
    fn pretty_doc(&self) -> RcDoc<'static, Style>;

    /// Render this expression with colors to any termcolor writer at the given width.
    fn pretty_render_to<W: WriteColor + Write>(&self, width: usize, out: &mut W) -> io::Result<()>;

    /// Print this expression to stdout with colors (TTY-aware), at auto-detected width (or 80 if not a TTY).
    fn pretty_print(&self) -> io::Result<()>;

    /// Format this expression into a plain string (no colors)
    fn pretty_string(&self) -> String;
}

impl PrettyExpr for Expression {
    #[inline]
    fn pretty_doc(&self) -> RcDoc<'static, Style> {
        to_doc_with_depth(self, 0)
    }

    #[inline]
    fn pretty_render_to<W: WriteColor + Write>(&self, width: usize, out: &mut W) -> io::Result<()> {
        render_colored(self, width, out)
    }

    fn pretty_print(&self) -> io::Result<()> {
        print_colored(self)
    }

    #[inline]
    fn pretty_string(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut w = FmtWrite::new(f);
        self.pretty_doc().render_raw(80, &mut w)
    }
}
