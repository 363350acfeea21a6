//! Shared generators for the workspace-level tests.

use calc::Operator;
use proptest::prelude::*;

/// A generated expression tree with the text it was rendered from.
#[derive(Debug, Clone)]
pub enum Expr {
    /// A literal and its source text
    Num(String, f64),
    /// `left op right`
    Bin(Box<Expr>, Operator, Box<Expr>),
}

impl Expr {
    /// Evaluate the tree directly, without any parsing
    pub fn value(&self) -> f64 {
        match self {
            Expr::Num(_, n) => *n,
            Expr::Bin(l, op, r) => op.apply(l.value(), r.value()),
        }
    }

    /// Render with every binary operation in parentheses
    pub fn parenthesized(&self) -> String {
        match self {
            Expr::Num(text, _) => text.clone(),
            Expr::Bin(l, op, r) => format!("({} {op} {})", l.parenthesized(), r.parenthesized()),
        }
    }

    /// Render with no parentheses at all
    pub fn bare(&self) -> String {
        match self {
            Expr::Num(text, _) => text.clone(),
            Expr::Bin(l, op, r) => format!("{} {op} {}", l.bare(), r.bare()),
        }
    }
}

/// Decimal literals the tokenizer accepts
pub fn number() -> impl Strategy<Value = Expr> {
    prop_oneof!["[0-9]{1,3}", "[0-9]{1,2}\\.[0-9]{1,2}"].prop_map(|text| {
        let value = text.parse().expect("generated literal parses");
        Expr::Num(text, value)
    })
}

/// Any of the five operators
pub fn operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

/// Well-formed expression trees
pub fn expr() -> impl Strategy<Value = Expr> {
    number().prop_recursive(5, 48, 2, |inner| {
        (inner.clone(), operator(), inner)
            .prop_map(|(l, op, r)| Expr::Bin(Box::new(l), op, Box::new(r)))
    })
}

/// Whether two results agree bit for bit, treating every NaN as equal
pub fn same_value(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}
