//! Operator precedence and associativity.
//!
//! The converter never hard-codes binding strength; it asks an
//! [`OperatorTable`]. The standard table is built once per process and shared
//! read-only through [`STANDARD_OPERATORS`].

use std::collections::BTreeMap;

use lazy_static::lazy_static;

use crate::token::Operator;

/// Grouping direction for operators of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`
    Right,
}

/// Binding information for a single operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    /// Higher binds tighter
    pub precedence: u8,
    /// Tie-break between equal precedences
    pub associativity: Associativity,
}

impl OperatorInfo {
    /// Shorthand constructor
    pub const fn new(precedence: u8, associativity: Associativity) -> Self {
        Self {
            precedence,
            associativity,
        }
    }

    /// Whether an operator with this info on the stack must be popped before
    /// `incoming` is pushed.
    pub fn yields_to(&self, incoming: &OperatorInfo) -> bool {
        self.precedence > incoming.precedence
            || (self.precedence == incoming.precedence
                && incoming.associativity == Associativity::Left)
    }
}

/// Immutable mapping from operator to its binding information.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OperatorTable {
    entries: BTreeMap<Operator, OperatorInfo>,
}

lazy_static! {
    /// `+ -` at 1, `* /` at 2 (all left), `^` at 3 (right).
    pub static ref STANDARD_OPERATORS: OperatorTable = OperatorTable::standard();
}

impl OperatorTable {
    /// A table with no operators at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The conventional arithmetic table.
    pub fn standard() -> Self {
        use Associativity::{Left, Right};

        Self::empty()
            .with(Operator::Add, 1, Left)
            .with(Operator::Sub, 1, Left)
            .with(Operator::Mul, 2, Left)
            .with(Operator::Div, 2, Left)
            .with(Operator::Pow, 3, Right)
    }

    /// Returns the table with `op` set to the given binding, replacing any
    /// previous entry.
    pub fn with(mut self, op: Operator, precedence: u8, associativity: Associativity) -> Self {
        self.entries
            .insert(op, OperatorInfo::new(precedence, associativity));
        self
    }

    /// Returns the table with `op` removed.
    pub fn without(mut self, op: Operator) -> Self {
        self.entries.remove(&op);
        self
    }

    /// Binding information for `op`, if it has an entry.
    pub fn get(&self, op: Operator) -> Option<&OperatorInfo> {
        self.entries.get(&op)
    }

    /// Whether `op` has an entry.
    pub fn contains(&self, op: Operator) -> bool {
        self.entries.contains_key(&op)
    }

    /// Entries in operator order.
    pub fn iter(&self) -> impl Iterator<Item = (Operator, &OperatorInfo)> + '_ {
        self.entries.iter().map(|(op, info)| (*op, info))
    }

    /// Number of operators in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
