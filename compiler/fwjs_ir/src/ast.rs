//! Expression Types
//!
//! Core expression nodes and operators. The node set is closed: every kind
//! has exactly one evaluation rule, dispatched by pattern matching.

use std::fmt;

use crate::{ExprId, ExprRange, Name, NameRange};

/// Literal values embedded directly in the tree.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Null,
}

/// Binary operators.
///
/// There is no short-circuiting operator: both operands are always evaluated.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison
    Gt,
    GtEq,
    Lt,
    LtEq,
    Eq,
}

/// Error for an operator symbol outside the defined set.
///
/// Raised while building a tree; reaching it means the front end handed
/// over a token the language does not define.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator: {symbol}")]
pub struct UnknownOperator {
    pub symbol: String,
}

impl BinaryOp {
    /// Every operator, in declaration order.
    pub const ALL: [BinaryOp; 10] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Mod,
        BinaryOp::Gt,
        BinaryOp::GtEq,
        BinaryOp::Lt,
        BinaryOp::LtEq,
        BinaryOp::Eq,
    ];

    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Eq => "==",
        }
    }

    /// Map a source-level symbol to its operator.
    pub fn from_symbol(symbol: &str) -> Result<BinaryOp, UnknownOperator> {
        BinaryOp::ALL
            .into_iter()
            .find(|op| op.as_symbol() == symbol)
            .ok_or_else(|| UnknownOperator {
                symbol: symbol.to_string(),
            })
    }

    /// Whether this operator requires two integer operands.
    ///
    /// Every operator except `==` does.
    pub const fn requires_ints(self) -> bool {
        !matches!(self, BinaryOp::Eq)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Expression variants.
///
/// Children are arena indices, so the node itself is `Copy`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// A constant: `42`, `true`, `null`.
    Literal(Literal),

    /// Variable reference. Unresolved names evaluate to `null`.
    Ident(Name),

    /// `print(expr)`: emits the rendering of `expr`, yields its value.
    Print(ExprId),

    /// `left op right`.
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// `if (cond) then_branch else else_branch`.
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: Option<ExprId>,
    },

    /// `while (cond) body`. Runs in the enclosing frame.
    While { cond: ExprId, body: ExprId },

    /// `first; second`.
    Seq { first: ExprId, second: ExprId },

    /// `var name = init`.
    VarDecl { name: Name, init: ExprId },

    /// `name = value`.
    Assign { name: Name, value: ExprId },

    /// `function(params) { body }`.
    Function { params: NameRange, body: ExprId },

    /// `func(args)`.
    Call { func: ExprId, args: ExprRange },
}
