//! Evaluation errors and their constructors.
//!
//! Every failure the evaluator can report is an `EvalError`: a structured
//! `EvalErrorKind` plus context notes collected while the error unwinds
//! through function applications. Construct errors with the free functions
//! in this module rather than building kinds by hand.
//!
//! Errors abort the current program; there is no recovery inside the
//! language.

use std::fmt;

use fwjs_ir::{BinaryOp, UnknownOperator};

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Coarse error family, the level hosts usually match on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Wrong value kind for a condition, operand or callee.
    TypeError,
    /// `/` or `%` with a zero right operand.
    DivisionByZero,
    /// Same name declared twice in one frame.
    DuplicateDeclaration,
    /// Argument count differs from parameter count.
    ArityError,
    /// Operator symbol outside the defined set.
    UnknownOperator,
    /// Integer arithmetic left the `i64` range.
    Overflow,
}

impl ErrorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TypeError => "TypeError",
            Self::DivisionByZero => "DivisionByZero",
            Self::DuplicateDeclaration => "DuplicateDeclaration",
            Self::ArityError => "ArityError",
            Self::UnknownOperator => "UnknownOperator",
            Self::Overflow => "Overflow",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed error condition.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("{construct} condition must be a bool, got {got}")]
    NonBoolCondition {
        construct: &'static str,
        got: &'static str,
    },

    #[error("operator `{op}` requires int operands, got {left} and {right}")]
    InvalidOperands {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },

    #[error("{type_name} is not a function")]
    NotCallable { type_name: &'static str },

    #[error("division by zero in `{op}`")]
    DivisionByZero { op: BinaryOp },

    #[error("`{name}` is already declared in this scope")]
    DuplicateDeclaration { name: String },

    #[error("wrong number of arguments: expected {expected}, got {got}")]
    ArityMismatch { expected: usize, got: usize },

    #[error("unknown operator: {symbol}")]
    UnknownOperator { symbol: String },

    #[error("integer overflow in `{op}`")]
    IntegerOverflow { op: BinaryOp },
}

impl EvalErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NonBoolCondition { .. }
            | Self::InvalidOperands { .. }
            | Self::NotCallable { .. } => ErrorCategory::TypeError,
            Self::DivisionByZero { .. } => ErrorCategory::DivisionByZero,
            Self::DuplicateDeclaration { .. } => ErrorCategory::DuplicateDeclaration,
            Self::ArityMismatch { .. } => ErrorCategory::ArityError,
            Self::UnknownOperator { .. } => ErrorCategory::UnknownOperator,
            Self::IntegerOverflow { .. } => ErrorCategory::Overflow,
        }
    }
}

/// An evaluation failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// What went wrong.
    pub kind: EvalErrorKind,
    /// Context added while the error propagated, innermost first.
    pub notes: Vec<String>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        Self {
            kind,
            notes: Vec::new(),
        }
    }

    /// Attach a context note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    #[inline]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category(), self.kind)?;
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

impl From<UnknownOperator> for EvalError {
    fn from(err: UnknownOperator) -> Self {
        unknown_operator(&err.symbol)
    }
}

// Type Errors

/// `if`/`while` condition evaluated to something other than a bool.
#[cold]
pub fn non_bool_condition(construct: &'static str, got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NonBoolCondition { construct, got })
}

/// Arithmetic or relational operator applied to non-int operands.
#[cold]
pub fn invalid_operands(op: BinaryOp, left: &'static str, right: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidOperands { op, left, right })
}

/// Call target is not a closure.
#[cold]
pub fn not_callable(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable { type_name })
}

// Arithmetic Errors

#[cold]
pub fn division_by_zero(op: BinaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero { op })
}

#[cold]
pub fn integer_overflow(op: BinaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { op })
}

// Binding and Call Errors

#[cold]
pub fn duplicate_declaration(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateDeclaration {
        name: name.to_string(),
    })
}

#[cold]
pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch { expected, got })
}

#[cold]
pub fn unknown_operator(symbol: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownOperator {
        symbol: symbol.to_string(),
    })
}
