//! Runtime values.
//!
//! `Value` is what every expression evaluates to. Scalars are stored
//! inline; closures live behind `Heap` so that copies share one
//! allocation and equality can be decided by identity.

mod closure;
mod heap;

use std::fmt;

use fwjs_ir::{ExprId, Literal, Name, SharedArena, StringLookup};

use crate::Environment;

pub use closure::ClosureValue;
pub use heap::Heap;

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Null,
    Closure(Heap<ClosureValue>),
}

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Allocate a closure over `env`.
    ///
    /// `env` is shared with the caller, not copied.
    pub fn closure(
        params: Vec<Name>,
        body: ExprId,
        arena: SharedArena,
        env: Environment,
    ) -> Self {
        Value::Closure(Heap::new(ClosureValue {
            params,
            body,
            arena,
            env,
        }))
    }

    /// Name of the value kind, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Null => "null",
            Value::Closure(_) => "function",
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The `==` operator.
    ///
    /// Defined for every pairing and never fails. `null` equals only
    /// `null`; ints and bools compare by payload; closures compare by
    /// identity. Mixed kinds are unequal.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Closure(a), Value::Closure(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Textual rendering, as written by `print`.
    pub fn display<'a>(&'a self, names: &'a dyn StringLookup) -> ValueDisplay<'a> {
        ValueDisplay { value: self, names }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Value {}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Bool(b) => Value::Bool(b),
            Literal::Int(n) => Value::Int(n),
            Literal::Null => Value::Null,
        }
    }
}

/// `Display` adapter returned by [`Value::display`].
///
/// Closures need the interner to spell their parameter names.
pub struct ValueDisplay<'a> {
    value: &'a Value,
    names: &'a dyn StringLookup,
}

impl fmt::Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Null => f.write_str("null"),
            Value::Closure(closure) => f.write_str(&closure.signature(self.names)),
        }
    }
}
