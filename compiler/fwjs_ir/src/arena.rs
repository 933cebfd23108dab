//! Expression arena.
//!
//! Nodes live in one contiguous `Vec<ExprKind>` indexed by [`ExprId`].
//! Argument lists and parameter lists are flattened into side tables and
//! referenced by [`ExprRange`] / [`NameRange`].

// Arc is the implementation of SharedArena.
#![expect(
    clippy::disallowed_types,
    reason = "Arc is the implementation of SharedArena"
)]

use std::sync::Arc;

use crate::{ExprId, ExprKind, ExprRange, Name, NameRange};

/// Convert a length to `u32`, panicking with a descriptive message on overflow.
///
/// Arena sizes beyond `u32::MAX` indicate a front end bug, not user error.
#[inline]
pub(crate) fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("too many {what}: {len} exceeds u32::MAX"))
}

/// Convert a length to `u16`, panicking with a descriptive message on overflow.
#[inline]
pub(crate) fn to_u16(len: usize, what: &str) -> u16 {
    u16::try_from(len).unwrap_or_else(|_| panic!("{what} too long: {len} exceeds u16::MAX"))
}

/// Arena for expressions.
///
/// # Index Spaces
///
/// - `exprs`: indexed by [`ExprId`]
/// - `expr_lists`: flat `Vec<ExprId>` indexed by [`ExprRange`] (call arguments)
/// - `name_lists`: flat `Vec<Name>` indexed by [`NameRange`] (parameters)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExprArena {
    exprs: Vec<ExprKind>,
    expr_lists: Vec<ExprId>,
    name_lists: Vec<Name>,
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression, returning its ID.
    pub fn alloc_expr(&mut self, kind: ExprKind) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len(), "expressions"));
        self.exprs.push(kind);
        id
    }

    /// Get the expression kind for a node.
    ///
    /// # Panics
    /// Panics if `id` was not allocated in this arena.
    #[inline]
    pub fn get_expr(&self, id: ExprId) -> ExprKind {
        self.exprs[id.index()]
    }

    /// Number of allocated expressions.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    /// Returns `true` if no expressions have been allocated.
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    /// Allocate a contiguous range of expression IDs (call arguments).
    pub fn alloc_expr_list(&mut self, ids: &[ExprId]) -> ExprRange {
        if ids.is_empty() {
            return ExprRange::EMPTY;
        }
        let start = to_u32(self.expr_lists.len(), "expression lists");
        self.expr_lists.extend_from_slice(ids);
        ExprRange::new(start, to_u16(ids.len(), "argument list"))
    }

    /// Get expression IDs from a range.
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        if range.is_empty() {
            return &[];
        }
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    /// Allocate a contiguous range of names (function parameters).
    pub fn alloc_name_list(&mut self, names: &[Name]) -> NameRange {
        if names.is_empty() {
            return NameRange::EMPTY;
        }
        let start = to_u32(self.name_lists.len(), "name lists");
        self.name_lists.extend_from_slice(names);
        NameRange::new(start, to_u16(names.len(), "parameter list"))
    }

    /// Get names from a range.
    pub fn get_name_list(&self, range: NameRange) -> &[Name] {
        if range.is_empty() {
            return &[];
        }
        let start = range.start as usize;
        &self.name_lists[start..start + range.len()]
    }

    /// Freeze this arena into a shared, read-only handle.
    pub fn into_shared(self) -> SharedArena {
        SharedArena::new(self)
    }
}

/// Shared reference to an `ExprArena`.
///
/// Closures carry this so their body can be evaluated long after the
/// builder that produced it is gone. Cloning is a reference-count bump.
#[derive(Clone, Debug)]
pub struct SharedArena(Arc<ExprArena>);

impl SharedArena {
    /// Create a new shared arena.
    pub fn new(arena: ExprArena) -> Self {
        SharedArena(Arc::new(arena))
    }

    /// Whether two handles refer to the same arena.
    pub fn ptr_eq(&self, other: &SharedArena) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for SharedArena {
    type Target = ExprArena;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests;
