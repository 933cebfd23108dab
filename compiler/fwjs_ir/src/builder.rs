//! Tree construction.
//!
//! `ExprBuilder` is the surface a front end drives once it has parsed
//! source text: one method per node kind, identifiers passed as text and
//! interned on the way in. Statement lists are folded into nested `Seq`
//! nodes, the same shape a block of statements takes in the tree.

use crate::{
    BinaryOp, ExprArena, ExprId, ExprKind, Literal, SharedArena, StringInterner, UnknownOperator,
};

/// Builds expressions into an owned arena.
pub struct ExprBuilder<'a> {
    arena: ExprArena,
    interner: &'a StringInterner,
}

impl<'a> ExprBuilder<'a> {
    /// Create a builder with an empty arena.
    pub fn new(interner: &'a StringInterner) -> Self {
        Self {
            arena: ExprArena::new(),
            interner,
        }
    }

    /// The arena built so far.
    pub fn arena(&self) -> &ExprArena {
        &self.arena
    }

    /// Freeze the arena for evaluation.
    pub fn finish(self) -> SharedArena {
        self.arena.into_shared()
    }

    pub fn literal(&mut self, literal: Literal) -> ExprId {
        self.arena.alloc_expr(ExprKind::Literal(literal))
    }

    pub fn int(&mut self, value: i64) -> ExprId {
        self.literal(Literal::Int(value))
    }

    pub fn bool(&mut self, value: bool) -> ExprId {
        self.literal(Literal::Bool(value))
    }

    pub fn null(&mut self) -> ExprId {
        self.literal(Literal::Null)
    }

    pub fn ident(&mut self, name: &str) -> ExprId {
        let name = self.interner.intern(name);
        self.arena.alloc_expr(ExprKind::Ident(name))
    }

    pub fn print(&mut self, expr: ExprId) -> ExprId {
        self.arena.alloc_expr(ExprKind::Print(expr))
    }

    pub fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        self.arena.alloc_expr(ExprKind::Binary { op, left, right })
    }

    /// Build a binary node from the operator's source symbol (`"+"`, `"<="`, ...).
    pub fn binary_symbol(
        &mut self,
        symbol: &str,
        left: ExprId,
        right: ExprId,
    ) -> Result<ExprId, UnknownOperator> {
        let op = BinaryOp::from_symbol(symbol)?;
        Ok(self.binary(op, left, right))
    }

    /// `if (cond) { then_branch }` with no else branch.
    pub fn if_then(&mut self, cond: ExprId, then_branch: ExprId) -> ExprId {
        self.arena.alloc_expr(ExprKind::If {
            cond,
            then_branch,
            else_branch: None,
        })
    }

    pub fn if_else(&mut self, cond: ExprId, then_branch: ExprId, else_branch: ExprId) -> ExprId {
        self.arena.alloc_expr(ExprKind::If {
            cond,
            then_branch,
            else_branch: Some(else_branch),
        })
    }

    pub fn while_loop(&mut self, cond: ExprId, body: ExprId) -> ExprId {
        self.arena.alloc_expr(ExprKind::While { cond, body })
    }

    pub fn seq(&mut self, first: ExprId, second: ExprId) -> ExprId {
        self.arena.alloc_expr(ExprKind::Seq { first, second })
    }

    /// Fold statements left-to-right into nested `Seq` nodes.
    ///
    /// `[a, b, c]` becomes `Seq(Seq(a, b), c)`. A single statement is
    /// returned as is; an empty list yields `None`.
    pub fn seq_all(&mut self, stmts: impl IntoIterator<Item = ExprId>) -> Option<ExprId> {
        let mut stmts = stmts.into_iter();
        let first = stmts.next()?;
        Some(stmts.fold(first, |acc, next| self.seq(acc, next)))
    }

    /// Build a whole program from its top-level statements.
    ///
    /// An empty program is a `null` literal.
    pub fn program(&mut self, stmts: impl IntoIterator<Item = ExprId>) -> ExprId {
        match self.seq_all(stmts) {
            Some(root) => root,
            None => self.null(),
        }
    }

    pub fn var_decl(&mut self, name: &str, init: ExprId) -> ExprId {
        let name = self.interner.intern(name);
        self.arena.alloc_expr(ExprKind::VarDecl { name, init })
    }

    pub fn assign(&mut self, name: &str, value: ExprId) -> ExprId {
        let name = self.interner.intern(name);
        self.arena.alloc_expr(ExprKind::Assign { name, value })
    }

    /// `function(params) { body }`. Parameter names are kept in order;
    /// duplicates are not rejected here.
    pub fn function(&mut self, params: &[&str], body: ExprId) -> ExprId {
        let names: Vec<_> = params.iter().map(|p| self.interner.intern(p)).collect();
        let params = self.arena.alloc_name_list(&names);
        self.arena.alloc_expr(ExprKind::Function { params, body })
    }

    pub fn call(&mut self, func: ExprId, args: &[ExprId]) -> ExprId {
        let args = self.arena.alloc_expr_list(args);
        self.arena.alloc_expr(ExprKind::Call { func, args })
    }
}

#[cfg(test)]
mod tests;
