//! FWJS IR - Expression tree types for the Featherweight JavaScript evaluator.
//!
//! This crate contains the data structures an external front end produces
//! and the evaluator consumes:
//! - Names for interned identifiers
//! - Expression nodes (`ExprKind`) and operators (`BinaryOp`)
//! - Arena allocation for expressions (`ExprArena`, `SharedArena`)
//! - `ExprBuilder`, the construction surface for front ends and tests
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers → `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId(u32)` indices
//! - **Immutable Once Shared**: a `SharedArena` is a read-only handle

mod arena;
mod ast;
mod builder;
mod expr_id;
mod interner;
mod name;

pub use arena::{ExprArena, SharedArena};
pub use ast::{BinaryOp, ExprKind, Literal, UnknownOperator};
pub use builder::ExprBuilder;
pub use expr_id::{ExprId, ExprRange, NameRange};
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::Name;
