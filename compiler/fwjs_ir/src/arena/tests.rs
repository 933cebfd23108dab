use super::*;
use crate::{BinaryOp, Literal};
use pretty_assertions::assert_eq;

#[test]
fn test_alloc_and_get_expr() {
    let mut arena = ExprArena::new();
    let one = arena.alloc_expr(ExprKind::Literal(Literal::Int(1)));
    let two = arena.alloc_expr(ExprKind::Literal(Literal::Int(2)));
    let sum = arena.alloc_expr(ExprKind::Binary {
        op: BinaryOp::Add,
        left: one,
        right: two,
    });

    assert_eq!(arena.len(), 3);
    assert_eq!(
        arena.get_expr(sum),
        ExprKind::Binary {
            op: BinaryOp::Add,
            left: one,
            right: two,
        }
    );
}

#[test]
fn test_empty_lists_share_the_empty_range() {
    let mut arena = ExprArena::new();
    assert_eq!(arena.alloc_expr_list(&[]), ExprRange::EMPTY);
    assert_eq!(arena.alloc_name_list(&[]), NameRange::EMPTY);
    assert!(arena.get_expr_list(ExprRange::EMPTY).is_empty());
    assert!(arena.get_name_list(NameRange::EMPTY).is_empty());
}

#[test]
fn test_lists_keep_order() {
    let mut arena = ExprArena::new();
    let a = arena.alloc_expr(ExprKind::Literal(Literal::Null));
    let b = arena.alloc_expr(ExprKind::Literal(Literal::Bool(true)));
    let args = arena.alloc_expr_list(&[b, a]);
    assert_eq!(arena.get_expr_list(args), &[b, a]);

    let names = arena.alloc_name_list(&[Name::new(7), Name::new(3)]);
    assert_eq!(arena.get_name_list(names), &[Name::new(7), Name::new(3)]);
}

#[test]
fn test_shared_arena_derefs_and_compares_by_identity() {
    let mut arena = ExprArena::new();
    let id = arena.alloc_expr(ExprKind::Literal(Literal::Int(9)));
    let copy = arena.clone();

    let shared = arena.into_shared();
    let alias = shared.clone();
    let other = copy.into_shared();

    assert_eq!(shared.get_expr(id), ExprKind::Literal(Literal::Int(9)));
    assert!(shared.ptr_eq(&alias));
    assert!(!shared.ptr_eq(&other));
}
