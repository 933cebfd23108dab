#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_seq_all_folds_left() {
    let interner = StringInterner::new();
    let mut b = ExprBuilder::new(&interner);
    let one = b.int(1);
    let two = b.int(2);
    let three = b.int(3);

    let root = b.seq_all([one, two, three]).unwrap();

    let ExprKind::Seq { first, second } = b.arena().get_expr(root) else {
        panic!("expected Seq at root");
    };
    assert_eq!(second, three);
    assert_eq!(
        b.arena().get_expr(first),
        ExprKind::Seq {
            first: one,
            second: two
        }
    );
}

#[test]
fn test_seq_all_single_and_empty() {
    let interner = StringInterner::new();
    let mut b = ExprBuilder::new(&interner);
    let only = b.bool(true);
    assert_eq!(b.seq_all([only]), Some(only));
    assert_eq!(b.seq_all([]), None);
}

#[test]
fn test_empty_program_is_null() {
    let interner = StringInterner::new();
    let mut b = ExprBuilder::new(&interner);
    let root = b.program([]);
    assert_eq!(b.arena().get_expr(root), ExprKind::Literal(Literal::Null));
}

#[test]
fn test_identifiers_are_interned() {
    let interner = StringInterner::new();
    let mut b = ExprBuilder::new(&interner);
    let value = b.int(5);
    let decl = b.var_decl("count", value);
    let read = b.ident("count");

    let x = interner.intern("count");
    assert_eq!(
        b.arena().get_expr(decl),
        ExprKind::VarDecl {
            name: x,
            init: value
        }
    );
    assert_eq!(b.arena().get_expr(read), ExprKind::Ident(x));
}

#[test]
fn test_function_keeps_parameter_order() {
    let interner = StringInterner::new();
    let mut b = ExprBuilder::new(&interner);
    let body = b.ident("b");
    let func = b.function(&["b", "a"], body);

    let ExprKind::Function { params, .. } = b.arena().get_expr(func) else {
        panic!("expected Function");
    };
    let names: Vec<_> = b
        .arena()
        .get_name_list(params)
        .iter()
        .map(|n| interner.lookup(*n))
        .collect();
    assert_eq!(names, vec!["b", "a"]);
}

#[test]
fn test_call_records_arguments() {
    let interner = StringInterner::new();
    let mut b = ExprBuilder::new(&interner);
    let f = b.ident("f");
    let one = b.int(1);
    let two = b.int(2);
    let call = b.call(f, &[one, two]);

    let arena = b.finish();
    let ExprKind::Call { func, args } = arena.get_expr(call) else {
        panic!("expected Call");
    };
    assert_eq!(func, f);
    assert_eq!(arena.get_expr_list(args), &[one, two]);
}

#[test]
fn test_binary_symbol_maps_operators() {
    let interner = StringInterner::new();
    let mut b = ExprBuilder::new(&interner);
    let l = b.int(1);
    let r = b.int(2);
    let id = b.binary_symbol("<=", l, r).unwrap();
    assert_eq!(
        b.arena().get_expr(id),
        ExprKind::Binary {
            op: BinaryOp::LtEq,
            left: l,
            right: r
        }
    );
    assert!(b.binary_symbol("===", l, r).is_err());
}
