#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::{buffer_handler, ErrorCategory};
use fwjs_ir::{BinaryOp, ExprBuilder};
use pretty_assertions::assert_eq;

fn run(interner: &StringInterner, arena: SharedArena, program: ExprId) -> (EvalResult, String) {
    let mut interp = InterpreterBuilder::new(interner, arena)
        .print_handler(buffer_handler())
        .build();
    let result = interp.evaluate(program, &Environment::new_global());
    (result, interp.get_print_output())
}

#[test]
fn test_literals_and_unbound_ident() {
    let interner = StringInterner::new();
    let mut b = ExprBuilder::new(&interner);
    let n = b.int(7);
    let missing = b.ident("nowhere");
    let program = b.seq(n, missing);
    let (result, _) = run(&interner, b.finish(), program);
    assert_eq!(result, Ok(Value::Null));
}

#[test]
fn test_print_returns_value_and_writes_line() {
    let interner = StringInterner::new();
    let mut b = ExprBuilder::new(&interner);
    let t = b.bool(true);
    let inner = b.print(t);
    let outer = b.print(inner);
    let (result, output) = run(&interner, b.finish(), outer);
    assert_eq!(result, Ok(Value::Bool(true)));
    assert_eq!(output, "true\ntrue\n");
}

#[test]
fn test_if_without_else_is_null() {
    let interner = StringInterner::new();
    let mut b = ExprBuilder::new(&interner);
    let cond = b.bool(false);
    let one = b.int(1);
    let then_branch = b.print(one);
    let program = b.if_then(cond, then_branch);
    let (result, output) = run(&interner, b.finish(), program);
    assert_eq!(result, Ok(Value::Null));
    assert_eq!(output, "");
}

#[test]
fn test_if_else_picks_branch() {
    let interner = StringInterner::new();
    let mut b = ExprBuilder::new(&interner);
    let one = b.int(1);
    let two = b.int(2);
    let cond = b.binary(BinaryOp::Lt, one, two);
    let yes = b.int(10);
    let no = b.int(20);
    let program = b.if_else(cond, yes, no);
    let (result, _) = run(&interner, b.finish(), program);
    assert_eq!(result, Ok(Value::int(10)));
}

#[test]
fn test_non_bool_condition_is_type_error() {
    let interner = StringInterner::new();
    let mut b = ExprBuilder::new(&interner);
    let cond = b.int(1);
    let body = b.int(2);
    let program = b.if_then(cond, body);
    let (result, _) = run(&interner, b.finish(), program);
    let err = result.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::TypeError);
    assert_eq!(
        err.kind,
        crate::EvalErrorKind::NonBoolCondition {
            construct: "if",
            got: "int"
        }
    );
}

#[test]
fn test_while_returns_last_body_value() {
    // var i = 0; while (i < 3) { i = i + 1 }
    let interner = StringInterner::new();
    let mut b = ExprBuilder::new(&interner);
    let zero = b.int(0);
    let decl = b.var_decl("i", zero);
    let i = b.ident("i");
    let three = b.int(3);
    let cond = b.binary(BinaryOp::Lt, i, three);
    let i2 = b.ident("i");
    let one = b.int(1);
    let inc = b.binary(BinaryOp::Add, i2, one);
    let body = b.assign("i", inc);
    let lp = b.while_loop(cond, body);
    let program = b.program([decl, lp]);
    let (result, _) = run(&interner, b.finish(), program);
    assert_eq!(result, Ok(Value::int(3)));
}

#[test]
fn test_binary_evaluates_both_sides_left_to_right() {
    // print(1) == print(null)
    let interner = StringInterner::new();
    let mut b = ExprBuilder::new(&interner);
    let one = b.int(1);
    let left = b.print(one);
    let null = b.null();
    let right = b.print(null);
    let program = b.binary(BinaryOp::Eq, left, right);
    let (result, output) = run(&interner, b.finish(), program);
    assert_eq!(result, Ok(Value::Bool(false)));
    assert_eq!(output, "1\nnull\n");
}

#[test]
fn test_var_decl_returns_value() {
    let interner = StringInterner::new();
    let mut b = ExprBuilder::new(&interner);
    let five = b.int(5);
    let program = b.var_decl("x", five);
    let (result, _) = run(&interner, b.finish(), program);
    assert_eq!(result, Ok(Value::int(5)));
}

#[test]
fn test_callee_checked_before_arguments() {
    // 3(print(1))
    let interner = StringInterner::new();
    let mut b = ExprBuilder::new(&interner);
    let callee = b.int(3);
    let one = b.int(1);
    let arg = b.print(one);
    let program = b.call(callee, &[arg]);
    let (result, output) = run(&interner, b.finish(), program);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("not a function"));
    assert_eq!(output, "");
}

#[test]
fn test_call_error_carries_call_note() {
    // (function(a) { a / 0 })(1)
    let interner = StringInterner::new();
    let mut b = ExprBuilder::new(&interner);
    let a = b.ident("a");
    let zero = b.int(0);
    let body = b.binary(BinaryOp::Div, a, zero);
    let f = b.function(&["a"], body);
    let one = b.int(1);
    let program = b.call(f, &[one]);
    let (result, _) = run(&interner, b.finish(), program);
    let err = result.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::DivisionByZero);
    assert_eq!(err.notes, vec!["in call to function(a) {...};".to_string()]);
}

#[test]
fn test_duplicate_params_fail_at_call() {
    let interner = StringInterner::new();
    let mut b = ExprBuilder::new(&interner);
    let body = b.null();
    let f = b.function(&["a", "a"], body);
    let one = b.int(1);
    let two = b.int(2);
    let program = b.call(f, &[one, two]);
    let (result, _) = run(&interner, b.finish(), program);
    assert_eq!(
        result.unwrap_err().category(),
        ErrorCategory::DuplicateDeclaration
    );
}

#[test]
fn test_host_call_applies_closure() {
    // var add = function(a, b) { a + b }
    let interner = StringInterner::new();
    let mut b = ExprBuilder::new(&interner);
    let a = b.ident("a");
    let bb = b.ident("b");
    let body = b.binary(BinaryOp::Add, a, bb);
    let f = b.function(&["a", "b"], body);
    let program = b.var_decl("add", f);
    let arena = b.finish();

    let mut interp = Interpreter::new(&interner, arena);
    let env = Environment::new_global();
    let add = interp.evaluate(program, &env).unwrap();

    assert_eq!(
        interp.call(&add, vec![Value::int(2), Value::int(40)]),
        Ok(Value::int(42))
    );
    assert_eq!(
        interp.call(&add, vec![Value::int(2)]).unwrap_err().category(),
        ErrorCategory::ArityError
    );
    assert_eq!(
        interp.call(&Value::Null, Vec::new()).unwrap_err().category(),
        ErrorCategory::TypeError
    );
}

#[test]
fn test_closure_from_other_arena() {
    let interner = StringInterner::new();

    let mut lib = ExprBuilder::new(&interner);
    let k = lib.int(99);
    let f = lib.function(&[], k);
    let lib_arena = lib.finish();
    let env = Environment::new_global();
    let closure = Interpreter::new(&interner, lib_arena)
        .evaluate(f, &env)
        .unwrap();

    let mut main = ExprBuilder::new(&interner);
    let program = main.null();
    let mut interp = InterpreterBuilder::new(&interner, main.finish())
        .print_handler(buffer_handler())
        .build();
    interp.evaluate(program, &env).unwrap();
    assert_eq!(interp.call(&closure, Vec::new()), Ok(Value::int(99)));
}
