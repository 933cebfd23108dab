//! Binary operator implementations for the evaluator.
//!
//! `==` is total over every pair of values. Every other operator is
//! defined on ints only; integer arithmetic is checked, so overflow is an
//! error rather than a wrap or a panic.

use fwjs_ir::BinaryOp;

use crate::errors::{division_by_zero, integer_overflow, invalid_operands, EvalResult};
use crate::Value;

/// Checked arithmetic where the only failure is overflow.
#[inline]
fn checked_arith(result: Option<i64>, op: BinaryOp) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op))
}

/// Checked division with a zero guard.
///
/// `i64::MIN / -1` reports overflow.
#[inline]
fn checked_div(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    if b == 0 {
        return Err(division_by_zero(op));
    }
    checked_arith(a.checked_div(b), op)
}

/// Remainder with a zero guard.
///
/// The only overflowing case, `i64::MIN % -1`, has remainder 0.
#[inline]
fn checked_mod(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    if b == 0 {
        return Err(division_by_zero(op));
    }
    Ok(Value::Int(a.checked_rem(b).unwrap_or(0)))
}

/// Evaluate a binary operation on two already-evaluated operands.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Operands are moved out of the evaluator; references would force cloning at call sites"
)]
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    if !op.requires_ints() {
        return Ok(Value::Bool(left.equals(&right)));
    }
    match (left.as_int(), right.as_int()) {
        (Some(a), Some(b)) => eval_int_binary(a, b, op),
        _ => Err(invalid_operands(op, left.type_name(), right.type_name())),
    }
}

/// Integer operators. Division truncates toward zero.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), op),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), op),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), op),
        BinaryOp::Div => checked_div(a, b, op),
        BinaryOp::Mod => checked_mod(a, b, op),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
    }
}
