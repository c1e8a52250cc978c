//! Binary operator semantics.
//!
//! Dispatch is a direct match over the closed value set. Mixed Integer/Real
//! operands promote to Real; Integer arithmetic is checked and reports
//! overflow instead of wrapping.

use std::cmp::Ordering;

use plar_ir::BinaryOp;

use crate::errors::{
    division_by_zero, integer_overflow, invalid_binary_op, logical_operands, modulo_by_zero,
    EvalResult,
};
use crate::Value;

/// Operands after numeric promotion.
enum Numeric {
    Integers(i64, i64),
    Reals(f64, f64),
}

#[allow(clippy::cast_precision_loss)]
fn promote(left: &Value, right: &Value) -> Option<Numeric> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Some(Numeric::Integers(*a, *b)),
        (Value::Integer(a), Value::Real(b)) => Some(Numeric::Reals(*a as f64, *b)),
        (Value::Real(a), Value::Integer(b)) => Some(Numeric::Reals(*a, *b as f64)),
        (Value::Real(a), Value::Real(b)) => Some(Numeric::Reals(*a, *b)),
        _ => None,
    }
}

#[inline]
fn checked(result: Option<i64>, operation: &'static str) -> EvalResult {
    result.map(Value::Integer).ok_or_else(|| integer_overflow(operation))
}

/// Evaluate a binary operation on two already-evaluated operands.
///
/// `e`/`ou` are accepted here for completeness; the interpreter evaluates
/// them with short-circuiting before reaching this function.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::And | BinaryOp::Or => match (left, right) {
            (Value::Logic(a), Value::Logic(b)) => Ok(Value::Logic(if op == BinaryOp::And {
                *a && *b
            } else {
                *a || *b
            })),
            _ => Err(logical_operands(op.as_symbol())),
        },
        BinaryOp::Eq => Ok(Value::Logic(left.equals(right))),
        BinaryOp::NotEq => Ok(Value::Logic(!left.equals(right))),
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
            compare(left, right, op).map(Value::Logic)
        }
        BinaryOp::Add => add(left, right),
        BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => {
            match promote(left, right) {
                Some(Numeric::Integers(a, b)) => integer_arith(a, b, op),
                Some(Numeric::Reals(a, b)) => real_arith(a, b, op),
                None => Err(mismatch(left, right, op)),
            }
        }
    }
}

#[cold]
fn mismatch(left: &Value, right: &Value, op: BinaryOp) -> crate::EvalError {
    invalid_binary_op(op.as_symbol(), left.type_name(), right.type_name())
}

fn compare(left: &Value, right: &Value, op: BinaryOp) -> Result<bool, crate::EvalError> {
    let ordering = match (left, right) {
        (Value::Text(a), Value::Text(b)) => Some(a.as_str().cmp(b.as_str())),
        _ => match promote(left, right) {
            Some(Numeric::Integers(a, b)) => Some(a.cmp(&b)),
            Some(Numeric::Reals(a, b)) => a.partial_cmp(&b),
            None => return Err(mismatch(left, right, op)),
        },
    };
    // NaN compares false under every relational operator.
    let Some(ordering) = ordering else {
        return Ok(false);
    };
    Ok(match op {
        BinaryOp::Lt => ordering == Ordering::Less,
        BinaryOp::LtEq => ordering != Ordering::Greater,
        BinaryOp::Gt => ordering == Ordering::Greater,
        _ => ordering != Ordering::Less,
    })
}

fn add(left: &Value, right: &Value) -> EvalResult {
    if matches!(left, Value::Text(_)) || matches!(right, Value::Text(_)) {
        return Ok(Value::text(format!("{left}{right}")));
    }
    match promote(left, right) {
        Some(Numeric::Integers(a, b)) => checked(a.checked_add(b), "adicao"),
        Some(Numeric::Reals(a, b)) => Ok(Value::Real(a + b)),
        None => Err(mismatch(left, right, BinaryOp::Add)),
    }
}

#[allow(clippy::cast_precision_loss)]
fn integer_arith(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Sub => checked(a.checked_sub(b), "subtracao"),
        BinaryOp::Mul => checked(a.checked_mul(b), "multiplicacao"),
        BinaryOp::Div => {
            if b == 0 {
                return Err(division_by_zero());
            }
            if a.wrapping_rem(b) == 0 {
                checked(a.checked_div(b), "divisao")
            } else {
                Ok(Value::Real(a as f64 / b as f64))
            }
        }
        BinaryOp::Mod => {
            if b == 0 {
                return Err(modulo_by_zero());
            }
            Ok(Value::Integer(a.wrapping_rem(b)))
        }
        _ => Err(invalid_binary_op(op.as_symbol(), "Inteiro", "Inteiro")),
    }
}

fn real_arith(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Sub => Ok(Value::Real(a - b)),
        BinaryOp::Mul => Ok(Value::Real(a * b)),
        BinaryOp::Div if b == 0.0 => Err(division_by_zero()),
        BinaryOp::Div => Ok(Value::Real(a / b)),
        BinaryOp::Mod if b == 0.0 => Err(modulo_by_zero()),
        BinaryOp::Mod => Ok(Value::Real(a % b)),
        _ => Err(invalid_binary_op(op.as_symbol(), "Real", "Real")),
    }
}
