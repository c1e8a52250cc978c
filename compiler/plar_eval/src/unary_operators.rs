//! Unary operator semantics.

use plar_ir::UnaryOp;

use crate::errors::{integer_overflow, invalid_unary_op, EvalResult};
use crate::Value;

/// `!` needs a Logic operand; `-` needs Integer or Real and keeps the type.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> EvalResult {
    match (value, op) {
        (Value::Integer(n), UnaryOp::Neg) => n
            .checked_neg()
            .map(Value::Integer)
            .ok_or_else(|| integer_overflow("negacao")),
        (Value::Real(r), UnaryOp::Neg) => Ok(Value::Real(-r)),
        (Value::Logic(b), UnaryOp::Not) => Ok(Value::Logic(!b)),
        _ => Err(invalid_unary_op(op.as_symbol(), value.type_name())),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::errors::EvalErrorKind;

    #[test]
    fn negation_preserves_type() {
        assert_eq!(
            evaluate_unary(&Value::Integer(3), UnaryOp::Neg).unwrap(),
            Value::Integer(-3)
        );
        assert_eq!(
            evaluate_unary(&Value::Real(2.5), UnaryOp::Neg).unwrap(),
            Value::Real(-2.5)
        );
    }

    #[test]
    fn negating_min_overflows() {
        assert!(matches!(
            evaluate_unary(&Value::Integer(i64::MIN), UnaryOp::Neg)
                .unwrap_err()
                .kind,
            EvalErrorKind::IntegerOverflow { .. }
        ));
    }

    #[test]
    fn not_requires_logic() {
        assert_eq!(
            evaluate_unary(&Value::Logic(true), UnaryOp::Not).unwrap(),
            Value::Logic(false)
        );
        assert_eq!(
            evaluate_unary(&Value::Integer(0), UnaryOp::Not)
                .unwrap_err()
                .kind,
            EvalErrorKind::InvalidUnaryOp {
                op: "!".to_string(),
                type_name: "Inteiro".to_string(),
            }
        );
    }

    #[test]
    fn minus_on_text_fails() {
        assert!(evaluate_unary(&Value::text("a"), UnaryOp::Neg).is_err());
    }
}
