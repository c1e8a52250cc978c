//! Expression evaluation: literals, names, operators, member access,
//! indexing and assignment.

use plar_ir::{AssignTarget, BinaryOp, Expr, ExprKind};
use plar_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{
    index_out_of_bounds, invalid_assignment_target, invalid_index, logical_operands,
    not_an_object, this_outside_method, undefined_function, undefined_variable, wrong_arg_type,
    EvalError, EvalResult,
};
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::value::{Heap, MapValue, ObjectValue};
use crate::Value;

/// Bounds-checked list position.
fn list_position(index: i64, len: usize) -> Result<usize, EvalError> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < len)
        .ok_or_else(|| index_out_of_bounds(index, len))
}

impl Interpreter {
    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr))
            .map_err(|err| err.with_span(expr.span))
    }

    pub(crate) fn eval_args(&mut self, args: &[Expr]) -> Result<Vec<Value>, EvalError> {
        args.iter().map(|arg| self.eval_expr(arg)).collect()
    }

    fn eval_expr_inner(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Null => Ok(Value::Null),
            ExprKind::Integer(n) => Ok(Value::Integer(*n)),
            ExprKind::Real(r) => Ok(Value::Real(*r)),
            ExprKind::Text(s) => Ok(Value::text(s.as_str())),
            ExprKind::Logic(b) => Ok(Value::Logic(*b)),
            ExprKind::This => self
                .current_this()
                .map(Value::Object)
                .ok_or_else(this_outside_method),
            ExprKind::Ident(name) => self
                .env
                .borrow()
                .get(name)
                .ok_or_else(|| undefined_variable(name)),
            ExprKind::ListNew(len) => {
                let len_value = self.eval_expr(len)?;
                match &len_value {
                    Value::Integer(n) => usize::try_from(*n)
                        .map(Value::list_of_nulls)
                        .map_err(|_| wrong_arg_type("Lista", "Inteiro nao negativo", &n.to_string())),
                    other => Err(wrong_arg_type("Lista", "Inteiro", other.type_name())),
                }
            }
            ExprKind::MapNew => Ok(Value::map(MapValue::new())),
            ExprKind::Call { callee, args } => self.eval_call(callee, args),
            ExprKind::MethodCall {
                receiver,
                method,
                args,
            } => match self.eval_expr(receiver)? {
                // A null receiver ends the chain without evaluating arguments.
                Value::Null => Ok(Value::Null),
                Value::Object(obj) => {
                    let args = self.eval_args(args)?;
                    self.call_method(&obj, method, args)
                }
                other => Err(not_an_object(other.type_name())),
            },
            ExprKind::Field { receiver, name } => match self.eval_expr(receiver)? {
                Value::Null => Ok(Value::Null),
                Value::Object(obj) => Ok(obj.field(name).unwrap_or(Value::Null)),
                other => Err(not_an_object(other.type_name())),
            },
            ExprKind::Index { receiver, index } => {
                let receiver = self.eval_expr(receiver)?;
                let index = self.eval_expr(index)?;
                index_value(&receiver, &index)
            }
            ExprKind::New { class, args } => {
                let args = self.eval_args(args)?;
                self.construct(class, args)
            }
            ExprKind::Unary { op, operand } => {
                let value = self.eval_expr(operand)?;
                evaluate_unary(&value, *op)
            }
            ExprKind::Binary { op, left, right } => self.eval_binary(*op, left, right),
            ExprKind::Assign { target, value } => self.eval_assign(target, value),
            ExprKind::Function(decl) => self.make_function(decl),
        }
    }

    /// The object bound to `este` in the current scope.
    pub(crate) fn current_this(&self) -> Option<Heap<ObjectValue>> {
        self.env.borrow().this().cloned()
    }

    fn eval_binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr) -> EvalResult {
        let lhs = self.eval_expr(left)?;
        if op.is_short_circuit() {
            let Value::Logic(l) = lhs else {
                return Err(logical_operands(op.as_symbol()));
            };
            if (op == BinaryOp::And && !l) || (op == BinaryOp::Or && l) {
                return Ok(Value::Logic(l));
            }
            return match self.eval_expr(right)? {
                Value::Logic(r) => Ok(Value::Logic(r)),
                _ => Err(logical_operands(op.as_symbol())),
            };
        }
        let rhs = self.eval_expr(right)?;
        evaluate_binary(&lhs, &rhs, op)
    }

    /// `nome(args)` prefers a method on `este`, then a function value in
    /// scope. Any other callee expression is evaluated and called.
    fn eval_call(&mut self, callee: &Expr, args: &[Expr]) -> EvalResult {
        if let ExprKind::Ident(name) = &callee.kind {
            if let Some(this) = self.current_this() {
                if self.registry.find_method(&this.class, name).is_some() {
                    let args = self.eval_args(args)?;
                    return self.call_method(&this, name, args);
                }
            }
            let function = self.env.borrow().get(name);
            let function = function.ok_or_else(|| undefined_function(name))?;
            let args = self.eval_args(args)?;
            return self.call_value(&function, args);
        }
        let function = self.eval_expr(callee)?;
        let args = self.eval_args(args)?;
        self.call_value(&function, args)
    }

    fn eval_assign(&mut self, target: &AssignTarget, value: &Expr) -> EvalResult {
        match target {
            AssignTarget::Variable(name) => {
                let value = self.eval_expr(value)?;
                self.env.borrow_mut().update_or_define(name, value.clone());
                Ok(value)
            }
            AssignTarget::Field { receiver, name } => {
                let receiver = self.eval_expr(receiver)?;
                let value = self.eval_expr(value)?;
                match receiver {
                    Value::Object(obj) => {
                        obj.set_field(name, value.clone());
                        Ok(value)
                    }
                    other => Err(not_an_object(other.type_name())),
                }
            }
            AssignTarget::Index { receiver, index } => {
                let receiver = self.eval_expr(receiver)?;
                let index = self.eval_expr(index)?;
                let value = self.eval_expr(value)?;
                match (&receiver, &index) {
                    (Value::List(items), Value::Integer(i)) => {
                        let mut items = items.borrow_mut();
                        let position = list_position(*i, items.len())?;
                        items[position] = value.clone();
                    }
                    (Value::Map(map), key) => map.borrow_mut().insert(key.clone(), value.clone()),
                    _ => return Err(invalid_assignment_target()),
                }
                Ok(value)
            }
        }
    }
}

/// `receptor[indice]` for lists, maps and objects with a Text key.
fn index_value(receiver: &Value, index: &Value) -> EvalResult {
    match (receiver, index) {
        (Value::List(items), Value::Integer(i)) => {
            let items = items.borrow();
            let position = list_position(*i, items.len())?;
            Ok(items[position].clone())
        }
        (Value::Map(map), key) => Ok(map.borrow().get(key).unwrap_or(Value::Null)),
        (Value::Object(obj), Value::Text(name)) => Ok(obj.field(name).unwrap_or(Value::Null)),
        _ => Err(invalid_index(receiver.type_name(), index.type_name())),
    }
}
