//! Statement execution and control flow.
//!
//! Every statement produces a [`Flow`]. `retornar`, `quebrar` and
//! `continuar` are values of that type, not errors, and each construct
//! matches on the outcomes it understands and passes the rest up.

use std::rc::Rc;

use plar_ir::{Block, ClassDecl, Expr, ForInit, FunctionDecl, Stmt, StmtKind, VarDecl};
use plar_stack::ensure_sufficient_stack;

use super::{CatchPolicy, Interpreter};
use crate::errors::{
    condition_not_logic, declared_type_mismatch, invalid_return_type, signal_outside_construct,
    EvalError,
};
use crate::value::{FunctionValue, BUILTIN_TYPES};
use crate::Value;

/// Outcome of executing a statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Flow {
    Normal,
    Return(Value),
    Break,
    Continue,
}

pub type ExecResult = Result<Flow, EvalError>;

/// What a loop does after its body ran.
enum LoopStep {
    Next,
    Exit,
    Propagate(Flow),
}

impl LoopStep {
    fn after_body(flow: Flow) -> Self {
        match flow {
            Flow::Normal | Flow::Continue => LoopStep::Next,
            Flow::Break => LoopStep::Exit,
            ret @ Flow::Return(_) => LoopStep::Propagate(ret),
        }
    }
}

impl Interpreter {
    pub fn exec_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        ensure_sufficient_stack(|| self.exec_stmt_inner(stmt))
            .map_err(|err| err.with_span(stmt.span))
    }

    /// Run statements in the current scope, stopping at the first signal.
    pub fn exec_stmts(&mut self, stmts: &[Stmt]) -> ExecResult {
        for stmt in stmts {
            match self.exec_stmt(stmt)? {
                Flow::Normal => {}
                signal => return Ok(signal),
            }
        }
        Ok(Flow::Normal)
    }

    /// Run a block in a child scope.
    pub fn exec_block(&mut self, block: &Block) -> ExecResult {
        self.with_env_scope(|scoped| scoped.exec_stmts(block))
    }

    fn exec_stmt_inner(&mut self, stmt: &Stmt) -> ExecResult {
        match &stmt.kind {
            StmtKind::Var(decl) => {
                self.exec_var_decl(decl)?;
            }
            StmtKind::Function(decl) => {
                let function = self.make_function(decl)?;
                self.env.borrow_mut().define(&decl.name, function);
            }
            StmtKind::Class(decl) => self.declare_class(decl)?,
            StmtKind::Interface(decl) => self.registry.define_interface(Rc::clone(decl)),
            StmtKind::Expr(expr) => {
                self.eval_expr(expr)?;
            }
            StmtKind::Block(block) => return self.exec_block(block),
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval_condition(cond, "se")? {
                    return self.exec_stmt(then_branch);
                }
                if let Some(else_branch) = else_branch {
                    return self.exec_stmt(else_branch);
                }
            }
            StmtKind::While { cond, body } => return self.exec_while(cond, body),
            StmtKind::For {
                init,
                cond,
                step,
                body,
            } => return self.exec_for(init.as_ref(), cond, step.as_ref(), body),
            StmtKind::DoWhile { body, cond } => return self.exec_do_while(body, cond),
            StmtKind::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval_expr(expr)?,
                    None => Value::Null,
                };
                return Ok(Flow::Return(value));
            }
            StmtKind::Break => return Ok(Flow::Break),
            StmtKind::Continue => return Ok(Flow::Continue),
            StmtKind::Try {
                body,
                catch_name,
                handler,
            } => return self.exec_try(body, catch_name.as_deref(), handler),
        }
        Ok(Flow::Normal)
    }

    /// Evaluate the initializer, check the declared type, bind locally.
    pub(crate) fn exec_var_decl(&mut self, decl: &VarDecl) -> Result<(), EvalError> {
        let value = self.eval_expr(&decl.init)?;
        if let Some(ty) = &decl.ty {
            if !value.matches_type(ty) {
                return Err(declared_type_mismatch(&decl.name, ty, value.type_name())
                    .with_span(decl.span));
            }
        }
        self.env.borrow_mut().define(&decl.name, value);
        Ok(())
    }

    /// Build a closure over the current scope, rejecting unknown return types.
    pub(crate) fn make_function(&self, decl: &Rc<FunctionDecl>) -> Result<Value, EvalError> {
        if let Some(ty) = &decl.return_type {
            if !BUILTIN_TYPES.contains(&ty.as_str()) && !self.registry.is_known_type(ty) {
                return Err(invalid_return_type(&decl.name, ty).with_span(decl.span));
            }
        }
        Ok(Value::function(FunctionValue::user(
            Rc::clone(decl),
            self.env.clone(),
        )))
    }

    /// Validate against the registry, then (re-)register.
    pub(crate) fn declare_class(&mut self, decl: &Rc<ClassDecl>) -> Result<(), EvalError> {
        self.registry
            .validate_class(decl)
            .map_err(|err| err.with_span(decl.span))?;
        self.registry.define_class(Rc::clone(decl));
        Ok(())
    }

    pub(crate) fn eval_condition(
        &mut self,
        cond: &Expr,
        construct: &str,
    ) -> Result<bool, EvalError> {
        match self.eval_expr(cond)? {
            Value::Logic(b) => Ok(b),
            other => Err(condition_not_logic(construct, other.type_name()).with_span(cond.span)),
        }
    }

    /// Whether `iterations` has reached the runaway-loop ceiling.
    fn loop_exhausted(&self, iterations: usize, construct: &str) -> bool {
        let max = self.config.max_loop_iterations;
        if iterations >= max {
            tracing::warn!(construct, max, "loop iteration ceiling reached; stopping loop");
            return true;
        }
        false
    }

    fn exec_while(&mut self, cond: &Expr, body: &Stmt) -> ExecResult {
        let mut iterations = 0;
        loop {
            if self.loop_exhausted(iterations, "enquanto") {
                break;
            }
            let holds = self.eval_condition(cond, "enquanto")?;
            tracing::trace!(iteration = iterations, holds, "enquanto");
            if !holds {
                break;
            }
            iterations += 1;
            match LoopStep::after_body(self.exec_stmt(body)?) {
                LoopStep::Next => {}
                LoopStep::Exit => break,
                LoopStep::Propagate(flow) => return Ok(flow),
            }
        }
        Ok(Flow::Normal)
    }

    /// `para`: the initializer's bindings live in a scope around the loop.
    fn exec_for(
        &mut self,
        init: Option<&ForInit>,
        cond: &Expr,
        step: Option<&Expr>,
        body: &Stmt,
    ) -> ExecResult {
        self.with_env_scope(|scoped| {
            match init {
                Some(ForInit::Var(decl)) => scoped.exec_var_decl(decl)?,
                Some(ForInit::Expr(expr)) => {
                    scoped.eval_expr(expr)?;
                }
                None => {}
            }
            let mut iterations = 0;
            loop {
                if scoped.loop_exhausted(iterations, "para") {
                    break;
                }
                let holds = scoped.eval_condition(cond, "para")?;
                tracing::trace!(iteration = iterations, holds, "para");
                if !holds {
                    break;
                }
                iterations += 1;
                match LoopStep::after_body(scoped.exec_stmt(body)?) {
                    LoopStep::Next => {}
                    LoopStep::Exit => break,
                    LoopStep::Propagate(flow) => return Ok(flow),
                }
                if let Some(step) = step {
                    scoped.eval_expr(step)?;
                }
            }
            Ok(Flow::Normal)
        })
    }

    fn exec_do_while(&mut self, body: &Stmt, cond: &Expr) -> ExecResult {
        let mut iterations = 0;
        loop {
            iterations += 1;
            match LoopStep::after_body(self.exec_stmt(body)?) {
                LoopStep::Next => {}
                LoopStep::Exit => break,
                LoopStep::Propagate(flow) => return Ok(flow),
            }
            let holds = self.eval_condition(cond, "faca")?;
            tracing::trace!(iteration = iterations, holds, "faca");
            if !holds || self.loop_exhausted(iterations, "faca") {
                break;
            }
        }
        Ok(Flow::Normal)
    }

    /// `tentar`: run the body; on failure run the handler with the message
    /// bound to the optional catch name.
    fn exec_try(&mut self, body: &Block, catch_name: Option<&str>, handler: &Block) -> ExecResult {
        let message = match self.exec_block(body) {
            Ok(Flow::Normal) => return Ok(Flow::Normal),
            Ok(signal) => match self.config.catch_policy {
                CatchPolicy::ErrorsOnly => return Ok(signal),
                CatchPolicy::Everything => signal_outside_construct(signal_keyword(&signal)).message,
            },
            Err(err) => {
                tracing::debug!(error = %err, "caught error");
                err.message
            }
        };
        self.with_env_scope(|scoped| {
            if let Some(name) = catch_name {
                scoped.env.borrow_mut().define(name, Value::text(message));
            }
            scoped.exec_stmts(handler)
        })
    }
}

/// The keyword that produces a signal.
pub(crate) fn signal_keyword(flow: &Flow) -> &'static str {
    match flow {
        Flow::Return(_) => "retornar",
        Flow::Break => "quebrar",
        Flow::Continue | Flow::Normal => "continuar",
    }
}
