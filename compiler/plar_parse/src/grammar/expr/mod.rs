//! Expression parsing.
//!
//! Precedence, lowest to highest:
//! assignment, `ou`, `e`, equality, relational, additive, multiplicative,
//! unary, postfix (call, member, index), primary.
//!
//! # Module Structure
//!
//! - `mod.rs`: entry point and the binary precedence chain
//! - `operators.rs`: operator matching helpers
//! - `postfix.rs`: calls, member access, indexing
//! - `primary.rs`: literals, identifiers, `novo`, function literals

mod operators;
mod postfix;
mod primary;

use plar_ir::{AssignTarget, BinaryOp, Expr, ExprKind, TokenKind};
use plar_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression, including assignment.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> Result<Expr, ParseError> {
        let left = self.parse_binary_or()?;

        if !self.check(&TokenKind::Eq) {
            return Ok(left);
        }
        self.advance();
        let value = self.parse_expr()?;
        let span = left.span.merge(value.span);

        let target = match left.kind {
            ExprKind::Ident(name) => AssignTarget::Variable(name),
            ExprKind::Field { receiver, name } => AssignTarget::Field { receiver, name },
            ExprKind::Index { receiver, index } => AssignTarget::Index { receiver, index },
            _ => return Err(ParseError::invalid_assignment_target(left.span)),
        };
        Ok(Expr::new(
            ExprKind::Assign {
                target,
                value: Box::new(value),
            },
            span,
        ))
    }

    /// Fold a left-associative binary level.
    fn parse_binary_level(
        &mut self,
        match_op: fn(&Self) -> Option<BinaryOp>,
        next: fn(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let mut left = next(self)?;
        while let Some(op) = match_op(self) {
            self.advance();
            let right = next(self)?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    fn parse_binary_or(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(Self::match_or_op, Self::parse_binary_and)
    }

    fn parse_binary_and(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(Self::match_and_op, Self::parse_equality)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(Self::match_equality_op, Self::parse_comparison)
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(Self::match_comparison_op, Self::parse_additive)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(Self::match_additive_op, Self::parse_multiplicative)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(Self::match_multiplicative_op, Self::parse_unary)
    }

    /// `!x`, `-x`, recursing so `!!x` and `--x` nest.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let Some(op) = self.match_unary_op() else {
            return self.parse_postfix();
        };
        let start = self.advance().span;
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        let span = start.merge(operand.span);
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    /// `( expr )` as used by statement headers.
    pub(crate) fn parse_paren_expr(&mut self) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LParen)?;
        let expr = self.parse_expr()?;
        self.expect(&TokenKind::RParen)?;
        Ok(expr)
    }

    /// `( arg, arg )`, the opening paren already current.
    pub(crate) fn parse_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        self.expect(&TokenKind::LParen)?;
        let mut args = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                args.push(self.parse_expr()?);
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RParen)?;
        Ok(args)
    }
}
