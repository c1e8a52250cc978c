//! Statement parsing.

use std::rc::Rc;

use plar_ir::{Block, ForInit, Stmt, StmtKind, TokenKind, VarDecl};
use plar_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse one statement.
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| self.parse_stmt_inner())
    }

    fn parse_stmt_inner(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Class => StmtKind::Class(Rc::new(self.parse_class()?)),
            TokenKind::Interface => StmtKind::Interface(Rc::new(self.parse_interface()?)),
            TokenKind::Function if matches!(self.peek_next_kind(), TokenKind::Ident(_)) => {
                StmtKind::Function(Rc::new(self.parse_function(false)?))
            }
            TokenKind::Var => {
                let decl = self.parse_var_decl()?;
                self.expect(&TokenKind::Semicolon)?;
                StmtKind::Var(decl)
            }
            TokenKind::LBrace => StmtKind::Block(self.parse_block()?),
            TokenKind::If => self.parse_if()?,
            TokenKind::While => self.parse_while()?,
            TokenKind::For => self.parse_for()?,
            TokenKind::Do => self.parse_do_while()?,
            TokenKind::Try => self.parse_try()?,
            TokenKind::Return => {
                self.advance();
                let value = if self.check(&TokenKind::Semicolon) {
                    None
                } else {
                    Some(self.parse_expr()?)
                };
                self.expect(&TokenKind::Semicolon)?;
                StmtKind::Return(value)
            }
            TokenKind::Break => {
                self.advance();
                self.expect(&TokenKind::Semicolon)?;
                StmtKind::Break
            }
            TokenKind::Continue => {
                self.advance();
                self.expect(&TokenKind::Semicolon)?;
                StmtKind::Continue
            }
            _ => {
                let expr = self.parse_expr()?;
                self.expect(&TokenKind::Semicolon)?;
                StmtKind::Expr(expr)
            }
        };
        Ok(Stmt::new(kind, start.merge(self.previous_span())))
    }

    /// `{ stmt* }`
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        self.expect(&TokenKind::LBrace)?;
        let mut stmts = Vec::new();
        while !self.check(&TokenKind::RBrace) {
            if self.is_at_end() {
                return Err(self.unexpected("`}`"));
            }
            stmts.push(self.parse_stmt()?);
        }
        self.expect(&TokenKind::RBrace)?;
        Ok(stmts)
    }

    /// `var nome (: Tipo)? = expr`, without the trailing `;`.
    pub(crate) fn parse_var_decl(&mut self) -> Result<VarDecl, ParseError> {
        let start = self.expect(&TokenKind::Var)?;
        let (name, _) = self.expect_ident("nome da variavel")?;
        let ty = self.parse_type_annotation()?;
        self.expect(&TokenKind::Eq)?;
        let init = self.parse_expr()?;
        Ok(VarDecl {
            name,
            ty,
            init,
            span: start.merge(self.previous_span()),
        })
    }

    /// `se (cond) stmt (senao stmt)?`
    fn parse_if(&mut self) -> Result<StmtKind, ParseError> {
        self.expect(&TokenKind::If)?;
        let cond = self.parse_paren_expr()?;
        let then_branch = Box::new(self.parse_stmt()?);
        let else_branch = if self.eat(&TokenKind::Else) {
            Some(Box::new(self.parse_stmt()?))
        } else {
            None
        };
        Ok(StmtKind::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    /// `enquanto (cond) stmt`
    fn parse_while(&mut self) -> Result<StmtKind, ParseError> {
        self.expect(&TokenKind::While)?;
        let cond = self.parse_paren_expr()?;
        let body = Box::new(self.parse_stmt()?);
        Ok(StmtKind::While { cond, body })
    }

    /// `para (init?; cond; step?) stmt`
    fn parse_for(&mut self) -> Result<StmtKind, ParseError> {
        self.expect(&TokenKind::For)?;
        self.expect(&TokenKind::LParen)?;

        let init = match self.current_kind() {
            TokenKind::Semicolon => None,
            TokenKind::Var => Some(ForInit::Var(self.parse_var_decl()?)),
            _ => Some(ForInit::Expr(self.parse_expr()?)),
        };
        self.expect(&TokenKind::Semicolon)?;

        let cond = self.parse_expr()?;
        self.expect(&TokenKind::Semicolon)?;

        let step = if self.check(&TokenKind::RParen) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(&TokenKind::RParen)?;

        let body = Box::new(self.parse_stmt()?);
        Ok(StmtKind::For {
            init,
            cond,
            step,
            body,
        })
    }

    /// `faca stmt enquanto (cond) ;?`
    fn parse_do_while(&mut self) -> Result<StmtKind, ParseError> {
        self.expect(&TokenKind::Do)?;
        let body = Box::new(self.parse_stmt()?);
        self.expect(&TokenKind::While)?;
        let cond = self.parse_paren_expr()?;
        self.eat(&TokenKind::Semicolon);
        Ok(StmtKind::DoWhile { body, cond })
    }

    /// `tentar { } capturar (nome)? { }`
    fn parse_try(&mut self) -> Result<StmtKind, ParseError> {
        self.expect(&TokenKind::Try)?;
        let body = self.parse_block()?;
        self.expect(&TokenKind::Catch)?;
        let catch_name = if self.eat(&TokenKind::LParen) {
            let (name, _) = self.expect_ident("nome do erro")?;
            self.expect(&TokenKind::RParen)?;
            Some(name)
        } else {
            None
        };
        let handler = self.parse_block()?;
        Ok(StmtKind::Try {
            body,
            catch_name,
            handler,
        })
    }
}
