//! Primary expressions.

use std::rc::Rc;

use plar_ir::{Expr, ExprKind, TokenKind};

use crate::{ParseError, Parser};

/// Built-in constructor for fixed-length lists: `Lista(n)`.
const LIST_CONSTRUCTOR: &str = "Lista";
/// Built-in constructor for empty maps: `Mapa()`.
const MAP_CONSTRUCTOR: &str = "Mapa";

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let start = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Integer(n) => {
                self.advance();
                ExprKind::Integer(*n)
            }
            TokenKind::Real(r) => {
                self.advance();
                ExprKind::Real(*r)
            }
            TokenKind::Text(text) => {
                self.advance();
                ExprKind::Text(text.clone())
            }
            TokenKind::True => {
                self.advance();
                ExprKind::Logic(true)
            }
            TokenKind::False => {
                self.advance();
                ExprKind::Logic(false)
            }
            TokenKind::Null => {
                self.advance();
                ExprKind::Null
            }
            TokenKind::This => {
                self.advance();
                ExprKind::This
            }
            TokenKind::Ident(name)
                if name == LIST_CONSTRUCTOR
                    && matches!(self.peek_next_kind(), TokenKind::LParen) =>
            {
                self.advance();
                self.expect(&TokenKind::LParen)?;
                let len = self.parse_expr()?;
                self.expect(&TokenKind::RParen)?;
                ExprKind::ListNew(Box::new(len))
            }
            TokenKind::Ident(name)
                if name == MAP_CONSTRUCTOR
                    && matches!(self.peek_next_kind(), TokenKind::LParen) =>
            {
                self.advance();
                self.expect(&TokenKind::LParen)?;
                self.expect(&TokenKind::RParen)?;
                ExprKind::MapNew
            }
            TokenKind::Ident(name) => {
                self.advance();
                ExprKind::Ident(name.clone())
            }
            TokenKind::New => {
                self.advance();
                let (class, _) = self.expect_ident("nome da classe")?;
                let args = self.parse_args()?;
                ExprKind::New { class, args }
            }
            TokenKind::Function => ExprKind::Function(Rc::new(self.parse_function(true)?)),
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(&TokenKind::RParen)?;
                // Parentheses only group; keep the inner node with the wider span.
                return Ok(Expr::new(inner.kind, start.merge(self.previous_span())));
            }
            _ => return Err(self.unexpected("expressao")),
        };
        Ok(Expr::new(kind, start.merge(self.previous_span())))
    }
}
