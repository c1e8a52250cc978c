//! Top-level items: imports, function, class and interface declarations.

use std::rc::Rc;

use plar_ir::{
    ClassDecl, FunctionDecl, ImportDecl, InterfaceDecl, MethodSignature, TokenKind,
};

use crate::{ParseError, Parser};

/// Name given to function literals without one.
pub(crate) const ANONYMOUS_FUNCTION: &str = "anonima";

impl Parser<'_> {
    /// `importar "arquivo.plar" ;?`
    pub(crate) fn parse_import(&mut self) -> Result<ImportDecl, ParseError> {
        let start = self.expect(&TokenKind::Import)?;
        let TokenKind::Text(path) = self.current_kind() else {
            return Err(self.unexpected("caminho entre aspas"));
        };
        let path = path.clone();
        self.advance();
        self.eat(&TokenKind::Semicolon);
        Ok(ImportDecl {
            path,
            span: start.merge(self.previous_span()),
        })
    }

    /// `funcao nome(a, b): Tipo { ... }`
    ///
    /// With `anonymous` set the name is optional, for function literals.
    pub(crate) fn parse_function(&mut self, anonymous: bool) -> Result<FunctionDecl, ParseError> {
        let start = self.expect(&TokenKind::Function)?;
        let name = if anonymous && !matches!(self.current_kind(), TokenKind::Ident(_)) {
            ANONYMOUS_FUNCTION.to_string()
        } else {
            self.expect_ident("nome da funcao")?.0
        };
        let params = self.parse_params()?;
        let return_type = self.parse_type_annotation()?;
        let body = self.parse_block()?;
        Ok(FunctionDecl {
            name,
            params,
            return_type,
            body,
            span: start.merge(self.previous_span()),
        })
    }

    /// `( a, b, c )`
    fn parse_params(&mut self) -> Result<Vec<String>, ParseError> {
        self.expect(&TokenKind::LParen)?;
        let mut params = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                params.push(self.expect_ident("nome do parametro")?.0);
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RParen)?;
        Ok(params)
    }

    /// `(: Tipo)?`
    pub(crate) fn parse_type_annotation(&mut self) -> Result<Option<String>, ParseError> {
        if self.eat(&TokenKind::Colon) {
            Ok(Some(self.expect_ident("nome de tipo")?.0))
        } else {
            Ok(None)
        }
    }

    /// `classe Nome estende Base implementa I1, I2 { var ...; funcao ... }`
    pub(crate) fn parse_class(&mut self) -> Result<ClassDecl, ParseError> {
        let start = self.expect(&TokenKind::Class)?;
        let (name, _) = self.expect_ident("nome da classe")?;

        let superclass = if self.eat(&TokenKind::Extends) {
            Some(self.expect_ident("nome da superclasse")?.0)
        } else {
            None
        };

        let mut interfaces = Vec::new();
        if self.eat(&TokenKind::Implements) {
            loop {
                interfaces.push(self.expect_ident("nome da interface")?.0);
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect(&TokenKind::LBrace)?;
        let mut fields = Vec::new();
        let mut methods = Vec::new();
        loop {
            match self.current_kind() {
                TokenKind::RBrace => break,
                TokenKind::Var => {
                    fields.push(self.parse_var_decl()?);
                    self.expect(&TokenKind::Semicolon)?;
                }
                TokenKind::Function => methods.push(Rc::new(self.parse_function(false)?)),
                _ => return Err(self.unexpected("`var`, `funcao` ou `}`")),
            }
        }
        self.expect(&TokenKind::RBrace)?;

        Ok(ClassDecl {
            name,
            superclass,
            interfaces,
            fields,
            methods,
            span: start.merge(self.previous_span()),
        })
    }

    /// `interface Nome { funcao metodo(a): Tipo; }`
    pub(crate) fn parse_interface(&mut self) -> Result<InterfaceDecl, ParseError> {
        let start = self.expect(&TokenKind::Interface)?;
        let (name, _) = self.expect_ident("nome da interface")?;
        self.expect(&TokenKind::LBrace)?;

        let mut methods = Vec::new();
        while !self.check(&TokenKind::RBrace) {
            let sig_start = self.expect(&TokenKind::Function)?;
            let (method, _) = self.expect_ident("nome do metodo")?;
            let params = self.parse_params()?;
            let return_type = self.parse_type_annotation()?;
            self.eat(&TokenKind::Semicolon);
            methods.push(MethodSignature {
                name: method,
                params,
                return_type,
                span: sig_start.merge(self.previous_span()),
            });
        }
        self.expect(&TokenKind::RBrace)?;

        Ok(InterfaceDecl {
            name,
            methods,
            span: start.merge(self.previous_span()),
        })
    }
}
