// expr ::= constant
//      |   let [rec] let-binding in expr
// constant ::= false | true | ()
// let-binding ::= value-name = expr
// value-name ::= lowercase-ident
// lowercase-ident ::= (a..z | _) { letter | 0..9 | _ | ' }
//
// Reserved for later: `and`-chained bindings (the `and` keyword already
// lexes) and `[: typexpr] [:> typexpr]` annotations on a binding.

use crate::{
    ast::{Constant, Expr, ExprLet, LetBinding, ValueName},
    error::Result,
    lexer::{Lexer, Token, TokenKind},
    span::{Span, Spanned},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}: expected '{1}' but got '{2}'")]
    UnexpectedToken(Span, String, Token),
}

#[derive(Debug)]
pub struct Parser {
    lexer: Lexer,
    token: Spanned<Token>,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self> {
        let token = lexer.next_token()?;
        Ok(Parser { lexer, token })
    }

    pub fn parse(&mut self) -> Result<Expr> {
        let expr = self.expr()?;
        self.eat(TokenKind::Eof)?;
        Ok(expr)
    }

    fn advance(&mut self) -> Result<()> {
        self.token = self.lexer.next_token()?;
        Ok(())
    }

    fn eat(&mut self, kind: TokenKind) -> Result<()> {
        if self.token.value.kind != kind {
            return Err(Error::UnexpectedToken(
                self.token.span,
                kind.to_string(),
                self.token.value.clone(),
            )
            .into());
        }
        self.advance()
    }

    fn eat_optional(&mut self, kind: TokenKind) -> Result<bool> {
        if self.token.value.kind == kind {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expr(&mut self) -> Result<Expr> {
        if let Some(constant) = self.constant()? {
            return Ok(Expr::Constant(constant));
        }

        if self.token.value.kind != TokenKind::Let {
            return Err(Error::UnexpectedToken(
                self.token.span,
                "expression".to_string(),
                self.token.value.clone(),
            )
            .into());
        }

        self.eat(TokenKind::Let)?;
        let rec = self.eat_optional(TokenKind::Rec)?;
        let binding = self.let_binding()?;
        self.eat(TokenKind::In)?;
        let body = self.expr()?;

        Ok(Expr::Let(ExprLet {
            rec,
            binding,
            body: Box::new(body),
        }))
    }

    fn constant(&mut self) -> Result<Option<Constant>> {
        match self.token.value.kind {
            TokenKind::False | TokenKind::True | TokenKind::Unit => {
                let kind = self.token.value.kind;
                self.advance()?;
                Ok(Some(Constant { kind }))
            }
            _ => Ok(None),
        }
    }

    fn let_binding(&mut self) -> Result<LetBinding> {
        let name = self.value_name()?;
        self.eat(TokenKind::Equal)?;
        let value = self.expr()?;
        Ok(LetBinding {
            name,
            value: Box::new(value),
        })
    }

    fn value_name(&mut self) -> Result<ValueName> {
        let token = self.token.value.clone();
        self.eat(TokenKind::LowercaseIdent)?;
        Ok(ValueName { token })
    }
}

pub fn parse(input: &str) -> Result<Expr> {
    let mut parser = Parser::new(Lexer::new(input))?;
    parser.parse()
}
