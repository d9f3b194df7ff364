pub mod ast;

use crate::resolver::{Context, ExprId, Line};
use crate::scanner::{Scanner, Token, TokenType};
use std::iter::Peekable;

/// Malformed path text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{line}, column {column}: {msg}")]
pub struct ParseError {
    pub line: Line,
    pub column: usize,
    pub msg: String,
}

/// Parse the text of a qualified name, `ident ('.' ident)* ('as' ident)?`, into path
/// expressions stored in `ctx`.
pub fn parse_path(ctx: &mut Context, source: &str, line: Line) -> Result<ExprId, ParseError> {
    let mut parser = Parser {
        tokens: Scanner::new(source).peekable(),
        ctx,
        line,
    };
    let path = parser.path()?;
    parser.expect(TokenType::Eof, "Expected the end of the path")?;
    Ok(path)
}

struct Parser<'a, 'ctx> {
    tokens: Peekable<Scanner<'a>>,
    ctx: &'ctx mut Context,
    line: Line,
}

impl Parser<'_, '_> {
    fn path(&mut self) -> Result<ExprId, ParseError> {
        let mut path = self.identifier()?;
        while self.advance_on_match(TokenType::Dot).is_some() {
            let segment = self.identifier()?;
            path = self.ctx.dot_expression(path, segment, self.line);
        }
        if self.advance_on_match(TokenType::As).is_some() {
            let alias = self.identifier()?;
            path = self.ctx.as_expression(path, alias, self.line);
        }
        Ok(path)
    }

    fn identifier(&mut self) -> Result<ExprId, ParseError> {
        let token = self.expect(TokenType::Identifier, "Expected an identifier")?;
        Ok(self.ctx.ident_expression(token.lexeme, self.line))
    }

    fn expect(&mut self, ty: TokenType, msg: &str) -> Result<Token, ParseError> {
        if let Some(token) = self.advance_on_match(ty) {
            return Ok(token);
        }
        let (column, msg) = match self.tokens.peek() {
            Some(Token {
                ty: TokenType::SyntaxError { error_msg },
                column,
                lexeme,
            }) => (*column, format!("{error_msg} `{lexeme}`")),
            Some(Token {
                ty: TokenType::Eof,
                column,
                ..
            }) => (*column, format!("{msg}, found the end of the path")),
            Some(token) => (token.column, format!("{msg}, found `{}`", token.lexeme)),
            None => (0, msg.to_owned()),
        };
        Err(ParseError {
            line: self.line,
            column,
            msg,
        })
    }

    fn advance_on_match(&mut self, ty: TokenType) -> Option<Token> {
        self.tokens.next_if(|t| t.ty == ty)
    }
}
