use multipeek::{multipeek, MultiPeek};
use std::fmt::Formatter;
use std::str::CharIndices;

/// Splits the text of a qualified name (`pkg.module.f as g`) into tokens.
///
/// The scanner never fails: malformed input becomes a [`TokenType::SyntaxError`] token and the
/// parser decides what to do with it. The last token is always [`TokenType::Eof`].
pub struct Scanner<'a> {
    source: MultiPeek<CharIndices<'a>>,
    length: usize,
    done: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source: multipeek(source.char_indices()),
            length: source.len(),
            done: false,
        }
    }

    fn scan_token(&mut self) -> Token {
        self.skip_trivia();
        let Some((column, c)) = self.source.next() else {
            self.done = true;
            return Token::new(TokenType::Eof, "", self.length);
        };
        match c {
            '.' => Token::new(TokenType::Dot, ".", column),
            c if is_identifier_start(c) => {
                let mut lexeme = String::from(c);
                while let Some(&(_, next)) = self.source.peek() {
                    if !is_identifier_continue(next) {
                        break;
                    }
                    lexeme.push(next);
                    self.source.next();
                }
                let ty = if lexeme == "as" {
                    TokenType::As
                } else {
                    TokenType::Identifier
                };
                Token::new(ty, lexeme, column)
            }
            c => Token::new(
                TokenType::SyntaxError {
                    error_msg: "Unexpected character",
                },
                c.to_string(),
                column,
            ),
        }
    }

    fn skip_trivia(&mut self) {
        while let Some(&(_, c)) = self.source.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.source.next();
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            None
        } else {
            Some(self.scan_token())
        }
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub ty: TokenType,
    pub lexeme: String,
    /// Byte offset of the token in the source text.
    pub column: usize,
}

impl Token {
    fn new(ty: TokenType, lexeme: impl Into<String>, column: usize) -> Self {
        Self {
            ty,
            lexeme: lexeme.into(),
            column,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {:?}", self.column, self.ty)?;
        if !self.lexeme.is_empty() {
            write!(f, " {}", self.lexeme)?;
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenType {
    Dot,
    Identifier,
    // Keywords
    As,
    // End of input
    Eof,
    // Special token to signal that we encountered a character
    // that cannot be part of a path.
    SyntaxError { error_msg: &'static str },
}
