use thiserror::Error;

use crate::ast::{BinOp, Expr, Stmt};
use crate::diag::{LexicalError, Position, SyntaxError, SyntaxErrorKind};
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("lexical error: {0}")]
    Lexical(#[from] LexicalError),
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}

/// Recursive-descent parser with one token of lookahead.
///
/// Tokens are pulled from the scanner on demand; the whole input is never
/// tokenized up front.  The first error aborts the parse, no partial
/// program is ever returned.
#[derive(Debug)]
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    current: Token,
    current_pos: Position,
    previous: Token,
    previous_pos: Position,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Parser<'a> {
        Parser {
            scanner: Scanner::new(source),
            // We haven't scanned anything yet.
            current: Token::new(TokenKind::Eof),
            current_pos: 1,
            previous: Token::new(TokenKind::Eof),
            previous_pos: 1,
        }
    }

    /// Parse a whole program: statements separated by `;`, with an optional
    /// trailing `;`, followed by end of input.
    pub fn parse_program(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.advance()?;
        let mut prg = vec![self.statement()?];
        while self.matches(TokenKind::Semicolon)? {
            if self.is_at_end() {
                break;
            }
            prg.push(self.statement()?);
        }
        if !self.is_at_end() {
            return Err(self.unexpected(TokenKind::Semicolon));
        }
        Ok(prg)
    }

    /// Parse a single expression followed by end of input.
    #[allow(dead_code)]
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.advance()?;
        let expr = self.expression()?;
        if !self.is_at_end() {
            return Err(self.unexpected(TokenKind::Eof));
        }
        Ok(expr)
    }

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        if self.matches(TokenKind::Identifier)? {
            let name = self.previous.lexeme.clone();
            self.consume(TokenKind::Equal)?;
            let expr = self.expression()?;
            Ok(Stmt::Assign(name, Box::new(expr)))
        } else if self.matches(TokenKind::Print)? {
            self.consume(TokenKind::LeftParen)?;
            let expr = self.expression()?;
            self.consume(TokenKind::RightParen)?;
            Ok(Stmt::Print(Box::new(expr)))
        } else {
            Err(self.syntax_error(SyntaxErrorKind::ExpectedStatement(
                self.current.to_string(),
            )))
        }
    }

    fn expression(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.term()?;
        while self.matches(TokenKind::Plus)? || self.matches(TokenKind::Minus)? {
            let op = if self.previous.kind == TokenKind::Plus {
                BinOp::Add
            } else {
                BinOp::Sub
            };
            let rhs = self.term()?;
            expr = Expr::binary(op, expr, rhs);
        }
        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.factor()?;
        while self.matches(TokenKind::Star)? || self.matches(TokenKind::Slash)? {
            let op = if self.previous.kind == TokenKind::Star {
                BinOp::Mul
            } else {
                BinOp::Div
            };
            let rhs = self.factor()?;
            expr = Expr::binary(op, expr, rhs);
        }
        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        if self.matches(TokenKind::Identifier)? {
            Ok(Expr::Var(self.previous.lexeme.clone()))
        } else if self.matches(TokenKind::Number)? {
            let lexeme = &self.previous.lexeme;
            lexeme.parse::<i64>().map(Expr::Number).map_err(|_| {
                ParseError::Syntax(SyntaxError {
                    pos: self.previous_pos,
                    kind: SyntaxErrorKind::IntLiteralOutOfRange(lexeme.clone()),
                })
            })
        } else if self.matches(TokenKind::LeftParen)? {
            let expr = self.expression()?;
            self.consume(TokenKind::RightParen)?;
            Ok(expr)
        } else {
            Err(self.syntax_error(SyntaxErrorKind::ExpectedFactor(self.current.to_string())))
        }
    }

    /// Pull the next token from the scanner.  An `Error` token is a fatal
    /// lexical error, reported before any grammar check gets to run.
    fn advance(&mut self) -> Result<(), ParseError> {
        let (pos, token) = self.scanner.get_token();
        if token.kind == TokenKind::Error {
            return Err(ParseError::Lexical(LexicalError {
                pos,
                lexeme: token.lexeme,
            }));
        }
        self.previous = std::mem::replace(&mut self.current, token);
        self.previous_pos = self.current_pos;
        self.current_pos = pos;
        Ok(())
    }

    fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.current.kind == kind
    }

    fn is_at_end(&self) -> bool {
        self.current.kind == TokenKind::Eof
    }

    /// Consume the current token and return true iff it has the given kind.
    fn matches(&mut self, kind: TokenKind) -> Result<bool, ParseError> {
        if self.check(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn consume(&mut self, expected: TokenKind) -> Result<(), ParseError> {
        if self.check(expected) {
            self.advance()
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn unexpected(&self, expected: TokenKind) -> ParseError {
        self.syntax_error(SyntaxErrorKind::UnexpectedToken {
            found: self.current.to_string(),
            expected: expected.to_string(),
        })
    }

    fn syntax_error(&self, kind: SyntaxErrorKind) -> ParseError {
        ParseError::Syntax(SyntaxError {
            pos: self.current_pos,
            kind,
        })
    }
}
