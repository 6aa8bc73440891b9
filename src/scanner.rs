//! Lexical analyzer

use std::iter::Peekable;
use std::str::Chars;

use crate::diag::Position;
use crate::token::{Token, TokenKind};

/// Turn program text into a sequence of tokens.
///
/// The cursor only moves forward; once the input is exhausted every further
/// call yields `Eof` again.  Unrecognized characters become `Error` tokens
/// rather than failing here, so the caller decides how to report them.
pub struct Scanner<'a> {
    input: Peekable<Chars<'a>>,

    // Number of characters consumed so far.
    pos: Position,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner operating on `source`.
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner {
            input: source.chars().peekable(),
            pos: 0,
        }
    }

    /// Scan the next token and return it with the column it starts at.
    pub fn get_token(&mut self) -> (Position, Token) {
        self.skip_whitespace();
        let start = self.pos + 1;
        let token = match self.next_char() {
            None => Token::new(TokenKind::Eof),
            Some(ch) => match ch {
                '+' => Token::new(TokenKind::Plus),
                '-' => Token::new(TokenKind::Minus),
                '*' => Token::new(TokenKind::Star),
                '/' => Token::new(TokenKind::Slash),
                '(' => Token::new(TokenKind::LeftParen),
                ')' => Token::new(TokenKind::RightParen),
                ';' => Token::new(TokenKind::Semicolon),
                '=' => Token::new(TokenKind::Equal),
                '0'..='9' => self.scan_number(ch),
                ch if ch.is_ascii_alphabetic() => self.scan_identifier(ch),
                ch => Token::with_lexeme(TokenKind::Error, ch.to_string()),
            },
        };
        (start, token)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.input.peek(), Some(ch) if ch.is_ascii_whitespace()) {
            self.next_char();
        }
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.input.next();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    /// Return the next character.  Panic on EOF.
    /// Use this after peek()ing only.
    fn next_char_unchecked(&mut self) -> char {
        self.next_char().expect("peeked character vanished")
    }

    /// Maximal run of digits.
    fn scan_number(&mut self, first_digit: char) -> Token {
        let mut lexeme = String::new();
        lexeme.push(first_digit);
        while matches!(self.input.peek(), Some(ch) if ch.is_ascii_digit()) {
            let ch = self.next_char_unchecked();
            lexeme.push(ch);
        }
        Token::with_lexeme(TokenKind::Number, lexeme)
    }

    /// Maximal run of letters and digits.  The reserved word `print` shadows
    /// identifiers exactly (no case folding).
    fn scan_identifier(&mut self, first_char: char) -> Token {
        let mut lexeme = String::new();
        lexeme.push(first_char);
        while matches!(self.input.peek(), Some(ch) if ch.is_ascii_alphanumeric()) {
            let ch = self.next_char_unchecked();
            lexeme.push(ch);
        }
        if lexeme == "print" {
            Token::with_lexeme(TokenKind::Print, lexeme)
        } else {
            Token::with_lexeme(TokenKind::Identifier, lexeme)
        }
    }
}

impl std::fmt::Debug for Scanner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner").field("pos", &self.pos).finish()
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        match self.get_token() {
            (_, token) if token.kind == TokenKind::Eof => None,
            (_, token) => Some(token),
        }
    }
}
