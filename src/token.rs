use std::fmt;

/// Classification tags for the tokens produced by `Scanner`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Eof,

    // Operators and punctuation
    Plus,
    Minus,
    Star,
    Slash,
    LeftParen,
    RightParen,
    Semicolon,
    Equal,

    // Keywords
    Print,

    Identifier,
    Number,

    // Unrecognized character.  Reported as a lexical error by the parser.
    Error,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::Equal => write!(f, "="),
            TokenKind::Print => write!(f, "print"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::Error => write!(f, "error"),
        }
    }
}

/// "Words" produced by `Scanner`: a kind plus the literal source text
/// backing it.  The lexeme is empty for fixed tokens.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind) -> Token {
        Token {
            kind,
            lexeme: String::new(),
        }
    }

    pub fn with_lexeme(kind: TokenKind, lexeme: impl Into<String>) -> Token {
        Token {
            kind,
            lexeme: lexeme.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lexeme.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}", self.lexeme)
        }
    }
}
