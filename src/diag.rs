use thiserror::Error;

/// Column number into the program text (starting at one).
pub type Position = usize;

/// An unrecognized character encountered while scanning.
#[derive(Debug, PartialEq, Eq, Error)]
#[error("column {pos}: unrecognized character '{lexeme}'")]
pub struct LexicalError {
    pub pos: Position,
    pub lexeme: String,
}

/// A token sequence that does not match the grammar.
#[derive(Debug, PartialEq, Eq, Error)]
#[error("column {pos}: {kind}")]
pub struct SyntaxError {
    pub pos: Position,
    pub kind: SyntaxErrorKind,
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    #[error("unexpected token '{found}', expected '{expected}'")]
    UnexpectedToken { found: String, expected: String },
    #[error("expected a statement, found '{0}'")]
    ExpectedStatement(String),
    #[error("expected identifier, number or '(', found '{0}'")]
    ExpectedFactor(String),
    #[error("integer literal out of range: {0}")]
    IntLiteralOutOfRange(String),
}
