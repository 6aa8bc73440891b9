//! API to control the interpreter.

use std::io::prelude::*;

use thiserror::Error;

use crate::eval::{EvalError, Evaluator};
use crate::parser::{ParseError, Parser};

/// Tree-walk interpreter for one program at a time.
///
/// The whole program is parsed before anything runs, so a malformed input
/// fails before producing any output.  Each call to [`Interpreter::run`]
/// executes against a fresh variable store.
///
/// # Example
///
/// ```
/// # use tinycalc::interpreter::{CalcError, Interpreter};
///
/// let mut output: Vec<u8> = Vec::new();
/// let mut interp = Interpreter::new(&mut output);
/// interp.run("x = 6; print(x * 7);")?;
///
/// assert_eq!(output, b"42\n");
/// # Ok::<(), CalcError>(())
/// ```
#[derive(Debug)]
pub struct Interpreter<'t, W: Write> {
    output: &'t mut W,
}

/// Errors the interpreter can raise.
#[derive(Debug, Error)]
pub enum CalcError {
    /// Error occurring during lexical or syntactic analysis.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Error occurring during evaluation.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl CalcError {
    /// Process exit status for this error, one distinct code per category
    /// (sysexits-style).  Success is 0 and a command-line usage error is 64;
    /// both are decided by the driver, not here.
    pub fn exit_code(&self) -> u8 {
        match self {
            CalcError::Parse(ParseError::Lexical(_)) => 65,
            CalcError::Parse(ParseError::Syntax(_)) => 66,
            CalcError::Eval(EvalError::UndefinedVariable(_)) => 70,
            CalcError::Eval(EvalError::DivisionByZero) => 71,
            CalcError::Eval(EvalError::Io(_)) => 74,
        }
    }
}

impl<'t, W: Write> Interpreter<'t, W> {
    pub fn new(output: &'t mut W) -> Interpreter<'t, W> {
        Interpreter { output }
    }

    /// Scan, parse and execute `source`.
    pub fn run(&mut self, source: &str) -> Result<(), CalcError> {
        let mut parser = Parser::new(source);
        let prg = parser.parse_program()?;
        let mut evaluator = Evaluator::new(&mut *self.output);
        evaluator.run(&prg)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interpret(input: &str) -> Result<String, CalcError> {
        let mut raw_output: Vec<u8> = Vec::new();
        let mut interp = Interpreter::new(&mut raw_output);
        interp.run(input)?;
        Ok(String::from_utf8(raw_output).expect("cannot convert output to string"))
    }

    #[test]
    fn print_expr() -> Result<(), CalcError> {
        assert_eq!(interpret("print(3 * 2);")?, "6\n");
        Ok(())
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() -> Result<(), CalcError> {
        assert_eq!(interpret("print(2 + 3 * 4);")?, "14\n");
        Ok(())
    }

    #[test]
    fn parentheses_override_precedence() -> Result<(), CalcError> {
        assert_eq!(interpret("print((1 + 2) * 3);")?, "9\n");
        Ok(())
    }

    #[test]
    fn subtraction_is_left_associative() -> Result<(), CalcError> {
        assert_eq!(interpret("print(10 - 3 - 2);")?, "5\n");
        Ok(())
    }

    #[test]
    fn assignment_is_visible_to_later_statements() -> Result<(), CalcError> {
        assert_eq!(interpret("x = 5; print(x * x);")?, "25\n");
        Ok(())
    }

    #[test]
    fn several_prints_in_program_order() -> Result<(), CalcError> {
        assert_eq!(interpret("a = 1; print(a); a = a + 1; print(a);")?, "1\n2\n");
        Ok(())
    }

    #[test]
    fn whitespace_is_insignificant() -> Result<(), CalcError> {
        assert_eq!(interpret("x=5;print(x*x);")?, "25\n");
        Ok(())
    }

    #[test]
    fn undefined_variable_is_a_semantic_error() {
        match interpret("print(y);") {
            Err(e @ CalcError::Eval(EvalError::UndefinedVariable(_))) => {
                assert_eq!(e.exit_code(), 70)
            }
            r => panic!("unexpected output: {:?}", r),
        }
    }

    #[test]
    fn unrecognized_character_is_a_lexical_error() {
        match interpret("x = 1; print(x) @") {
            Err(e @ CalcError::Parse(ParseError::Lexical(_))) => assert_eq!(e.exit_code(), 65),
            r => panic!("unexpected output: {:?}", r),
        }
    }

    #[test]
    fn malformed_statement_is_a_syntax_error() {
        match interpret("x 5;") {
            Err(e @ CalcError::Parse(ParseError::Syntax(_))) => assert_eq!(e.exit_code(), 66),
            r => panic!("unexpected output: {:?}", r),
        }
    }

    #[test]
    fn division_by_zero_is_a_runtime_error() {
        match interpret("x = 0; print(1 / x);") {
            Err(e @ CalcError::Eval(EvalError::DivisionByZero)) => assert_eq!(e.exit_code(), 71),
            r => panic!("unexpected output: {:?}", r),
        }
    }

    #[test]
    fn parse_error_prevents_all_output() {
        let mut raw_output: Vec<u8> = Vec::new();
        let mut interp = Interpreter::new(&mut raw_output);
        let res = interp.run("print(1); print(2rror");
        assert!(res.is_err());
        drop(interp);
        assert!(raw_output.is_empty());
    }

    #[test]
    fn diagnostics_name_category_and_lexeme() {
        let err = interpret("print(y);").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("semantic error"), "got: {}", msg);
        assert!(msg.contains("'y'"), "got: {}", msg);

        let err = interpret("x = $;").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("lexical error"), "got: {}", msg);
        assert!(msg.contains("'$'"), "got: {}", msg);

        let err = interpret("x 5;").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("syntax error"), "got: {}", msg);
    }

    // Rendering an expression and parsing the result again must preserve
    // its value, even though the text is not necessarily identical.
    #[test]
    fn rendered_expression_reparses_to_same_value() -> Result<(), CalcError> {
        for src in [
            "1 + 2 * 3",
            "(1 + 2) * 3",
            "10 - 3 - 2",
            "100 / 10 / 2",
            "2 * (3 + 4)",
            "5 * (7 / 2)",
            "10 - (3 - 2)",
            "(8 - 2) * (1 + 1)",
        ] {
            let expr = Parser::new(src).parse_expression()?;
            let rendered = expr.to_string();
            let reparsed = Parser::new(&rendered).parse_expression()?;
            assert_eq!(
                interpret(&format!("print({});", src))?,
                interpret(&format!("print({});", reparsed))?,
                "round-trip changed the value of {:?} (rendered as {:?})",
                src,
                rendered
            );
        }
        Ok(())
    }
}
