use std::collections::HashMap;
use std::io;
use std::io::prelude::*;

use thiserror::Error;

use crate::ast::{BinOp, Expr, Stmt};

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("semantic error: variable '{0}' is not declared")]
    UndefinedVariable(String),
    #[error("runtime error: division by zero")]
    DivisionByZero,
    #[error("runtime error: failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// The variable store: identifier to integer value.
///
/// Keys come into existence on first assignment, there is no declaration
/// step.  One `Memory` lives exactly as long as one program run.
#[derive(Debug, Default)]
pub struct Memory {
    bindings: HashMap<String, i64>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory::default()
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.bindings.get(name).copied()
    }

    /// Bind `name` to `value`, overwriting any previous binding.
    pub fn set(&mut self, name: &str, value: i64) {
        self.bindings.insert(name.to_owned(), value);
    }
}

/// Walks the statement list, mutating `Memory` and writing `print` results
/// to the output stream.
#[derive(Debug)]
pub struct Evaluator<'t, W: Write> {
    output: &'t mut W,
    memory: Memory,
}

impl<'t, W: Write> Evaluator<'t, W> {
    pub fn new(output: &'t mut W) -> Evaluator<'t, W> {
        Evaluator {
            output,
            memory: Memory::new(),
        }
    }

    /// Execute every statement in program order.  The first error aborts
    /// the run; earlier side effects are not rolled back.
    pub fn run(&mut self, stmts: &[Stmt]) -> Result<(), EvalError> {
        for stmt in stmts {
            self.eval_stmt(stmt)?;
        }
        Ok(())
    }

    fn eval_stmt(&mut self, stmt: &Stmt) -> Result<(), EvalError> {
        match stmt {
            Stmt::Assign(name, expr) => {
                let value = self.eval_expr(expr)?;
                self.memory.set(name, value);
            }
            Stmt::Print(expr) => {
                let value = self.eval_expr(expr)?;
                writeln!(self.output, "{}", value)?;
            }
        }
        Ok(())
    }

    fn eval_expr(&self, expr: &Expr) -> Result<i64, EvalError> {
        match expr {
            Expr::Number(n) => Ok(*n),
            Expr::Var(name) => self
                .memory
                .get(name)
                .ok_or_else(|| EvalError::UndefinedVariable(name.clone())),
            Expr::Binary { op, lhs, rhs } => {
                // Left operand fully before the right one.
                let l = self.eval_expr(lhs)?;
                let r = self.eval_expr(rhs)?;
                match op {
                    BinOp::Add => Ok(l.wrapping_add(r)),
                    BinOp::Sub => Ok(l.wrapping_sub(r)),
                    BinOp::Mul => Ok(l.wrapping_mul(r)),
                    BinOp::Div => {
                        if r == 0 {
                            Err(EvalError::DivisionByZero)
                        } else {
                            // Truncates toward zero; wrapping covers
                            // i64::MIN / -1.
                            Ok(l.wrapping_div(r))
                        }
                    }
                }
            }
        }
    }
}
