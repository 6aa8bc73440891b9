//! An interpreter for straight-line integer arithmetic programs.
//!
//! A program is a `;`-separated sequence of assignments and `print`
//! statements, for example `x = 6; print(x * 7);`.
//!
//! # Examples
//!
//! See [`crate::interpreter::Interpreter`].
//!
//! # Limitations
//!
//! - The scanner and parser do not attempt any error recovery.  They bail out on the first
//! encountered error.
//! - The language has no control flow: statements execute once, in order.

#![warn(rust_2018_idioms)]
#![warn(missing_debug_implementations)]

pub mod interpreter;

mod ast;
mod diag;
mod eval;
mod parser;
mod scanner;
mod token;
