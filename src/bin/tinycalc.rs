//! Command-line front end.
//!
//! Takes the whole program as a single argument and runs it:
//!
//! ```text
//! $ tinycalc 'x = 6; print(x * 7);'
//! 42
//! ```
//!
//! Exits with 0 on success and a distinct nonzero code per error category
//! (64 usage, 65 lexical, 66 syntax, 70 undefined variable, 71 division by
//! zero, 74 output failure).

use std::env;
use std::io;
use std::process::ExitCode;

use tinycalc::interpreter::Interpreter;

const EXIT_USAGE: u8 = 64;

fn main() -> ExitCode {
    let args = env::args().skip(1).collect::<Vec<_>>();
    if args.len() != 1 {
        eprintln!("argument error: expected exactly 1 argument, got {}", args.len());
        eprintln!("usage: tinycalc <program>");
        return ExitCode::from(EXIT_USAGE);
    }

    let mut stdout = io::stdout();
    let mut interp = Interpreter::new(&mut stdout);
    match interp.run(&args[0]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
