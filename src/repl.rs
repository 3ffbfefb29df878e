use std::{
    cell::RefCell,
    io::{BufRead, Write},
    rc::Rc,
};

use crate::{
    interpreter::{
        environment::Environment, evaluator::core::eval_program, lexer::Lexer, parser::core::Parser,
    },
    runner::print_parser_errors,
};

/// The interactive prompt.
pub const PROMPT: &str = ">> ";

/// Runs the read-eval-print loop until end of input or an exit command.
///
/// One environment lives for the whole session, so bindings persist from
/// line to line. `exit` and `quit` end the session with a goodbye; empty
/// lines are skipped.
///
/// # Errors
/// Fails only when writing to `out` fails.
///
/// # Example
/// ```
/// let input = b"1 + 2\nexit\n";
/// let mut out = Vec::new();
/// sugu::repl::start(&mut &input[..], &mut out).unwrap();
///
/// let output = String::from_utf8(out).unwrap();
/// assert!(output.contains('3'));
/// assert!(output.contains("Bye!"));
/// ```
pub fn start(input: &mut impl BufRead, out: &mut impl Write) -> std::io::Result<()> {
    let env = Rc::new(RefCell::new(Environment::new()));

    writeln!(out, "Sugu Language REPL")?;
    writeln!(out, "Type 'exit' or 'quit' to exit")?;
    writeln!(out)?;

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim_end_matches('\n').trim_end_matches('\r');

        if line == "exit" || line == "quit" {
            writeln!(out, "Bye!")?;
            return Ok(());
        }
        if line.is_empty() {
            continue;
        }

        let mut parser = Parser::new(Lexer::new(line));
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            print_parser_errors(out, parser.errors())?;
            continue;
        }
        if program.statements.is_empty() {
            continue;
        }

        match eval_program(&program, &env) {
            Ok(value) => writeln!(out, "{value}")?,
            Err(error) => writeln!(out, "Error: {error}")?,
        }
    }
}
