use std::{cell::RefCell, io::Write, rc::Rc};

use crate::{
    error::ParseError,
    interpreter::{
        environment::Environment, evaluator::core::eval_program, lexer::Lexer, parser::core::Parser,
    },
};

/// Reads a source file and executes it.
///
/// Parse diagnostics and runtime errors are written to `out`; the
/// returned error only says that the run failed.
///
/// # Errors
/// Fails when the file cannot be read, when parsing records diagnostics,
/// or when evaluation produces a runtime error.
pub fn run_file(filename: &str, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let source =
        std::fs::read_to_string(filename).map_err(|e| format!("failed to read file: {e}"))?;
    run_source(&source, out)
}

/// Parses and executes source text in a fresh environment.
///
/// # Errors
/// Fails on parse diagnostics or a runtime error; details go to `out`.
///
/// # Example
/// ```
/// let mut out = Vec::new();
/// assert!(sugu::runner::run_source("1 + 2;", &mut out).is_ok());
/// ```
pub fn run_source(source: &str, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        print_parser_errors(out, parser.errors())?;
        return Err("parse error".into());
    }

    let env = Rc::new(RefCell::new(Environment::new()));
    if let Err(error) = eval_program(&program, &env) {
        writeln!(out, "Error: {error}")?;
        return Err(format!("runtime error: {error}").into());
    }

    Ok(())
}

pub(crate) fn print_parser_errors(out: &mut impl Write,
                                  errors: &[ParseError])
                                  -> std::io::Result<()> {
    writeln!(out, "Parser errors:")?;
    for (index, error) in errors.iter().enumerate() {
        writeln!(out, "  {}. {error}", index + 1)?;
    }
    Ok(())
}
