//! # sugu
//!
//! sugu is a small dynamically-typed scripting language with a C-family
//! syntax, implemented as a tree-walking interpreter. It offers numbers,
//! strings, booleans, null, arrays, maps and first-class functions with
//! closures, along with mutable and const bindings, structured control
//! flow, exceptions and a fixed table of intrinsic functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::{cell::RefCell, rc::Rc};

use crate::interpreter::{
    environment::Environment, evaluator::core::eval_program, lexer::Lexer, parser::core::Parser,
    value::core::Value,
};

/// Defines the structure of parsed code.
///
/// Declares the statement and expression node types the parser builds and
/// the evaluator walks, each retaining its leading token for position
/// reporting, plus the printer that renders nodes back to source form.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// Parse diagnostics accumulate without stopping the parser; runtime
/// errors are values that short-circuit evaluation. The rendered text of
/// both is part of the language's observable surface.
pub mod error;
/// Event-handler embedding.
///
/// Marshals a JSON event into a pre-bound `event` value, captures stream
/// output, and reports the program result and any failure in a single
/// response value.
pub mod handler;
/// The interpreter pipeline.
///
/// Ties together the lexer, parser, value model, environment chain and
/// evaluator that turn source text into a value.
pub mod interpreter;
/// The interactive read-eval-print loop.
pub mod repl;
/// The file and source runners used by the command line.
pub mod runner;

/// Parses and evaluates a program in a fresh environment, returning the
/// program's final value.
///
/// # Errors
/// Returns the first parse diagnostic when parsing records any, or the
/// runtime error when evaluation fails.
///
/// # Examples
/// ```
/// use sugu::{interpreter::value::core::Value, run_program};
///
/// let result = run_program("mut a = 5; mut b = a; a + b + 5;").unwrap();
/// assert_eq!(result, Value::Number(15.0));
///
/// // An undefined name is a runtime error.
/// assert!(run_program("missing").is_err());
/// ```
pub fn run_program(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if let Some(error) = parser.errors().first() {
        return Err(Box::new(error.clone()));
    }

    let env = Rc::new(RefCell::new(Environment::new()));
    Ok(eval_program(&program, &env)?)
}
