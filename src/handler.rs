use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::eval_program,
        lexer::Lexer,
        parser::core::Parser,
        value::{
            core::{MapEntry, Value},
            hash::HashKey,
        },
    },
};

/// The fixed script an event handler executes.
pub const SOURCE_FILE: &str = "main.sugu";

/// What a handler invocation produced.
///
/// `output` collects everything the script wrote through `out` and
/// `outln`, `result` is the display form of the program value, and
/// `error` is set when reading, parsing or evaluation failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandlerResponse {
    pub output: String,
    pub result: String,
    pub error:  Option<String>,
}

/// Loads [`SOURCE_FILE`] and executes it against a JSON event.
#[must_use]
pub fn handle(event: &JsonValue) -> HandlerResponse {
    match std::fs::read_to_string(SOURCE_FILE) {
        Ok(code) => execute(&code, event),
        Err(error) => HandlerResponse { output: String::new(),
                                        result: String::new(),
                                        error:  Some(format!("failed to read {SOURCE_FILE}: {error}")), },
    }
}

/// Executes source text with the event pre-bound as `event`.
///
/// The stream intrinsics are replaced up front: `out` and `outln` write
/// into the response, and `in` reports that it is unavailable. The first
/// parse diagnostic or the runtime error message lands in `error`.
///
/// # Example
/// ```
/// use serde_json::json;
/// use sugu::handler::execute;
///
/// let response = execute("event[\"n\"] * 2", &json!({"n": 21}));
/// assert_eq!(response.result, "42");
/// assert_eq!(response.error, None);
/// ```
#[must_use]
pub fn execute(code: &str, event: &JsonValue) -> HandlerResponse {
    let capture = Rc::new(RefCell::new(String::new()));
    let env = Rc::new(RefCell::new(Environment::new()));

    {
        let mut frame = env.borrow_mut();
        for (name, builtin) in capture_builtins(&capture) {
            frame.set(name, builtin);
        }
        frame.set("event", json_to_value(event));
    }

    let mut parser = Parser::new(Lexer::new(code));
    let program = parser.parse_program();

    if let Some(error) = parser.errors().first() {
        return HandlerResponse { output: capture.borrow().clone(),
                                 result: String::new(),
                                 error:  Some(error.to_string()), };
    }

    match eval_program(&program, &env) {
        Ok(value) => HandlerResponse { output: capture.borrow().clone(),
                                       result: value.to_string(),
                                       error:  None, },
        Err(error) => HandlerResponse { output: capture.borrow().clone(),
                                        result: String::new(),
                                        error:  Some(error.to_string()), },
    }
}

/// Stream intrinsics that write into the shared capture buffer instead of
/// the process streams.
fn capture_builtins(capture: &Rc<RefCell<String>>) -> Vec<(&'static str, Value)> {
    let out_buffer = capture.clone();
    let out = Value::builtin("out", move |args: &[Value]| {
                  let mut buffer = out_buffer.borrow_mut();
                  for arg in args {
                      buffer.push_str(&arg.to_string());
                  }
                  Ok(Value::Null)
              });

    let outln_buffer = capture.clone();
    let outln = Value::builtin("outln", move |args: &[Value]| {
                    let mut buffer = outln_buffer.borrow_mut();
                    for arg in args {
                        buffer.push_str(&arg.to_string());
                        buffer.push('\n');
                    }
                    Ok(Value::Null)
                });

    let input = Value::builtin("in", |_args: &[Value]| {
                    Err(RuntimeError::NotAvailable { builtin: "in" })
                });

    vec![("out", out), ("outln", outln), ("in", input)]
}

/// Marshals a JSON value into the language's value space.
///
/// Objects become maps keyed by strings; numbers become doubles.
fn json_to_value(json: &JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or_default()),
        JsonValue::String(s) => Value::Str(s.clone()),
        JsonValue::Array(items) => Value::array(items.iter().map(json_to_value).collect()),
        JsonValue::Object(fields) => {
            let mut pairs = HashMap::new();
            for (key, value) in fields {
                pairs.insert(HashKey::Str(key.clone()),
                             MapEntry { key:   Value::Str(key.clone()),
                                        value: json_to_value(value), });
            }
            Value::map(pairs)
        },
    }
}
