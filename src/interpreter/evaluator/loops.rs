use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{Block, Expression, Identifier, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{
            Env, EvalResult, Signal, eval_block, eval_expression, eval_statement, is_truthy,
        },
        value::core::{MapEntry, Value},
    },
};

/// `while (cond) { ... }`
///
/// Runs in the enclosing frame. `break` stops the loop with null,
/// `continue` re-tests the condition, and return signals propagate. A
/// thrown value never escapes this loop form; the loop keeps running.
/// The result is the last body value, or null when the body never ran.
pub fn eval_while(condition: &Expression, body: &Block, env: &Env) -> EvalResult<Value> {
    let mut result = Value::Null;

    loop {
        let condition = eval_expression(condition, env)?;
        if !is_truthy(&condition) {
            break;
        }

        match eval_block(body, env) {
            Ok(value) => result = value,
            Err(Signal::Break) => return Ok(Value::Null),
            Err(Signal::Continue | Signal::Throw(_)) => {},
            Err(signal) => return Err(signal),
        }
    }

    Ok(result)
}

/// `for (init; cond; update) { ... }`
///
/// The whole statement gets one fresh frame: the init statement binds
/// there, and the condition, update and body all see it. A missing
/// condition is true. `continue` still runs the update before re-testing,
/// and a thrown value never escapes this loop form; the loop keeps
/// running.
pub fn eval_for(init: Option<&Statement>,
                condition: Option<&Expression>,
                update: Option<&Expression>,
                body: &Block,
                env: &Env)
                -> EvalResult<Value> {
    let for_env = Rc::new(RefCell::new(Environment::enclosing(env.clone())));

    if let Some(init) = init {
        eval_statement(init, &for_env)?;
    }

    let mut result = Value::Null;

    loop {
        if let Some(condition) = condition {
            let condition = eval_expression(condition, &for_env)?;
            if !is_truthy(&condition) {
                break;
            }
        }

        match eval_block(body, &for_env) {
            Ok(value) => result = value,
            Err(Signal::Break) => return Ok(Value::Null),
            Err(Signal::Continue | Signal::Throw(_)) => {},
            Err(signal) => return Err(signal),
        }

        if let Some(update) = update {
            eval_expression(update, &for_env)?;
        }
    }

    Ok(result)
}

/// `for (k in iterable) { ... }` and `for (k, v in iterable) { ... }`
///
/// Arrays iterate elements in order; the two-variable form binds the index
/// first. Maps iterate keys, or key/value pairs, in no particular order.
/// Each iteration gets a fresh frame with the loop variables bound const.
pub fn eval_for_in(key: &Identifier,
                   value: Option<&Identifier>,
                   iterable: &Expression,
                   body: &Block,
                   env: &Env)
                   -> EvalResult<Value> {
    let iterable = eval_expression(iterable, env)?;

    match iterable {
        Value::Array(elements) => {
            let mut result = Value::Null;
            let mut index = 0usize;

            loop {
                // Elements are read live so in-place mutation of the array
                // by the body stays visible.
                let element = match elements.borrow().get(index) {
                    Some(element) => element.clone(),
                    None => break,
                };

                let iter_env = Rc::new(RefCell::new(Environment::enclosing(env.clone())));
                {
                    let mut frame = iter_env.borrow_mut();
                    #[allow(clippy::cast_precision_loss)]
                    match value {
                        Some(value) => {
                            frame.set_const(&key.value, Value::Number(index as f64));
                            frame.set_const(&value.value, element);
                        },
                        None => frame.set_const(&key.value, element),
                    }
                }

                match eval_block(body, &iter_env) {
                    Ok(value) => result = value,
                    Err(Signal::Break) => return Ok(Value::Null),
                    Err(Signal::Continue) => {},
                    Err(signal) => return Err(signal),
                }

                index += 1;
            }

            Ok(result)
        },
        Value::Map(pairs) => {
            // Iterates a snapshot of the entries taken up front; mutating
            // the map inside the body does not affect the walk.
            let entries: Vec<MapEntry> = pairs.borrow().values().cloned().collect();
            let mut result = Value::Null;

            for entry in entries {
                let iter_env = Rc::new(RefCell::new(Environment::enclosing(env.clone())));
                {
                    let mut frame = iter_env.borrow_mut();
                    match value {
                        Some(value) => {
                            frame.set_const(&key.value, entry.key);
                            frame.set_const(&value.value, entry.value);
                        },
                        None => frame.set_const(&key.value, entry.key),
                    }
                }

                match eval_block(body, &iter_env) {
                    Ok(value) => result = value,
                    Err(Signal::Break) => return Ok(Value::Null),
                    Err(Signal::Continue) => {},
                    Err(signal) => return Err(signal),
                }
            }

            Ok(result)
        },
        other => Err(RuntimeError::ForInNotSupported { kind: other.type_name() }.into()),
    }
}
