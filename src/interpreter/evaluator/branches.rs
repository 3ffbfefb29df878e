use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{Block, CaseClause, Expression, Identifier},
    interpreter::{
        environment::Environment,
        evaluator::core::{Env, EvalResult, Signal, eval_block, eval_expression, is_truthy},
        value::core::Value,
    },
};

/// `if (cond) { ... } else { ... }`
///
/// Runs in the enclosing frame; an if statement does not open a scope.
pub fn eval_if(condition: &Expression,
               consequence: &Block,
               alternative: Option<&Block>,
               env: &Env)
               -> EvalResult<Value> {
    let condition = eval_expression(condition, env)?;

    if is_truthy(&condition) {
        eval_block(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)
    } else {
        Ok(Value::Null)
    }
}

/// `switch (value) { case ...: { ... } default: { ... } }`
///
/// Case values are evaluated and compared in order; the first match runs
/// and the switch ends. Matching is the same kind-aware equality `==`
/// uses. A `break` inside a case is consumed and leaves null.
pub fn eval_switch(value: &Expression,
                   cases: &[CaseClause],
                   default: Option<&Block>,
                   env: &Env)
                   -> EvalResult<Value> {
    let value = eval_expression(value, env)?;

    for case in cases {
        let case_value = eval_expression(&case.value, env)?;

        if value == case_value {
            return match eval_block(&case.body, env) {
                Err(Signal::Break) => Ok(Value::Null),
                other => other,
            };
        }
    }

    if let Some(default) = default {
        return match eval_block(default, env) {
            Err(Signal::Break) => Ok(Value::Null),
            other => other,
        };
    }

    Ok(Value::Null)
}

/// `try { ... } catch (name) { ... }`
///
/// A thrown value reaches the catch binding with its kind intact. A
/// runtime error reaches it as a string holding the error message. Every
/// other outcome of the try block, including its signals, passes through
/// untouched.
pub fn eval_try(try_block: &Block,
                catch_param: &Identifier,
                catch_block: &Block,
                env: &Env)
                -> EvalResult<Value> {
    match eval_block(try_block, env) {
        Err(Signal::Throw(payload)) => {
            let catch_env = Rc::new(RefCell::new(Environment::enclosing(env.clone())));
            catch_env.borrow_mut().set(&catch_param.value, payload);
            eval_block(catch_block, &catch_env)
        },
        Err(Signal::Error(error)) => {
            let catch_env = Rc::new(RefCell::new(Environment::enclosing(env.clone())));
            catch_env.borrow_mut().set(&catch_param.value, Value::Str(error.to_string()));
            eval_block(catch_block, &catch_env)
        },
        other => other,
    }
}

/// `throw value;`
pub fn eval_throw(value: &Expression, env: &Env) -> EvalResult<Value> {
    let value = eval_expression(value, env)?;
    Err(Signal::Throw(value))
}
