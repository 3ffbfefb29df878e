use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{Block, Expression, Identifier},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Env, EvalResult, Signal, eval_block, eval_expression, eval_expressions},
        value::core::{FunctionValue, Value},
    },
};

/// Builds a closure from a function literal.
///
/// The defining frame is captured by reference. A named literal also
/// binds itself in that frame, which is what makes recursive functions
/// work.
pub fn eval_function_literal(name: Option<&Identifier>,
                             parameters: &[Identifier],
                             body: &Block,
                             env: &Env)
                             -> EvalResult<Value> {
    let function =
        Value::Function(Rc::new(FunctionValue { parameters: parameters.iter()
                                                                      .map(|p| p.value.clone())
                                                                      .collect(),
                                                body:       body.clone(),
                                                env:        env.clone(),
                                                name:       name.map(|n| n.value.clone()), }));

    if let Some(name) = name {
        env.borrow_mut().set(&name.value, function.clone());
    }

    Ok(function)
}

/// Evaluates a call: callee first, then arguments left to right.
pub fn eval_call(function: &Expression, arguments: &[Expression], env: &Env) -> EvalResult<Value> {
    let callee = eval_expression(function, env)?;
    let args = eval_expressions(arguments, env)?;
    apply_function(&callee, &args)
}

/// Invokes a function or intrinsic value with evaluated arguments.
///
/// User functions run their body in a fresh frame parented at the captured
/// environment. Missing arguments bind to null and extra arguments are
/// dropped. A `return` unwraps here; other signals keep propagating.
pub fn apply_function(callee: &Value, args: &[Value]) -> EvalResult<Value> {
    match callee {
        Value::Function(function) => {
            let call_env = extend_function_env(function, args);
            match eval_block(&function.body, &call_env) {
                Err(Signal::Return(value)) => Ok(value),
                other => other,
            }
        },
        Value::Builtin(builtin) => Ok((builtin.func)(args)?),
        other => Err(RuntimeError::NotAFunction { kind: other.type_name() }.into()),
    }
}

fn extend_function_env(function: &FunctionValue, args: &[Value]) -> Env {
    let mut frame = Environment::enclosing(function.env.clone());

    for (index, parameter) in function.parameters.iter().enumerate() {
        frame.set(parameter, args.get(index).cloned().unwrap_or(Value::Null));
    }

    Rc::new(RefCell::new(frame))
}
