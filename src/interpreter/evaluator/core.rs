use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{Block, Expression, Identifier, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{assign, binary, branches, builtins, function, index, loops, unary},
        token::TokenKind,
        value::core::Value,
    },
};

/// A shared environment frame handle.
pub type Env = Rc<RefCell<Environment>>;

/// Non-local control transfer flowing out of an evaluation.
///
/// `return`, `break`, `continue` and `throw` are not values a program can
/// observe; they travel through the error channel until the frame that
/// consumes them. Runtime errors ride the same channel and short-circuit
/// everything except `try`.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// A `return` carrying its payload to the enclosing call.
    Return(Value),
    /// A `break` looking for its enclosing loop or switch.
    Break,
    /// A `continue` looking for its enclosing loop.
    Continue,
    /// A thrown value looking for a `catch`.
    Throw(Value),
    /// A runtime failure.
    Error(RuntimeError),
}

impl From<RuntimeError> for Signal {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

/// Result type used throughout the evaluator.
///
/// The `Err` side carries [`Signal`]s, so `?` is the propagation rule: any
/// frame that does not consume a signal passes it along unchanged.
pub type EvalResult<T> = Result<T, Signal>;

/// Evaluates a whole program.
///
/// Statements run in order. A `return` unwraps to the program result, an
/// uncaught `throw` is reified into an error, and a stray `break` or
/// `continue` leaves null behind. The result is the value of the last
/// statement.
pub fn eval_program(program: &Program, env: &Env) -> Result<Value, RuntimeError> {
    let mut result = Value::Null;

    for statement in &program.statements {
        match eval_statement(statement, env) {
            Ok(value) => result = value,
            Err(Signal::Return(value)) => return Ok(value),
            Err(Signal::Error(error)) => return Err(error),
            Err(Signal::Throw(payload)) => {
                return Err(RuntimeError::UncaughtException { payload: payload.to_string() });
            },
            Err(Signal::Break | Signal::Continue) => result = Value::Null,
        }
    }

    Ok(result)
}

/// Evaluates the statements of a block in order.
///
/// Returns the value of the last statement; any signal stops the block
/// early and propagates unchanged.
pub fn eval_block(block: &Block, env: &Env) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;
    }

    Ok(result)
}

/// Evaluates a single statement.
pub fn eval_statement(statement: &Statement, env: &Env) -> EvalResult<Value> {
    match statement {
        Statement::Expression { expression, .. } => eval_expression(expression, env),
        Statement::Variable { token, name, value } => {
            let value = eval_expression(value, env)?;
            if token.kind == TokenKind::Const {
                env.borrow_mut().set_const(&name.value, value.clone());
            } else {
                env.borrow_mut().set(&name.value, value.clone());
            }
            Ok(value)
        },
        Statement::Return { value, .. } => {
            let payload = match value {
                Some(value) => eval_expression(value, env)?,
                None => Value::Null,
            };
            Err(Signal::Return(payload))
        },
        Statement::If { condition,
                        consequence,
                        alternative,
                        .. } => branches::eval_if(condition, consequence, alternative.as_ref(), env),
        Statement::While { condition, body, .. } => loops::eval_while(condition, body, env),
        Statement::For { init,
                         condition,
                         update,
                         body,
                         .. } => loops::eval_for(init.as_deref(),
                                                 condition.as_ref(),
                                                 update.as_ref(),
                                                 body,
                                                 env),
        Statement::ForIn { key,
                           value,
                           iterable,
                           body,
                           .. } => loops::eval_for_in(key, value.as_ref(), iterable, body, env),
        Statement::Switch { value,
                            cases,
                            default,
                            .. } => branches::eval_switch(value, cases, default.as_ref(), env),
        Statement::Break { .. } => Err(Signal::Break),
        Statement::Continue { .. } => Err(Signal::Continue),
        Statement::Try { try_block,
                         catch_param,
                         catch_block,
                         .. } => branches::eval_try(try_block, catch_param, catch_block, env),
        Statement::Throw { value, .. } => branches::eval_throw(value, env),
    }
}

/// Evaluates a single expression.
pub fn eval_expression(expression: &Expression, env: &Env) -> EvalResult<Value> {
    match expression {
        Expression::Identifier(ident) => eval_identifier(ident, env),
        Expression::Number { token, value } => match value.parse::<f64>() {
            Ok(number) => Ok(Value::Number(number)),
            Err(_) => Err(RuntimeError::LiteralParse { literal: value.clone(),
                                                       line:    token.line,
                                                       column:  token.column, }.into()),
        },
        Expression::StringLit { value, .. } => Ok(Value::Str(value.clone())),
        Expression::Boolean { value, .. } => Ok(Value::Bool(*value)),
        Expression::Null { .. } => Ok(Value::Null),
        Expression::Prefix { operator, right, .. } => {
            let right = eval_expression(right, env)?;
            Ok(unary::eval_prefix(operator, &right)?)
        },
        Expression::Infix { left,
                            operator,
                            right,
                            .. } => {
            // The logical operators decide whether the right side runs at
            // all, so they get the unevaluated operands.
            if operator == "&&" || operator == "||" {
                return binary::eval_logical(operator, left, right, env);
            }
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            Ok(binary::eval_infix(operator, &left, &right)?)
        },
        Expression::Assign { token, name, value } => assign::eval_assign(token, name, value, env),
        Expression::IndexAssign { left, index, value, .. } => {
            assign::eval_index_assign(left, index, value, env)
        },
        Expression::Call { function, arguments, .. } => {
            function::eval_call(function, arguments, env)
        },
        Expression::Function { name,
                               parameters,
                               body,
                               .. } => {
            function::eval_function_literal(name.as_ref(), parameters, body, env)
        },
        Expression::Array { elements, .. } => {
            Ok(Value::array(eval_expressions(elements, env)?))
        },
        Expression::MapLit { pairs, .. } => index::eval_map_literal(pairs, env),
        Expression::Index { left, index: idx, .. } => {
            let left = eval_expression(left, env)?;
            let index = eval_expression(idx, env)?;
            Ok(index::eval_index(&left, &index)?)
        },
    }
}

/// Evaluates an expression list left to right, stopping at the first
/// signal.
pub fn eval_expressions(expressions: &[Expression], env: &Env) -> EvalResult<Vec<Value>> {
    expressions.iter().map(|expression| eval_expression(expression, env)).collect()
}

/// Resolves a name, falling back to the intrinsic table.
fn eval_identifier(ident: &Identifier, env: &Env) -> EvalResult<Value> {
    if let Some(value) = env.borrow().get(&ident.value) {
        return Ok(value);
    }

    if let Some(builtin) = builtins::lookup(&ident.value) {
        return Ok(builtin);
    }

    Err(RuntimeError::IdentifierNotFound { name:   ident.value.clone(),
                                           line:   ident.token.line,
                                           column: ident.token.column, }.into())
}

/// Whether a value counts as true in a boolean context.
///
/// Only `null` and `false` are falsy; `0`, `""` and empty containers are
/// all truthy.
///
/// # Example
/// ```
/// use sugu::interpreter::{evaluator::core::is_truthy, value::core::Value};
///
/// assert!(is_truthy(&Value::Number(0.0)));
/// assert!(!is_truthy(&Value::Null));
/// ```
#[must_use]
pub const fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}
