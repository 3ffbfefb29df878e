use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Env, EvalResult, eval_expression, is_truthy},
        value::core::Value,
    },
};

/// Applies a binary operator to two already-evaluated operands.
///
/// Numbers support arithmetic and comparisons, strings support
/// concatenation and equality, and `==`/`!=` fall back to kind-aware
/// equality for everything else. Mixed kinds are a type mismatch unless
/// compared for equality.
pub fn eval_infix(operator: &str, left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => eval_number_infix(operator, *l, *r),
        (Value::Str(l), Value::Str(r)) => eval_string_infix(operator, l, r),
        _ if operator == "==" => Ok(Value::Bool(left == right)),
        _ if operator == "!=" => Ok(Value::Bool(left != right)),
        _ if left.type_name() != right.type_name() => {
            Err(RuntimeError::TypeMismatch { left:     left.type_name(),
                                             operator: operator.to_string(),
                                             right:    right.type_name(), })
        },
        _ => Err(RuntimeError::UnknownInfixOperator { left:     left.type_name(),
                                                      operator: operator.to_string(),
                                                      right:    right.type_name(), }),
    }
}

fn eval_number_infix(operator: &str, left: f64, right: f64) -> Result<Value, RuntimeError> {
    match operator {
        "+" => Ok(Value::Number(left + right)),
        "-" => Ok(Value::Number(left - right)),
        "*" => Ok(Value::Number(left * right)),
        "/" => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(Value::Number(left / right))
        },
        // The remainder keeps the sign of the dividend.
        "%" => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(Value::Number(left % right))
        },
        "<" => Ok(Value::Bool(left < right)),
        ">" => Ok(Value::Bool(left > right)),
        "<=" => Ok(Value::Bool(left <= right)),
        ">=" => Ok(Value::Bool(left >= right)),
        "==" => Ok(Value::Bool(left == right)),
        "!=" => Ok(Value::Bool(left != right)),
        _ => Err(RuntimeError::UnknownInfixOperator { left:     "NUMBER",
                                                      operator: operator.to_string(),
                                                      right:    "NUMBER", }),
    }
}

fn eval_string_infix(operator: &str, left: &str, right: &str) -> Result<Value, RuntimeError> {
    match operator {
        "+" => Ok(Value::Str(format!("{left}{right}"))),
        "==" => Ok(Value::Bool(left == right)),
        "!=" => Ok(Value::Bool(left != right)),
        _ => Err(RuntimeError::UnknownInfixOperator { left:     "STRING",
                                                      operator: operator.to_string(),
                                                      right:    "STRING", }),
    }
}

/// Short-circuit evaluation for `&&` and `||`.
///
/// Either operator returns the left value unchanged when it alone decides
/// the outcome, otherwise the right value; there is no coercion to
/// boolean.
pub fn eval_logical(operator: &str,
                    left: &Expression,
                    right: &Expression,
                    env: &Env)
                    -> EvalResult<Value> {
    let left = eval_expression(left, env)?;

    if operator == "&&" {
        if !is_truthy(&left) {
            return Ok(left);
        }
        return eval_expression(right, env);
    }

    if is_truthy(&left) {
        return Ok(left);
    }
    eval_expression(right, env)
}
