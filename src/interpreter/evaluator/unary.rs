use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::is_truthy, value::core::Value},
};

/// Applies a prefix operator to an already-evaluated operand.
///
/// `!` complements truthiness and works on every value kind; `-` negates
/// numbers only.
pub fn eval_prefix(operator: &str, right: &Value) -> Result<Value, RuntimeError> {
    match operator {
        "!" => Ok(Value::Bool(!is_truthy(right))),
        "-" => match right {
            Value::Number(n) => Ok(Value::Number(-n)),
            other => Err(RuntimeError::UnknownPrefixOperator { operator: operator.to_string(),
                                                               right:    other.type_name(), }),
        },
        _ => Err(RuntimeError::UnknownPrefixOperator { operator: operator.to_string(),
                                                       right:    right.type_name(), }),
    }
}
