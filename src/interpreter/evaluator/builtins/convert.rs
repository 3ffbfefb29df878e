use crate::{
    error::RuntimeError,
    interpreter::{evaluator::builtins::check_arity, value::core::Value},
};

/// Returns the kind tag of its argument as a string.
pub fn type_of(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1, "1")?;
    Ok(Value::Str(args[0].type_name().to_string()))
}

/// Converts to a whole number, truncating toward zero.
///
/// Strings are parsed as numbers first; booleans become 1 or 0.
pub fn int(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1, "1")?;
    match &args[0] {
        Value::Number(n) => Ok(Value::Number(n.trunc())),
        Value::Str(s) => match s.parse::<f64>() {
            Ok(parsed) => Ok(Value::Number(parsed.trunc())),
            Err(_) => Err(RuntimeError::CannotConvertValue { value:  s.clone(),
                                                             target: "int", }),
        },
        Value::Bool(b) => Ok(Value::Number(if *b { 1.0 } else { 0.0 })),
        other => Err(RuntimeError::CannotConvertKind { kind:   other.type_name(),
                                                       target: "int", }),
    }
}

/// Converts to a number.
pub fn float(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1, "1")?;
    match &args[0] {
        Value::Number(n) => Ok(Value::Number(*n)),
        Value::Str(s) => match s.parse::<f64>() {
            Ok(parsed) => Ok(Value::Number(parsed)),
            Err(_) => Err(RuntimeError::CannotConvertValue { value:  s.clone(),
                                                             target: "float", }),
        },
        Value::Bool(b) => Ok(Value::Number(if *b { 1.0 } else { 0.0 })),
        other => Err(RuntimeError::CannotConvertKind { kind:   other.type_name(),
                                                       target: "float", }),
    }
}

/// Converts any value to its display form.
pub fn string(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1, "1")?;
    Ok(Value::Str(args[0].to_string()))
}

/// Converts to a boolean.
///
/// Unlike boolean contexts in the language itself, this coercion treats
/// `0`, `""` and empty containers as false.
pub fn boolean(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1, "1")?;
    let result = match &args[0] {
        Value::Number(n) => *n != 0.0,
        Value::Str(s) => !s.is_empty(),
        Value::Bool(b) => *b,
        Value::Null => false,
        Value::Array(elements) => !elements.borrow().is_empty(),
        Value::Map(pairs) => !pairs.borrow().is_empty(),
        Value::Function(_) | Value::Builtin(_) => true,
    };
    Ok(Value::Bool(result))
}
