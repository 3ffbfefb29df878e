use crate::{
    error::RuntimeError,
    interpreter::{evaluator::builtins::check_arity, value::core::Value},
};

/// Code-point count for strings, element count for arrays, pair count for
/// maps.
#[allow(clippy::cast_precision_loss)]
pub fn len(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1, "1")?;
    match &args[0] {
        Value::Str(s) => Ok(Value::Number(s.chars().count() as f64)),
        Value::Array(elements) => Ok(Value::Number(elements.borrow().len() as f64)),
        Value::Map(pairs) => Ok(Value::Number(pairs.borrow().len() as f64)),
        other => Err(RuntimeError::ArgumentNotSupported { builtin: "len",
                                                          kind:    other.type_name(), }),
    }
}

/// Returns a new array with the element appended; the original is
/// untouched.
pub fn push(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 2, "2")?;
    let Value::Array(elements) = &args[0] else {
        return Err(RuntimeError::ArgumentMustBe { position: "",
                                                  builtin:  "push",
                                                  expected: "ARRAY",
                                                  kind:     args[0].type_name(), });
    };

    let mut extended = elements.borrow().clone();
    extended.push(args[1].clone());
    Ok(Value::array(extended))
}

/// Returns a new array without the last element, or null for an empty
/// array.
pub fn pop(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1, "1")?;
    let Value::Array(elements) = &args[0] else {
        return Err(RuntimeError::ArgumentMustBe { position: "",
                                                  builtin:  "pop",
                                                  expected: "ARRAY",
                                                  kind:     args[0].type_name(), });
    };

    let elements = elements.borrow();
    if elements.is_empty() {
        return Ok(Value::Null);
    }
    Ok(Value::array(elements[..elements.len() - 1].to_vec()))
}

/// The first element, or null for an empty array.
pub fn first(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1, "1")?;
    let Value::Array(elements) = &args[0] else {
        return Err(RuntimeError::ArgumentMustBe { position: "",
                                                  builtin:  "first",
                                                  expected: "ARRAY",
                                                  kind:     args[0].type_name(), });
    };

    Ok(elements.borrow().first().cloned().unwrap_or(Value::Null))
}

/// The last element, or null for an empty array.
pub fn last(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1, "1")?;
    let Value::Array(elements) = &args[0] else {
        return Err(RuntimeError::ArgumentMustBe { position: "",
                                                  builtin:  "last",
                                                  expected: "ARRAY",
                                                  kind:     args[0].type_name(), });
    };

    Ok(elements.borrow().last().cloned().unwrap_or(Value::Null))
}

/// A new array holding everything but the first element, or null for an
/// empty array.
pub fn rest(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1, "1")?;
    let Value::Array(elements) = &args[0] else {
        return Err(RuntimeError::ArgumentMustBe { position: "",
                                                  builtin:  "rest",
                                                  expected: "ARRAY",
                                                  kind:     args[0].type_name(), });
    };

    let elements = elements.borrow();
    if elements.is_empty() {
        return Ok(Value::Null);
    }
    Ok(Value::array(elements[1..].to_vec()))
}
