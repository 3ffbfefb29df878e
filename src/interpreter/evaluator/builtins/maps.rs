use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::builtins::check_arity,
        value::{core::Value, hash::HashKey},
    },
};

/// The keys of a map as a new array, in no particular order.
pub fn keys(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1, "1")?;
    let Value::Map(pairs) = &args[0] else {
        return Err(RuntimeError::ArgumentMustBe { position: "",
                                                  builtin:  "keys",
                                                  expected: "MAP",
                                                  kind:     args[0].type_name(), });
    };

    Ok(Value::array(pairs.borrow().values().map(|entry| entry.key.clone()).collect()))
}

/// The values of a map as a new array, in no particular order.
pub fn values(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1, "1")?;
    let Value::Map(pairs) = &args[0] else {
        return Err(RuntimeError::ArgumentMustBe { position: "",
                                                  builtin:  "values",
                                                  expected: "MAP",
                                                  kind:     args[0].type_name(), });
    };

    Ok(Value::array(pairs.borrow().values().map(|entry| entry.value.clone()).collect()))
}

/// Removes a key from a map in place.
///
/// Returns true when the key was present. This is the one intrinsic that
/// mutates its container argument.
pub fn delete(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 2, "2")?;
    let Value::Map(pairs) = &args[0] else {
        return Err(RuntimeError::ArgumentMustBe { position: "",
                                                  builtin:  "delete",
                                                  expected: "MAP",
                                                  kind:     args[0].type_name(), });
    };

    let Some(hash) = HashKey::from_value(&args[1]) else {
        return Err(RuntimeError::UnusableAsMapKey { kind: args[1].type_name() });
    };

    Ok(Value::Bool(pairs.borrow_mut().remove(&hash).is_some()))
}
