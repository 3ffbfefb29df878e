use std::collections::HashMap;

use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Env, EvalResult, eval_expression},
        value::core::{MapEntry, Value},
        value::hash::HashKey,
    },
};

/// Reads `container[index]` on already-evaluated operands.
///
/// Array and string reads are by integer index and yield null when out of
/// range, negative included. Map reads require a hashable key and yield
/// null for absent keys.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn eval_index(left: &Value, index: &Value) -> Result<Value, RuntimeError> {
    match (left, index) {
        (Value::Array(elements), Value::Number(n)) => {
            let idx = *n as i64;
            if idx < 0 {
                return Ok(Value::Null);
            }
            Ok(elements.borrow().get(idx as usize).cloned().unwrap_or(Value::Null))
        },
        (Value::Str(s), Value::Number(n)) => {
            let idx = *n as i64;
            if idx < 0 {
                return Ok(Value::Null);
            }
            // Indexing counts code points, not bytes.
            Ok(s.chars()
                .nth(idx as usize)
                .map_or(Value::Null, |ch| Value::Str(ch.to_string())))
        },
        (Value::Map(pairs), key) => {
            let Some(hash) = HashKey::from_value(key) else {
                return Err(RuntimeError::UnusableAsHashKey { kind: key.type_name() });
            };
            Ok(pairs.borrow().get(&hash).map_or(Value::Null, |entry| entry.value.clone()))
        },
        _ => Err(RuntimeError::IndexNotSupported { kind: left.type_name() }),
    }
}

/// Builds a map from a literal's ordered key/value pairs.
///
/// Keys evaluate before their values, pair by pair in source order; a
/// later duplicate key replaces the earlier entry.
pub fn eval_map_literal(pairs: &[(Expression, Expression)], env: &Env) -> EvalResult<Value> {
    let mut table = HashMap::new();

    for (key_expr, value_expr) in pairs {
        let key = eval_expression(key_expr, env)?;

        let Some(hash) = HashKey::from_value(&key) else {
            return Err(RuntimeError::UnusableAsHashKey { kind: key.type_name() }.into());
        };

        let value = eval_expression(value_expr, env)?;
        table.insert(hash, MapEntry { key, value });
    }

    Ok(Value::map(table))
}
