use crate::{
    ast::{Expression, Identifier},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Env, EvalResult, eval_expression},
        token::Token,
        value::core::{MapEntry, Value},
        value::hash::HashKey,
    },
};

/// `name = value`
///
/// The value is evaluated first; the name must already be visible and must
/// not be const. The defining frame is mutated, and the assignment
/// evaluates to the new value.
pub fn eval_assign(token: &Token,
                   name: &Identifier,
                   value: &Expression,
                   env: &Env)
                   -> EvalResult<Value> {
    let value = eval_expression(value, env)?;

    if env.borrow().get(&name.value).is_none() {
        return Err(RuntimeError::IdentifierNotFound { name:   name.value.clone(),
                                                      line:   name.token.line,
                                                      column: name.token.column, }.into());
    }

    if env.borrow().is_const(&name.value) {
        return Err(RuntimeError::ConstReassignment { name:   name.value.clone(),
                                                     line:   token.line,
                                                     column: token.column, }.into());
    }

    env.borrow_mut().update(&name.value, value.clone());
    Ok(value)
}

/// `container[index] = value`
///
/// Arrays mutate in place at integer indices inside `[0, len)`; maps
/// insert or replace under a hashable key. When the container expression
/// is a bare const-bound name the whole operation fails before anything is
/// evaluated.
pub fn eval_index_assign(left: &Expression,
                         index: &Expression,
                         value: &Expression,
                         env: &Env)
                         -> EvalResult<Value> {
    if let Expression::Identifier(ident) = left
       && env.borrow().is_const(&ident.value)
    {
        return Err(RuntimeError::ConstModification { name: ident.value.clone() }.into());
    }

    let container = eval_expression(left, env)?;
    let index = eval_expression(index, env)?;
    let value = eval_expression(value, env)?;

    match container {
        Value::Array(elements) => {
            let Value::Number(n) = &index else {
                return Err(RuntimeError::ArrayIndexType { kind: index.type_name() }.into());
            };

            #[allow(clippy::cast_possible_truncation)]
            let idx = *n as i64;
            let length = elements.borrow().len() as i64;
            if idx < 0 || idx >= length {
                return Err(RuntimeError::ArrayIndexOutOfBounds { index: idx, length }.into());
            }

            #[allow(clippy::cast_sign_loss)]
            {
                elements.borrow_mut()[idx as usize] = value.clone();
            }
            Ok(value)
        },
        Value::Map(pairs) => {
            let Some(hash) = HashKey::from_value(&index) else {
                return Err(RuntimeError::UnusableAsHashKey { kind: index.type_name() }.into());
            };

            pairs.borrow_mut().insert(hash, MapEntry { key:   index,
                                                       value: value.clone(), });
            Ok(value)
        },
        other => Err(RuntimeError::IndexAssignNotSupported { kind: other.type_name() }.into()),
    }
}
