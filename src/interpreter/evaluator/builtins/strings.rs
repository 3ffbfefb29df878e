use crate::{
    error::RuntimeError,
    interpreter::{evaluator::builtins::check_arity, value::core::Value},
};

fn want_string(args: &[Value],
               index: usize,
               position: &'static str,
               builtin: &'static str)
               -> Result<String, RuntimeError> {
    match &args[index] {
        Value::Str(s) => Ok(s.clone()),
        other => Err(RuntimeError::ArgumentMustBe { position,
                                                    builtin,
                                                    expected: "STRING",
                                                    kind: other.type_name() }),
    }
}

/// Splits a string on a separator into an array of strings.
///
/// An empty separator splits into individual code points.
pub fn split(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 2, "2")?;
    let text = want_string(args, 0, "", "split")?;
    let separator = want_string(args, 1, "second ", "split")?;

    let parts: Vec<Value> = if separator.is_empty() {
        text.chars().map(|ch| Value::Str(ch.to_string())).collect()
    } else {
        text.split(separator.as_str()).map(|part| Value::Str(part.to_string())).collect()
    };
    Ok(Value::array(parts))
}

/// Joins array elements with a separator, rendering each element the way
/// `string` would.
pub fn join(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 2, "2")?;
    let Value::Array(elements) = &args[0] else {
        return Err(RuntimeError::ArgumentMustBe { position: "",
                                                  builtin:  "join",
                                                  expected: "ARRAY",
                                                  kind:     args[0].type_name(), });
    };
    let separator = want_string(args, 1, "second ", "join")?;

    let rendered: Vec<String> = elements.borrow().iter().map(ToString::to_string).collect();
    Ok(Value::Str(rendered.join(&separator)))
}

/// Strips leading and trailing whitespace.
pub fn trim(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1, "1")?;
    let text = want_string(args, 0, "", "trim")?;
    Ok(Value::Str(text.trim().to_string()))
}

/// Replaces every occurrence of a substring.
pub fn replace(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 3, "3")?;
    let text = want_string(args, 0, "", "replace")?;
    let from = want_string(args, 1, "second ", "replace")?;
    let to = want_string(args, 2, "third ", "replace")?;
    Ok(Value::Str(text.replace(&from, &to)))
}

/// The code points from `start` (inclusive) to `end` (exclusive).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn substring(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 3, "3")?;
    let text = want_string(args, 0, "first ", "substring")?;
    let Value::Number(start) = args[1] else {
        return Err(RuntimeError::ArgumentMustBe { position: "second ",
                                                  builtin:  "substring",
                                                  expected: "NUMBER",
                                                  kind:     args[1].type_name(), });
    };
    let Value::Number(end) = args[2] else {
        return Err(RuntimeError::ArgumentMustBe { position: "third ",
                                                  builtin:  "substring",
                                                  expected: "NUMBER",
                                                  kind:     args[2].type_name(), });
    };

    let chars: Vec<char> = text.chars().collect();
    let length = chars.len();
    let start = start as i64;
    let end = end as i64;

    if start < 0 || start as usize > length {
        return Err(RuntimeError::SubstringStartOutOfRange { index: start, length });
    }
    if end < 0 || end as usize > length {
        return Err(RuntimeError::SubstringEndOutOfRange { index: end, length });
    }
    if start > end {
        return Err(RuntimeError::SubstringStartAfterEnd { start, end });
    }

    Ok(Value::Str(chars[start as usize..end as usize].iter().collect()))
}

/// The code-point offset of the first occurrence of a substring, or -1.
#[allow(clippy::cast_precision_loss)]
pub fn index_of(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 2, "2")?;
    let text = want_string(args, 0, "first ", "indexOf")?;
    let needle = want_string(args, 1, "second ", "indexOf")?;

    match text.find(&needle) {
        Some(byte_index) => Ok(Value::Number(text[..byte_index].chars().count() as f64)),
        None => Ok(Value::Number(-1.0)),
    }
}

/// Upper-cases a string.
pub fn to_upper(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1, "1")?;
    let text = want_string(args, 0, "", "toUpper")?;
    Ok(Value::Str(text.to_uppercase()))
}

/// Lower-cases a string.
pub fn to_lower(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1, "1")?;
    let text = want_string(args, 0, "", "toLower")?;
    Ok(Value::Str(text.to_lowercase()))
}
