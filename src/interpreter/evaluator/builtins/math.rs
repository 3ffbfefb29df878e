use crate::{
    error::RuntimeError,
    interpreter::{evaluator::builtins::check_arity, value::core::Value},
};

fn want_number(args: &[Value],
               index: usize,
               position: &'static str,
               builtin: &'static str)
               -> Result<f64, RuntimeError> {
    match &args[index] {
        Value::Number(n) => Ok(*n),
        other => Err(RuntimeError::ArgumentMustBe { position,
                                                    builtin,
                                                    expected: "NUMBER",
                                                    kind: other.type_name() }),
    }
}

/// Absolute value.
pub fn abs(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1, "1")?;
    Ok(Value::Number(want_number(args, 0, "", "abs")?.abs()))
}

/// Rounds down to the nearest whole number.
pub fn floor(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1, "1")?;
    Ok(Value::Number(want_number(args, 0, "", "floor")?.floor()))
}

/// Rounds up to the nearest whole number.
pub fn ceil(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1, "1")?;
    Ok(Value::Number(want_number(args, 0, "", "ceil")?.ceil()))
}

/// Rounds half away from zero.
pub fn round(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1, "1")?;
    Ok(Value::Number(want_number(args, 0, "", "round")?.round()))
}

/// Square root; negative input is an error.
pub fn sqrt(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1, "1")?;
    let value = want_number(args, 0, "", "sqrt")?;
    if value < 0.0 {
        return Err(RuntimeError::SqrtOfNegative { value });
    }
    Ok(Value::Number(value.sqrt()))
}

/// `base` raised to `exponent`.
pub fn pow(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 2, "2")?;
    let base = want_number(args, 0, "first ", "pow")?;
    let exponent = want_number(args, 1, "second ", "pow")?;
    Ok(Value::Number(base.powf(exponent)))
}

/// Smallest of one or more numbers.
pub fn min(args: &[Value]) -> Result<Value, RuntimeError> {
    fold_numbers(args, "min", f64::min)
}

/// Largest of one or more numbers.
pub fn max(args: &[Value]) -> Result<Value, RuntimeError> {
    fold_numbers(args, "max", f64::max)
}

fn fold_numbers(args: &[Value],
                builtin: &'static str,
                pick: fn(f64, f64) -> f64)
                -> Result<Value, RuntimeError> {
    if args.is_empty() {
        return Err(RuntimeError::WrongArgumentCount { got:  0,
                                                      want: "1+", });
    }

    let mut numbers = Vec::with_capacity(args.len());
    for (index, arg) in args.iter().enumerate() {
        match arg {
            Value::Number(n) => numbers.push(*n),
            other => {
                return Err(RuntimeError::NumberedArgumentMustBe { index: index + 1,
                                                                  builtin,
                                                                  kind: other.type_name() });
            },
        }
    }

    let mut result = numbers[0];
    for number in &numbers[1..] {
        result = pick(result, *number);
    }
    Ok(Value::Number(result))
}

/// A uniformly distributed number in `[0, 1)`.
pub fn random(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 0, "0")?;
    Ok(Value::Number(rand::random::<f64>()))
}
