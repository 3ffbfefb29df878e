use crate::{error::RuntimeError, interpreter::value::core::Value};

/// Writes each argument's display form to stdout.
pub fn out(args: &[Value]) -> Result<Value, RuntimeError> {
    for arg in args {
        print!("{arg}");
    }
    Ok(Value::Null)
}

/// Writes each argument's display form to stdout, one per line.
pub fn outln(args: &[Value]) -> Result<Value, RuntimeError> {
    for arg in args {
        println!("{arg}");
    }
    Ok(Value::Null)
}

/// Reads one line from stdin, without its trailing newline.
///
/// A `\r\n` ending loses both bytes. End of input and read failures both
/// surface as errors.
pub fn input(_args: &[Value]) -> Result<Value, RuntimeError> {
    let mut line = String::new();
    match std::io::stdin().read_line(&mut line) {
        Ok(0) => Err(RuntimeError::InputFailed { reason: "EOF".to_string() }),
        Ok(_) => {
            if line.ends_with('\n') {
                line.pop();
            }
            if line.ends_with('\r') {
                line.pop();
            }
            Ok(Value::Str(line))
        },
        Err(error) => Err(RuntimeError::InputFailed { reason: error.to_string() }),
    }
}
