use std::{io::Write, os::unix::fs::OpenOptionsExt};

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

/// Reads a whole file as a string.
pub fn read_file(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1, "1")?;
    let path = want_string(args, 0, "", "readFile")?;

    match std::fs::read_to_string(&path) {
        Ok(content) => Ok(Value::Str(content)),
        Err(error) => Err(RuntimeError::FileRead { path,
                                                   reason: error.to_string() }),
    }
}

/// Writes a string to a file, replacing any previous content. Created
/// files get mode 0644.
pub fn write_file(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 2, "2")?;
    let path = want_string(args, 0, "first ", "writeFile")?;
    let content = want_string(args, 1, "second ", "writeFile")?;

    let mut file = match std::fs::OpenOptions::new().write(true)
                                                    .create(true)
                                                    .truncate(true)
                                                    .mode(0o644)
                                                    .open(&path)
    {
        Ok(file) => file,
        Err(error) => {
            return Err(RuntimeError::FileWrite { path,
                                                 reason: error.to_string() });
        },
    };

    match file.write_all(content.as_bytes()) {
        Ok(()) => Ok(Value::Bool(true)),
        Err(error) => Err(RuntimeError::FileWrite { path,
                                                    reason: error.to_string() }),
    }
}

/// Appends a string to a file, creating it when missing. Created files
/// get mode 0644.
pub fn append_file(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 2, "2")?;
    let path = want_string(args, 0, "first ", "appendFile")?;
    let content = want_string(args, 1, "second ", "appendFile")?;

    let mut file = match std::fs::OpenOptions::new().append(true)
                                                    .create(true)
                                                    .mode(0o644)
                                                    .open(&path)
    {
        Ok(file) => file,
        Err(error) => {
            return Err(RuntimeError::FileOpen { path,
                                                reason: error.to_string() });
        },
    };

    match file.write_all(content.as_bytes()) {
        Ok(()) => Ok(Value::Bool(true)),
        Err(error) => Err(RuntimeError::FileAppend { path,
                                                     reason: error.to_string() }),
    }
}

/// Whether the path names an existing regular file. Directories report
/// false.
pub fn file_exists(args: &[Value]) -> Result<Value, RuntimeError> {
    check_arity(args, 1, "1")?;
    let path = want_string(args, 0, "", "fileExists")?;

    match std::fs::metadata(&path) {
        Ok(metadata) => Ok(Value::Bool(!metadata.is_dir())),
        Err(_) => Ok(Value::Bool(false)),
    }
}
