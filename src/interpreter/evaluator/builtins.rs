use crate::{error::RuntimeError, interpreter::value::core::Value};

/// Array operations.
pub mod arrays;
/// Value coercions and `type`.
pub mod convert;
/// Filesystem access.
pub mod fs;
/// Standard stream access.
pub mod io;
/// Map operations.
pub mod maps;
/// Numeric functions.
pub mod math;
/// String operations.
pub mod strings;

/// Resolves an intrinsic by name.
///
/// Name resolution consults this table only after the environment chain,
/// so a user binding may shadow any intrinsic, and an embedding may
/// pre-bind replacements for the stream intrinsics.
///
/// # Example
/// ```
/// use sugu::interpreter::evaluator::builtins::lookup;
///
/// assert!(lookup("len").is_some());
/// assert!(lookup("nope").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<Value> {
    let (name, func): (&'static str, fn(&[Value]) -> Result<Value, RuntimeError>) = match name {
        "out" => ("out", io::out),
        "outln" => ("outln", io::outln),
        "in" => ("in", io::input),
        "type" => ("type", convert::type_of),
        "len" => ("len", arrays::len),
        "push" => ("push", arrays::push),
        "pop" => ("pop", arrays::pop),
        "first" => ("first", arrays::first),
        "last" => ("last", arrays::last),
        "rest" => ("rest", arrays::rest),
        "keys" => ("keys", maps::keys),
        "values" => ("values", maps::values),
        "delete" => ("delete", maps::delete),
        "int" => ("int", convert::int),
        "float" => ("float", convert::float),
        "string" => ("string", convert::string),
        "bool" => ("bool", convert::boolean),
        "split" => ("split", strings::split),
        "join" => ("join", strings::join),
        "trim" => ("trim", strings::trim),
        "replace" => ("replace", strings::replace),
        "substring" => ("substring", strings::substring),
        "indexOf" => ("indexOf", strings::index_of),
        "toUpper" => ("toUpper", strings::to_upper),
        "toLower" => ("toLower", strings::to_lower),
        "abs" => ("abs", math::abs),
        "floor" => ("floor", math::floor),
        "ceil" => ("ceil", math::ceil),
        "round" => ("round", math::round),
        "sqrt" => ("sqrt", math::sqrt),
        "pow" => ("pow", math::pow),
        "min" => ("min", math::min),
        "max" => ("max", math::max),
        "random" => ("random", math::random),
        "readFile" => ("readFile", fs::read_file),
        "writeFile" => ("writeFile", fs::write_file),
        "appendFile" => ("appendFile", fs::append_file),
        "fileExists" => ("fileExists", fs::file_exists),
        _ => return None,
    };
    Some(Value::builtin(name, func))
}

/// Rejects a call whose argument count is not exactly `want`.
///
/// `want_tag` is the count as it appears in the error message.
pub(crate) fn check_arity(args: &[Value],
                          want: usize,
                          want_tag: &'static str)
                          -> Result<(), RuntimeError> {
    if args.len() == want {
        Ok(())
    } else {
        Err(RuntimeError::WrongArgumentCount { got:  args.len(),
                                               want: want_tag, })
    }
}
