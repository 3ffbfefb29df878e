use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    ast::Block,
    error::RuntimeError,
    interpreter::{environment::Environment, value::hash::HashKey},
};

/// A key/value pair stored in a map.
///
/// The original key value is kept alongside the payload so iteration and
/// rendering can reproduce it; the [`HashKey`] under which the pair is
/// stored only identifies it.
#[derive(Debug, Clone)]
pub struct MapEntry {
    pub key:   Value,
    pub value: Value,
}

/// A user-defined function value.
///
/// The captured environment is shared, not copied; a closure returned from
/// a call keeps the frames it closed over alive and observes later
/// mutations to them.
pub struct FunctionValue {
    pub parameters: Vec<String>,
    pub body:       Block,
    pub env:        Rc<RefCell<Environment>>,
    pub name:       Option<String>,
}

impl std::fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The captured environment can reach this function again, so it is
        // left out of the debug output.
        f.debug_struct("FunctionValue")
         .field("parameters", &self.parameters)
         .field("name", &self.name)
         .finish_non_exhaustive()
    }
}

/// The call signature shared by every intrinsic.
pub type BuiltinFn = dyn Fn(&[Value]) -> Result<Value, RuntimeError>;

/// A host-implemented callable.
#[derive(Clone)]
pub struct BuiltinValue {
    pub name: &'static str,
    pub func: Rc<BuiltinFn>,
}

impl std::fmt::Debug for BuiltinValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinValue").field("name", &self.name).finish_non_exhaustive()
    }
}

/// A runtime value.
///
/// Arrays and maps have reference semantics: cloning a `Value` clones the
/// handle, and in-place index assignment is visible through every binding
/// of the same container.
#[derive(Debug, Clone)]
pub enum Value {
    /// An IEEE-754 double.
    Number(f64),
    /// Immutable text; length and indexing count code points.
    Str(String),
    /// `true` or `false`.
    Bool(bool),
    /// The single null value.
    Null,
    /// A mutable ordered sequence.
    Array(Rc<RefCell<Vec<Value>>>),
    /// A mutable mapping from hashable values to values.
    Map(Rc<RefCell<HashMap<HashKey, MapEntry>>>),
    /// A closure.
    Function(Rc<FunctionValue>),
    /// An intrinsic.
    Builtin(BuiltinValue),
}

impl Value {
    /// Wraps a vector in a fresh array value.
    #[must_use]
    pub fn array(elements: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(elements)))
    }

    /// Wraps a pair table in a fresh map value.
    #[must_use]
    pub fn map(pairs: HashMap<HashKey, MapEntry>) -> Self {
        Self::Map(Rc::new(RefCell::new(pairs)))
    }

    /// Wraps a host function in a builtin value.
    pub fn builtin(name: &'static str,
                   func: impl Fn(&[Self]) -> Result<Self, RuntimeError> + 'static)
                   -> Self {
        Self::Builtin(BuiltinValue { name,
                                     func: Rc::new(func) })
    }

    /// The kind tag used in error messages and returned by `type`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "NUMBER",
            Self::Str(_) => "STRING",
            Self::Bool(_) => "BOOLEAN",
            Self::Null => "NULL",
            Self::Array(_) => "ARRAY",
            Self::Map(_) => "MAP",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
        }
    }

    /// Returns `true` if the value is a [`Number`](Self::Number).
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl PartialEq for Value {
    /// Structural equality for numbers, strings and booleans, identity for
    /// containers and callables. Two nulls are equal; values of different
    /// kinds never are. `NaN` is not equal to itself, following IEEE.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Map(a), Self::Map(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a.name == b.name,
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::Array(elements) => {
                let rendered: Vec<String> =
                    elements.borrow().iter().map(ToString::to_string).collect();
                write!(f, "[{}]", rendered.join(", "))
            },
            Self::Map(pairs) => {
                // Pairs are sorted by their rendered form so the output is
                // stable across runs.
                let mut rendered: Vec<String> =
                    pairs.borrow()
                         .values()
                         .map(|entry| format!("{}: {}", entry.key, entry.value))
                         .collect();
                rendered.sort();
                write!(f, "{{{}}}", rendered.join(", "))
            },
            Self::Function(function) => {
                let params = function.parameters.join(", ");
                match &function.name {
                    Some(name) => write!(f, "func {name}({params}) => {{ ... }}"),
                    None => write!(f, "func({params}) => {{ ... }}"),
                }
            },
            Self::Builtin(_) => write!(f, "builtin function"),
        }
    }
}

/// Renders a number the way the language shows it.
///
/// Integer-valued numbers inside the signed 64-bit range print without a
/// fractional part. Everything else prints as the shortest decimal,
/// switching to a scientific form once the exponent leaves the plain
/// decimal window.
///
/// # Example
/// ```
/// use sugu::interpreter::value::core::format_number;
///
/// assert_eq!(format_number(42.0), "42");
/// assert_eq!(format_number(3.14), "3.14");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn format_number(value: f64) -> String {
    if value.trunc() == value && value >= i64::MIN as f64 && value <= i64::MAX as f64 {
        return format!("{}", value as i64);
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= 21 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    } else {
        format!("{value}")
    }
}
