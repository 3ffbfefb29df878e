use ordered_float::OrderedFloat;

use crate::interpreter::value::core::Value;

/// A map key derived from a hashable value.
///
/// Numbers key by their ordered bit representation, strings by content,
/// booleans by value. Values of any other kind are not hashable, and
/// trying to key a map with one is a runtime error at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    Number(OrderedFloat<f64>),
    Str(String),
    Bool(bool),
}

impl HashKey {
    /// Derives the key for a value, or `None` when the value kind is not
    /// hashable.
    ///
    /// # Example
    /// ```
    /// use sugu::interpreter::value::{core::Value, hash::HashKey};
    ///
    /// assert!(HashKey::from_value(&Value::Number(1.0)).is_some());
    /// assert!(HashKey::from_value(&Value::Null).is_none());
    /// ```
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Self::Number(OrderedFloat(*n))),
            Value::Str(s) => Some(Self::Str(s.clone())),
            Value::Bool(b) => Some(Self::Bool(*b)),
            _ => None,
        }
    }
}
