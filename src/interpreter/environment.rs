use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    rc::Rc,
};

use crate::interpreter::value::core::Value;

/// A lexical scope frame.
///
/// Frames link outward: lookups walk the chain until a binding is found,
/// definitions always land in the innermost frame, and updates mutate the
/// frame that defined the name. Frames are shared through
/// `Rc<RefCell<_>>` so closures can keep their defining frame alive past
/// the call that created it.
///
/// # Example
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use sugu::interpreter::{environment::Environment, value::core::Value};
///
/// let outer = Rc::new(RefCell::new(Environment::new()));
/// outer.borrow_mut().set("x", Value::Number(1.0));
///
/// let mut inner = Environment::enclosing(outer.clone());
/// assert_eq!(inner.get("x"), Some(Value::Number(1.0)));
///
/// assert!(inner.update("x", Value::Number(2.0)));
/// assert_eq!(outer.borrow().get("x"), Some(Value::Number(2.0)));
/// ```
#[derive(Debug, Default)]
pub struct Environment {
    store:  HashMap<String, Value>,
    consts: HashSet<String>,
    outer:  Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// Creates an empty top-level frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a frame whose lookups fall through to `outer`.
    #[must_use]
    pub fn enclosing(outer: Rc<RefCell<Environment>>) -> Self {
        Self { store:  HashMap::new(),
               consts: HashSet::new(),
               outer:  Some(outer), }
    }

    /// Looks a name up, walking outward through the frame chain.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }

        let mut current = self.outer.clone();
        while let Some(frame) = current {
            let frame = frame.borrow();
            if let Some(value) = frame.store.get(name) {
                return Some(value.clone());
            }
            current = frame.outer.clone();
        }

        None
    }

    /// Binds a name in this frame. Rebinding an existing name is allowed.
    pub fn set(&mut self, name: &str, value: Value) {
        self.store.insert(name.to_string(), value);
    }

    /// Binds a name in this frame and marks it const.
    pub fn set_const(&mut self, name: &str, value: Value) {
        self.store.insert(name.to_string(), value);
        self.consts.insert(name.to_string());
    }

    /// Whether any frame in the chain marks this name const.
    #[must_use]
    pub fn is_const(&self, name: &str) -> bool {
        if self.consts.contains(name) {
            return true;
        }

        let mut current = self.outer.clone();
        while let Some(frame) = current {
            let frame = frame.borrow();
            if frame.consts.contains(name) {
                return true;
            }
            current = frame.outer.clone();
        }

        false
    }

    /// Mutates the name in the frame that defines it.
    ///
    /// Returns `false` when no frame in the chain defines the name.
    pub fn update(&mut self, name: &str, value: Value) -> bool {
        if self.store.contains_key(name) {
            self.store.insert(name.to_string(), value);
            return true;
        }

        let mut current = self.outer.clone();
        while let Some(frame) = current {
            let mut frame = frame.borrow_mut();
            if frame.store.contains_key(name) {
                frame.store.insert(name.to_string(), value);
                return true;
            }
            current = frame.outer.clone();
        }

        false
    }
}
