//! Heap-allocated value payloads: maps, objects and functions.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use plar_ir::FunctionDecl;
use rustc_hash::FxHashMap;

use super::Value;
use crate::environment::{LocalScope, Scope};
use crate::interpreter::Interpreter;
use crate::EvalResult;

/// Insertion-ordered map keyed by value equality.
///
/// Keys can be any `Value`, including lists and objects (compared by
/// identity), so entries live in a vector and lookups are linear.
#[derive(Clone, Default)]
pub struct MapValue {
    entries: Vec<(Value, Value)>,
}

impl MapValue {
    pub fn new() -> Self {
        MapValue::default()
    }

    pub fn get(&self, key: &Value) -> Option<Value> {
        self.entries
            .iter()
            .find(|(k, _)| k.equals(key))
            .map(|(_, v)| v.clone())
    }

    /// Insert or replace the entry for `key`, keeping its original position.
    pub fn insert(&mut self, key: Value, value: Value) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| k.equals(&key)) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

/// An instance of a user class.
///
/// `superclass` and `interfaces` are copied from the class declaration at
/// construction time; declared-type checks read them directly.
pub struct ObjectValue {
    pub class: String,
    pub superclass: Option<String>,
    pub interfaces: Vec<String>,
    fields: RefCell<FxHashMap<String, Value>>,
}

impl ObjectValue {
    pub fn new(class: String, superclass: Option<String>, interfaces: Vec<String>) -> Self {
        ObjectValue {
            class,
            superclass,
            interfaces,
            fields: RefCell::new(FxHashMap::default()),
        }
    }

    /// Read a field; absent fields read as `None`.
    pub fn field(&self, name: &str) -> Option<Value> {
        self.fields.borrow().get(name).cloned()
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.borrow().contains_key(name)
    }

    /// Create or replace a field.
    pub fn set_field(&self, name: &str, value: Value) {
        self.fields.borrow_mut().insert(name.to_string(), value);
    }

    /// Whether this object satisfies the declared type `ty`: its own class,
    /// its declared superclass, or one of its declared interfaces.
    pub fn conforms_to(&self, ty: &str) -> bool {
        self.class == ty
            || self.superclass.as_deref() == Some(ty)
            || self.interfaces.iter().any(|iface| iface == ty)
    }
}

impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<String> = self.fields.borrow().keys().cloned().collect();
        names.sort();
        f.debug_struct("ObjectValue")
            .field("class", &self.class)
            .field("fields", &names)
            .finish_non_exhaustive()
    }
}

/// Signature of built-in functions.
///
/// Natives receive the interpreter so they can print through its handler and
/// call back into user functions.
pub type NativeFn = Rc<dyn Fn(&mut Interpreter, Vec<Value>) -> EvalResult>;

/// What runs when a function value is called.
#[derive(Clone)]
pub enum FunctionBody {
    /// A user function closing over the scope it was declared in.
    User {
        decl: Rc<FunctionDecl>,
        closure: LocalScope<Scope>,
    },
    Native(NativeFn),
}

/// A callable value.
#[derive(Clone)]
pub struct FunctionValue {
    pub name: String,
    pub return_type: Option<String>,
    pub body: FunctionBody,
}

impl FunctionValue {
    pub fn user(decl: Rc<FunctionDecl>, closure: LocalScope<Scope>) -> Self {
        FunctionValue {
            name: decl.name.clone(),
            return_type: decl.return_type.clone(),
            body: FunctionBody::User { decl, closure },
        }
    }

    pub fn native(
        name: &str,
        f: impl Fn(&mut Interpreter, Vec<Value>) -> EvalResult + 'static,
    ) -> Self {
        FunctionValue {
            name: name.to_string(),
            return_type: None,
            body: FunctionBody::Native(Rc::new(f)),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self.body, FunctionBody::Native(_))
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .field("native", &self.is_native())
            .finish_non_exhaustive()
    }
}
