//! Lexical scopes: the frames of bindings that make up the scope chain.
//!
//! A [`Scope`] holds one frame of bindings, a link to its parent and the
//! object bound to `este`. Closures keep their defining scope alive by
//! holding a [`LocalScope`] handle to it.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::value::{Heap, ObjectValue, Value};

/// A single-threaded scope handle with interior mutability.
///
/// All scope allocations go through [`LocalScope::new`], and the wrapper
/// makes it explicit that scopes are `Rc`-shared, never sent across threads.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether two handles point at the same frame.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One frame of the scope chain.
#[derive(Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<LocalScope<Scope>>,
    /// Object bound to `este`; inherited from the parent unless overridden.
    this: Option<Heap<ObjectValue>>,
}

impl Scope {
    /// Create a root scope with no parent and no `este`.
    pub fn new() -> Self {
        Scope::default()
    }

    /// Create a child scope. The child sees the parent's `este`.
    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        let this = parent.borrow().this.clone();
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
            this,
        }
    }

    /// Replace the `este` binding; used when entering a method body.
    #[must_use]
    pub fn with_this(mut self, this: Heap<ObjectValue>) -> Self {
        self.this = Some(this);
        self
    }

    pub fn this(&self) -> Option<&Heap<ObjectValue>> {
        self.this.as_ref()
    }

    /// Bind in this frame, overwriting a same-frame binding.
    #[inline]
    pub fn define(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), value);
    }

    /// Resolve through the parent chain.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref()?.borrow().get(name)
    }

    /// Mutate the nearest frame that already binds `name`.
    ///
    /// Hands the value back when no frame binds it.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), Value> {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
            return Ok(());
        }
        match &self.parent {
            Some(parent) => parent.borrow_mut().assign(name, value),
            None => Err(value),
        }
    }

    /// Assign to the nearest defining frame, or define here if none does.
    pub fn update_or_define(&mut self, name: &str, value: Value) {
        if let Err(value) = self.assign(name, value) {
            self.define(name, value);
        }
    }
}
