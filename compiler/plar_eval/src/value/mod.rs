//! Runtime values for the Plar interpreter.
//!
//! The variant set is closed. Scalars are stored inline; everything else
//! lives behind a [`Heap`] handle, whose constructor is private to this
//! module, so values are only built through the factory methods on `Value`.
//!
//! ```text
//! let s = Value::text("ola");          // OK
//! let l = Value::list_of_nulls(3);     // OK
//! let s = Value::Text(Heap::new(..));  // ERROR: Heap::new is pub(super)
//! ```

mod composite;
mod heap;

use std::cell::RefCell;
use std::fmt;

use plar_stack::ensure_sufficient_stack;

pub use composite::{FunctionBody, FunctionValue, MapValue, NativeFn, ObjectValue};
pub use heap::Heap;

pub const TYPE_NULL: &str = "Nulo";
pub const TYPE_INTEGER: &str = "Inteiro";
pub const TYPE_REAL: &str = "Real";
pub const TYPE_TEXT: &str = "Texto";
pub const TYPE_LOGIC: &str = "Logico";
pub const TYPE_LIST: &str = "Lista";
pub const TYPE_MAP: &str = "Mapa";
pub const TYPE_FUNCTION: &str = "Funcao";

/// Type names that need no declaration.
pub const BUILTIN_TYPES: [&str; 8] = [
    TYPE_INTEGER,
    TYPE_REAL,
    TYPE_TEXT,
    TYPE_LOGIC,
    TYPE_NULL,
    TYPE_LIST,
    TYPE_MAP,
    TYPE_FUNCTION,
];

/// Allocate an object handle; construction needs the handle before the
/// object is wrapped in a `Value`.
pub fn new_object(object: ObjectValue) -> Heap<ObjectValue> {
    Heap::new(object)
}

/// Runtime value in the Plar interpreter.
#[derive(Clone)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Logic(bool),
    Text(Heap<String>),
    /// Mutable, fixed-length-at-creation list.
    List(Heap<RefCell<Vec<Value>>>),
    Map(Heap<RefCell<MapValue>>),
    Object(Heap<ObjectValue>),
    Function(Heap<FunctionValue>),
}

impl Value {
    #[inline]
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(Heap::new(s.into()))
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(RefCell::new(items)))
    }

    /// `Lista(n)`: `n` nulls.
    pub fn list_of_nulls(len: usize) -> Self {
        Value::list(vec![Value::Null; len])
    }

    pub fn map(map: MapValue) -> Self {
        Value::Map(Heap::new(RefCell::new(map)))
    }

    pub fn object(object: ObjectValue) -> Self {
        Value::Object(new_object(object))
    }

    pub fn function(function: FunctionValue) -> Self {
        Value::Function(Heap::new(function))
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The name declared types are checked against. Objects report their
    /// class name.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => TYPE_NULL,
            Value::Integer(_) => TYPE_INTEGER,
            Value::Real(_) => TYPE_REAL,
            Value::Logic(_) => TYPE_LOGIC,
            Value::Text(_) => TYPE_TEXT,
            Value::List(_) => TYPE_LIST,
            Value::Map(_) => TYPE_MAP,
            Value::Object(obj) => &obj.class,
            Value::Function(_) => TYPE_FUNCTION,
        }
    }

    /// Whether this value may be stored under the declared type `ty`.
    pub fn matches_type(&self, ty: &str) -> bool {
        match self {
            Value::Object(obj) => obj.conforms_to(ty),
            other => other.type_name() == ty,
        }
    }

    /// Language-level equality.
    ///
    /// `nulo` equals only `nulo`; Integer and Real compare numerically;
    /// Text and Logic by value; lists, maps, objects and functions by
    /// identity.
    #[allow(clippy::cast_precision_loss)]
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Real(a), Value::Real(b)) => a == b,
            (Value::Integer(a), Value::Real(b)) | (Value::Real(b), Value::Integer(a)) => {
                (*a as f64) == *b
            }
            (Value::Text(a), Value::Text(b)) => **a == **b,
            (Value::Logic(a), Value::Logic(b)) => a == b,
            (Value::List(a), Value::List(b)) => Heap::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Heap::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Heap::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Render a real so integral values keep a trailing `.0`.
fn format_real(f: &mut fmt::Formatter<'_>, r: f64) -> fmt::Result {
    if r.is_finite() && r.fract() == 0.0 && r.abs() < 1e16 {
        write!(f, "{r:.1}")
    } else {
        write!(f, "{r}")
    }
}

impl Value {
    /// Write the textual rendering, with `path` holding the containers
    /// currently being rendered. A container reached again through itself
    /// prints as `[...]` or `[[...]]`.
    fn render(&self, f: &mut fmt::Formatter<'_>, path: &mut Vec<*const ()>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "nulo"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Real(r) => format_real(f, *r),
            Value::Logic(true) => write!(f, "verdadeiro"),
            Value::Logic(false) => write!(f, "falso"),
            Value::Text(s) => write!(f, "{}", &***s),
            Value::List(items) => {
                if path.contains(&items.addr()) {
                    return write!(f, "[...]");
                }
                path.push(items.addr());
                write!(f, "[")?;
                for (i, item) in items.borrow().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    ensure_sufficient_stack(|| item.render(f, path))?;
                }
                path.pop();
                write!(f, "]")
            }
            Value::Map(map) => {
                if path.contains(&map.addr()) {
                    return write!(f, "[[...]]");
                }
                path.push(map.addr());
                write!(f, "[[")?;
                for (i, (k, v)) in map.borrow().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    ensure_sufficient_stack(|| k.render(f, path))?;
                    write!(f, ": ")?;
                    ensure_sufficient_stack(|| v.render(f, path))?;
                }
                path.pop();
                write!(f, "]]")
            }
            Value::Object(obj) => write!(f, "[Objeto {}]", obj.class),
            Value::Function(func) => write!(f, "[fun {}]", func.name),
        }
    }

    /// Element-wise list comparison. A pair of lists already being compared
    /// further up counts as equal, so cyclic lists terminate.
    fn structurally_eq(&self, other: &Self, path: &mut Vec<(*const (), *const ())>) -> bool {
        match (self, other) {
            (Value::Integer(_), Value::Real(_)) | (Value::Real(_), Value::Integer(_)) => false,
            (Value::List(a), Value::List(b)) => {
                let pair = (a.addr(), b.addr());
                if Heap::ptr_eq(a, b) || path.contains(&pair) {
                    return true;
                }
                let (a, b) = (a.borrow(), b.borrow());
                if a.len() != b.len() {
                    return false;
                }
                path.push(pair);
                let same = a.iter().zip(b.iter()).all(|(x, y)| {
                    ensure_sufficient_stack(|| x.structurally_eq(y, path))
                });
                path.pop();
                same
            }
            _ => self.equals(other),
        }
    }
}

/// The textual rendering used by printing and by `+` with Text.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, &mut Vec::new())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Integer(n) => write!(f, "Integer({n})"),
            Value::Real(r) => write!(f, "Real({r:?})"),
            Value::Logic(b) => write!(f, "Logic({b})"),
            Value::Text(s) => write!(f, "Text({:?})", &***s),
            Value::List(_) | Value::Map(_) => write!(f, "{}({self})", self.type_name()),
            Value::Object(obj) => write!(f, "Object({})", obj.class),
            Value::Function(func) => write!(f, "Function({})", func.name),
        }
    }
}

/// Structural equality for tests and diagnostics; language equality is
/// [`Value::equals`].
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.structurally_eq(other, &mut Vec::new())
    }
}
