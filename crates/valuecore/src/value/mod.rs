//! Value representation for runtime values

mod display;
mod impls;
mod object;

pub use object::{HeapObject, Object, ObjectHeader, ObjectKind, StringObject};

use std::sync::Arc;

/// Shared handle to a generic heap object.
pub type ObjRef = Arc<Object>;

/// Shared handle to a string object.
pub type StrRef = Arc<StringObject>;

/// The tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Boolean
    Bool,
    /// 64-bit floating point
    Double,
    /// Signed integer
    Int,
    /// Reference to an opaque heap object
    Obj,
    /// Reference to a string object
    Str,
}

/// Runtime value held by every constant, register and stack slot.
///
/// Primitives are stored inline. The two heap-reference variants hold a
/// shared handle: cloning a `Value` duplicates the handle, never the object,
/// and dropping a `Value` never frees an object someone else still refers to.
///
/// `Obj` is the generic reference tag and is rendered opaquely. `Str` is the
/// fast path for the one object kind the runtime inspects directly.
#[derive(Clone)]
pub enum Value {
    /// Boolean
    Bool(bool),

    /// 64-bit floating point
    Double(f64),

    /// Signed integer
    Int(i64),

    /// Generic heap object reference
    Obj(ObjRef),

    /// String object reference
    Str(StrRef),
}

impl Value {
    /// The tag of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Bool(_) => ValueType::Bool,
            Value::Double(_) => ValueType::Double,
            Value::Int(_) => ValueType::Int,
            Value::Obj(_) => ValueType::Obj,
            Value::Str(_) => ValueType::Str,
        }
    }

    /// Whether two values refer to the same heap object.
    ///
    /// Primitive values never share a referent, so this is `false` whenever
    /// either side is not a reference.
    pub fn same_ref(a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Obj(a), Value::Obj(b)) => Arc::ptr_eq(a, b),
            (Value::Str(a), Value::Str(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}
