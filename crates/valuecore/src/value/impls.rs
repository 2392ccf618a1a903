//! Value trait implementations: constructors, predicates, extractors, From traits

use std::sync::Arc;

use super::*;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create a boolean value
    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    /// Create an integer value
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a double value
    pub fn double(n: f64) -> Self {
        Value::Double(n)
    }

    /// Create a generic object reference, wrapping a new heap object
    pub fn object(obj: Object) -> Self {
        Value::Obj(Arc::new(obj))
    }

    /// Create a string value from owned bytes.
    ///
    /// The bytes move into a newly allocated string object whose length is
    /// computed here, once.
    pub fn from_string(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Str(Arc::new(StringObject::new(bytes.into())))
    }

    /// Create a string value from text
    pub fn string(s: impl Into<String>) -> Self {
        let s: String = s.into();
        Value::from_string(s.into_bytes())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════
    /// Check if value is boolean
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Check if value is an integer
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Check if value is a double
    pub fn is_double(&self) -> bool {
        matches!(self, Value::Double(_))
    }

    /// Check if value is numeric (integer or double)
    pub fn is_number(&self) -> bool {
        self.is_int() || self.is_double()
    }

    /// Check if value is a generic object reference
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Obj(_))
    }

    /// Check if value is a string
    pub fn is_string(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Check if value refers to a heap object (either reference tag)
    pub fn is_heap(&self) -> bool {
        self.is_object() || self.is_string()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (return Option for safe access)
    // ═══════════════════════════════════════════════════════════════════
    /// Extract boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract integer value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract double value
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract the generic object handle
    pub fn as_object(&self) -> Option<&ObjRef> {
        match self {
            Value::Obj(obj) => Some(obj),
            _ => None,
        }
    }

    /// Extract the string object handle
    pub fn as_string(&self) -> Option<&StrRef> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Extract the raw bytes of a string value
    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.as_string().map(|s| s.as_bytes())
    }

    /// Extract a string value as `&str` (None if not a string or not UTF-8)
    pub fn as_str(&self) -> Option<&str> {
        self.as_string().and_then(|s| s.as_str())
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Trait Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<StringObject> for Value {
    fn from(s: StringObject) -> Self {
        Value::Str(Arc::new(s))
    }
}

impl From<StrRef> for Value {
    fn from(s: StrRef) -> Self {
        Value::Str(s)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::object(obj)
    }
}
