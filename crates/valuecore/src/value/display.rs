//! Display and Debug implementations for Value

use std::fmt;

use super::*;

/// Text rendered for the generic object tag.
pub(crate) const OBJECT_PLACEHOLDER: &str = "OBJECT";

impl Value {
    /// Render this value for diagnostics and tracing.
    ///
    /// | tag    | rendering                          |
    /// |--------|------------------------------------|
    /// | Bool   | `1` / `0`                          |
    /// | Double | fixed point, 6 fractional digits   |
    /// | Int    | signed decimal                     |
    /// | Obj    | `OBJECT`                           |
    /// | Str    | the string contents, unquoted      |
    ///
    /// The result is a fresh allocation sized to its content. Invalid UTF-8
    /// in a string is replaced; use [`Value::to_display_bytes`] for the exact
    /// bytes.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// Render this value as bytes, copying string contents verbatim.
    pub fn to_display_bytes(&self) -> Vec<u8> {
        match self {
            Value::Str(s) => s.as_bytes().to_vec(),
            _ => self.to_string().into_bytes(),
        }
    }
}

fn write_double(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        write!(f, "nan")
    } else if n.is_infinite() {
        write!(f, "{}", if n < 0.0 { "-inf" } else { "inf" })
    } else {
        write!(f, "{:.6}", n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", *b as u8),
            Value::Double(n) => write_double(f, *n),
            Value::Int(n) => write!(f, "{}", n),
            Value::Obj(_) => write!(f, "{}", OBJECT_PLACEHOLDER),
            Value::Str(s) => write!(f, "{}", String::from_utf8_lossy(s.as_bytes())),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Double(n) => write!(f, "{:?}", n),
            Value::Int(n) => write!(f, "{}", n),
            Value::Obj(obj) => match obj.kind() {
                ObjectKind::String => write!(f, "<object string>"),
            },
            Value::Str(s) => write!(f, "{:?}", String::from_utf8_lossy(s.as_bytes())),
        }
    }
}
