//! Error types for value storage

use thiserror::Error;

use crate::value::Value;

/// Main error type for value and value-array operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Memory could not be obtained for growth or object creation
    #[error("Out of memory: requested {requested} {unit}{}", limit_suffix(.limit))]
    OutOfMemory {
        /// Amount that was requested
        requested: usize,
        /// What `requested` counts ("slots" or "bytes")
        unit: &'static str,
        /// Configured limit that was hit, if any
        limit: Option<usize>,
    },

    /// Access past the logically valid elements of an array
    #[error("Index out of bounds: index {index} but length is {len}")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Number of valid elements
        len: usize,
    },

    /// `create` was asked for more leading elements than slots
    #[error("Invalid capacity: count {count} exceeds capacity {capacity}")]
    InvalidCapacity {
        /// Requested element count
        count: usize,
        /// Requested slot count
        capacity: usize,
    },

    /// Pop or peek on an empty array
    #[error("Stack underflow")]
    StackUnderflow,

    /// The constant pool index space is exhausted
    #[error("Constant pool full: at most {max} constants")]
    ConstantPoolFull {
        /// Maximum number of constants
        max: usize,
    },
}

fn limit_suffix(limit: &Option<usize>) -> String {
    match limit {
        Some(limit) => format!(" (limit {})", limit),
        None => String::new(),
    }
}

/// Result type alias for value operations
pub type Result<T> = std::result::Result<T, ValueError>;

/// Get a human-readable type name for a value.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Bool(_) => "bool",
        Value::Double(_) => "double",
        Value::Int(_) => "int",
        Value::Obj(_) => "object",
        Value::Str(_) => "string",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_memory_message() {
        let err = ValueError::OutOfMemory {
            requested: 16,
            unit: "slots",
            limit: Some(8),
        };
        assert_eq!(
            err.to_string(),
            "Out of memory: requested 16 slots (limit 8)"
        );

        let err = ValueError::OutOfMemory {
            requested: usize::MAX,
            unit: "slots",
            limit: None,
        };
        assert_eq!(
            err.to_string(),
            format!("Out of memory: requested {} slots", usize::MAX)
        );
    }

    #[test]
    fn test_index_message() {
        let err = ValueError::IndexOutOfBounds { index: 5, len: 3 };
        assert_eq!(err.to_string(), "Index out of bounds: index 5 but length is 3");
    }

    #[test]
    fn test_type_name() {
        assert_eq!(type_name(&Value::Bool(true)), "bool");
        assert_eq!(type_name(&Value::Double(1.0)), "double");
        assert_eq!(type_name(&Value::Int(1)), "int");
        assert_eq!(type_name(&Value::string("hi")), "string");
    }
}
