//! Constant pool for compiled chunks

use std::fmt;

use crate::array::ValueArray;
use crate::config::ArrayConfig;
use crate::error::{Result, ValueError};
use crate::value::Value;

/// Constants addressable by a one-byte operand.
pub const MAX_CONSTANTS: usize = u8::MAX as usize + 1;

/// Literal table for a chunk of bytecode.
///
/// Constants are addressed by the index returned from [`ConstantPool::add`],
/// which always fits in a `u8`.
///
/// # Example
///
/// ```
/// use valuecore::{ConstantPool, Value};
///
/// let mut pool = ConstantPool::new();
/// let index = pool.add(Value::Double(1.5)).unwrap();
/// assert_eq!(index, 0);
/// assert_eq!(pool.get(index).unwrap().as_double(), Some(1.5));
/// ```
#[derive(Debug, Clone)]
pub struct ConstantPool {
    values: ValueArray,
    max: usize,
}

impl Default for ConstantPool {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstantPool {
    /// Create an empty pool holding at most [`MAX_CONSTANTS`] values.
    pub fn new() -> Self {
        Self::with_config(ArrayConfig::default())
    }

    /// Create an empty pool whose storage uses the given config.
    ///
    /// The pool's own limit is [`MAX_CONSTANTS`]; a smaller
    /// `max_capacity` in `config` makes the storage fail first.
    pub fn with_config(config: ArrayConfig) -> Self {
        Self {
            values: ValueArray::with_config(config),
            max: MAX_CONSTANTS,
        }
    }

    /// Add a constant and return its index.
    ///
    /// # Errors
    ///
    /// Returns `ConstantPoolFull` once [`MAX_CONSTANTS`] constants exist, or
    /// `OutOfMemory` if the storage cannot grow.
    pub fn add(&mut self, value: Value) -> Result<u8> {
        if self.values.len() >= self.max {
            return Err(ValueError::ConstantPoolFull { max: self.max });
        }
        let index = self.values.push(value)?;
        u8::try_from(index).map_err(|_| ValueError::ConstantPoolFull { max: self.max })
    }

    /// Get the constant at `index`.
    pub fn get(&self, index: u8) -> Result<&Value> {
        self.values.get(index as usize)
    }

    /// Number of constants.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The underlying value array.
    pub fn values(&self) -> &ValueArray {
        &self.values
    }

    /// Render the constants as `[a, b, c]`.
    pub fn dump(&self) -> String {
        self.values.dump()
    }
}

impl fmt::Display for ConstantPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.values, f)
    }
}
