//! Growable, contiguous storage for values
//!
//! A [`ValueArray`] backs constant pools, operand stacks and local tables.
//! It owns its value slots but not the heap objects those slots refer to:
//! disposing an array drops its handles and nothing else.

use std::fmt;

use crate::config::ArrayConfig;
use crate::error::{Result, ValueError};
use crate::value::Value;

/// Value stored in slots reserved by [`ValueArray::create`] until the caller
/// sets them.
pub const ZEROED: Value = Value::Int(0);

/// Growth counters for an array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrayStats {
    /// Number of times the backing buffer was reallocated
    pub grows: usize,

    /// Total elements moved into a new buffer across all growths
    pub copied: usize,
}

/// An owned, growable sequence of values.
///
/// `capacity` counts allocated slots and `len` counts valid ones; slots past
/// `len` are never readable.
///
/// # Example
///
/// ```
/// use valuecore::{Value, ValueArray};
///
/// let mut constants = ValueArray::new();
/// assert_eq!(constants.push(Value::Int(1)).unwrap(), 0);
/// assert_eq!(constants.push(Value::string("two")).unwrap(), 1);
///
/// assert_eq!(constants.len(), 2);
/// assert_eq!(constants.capacity(), 8);
/// assert_eq!(constants.dump(), "[1, two]");
///
/// constants.dispose();
/// ```
#[derive(Debug, Default)]
pub struct ValueArray {
    values: Vec<Value>,
    capacity: usize,
    config: ArrayConfig,
    stats: ArrayStats,
}

impl ValueArray {
    /// Create an empty array with no slots allocated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty array with no slots allocated and the given config.
    pub fn with_config(config: ArrayConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Create an array with `capacity` slots, the first `count` of which are
    /// reserved and hold [`ZEROED`] until set.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCapacity` if `count > capacity`, and `OutOfMemory` if
    /// the slots cannot be allocated.
    pub fn create(count: usize, capacity: usize) -> Result<Self> {
        Self::create_with_config(count, capacity, ArrayConfig::default())
    }

    /// Like [`ValueArray::create`], with an explicit config.
    pub fn create_with_config(count: usize, capacity: usize, config: ArrayConfig) -> Result<Self> {
        if count > capacity {
            return Err(ValueError::InvalidCapacity { count, capacity });
        }
        if let Some(max) = config.max_capacity {
            if capacity > max {
                return Err(out_of_memory(capacity, Some(max)));
            }
        }

        let mut values = Vec::new();
        values
            .try_reserve_exact(capacity)
            .map_err(|_| out_of_memory(capacity, config.max_capacity))?;
        values.resize(count, ZEROED);

        if config.trace {
            eprintln!(
                "[valuecore] create(count = {}, capacity = {})",
                count, capacity
            );
        }

        Ok(Self {
            values,
            capacity,
            config,
            stats: ArrayStats::default(),
        })
    }

    // ═══════════════════════════════════════════════════════════════════
    // Append and Growth
    // ═══════════════════════════════════════════════════════════════════

    /// Append a value at index `len`, growing first if the array is full.
    ///
    /// Returns the index the value was written to.
    ///
    /// # Errors
    ///
    /// Returns `OutOfMemory` if the array is full and cannot grow. The array
    /// is unchanged in that case.
    pub fn push(&mut self, value: Value) -> Result<usize> {
        let index = self.values.len();
        if self.capacity < index + 1 {
            self.grow()?;
        }

        if self.config.trace {
            eprintln!("[valuecore] write(index = {}, value = {})", index, value);
        }
        self.values.push(value);
        Ok(index)
    }

    fn grow(&mut self) -> Result<()> {
        let old = self.capacity;
        let limit = self.config.max_capacity;

        let mut new = self
            .config
            .growth
            .next_capacity(old)
            .ok_or_else(|| out_of_memory(usize::MAX, limit))?;
        if let Some(max) = limit {
            if old >= max {
                return Err(out_of_memory(new, limit));
            }
            new = new.min(max);
        }

        let additional = new - self.values.len();
        self.values
            .try_reserve_exact(additional)
            .map_err(|_| out_of_memory(new, limit))?;

        self.stats.grows += 1;
        self.stats.copied += self.values.len();
        self.capacity = new;

        if self.config.trace {
            eprintln!("[valuecore] grow(capacity = {} -> {})", old, new);
        }
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Indexed Access
    // ═══════════════════════════════════════════════════════════════════

    /// Get the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&Value> {
        self.values.get(index).ok_or(ValueError::IndexOutOfBounds {
            index,
            len: self.values.len(),
        })
    }

    /// Overwrite the value at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index >= len`.
    pub fn set(&mut self, index: usize, value: Value) -> Result<Value> {
        let len = self.values.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or(ValueError::IndexOutOfBounds { index, len })?;
        Ok(std::mem::replace(slot, value))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Stack Operations
    // ═══════════════════════════════════════════════════════════════════

    /// Remove and return the last value. Capacity is kept.
    pub fn pop(&mut self) -> Result<Value> {
        self.values.pop().ok_or(ValueError::StackUnderflow)
    }

    /// The last value, without removing it.
    pub fn peek(&self) -> Result<&Value> {
        self.values.last().ok_or(ValueError::StackUnderflow)
    }

    /// Remove all values. Capacity is kept.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    // ═══════════════════════════════════════════════════════════════════
    // Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Number of valid elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no valid elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The valid elements, in insertion order.
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    /// Iterate over the valid elements.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Growth counters.
    pub fn stats(&self) -> ArrayStats {
        self.stats
    }

    /// The array's configuration.
    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// Render the valid elements as `[a, b, c]`.
    pub fn dump(&self) -> String {
        self.to_string()
    }

    /// Release the backing buffer.
    ///
    /// Heap objects referenced by the array's values are not freed; only the
    /// array's handles to them are dropped.
    pub fn dispose(self) {
        if self.config.trace {
            eprintln!(
                "[valuecore] dispose(count = {}, capacity = {})",
                self.values.len(),
                self.capacity
            );
        }
    }
}

// The clone owns as many slots as the original reports.
impl Clone for ValueArray {
    fn clone(&self) -> Self {
        let mut values = Vec::with_capacity(self.capacity);
        values.extend_from_slice(&self.values);
        Self {
            values,
            capacity: self.capacity,
            config: self.config.clone(),
            stats: self.stats,
        }
    }
}

fn out_of_memory(requested: usize, limit: Option<usize>) -> ValueError {
    ValueError::OutOfMemory {
        requested,
        unit: "slots",
        limit,
    }
}

impl fmt::Display for ValueArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl<'a> IntoIterator for &'a ValueArray {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GrowthPolicy;

    #[test]
    fn test_new_is_empty() {
        let array = ValueArray::new();
        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), 0);
        assert!(array.is_empty());
    }

    #[test]
    fn test_first_push_allocates_minimum_block() {
        let mut array = ValueArray::new();
        array.push(Value::Int(1)).unwrap();
        assert_eq!(array.capacity(), 8);
        assert_eq!(array.stats(), ArrayStats { grows: 1, copied: 0 });
    }

    #[test]
    fn test_push_returns_index() {
        let mut array = ValueArray::new();
        for i in 0..20 {
            assert_eq!(array.push(Value::Int(i)).unwrap(), i as usize);
        }
    }

    #[test]
    fn test_presized_push_after_reserved() {
        let mut array = ValueArray::create(3, 10).unwrap();
        assert_eq!(array.len(), 3);
        assert_eq!(array.capacity(), 10);

        let index = array.push(Value::Bool(true)).unwrap();
        assert_eq!(index, 3);
        assert_eq!(array.get(3).unwrap().as_bool(), Some(true));
        assert_eq!(array.get(0).unwrap().as_int(), Some(0));
        // No growth needed
        assert_eq!(array.stats().grows, 0);
    }

    #[test]
    fn test_create_count_exceeds_capacity() {
        let err = ValueArray::create(4, 2).unwrap_err();
        assert_eq!(
            err,
            ValueError::InvalidCapacity {
                count: 4,
                capacity: 2
            }
        );
    }

    #[test]
    fn test_full_presized_array_grows_by_doubling() {
        let mut array = ValueArray::create(10, 10).unwrap();
        array.push(Value::Int(0)).unwrap();
        assert_eq!(array.capacity(), 20);
        assert_eq!(array.stats().copied, 10);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let array = ValueArray::create(0, 16).unwrap();
        assert_eq!(
            array.get(0).unwrap_err(),
            ValueError::IndexOutOfBounds { index: 0, len: 0 }
        );
    }

    #[test]
    fn test_set() {
        let mut array = ValueArray::create(2, 2).unwrap();
        let old = array.set(1, Value::Int(9)).unwrap();
        assert_eq!(old.as_int(), Some(0));
        assert_eq!(array.get(1).unwrap().as_int(), Some(9));
        assert!(array.set(2, Value::Int(1)).is_err());
    }

    #[test]
    fn test_pop_and_peek() {
        let mut array = ValueArray::new();
        assert_eq!(array.pop().unwrap_err(), ValueError::StackUnderflow);
        assert_eq!(array.peek().unwrap_err(), ValueError::StackUnderflow);

        array.push(Value::Int(1)).unwrap();
        array.push(Value::Int(2)).unwrap();
        assert_eq!(array.peek().unwrap().as_int(), Some(2));
        assert_eq!(array.pop().unwrap().as_int(), Some(2));
        assert_eq!(array.len(), 1);
        assert_eq!(array.capacity(), 8);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut array = ValueArray::new();
        for i in 0..9 {
            array.push(Value::Int(i)).unwrap();
        }
        array.clear();
        assert!(array.is_empty());
        assert_eq!(array.capacity(), 16);
    }

    #[test]
    fn test_max_capacity_clamps_then_fails() {
        let config = ArrayConfig::new().with_max_capacity(12);
        let mut array = ValueArray::with_config(config);
        for i in 0..12 {
            array.push(Value::Int(i)).unwrap();
        }
        assert_eq!(array.capacity(), 12);

        let err = array.push(Value::Int(12)).unwrap_err();
        assert!(matches!(err, ValueError::OutOfMemory { limit: Some(12), .. }));
        assert_eq!(array.len(), 12);
    }

    #[test]
    fn test_traced_failed_push_writes_nothing() {
        let config = ArrayConfig::new().with_max_capacity(1).with_trace(true);
        let mut array = ValueArray::with_config(config);
        array.push(Value::Int(0)).unwrap();
        assert!(array.push(Value::Int(1)).is_err());
        assert_eq!(array.dump(), "[0]");
        assert_eq!(array.stats().grows, 1);
    }

    #[test]
    fn test_create_over_max_capacity() {
        let config = ArrayConfig::new().with_max_capacity(4);
        let err = ValueArray::create_with_config(0, 5, config).unwrap_err();
        assert!(matches!(err, ValueError::OutOfMemory { requested: 5, .. }));
    }

    #[test]
    fn test_custom_growth_policy() {
        let config = ArrayConfig::new().with_growth(GrowthPolicy::new(2, 3));
        let mut array = ValueArray::with_config(config);
        let mut capacities = Vec::new();
        for i in 0..20 {
            array.push(Value::Int(i)).unwrap();
            if capacities.last() != Some(&array.capacity()) {
                capacities.push(array.capacity());
            }
        }
        assert_eq!(capacities, vec![2, 6, 18, 54]);
    }

    #[test]
    fn test_dump() {
        let mut array = ValueArray::new();
        assert_eq!(array.dump(), "[]");
        array.push(Value::Bool(true)).unwrap();
        array.push(Value::Double(3.5)).unwrap();
        array.push(Value::Int(-42)).unwrap();
        array.push(Value::string("hi")).unwrap();
        assert_eq!(array.dump(), "[1, 3.500000, -42, hi]");
    }

    #[test]
    fn test_dump_skips_unused_slots() {
        let mut array = ValueArray::create(0, 64).unwrap();
        array.push(Value::Int(1)).unwrap();
        assert_eq!(array.dump(), "[1]");
    }

    #[test]
    fn test_iter_in_push_order() {
        let mut array = ValueArray::new();
        for i in 0..5 {
            array.push(Value::Int(i)).unwrap();
        }
        let ints: Vec<i64> = array.iter().filter_map(Value::as_int).collect();
        assert_eq!(ints, vec![0, 1, 2, 3, 4]);

        let mut seen = 0;
        for _ in &array {
            seen += 1;
        }
        assert_eq!(seen, 5);
    }

    #[test]
    fn test_clone_owns_reported_capacity() {
        let array = ValueArray::create(0, 64).unwrap();
        let copy = array.clone();
        assert_eq!(copy.capacity(), 64);
        assert!(copy.values.capacity() >= copy.capacity());
    }

    #[test]
    fn test_clone_of_presized_array_grows_on_schedule() {
        let mut array = ValueArray::create(3, 4).unwrap();
        array.set(0, Value::string("shared")).unwrap();

        let mut copy = array.clone();
        assert_eq!(copy.len(), 3);
        assert!(Value::same_ref(copy.get(0).unwrap(), array.get(0).unwrap()));

        copy.push(Value::Int(3)).unwrap();
        assert_eq!(copy.stats().grows, 0);
        copy.push(Value::Int(4)).unwrap();
        assert_eq!(copy.capacity(), 8);
        assert_eq!(copy.stats(), ArrayStats { grows: 1, copied: 4 });
        assert!(copy.values.capacity() >= copy.capacity());

        // Original untouched
        assert_eq!(array.len(), 3);
        assert_eq!(array.capacity(), 4);
    }

    #[test]
    fn test_dispose_is_shallow() {
        let shared = Value::string("interned");
        let mut a = ValueArray::new();
        let mut b = ValueArray::new();
        a.push(shared.clone()).unwrap();
        b.push(shared.clone()).unwrap();

        a.dispose();
        assert_eq!(b.get(0).unwrap().as_str(), Some("interned"));
        b.dispose();
        assert_eq!(shared.as_str(), Some("interned"));
    }
}
