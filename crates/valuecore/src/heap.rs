//! Caller-supplied allocation of heap objects
//!
//! Values only hold handles to heap objects. Whoever allocates an object
//! decides when it is released; arrays and values never free objects on
//! their own.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Result, ValueError};
use crate::value::{HeapObject, Object, ObjRef, StrRef, StringObject, Value};

/// An allocator for heap objects.
pub trait Alloc {
    /// Allocate a string object that takes ownership of `bytes`.
    fn alloc_string(&mut self, bytes: Vec<u8>) -> Result<StrRef>;

    /// Allocate a generic object.
    fn alloc_object(&mut self, obj: Object) -> Result<ObjRef>;

    /// Release the allocator's handle to a string.
    ///
    /// Other holders of the same handle keep the object alive. Returns
    /// `false`, releasing nothing, if the string is not a live allocation
    /// of this allocator (already freed, or allocated elsewhere).
    fn free_string(&mut self, s: StrRef) -> bool;

    /// Release the allocator's handle to a generic object.
    ///
    /// Returns `false` if the object is not a live allocation of this
    /// allocator.
    fn free_object(&mut self, obj: ObjRef) -> bool;

    /// Bytes currently accounted to live allocations.
    fn allocated_bytes(&self) -> usize;
}

/// Heap with optional byte budget.
///
/// # Example
///
/// ```
/// use valuecore::{Alloc, Heap, Value};
///
/// let mut heap = Heap::with_limit(8);
/// let s = heap.alloc_string(b"hello".to_vec()).unwrap();
/// assert_eq!(heap.allocated_bytes(), 5);
///
/// // Over budget
/// assert!(heap.alloc_string(b"world".to_vec()).is_err());
///
/// let v = Value::from(s.clone());
/// assert!(heap.free_string(s.clone()));
/// assert_eq!(heap.allocated_bytes(), 0);
/// assert_eq!(v.as_str(), Some("hello"));
///
/// // Already released
/// assert!(!heap.free_string(s));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Heap {
    limit: Option<usize>,
    allocated: usize,
    /// Live allocations: object address -> accounted bytes
    live: HashMap<usize, usize>,
    trace: bool,
}

impl Heap {
    /// Create an unbounded heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a heap that refuses allocations beyond `limit` bytes.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Default::default()
        }
    }

    /// Enable or disable tracing.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// The configured byte budget, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Number of live objects.
    pub fn object_count(&self) -> usize {
        self.live.len()
    }

    /// Allocate a string and wrap it in a `Str` value.
    pub fn alloc_string_value(&mut self, bytes: Vec<u8>) -> Result<Value> {
        self.alloc_string(bytes).map(Value::Str)
    }

    fn reserve(&mut self, size: usize) -> Result<()> {
        let total = self
            .allocated
            .checked_add(size)
            .ok_or(ValueError::OutOfMemory {
                requested: size,
                unit: "bytes",
                limit: self.limit,
            })?;
        if let Some(limit) = self.limit {
            if total > limit {
                return Err(ValueError::OutOfMemory {
                    requested: size,
                    unit: "bytes",
                    limit: Some(limit),
                });
            }
        }
        self.allocated = total;
        Ok(())
    }

    fn track(&mut self, addr: usize, size: usize) {
        // A previous entry at this address belongs to an object that was
        // dropped everywhere without being freed here.
        if let Some(stale) = self.live.insert(addr, size) {
            self.allocated -= stale;
        }
    }

    fn release(&mut self, addr: usize) -> Option<usize> {
        let size = self.live.remove(&addr)?;
        self.allocated -= size;
        Some(size)
    }
}

fn addr_of<T>(handle: &Arc<T>) -> usize {
    Arc::as_ptr(handle) as usize
}

impl Alloc for Heap {
    fn alloc_string(&mut self, bytes: Vec<u8>) -> Result<StrRef> {
        let size = bytes.len();
        self.reserve(size)?;
        let s = Arc::new(StringObject::new(bytes));
        self.track(addr_of(&s), size);
        if self.trace {
            eprintln!("[valuecore] heap alloc string ({} bytes)", size);
        }
        Ok(s)
    }

    fn alloc_object(&mut self, obj: Object) -> Result<ObjRef> {
        let size = obj.size_of();
        self.reserve(size)?;
        let obj = Arc::new(obj);
        self.track(addr_of(&obj), size);
        if self.trace {
            eprintln!("[valuecore] heap alloc object ({} bytes)", size);
        }
        Ok(obj)
    }

    fn free_string(&mut self, s: StrRef) -> bool {
        let released = self.release(addr_of(&s));
        if self.trace {
            match released {
                Some(size) => eprintln!("[valuecore] heap free string ({} bytes)", size),
                None => eprintln!("[valuecore] heap free string ignored (not live)"),
            }
        }
        released.is_some()
    }

    fn free_object(&mut self, obj: ObjRef) -> bool {
        let released = self.release(addr_of(&obj));
        if self.trace {
            match released {
                Some(size) => eprintln!("[valuecore] heap free object ({} bytes)", size),
                None => eprintln!("[valuecore] heap free object ignored (not live)"),
            }
        }
        released.is_some()
    }

    fn allocated_bytes(&self) -> usize {
        self.allocated
    }
}
