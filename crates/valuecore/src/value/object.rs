//! Heap object model: a common header and the string object

/// Kind discriminant stored in every object header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// Byte string
    String,
}

/// Header shared by all heap-allocated payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectHeader {
    /// What kind of object follows the header
    pub kind: ObjectKind,
}

impl ObjectHeader {
    /// Create a header for the given kind.
    pub fn new(kind: ObjectKind) -> Self {
        Self { kind }
    }
}

/// Common interface of heap objects.
pub trait HeapObject {
    /// The object's header
    fn header(&self) -> &ObjectHeader;

    /// The object's kind, read from its header
    fn kind(&self) -> ObjectKind {
        self.header().kind
    }

    /// Number of payload bytes this object accounts for
    fn size_of(&self) -> usize;
}

/// An immutable byte string owned exclusively by this object.
///
/// The length is computed once at construction and cached. The buffer holds
/// exactly `length` bytes; there is no terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringObject {
    header: ObjectHeader,
    values: Box<[u8]>,
    length: usize,
}

impl StringObject {
    /// Create a string object, taking ownership of `values`.
    pub fn new(values: Vec<u8>) -> Self {
        let values = values.into_boxed_slice();
        let length = values.len();
        Self {
            header: ObjectHeader::new(ObjectKind::String),
            values,
            length,
        }
    }

    /// The cached length in bytes.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the string has no bytes.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.values
    }

    /// The contents as `&str`, if they are valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.values).ok()
    }
}

impl HeapObject for StringObject {
    fn header(&self) -> &ObjectHeader {
        &self.header
    }

    fn size_of(&self) -> usize {
        self.length
    }
}

impl From<&str> for StringObject {
    fn from(s: &str) -> Self {
        StringObject::new(s.as_bytes().to_vec())
    }
}

impl From<String> for StringObject {
    fn from(s: String) -> Self {
        StringObject::new(s.into_bytes())
    }
}

/// A generic heap object, referenced by the `Obj` value tag.
///
/// New object kinds are added here without touching the value tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    /// A string object
    String(StringObject),
}

impl HeapObject for Object {
    fn header(&self) -> &ObjectHeader {
        match self {
            Object::String(s) => s.header(),
        }
    }

    fn size_of(&self) -> usize {
        match self {
            Object::String(s) => s.size_of(),
        }
    }
}
