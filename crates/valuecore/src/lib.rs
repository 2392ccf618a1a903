//! # valuecore
//!
//! Value representation and growable value storage for a bytecode runtime.
//!
//! Every constant, register and stack slot holds a [`Value`]: a closed,
//! tagged union over booleans, integers, doubles and references to heap
//! objects. Sequences of values (constant pools, operand stacks, locals)
//! live in a [`ValueArray`], which grows by doubling.
//!
//! ## Ownership
//!
//! - A `Value` owns its primitive payload and a *handle* to any heap object.
//! - A `ValueArray` owns its slots, not the objects they refer to.
//! - Heap objects are allocated through an [`Alloc`] implementation chosen by
//!   the caller, which also decides when they are released.
//!
//! The interpreter loop, the compiler and any collector are out of scope and
//! consume this crate as a plain data-structure API.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod config;
pub mod constants;
pub mod error;
pub mod heap;
pub mod value;

// Re-export main types
pub use array::{ArrayStats, ValueArray};
pub use config::{grow_capacity, ArrayConfig, GrowthPolicy};
pub use constants::{ConstantPool, MAX_CONSTANTS};
pub use error::{Result, ValueError};
pub use heap::{Alloc, Heap};
pub use value::{
    HeapObject, ObjRef, Object, ObjectHeader, ObjectKind, StrRef, StringObject, Value, ValueType,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
