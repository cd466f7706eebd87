//! Dynamic value model
//!
//! This module provides the value space that classification, the predicate
//! registry and deep equality operate on.

pub mod function;
pub mod host;
pub mod type_coercion;
pub mod value;

pub use function::{Function, NativeFn};
pub use host::HostObject;
pub use type_coercion::string_to_number;
pub use value::{Array, Object, Value};

pub(crate) use value::UNDEFINED;
