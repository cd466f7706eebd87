//! Runtime type inspection for dynamic values
//!
//! Three pieces, leaves first:
//!
//! ```text
//! classify            ← lowercase type tag from a value's runtime class
//!     │
//! TypeRegistry        ← named predicates (object, integer, nil, ...), extensible,
//!     │                 with a negated view and independent private instances
//! deep_equal          ← recursive equality by value, registered as `equal`
//! ```
//!
//! ```
//! use octofhir_typeis::{Predicate, Value, default_registry, instance, is};
//!
//! assert_eq!(is(&Value::array([1, 2, 3])), "array");
//! assert!(default_registry().integer(&Value::from(-0.0)));
//!
//! let mut local = instance();
//! local.define("short", Predicate::unary(|v| v.as_str().is_some_and(|s| s.len() < 4))).unwrap();
//! assert!(local.not().test("short", &[&Value::from("longer")]).unwrap());
//! ```

#![warn(missing_docs)]

pub mod classify;
pub mod equality;
pub mod error;
pub mod model;
pub mod registry;

// Re-export main types
pub use classify::{classifier, classify, what};
pub use equality::{deep_equal, strict_equal};
pub use error::{IsError, Result};
pub use model::{Function, HostObject, Value};
pub use registry::{
    Negation, Predicate, RESERVED_NAME, RegistryConfig, TypeRegistry, default_registry, define,
    instance,
};

/// Classify a value; the root entry point
///
/// Same as [`classify`]; kept under the short name callers reach for first.
pub fn is(value: &Value) -> String {
    classify(value)
}
